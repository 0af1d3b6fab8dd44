// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::Crawl;
use crate::domain::repositories::order_repository::RepositoryError;
use async_trait::async_trait;

/// 活动条目仓库特质
///
/// 定义活动条目数据访问接口，自然唯一键为 `eventbrite_id`。
#[async_trait]
pub trait CrawlRepository: Send + Sync {
    /// 按 `eventbrite_id` 原子 upsert 一条活动条目
    async fn upsert(&self, crawl: &Crawl) -> Result<(), RepositoryError>;
    /// 插入一条活动条目
    async fn insert(&self, crawl: &Crawl) -> Result<(), RepositoryError>;
    /// 按 `eventbrite_id` 更新已有条目的 webhook 派生列
    async fn update_by_eventbrite_id(&self, crawl: &Crawl) -> Result<(), RepositoryError>;
    /// 按 `eventbrite_id` 查找条目
    async fn find_by_eventbrite_id(
        &self,
        eventbrite_id: &str,
    ) -> Result<Option<Crawl>, RepositoryError>;
}
