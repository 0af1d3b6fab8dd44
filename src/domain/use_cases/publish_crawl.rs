// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::Crawl;
use crate::domain::models::eventbrite::EventbriteEvent;
use crate::domain::models::payload::WebhookPayload;
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::order_repository::RepositoryError;
use crate::domain::use_cases::coalesce;
use crate::utils::slug;
use crate::utils::url_utils;
use std::sync::Arc;
use tracing::warn;

/// 活动发布用例
///
/// 以 `eventbrite_id` 为键持久化派生的活动条目，回退策略与订单
/// 入库一致：原子 upsert → 先查后写 → 插入竞争失败改走更新。
pub struct PublishCrawlUseCase<R: CrawlRepository> {
    repo: Arc<R>,
}

impl<R: CrawlRepository> PublishCrawlUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        let Some(eventbrite_id) = crawl.eventbrite_id.clone() else {
            return self.repo.insert(crawl).await;
        };

        match self.repo.upsert(crawl).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::MissingUniqueConstraint) => {
                warn!(
                    "crawls.eventbrite_id unique index missing, falling back to check-then-write"
                );
                if self
                    .repo
                    .find_by_eventbrite_id(&eventbrite_id)
                    .await?
                    .is_some()
                {
                    self.repo.update_by_eventbrite_id(crawl).await
                } else {
                    match self.repo.insert(crawl).await {
                        Err(RepositoryError::DuplicateKey) => {
                            self.repo.update_by_eventbrite_id(crawl).await
                        }
                        other => other,
                    }
                }
            }
            Err(e) => Err(e),
        }
    }
}

/// 由载荷和可空的上游活动详情派生条目记录
///
/// 首图在此保持为空，镜像结果由调用方在持久化前填入。营销列
/// 保持 NULL，由编辑维护。
pub fn build_crawl_record(payload: &WebhookPayload, details: Option<&EventbriteEvent>) -> Crawl {
    let resource = payload.resource.as_ref();
    let config = payload.config.as_ref();

    let mut crawl = Crawl::blank();

    crawl.eventbrite_id = coalesce([
        details.and_then(|d| d.id.clone()),
        payload.event_id.clone(),
        resource.and_then(|r| r.event_id.clone()),
        config.and_then(|c| c.event_id.clone()),
        url_utils::extract_id_from_url(payload.api_url.as_deref()),
    ]);
    crawl.name = coalesce([
        details.and_then(|d| d.name.as_ref()).and_then(|n| n.text.clone()),
        config.and_then(|c| c.event_name.clone()),
    ]);
    crawl.short_description = coalesce([
        details
            .and_then(|d| d.description.as_ref())
            .and_then(|t| t.text.clone()),
        details.and_then(|d| d.summary.clone()),
    ]);
    crawl.event_date_start = details.and_then(|d| d.start.as_ref()).and_then(|s| s.utc);
    crawl.event_date_end = details.and_then(|d| d.end.as_ref()).and_then(|e| e.utc);

    let start_local = details
        .and_then(|d| d.start.as_ref())
        .and_then(|s| s.local.as_deref());
    crawl.slug = crawl
        .name
        .as_deref()
        .map(|name| slug::slugify(name, start_local));

    crawl
}
