// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::order::Order;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
///
/// 后端相关的错误码在基础设施层被归类为显式变体，领域层的
/// upsert 回退逻辑只依赖这里的分类，不关心具体数据库引擎。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一键冲突（并发插入竞争）
    #[error("Duplicate key")]
    DuplicateKey,
    /// upsert 所需的唯一约束尚未建立
    #[error("No matching unique constraint for upsert")]
    MissingUniqueConstraint,
}

/// 订单仓库特质
///
/// 定义票务订单数据访问接口，自然唯一键为 `order_id`。
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// 按 `order_id` 原子 upsert 一条订单
    async fn upsert(&self, order: &Order) -> Result<(), RepositoryError>;
    /// 插入一条订单
    async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
    /// 按 `order_id` 更新已有订单
    async fn update_by_order_id(&self, order: &Order) -> Result<(), RepositoryError>;
    /// 按 `order_id` 查找订单
    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Order>, RepositoryError>;
}
