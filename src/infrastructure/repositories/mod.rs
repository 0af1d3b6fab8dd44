// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 领域仓库接口的 sea-orm 实现。后端相关的错误码在这里翻译成
/// `RepositoryError` 的显式分类，领域层的回退逻辑不感知具体引擎。
pub mod crawl_repo_impl;
pub mod order_repo_impl;

use crate::domain::repositories::order_repository::RepositoryError;
use sea_orm::{DbErr, SqlErr};

/// 将数据库错误归类为仓库错误
///
/// 唯一约束冲突来自 sea-orm 的跨后端分类；"ON CONFLICT 缺少匹配
/// 唯一约束"（Postgres 42P10）没有对应的 `SqlErr` 变体，按错误码
/// 和报文识别。
pub(crate) fn classify_db_err(err: DbErr) -> RepositoryError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return RepositoryError::DuplicateKey;
    }

    let message = err.to_string();
    if message.contains("42P10")
        || message
            .to_lowercase()
            .contains("no unique or exclusion constraint")
    {
        return RepositoryError::MissingUniqueConstraint;
    }

    RepositoryError::Database(err)
}
