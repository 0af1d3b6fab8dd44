// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::order_repository::OrderRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::infrastructure::eventbrite::EventbriteClient;
use crate::presentation::handlers::eventbrite_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 对仓库和存储保持泛型，集成测试用内存实现替换真实后端。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn app<O, C, S>(
    settings: Arc<Settings>,
    eventbrite: EventbriteClient,
    order_repo: Arc<O>,
    crawl_repo: Arc<C>,
    storage: Arc<S>,
) -> Router
where
    O: OrderRepository + 'static,
    C: CrawlRepository + 'static,
    S: StorageRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let webhook_routes = Router::new().route(
        "/api/webhooks/eventbrite",
        post(eventbrite_handler::handle_eventbrite_webhook::<O, C, S>),
    );

    Router::new()
        .merge(public_routes)
        .merge(webhook_routes)
        .layer(Extension(settings))
        .layer(Extension(eventbrite))
        .layer(Extension(order_repo))
        .layer(Extension(crawl_repo))
        .layer(Extension(storage))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
