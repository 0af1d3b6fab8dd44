// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::Settings;
use crate::domain::models::payload::{WebhookAction, WebhookPayload};
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::order_repository::OrderRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::use_cases::ingest_order::{build_order_record, IngestOrderUseCase};
use crate::domain::use_cases::publish_crawl::{build_crawl_record, PublishCrawlUseCase};
use crate::infrastructure::eventbrite::EventbriteClient;
use crate::infrastructure::media;
use crate::presentation::errors::WebhookError;
use crate::utils::signature;
use axum::{body::Bytes, http::HeaderMap, Extension, Json};
use metrics::counter;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// 签名头名称
const SIGNATURE_HEADER: &str = "x-eventbrite-signature";

/// Webhook 响应体
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
}

/// Eventbrite Webhook 入口
///
/// 按固定顺序推进：体非空 → 签名 → 解析 → 动作白名单 → 补充查询 →
/// 派生 → 持久化。补充查询失败只降级数据，持久化失败返回 500 让
/// Eventbrite 重投。
pub async fn handle_eventbrite_webhook<O, C, S>(
    Extension(settings): Extension<Arc<Settings>>,
    Extension(eventbrite): Extension<EventbriteClient>,
    Extension(order_repo): Extension<Arc<O>>,
    Extension(crawl_repo): Extension<Arc<C>>,
    Extension(storage): Extension<Arc<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, WebhookError>
where
    O: OrderRepository,
    C: CrawlRepository,
    S: StorageRepository,
{
    counter!("eventbrite_webhook_received_total").increment(1);

    if body.is_empty() {
        return Err(WebhookError::MissingBody);
    }

    // Signature verification runs over the raw bytes, before parsing.
    // Every action goes through it, event.published included.
    let header = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok());
    signature::verify_signature(
        &body,
        header,
        settings.eventbrite.webhook_secret.as_deref(),
    )?;

    let payload: WebhookPayload =
        serde_json::from_slice(&body).map_err(|_| WebhookError::InvalidPayload)?;

    if let Some(api_url) = payload.api_url.as_deref() {
        Url::parse(api_url).map_err(|_| WebhookError::InvalidPayload)?;
    }

    let raw_action = payload.resolved_action().to_string();
    let Some(action) = WebhookAction::parse(&raw_action) else {
        counter!("eventbrite_webhook_skipped_total").increment(1);
        info!("Skipping unhandled Eventbrite action: {}", raw_action);
        return Ok(Json(WebhookResponse {
            ok: true,
            skipped: Some(format!("Unhandled action {}", raw_action)),
        }));
    };

    match action {
        WebhookAction::OrderPlaced | WebhookAction::OrderUpdated | WebhookAction::OrderRefunded => {
            let details = eventbrite.fetch_order(payload.api_url.as_deref()).await;
            if details.is_none() {
                warn!("Persisting order from webhook payload only.");
            }
            let order = build_order_record(&payload, details.as_ref());
            IngestOrderUseCase::new(order_repo).execute(&order).await?;
        }
        WebhookAction::EventPublished => {
            let details = eventbrite.fetch_event(payload.api_url.as_deref()).await;
            if details.is_none() {
                warn!("Persisting event listing from webhook payload only.");
            }
            let mut crawl = build_crawl_record(&payload, details.as_ref());

            let logo_url = details.as_ref().and_then(|d| {
                d.logo.as_ref().and_then(|logo| {
                    logo.original
                        .as_ref()
                        .and_then(|o| o.url.clone())
                        .or_else(|| logo.url.clone())
                })
            });
            if let (Some(slug), Some(logo_url)) = (crawl.slug.as_deref(), logo_url) {
                crawl.crawl_image_1 =
                    media::mirror_crawl_image(eventbrite.http(), storage.as_ref(), &logo_url, slug)
                        .await;
            }

            PublishCrawlUseCase::new(crawl_repo).execute(&crawl).await?;
        }
    }

    counter!("eventbrite_webhook_persisted_total").increment(1);
    Ok(Json(WebhookResponse {
        ok: true,
        skipped: None,
    }))
}
