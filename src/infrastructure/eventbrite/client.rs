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

use crate::domain::models::eventbrite::{EventbriteEvent, EventbriteEventList, EventbriteOrder};
use crate::utils::url_utils;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{error, warn};

/// Eventbrite API 客户端
#[derive(Clone)]
pub struct EventbriteClient {
    /// HTTP客户端
    client: Client,
    /// API Bearer 令牌
    api_token: Option<String>,
}

impl EventbriteClient {
    /// 创建新的 Eventbrite 客户端实例
    ///
    /// # 参数
    ///
    /// * `api_token` - API Bearer 令牌，缺失时补充查询被跳过
    ///
    /// # 返回值
    ///
    /// 返回新的 Eventbrite 客户端实例
    pub fn new(api_token: Option<String>) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("Ticketrs-Webhook/0.1.0"),
        );
        Self {
            client: Client::builder()
                .default_headers(headers)
                .timeout(Duration::from_secs(10))
                .build()
                .expect("reqwest client construction cannot fail with static configuration"),
            api_token,
        }
    }

    /// 共享的 HTTP 客户端，图片镜像等处复用
    pub fn http(&self) -> &Client {
        &self.client
    }

    /// 获取订单详情
    ///
    /// 令牌或 API URL 缺失时跳过查询；任何传输或 HTTP 错误都降级
    /// 为 None，订单记录仅由载荷填充。
    pub async fn fetch_order(&self, api_url: Option<&str>) -> Option<EventbriteOrder> {
        let (url, token) = self.credentials(api_url)?;

        match self.get_json::<EventbriteOrder>(url, token).await {
            Ok(order) => Some(order),
            Err(e) => {
                error!("Unable to fetch Eventbrite order details: {}", e);
                None
            }
        }
    }

    /// 获取活动详情
    ///
    /// 若 URL 指向系列而非单个活动：先取系列下的活动列表，取第一
    /// 个并拉取其详情；列表为空时退到合集端点取第一个条目。所有
    /// 失败都降级为已取得的最丰富数据。
    pub async fn fetch_event(&self, api_url: Option<&str>) -> Option<EventbriteEvent> {
        let (url, token) = self.credentials(api_url)?;

        let event = match self.get_json::<EventbriteEvent>(url, token).await {
            Ok(event) => event,
            Err(e) => {
                error!("Unable to fetch Eventbrite event details: {}", e);
                return None;
            }
        };

        if event.is_series != Some(true) {
            return Some(event);
        }

        let base = url_utils::ensure_trailing_slash(url);
        let listed = match self
            .get_json::<EventbriteEventList>(&format!("{}events/", base), token)
            .await
        {
            Ok(list) => list.events,
            Err(e) => {
                error!("Unable to list Eventbrite series events: {}", e);
                return Some(event);
            }
        };

        if let Some(first) = listed.into_iter().next() {
            // Series listings are abbreviated, follow the resource URI for
            // the full event detail when one is given.
            if let Some(uri) = first.resource_uri.clone() {
                return match self.get_json::<EventbriteEvent>(&uri, token).await {
                    Ok(detail) => Some(detail),
                    Err(e) => {
                        error!("Unable to fetch Eventbrite series event detail: {}", e);
                        Some(first)
                    }
                };
            }
            return Some(first);
        }

        match self
            .get_json::<EventbriteEventList>(&format!("{}collection/", base), token)
            .await
        {
            Ok(collection) => collection.events.into_iter().next().or(Some(event)),
            Err(e) => {
                error!("Unable to fetch Eventbrite collection: {}", e);
                Some(event)
            }
        }
    }

    fn credentials<'a>(&'a self, api_url: Option<&'a str>) -> Option<(&'a str, &'a str)> {
        let token = match self.api_token.as_deref() {
            Some(token) if !token.is_empty() => token,
            _ => {
                warn!("Eventbrite API token is not configured.");
                return None;
            }
        };
        let url = api_url?;
        Some((url, token))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<T, reqwest::Error> {
        self.client
            .get(url)
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
