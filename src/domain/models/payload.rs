// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Eventbrite Webhook 载荷
///
/// 入站通知体的宽松类型表示：已知字段做浅层类型化校验，未识别的
/// 字段原样保留在 `extra` 中，保证向前兼容上游新增字段。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// 上游资源的 API URL，用于补充查询
    pub api_url: Option<String>,
    /// 顶层动作名
    pub action: Option<String>,
    /// 活动 ID
    pub event_id: Option<String>,
    /// Webhook 配置块
    pub config: Option<WebhookConfig>,
    /// 触发该通知的资源摘要
    pub resource: Option<WebhookResource>,
    /// 未识别字段，保留但不使用
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Webhook 配置块
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub action: Option<String>,
    pub endpoint_url: Option<String>,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub organization_id: Option<String>,
    pub user_id: Option<String>,
    pub webhook_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 触发通知的资源摘要
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebhookResource {
    pub attendee_id: Option<String>,
    pub event_id: Option<String>,
    pub order_id: Option<String>,
    pub status: Option<String>,
    pub ticket_class_id: Option<String>,
    pub ticket_class_name: Option<String>,
    /// 票数，上游偶尔会以字符串发送数字
    #[serde(default, deserialize_with = "lenient_u32")]
    pub quantity: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WebhookPayload {
    /// 解析生效的动作名
    ///
    /// 优先级：`config.action` → 顶层 `action` → `"unknown"`。
    pub fn resolved_action(&self) -> &str {
        self.config
            .as_ref()
            .and_then(|c| c.action.as_deref())
            .or(self.action.as_deref())
            .unwrap_or("unknown")
    }
}

/// 处理的动作白名单
///
/// 名单之外的动作直接以成功响应跳过——Eventbrite 会对持续失败的
/// 端点重试并最终停用，不能用错误码回应无关动作。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookAction {
    /// 订单创建
    OrderPlaced,
    /// 订单更新
    OrderUpdated,
    /// 订单退款
    OrderRefunded,
    /// 活动发布
    EventPublished,
}

impl WebhookAction {
    /// 将动作名映射到白名单枚举，未支持的动作返回 None
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "order.placed" => Some(WebhookAction::OrderPlaced),
            "order.updated" => Some(WebhookAction::OrderUpdated),
            "order.refunded" => Some(WebhookAction::OrderRefunded),
            "event.published" => Some(WebhookAction::EventPublished),
            _ => None,
        }
    }
}

/// 宽松解析数量字段，接受数字或数字字符串，其余得到 None
fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
