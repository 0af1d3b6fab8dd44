// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Eventbrite 订单资源
///
/// 补充查询返回的订单形状，所有字段可选——缺失的详情由 webhook
/// 载荷或默认值兜底。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteOrder {
    pub id: Option<String>,
    pub event_id: Option<String>,
    pub status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub changed: Option<DateTime<Utc>>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile: Option<EventbriteProfile>,
    pub costs: Option<EventbriteCosts>,
}

/// 购买者档案，嵌套来源的优先级高于扁平字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteProfile {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// 订单费用明细
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteCosts {
    pub base_price: Option<EventbriteMoney>,
    pub gross: Option<EventbriteMoney>,
    pub fees: Option<EventbriteMoney>,
    pub net: Option<EventbriteMoney>,
    pub tax: Option<EventbriteMoney>,
    pub total: Option<EventbriteMoney>,
}

/// Eventbrite 金额对象
///
/// `value` 为最小货币单位的整数，但上游偶有异常形状，保留为 JSON
/// 值并在格式化时宽松处理。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteMoney {
    pub currency: Option<String>,
    pub display: Option<String>,
    pub value: Option<Value>,
}

/// Eventbrite 活动资源
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteEvent {
    pub id: Option<String>,
    pub name: Option<EventbriteText>,
    pub description: Option<EventbriteText>,
    pub summary: Option<String>,
    pub start: Option<EventbriteDatetime>,
    pub end: Option<EventbriteDatetime>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub is_series: Option<bool>,
    pub resource_uri: Option<String>,
    pub logo: Option<EventbriteLogo>,
}

/// 带纯文本和 HTML 两种形式的文本字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteText {
    pub text: Option<String>,
    pub html: Option<String>,
}

/// Eventbrite 的时间表示
///
/// `local` 为不带时区的本地时间字符串，用于 slug 日期后缀；
/// `utc` 为权威的存储时间。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteDatetime {
    pub timezone: Option<String>,
    pub local: Option<String>,
    pub utc: Option<DateTime<Utc>>,
}

/// 活动主图
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteLogo {
    pub url: Option<String>,
    pub original: Option<EventbriteLogoOriginal>,
}

/// 活动主图的原始尺寸版本
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteLogoOriginal {
    pub url: Option<String>,
}

/// 活动列表响应，系列与合集端点共用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventbriteEventList {
    #[serde(default)]
    pub events: Vec<EventbriteEvent>,
}
