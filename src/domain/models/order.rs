// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 票务订单实体
///
/// 表示一条由 Eventbrite webhook 派生的票务销售记录。除行 ID 外，
/// 所有字段都可能缺失——webhook 载荷和上游补充查询都是尽力而为的
/// 数据来源。自然唯一键为 `order_id`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// 行唯一标识符
    pub id: Uuid,
    /// Eventbrite 订单 ID，自然唯一键
    pub order_id: Option<String>,
    /// 所属活动的 Eventbrite ID
    pub event_id: Option<String>,
    /// 购买者名
    pub first_name: Option<String>,
    /// 购买者姓
    pub last_name: Option<String>,
    /// 购买者邮箱
    pub email: Option<String>,
    /// 总金额，两位小数字符串（如 "123.45"）
    pub gross: Option<String>,
    /// 订单创建时间，上游缺失时取接收时间
    pub created_at: DateTime<Utc>,
}
