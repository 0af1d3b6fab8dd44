// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 爬取活动（crawl）：由 Eventbrite 已发布活动派生的站点条目
/// - 订单（order）：由 Eventbrite 票务订单派生的销售记录
/// - Eventbrite API 资源（eventbrite）：上游补充查询的响应形状
/// - Webhook 载荷（payload）：入站通知的宽松类型表示
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为，是领域驱动设计的核心组成部分。
pub mod crawl;
pub mod eventbrite;
pub mod order;
pub mod payload;
