// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 活动条目实体
///
/// 表示一条由 Eventbrite 已发布活动派生的站点活动（"crawl"）记录。
/// webhook 只负责填充派生列（名称、slug、描述、日期、首图、状态）；
/// 营销列由编辑在 CMS 侧维护，入库时保持 NULL。自然唯一键为
/// `eventbrite_id`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crawl {
    /// 行唯一标识符
    pub id: Uuid,
    /// Eventbrite 活动 ID，自然唯一键
    pub eventbrite_id: Option<String>,
    /// 活动名称
    pub name: Option<String>,
    /// URL slug，由名称和开始日期派生
    pub slug: Option<String>,
    /// 简短描述
    pub short_description: Option<String>,
    /// 条目状态，webhook 写入时始终为草稿
    pub status: CrawlStatus,
    /// 活动开始时间
    pub event_date_start: Option<DateTime<Utc>>,
    /// 活动结束时间
    pub event_date_end: Option<DateTime<Utc>>,
    /// 第二场开始时间
    pub event_date_start_2: Option<DateTime<Utc>>,
    /// 第二场结束时间
    pub event_date_end_2: Option<DateTime<Utc>>,
    /// 第三场开始时间
    pub event_date_start_3: Option<DateTime<Utc>>,
    /// 第三场结束时间
    pub event_date_end_3: Option<DateTime<Utc>>,
    /// 首图 URL，指向镜像到对象存储后的公开地址
    pub crawl_image_1: Option<String>,
    /// 首图替代文本
    pub crawl_image_1_alt: Option<String>,
    /// 第二张图片 URL
    pub crawl_image_2: Option<String>,
    /// 第二张图片替代文本
    pub crawl_image_2_alt: Option<String>,
    /// 第三张图片 URL
    pub crawl_image_3: Option<String>,
    /// 第三张图片替代文本
    pub crawl_image_3_alt: Option<String>,
    /// 第四张图片 URL
    pub crawl_image_4: Option<String>,
    /// 第四张图片替代文本
    pub crawl_image_4_alt: Option<String>,
    /// 竖版图片 URL
    pub crawl_image_vertical_url: Option<String>,
    /// 竖版图片替代文本
    pub crawl_image_vertical_alt: Option<String>,
    /// 别名
    pub alt_name: Option<String>,
    /// 城市
    pub city: Option<String>,
    /// 所属合集
    pub collection: Option<String>,
    /// 主题
    pub theme: Option<String>,
    /// 街区
    pub neighborhood: Option<String>,
    /// 价格展示文本
    pub price: Option<String>,
    /// 签到场地
    pub checkin_venue_1: Option<String>,
    /// H2 关键词
    pub keywords_h2: Option<String>,
    /// 段落关键词
    pub keywords_paragraph: Option<String>,
    /// SEO 标题
    pub seo_title: Option<String>,
    /// SEO 描述
    pub seo_description: Option<String>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

/// 活动条目状态枚举
///
/// webhook 创建的条目始终为 Draft，由编辑审核后在 CMS 侧发布。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CrawlStatus {
    /// 草稿
    #[default]
    Draft,
    /// 已发布
    Published,
    /// 已归档
    Archived,
}

impl fmt::Display for CrawlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlStatus::Draft => write!(f, "Draft"),
            CrawlStatus::Published => write!(f, "Published"),
            CrawlStatus::Archived => write!(f, "Archived"),
        }
    }
}

impl CrawlStatus {
    /// 从存储的字符串还原状态，未知值回落为草稿
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Published" => CrawlStatus::Published,
            "Archived" => CrawlStatus::Archived,
            _ => CrawlStatus::Draft,
        }
    }
}

impl Crawl {
    /// 创建一条仅含默认值的空白条目
    ///
    /// 派生逻辑在此基础上填充 webhook 负责的列。
    pub fn blank() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            eventbrite_id: None,
            name: None,
            slug: None,
            short_description: None,
            status: CrawlStatus::Draft,
            event_date_start: None,
            event_date_end: None,
            event_date_start_2: None,
            event_date_end_2: None,
            event_date_start_3: None,
            event_date_end_3: None,
            crawl_image_1: None,
            crawl_image_1_alt: None,
            crawl_image_2: None,
            crawl_image_2_alt: None,
            crawl_image_3: None,
            crawl_image_3_alt: None,
            crawl_image_4: None,
            crawl_image_4_alt: None,
            crawl_image_vertical_url: None,
            crawl_image_vertical_alt: None,
            alt_name: None,
            city: None,
            collection: None,
            theme: None,
            neighborhood: None,
            price: None,
            checkin_venue_1: None,
            keywords_h2: None,
            keywords_paragraph: None,
            seo_title: None,
            seo_description: None,
            created_at: now,
            updated_at: now,
        }
    }
}
