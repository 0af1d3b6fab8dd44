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

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "crawls")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub eventbrite_id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub short_description: Option<String>,
    pub status: String,
    pub event_date_start: Option<ChronoDateTimeWithTimeZone>,
    pub event_date_end: Option<ChronoDateTimeWithTimeZone>,
    pub event_date_start_2: Option<ChronoDateTimeWithTimeZone>,
    pub event_date_end_2: Option<ChronoDateTimeWithTimeZone>,
    pub event_date_start_3: Option<ChronoDateTimeWithTimeZone>,
    pub event_date_end_3: Option<ChronoDateTimeWithTimeZone>,
    pub crawl_image_1: Option<String>,
    pub crawl_image_1_alt: Option<String>,
    pub crawl_image_2: Option<String>,
    pub crawl_image_2_alt: Option<String>,
    pub crawl_image_3: Option<String>,
    pub crawl_image_3_alt: Option<String>,
    pub crawl_image_4: Option<String>,
    pub crawl_image_4_alt: Option<String>,
    pub crawl_image_vertical_url: Option<String>,
    pub crawl_image_vertical_alt: Option<String>,
    pub alt_name: Option<String>,
    pub city: Option<String>,
    pub collection: Option<String>,
    pub theme: Option<String>,
    pub neighborhood: Option<String>,
    pub price: Option<String>,
    pub checkin_venue_1: Option<String>,
    pub keywords_h2: Option<String>,
    pub keywords_paragraph: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: ChronoDateTimeWithTimeZone,
    pub updated_at: ChronoDateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
