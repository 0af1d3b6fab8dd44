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

use crate::domain::models::crawl::{Crawl, CrawlStatus};
use crate::domain::repositories::crawl_repository::CrawlRepository;
use crate::domain::repositories::order_repository::RepositoryError;
use crate::infrastructure::database::entities::crawl as crawl_entity;
use crate::infrastructure::repositories::classify_db_err;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use std::sync::Arc;

/// 活动条目仓库实现
///
/// webhook 只拥有派生列，冲突更新和回退更新都不触碰编辑维护的
/// 营销列，重复投递不会清空编辑的工作。
pub struct CrawlRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl CrawlRepositoryImpl {
    /// 创建新的活动条目仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的活动条目仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active_model(crawl: &Crawl) -> crawl_entity::ActiveModel {
        crawl_entity::ActiveModel {
            id: Set(crawl.id),
            eventbrite_id: Set(crawl.eventbrite_id.clone()),
            name: Set(crawl.name.clone()),
            slug: Set(crawl.slug.clone()),
            short_description: Set(crawl.short_description.clone()),
            status: Set(crawl.status.to_string()),
            event_date_start: Set(crawl.event_date_start.map(Into::into)),
            event_date_end: Set(crawl.event_date_end.map(Into::into)),
            event_date_start_2: Set(crawl.event_date_start_2.map(Into::into)),
            event_date_end_2: Set(crawl.event_date_end_2.map(Into::into)),
            event_date_start_3: Set(crawl.event_date_start_3.map(Into::into)),
            event_date_end_3: Set(crawl.event_date_end_3.map(Into::into)),
            crawl_image_1: Set(crawl.crawl_image_1.clone()),
            crawl_image_1_alt: Set(crawl.crawl_image_1_alt.clone()),
            crawl_image_2: Set(crawl.crawl_image_2.clone()),
            crawl_image_2_alt: Set(crawl.crawl_image_2_alt.clone()),
            crawl_image_3: Set(crawl.crawl_image_3.clone()),
            crawl_image_3_alt: Set(crawl.crawl_image_3_alt.clone()),
            crawl_image_4: Set(crawl.crawl_image_4.clone()),
            crawl_image_4_alt: Set(crawl.crawl_image_4_alt.clone()),
            crawl_image_vertical_url: Set(crawl.crawl_image_vertical_url.clone()),
            crawl_image_vertical_alt: Set(crawl.crawl_image_vertical_alt.clone()),
            alt_name: Set(crawl.alt_name.clone()),
            city: Set(crawl.city.clone()),
            collection: Set(crawl.collection.clone()),
            theme: Set(crawl.theme.clone()),
            neighborhood: Set(crawl.neighborhood.clone()),
            price: Set(crawl.price.clone()),
            checkin_venue_1: Set(crawl.checkin_venue_1.clone()),
            keywords_h2: Set(crawl.keywords_h2.clone()),
            keywords_paragraph: Set(crawl.keywords_paragraph.clone()),
            seo_title: Set(crawl.seo_title.clone()),
            seo_description: Set(crawl.seo_description.clone()),
            created_at: Set(crawl.created_at.into()),
            updated_at: Set(crawl.updated_at.into()),
        }
    }

    fn to_domain(model: crawl_entity::Model) -> Crawl {
        Crawl {
            id: model.id,
            eventbrite_id: model.eventbrite_id,
            name: model.name,
            slug: model.slug,
            short_description: model.short_description,
            status: CrawlStatus::parse(&model.status),
            event_date_start: model.event_date_start.map(Into::into),
            event_date_end: model.event_date_end.map(Into::into),
            event_date_start_2: model.event_date_start_2.map(Into::into),
            event_date_end_2: model.event_date_end_2.map(Into::into),
            event_date_start_3: model.event_date_start_3.map(Into::into),
            event_date_end_3: model.event_date_end_3.map(Into::into),
            crawl_image_1: model.crawl_image_1,
            crawl_image_1_alt: model.crawl_image_1_alt,
            crawl_image_2: model.crawl_image_2,
            crawl_image_2_alt: model.crawl_image_2_alt,
            crawl_image_3: model.crawl_image_3,
            crawl_image_3_alt: model.crawl_image_3_alt,
            crawl_image_4: model.crawl_image_4,
            crawl_image_4_alt: model.crawl_image_4_alt,
            crawl_image_vertical_url: model.crawl_image_vertical_url,
            crawl_image_vertical_alt: model.crawl_image_vertical_alt,
            alt_name: model.alt_name,
            city: model.city,
            collection: model.collection,
            theme: model.theme,
            neighborhood: model.neighborhood,
            price: model.price,
            checkin_venue_1: model.checkin_venue_1,
            keywords_h2: model.keywords_h2,
            keywords_paragraph: model.keywords_paragraph,
            seo_title: model.seo_title,
            seo_description: model.seo_description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

#[async_trait]
impl CrawlRepository for CrawlRepositoryImpl {
    async fn upsert(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        crawl_entity::Entity::insert(Self::to_active_model(crawl))
            .on_conflict(
                OnConflict::column(crawl_entity::Column::EventbriteId)
                    .update_columns([
                        crawl_entity::Column::Name,
                        crawl_entity::Column::Slug,
                        crawl_entity::Column::ShortDescription,
                        crawl_entity::Column::Status,
                        crawl_entity::Column::EventDateStart,
                        crawl_entity::Column::EventDateEnd,
                        crawl_entity::Column::CrawlImage1,
                        crawl_entity::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await
            .map_err(classify_db_err)?;
        Ok(())
    }

    async fn insert(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        Self::to_active_model(crawl)
            .insert(self.db.as_ref())
            .await
            .map_err(classify_db_err)?;
        Ok(())
    }

    async fn update_by_eventbrite_id(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        let eventbrite_id = crawl
            .eventbrite_id
            .as_deref()
            .ok_or(RepositoryError::NotFound)?;

        let mut model: crawl_entity::ActiveModel = crawl_entity::Entity::find()
            .filter(crawl_entity::Column::EventbriteId.eq(eventbrite_id))
            .one(self.db.as_ref())
            .await
            .map_err(classify_db_err)?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.name = Set(crawl.name.clone());
        model.slug = Set(crawl.slug.clone());
        model.short_description = Set(crawl.short_description.clone());
        model.status = Set(crawl.status.to_string());
        model.event_date_start = Set(crawl.event_date_start.map(Into::into));
        model.event_date_end = Set(crawl.event_date_end.map(Into::into));
        model.crawl_image_1 = Set(crawl.crawl_image_1.clone());
        model.updated_at = Set(crawl.updated_at.into());

        model.update(self.db.as_ref()).await.map_err(classify_db_err)?;
        Ok(())
    }

    async fn find_by_eventbrite_id(
        &self,
        eventbrite_id: &str,
    ) -> Result<Option<Crawl>, RepositoryError> {
        let model = crawl_entity::Entity::find()
            .filter(crawl_entity::Column::EventbriteId.eq(eventbrite_id))
            .one(self.db.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(model.map(Self::to_domain))
    }
}
