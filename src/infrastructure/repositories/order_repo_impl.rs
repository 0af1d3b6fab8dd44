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

use crate::domain::models::order::Order;
use crate::domain::repositories::order_repository::{OrderRepository, RepositoryError};
use crate::infrastructure::database::entities::order as order_entity;
use crate::infrastructure::repositories::classify_db_err;
use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use std::sync::Arc;

/// 订单仓库实现
pub struct OrderRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl OrderRepositoryImpl {
    /// 创建新的订单仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的订单仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active_model(order: &Order) -> order_entity::ActiveModel {
        order_entity::ActiveModel {
            id: Set(order.id),
            order_id: Set(order.order_id.clone()),
            event_id: Set(order.event_id.clone()),
            first_name: Set(order.first_name.clone()),
            last_name: Set(order.last_name.clone()),
            email: Set(order.email.clone()),
            gross: Set(order.gross.clone()),
            created_at: Set(order.created_at.into()),
        }
    }

    fn to_domain(model: order_entity::Model) -> Order {
        Order {
            id: model.id,
            order_id: model.order_id,
            event_id: model.event_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            gross: model.gross,
            created_at: model.created_at.into(),
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryImpl {
    async fn upsert(&self, order: &Order) -> Result<(), RepositoryError> {
        order_entity::Entity::insert(Self::to_active_model(order))
            .on_conflict(
                OnConflict::column(order_entity::Column::OrderId)
                    .update_columns([
                        order_entity::Column::EventId,
                        order_entity::Column::FirstName,
                        order_entity::Column::LastName,
                        order_entity::Column::Email,
                        order_entity::Column::Gross,
                        order_entity::Column::CreatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db.as_ref())
            .await
            .map_err(classify_db_err)?;
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        Self::to_active_model(order)
            .insert(self.db.as_ref())
            .await
            .map_err(classify_db_err)?;
        Ok(())
    }

    async fn update_by_order_id(&self, order: &Order) -> Result<(), RepositoryError> {
        let order_id = order.order_id.as_deref().ok_or(RepositoryError::NotFound)?;

        let mut model: order_entity::ActiveModel = order_entity::Entity::find()
            .filter(order_entity::Column::OrderId.eq(order_id))
            .one(self.db.as_ref())
            .await
            .map_err(classify_db_err)?
            .ok_or(RepositoryError::NotFound)?
            .into();

        model.event_id = Set(order.event_id.clone());
        model.first_name = Set(order.first_name.clone());
        model.last_name = Set(order.last_name.clone());
        model.email = Set(order.email.clone());
        model.gross = Set(order.gross.clone());
        model.created_at = Set(order.created_at.into());

        model.update(self.db.as_ref()).await.map_err(classify_db_err)?;
        Ok(())
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Order>, RepositoryError> {
        let model = order_entity::Entity::find()
            .filter(order_entity::Column::OrderId.eq(order_id))
            .one(self.db.as_ref())
            .await
            .map_err(classify_db_err)?;

        Ok(model.map(Self::to_domain))
    }
}
