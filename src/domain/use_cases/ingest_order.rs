// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::eventbrite::EventbriteOrder;
use crate::domain::models::order::Order;
use crate::domain::models::payload::WebhookPayload;
use crate::domain::repositories::order_repository::{OrderRepository, RepositoryError};
use crate::domain::use_cases::coalesce;
use crate::utils::money;
use crate::utils::url_utils;
use chrono::Utc;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// 订单入库用例
///
/// 以 `order_id` 为键持久化派生的订单记录。优先走数据库的原子
/// upsert；当唯一约束尚未建立时退化为先查后写，插入与并发投递
/// 竞争失败时改走更新。该回退是兼容垫片，不提供超出"每键最终
/// 存活一行"的隔离保证。
pub struct IngestOrderUseCase<R: OrderRepository> {
    repo: Arc<R>,
}

impl<R: OrderRepository> IngestOrderUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, order: &Order) -> Result<(), RepositoryError> {
        let Some(order_id) = order.order_id.clone() else {
            // Nothing to conflict on without a natural key.
            return self.repo.insert(order).await;
        };

        match self.repo.upsert(order).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::MissingUniqueConstraint) => {
                warn!("orders.order_id unique index missing, falling back to check-then-write");
                if self.repo.find_by_order_id(&order_id).await?.is_some() {
                    self.repo.update_by_order_id(order).await
                } else {
                    match self.repo.insert(order).await {
                        // A concurrent delivery won the insert race.
                        Err(RepositoryError::DuplicateKey) => {
                            self.repo.update_by_order_id(order).await
                        }
                        other => other,
                    }
                }
            }
            Err(e) => Err(e),
        }
    }
}

/// 由载荷和可空的上游详情派生订单记录
///
/// 纯映射，每个字段按显式优先级链取第一个非空来源；金额为空或
/// 非数字时得到 None，绝不失败。
pub fn build_order_record(payload: &WebhookPayload, details: Option<&EventbriteOrder>) -> Order {
    let profile = details.and_then(|d| d.profile.as_ref());
    let resource = payload.resource.as_ref();
    let costs = details.and_then(|d| d.costs.as_ref());

    Order {
        id: Uuid::new_v4(),
        order_id: coalesce([
            details.and_then(|d| d.id.clone()),
            resource.and_then(|r| r.order_id.clone()),
            url_utils::extract_id_from_url(payload.api_url.as_deref()),
        ]),
        event_id: coalesce([
            payload.event_id.clone(),
            resource.and_then(|r| r.event_id.clone()),
            details.and_then(|d| d.event_id.clone()),
        ]),
        first_name: coalesce([
            profile.and_then(|p| p.first_name.clone()),
            details.and_then(|d| d.first_name.clone()),
        ]),
        last_name: coalesce([
            profile.and_then(|p| p.last_name.clone()),
            details.and_then(|d| d.last_name.clone()),
        ]),
        email: coalesce([
            profile.and_then(|p| p.email.clone()),
            details.and_then(|d| d.email.clone()),
        ]),
        gross: money::format_minor_units(
            costs.and_then(|c| c.gross.as_ref()).and_then(|g| g.value.as_ref()),
        ),
        created_at: coalesce([
            details.and_then(|d| d.created),
            details.and_then(|d| d.changed),
        ])
        .unwrap_or_else(Utc::now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::eventbrite::{EventbriteCosts, EventbriteMoney, EventbriteProfile};
    use crate::domain::models::payload::WebhookResource;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    fn payload_with_api_url(api_url: &str) -> WebhookPayload {
        WebhookPayload {
            api_url: Some(api_url.to_string()),
            ..Default::default()
        }
    }

    fn full_details() -> EventbriteOrder {
        EventbriteOrder {
            id: Some("900001".to_string()),
            event_id: Some("ev-1".to_string()),
            email: Some("flat@example.com".to_string()),
            first_name: Some("Flat".to_string()),
            last_name: Some("Name".to_string()),
            profile: Some(EventbriteProfile {
                first_name: Some("Pat".to_string()),
                last_name: Some("Doe".to_string()),
                email: Some("pat@example.com".to_string()),
                ..Default::default()
            }),
            costs: Some(EventbriteCosts {
                gross: Some(EventbriteMoney {
                    value: Some(json!(12345)),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_fields_win_over_flat() {
        let record = build_order_record(&WebhookPayload::default(), Some(&full_details()));
        assert_eq!(record.first_name.as_deref(), Some("Pat"));
        assert_eq!(record.email.as_deref(), Some("pat@example.com"));
        assert_eq!(record.gross.as_deref(), Some("123.45"));
        assert_eq!(record.order_id.as_deref(), Some("900001"));
    }

    #[test]
    fn test_flat_fields_used_when_profile_missing() {
        let mut details = full_details();
        details.profile = None;
        let record = build_order_record(&WebhookPayload::default(), Some(&details));
        assert_eq!(record.first_name.as_deref(), Some("Flat"));
        assert_eq!(record.email.as_deref(), Some("flat@example.com"));
    }

    #[test]
    fn test_payload_only_derivation() {
        let mut payload = payload_with_api_url("https://api.example.com/v3/orders/777/");
        payload.resource = Some(WebhookResource {
            event_id: Some("ev-9".to_string()),
            ..Default::default()
        });
        let record = build_order_record(&payload, None);
        // Without details the order id falls back to the resource/url chain.
        assert_eq!(record.order_id.as_deref(), Some("777"));
        assert_eq!(record.event_id.as_deref(), Some("ev-9"));
        assert_eq!(record.gross, None);
        assert_eq!(record.email, None);
    }

    #[test]
    fn test_resource_order_id_beats_url() {
        let mut payload = payload_with_api_url("https://api.example.com/v3/orders/777/");
        payload.resource = Some(WebhookResource {
            order_id: Some("555".to_string()),
            ..Default::default()
        });
        let record = build_order_record(&payload, None);
        assert_eq!(record.order_id.as_deref(), Some("555"));
    }

    /// 脚本化的假仓库，用于驱动回退路径
    #[derive(Default)]
    struct ScriptedOrderRepo {
        rows: Mutex<Vec<Order>>,
        missing_constraint: AtomicBool,
        duplicate_on_insert: AtomicBool,
        updates: AtomicBool,
    }

    #[async_trait]
    impl OrderRepository for ScriptedOrderRepo {
        async fn upsert(&self, order: &Order) -> Result<(), RepositoryError> {
            if self.missing_constraint.load(Ordering::SeqCst) {
                return Err(RepositoryError::MissingUniqueConstraint);
            }
            self.rows.lock().unwrap().push(order.clone());
            Ok(())
        }

        async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
            if self.duplicate_on_insert.swap(false, Ordering::SeqCst) {
                // Simulates a concurrent delivery inserting first.
                self.rows.lock().unwrap().push(order.clone());
                return Err(RepositoryError::DuplicateKey);
            }
            self.rows.lock().unwrap().push(order.clone());
            Ok(())
        }

        async fn update_by_order_id(&self, order: &Order) -> Result<(), RepositoryError> {
            self.updates.store(true, Ordering::SeqCst);
            let mut rows = self.rows.lock().unwrap();
            let existing = rows
                .iter_mut()
                .find(|r| r.order_id == order.order_id)
                .ok_or(RepositoryError::NotFound)?;
            *existing = order.clone();
            Ok(())
        }

        async fn find_by_order_id(
            &self,
            order_id: &str,
        ) -> Result<Option<Order>, RepositoryError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|r| r.order_id.as_deref() == Some(order_id))
                .cloned())
        }
    }

    fn order_with_id(order_id: &str) -> Order {
        Order {
            id: Uuid::new_v4(),
            order_id: Some(order_id.to_string()),
            event_id: None,
            first_name: None,
            last_name: None,
            email: None,
            gross: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_upsert_happy_path() {
        let repo = Arc::new(ScriptedOrderRepo::default());
        let use_case = IngestOrderUseCase::new(repo.clone());
        use_case.execute(&order_with_id("1")).await.unwrap();
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
        assert!(!repo.updates.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_missing_constraint_falls_back_to_insert() {
        let repo = Arc::new(ScriptedOrderRepo::default());
        repo.missing_constraint.store(true, Ordering::SeqCst);
        let use_case = IngestOrderUseCase::new(repo.clone());
        use_case.execute(&order_with_id("1")).await.unwrap();
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_constraint_updates_existing_row() {
        let repo = Arc::new(ScriptedOrderRepo::default());
        repo.rows.lock().unwrap().push(order_with_id("1"));
        repo.missing_constraint.store(true, Ordering::SeqCst);

        let mut updated = order_with_id("1");
        updated.email = Some("new@example.com".to_string());
        IngestOrderUseCase::new(repo.clone())
            .execute(&updated)
            .await
            .unwrap();

        let rows = repo.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email.as_deref(), Some("new@example.com"));
    }

    #[tokio::test]
    async fn test_insert_race_retries_as_update() {
        let repo = Arc::new(ScriptedOrderRepo::default());
        repo.missing_constraint.store(true, Ordering::SeqCst);
        repo.duplicate_on_insert.store(true, Ordering::SeqCst);

        IngestOrderUseCase::new(repo.clone())
            .execute(&order_with_id("1"))
            .await
            .unwrap();

        // The duplicate-key race must end in an update, not an error.
        assert!(repo.updates.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_null_key_inserts_plainly() {
        let repo = Arc::new(ScriptedOrderRepo::default());
        repo.missing_constraint.store(true, Ordering::SeqCst);
        let mut order = order_with_id("1");
        order.order_id = None;
        IngestOrderUseCase::new(repo.clone())
            .execute(&order)
            .await
            .unwrap();
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }
}
