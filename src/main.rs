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

use std::sync::Arc;

use ticketrs::config::settings::Settings;
use ticketrs::infrastructure::database::connection;
use ticketrs::infrastructure::eventbrite::EventbriteClient;
use ticketrs::infrastructure::repositories::crawl_repo_impl::CrawlRepositoryImpl;
use ticketrs::infrastructure::repositories::order_repo_impl::OrderRepositoryImpl;
use ticketrs::infrastructure::storage::{LocalStorage, S3Storage};
use ticketrs::presentation::routes;
use ticketrs::utils::telemetry;
use tokio::net::TcpListener;
use tracing::{info, warn};

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting ticketrs...");

    // Initialize Prometheus Metrics
    ticketrs::infrastructure::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");
    if settings.eventbrite.webhook_secret.is_none() {
        warn!("Webhook secret is not configured, signature verification is disabled.");
    }

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize Components
    let order_repo = Arc::new(OrderRepositoryImpl::new(db.clone()));
    let crawl_repo = Arc::new(CrawlRepositoryImpl::new(db.clone()));
    let eventbrite = EventbriteClient::new(settings.eventbrite.api_token.clone());

    // 5. Start HTTP server
    let app = if settings.storage.storage_type == "s3" {
        let storage = Arc::new(S3Storage::new(
            settings.storage.s3_region.clone().unwrap_or_default(),
            settings.storage.s3_bucket.clone().unwrap_or_default(),
            settings.storage.s3_access_key.clone().unwrap_or_default(),
            settings.storage.s3_secret_key.clone().unwrap_or_default(),
            settings.storage.s3_endpoint.clone(),
            settings.storage.public_base_url.clone(),
        ));
        routes::app(settings.clone(), eventbrite, order_repo, crawl_repo, storage)
    } else {
        let path = settings
            .storage
            .local_path
            .clone()
            .unwrap_or_else(|| "storage".to_string());
        let storage = Arc::new(LocalStorage::new(
            path,
            settings.storage.public_base_url.clone(),
        ));
        routes::app(settings.clone(), eventbrite, order_repo, crawl_repo, storage)
    };

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
