pub mod client_service;
pub mod client_store;
pub mod memory_client_store;

use crate::biz_service::client_service::ClientService;
use crate::biz_service::client_store::ClientStore;
use crate::biz_service::memory_client_store::MemoryClientStore;
use common::config::{DatabaseConfig, StoreKind};
use common::db::init_db;
use common::errors::AppError;
use log::{info, warn};
use std::sync::Arc;

/// 按配置创建客户存储
pub async fn build_client_store(config: &DatabaseConfig) -> Result<Arc<dyn ClientStore>, AppError> {
    match config.store {
        StoreKind::Memory => {
            warn!("client store: memory, data is not persisted");
            Ok(Arc::new(MemoryClientStore::new()))
        }
        StoreKind::Mongo => {
            let db = init_db(config).await?;
            let service = ClientService::new(db);
            service.init_indexes().await?;
            info!("client store: mongo collection {}", client_service::CLIENT_COLLECTION);
            Ok(Arc::new(service))
        }
    }
}
