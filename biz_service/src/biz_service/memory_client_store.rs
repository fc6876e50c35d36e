use crate::biz_service::client_store::{ClientStore, ClientStream};
use crate::entitys::client_entity::Client;
use async_trait::async_trait;
use common::errors::AppError;
use dashmap::DashMap;
use futures::stream::{self, StreamExt};
use log::debug;

/// 内存客户存储，不落盘
#[derive(Debug, Default)]
pub struct MemoryClientStore {
    clients: DashMap<String, Client>,
}

impl MemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let store = Self::new();
        for client in clients {
            store.clients.insert(client.id.clone(), client);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[async_trait]
impl ClientStore for MemoryClientStore {
    fn find_all(&self) -> ClientStream {
        // 快照按 id 排序
        let mut items: Vec<Client> = self.clients.iter().map(|entry| entry.value().clone()).collect();
        items.sort_by(|a, b| a.id.cmp(&b.id));
        stream::iter(items.into_iter().map(Ok)).boxed()
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError> {
        Ok(self.clients.get(id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, client: Client) -> Result<Client, AppError> {
        let replaced = self.clients.insert(client.id.clone(), client.clone()).is_some();
        debug!("client {} saved, replaced: {}", client.id, replaced);
        Ok(client)
    }

    async fn delete(&self, client: &Client) -> Result<(), AppError> {
        self.clients.remove(&client.id);
        Ok(())
    }
}
