use crate::biz_service::client_store::{ClientStore, ClientStream};
use crate::entitys::client_entity::{Client, ClientDocument};
use async_trait::async_trait;
use common::errors::AppError;
use common::repository_util::{BaseRepository, Repository};
use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use log::debug;
use mongodb::Database;

pub const CLIENT_COLLECTION: &str = "client";

/// MongoDB 客户存储
#[derive(Debug)]
pub struct ClientService {
    pub dao: BaseRepository<ClientDocument>,
}

impl ClientService {
    pub fn new(db: Database) -> Self {
        let collection = db.collection(CLIENT_COLLECTION);
        Self { dao: BaseRepository::new(collection) }
    }

    /// 创建集合索引
    pub async fn init_indexes(&self) -> Result<(), AppError> {
        self.dao.ensure_indexes().await?;
        Ok(())
    }
}

/// 游标中的文档转换为客户流
fn into_client_stream(documents: BoxStream<'static, mongodb::error::Result<ClientDocument>>) -> ClientStream {
    documents.map_ok(Client::from).map_err(AppError::from).boxed()
}

#[async_trait]
impl ClientStore for ClientService {
    fn find_all(&self) -> ClientStream {
        into_client_stream(self.dao.find_all())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError> {
        let option = self.dao.find_by_id(id).await?;
        Ok(option.map(Client::from))
    }

    async fn save(&self, client: Client) -> Result<Client, AppError> {
        let document = ClientDocument::from(client);
        self.dao.save(&document).await?;
        Ok(document.into())
    }

    async fn delete(&self, client: &Client) -> Result<(), AppError> {
        let deleted = self.dao.delete_by_id(&client.id).await?;
        debug!("client {} deleted: {}", client.id, deleted);
        Ok(())
    }
}
