use crate::index_trait::MongoIndexModelProvider;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use log::debug;
use mongodb::bson::doc;
use mongodb::{Collection, bson::Document, error::Result};
use serde::{Serialize, de::DeserializeOwned};
use std::marker::PhantomData;

/// 以字符串 `_id` 为主键的文档
pub trait MongoEntity {
    fn entity_id(&self) -> &str;
}

pub fn id_filter(id: &str) -> Document {
    doc! { "_id": id }
}

#[async_trait]
pub trait Repository<T> {
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;
    async fn find_one(&self, filter: Document) -> Result<Option<T>>;
    /// 惰性游标，每次调用重新查询
    fn find_all(&self) -> BoxStream<'static, Result<T>>;
    /// 按 `_id` 插入或整体替换
    async fn save(&self, entity: &T) -> Result<()>;
    async fn delete_by_id(&self, id: &str) -> Result<u64>;
}

#[derive(Debug)]
pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>,
    _marker: PhantomData<T>,
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(collection: Collection<T>) -> Self {
        Self { collection, _marker: Default::default() }
    }
}

impl<T> BaseRepository<T>
where
    T: MongoIndexModelProvider + Send + Sync,
{
    pub async fn ensure_indexes(&self) -> Result<()> {
        let models = T::index_models();
        if models.is_empty() {
            return Ok(());
        }
        let result = self.collection.create_indexes(models).await?;
        debug!("{} indexes: {:?}", self.collection.name(), result.index_names);
        Ok(())
    }
}

#[async_trait]
impl<T> Repository<T> for BaseRepository<T>
where
    T: MongoEntity + Serialize + DeserializeOwned + Unpin + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        self.find_one(id_filter(id)).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        let result = self.collection.find_one(filter).await?;
        Ok(result)
    }

    fn find_all(&self) -> BoxStream<'static, Result<T>> {
        let collection = self.collection.clone();
        stream::once(async move { collection.find(doc! {}).await }).try_flatten().boxed()
    }

    async fn save(&self, entity: &T) -> Result<()> {
        let result = self.collection.replace_one(id_filter(entity.entity_id()), entity).upsert(true).await?;
        debug!("{} save {}: matched={} upserted={}", self.collection.name(), entity.entity_id(), result.matched_count, result.upserted_id.is_some());
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<u64> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count)
    }
}
