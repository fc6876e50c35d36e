use crate::entitys::client_entity::Client;
use async_trait::async_trait;
use common::errors::AppError;
use futures::stream::BoxStream;

pub type ClientStream = BoxStream<'static, Result<Client, AppError>>;

/// 客户存储，按客户 ID 保存
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// 全量查询，返回惰性流；每次调用重新读取
    fn find_all(&self) -> ClientStream;

    async fn find_by_id(&self, id: &str) -> Result<Option<Client>, AppError>;

    /// 插入或整体覆盖，返回已保存的客户
    async fn save(&self, client: Client) -> Result<Client, AppError>;

    async fn delete(&self, client: &Client) -> Result<(), AppError>;
}
