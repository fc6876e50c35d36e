use common::index_trait::MongoIndexModelProvider;
use common::repository_util::MongoEntity;
use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// ==========================
/// 👤 客户实体（接口传输结构）
/// ==========================
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Client {
    /// 客户 ID（外部传入，创建后不可变）
    #[schema(example = "112345523")]
    pub id: String,
    /// 证件类型（如 "DNI"）
    #[schema(example = "DNI")]
    pub identity_document_type: String,
    /// 证件号码
    pub identity_document_number: String,
    pub name: String,
    /// 公司名称，个人客户可为空
    pub business_name: String,
    pub last_name: String,
    pub email: String,
    /// 客户类型（如 "PERSONNEL"）
    #[schema(example = "PERSONNEL")]
    pub client_type: String,
    pub phone_number: String,
    /// 客户画像 ID
    pub id_client_profile: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ClientBuilder {
    client: Client,
}

impl ClientBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.client.id = id.into();
        self
    }
    pub fn identity_document_type(mut self, value: impl Into<String>) -> Self {
        self.client.identity_document_type = value.into();
        self
    }
    pub fn identity_document_number(mut self, value: impl Into<String>) -> Self {
        self.client.identity_document_number = value.into();
        self
    }
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.client.name = value.into();
        self
    }
    pub fn business_name(mut self, value: impl Into<String>) -> Self {
        self.client.business_name = value.into();
        self
    }
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.client.last_name = value.into();
        self
    }
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.client.email = value.into();
        self
    }
    pub fn client_type(mut self, value: impl Into<String>) -> Self {
        self.client.client_type = value.into();
        self
    }
    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.client.phone_number = value.into();
        self
    }
    pub fn id_client_profile(mut self, value: impl Into<String>) -> Self {
        self.client.id_client_profile = value.into();
        self
    }
    pub fn build(self) -> Client {
        self.client
    }
}

/// Mongo 中的客户文档，`id` 存为 `_id`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub identity_document_type: String,
    pub identity_document_number: String,
    pub name: String,
    pub business_name: String,
    pub last_name: String,
    pub email: String,
    pub client_type: String,
    pub phone_number: String,
    pub id_client_profile: String,
}

impl MongoEntity for ClientDocument {
    fn entity_id(&self) -> &str {
        &self.id
    }
}

impl MongoIndexModelProvider for ClientDocument {
    fn index_models() -> Vec<IndexModel> {
        let options = IndexOptions::builder().name("idx_identity_document_number".to_string()).build();
        vec![IndexModel::builder().keys(doc! { "identityDocumentNumber": 1 }).options(options).build()]
    }
}

impl From<Client> for ClientDocument {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            identity_document_type: c.identity_document_type,
            identity_document_number: c.identity_document_number,
            name: c.name,
            business_name: c.business_name,
            last_name: c.last_name,
            email: c.email,
            client_type: c.client_type,
            phone_number: c.phone_number,
            id_client_profile: c.id_client_profile,
        }
    }
}

impl From<ClientDocument> for Client {
    fn from(d: ClientDocument) -> Self {
        Self {
            id: d.id,
            identity_document_type: d.identity_document_type,
            identity_document_number: d.identity_document_number,
            name: d.name,
            business_name: d.business_name,
            last_name: d.last_name,
            email: d.email,
            client_type: d.client_type,
            phone_number: d.phone_number,
            id_client_profile: d.id_client_profile,
        }
    }
}
