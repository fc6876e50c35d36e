pub mod biz_service;
pub mod entitys;

pub use biz_service::build_client_store;
pub use biz_service::client_store::{ClientStore, ClientStream};
pub use entitys::client_entity::Client;
