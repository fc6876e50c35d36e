use actix_web::web;
use biz_service::ClientStore;
use common::errors::AppError;

pub mod client_handler;
pub mod common_handler;
pub mod swagger;

/// 请求体解析失败统一返回 400
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| AppError::Validation(err.to_string()).into())
}

pub fn configure(cfg: &mut web::ServiceConfig, store: web::Data<dyn ClientStore>) {
    cfg.app_data(store);
    cfg.app_data(json_config());
    client_handler::configure(cfg);
    common_handler::configure(cfg);
    swagger::configure(cfg);
}
