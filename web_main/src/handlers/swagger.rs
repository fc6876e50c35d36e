use crate::handlers::client_handler::*;
use crate::handlers::common_handler::*;
use actix_web::{HttpResponse, get, web};
use biz_service::Client;
use common::errors::AppError;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        client_list,
        client_get,
        client_create,
        client_update,
        client_delete,
        status
    ),
    components(schemas(Client)),
    tags(
        (name = "client", description = "客户管理")
    )
)]
pub struct ApiDoc;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(openapi_json);
}

#[get("/openapi.json")]
async fn openapi_json() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().content_type("application/json").body(ApiDoc::openapi().to_json()?))
}
