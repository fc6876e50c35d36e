use actix_web::{HttpResponse, Responder, delete, get, put, routes, web};
use biz_service::{Client, ClientStore};
use common::errors::AppError;
use futures::TryStreamExt;
use log::info;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(client_list);
    cfg.service(client_get);
    cfg.service(client_create);
    cfg.service(client_update);
    cfg.service(client_delete);
}

#[utoipa::path(
    get,
    path = "/v1/client",
    tag = "client",
    responses(
        (status = 200, description = "All clients", body = Vec<Client>)
    )
)]
#[get("/v1/client")]
pub async fn client_list(store: web::Data<dyn ClientStore>) -> Result<impl Responder, AppError> {
    let clients: Vec<Client> = store.find_all().try_collect().await?;
    Ok(web::Json(clients))
}

#[utoipa::path(
    get,
    path = "/v1/client/{id}",
    tag = "client",
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client found", body = Client),
        (status = 404, description = "Client not found")
    )
)]
#[get("/v1/client/{id}")]
pub async fn client_get(id: web::Path<String>, store: web::Data<dyn ClientStore>) -> Result<impl Responder, AppError> {
    let client = store.find_by_id(&id).await?.ok_or(AppError::NotFound)?;
    Ok(web::Json(client))
}

#[utoipa::path(
    post,
    path = "/v1/client/",
    tag = "client",
    request_body = Client,
    responses(
        (status = 201, description = "Client saved", body = Client),
        (status = 400, description = "Malformed body or missing id")
    )
)]
#[routes]
#[post("/v1/client/")]
#[post("/v1/client")]
pub async fn client_create(dto: web::Json<Client>, store: web::Data<dyn ClientStore>) -> Result<impl Responder, AppError> {
    let client = dto.into_inner();
    // id 由调用方提供，空 id 无法再通过 /v1/client/{id} 访问
    if client.id.trim().is_empty() {
        return Err(AppError::Validation("client id is required".to_string()));
    }
    let saved = store.save(client).await?;
    info!("client {} created", saved.id);
    Ok(HttpResponse::Created().json(saved))
}

/// 整体替换，以路径中的 id 为准；成功返回 201
#[utoipa::path(
    put,
    path = "/v1/client/{id}",
    tag = "client",
    params(("id" = String, Path, description = "Client id")),
    request_body = Client,
    responses(
        (status = 201, description = "Client replaced", body = Client),
        (status = 404, description = "Client not found")
    )
)]
#[put("/v1/client/{id}")]
pub async fn client_update(id: web::Path<String>, dto: web::Json<Client>, store: web::Data<dyn ClientStore>) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    store.find_by_id(&id).await?.ok_or(AppError::NotFound)?;
    let mut client = dto.into_inner();
    client.id = id;
    let saved = store.save(client).await?;
    info!("client {} updated", saved.id);
    Ok(HttpResponse::Created().json(saved))
}

#[utoipa::path(
    delete,
    path = "/v1/client/{id}",
    tag = "client",
    params(("id" = String, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client deleted, empty body"),
        (status = 404, description = "Client not found")
    )
)]
#[delete("/v1/client/{id}")]
pub async fn client_delete(id: web::Path<String>, store: web::Data<dyn ClientStore>) -> Result<impl Responder, AppError> {
    let client = store.find_by_id(&id).await?.ok_or(AppError::NotFound)?;
    store.delete(&client).await?;
    info!("client {} deleted", client.id);
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers;
    use actix_web::http::StatusCode;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test};
    use biz_service::biz_service::memory_client_store::MemoryClientStore;
    use common::errors::ErrorResponse;
    use std::sync::Arc;

    fn daniela() -> Client {
        Client::builder()
            .id("112345523")
            .identity_document_type("DNI")
            .identity_document_number("123454")
            .name("Daniela")
            .business_name("")
            .last_name("Mendoza")
            .email("demo@entel.pe")
            .client_type("PERSONNEL")
            .phone_number("121323")
            .id_client_profile("PB")
            .build()
    }

    fn store_with(clients: Vec<Client>) -> Arc<MemoryClientStore> {
        Arc::new(MemoryClientStore::with_clients(clients))
    }

    macro_rules! app {
        ($store:expr) => {{
            let store: Arc<dyn ClientStore> = $store.clone();
            test::init_service(App::new().configure(|cfg| handlers::configure(cfg, web::Data::from(store)))).await
        }};
    }

    #[actix_web::test]
    async fn test_list_returns_stored_clients() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/client").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<Client> = test::read_body_json(resp).await;
        assert_eq!(body, vec![daniela()]);
    }

    #[actix_web::test]
    async fn test_list_empty_store_is_empty_array() {
        let store = store_with(vec![]);
        let app = app!(store);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/client").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Vec<Client> = test::read_body_json(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn test_get_by_id() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/client/112345523").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Client = test::read_body_json(resp).await;
        assert_eq!(body.id, "112345523");
        assert_eq!(body, daniela());
    }

    #[actix_web::test]
    async fn test_get_unknown_id_is_404() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/client/999").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, 404);
    }

    #[actix_web::test]
    async fn test_create_echoes_client() {
        let store = store_with(vec![]);
        let app = app!(store);
        let req = test::TestRequest::post().uri("/v1/client/").set_json(daniela()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Client = test::read_body_json(resp).await;
        assert_eq!(body, daniela());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_create_without_trailing_slash() {
        let store = store_with(vec![]);
        let app = app!(store);
        let req = test::TestRequest::post().uri("/v1/client").set_json(daniela()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    #[actix_web::test]
    async fn test_create_malformed_body_is_400() {
        let store = store_with(vec![]);
        let app = app!(store);
        let req = test::TestRequest::post().uri("/v1/client/").insert_header(ContentType::json()).set_payload("{\"id\":").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, 400);
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_create_without_id_is_400() {
        let store = store_with(vec![]);
        let app = app!(store);
        for payload in [serde_json::json!({"name": "NoId"}), serde_json::json!({"id": "", "name": "NoId"}), serde_json::json!({"id": "  "})] {
            let req = test::TestRequest::post().uri("/v1/client/").set_json(&payload).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(body.message, "Bad request: client id is required");
        }
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_update_replaces_whole_client() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let replacement = Client::builder().id("112345523").name("Lita").last_name("Lara").client_type("PERSONNEL").build();
        let req = test::TestRequest::put().uri("/v1/client/112345523").set_json(&replacement).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Client = test::read_body_json(resp).await;
        assert_eq!(body, replacement);
        let stored = store.find_by_id("112345523").await.unwrap().unwrap();
        assert_eq!(stored.email, "");
        assert_eq!(stored.name, "Lita");
    }

    #[actix_web::test]
    async fn test_update_keeps_path_id() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let mut payload = daniela();
        payload.id = "other".to_string();
        payload.name = "Lita".to_string();
        let req = test::TestRequest::put().uri("/v1/client/112345523").set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Client = test::read_body_json(resp).await;
        assert_eq!(body.id, "112345523");
        assert!(store.find_by_id("other").await.unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_404() {
        let store = store_with(vec![]);
        let app = app!(store);
        let req = test::TestRequest::put().uri("/v1/client/112345523").set_json(daniela()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_then_absent() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let resp = test::call_service(&app, test::TestRequest::delete().uri("/v1/client/112345523").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/client/112345523").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_unknown_id_is_404() {
        let store = store_with(vec![daniela()]);
        let app = app!(store);
        let resp = test::call_service(&app, test::TestRequest::delete().uri("/v1/client/1").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.len(), 1);
    }
}
