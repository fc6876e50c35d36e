use actix_web::http::KeepAlive;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use biz_service::build_client_store;
use common::config::{AppConfig, DEFAULT_CONFIG_FILE, SysConfig};
use common::errors::AppError;
use log::{LevelFilter, warn};
use std::io;
use std::str::FromStr;
use std::time::Duration;
use web_main::handlers;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 读取配置文件，可由第一个参数指定
    let file = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
    let app_cfg = AppConfig::new(&file).map_err(io::Error::other)?;
    //初始化日志
    init_log(&app_cfg.get_sys()).map_err(io::Error::other)?;

    let store = build_client_store(&app_cfg.get_database()).await.map_err(io::Error::other)?;
    let store = web::Data::from(store);

    let server_cfg = app_cfg.get_server();
    let address_and_port = server_cfg.address();
    warn!("Starting server on {}", address_and_port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // 配置 控制器
            .configure(|cfg| {
                handlers::configure(cfg, store.clone());
            })
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(server_cfg.keep_alive_secs)))
    .bind(address_and_port)?
    .run()
    .await
}

pub fn init_log(config: &SysConfig) -> Result<(), AppError> {
    let level = LevelFilter::from_str(&config.log_level).map_err(|e| AppError::Internal(format!("log level {}: {}", config.log_level, e)))?;
    env_logger::Builder::new().filter(None, level).try_init().map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(())
}
