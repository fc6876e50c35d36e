use crate::errors::AppError;
use config::Config;
use serde::Deserialize;

/// 默认配置文件
pub const DEFAULT_CONFIG_FILE: &str = "main-config.toml";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
}

impl AppConfig {
    /// 读取配置文件，并叠加 APP_ 前缀的环境变量（如 APP_SERVER_PORT）
    pub fn new(file: &str) -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(config::File::with_name(file).required(true))
            .add_source(config::Environment::with_prefix("APP").separator("_"))
            .build()?;
        Ok(config.try_deserialize::<AppConfig>()?)
    }

    /// 从 TOML 文本构建，不读取环境变量
    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let config = Config::builder().add_source(config::File::from_str(content, config::FileFormat::Toml)).build()?;
        Ok(config.try_deserialize::<AppConfig>()?)
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
}

/// 客户数据存储类型
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Mongo,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub db_name: String,
    pub store: StoreKind,
}
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { url: "mongodb://localhost:27017".to_string(), db_name: "client_db".to_string(), store: StoreKind::Mongo }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}
impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    // keep-alive 秒数
    pub keep_alive_secs: u64,
}
impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080, keep_alive_secs: 600 }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
