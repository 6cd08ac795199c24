//! 配置：数据库连接参数来自环境变量，监听端口固定

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// 固定监听地址
pub const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

pub const DEFAULT_PG_HOST: &str = "localhost";
pub const DEFAULT_PG_PORT: u16 = 5432;

/// 进程配置
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database: DatabaseConfig,
}

impl Config {
    /// 从进程环境变量加载配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            database: DatabaseConfig::from_lookup(lookup)?,
        })
    }
}

/// 数据库连接配置，对应 `pghost` / `pgport` / `pguser` / `pgpass` / `pgdbname`
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: Option<String>,
    pub password: Option<String>,
    pub dbname: Option<String>,
}

impl DatabaseConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // 空值按未设置处理
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let port = match get("pgport") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PG_PORT,
        };

        Ok(Self {
            host: get("pghost").unwrap_or_else(|| DEFAULT_PG_HOST.to_string()),
            port,
            user: get("pguser"),
            password: get("pgpass"),
            dbname: get("pgdbname"),
        })
    }

    /// 构造 sqlx 连接参数，始终禁用 TLS
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .ssl_mode(PgSslMode::Disable);

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(dbname) = &self.dbname {
            options = options.database(dbname);
        }
        options
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("dbname", &self.dbname)
            .finish()
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid pgport value: {0:?}")]
    InvalidPort(String),
}
