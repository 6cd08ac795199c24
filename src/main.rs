use anyhow::Context;
use customer_api::{
    app::{create_app, users::routes::Endpoint, AppState},
    config::Config,
    infrastructure::{DatabaseManager, Logger},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    Logger::init();

    let config = Config::from_env().context("failed to load configuration")?;

    // 数据库连接失败直接退出，不进入监听
    let db = DatabaseManager::connect(&config.database)
        .await
        .map_err(|e| {
            error!("Error connecting to DB: {}", e);
            e
        })
        .context("failed to connect to database")?;

    let state = AppState::new(Arc::new(db.user_store()));
    let app = create_app(state);

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    let addr = listener.local_addr()?;

    info!("Service started on http://{}", addr);
    for endpoint in Endpoint::ALL {
        info!(
            "   {:<6} {:<13} - {}",
            endpoint.method().as_str(),
            endpoint.path(),
            endpoint.describe()
        );
    }

    axum::serve(listener, app).await?;

    Ok(())
}
