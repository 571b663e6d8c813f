//! SQL 服务端探测工具
//!
//! 对配置的服务端执行一次数据库结构获取并打印结果，用于验证
//! 部署环境与连接配置。

use anyhow::Context;
use api_client::{ServerApi, ServerClient, ServerSettings};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 连接标识环境变量
const CONNECTION_ENV: &str = "SQL_CONNECTION_URL";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (if present) before anything else
    load_dotenv();

    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 连接标识：优先取命令行参数，其次取环境变量
    let connection_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONNECTION_ENV).ok())
        .with_context(|| format!("missing connection identifier (argument or {})", CONNECTION_ENV))?;

    let settings = ServerSettings::load()?;
    info!(base_url = %settings.config.base_url, connection_url = %connection_url, "探测 SQL 服务端");

    let client = ServerClient::new(settings);
    let result = client.database_structure(&connection_url).await?;

    result.match_with(
        |structure| {
            println!("tables ({}):", structure.tables.len());
            for table in &structure.tables {
                println!("  {}", table);
            }
        },
        |err| {
            eprintln!("error: {}", err.message);
        },
    );

    Ok(())
}

/// Load .env file from the working directory (best-effort, no error if missing).
fn load_dotenv() {
    let env_path = std::path::Path::new(".env");
    if env_path.exists() {
        if let Ok(content) = std::fs::read_to_string(env_path) {
            for line in content.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();
                    // Only set if not already set by the environment
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
        }
    }
}
