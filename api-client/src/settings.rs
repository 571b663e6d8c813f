//! 客户端设置模块

use std::time::Duration;

use common::config::ClientConfig;
use common::errors::{AppError, AppResult};

/// 默认请求超时（秒）
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// 客户端设置：服务端位置与共享 HTTP 客户端
#[derive(Clone)]
pub struct ServerSettings {
    pub config: ClientConfig,
    pub http_client: reqwest::Client,
}

impl ServerSettings {
    /// 从环境变量加载设置
    pub fn load() -> AppResult<Self> {
        Self::from_config(ClientConfig::load())
    }

    /// 使用指定的服务端地址创建设置（测试中常用）
    pub fn from_base_url(base_url: impl Into<String>) -> AppResult<Self> {
        Self::from_config(ClientConfig::with_base_url(base_url))
    }

    /// 使用现有配置创建设置
    pub fn from_config(config: ClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Config(format!("无法创建 HTTP 客户端: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }
}
