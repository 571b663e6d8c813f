//! 数据访问客户端模块

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use common::errors::{AppError, AppResult};
use common::models::database::{DatabaseStructure, DatabaseStructureRequest};
use common::models::query::{QueryRequest, ResultSet};
use common::models::table::TableContentsRequest;
use common::response::ServerResponse;

use crate::settings::ServerSettings;

/// 请求追踪头，与服务端中间件约定一致
const REQUEST_ID_HEADER: &str = "x-request-id";

/// 数据访问 API Trait
///
/// 每个操作发送一次 POST 请求并返回响应封套；服务端报告的错误
/// 与异常 HTTP 状态都以 `error` 封套形式返回，仅传输层失败会
/// 作为 `Err` 传播。
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// 获取数据库结构（表清单）
    async fn database_structure(
        &self,
        connection_url: &str,
    ) -> AppResult<ServerResponse<DatabaseStructure>>;

    /// 获取单表全部数据
    async fn table_contents(
        &self,
        connection_url: &str,
        table: &str,
    ) -> AppResult<ServerResponse<ResultSet>>;

    /// 执行 SQL 查询
    async fn execute_query(
        &self,
        connection_url: &str,
        query: &str,
    ) -> AppResult<ServerResponse<ResultSet>>;
}

/// 基于 reqwest 的数据访问客户端
#[derive(Clone)]
pub struct ServerClient {
    settings: ServerSettings,
}

impl ServerClient {
    /// 创建新的客户端实例
    pub fn new(settings: ServerSettings) -> Self {
        Self { settings }
    }

    /// 发送请求并解析响应封套
    ///
    /// 单次往返，无重试、无缓存。HTTP 状态非 2xx 时不解析响应体，
    /// 直接合成 error 封套；2xx 但响应体不是合法封套时同样合成
    /// error 封套。
    async fn post_envelope<B, T>(&self, path: &str, body: &B) -> AppResult<ServerResponse<T>>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let url = self.settings.config.endpoint(path);
        let request_id = Uuid::new_v4().to_string();

        let response = self
            .settings
            .http_client
            .post(&url)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("无法连接到 SQL 服务端: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(request_id = %request_id, url = %url, status = %status, "服务端返回异常状态");
            return Ok(ServerResponse::from_status(status.as_u16()));
        }

        match response.json::<ServerResponse<T>>().await {
            Ok(envelope) => Ok(envelope),
            Err(e) => {
                tracing::warn!(request_id = %request_id, url = %url, error = %e, "响应体解析失败");
                Ok(ServerResponse::from_decode_error(e))
            }
        }
    }
}

#[async_trait]
impl ServerApi for ServerClient {
    async fn database_structure(
        &self,
        connection_url: &str,
    ) -> AppResult<ServerResponse<DatabaseStructure>> {
        let req = DatabaseStructureRequest::new(connection_url);
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tracing::info!(connection_url = %req.connection_url, "获取数据库结构");
        self.post_envelope("database", &req).await
    }

    async fn table_contents(
        &self,
        connection_url: &str,
        table: &str,
    ) -> AppResult<ServerResponse<ResultSet>> {
        let req = TableContentsRequest::new(connection_url, table);
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tracing::info!(connection_url = %req.connection_url, table = %req.table, "获取表数据");
        self.post_envelope("table", &req).await
    }

    async fn execute_query(
        &self,
        connection_url: &str,
        query: &str,
    ) -> AppResult<ServerResponse<ResultSet>> {
        let req = QueryRequest::new(connection_url, query);
        req.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        tracing::info!(connection_url = %req.connection_url, "执行 SQL 查询");
        self.post_envelope("query", &req).await
    }
}
