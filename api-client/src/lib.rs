//! SQL 服务端数据访问客户端
//!
//! 面向笔记本前端的数据访问层，提供以下能力：
//! - 获取数据库结构（表清单）
//! - 获取单表数据
//! - 执行 SQL 查询
//!
//! 服务端统一返回带 `responseType` 标签的响应封套，调用方通过
//! [`common::response::ServerResponse::match_with`] 对结果进行分支处理。

pub mod client;
pub mod settings;

pub use client::{ServerApi, ServerClient};
pub use settings::ServerSettings;
