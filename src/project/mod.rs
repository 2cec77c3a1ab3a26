//! 项目管理模块
//!
//! 提供项目初始化功能

pub mod error;
pub mod initializer;

// 重导出
pub use error::InitError;
pub use initializer::*;
