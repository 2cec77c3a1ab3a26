//! 嵌入资源管理
//!
//! 使用 rust-embed 将模板文件编译进二进制

pub mod files;

pub use files::{render, render_init_py_with, TemplateAssets, INIT_PY};
