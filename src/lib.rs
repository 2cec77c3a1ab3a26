// pyproject-init - Library Root
//
// 根据 pyproject.toml 生成 Python 包骨架

pub mod manifest;
pub mod project;
pub mod setup;
pub mod slug;
pub mod templates;
pub mod utils;

// 重新导出常用类型
pub use manifest::Manifest;
pub use project::{init_project, initialize, InitError, InitOptions, InitReport};
pub use slug::slugify;
