//! 初始化失败原因

use std::path::PathBuf;
use thiserror::Error;

/// 项目初始化错误
///
/// 除 `Io` 外都是用户需要自行修正的前置条件，`Io` 是读写文件本身失败。
#[derive(Debug, Error)]
pub enum InitError {
    #[error("{} not found", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Could not find project name in {}", .0.display())]
    NameNotFound(PathBuf),

    #[error("Please update the project name in pyproject.toml first (found \"{0}\")")]
    PlaceholderNotReplaced(String),

    #[error("Package directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("I/O error on {}: {cause:#}", path.display())]
    Io {
        path: PathBuf,
        cause: anyhow::Error,
    },
}

impl InitError {
    /// 稳定的错误标识（用于 JSON 输出）
    pub fn kind(&self) -> &'static str {
        match self {
            InitError::ManifestNotFound(_) => "manifest_not_found",
            InitError::NameNotFound(_) => "name_not_found",
            InitError::PlaceholderNotReplaced(_) => "placeholder_not_replaced",
            InitError::AlreadyExists(_) => "already_exists",
            InitError::Io { .. } => "io",
        }
    }

    /// 给用户的修正提示
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InitError::PlaceholderNotReplaced(_) => {
                Some("Change name = \"[project-name]\" to your actual project name")
            }
            InitError::AlreadyExists(_) => {
                Some("Remove the directory or choose a different project name, then re-run")
            }
            _ => None,
        }
    }
}
