//! pyproject.toml 文本处理
//!
//! 不做结构化 TOML 解析：整份读入，用正则提取字段，文本替换后整份写回

use anyhow::Result;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use std::path::{Path, PathBuf};

use crate::utils::{read_file, write_file};

/// 清单文件名（相对项目根目录）
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// 缺少 version 字段时使用的版本号
pub const DEFAULT_VERSION: &str = "0.1.0";

/// 模板中尚未替换的项目名占位符
pub const PLACEHOLDER_NAMES: [&str; 2] = ["[project-name]", "project-name"];

// ═══════════════════════════════════════════════════════════════════
// 正则表达式定义
// ═══════════════════════════════════════════════════════════════════

lazy_static! {
    static ref NAME_FIELD: Regex = Regex::new(r#"name\s*=\s*"([^"]+)""#).unwrap();
    static ref VERSION_FIELD: Regex = Regex::new(r#"version\s*=\s*"([^"]+)""#).unwrap();

    // 只匹配单行、单元素的 include = ["..."]
    static ref INCLUDE_FIELD: Regex = Regex::new(r#"include = \["[^"]*"\]"#).unwrap();
    static ref INCLUDE_BODY: Regex = Regex::new(r#"include\s*=\s*\[([^\]\n]*)\]"#).unwrap();
}

/// 检查项目名是否仍是占位符
pub fn is_placeholder(name: &str) -> bool {
    PLACEHOLDER_NAMES.contains(&name)
}

/// 内存中的清单文件
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    content: String,
}

impl Manifest {
    /// 读取清单文件
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_file(path)?;
        Ok(Self::from_content(path, content))
    }

    pub fn from_content(path: &Path, content: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// 第一个 `name = "..."` 的值
    pub fn project_name(&self) -> Option<&str> {
        capture(&NAME_FIELD, &self.content)
    }

    /// 第一个 `version = "..."` 的值，缺省为 0.1.0
    pub fn version(&self) -> &str {
        capture(&VERSION_FIELD, &self.content).unwrap_or(DEFAULT_VERSION)
    }

    /// 第一个单行 `include = [...]` 中括号内的原文
    pub fn include_patterns(&self) -> Option<&str> {
        capture(&INCLUDE_BODY, &self.content)
    }

    /// 把 `include = ["..."]` 改写为 `include = ["<package>*"]`
    ///
    /// 没有匹配（字段缺失或跨多行）时内容保持不变，返回 false。
    pub fn rewrite_include(&mut self, package_name: &str) -> bool {
        if !INCLUDE_FIELD.is_match(&self.content) {
            return false;
        }

        let replacement = format!(r#"include = ["{}*"]"#, package_name);
        self.content = INCLUDE_FIELD
            .replace_all(&self.content, NoExpand(&replacement))
            .into_owned();
        true
    }

    /// 整份写回原路径
    pub fn save(&self) -> Result<()> {
        write_file(&self.path, &self.content)
    }
}

fn capture<'a>(re: &Regex, content: &'a str) -> Option<&'a str> {
    re.captures(content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}
