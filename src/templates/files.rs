//! 模板文件嵌入
//!
//! 嵌入项目初始化所需的模板文件

use anyhow::{anyhow, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rust_embed::RustEmbed;

/// 包入口文件模板名
pub const INIT_PY: &str = "__init__.py";

/// 模板文件资源（编译时嵌入）
#[derive(RustEmbed)]
#[folder = "embedded/templates/"]
pub struct TemplateAssets;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{(\w+)\}\}").unwrap();
}

impl TemplateAssets {
    /// `__init__.py` 模板原文
    pub fn init_py_template() -> Result<String> {
        Self::get_file(INIT_PY)
    }

    /// 渲染 `__init__.py`
    pub fn render_init_py(project_name: &str, version: &str) -> Result<String> {
        render_init_py_with(&Self::init_py_template()?, project_name, version)
    }

    /// 获取指定模板文件
    fn get_file(filename: &str) -> Result<String> {
        let file = Self::get(filename)
            .ok_or_else(|| anyhow!("Template '{}' not found", filename))?;

        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| anyhow!("Failed to decode template '{}': {}", filename, e))?;

        Ok(content.to_string())
    }

    /// 列出所有可用的模板文件
    pub fn list_templates() -> Vec<String> {
        Self::iter()
            .map(|path| path.as_ref().to_string())
            .collect()
    }
}

/// 用给定模板渲染 `__init__.py`
pub fn render_init_py_with(template: &str, project_name: &str, version: &str) -> Result<String> {
    render(template, &[("project_name", project_name), ("version", version)])
}

/// 单遍替换 `{{key}}` 占位符，变量值中的花括号不会被二次展开
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String> {
    let mut missing = None;

    let rendered = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        let key = &caps[1];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => value.to_string(),
            None => {
                missing.get_or_insert_with(|| key.to_string());
                caps[0].to_string()
            }
        }
    });

    match missing {
        Some(key) => Err(anyhow!("Template variable '{}' has no value", key)),
        None => Ok(rendered.into_owned()),
    }
}

// ═══════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════
