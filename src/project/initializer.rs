//! 项目初始化
//!
//! 读取 pyproject.toml，创建 `src/<package>/__init__.py` 并改写 include 字段。
//!
//! 分两步执行：
//! 1. [`plan`] 只读检查清单、项目名和占位符，算出包名
//! 2. [`InitPlan::apply`] 检查目标目录后才开始写文件
//!
//! 任何前置条件失败都不会留下文件系统改动。

use anyhow::Result;
use colored::*;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

use super::error::InitError;
use crate::manifest::{is_placeholder, Manifest, MANIFEST_FILE};
use crate::slug::slugify;
use crate::templates::{render_init_py_with, TemplateAssets, INIT_PY};
use crate::utils::{create_dir_all, display_relative, path_exists, write_file};

/// 源码目录（相对项目根目录）
pub const SRC_DIR: &str = "src";

/// 初始化选项
#[derive(Debug, Clone)]
pub struct InitOptions {
    pub root: PathBuf,
}

impl InitOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }
}

/// 前置条件（除目标目录外）已通过的初始化计划
#[derive(Debug)]
pub struct InitPlan {
    root: PathBuf,
    manifest: Manifest,
    pub project_name: String,
    pub package_name: String,
    pub version: String,
    pub package_dir: PathBuf,
}

/// 初始化结果
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    pub project_name: String,
    pub package_name: String,
    pub version: String,
    pub package_dir: PathBuf,
    pub init_file: PathBuf,
    pub manifest_path: PathBuf,
    pub include_rewritten: bool,
}

/// 检查清单并生成初始化计划（只读）
pub fn plan(options: &InitOptions) -> Result<InitPlan, InitError> {
    let manifest_path = options.manifest_path();
    // 只判断是否存在；同名目录等异常情况交给读取时报 I/O 错误
    if !path_exists(&manifest_path) {
        return Err(InitError::ManifestNotFound(manifest_path));
    }

    let manifest = Manifest::load(&manifest_path).map_err(|cause| InitError::Io {
        path: manifest_path.clone(),
        cause,
    })?;

    let project_name = manifest
        .project_name()
        .ok_or_else(|| InitError::NameNotFound(manifest_path.clone()))?
        .to_string();

    if is_placeholder(&project_name) {
        return Err(InitError::PlaceholderNotReplaced(project_name));
    }

    // 包名可能为空，此时目标目录就是 src/ 本身
    let package_name = slugify(&project_name);

    let version = manifest.version().to_string();
    let package_dir = options.src_dir().join(&package_name);

    Ok(InitPlan {
        root: options.root.clone(),
        manifest,
        project_name,
        package_name,
        version,
        package_dir,
    })
}

impl InitPlan {
    /// 创建包目录、写入 `__init__.py`、改写清单
    pub fn apply(mut self) -> Result<InitReport, InitError> {
        if path_exists(&self.package_dir) {
            return Err(InitError::AlreadyExists(self.package_dir));
        }

        let init_file = self.package_dir.join(INIT_PY);

        // 先渲染模板，失败时还没有任何写入
        let template = TemplateAssets::init_py_template().map_err(|cause| InitError::Io {
            path: init_file.clone(),
            cause,
        })?;
        let init_content =
            render_init_file(&template, &init_file, &self.project_name, &self.version)?;

        create_dir_all(&self.package_dir).map_err(|cause| InitError::Io {
            path: self.package_dir.clone(),
            cause,
        })?;

        write_file(&init_file, &init_content).map_err(|cause| InitError::Io {
            path: init_file.clone(),
            cause,
        })?;

        let include_rewritten = self.manifest.rewrite_include(&self.package_name);
        self.manifest.save().map_err(|cause| InitError::Io {
            path: self.manifest.path().to_path_buf(),
            cause,
        })?;

        Ok(InitReport {
            project_name: self.project_name,
            package_name: self.package_name,
            version: self.version,
            package_dir: self.package_dir,
            init_file,
            manifest_path: self.manifest.path().to_path_buf(),
            include_rewritten,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn render_init_file(
    template: &str,
    init_file: &Path,
    project_name: &str,
    version: &str,
) -> Result<String, InitError> {
    render_init_py_with(template, project_name, version).map_err(|cause| InitError::Io {
        path: init_file.to_path_buf(),
        cause,
    })
}

/// 执行完整初始化，不输出任何内容
pub fn initialize(options: &InitOptions) -> Result<InitReport, InitError> {
    plan(options)?.apply()
}

// ═══════════════════════════════════════════════════════════════════
// CLI 入口
// ═══════════════════════════════════════════════════════════════════

/// 初始化项目并打印结果
///
/// 前置条件失败时打印诊断并返回 `Ok(false)`；`--json` 模式下所有失败都以 JSON 输出。
pub fn init_project(options: &InitOptions, json_output: bool) -> Result<bool> {
    if json_output {
        return init_project_json(options);
    }

    let plan = match plan(options) {
        Ok(plan) => plan,
        Err(err) => return report_failure(err),
    };

    println!("Initializing project: {}", plan.project_name.yellow());
    println!("Package name: {}", plan.package_name.cyan());

    let root = plan.root().to_path_buf();
    match plan.apply() {
        Ok(report) => {
            print_success(&report, &root);
            Ok(true)
        }
        Err(err) => report_failure(err),
    }
}

fn init_project_json(options: &InitOptions) -> Result<bool> {
    match initialize(options) {
        Ok(report) => {
            let mut value = serde_json::to_value(&report)?;
            value["status"] = json!("initialized");
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(true)
        }
        Err(err) => {
            let value = json!({
                "status": "failed",
                "error": err.kind(),
                "message": err.to_string(),
                "hint": err.hint(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(false)
        }
    }
}

fn report_failure(err: InitError) -> Result<bool> {
    // 写入阶段的 I/O 错误不是用户可修正的前置条件，直接向上传播
    if let InitError::Io { .. } = err {
        return Err(err.into());
    }

    println!("{}", format!("❌ Error: {}", err).red());
    if let Some(hint) = err.hint() {
        println!("   {}", hint.yellow());
    }
    Ok(false)
}

fn print_success(report: &InitReport, root: &Path) {
    let package_dir = display_relative(&report.package_dir, root);
    let init_file = display_relative(&report.init_file, root);
    let manifest = display_relative(&report.manifest_path, root);

    println!();
    println!("{}", "✅ Project initialized successfully!".green().bold());
    println!("   - Created: {}/", package_dir.cyan());
    println!("   - Created: {}", init_file.cyan());
    println!("   - Updated: {}", manifest.cyan());

    if !report.include_rewritten {
        println!();
        println!(
            "{}",
            format!(
                "⚠️  No single-line include = [...] found in {}; set it to [\"{}*\"] manually",
                manifest, report.package_name
            )
            .yellow()
        );
    }

    println!();
    println!("Next steps:");
    println!(
        "   1. Create a virtual environment: {}",
        "python -m venv venv".cyan()
    );
    println!(
        "   2. Activate it: {} (Windows) or {} (macOS/Linux)",
        "venv\\Scripts\\activate".cyan(),
        "source venv/bin/activate".cyan()
    );
    println!(
        "   3. Install in dev mode: {}",
        "pip install -e \".[dev]\"".cyan()
    );
}
