//! setuptools 透传
//!
//! 带参数运行时，所有参数（build、sdist、`-q`、`--version` 等）原样交给 setuptools 处理

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

/// 指定 Python 解释器的环境变量
pub const PYTHON_ENV: &str = "PYPROJECT_INIT_PYTHON";

/// 默认 Python 解释器
pub const DEFAULT_PYTHON: &str = "python3";

/// 交给 setuptools 的入口脚本
pub const SETUPTOOLS_BOOTSTRAP: &str = "from setuptools import setup; setup()";

/// 选择解释器：命令行参数 > 环境变量 > python3
pub fn resolve_python(explicit: Option<&str>) -> String {
    choose_python(explicit, env::var(PYTHON_ENV).ok())
}

fn choose_python(explicit: Option<&str>, from_env: Option<String>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| from_env.filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string())
}

/// 构造 `python -c "<bootstrap>" <args...>`
pub fn setuptools_command<S: AsRef<OsStr>>(python: &str, args: &[S], cwd: &Path) -> Command {
    let mut cmd = Command::new(python);
    cmd.arg("-c").arg(SETUPTOOLS_BOOTSTRAP).args(args).current_dir(cwd);
    cmd
}

/// 运行 setuptools 并返回其退出码
///
/// 子进程继承 stdin/stdout/stderr；被信号终止时返回 1。
pub fn run_setuptools<S: AsRef<OsStr>>(python: &str, args: &[S], cwd: &Path) -> Result<i32> {
    let status = setuptools_command(python, args, cwd)
        .status()
        .with_context(|| format!("Failed to run Python interpreter '{}'", python))?;

    Ok(status.code().unwrap_or(1))
}
