use anyhow::Result;
use std::env;
use std::ffi::OsString;

use pyproject_init::{init_project, setup, InitOptions};

// ═══════════════════════════════════════════════════════════════════
// Main
// ═══════════════════════════════════════════════════════════════════
//
// pyproject-init           初始化 src/<package>/ 骨架
// pyproject-init <ARGS..>  所有参数原样交给 setuptools（含 --help、--version）
//
// 本工具自己的命令（--root、--json、slug 等）在 pyproject-init-tool 中提供。

fn main() -> Result<()> {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    let cwd = env::current_dir()?;

    if !args.is_empty() {
        let python = setup::resolve_python(None);
        let code = setup::run_setuptools(&python, &args, &cwd)?;
        std::process::exit(code);
    }

    // 失败信息已打印，返回值只作提示，进程正常退出
    init_project(&InitOptions::new(cwd), false)?;
    Ok(())
}
