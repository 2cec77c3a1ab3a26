use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::env;
use std::path::PathBuf;

use pyproject_init::{
    init_project, setup,
    slug::{is_valid_identifier, slugify},
    InitOptions,
};

/// pyproject-init-tool
///
/// pyproject-init 的辅助命令：指定目录初始化、JSON 输出、包名预览
#[derive(Parser)]
#[command(name = "pyproject-init-tool")]
#[command(author, version = env!("APP_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 初始化项目
    Init {
        /// 项目根目录（默认当前目录）
        #[arg(short = 'C', long)]
        root: Option<PathBuf>,

        /// 以 JSON 输出结果
        #[arg(long)]
        json: bool,
    },

    /// 打印项目名对应的包名，不修改任何文件
    Slug {
        /// 项目名称
        name: String,
    },

    /// 用指定解释器把参数交给 setuptools
    Setup {
        /// Python 解释器（默认读取 PYPROJECT_INIT_PYTHON，否则 python3）
        #[arg(long, value_name = "PATH")]
        python: Option<String>,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn run_init(root: Option<PathBuf>, json: bool) -> Result<()> {
    let root = match root {
        Some(root) => root,
        None => env::current_dir()?,
    };

    // 与 pyproject-init 一致：前置条件失败只打印，不改变退出码
    init_project(&InitOptions::new(root), json)?;
    Ok(())
}

fn show_slug(name: &str) -> Result<()> {
    let slug = slugify(name);

    if !is_valid_identifier(&slug) {
        eprintln!(
            "{}",
            format!("⚠️  \"{}\" has no characters usable in a package name", name).yellow()
        );
        std::process::exit(1);
    }

    println!("{}", slug);
    Ok(())
}

fn run_setup(python: Option<&str>, args: &[String]) -> Result<()> {
    let python = setup::resolve_python(python);
    let cwd = env::current_dir()?;

    let code = setup::run_setuptools(&python, args, &cwd)?;
    std::process::exit(code);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { root, json } => run_init(root, json),
        Commands::Slug { name } => show_slug(&name),
        Commands::Setup { python, args } => run_setup(python.as_deref(), &args),
    }
}
