use std::env;
use std::fs;

fn main() {
    // 优先使用 VERSION 文件，缺失时回退到 Cargo.toml 中的版本
    let version = fs::read_to_string("VERSION")
        .map(|v| v.trim().to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| env::var("CARGO_PKG_VERSION").unwrap_or_default());

    println!("cargo:rustc-env=APP_VERSION={}", version);
    println!("cargo:rerun-if-changed=VERSION");
}
