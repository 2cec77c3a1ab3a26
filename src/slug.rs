//! 包名规范化
//!
//! 把人类可读的项目名称转换为合法的 Python 包标识符

/// 将项目名称转换为 Python 包名
///
/// 规则：
/// 1. 转小写，空格和连字符替换为下划线
/// 2. 删除 `[a-z0-9_]` 之外的所有字符
/// 3. 如果以数字开头，前面补一个下划线
///
/// 任何输入都会返回结果，可能是空字符串。
pub fn slugify(name: &str) -> String {
    let mut slug: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect();

    if slug.starts_with(|c: char| c.is_ascii_digit()) {
        slug.insert(0, '_');
    }

    slug
}

/// 检查是否为合法的包标识符（`^[a-z_][a-z0-9_]*$`）
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
