use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const TEMPLATE: &str = r#"[build-system]
requires = ["setuptools>=61.0", "wheel"]
build-backend = "setuptools.build_meta"

[project]
name = "[project-name]"
version = "0.3.0"
requires-python = ">=3.9"

[project.optional-dependencies]
dev = ["pytest"]

[tool.setuptools.packages.find]
where = ["src"]
include = ["[project-name]*"]
"#;

fn project(name: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let content = TEMPLATE.replacen("name = \"[project-name]\"", &format!("name = \"{}\"", name), 1);
    fs::write(temp.path().join("pyproject.toml"), content).unwrap();
    temp
}

fn bin(name: &str, dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("PYPROJECT_INIT_PYTHON");
    cmd
}

fn cmd(dir: &Path) -> Command {
    bin("pyproject-init", dir)
}

fn tool(dir: &Path) -> Command {
    bin("pyproject-init-tool", dir)
}

#[test]
fn test_no_args_initializes_project() {
    let temp = project("My Cool App");

    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initializing project: My Cool App"))
        .stdout(predicate::str::contains("Package name: my_cool_app"))
        .stdout(predicate::str::contains("Created: src/my_cool_app/__init__.py"))
        .stdout(predicate::str::contains("pip install -e"));

    let init = fs::read_to_string(temp.path().join("src/my_cool_app/__init__.py")).unwrap();
    assert_eq!(
        init,
        "\"\"\"Package for My Cool App\"\"\"\n\n__version__ = \"0.3.0\"\n"
    );

    let manifest = fs::read_to_string(temp.path().join("pyproject.toml")).unwrap();
    assert!(manifest.contains(r#"include = ["my_cool_app*"]"#));
    assert!(manifest.contains(r#"dev = ["pytest"]"#));
}

#[test]
fn test_placeholder_rejected() {
    let temp = project("[project-name]");

    // 失败只打印诊断，退出码仍为 0
    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Please update the project name"))
        .stdout(predicate::str::contains(
            "Change name = \"[project-name]\" to your actual project name",
        ));

    assert!(!temp.path().join("src").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("pyproject.toml")).unwrap(),
        TEMPLATE
    );
}

#[test]
fn test_missing_manifest() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pyproject.toml not found"));

    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_second_run_fails() {
    let temp = project("3dTool");

    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Package name: _3dtool"));

    let manifest = fs::read_to_string(temp.path().join("pyproject.toml")).unwrap();

    cmd(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Package directory already exists"));

    assert_eq!(
        fs::read_to_string(temp.path().join("pyproject.toml")).unwrap(),
        manifest
    );
}

#[test]
fn test_init_with_root_and_json() {
    let temp = project("data-pipeline");
    let elsewhere = TempDir::new().unwrap();

    let output = tool(elsewhere.path())
        .args(["init", "--json", "-C"])
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "initialized");
    assert_eq!(value["package_name"], "data_pipeline");
    assert_eq!(value["version"], "0.3.0");
    assert_eq!(value["include_rewritten"], true);

    assert!(temp.path().join("src/data_pipeline/__init__.py").is_file());
    assert!(!elsewhere.path().join("src").exists());
}

#[test]
fn test_json_failure() {
    let temp = project("project-name");

    let output = tool(temp.path()).args(["init", "--json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "failed");
    assert_eq!(value["error"], "placeholder_not_replaced");
}

#[test]
fn test_slug_command() {
    let temp = TempDir::new().unwrap();

    tool(temp.path())
        .args(["slug", "My Cool App"])
        .assert()
        .success()
        .stdout("my_cool_app\n");

    tool(temp.path())
        .args(["slug", "???"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no characters usable"));
}

#[test]
fn test_passthrough_missing_interpreter() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .env("PYPROJECT_INIT_PYTHON", "no-such-python-interpreter")
        .arg("build")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-python-interpreter"));
}

#[test]
fn test_empty_package_name_uses_src() {
    let temp = project("!!!");

    cmd(temp.path()).assert().success();

    assert!(temp.path().join("src/__init__.py").is_file());
    let manifest = fs::read_to_string(temp.path().join("pyproject.toml")).unwrap();
    assert!(manifest.contains(r#"include = ["*"]"#));
}

#[cfg(unix)]
#[test]
fn test_any_arguments_forwarded_verbatim() {
    let temp = project("demo");

    // echo 充当解释器，回显收到的全部参数
    for args in [vec!["-q", "sdist"], vec!["--version"], vec!["--name"], vec!["init"]] {
        let expected = format!("-c from setuptools import setup; setup() {}\n", args.join(" "));
        cmd(temp.path())
            .env("PYPROJECT_INIT_PYTHON", "echo")
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::diff(expected));
    }

    assert!(!temp.path().join("src").exists());
}

#[cfg(unix)]
#[test]
fn test_passthrough_exit_code() {
    let temp = TempDir::new().unwrap();

    cmd(temp.path())
        .env("PYPROJECT_INIT_PYTHON", "true")
        .arg("sdist")
        .assert()
        .success();

    cmd(temp.path())
        .env("PYPROJECT_INIT_PYTHON", "false")
        .arg("bdist_wheel")
        .assert()
        .code(1);

    tool(temp.path())
        .args(["setup", "--python", "false", "bdist_wheel"])
        .assert()
        .code(1);

    assert!(!temp.path().join("src").exists());
}
