//! Integration tests driving the compiled binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV_OVERRIDES: &[&str] = &[
    "CINDERBUILD_PROJECT",
    "CINDERBUILD_PROJECT_NAME",
    "CINDERBUILD_CMAKE",
    "CINDERBUILD_CLANG_FORMAT",
    "CINDERBUILD_CLANG_TIDY",
    "CINDERBUILD_RUN_CLANG_TIDY",
];

/// A command running in `dir` with no configuration leaking in from the
/// environment.
fn cinderbuild(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("cinderbuild"));
    cmd.current_dir(dir);
    for var in ENV_OVERRIDES {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str, script: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("configure"))
        .stdout(predicate::str::contains("package"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_without_subcommand_prints_usage_and_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_check_without_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("tidy"));
    Ok(())
}

#[test]
fn cli_invalid_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .arg("deploy")
        .assert()
        .failure();
    Ok(())
}

#[test]
fn cli_test_without_build_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["--project", temp.path().to_str().unwrap(), "test"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Build directory 'build' not found"));
    Ok(())
}

#[test]
fn cli_build_without_build_dir_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["--project", temp.path().to_str().unwrap(), "build"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Run configure first"));
    Ok(())
}

#[test]
fn cli_build_skip_build() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["build", "--skip-build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping build"));
    Ok(())
}

#[test]
fn cli_clean_removes_build_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("build/CMakeFiles"))?;
    cinderbuild(temp.path())
        .args(["--project", temp.path().to_str().unwrap(), "clean", "build"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Clean complete."));
    assert!(!temp.path().join("build").exists());
    Ok(())
}

#[test]
fn cli_clean_missing_build_dir_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["--project", temp.path().to_str().unwrap(), "clean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn cli_prepare_without_hooks_warns() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".git/hooks"))?;
    cinderbuild(temp.path())
        .args(["--project", temp.path().to_str().unwrap(), "prepare"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No hooks found"));
    Ok(())
}

#[test]
fn cli_prepare_installs_hooks_once() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join(".git/hooks"))?;
    fs::create_dir_all(temp.path().join("dev/hooks"))?;
    fs::write(temp.path().join("dev/hooks/pre-commit"), "#!/bin/sh\n")?;
    let project = temp.path().to_str().unwrap();

    cinderbuild(temp.path())
        .args(["--project", project, "prepare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit installed"));
    assert_eq!(
        fs::read_to_string(temp.path().join(".git/hooks/pre-commit"))?,
        "#!/bin/sh\n"
    );

    cinderbuild(temp.path())
        .args(["--project", project, "prepare"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pre-commit already installed."));
    Ok(())
}

#[test]
fn cli_package_source_requires_release_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["package", "source"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--release-version is required"));
    Ok(())
}

#[test]
fn cli_missing_tool_reports_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["configure", "--cmake-path", "/no/such/cmake"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CMake is required"));
    assert!(!temp.path().join("build").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_configure_runs_cmake_in_build_dir() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let tools = TempDir::new()?;
    let cmake = fake_tool(tools.path(), "cmake", r#"echo "$@" > args.txt"#);

    cinderbuild(temp.path())
        .env("CINDERBUILD_CMAKE", &cmake)
        .args([
            "--project",
            temp.path().to_str().unwrap(),
            "configure",
            "--with-tests",
            "--ninja",
            "-D",
            "FOO=1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration complete"));

    let args = fs::read_to_string(temp.path().join("build/args.txt"))?;
    assert!(args.ends_with("-DCMAKE_BUILD_TYPE=RelWithDebInfo -DBUILD_TESTS=ON -GNinja -DFOO=1\n"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_cmake_path_flag_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let tools = TempDir::new()?;
    let from_env = fake_tool(tools.path(), "cmake-env", "touch env.txt; exit 3");
    let from_flag = fake_tool(tools.path(), "cmake-flag", "touch flag.txt");

    cinderbuild(temp.path())
        .env("CINDERBUILD_CMAKE", &from_env)
        .args([
            "--project",
            temp.path().to_str().unwrap(),
            "configure",
            "--cmake-path",
            from_flag.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(temp.path().join("build/flag.txt").is_file());
    assert!(!temp.path().join("build/env.txt").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_verbose_reports_resolved_tool() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let tools = TempDir::new()?;
    let cmake = fake_tool(tools.path(), "cmake", "exit 0");

    cinderbuild(temp.path())
        .env("CINDERBUILD_CMAKE", &cmake)
        .args(["--project", temp.path().to_str().unwrap(), "--verbose", "configure"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Using {}:", cmake.display())))
        .stdout(predicate::str::contains("  in "));

    cinderbuild(temp.path())
        .env("CINDERBUILD_CMAKE", &cmake)
        .args(["--project", temp.path().to_str().unwrap(), "configure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using ").not());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_tool_failure_exits_one_with_command_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let tools = TempDir::new()?;
    let cmake = fake_tool(tools.path(), "cmake", "exit 2");
    fs::create_dir_all(temp.path().join("build"))?;

    cinderbuild(temp.path())
        .args(["build", "--cmake-path", cmake.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to run:"))
        .stderr(predicate::str::contains("exit with code: 2"));
    Ok(())
}

#[test]
fn cli_generates_completions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cinderbuild(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cinderbuild"));
    Ok(())
}
