use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use expectrl::{spawn, Eof};
use std::path::Path;
use tempfile::TempDir;

/// Write a small CSV fixture and point the config lookup at an empty directory.
fn fixture() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    std::fs::write(
        dir.path().join("people.csv"),
        "name,age,city\nalice,30,Oslo\nbob,25,Lund\ncarol,41,Bergen\n",
    )?;
    Ok(dir)
}

fn browser(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("table-browser").unwrap();
    cmd.env("TABLE_BROWSER_CONFIG", dir.join("config.toml"));
    cmd
}

#[test]
fn tui_quits_on_x() -> anyhow::Result<()> {
    let dir = fixture()?;
    let bin = cargo_bin("table-browser");

    // Set env var for this process so child inherits
    std::env::set_var("TABLE_BROWSER_CONFIG", dir.path().join("config.toml"));

    let cmd_str = format!(
        "{} {}",
        bin.display(),
        dir.path().join("people.csv").display()
    );

    let mut p = spawn(cmd_str.as_str())?;

    // Give program moment then send 'x'
    p.send("x")?;
    p.expect(Eof)?;

    Ok(())
}

#[test]
fn missing_file_is_reported() -> anyhow::Result<()> {
    let dir = fixture()?;
    let output = browser(dir.path())
        .arg(dir.path().join("nope.csv"))
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open"), "stderr: {stderr}");
    assert!(stderr.contains("nope.csv"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn refuses_to_run_without_terminal() -> anyhow::Result<()> {
    let dir = fixture()?;
    let output = browser(dir.path())
        .arg(dir.path().join("people.csv"))
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("interactive terminal"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn bad_config_aborts_startup() -> anyhow::Result<()> {
    let dir = fixture()?;
    std::fs::write(dir.path().join("config.toml"), "delimiter = \"é\"\n")?;
    let output = browser(dir.path())
        .arg(dir.path().join("people.csv"))
        .output()?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn help_lists_options() -> anyhow::Result<()> {
    let output = Command::cargo_bin("table-browser")?.arg("--help").output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--no-header"));
    assert!(stdout.contains("--delimiter"));
    Ok(())
}
