use std::io::Write;
use std::process::Command;

fn unindo() -> Command {
    Command::new(env!("CARGO_BIN_EXE_unindo"))
}

#[test]
fn demo_shows_and_expires_notifications() {
    let output = unindo()
        .args(["demo", "--timeout-ms", "50", "Salvo", "Viagem criada"])
        .output()
        .expect("run unindo demo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], r#"{"id":"toast-1","title":"Salvo"}"#);
    assert_eq!(lines[1], r#"{"id":"toast-2","title":"Viagem criada"}"#);
    // both timers share a deadline, so the firing order between them is open
    let mut expired = lines[2..4].to_vec();
    expired.sort();
    assert_eq!(expired, vec!["expired toast-1", "expired toast-2"]);
    assert_eq!(lines[4], "0 active");
}

#[test]
fn demo_applies_status_and_description() {
    let output = unindo()
        .args([
            "demo",
            "--timeout-ms",
            "20",
            "--policy",
            "from-creation",
            "--status",
            "error",
            "--description",
            "Tente novamente",
            "Falha",
        ])
        .output()
        .expect("run unindo demo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{"id":"toast-1","title":"Falha","description":"Tente novamente","status":"error"}"#,
            "expired toast-1",
            "0 active",
        ]
    );
}

#[test]
fn demo_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = 30\npolicy = \"from-creation\"").unwrap();
    let output = unindo()
        .arg("--config")
        .arg(file.path())
        .args(["demo", "Salvo"])
        .output()
        .expect("run unindo demo");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![r#"{"id":"toast-1","title":"Salvo"}"#, "expired toast-1", "0 active"]
    );
}

#[test]
fn zero_timeout_is_rejected() {
    let output = unindo()
        .args(["demo", "--timeout-ms", "0", "Salvo"])
        .output()
        .expect("run unindo demo");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.lines().last(),
        Some("[Unindo][ERROR]: timeout_ms must be greater than zero")
    );
}

#[test]
fn missing_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let output = unindo()
        .arg("--config")
        .arg(&missing)
        .args(["demo", "Salvo"])
        .output()
        .expect("run unindo demo");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected = format!(
        "[Unindo][ERROR]: Failed to load settings file '{}': io error:",
        missing.display()
    );
    assert!(stderr.lines().any(|line| line.starts_with(&expected)));
}

#[test]
fn demo_requires_a_title() {
    let output = unindo().arg("demo").output().expect("run unindo demo");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
