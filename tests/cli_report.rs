//! End-to-end scenarios: run the compiled binary against a stub `root`
//! executable placed first on PATH and assert the exact operator-facing
//! stdout.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::{TempDir, tempdir};

/// Drop a stub `root` executable into `dir`. The stub logs its macro
/// invocation argument to `$CALL_LOG` (when set) and prints `reply` after
/// some banner noise, mimicking the interpreter's batch output.
fn stage_stub_toolkit(dir: &Path, reply: &str) {
    let stub = dir.join("root");
    let script = format!(
        "#!/bin/sh\n\
         if [ -n \"$CALL_LOG\" ]; then printf '%s\\n' \"$4\" >> \"$CALL_LOG\"; fi\n\
         echo 'Welcome to ROOT'\n\
         echo '{reply}'\n"
    );
    fs::write(&stub, script).expect("writing stub toolkit");
    let mut perms = fs::metadata(&stub).expect("stub metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&stub, perms).expect("marking stub executable");
}

fn run_volpos(stub_dir: &TempDir, input: &str, call_log: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_volpos"));
    cmd.arg(input).env("PATH", stub_dir.path());
    if let Some(log) = call_log {
        cmd.env("CALL_LOG", log);
    }
    cmd.output().expect("running volpos")
}

#[test]
fn gdml_input_reports_every_instance_of_every_volume() {
    let stub_dir = tempdir().unwrap();
    stage_stub_toolkit(
        stub_dir.path(),
        r#"VOLPOS_REPLY {"found":true,"origins":[[1.0,2.0,3.0],[4.0,5.0,6.0]]}"#,
    );
    let call_log = stub_dir.path().join("calls.txt");

    let output = run_volpos(&stub_dir, "detector.gdml", Some(&call_log));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let mut expected = String::new();
    for volume in ["volTPCActive", "volLArBath", "volLAr"] {
        expected.push_str(&format!("position of volume {volume} = [1.0, 2.0, 3.0]\n\n"));
        expected.push_str(&format!("position of volume {volume} = [4.0, 5.0, 6.0]\n\n"));
    }
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected);

    // Exactly three toolkit calls, in query order, with the GDML flag.
    let calls = fs::read_to_string(&call_log).unwrap();
    let lines: Vec<&str> = calls.lines().collect();
    assert_eq!(lines.len(), 3);
    for (line, volume) in lines.iter().zip(["volTPCActive", "volLArBath", "volLAr"]) {
        assert!(
            line.ends_with(&format!("(\"detector.gdml\",false,\"{volume}\")")),
            "unexpected invocation: {line}"
        );
    }
}

#[test]
fn root_input_passes_the_simulation_format_flag() {
    let stub_dir = tempdir().unwrap();
    stage_stub_toolkit(
        stub_dir.path(),
        r#"VOLPOS_REPLY {"found":true,"origins":[[0.0,0.0,0.0]]}"#,
    );
    let call_log = stub_dir.path().join("calls.txt");

    let output = run_volpos(&stub_dir, "run.root", Some(&call_log));
    assert!(output.status.success());

    let calls = fs::read_to_string(&call_log).unwrap();
    assert_eq!(calls.lines().count(), 3);
    assert!(
        calls
            .lines()
            .all(|line| line.contains("(\"run.root\",true,\""))
    );
}

#[test]
fn missing_geometry_manager_prints_one_diagnostic_per_volume() {
    let stub_dir = tempdir().unwrap();
    stage_stub_toolkit(stub_dir.path(), r#"VOLPOS_REPLY {"found":false,"origins":[]}"#);

    let output = run_volpos(&stub_dir, "run.root", None);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let diagnostic = "No TGeoManager found in run.root, cannot get module offsets.\n";
    assert_eq!(stdout, diagnostic.repeat(3));
    assert!(!stdout.contains("position of volume"));
}

#[test]
fn zero_matches_prints_check_name_diagnostics() {
    let stub_dir = tempdir().unwrap();
    stage_stub_toolkit(stub_dir.path(), r#"VOLPOS_REPLY {"found":true,"origins":[]}"#);

    let output = run_volpos(&stub_dir, "detector.gdml", None);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for volume in ["volTPCActive", "volLArBath", "volLAr"] {
        assert!(stdout.contains(&format!(
            "Volume {volume} not found in TGeoManager of input file, check volume name."
        )));
    }
    assert!(!stdout.contains("position of volume"));
}

#[test]
fn absent_toolkit_fails_the_process() {
    let empty_dir = tempdir().unwrap();

    let output = run_volpos(&empty_dir, "detector.gdml", None);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
