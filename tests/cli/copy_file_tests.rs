use predicates::prelude::*;
use std::fs;

use crate::common::BuildWorkspace;

const IMAGE: &[u8] = b"\x00\x20\x00\x20\xc1\x01\x00\x08firmware-image";

#[test]
fn versioned_copy_from_header() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);
    ws.version_header("2.1.0");

    ws.copy_file()
        .args(["build/demo.bin", ws.out_arg().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version header file found."))
        .stdout(predicate::str::contains("File copied successfully from 'build/demo.bin' to '"))
        .stdout(predicate::str::contains("demo_2_1_0.bin'."));

    assert_eq!(fs::read(ws.out_file("demo_2_1_0.bin")).unwrap(), IMAGE);
    assert_eq!(ws.out_files(), vec!["demo_2_1_0.bin"]);
}

#[test]
fn missing_header_keeps_default_name() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);

    ws.copy_file()
        .args(["build/demo.bin", ws.out_arg().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No version header file found. Using default binary name.",
        ));

    assert_eq!(fs::read(ws.out_file("demo.bin")).unwrap(), IMAGE);
}

#[test]
fn wrong_argument_count_prints_usage_and_writes_nothing() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);

    for args in [vec![], vec!["build/demo.bin"]] {
        ws.copy_file()
            .args(&args)
            .assert()
            .code(2)
            .stdout(predicate::str::contains(
                "Usage: copy_file <input_binary_path> <output_binary_path>",
            ));
    }
    ws.copy_file()
        .args(["build/demo.bin", "out/", "extra"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("Usage: copy_file"));

    assert!(ws.out_files().is_empty());
}

#[test]
fn missing_source_is_reported() {
    let ws = BuildWorkspace::new();
    ws.version_header("1.0.0");

    ws.copy_file()
        .args(["build/demo.bin", ws.out_arg().as_str()])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Source file not found."));

    assert!(ws.out_files().is_empty());
}

#[test]
fn other_names_are_copied_unchanged() {
    let ws = BuildWorkspace::new();
    ws.write("build/bootloader.bin", IMAGE);
    ws.version_header("1.2.3");

    ws.copy_file()
        .args(["build/bootloader.bin", ws.out_arg().as_str()])
        .assert()
        .success();

    assert_eq!(ws.out_files(), vec!["bootloader.bin"]);
}

#[test]
fn rerun_overwrites_with_identical_result() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);
    ws.version_header("1.0.0");

    for _ in 0..2 {
        ws.copy_file().args(["build/demo.bin", ws.out_arg().as_str()]).assert().success();
    }

    assert_eq!(ws.out_files(), vec!["demo_1_0_0.bin"]);
    assert_eq!(fs::read(ws.out_file("demo_1_0_0.bin")).unwrap(), IMAGE);
}

#[test]
fn output_dir_is_concatenated_literally() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);
    ws.write("out/src/version.h", "#define APP_VERSION_STRING \"1.0\"\n");

    // "out" + "demo_1_0.bin" lands next to out/, not inside it
    ws.copy_file().args(["build/demo.bin", "out"]).assert().success();

    assert!(ws.path().join("outdemo_1_0.bin").is_file());
    assert!(ws.out_files().is_empty());
}

#[test]
fn join_mode_inserts_separator() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);
    ws.write("out/src/version.h", "#define APP_VERSION_STRING \"1.0\"\n");

    ws.copy_file()
        .args(["--join-mode", "join", "build/demo.bin", "out"])
        .assert()
        .success();

    assert_eq!(ws.out_files(), vec!["demo_1_0.bin"]);
}

#[test]
fn dry_run_reports_without_copying() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);
    ws.version_header("3.0.1");

    ws.copy_file()
        .args(["--dry-run", "build/demo.bin", ws.out_arg().as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: would copy"))
        .stdout(predicate::str::contains("demo_3_0_1.bin"));

    assert!(ws.out_files().is_empty());
}

#[test]
fn custom_pattern_and_marker() {
    let ws = BuildWorkspace::new();
    ws.write("build/app.hex", IMAGE);
    ws.write("out/src/version.h", "#define FW_VERSION \"0.9\"\n");

    ws.copy_file()
        .args([
            "--pattern",
            "app.hex",
            "--marker",
            "FW_VERSION",
            "build/app.hex",
            ws.out_arg().as_str(),
        ])
        .assert()
        .success();

    assert_eq!(ws.out_files(), vec!["app_0_9.hex"]);
}

#[test]
fn missing_destination_directory_is_not_found() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);

    ws.copy_file()
        .args(["build/demo.bin", "missing/"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Destination directory not found"));
}

#[test]
fn header_status_precedes_bad_source_error() {
    let ws = BuildWorkspace::new();
    ws.version_header("1.0.0");

    let output = ws
        .copy_file()
        .args(["build/", ws.out_arg().as_str()])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.first(), Some(&"Version header file found."));
    assert!(lines.get(1).is_some_and(|l| l.starts_with("An error occurred: ")));
    assert!(ws.out_files().is_empty());
}

// macOS ファイルシステムは不正な UTF-8 名を拒否する
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_artifact_name_is_copied_byte_for_byte() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ws = BuildWorkspace::new();
    ws.version_header("1.0.0");
    let name = OsStr::from_bytes(b"fw\xff.bin");
    fs::write(ws.path().join("build").join(name), IMAGE).unwrap();

    ws.copy_file()
        .arg(ws.path().join("build").join(name))
        .arg(ws.out_arg())
        .assert()
        .success();

    assert_eq!(fs::read(ws.path().join("out").join(name)).unwrap(), IMAGE);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ws = BuildWorkspace::new();
    ws.write("build/demo.bin", IMAGE);
    ws.version_header("1.0.0");

    ws.copy_file()
        .args(["-vv", "build/demo.bin", ws.out_arg().as_str()])
        .assert()
        .success()
        .stderr(predicate::str::contains("planned copy"))
        .stdout(predicate::str::contains("planned copy").not());
}

#[test]
fn help_exits_successfully() {
    let ws = BuildWorkspace::new();
    ws.copy_file()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("input_binary_path"));
}
