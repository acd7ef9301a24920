#![cfg(feature = "cli")]

use std::path::PathBuf;
use std::process::{Command, Output};

use bytes::{BufMut, BytesMut};

const CCX_HEADER: [u8; 11] = [
    0xCC, 0xCC, 0xED, 0xCC, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
];

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rcwtcli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn put_cluster(wire: &mut BytesMut, pts: i64, payload: &[u8]) {
    wire.put_i64_le(pts);
    wire.put_u16_le((payload.len() / 3) as u16);
    wire.put_slice(payload);
}

fn write_file(dir: &std::path::Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("fixture should be writable");
    path
}

fn rcwt(args: &[&str], path: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rcwt"))
        .arg("--log-level")
        .arg("error")
        .arg("--format")
        .arg("json")
        .args(args)
        .arg(path)
        .output()
        .expect("rcwt should run")
}

fn sample_file(dir: &std::path::Path) -> PathBuf {
    let mut wire = BytesMut::new();
    wire.put_slice(&CCX_HEADER);
    put_cluster(&mut wire, 1500, &[0xFC, 0x94, 0x20, 0xFC, 0x94, 0x20]);
    put_cluster(&mut wire, 1533, &[]);
    put_cluster(&mut wire, 2000, &[0xFC, 0xC1, 0xC2]);
    write_file(dir, "sample.bin", &wire)
}

#[test]
fn probe_recognizes_rcwt() {
    let dir = unique_temp_dir("probe");
    let path = sample_file(&dir);

    let output = rcwt(&["probe"], &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"score\":50"));
    assert!(stdout.contains("\"extension_match\":true"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn probe_rejects_other_data_with_60() {
    let dir = unique_temp_dir("probe-miss");
    let path = write_file(&dir, "notes.txt", b"this is not a caption archive");

    let output = rcwt(&["probe"], &path);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stdout).contains("\"score\":0"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn info_reports_single_caption_stream() {
    let dir = unique_temp_dir("info");
    let path = sample_file(&dir);

    let output = rcwt(&["info"], &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(stdout.trim()).expect("info output should be JSON");

    assert_eq!(value["writer"], "ccextractor");
    assert_eq!(value["packets"], 2);
    assert_eq!(value["stream"]["media_type"], "subtitle");
    assert_eq!(value["stream"]["clock_hz"], 1000);
    assert_eq!(value["first_pts"], 1500);
    assert_eq!(value["last_pts"], 2000);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn packets_lists_pts_and_payload() {
    let dir = unique_temp_dir("packets");
    let path = sample_file(&dir);

    let output = rcwt(&["packets"], &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line should be JSON"))
        .collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["pts"], 1500);
    assert_eq!(lines[0]["payload"], "fc9420 fc9420");
    assert_eq!(lines[0]["blocks"], 2);
    assert_eq!(lines[1]["pts"], 2000);
    assert_eq!(lines[1]["index"], 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn packets_seek_and_count() {
    let dir = unique_temp_dir("packets-seek");
    let mut wire = BytesMut::new();
    wire.put_slice(&CCX_HEADER);
    for pts in [0i64, 1000, 2000, 3000, 4000] {
        put_cluster(&mut wire, pts, b"abc");
    }
    let path = write_file(&dir, "seek.bin", &wire);

    let output = rcwt(&["packets", "--seek", "2500", "--count", "2"], &path);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let pts: Vec<i64> = stdout
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("JSON line");
            value["pts"].as_i64().expect("pts should be a number")
        })
        .collect();
    assert_eq!(pts, vec![2000, 3000]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unsupported_writer_build_fails_with_60() {
    let dir = unique_temp_dir("writer-build");
    let mut wire = BytesMut::new();
    wire.put_slice(&[
        0xCC, 0xCC, 0xED, 0xFF, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    ]);
    put_cluster(&mut wire, 1500, &[0; 6]);
    let path = write_file(&dir, "build.bin", &wire);

    let output = rcwt(&["info"], &path);
    assert_eq!(output.status.code(), Some(60));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported rcwt build"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn truncated_cluster_fails_with_60() {
    let dir = unique_temp_dir("truncated");
    let mut wire = BytesMut::new();
    wire.put_slice(&CCX_HEADER);
    put_cluster(&mut wire, 0, b"abc");
    wire.put_i64_le(33);
    wire.put_u16_le(4);
    wire.put_slice(b"abc");
    let path = write_file(&dir, "truncated.bin", &wire);

    let output = rcwt(&["packets"], &path);
    assert_eq!(output.status.code(), Some(60));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected=12 actual=3"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_file_fails_with_2() {
    let path = PathBuf::from(format!(
        "/tmp/rcwtcli-missing-{}.bin",
        std::process::id()
    ));
    let output = rcwt(&["info"], &path);
    assert_eq!(output.status.code(), Some(2));
}
