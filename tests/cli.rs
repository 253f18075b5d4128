#[macro_use]
mod common;

use std::process::Command;

fn fa2png() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fa2png"))
}

#[test]
fn list_prints_sorted_builtin_names() {
    let out = fa2png().arg("--list").output().expect("run fa2png");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 378);
    assert_eq!(names[0], "adjust");
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"home"));
}

#[test]
fn list_update_prints_source_literals() {
    let out = fa2png().arg("--list-update").output().expect("run fa2png");
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.lines().any(|l| l == "    (\"home\", '\\u{f015}'),"));
}

#[test]
fn missing_font_fails_before_export() {
    let scratch = common::scratch_dir("cli-nofont");
    let dir = scratch.path();
    let out = fa2png()
        .current_dir(dir)
        .args(["home", "--font", "no-such-font.ttf"])
        .output()
        .expect("run fa2png");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("can't be opened"), "stderr: {}", stderr);
    assert!(!dir.join("home.png").exists());
}

#[test]
fn unknown_icon_fails_whole_batch() {
    let font = require_font!();
    let scratch = common::scratch_dir("cli-unknown");
    let dir = scratch.path();
    let out = fa2png()
        .current_dir(dir)
        .arg("--font")
        .arg(&font)
        .args(["home", "bogus-name-xyz"])
        .output()
        .expect("run fa2png");
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unknown icon name (bogus-name-xyz)"), "stderr: {}", stderr);
    assert!(!dir.join("home.png").exists());
}

#[test]
fn bad_color_is_reported() {
    let font = require_font!();
    let scratch = common::scratch_dir("cli-color");
    let dir = scratch.path();
    let out = fa2png()
        .current_dir(dir)
        .arg("--font")
        .arg(&font)
        .args(["home", "--color", "not-a-color"])
        .output()
        .expect("run fa2png");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown color specifier"));
}

#[test]
fn zero_size_is_rejected_by_argument_parsing() {
    let out = fa2png().args(["home", "--size", "0"]).output().expect("run fa2png");
    assert!(!out.status.success());
}

#[cfg(feature = "stylesheet")]
#[test]
fn list_reflects_stylesheet() {
    let scratch = common::scratch_dir("cli-css");
    let dir = scratch.path();
    let css = dir.join("icons.css");
    std::fs::write(&css, ".fa-foo:before, .fa-bar:before { content: \"\\f000\"; }").unwrap();
    let out = fa2png().arg("--css").arg(&css).arg("--list").output().expect("run fa2png");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "bar\nfoo\n");
}

#[test]
fn missing_stylesheet_is_fatal() {
    let out = fa2png()
        .args(["--css", "/nonexistent/fa2png/icons.css", "--list"])
        .output()
        .expect("run fa2png");
    assert_eq!(out.status.code(), Some(1));
}
