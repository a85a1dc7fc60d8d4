use assert_cmd::Command;
use assert_fs::prelude::*;
use insta::assert_snapshot;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in [
        "MEMEGEN_CONFIG",
        "MEMEGEN_IMAGES_DIR",
        "MEMEGEN_CONVERT",
        "MEMEGEN_FONT",
        "MEMEGEN_SHARED_DIR",
        "MEMEGEN_SHARED_ROOT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// A temp dir with an empty config file and a few source images.
fn setup() -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("memegen.toml").write_str("").unwrap();
    for image in ["yuno.jpg", "fry.jpg", "success_kid.jpg", "readme.txt"] {
        temp.child("images").child(image).write_str("jpeg").unwrap();
    }
    temp
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("memegen "));
}

#[test]
fn help_explains_caption_syntax() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--dropbox"))
        .stdout(contains("// to separate top text from bottom text"));
}

#[test]
fn no_meme_prints_usage() {
    let temp = setup();
    let output = cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.child("memegen.toml").path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_snapshot!(stdout.lines().next().unwrap(), @r"> memegen <MEME> [TOP\\LINES // BOTTOM] [options]");
}

#[test]
fn list_prints_image_names() {
    let temp = setup();
    let output = cmd()
        .arg("--config")
        .arg(temp.child("memegen.toml").path())
        .arg("--images-dir")
        .arg(temp.child("images").path())
        .arg("--list")
        .arg("ignored")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "  - fry\n  - success_kid\n  - yuno\n"
    );
}

#[test]
fn list_reads_image_dir_from_environment() {
    let temp = setup();
    cmd()
        .env("MEMEGEN_CONFIG", temp.child("memegen.toml").path())
        .env("MEMEGEN_IMAGES_DIR", temp.child("images").path())
        .arg("-l")
        .assert()
        .success()
        .stdout(contains("  - yuno"));
}

#[test]
fn missing_config_file_fails() {
    let temp = setup();
    cmd()
        .arg("--config")
        .arg(temp.child("absent.toml").path())
        .arg("yuno")
        .assert()
        .code(1)
        .stderr(contains("Configuration file not found"));
}

#[test]
fn invalid_config_value_fails() {
    let temp = setup();
    let config = temp.child("bad.toml");
    config.write_str("[style]\nstroke_width = 0\n").unwrap();

    cmd()
        .arg("--config")
        .arg(config.path())
        .arg("--images-dir")
        .arg(temp.child("images").path())
        .arg("yuno")
        .assert()
        .code(1)
        .stderr(contains("style.stroke_width"));
}

#[cfg(unix)]
#[test]
fn unknown_meme_reports_not_found_and_does_nothing() {
    use std::os::unix::fs::PermissionsExt;

    let temp = setup();
    let convert = temp.child("bin/convert");
    convert
        .write_str("#!/bin/sh\nprintf '%s\\n' \"$@\" > \"$(dirname \"$0\")/convert-args.txt\"\n")
        .unwrap();
    std::fs::set_permissions(convert.path(), std::fs::Permissions::from_mode(0o755)).unwrap();

    let config = temp.child("config.toml");
    config
        .write_str(&format!(
            "[paths]\nconvert = '{}'\nimages = '{}'\n\n[share]\nroot = '{}'\ndir = '{}'\n",
            convert.path().display(),
            temp.child("images").path().display(),
            temp.child("Public").path().display(),
            temp.child("Public/memes").path().display(),
        ))
        .unwrap();

    cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(config.path())
        .args(["grumpy", "no"])
        .assert()
        .code(2)
        .stderr(contains("Source meme not found"))
        .stderr(contains("'grumpy'"))
        .stdout(predicate::str::is_empty());

    temp.child("bin/convert-args.txt")
        .assert(predicate::path::missing());
    temp.child("grumpy_.jpg").assert(predicate::path::missing());
    temp.child("Public/memes").assert(predicate::path::is_dir());
}

#[test]
fn random_length_zero_is_rejected() {
    cmd()
        .args(["--random", "0", "yuno"])
        .assert()
        .failure()
        .stderr(contains("--random"));
}
