//! Dispatch integration tests
//!
//! These install fake native apps into a temp directory (selected via
//! `AIS_APP_DIR`) and observe the argument vector and environment actually
//! delivered across the exec boundary.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A fake app that prints each argument on its own line, followed by the
/// environment variables the real apps depend on.
const ECHO_APP: &str = "#!/bin/sh\n\
for arg in \"$@\"; do printf '%s\\n' \"$arg\"; done\n\
printf 'GST_PLUGIN_PATH=%s\\n' \"$GST_PLUGIN_PATH\"\n\
printf 'GLOG_alsologtostderr=%s\\n' \"$GLOG_alsologtostderr\"\n";

fn install_fake_app(dir: &Path, name: &str, script: &str) {
    let path = dir.join(name);
    fs::write(&path, script).expect("Failed to write fake app");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake app executable");
}

fn aisctl(app_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("aisctl").expect("Binary not built");
    cmd.env("AIS_APP_DIR", app_dir)
        .env_remove("AIS_TARGET_ADDRESS")
        .env_remove("AIS_PROJECT_ID");
    cmd
}

#[test]
fn ingest_execs_the_ingester_app() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "ingester_app", ECHO_APP);

    aisctl(dir.path())
        .args([
            "ingest",
            "--target-address=localhost:50051",
            "--stream-name=s1",
            "--source-uri=video.mp4",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--target_address=localhost:50051"))
        .stdout(predicate::str::contains("--stream_name=s1"))
        .stdout(predicate::str::contains("--source_uri=video.mp4"))
        .stdout(predicate::str::contains("--loop=false"));
}

#[test]
fn native_app_observes_media_and_logging_environment() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "printer_app", ECHO_APP);

    let plugin_path = dir.path().join("gst-plugins");
    aisctl(dir.path())
        .args(["print", "--stream-name=s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "GST_PLUGIN_PATH={}",
            plugin_path.display()
        )))
        .stdout(predicate::str::contains("GLOG_alsologtostderr=1"));
}

#[test]
fn managed_stream_create_execs_manager_with_op_id_zero() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "manager_app", ECHO_APP);

    aisctl(dir.path())
        .args([
            "managed",
            "stream",
            "create",
            "--project-id=p1",
            "--cluster-name=c1",
            "--stream-name=s1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--op_id=0"))
        .stdout(predicate::str::contains("--project=p1"))
        .stdout(predicate::str::contains("--cluster_name=c1"))
        .stdout(predicate::str::contains("--stream_name=s1"))
        .stdout(predicate::str::contains("--use_google_managed_service=true"));
}

#[test]
fn chunk_uri_execs_the_chunker_app() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "chunker_app", ECHO_APP);

    aisctl(dir.path())
        .args(["chunk", "--output-dir=/tmp", "uri", "--source-uri=video.mp4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output_dir=/tmp"))
        .stdout(predicate::str::contains("--use_uri_source=true"))
        .stdout(predicate::str::contains("--source_uri=video.mp4"));
}

#[test]
fn gstreamer_pipeline_arrives_as_a_single_argument() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "chunker_app", ECHO_APP);

    // Each argument is printed on its own line, so the whole pipeline
    // sharing a line with the flag proves it arrived as one token.
    aisctl(dir.path())
        .args([
            "chunk",
            "gstreamer",
            "--input-pipeline=videotestsrc ! videoconvert",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "--gstreamer_input_pipeline=videotestsrc ! videoconvert\n",
        ));
}

#[test]
fn unset_optional_strings_arrive_as_explicit_empty_values() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "playback_app", ECHO_APP);

    aisctl(dir.path())
        .args(["playback", "--stream-name=s1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ssl_root_cert_path=\n"))
        .stdout(predicate::str::contains("--output_mp4=\n"))
        .stdout(predicate::str::contains("--timeout_in_sec=5"));
}

#[test]
fn exit_code_is_the_native_apps() {
    let dir = TempDir::new().unwrap();
    install_fake_app(dir.path(), "manager_app", "#!/bin/sh\nexit 7\n");

    aisctl(dir.path())
        .args(["onprem", "stream", "list"])
        .assert()
        .code(7);
}

#[test]
fn launch_failure_reports_and_exits_nonzero() {
    let dir = TempDir::new().unwrap();

    aisctl(dir.path())
        .args(["print", "--stream-name=s1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch"))
        .stderr(predicate::str::contains("printer_app"));
}

#[test]
fn validation_failure_preempts_dispatch() {
    let dir = TempDir::new().unwrap();
    // A fake app that leaves a marker if it ever runs.
    install_fake_app(
        dir.path(),
        "ingester_app",
        "#!/bin/sh\ntouch \"$AIS_APP_DIR/dispatched\"\n",
    );

    aisctl(dir.path())
        .args(["ingest", "--source-uri=video.mp4"])
        .assert()
        .failure();

    assert!(!dir.path().join("dispatched").exists());
}
