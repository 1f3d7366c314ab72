use std::fs;
use std::sync::Mutex;

use tempfile::TempDir;

use scene_trends::staging::checksum::sha256_hex;
use scene_trends::staging::{CommandExecutor, RemoteFileStager, ScpStager};
use scene_trends::{Error, Result};

/// Records every command and answers `sha256sum` invocations with a
/// canned digest.
struct FakeExecutor {
    commands: Mutex<Vec<String>>,
    remote_digest: String,
}

impl FakeExecutor {
    fn new(remote_digest: impl Into<String>) -> Self {
        FakeExecutor {
            commands: Mutex::new(Vec::new()),
            remote_digest: remote_digest.into(),
        }
    }

    fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }
}

impl CommandExecutor for &FakeExecutor {
    fn execute(&self, command: &str) -> Result<String> {
        self.commands.lock().unwrap().push(command.to_string());
        if command.contains("sha256sum") {
            Ok(format!("{}  /remote/file\n", self.remote_digest))
        } else {
            Ok(String::new())
        }
    }
}

#[test]
fn test_fetch_builds_a_recursive_scp_command() {
    let executor = FakeExecutor::new("");
    let stager = ScpStager::new("edclpdsftp", &executor);

    let local = TempDir::new().unwrap();
    stager
        .fetch_directory("/orders/0401412/stats", local.path())
        .unwrap();

    let commands = executor.commands();
    assert_eq!(commands.len(), 1);
    assert!(commands[0].starts_with("scp "));
    assert!(commands[0].contains("-r"));
    assert!(commands[0].contains("edclpdsftp:/orders/0401412/stats"));
    assert!(commands[0].contains("StrictHostKeyChecking=no"));
}

#[test]
fn test_publish_verifies_every_file() {
    let local = TempDir::new().unwrap();
    fs::write(local.path().join("ndvi_stats.csv"), b"DATE,MINIMUM").unwrap();

    let executor = FakeExecutor::new(sha256_hex(b"DATE,MINIMUM"));
    let stager = ScpStager::new("edclpdsftp", &executor);

    stager
        .publish_directory(local.path(), "/orders/0401412/scene_statistics")
        .unwrap();

    let commands = executor.commands();
    // mkdir, push, one checksum query per file.
    assert_eq!(commands.len(), 3);
    assert!(commands[0].contains("mkdir -p /orders/0401412/scene_statistics"));
    assert!(commands[1].starts_with("scp "));
    assert!(commands[2].contains("sha256sum"));
    assert!(commands[2].contains("/orders/0401412/scene_statistics/ndvi_stats.csv"));
}

#[test]
fn test_publish_fails_on_checksum_mismatch() {
    let local = TempDir::new().unwrap();
    fs::write(local.path().join("ndvi_stats.csv"), b"DATE,MINIMUM").unwrap();

    let executor = FakeExecutor::new(sha256_hex(b"corrupted"));
    let stager = ScpStager::new("edclpdsftp", &executor);

    let err = stager
        .publish_directory(local.path(), "/orders/0401412/scene_statistics")
        .unwrap_err();
    assert!(matches!(err, Error::ChecksumMismatch { .. }));
}

#[test]
fn test_command_failure_propagates() {
    struct FailingExecutor;
    impl CommandExecutor for FailingExecutor {
        fn execute(&self, command: &str) -> Result<String> {
            Err(Error::CommandFailed {
                command: command.to_string(),
                output: "ssh: connection refused".to_string(),
            })
        }
    }

    let local = TempDir::new().unwrap();
    let stager = ScpStager::new("edclpdsftp", FailingExecutor);
    let err = stager
        .fetch_directory("/orders/0401412/stats", local.path())
        .unwrap_err();
    assert!(matches!(err, Error::CommandFailed { .. }));
}
