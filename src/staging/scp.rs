//! SCP-based remote file staging.
//!
//! Assumes passwordless ssh access between the local host and the remote
//! host. Published files are verified by comparing a locally computed
//! SHA-256 digest against the remote `sha256sum` output; any mismatch is
//! fatal.

use std::path::Path;

use log::{debug, info};

use crate::error::{Error, Result};
use crate::staging::checksum;
use crate::staging::command::CommandExecutor;

const SSH_OPTIONS: &str = "-q -o StrictHostKeyChecking=no";

/// Moves a directory of files between the local working area and a remote
/// host.
pub trait RemoteFileStager {
    /// Fetch `remote_dir` from the remote host into `local_dir`.
    fn fetch_directory(&self, remote_dir: &str, local_dir: &Path) -> Result<()>;

    /// Publish every file in `local_dir` into `remote_dir` on the remote
    /// host, creating the directory and verifying each transfer.
    fn publish_directory(&self, local_dir: &Path, remote_dir: &str) -> Result<()>;
}

/// Stager built on `scp`/`ssh` through a [`CommandExecutor`].
pub struct ScpStager<E: CommandExecutor> {
    host: String,
    executor: E,
}

impl<E: CommandExecutor> ScpStager<E> {
    pub fn new(host: impl Into<String>, executor: E) -> Self {
        ScpStager {
            host: host.into(),
            executor,
        }
    }

    /// Compare the local digest of `file` against the remote copy.
    fn verify_file(&self, file: &Path, remote_dir: &str) -> Result<()> {
        let file_name = file
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let remote_file = format!("{}/{}", remote_dir, file_name);

        let local_digest = checksum::file_sha256(file)?;
        let command = format!(
            "ssh {} {} sha256sum {}",
            SSH_OPTIONS, self.host, remote_file
        );
        let output = self.executor.execute(&command)?;
        let remote_digest = output.split_whitespace().next().unwrap_or_default();

        if local_digest != remote_digest {
            return Err(Error::ChecksumMismatch {
                local: file.display().to_string(),
                remote: format!("{}:{}", self.host, remote_file),
            });
        }
        debug!("verified {}", remote_file);
        Ok(())
    }
}

impl<E: CommandExecutor> RemoteFileStager for ScpStager<E> {
    fn fetch_directory(&self, remote_dir: &str, local_dir: &Path) -> Result<()> {
        let command = format!(
            "scp {} -C -r {}:{} {}",
            SSH_OPTIONS,
            self.host,
            remote_dir,
            local_dir.display()
        );
        self.executor.execute(&command)?;
        info!("fetched {}:{} to {}", self.host, remote_dir, local_dir.display());
        Ok(())
    }

    fn publish_directory(&self, local_dir: &Path, remote_dir: &str) -> Result<()> {
        let command = format!(
            "ssh {} {} mkdir -p {}",
            SSH_OPTIONS, self.host, remote_dir
        );
        self.executor.execute(&command)?;

        let command = format!(
            "scp {} -C '{}'/* {}:{}",
            SSH_OPTIONS,
            local_dir.display(),
            self.host,
            remote_dir
        );
        self.executor.execute(&command)?;
        info!(
            "published {} to {}:{}",
            local_dir.display(),
            self.host,
            remote_dir
        );

        // Verify every published file against its remote copy.
        let mut entries: Vec<_> = std::fs::read_dir(local_dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort();
        for file in &entries {
            self.verify_file(file, remote_dir)?;
        }
        info!("verified {} published files", entries.len());
        Ok(())
    }
}
