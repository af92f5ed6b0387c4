//! Pid file handling for the serve command.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PidFileError {
    #[error("another instance is running with pid {pid} ({path})")]
    AlreadyRunning { pid: u32, path: PathBuf },

    #[error("pid file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A pid file that is removed when dropped.
#[derive(Debug)]
pub struct PidFile {
    path: PathBuf,
    removed: bool,
}

impl PidFile {
    /// Write the current process id to `path`.
    ///
    /// A leftover file whose pid is no longer alive is replaced.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self, PidFileError> {
        let path = path.into();

        if let Some(pid) = read_pid(&path) {
            if pid != std::process::id() && process_alive(pid) {
                return Err(PidFileError::AlreadyRunning { pid, path });
            }
            tracing::warn!(path = %path.display(), pid, "Replacing stale pid file");
        }

        fs::write(&path, format!("{}\n", std::process::id())).map_err(|source| {
            PidFileError::Io {
                path: path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %path.display(), "Wrote pid file");
        Ok(Self {
            path,
            removed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file now instead of on drop.
    pub fn remove(mut self) -> Result<(), PidFileError> {
        self.removed = true;
        fs::remove_file(&self.path).map_err(|source| PidFileError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl Drop for PidFile {
    fn drop(&mut self) {
        if !self.removed {
            let _ = fs::remove_file(&self.path);
        }
    }
}

fn read_pid(path: &Path) -> Option<u32> {
    fs::read_to_string(path).ok()?.trim().parse().ok()
}

#[cfg(target_os = "linux")]
fn process_alive(pid: u32) -> bool {
    Path::new("/proc").join(pid.to_string()).exists()
}

// Without procfs there is no cheap liveness probe; assume the owner is gone.
#[cfg(not(target_os = "linux"))]
fn process_alive(_pid: u32) -> bool {
    false
}
