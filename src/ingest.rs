use std::process::Command;
use std::time::Duration;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Ingestion collaborator
// ---------------------------------------------------------------------------

/// Errors from the external ingestion tool.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no ingest command configured (set INGEST_COMMAND)")]
    NotConfigured,
    #[error("could not launch ingest command: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("ingest command exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// The external collaborator that fetches new posts and appends them to the
/// review store. Runs synchronously; the caller blocks until it finishes.
pub trait IngestRunner {
    fn ingest(&self, posts: u32) -> Result<(), IngestError>;
}

/// Runs a configured command line with the post count appended as the final
/// argument. A non-zero exit status is a failure. The command usually does
/// network I/O, so one retry with a fixed backoff is attempted before giving
/// up.
pub struct CommandIngestor {
    command: Vec<String>,
    retries: u32,
    backoff: Duration,
}

impl CommandIngestor {
    pub fn new(command: Vec<String>) -> Self {
        CommandIngestor {
            command,
            retries: 1,
            backoff: Duration::from_secs(2),
        }
    }

    #[cfg(test)]
    fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn run_once(&self, posts: u32) -> Result<(), IngestError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(IngestError::NotConfigured)?;

        let status = Command::new(program)
            .args(args)
            .arg(posts.to_string())
            .status()?;

        if status.success() {
            Ok(())
        } else {
            Err(IngestError::Failed(status))
        }
    }
}

impl IngestRunner for CommandIngestor {
    fn ingest(&self, posts: u32) -> Result<(), IngestError> {
        let mut attempt = 0;
        loop {
            match self.run_once(posts) {
                Ok(()) => {
                    log::info!("ingest of {posts} posts completed");
                    return Ok(());
                }
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    log::warn!("ingest attempt {attempt} failed, retrying: {e}");
                    std::thread::sleep(self.backoff);
                }
                Err(e) => {
                    log::error!("ingest failed: {e}");
                    return Err(e);
                }
            }
        }
    }
}
