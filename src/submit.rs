//! Form submission boundary.
//!
//! Views validate presence and hand a [`Submission`] to a
//! [`SubmissionHandler`] exactly once per accepted submit. What happens next
//! (storage, forwarding) belongs to the handler; failures there are logged
//! and never reach the views.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Submission {
    Waitlist {
        email: String,
    },
    Nomination {
        name: String,
        year: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub id: Uuid,
    #[serde(flatten)]
    pub submission: Submission,
}

impl SubmissionRecord {
    pub fn new(submission: Submission) -> Self {
        Self {
            id: Uuid::new_v4(),
            submission,
        }
    }
}

pub trait SubmissionHandler: Send {
    fn submit(&mut self, submission: Submission);
}

/// Keeps submissions in memory. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<SubmissionRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SubmissionRecord> {
        self.records.lock().clone()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.records
            .lock()
            .iter()
            .map(|record| record.submission.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl SubmissionHandler for MemorySink {
    fn submit(&mut self, submission: Submission) {
        let record = SubmissionRecord::new(submission);
        tracing::info!(id = %record.id, "submission stored in memory");
        self.records.lock().push(record);
    }
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to open submissions file '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Appends one JSON record per line to a file.
pub struct JsonlSink {
    path: PathBuf,
    file: File,
}

impl JsonlSink {
    pub fn open(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SubmissionHandler for JsonlSink {
    fn submit(&mut self, submission: Submission) {
        let record = SubmissionRecord::new(submission);
        let line = match serde_json::to_string(&record) {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(id = %record.id, error = %err, "failed to encode submission");
                return;
            }
        };
        if let Err(err) = writeln!(self.file, "{}", line).and_then(|_| self.file.flush()) {
            tracing::warn!(
                id = %record.id,
                path = %self.path.display(),
                error = %err,
                "failed to write submission"
            );
            return;
        }
        tracing::info!(id = %record.id, path = %self.path.display(), "submission written");
    }
}
