// Tag writer that records calls instead of running anything
//
// Backs --dry-run, and lets the pipeline be tested without metaflac installed.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::TagWriter;
use crate::error::Result;
use crate::field_mapping::FieldSet;

/// One recorded writer call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TagCall {
    Clear {
        file: PathBuf,
    },
    Apply {
        file: PathBuf,
        fields: FieldSet,
        picture: Option<PathBuf>,
    },
}

impl TagCall {
    pub fn file(&self) -> &Path {
        match self {
            TagCall::Clear { file } | TagCall::Apply { file, .. } => file,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingWriter {
    calls: Vec<TagCall>,
    /// Fail the nth apply call (0-based)
    fail_apply_at: Option<usize>,
    applies: usize,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer whose `index`-th apply call fails like a crashed tool would
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_apply_at: Some(index),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> &[TagCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<TagCall> {
        std::mem::take(&mut self.calls)
    }

    /// Apply calls only, in order
    pub fn applied(&self) -> impl Iterator<Item = (&Path, &FieldSet)> {
        self.calls.iter().filter_map(|call| match call {
            TagCall::Apply { file, fields, .. } => Some((file.as_path(), fields)),
            TagCall::Clear { .. } => None,
        })
    }
}

impl TagWriter for RecordingWriter {
    fn clear(&mut self, file: &Path) -> Result<()> {
        self.calls.push(TagCall::Clear {
            file: file.to_path_buf(),
        });
        Ok(())
    }

    fn apply(&mut self, file: &Path, fields: &FieldSet, picture: Option<&Path>) -> Result<()> {
        let index = self.applies;
        self.applies += 1;
        if self.fail_apply_at == Some(index) {
            return Err(crate::error::TrixError::TagWriterFailed {
                program: "recording".to_string(),
                file: file.to_path_buf(),
                status: "exit status: 1".to_string(),
                stderr: "simulated failure".to_string(),
            });
        }

        self.calls.push(TagCall::Apply {
            file: file.to_path_buf(),
            fields: fields.clone(),
            picture: picture.map(Path::to_path_buf),
        });
        Ok(())
    }
}
