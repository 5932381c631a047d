// metaflac-backed tag writer

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tracing::debug;

use super::TagWriter;
use crate::error::{Result, TrixError};
use crate::field_mapping::FieldSet;

pub const DEFAULT_PROGRAM: &str = "metaflac";

/// Runs the `metaflac` utility, one blocking process per operation
#[derive(Debug, Clone)]
pub struct MetaflacWriter {
    program: PathBuf,
}

impl Default for MetaflacWriter {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl MetaflacWriter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Check that the program can be run at all
    pub fn probe(&self) -> Result<String> {
        let output = self.run(vec!["--version".into()])?;
        if !output.status.success() {
            return Err(self.failure(Path::new(""), &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Arguments that write `fields` and `picture` to `file`
    pub fn set_args(file: &Path, fields: &FieldSet, picture: Option<&Path>) -> Vec<OsString> {
        let mut args: Vec<OsString> = fields
            .iter()
            .map(|(field, value)| format!("--set-tag={}={}", field.vorbis_key(), value).into())
            .collect();

        if let Some(picture) = picture {
            let mut arg = OsString::from("--import-picture-from=");
            arg.push(picture);
            args.push(arg);
        }

        args.push(file.into());
        args
    }

    fn run(&self, args: Vec<OsString>) -> Result<Output> {
        debug!("{} {:?}", self.program.display(), args);
        Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| TrixError::TagWriterSpawn {
                program: self.program.display().to_string(),
                source,
            })
    }

    fn run_checked(&self, file: &Path, args: Vec<OsString>) -> Result<()> {
        let output = self.run(args)?;
        if output.status.success() {
            Ok(())
        } else {
            Err(self.failure(file, &output))
        }
    }

    fn failure(&self, file: &Path, output: &Output) -> TrixError {
        TrixError::TagWriterFailed {
            program: self.program.display().to_string(),
            file: file.to_path_buf(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

impl TagWriter for MetaflacWriter {
    fn clear(&mut self, file: &Path) -> Result<()> {
        self.run_checked(file, vec!["--remove-all-tags".into(), file.into()])?;
        // --remove-all-tags keeps PICTURE blocks, and apply imports the cover again
        self.run_checked(
            file,
            vec!["--remove".into(), "--block-type=PICTURE".into(), file.into()],
        )
    }

    fn apply(&mut self, file: &Path, fields: &FieldSet, picture: Option<&Path>) -> Result<()> {
        self.run_checked(file, Self::set_args(file, fields, picture))
    }
}
