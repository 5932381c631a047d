// Output formatting for CLI

use serde::Serialize;
use std::io::{self, Write};

use trixtag::{AlbumReport, BatchResult, Mismatch, TagCall};

use super::OutputFormat;

/// Format and output reports
pub struct OutputFormatter {
    format: OutputFormat,
    quiet: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Output any report as JSON
    pub fn output_json<T: Serialize>(&self, value: &T, writer: &mut impl Write) -> io::Result<()> {
        writeln!(writer, "{}", serde_json::to_string_pretty(value)?)
    }

    /// Output the result of tagging one album
    pub fn output_album(&self, report: &AlbumReport, writer: &mut impl Write) -> io::Result<()> {
        if self.is_json() {
            return self.output_json(report, writer);
        }
        if self.quiet {
            return Ok(());
        }

        writeln!(writer, "Metadata file: {}", report.metadata_file.display())?;
        writeln!(writer, "Cover file: {}", report.cover_file.display())?;
        writeln!(writer)?;
        writeln!(writer, "{}", report.title)?;
        writeln!(writer)?;
        for track in &report.tracks {
            writeln!(
                writer,
                "✓ {} Disc: {}, Track: {}, Title: {}",
                file_name(&track.path),
                track.entry.disc_number,
                track.entry.track_number,
                track.entry.title
            )?;
        }
        if let Some(renamed) = &report.renamed_to {
            writeln!(writer)?;
            writeln!(writer, "Renamed directory to: {}", renamed.display())?;
        }
        writeln!(writer)?;
        writeln!(writer, "Done.")
    }

    /// Output the final batch summary
    pub fn output_batch(&self, result: &BatchResult, writer: &mut impl Write) -> io::Result<()> {
        if self.is_json() {
            return self.output_json(result, writer);
        }

        writeln!(writer)?;
        writeln!(writer, "Completed {}/{}.", result.succeeded, result.total)?;
        if !result.failed.is_empty() {
            writeln!(writer, "Errors occurred in the following directories:")?;
            for failed in &result.failed {
                writeln!(writer, "{}", failed.name)?;
            }
        }
        Ok(())
    }

    /// Output tag mismatches found by verification
    pub fn output_mismatches(&self, mismatches: &[Mismatch], writer: &mut impl Write) -> io::Result<()> {
        if self.is_json() {
            return self.output_json(&mismatches, writer);
        }
        for mismatch in mismatches {
            writeln!(
                writer,
                "✗ {}: {} is {:?}, expected {:?}",
                file_name(&mismatch.file),
                mismatch.field.vorbis_key(),
                mismatch.found,
                mismatch.expected
            )?;
        }
        Ok(())
    }

    /// Output the writer calls a dry run would have made
    pub fn output_dry_run(&self, calls: &[TagCall], writer: &mut impl Write) -> io::Result<()> {
        if self.is_json() {
            return self.output_json(&calls, writer);
        }
        for call in calls {
            match call {
                TagCall::Clear { file } => writeln!(writer, "clear  {}", file.display())?,
                TagCall::Apply { file, fields, picture } => {
                    writeln!(writer, "write  {}", file.display())?;
                    for (field, value) in fields.iter() {
                        writeln!(writer, "         {}={}", field.vorbis_key(), value)?;
                    }
                    if let Some(picture) = picture {
                        writeln!(writer, "         picture {}", picture.display())?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Print success message
    pub fn print_success(&self, message: &str) {
        if !self.quiet && !self.is_json() {
            println!("✓ {}", message);
        }
    }

    /// Print error message
    pub fn print_error(&self, message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Print info message
    pub fn print_info(&self, message: &str) {
        if !self.quiet && !self.is_json() {
            println!("{}", message);
        }
    }
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
