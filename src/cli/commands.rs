// CLI command implementations
use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use trixtag::{
    process_album, resolve, run_batch, verify_album, AlbumOptions, BatchOptions, MetaflacWriter,
    RecordingWriter, ResolveOptions, StdinPrompter, TagWriter, VolumeFallback,
};

use super::{AlbumArgs, Commands, Config, OutputFormatter};

/// metaflac for real runs, a recorder for --dry-run
enum Writer {
    Metaflac(MetaflacWriter),
    DryRun(RecordingWriter),
}

impl Writer {
    fn from_config(config: &Config) -> Result<Self> {
        if config.dry_run {
            return Ok(Writer::DryRun(RecordingWriter::new()));
        }

        let metaflac = MetaflacWriter::new(&config.metaflac);
        let version = metaflac
            .probe()
            .with_context(|| format!("{} is required to write tags", config.metaflac.display()))?;
        tracing::debug!("using {}", version);
        Ok(Writer::Metaflac(metaflac))
    }

    fn as_dyn(&mut self) -> &mut dyn TagWriter {
        match self {
            Writer::Metaflac(writer) => writer,
            Writer::DryRun(writer) => writer,
        }
    }

    fn is_dry_run(&self) -> bool {
        matches!(self, Writer::DryRun(_))
    }

    fn print_dry_run(&mut self, formatter: &OutputFormatter) -> Result<()> {
        if let Writer::DryRun(writer) = self {
            formatter.output_dry_run(&writer.take_calls(), &mut io::stdout())?;
        }
        Ok(())
    }
}

impl AlbumArgs {
    fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            dir: strip_trailing_separator(&self.dir),
            metadata: self.metadata.clone(),
            cover: self.cover.clone(),
            artist: self.artist.clone(),
            volume: self.volume.clone(),
            volume_fallback: if self.no_prompt {
                VolumeFallback::Fail
            } else {
                VolumeFallback::Prompt
            },
        }
    }
}

/// "album/" names the same directory as "album"
fn strip_trailing_separator(dir: &std::path::Path) -> PathBuf {
    dir.components().collect()
}

pub fn run(config: &Config, formatter: &OutputFormatter) -> Result<ExitCode> {
    match &config.command {
        Commands::Tag { album, rename, verify } => command_tag(album, *rename, *verify, config, formatter),
        Commands::Batch {
            parent,
            rename,
            genre,
            strict,
        } => command_batch(parent, *rename, genre, *strict, config, formatter),
        Commands::Verify { album } => command_verify(album, formatter),
    }
}

/// Tag one album directory
fn command_tag(
    args: &AlbumArgs,
    rename: bool,
    verify: bool,
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<ExitCode> {
    let mut writer = Writer::from_config(config)?;

    let options = AlbumOptions {
        resolve: args.resolve_options(),
        genre: args.genre.clone(),
        // a dry run must not move anything either
        rename: rename && !writer.is_dry_run(),
    };

    let report = process_album(&options, writer.as_dyn(), &mut StdinPrompter)
        .with_context(|| format!("failed to tag {}", args.dir.display()))?;

    if writer.is_dry_run() {
        writer.print_dry_run(formatter)?;
        return Ok(ExitCode::SUCCESS);
    }

    formatter.output_album(&report, &mut io::stdout())?;

    if verify {
        let resolve_options = report.relocated_options(&args.resolve_options());
        return verify_resolved(&resolve_options, &args.genre, formatter);
    }

    Ok(ExitCode::SUCCESS)
}

/// Tag every matching album under a parent directory
fn command_batch(
    parent: &std::path::Path,
    rename: bool,
    genre: &str,
    strict: bool,
    config: &Config,
    formatter: &OutputFormatter,
) -> Result<ExitCode> {
    let mut writer = Writer::from_config(config)?;
    let options = BatchOptions {
        genre: genre.to_string(),
        rename: rename && !writer.is_dry_run(),
    };

    let result = run_batch(parent, &options, writer.as_dyn(), |_, _, name| {
        formatter.print_info(&format!("Processing {}", name));
    })
    .with_context(|| format!("failed to scan {}", parent.display()))?;

    writer.print_dry_run(formatter)?;
    formatter.output_batch(&result, &mut io::stdout())?;

    if strict && !result.is_success() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Compare an album's tags with what tagging would write
fn command_verify(args: &AlbumArgs, formatter: &OutputFormatter) -> Result<ExitCode> {
    verify_resolved(&args.resolve_options(), &args.genre, formatter)
}

fn verify_resolved(options: &ResolveOptions, genre: &str, formatter: &OutputFormatter) -> Result<ExitCode> {
    let album = resolve(options, &mut StdinPrompter)
        .with_context(|| format!("failed to read {}", options.dir.display()))?;
    let mismatches = verify_album(&album, genre)?;

    formatter.output_mismatches(&mismatches, &mut io::stdout())?;
    if mismatches.is_empty() {
        formatter.print_success(&format!("{} tracks verified", album.tracks.len()));
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_separator() {
        assert_eq!(
            strip_trailing_separator(std::path::Path::new("music/gd73-06-22/")),
            PathBuf::from("music/gd73-06-22")
        );
    }
}
