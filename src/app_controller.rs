use anyhow::{anyhow, Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::pipeline::Resegmenter;
use crate::segmentation::Transcript;
use crate::subtitle_processor;

// @module: Application controller for subtitle processing

/// Language used when neither the caller nor the file name names one
pub const UNDETERMINED_LANGUAGE: &str = "und";

/// What happened to one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Re-split output was written
    Written {
        output: PathBuf,
        language: String,
        cues_in: usize,
        cues_out: usize,
        dropped_entries: usize,
        issues: usize,
    },
    /// Nothing to do, with the reason
    Skipped(String),
}

/// Totals for a folder run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Main application controller for subtitle re-splitting
#[derive(Debug, Clone)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Engine built from the configuration
    engine: Resegmenter,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let engine = Resegmenter::from_config(&config);

        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn engine(&self) -> &Resegmenter {
        &self.engine
    }

    /// Pick the language for a file: explicit override, then file name tag, then undetermined
    pub fn language_for(&self, input_file: &Path, language: Option<&str>) -> String {
        language
            .map(str::to_string)
            .or_else(|| language_utils::detect_language_tag(input_file))
            .unwrap_or_else(|| UNDETERMINED_LANGUAGE.to_string())
    }

    /// Re-split one SRT file and write `<stem><suffix>.srt` next to it
    pub fn split_file(&self, input_file: &Path, language: Option<&str>, force_overwrite: bool) -> Result<FileOutcome> {
        if !input_file.is_file() {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let suffix = &self.config.output_suffix;
        if FileManager::is_split_output(input_file, suffix) {
            debug!("Skipping {:?}, already a re-split output", input_file);
            return Ok(FileOutcome::Skipped(format!("already ends with '{}'", suffix)));
        }

        let output = FileManager::split_output_path(input_file, suffix);
        if output.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output);
            return Ok(FileOutcome::Skipped(format!("output exists: {}", output.display())));
        }

        let language = self.language_for(input_file, language);
        let label = Self::display_name(input_file);
        let content = FileManager::read_to_string(input_file)?;

        let result = self
            .engine
            .resplit_srt(&content, &language)
            .with_context(|| format!("Failed to re-split subtitle file: {:?}", input_file))?;

        for warning in &result.warnings {
            warn!("{}: {}", label, warning);
        }
        result.report.log_summary(&label);

        FileManager::write_to_file(&output, &result.srt)?;

        info!(
            "{} ({}): {} -> {} cues, written to {:?}",
            label,
            language,
            result.input_cues,
            result.cues.len(),
            output
        );

        Ok(FileOutcome::Written {
            output,
            language,
            cues_in: result.input_cues,
            cues_out: result.cues.len(),
            dropped_entries: result.warnings.len(),
            issues: result.report.issue_count(),
        })
    }

    /// Run the re-split workflow on a single file
    pub async fn run(&self, input_file: PathBuf, language: Option<String>, force_overwrite: bool) -> Result<FileOutcome> {
        let start_time = Instant::now();
        let controller = self.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            controller.split_file(&input_file, language.as_deref(), force_overwrite)
        })
        .await
        .map_err(|e| anyhow!("Worker task failed: {}", e))??;

        debug!("File processed in {}", Self::format_duration(start_time.elapsed()));
        Ok(outcome)
    }

    /// Run the workflow in folder mode, processing every SRT file below a directory
    /// Existing outputs and files that are themselves outputs are skipped
    pub async fn run_folder(&self, input_dir: PathBuf, language: Option<String>, force_overwrite: bool) -> Result<FolderSummary> {
        let start_time = Instant::now();

        if !input_dir.is_dir() {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let files = FileManager::find_srt_files(&input_dir, &self.config.output_suffix)?;
        if files.is_empty() {
            return Err(anyhow!("No subtitle files found in directory: {:?}", input_dir));
        }

        let folder_pb = ProgressBar::new(files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result.progress_chars("#>-"));
        folder_pb.set_message("Re-splitting");

        let results = stream::iter(files)
            .map(|path| {
                let controller = self.clone();
                let language = language.clone();
                let folder_pb = folder_pb.clone();

                async move {
                    let worker_path = path.clone();
                    let result = tokio::task::spawn_blocking(move || {
                        controller.split_file(&worker_path, language.as_deref(), force_overwrite)
                    })
                    .await
                    .map_err(|e| anyhow!("Worker task failed: {}", e))
                    .and_then(|result| result);

                    folder_pb.set_message(Self::display_name(&path));
                    folder_pb.inc(1);
                    (path, result)
                }
            })
            .buffer_unordered(self.config.concurrent_files)
            .collect::<Vec<_>>()
            .await;

        folder_pb.finish_with_message("Folder processing complete");

        let mut summary = FolderSummary::default();
        for (path, result) in results {
            match result {
                Ok(FileOutcome::Written { .. }) => summary.processed += 1,
                Ok(FileOutcome::Skipped(_)) => summary.skipped += 1,
                Err(e) => {
                    error!("Error processing file {}: {:#}", Self::display_name(&path), e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Folder processing completed in {}: {} processed, {} skipped, {} errors",
            Self::format_duration(start_time.elapsed()),
            summary.processed,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    /// Convert a transcript JSON file into SRT, optionally re-splitting it
    ///
    /// Without an explicit output the SRT lands next to the transcript.
    pub fn segment_transcript_file(
        &self,
        input_file: &Path,
        output_file: Option<PathBuf>,
        language: Option<&str>,
        split: bool,
    ) -> Result<PathBuf> {
        let json = FileManager::read_to_string(input_file)?;
        let transcript = Transcript::from_json(&json)
            .with_context(|| format!("Failed to parse transcript: {:?}", input_file))?;

        let mut cues = self.engine.segment_transcript(&transcript);
        info!(
            "{}: {} segments -> {} sentence cues",
            Self::display_name(input_file),
            transcript.segments.len(),
            cues.len()
        );

        if cues.is_empty() {
            warn!("Transcript produced no cues: {:?}", input_file);
        }

        if split {
            let language = self.language_for(input_file, language);
            cues = self
                .engine
                .resplit(cues, &language)
                .with_context(|| format!("Failed to re-split transcript cues: {:?}", input_file))?;
            info!("Re-split for {} into {} cues", language, cues.len());
        }

        let output = output_file.unwrap_or_else(|| input_file.with_extension("srt"));
        FileManager::write_to_file(&output, &subtitle_processor::serialize(&cues))?;
        info!("Success: {:?}", output);

        Ok(output)
    }

    fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
