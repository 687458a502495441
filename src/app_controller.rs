use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use std::path::Path;
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::document::SubtitleDocument;
use crate::file_utils::{FileManager, FileType};
use crate::srt_codec;

// @module: Application controller for subtitle file workflows

/// Main application controller for checking and formatting subtitle files
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Validate a single subtitle file or every .srt file under a directory.
    ///
    /// Returns an error when the path does not exist or when any file fails
    /// to parse, so the CLI exits non-zero on invalid input.
    pub fn run_check(&self, input_path: &Path) -> Result<()> {
        if input_path.is_file() {
            self.check_file(input_path)
        } else if input_path.is_dir() {
            self.run_check_folder(input_path)
        } else {
            Err(anyhow::anyhow!(
                "Input path does not exist: {:?}",
                input_path
            ))
        }
    }

    /// Validate one file, reporting line-accurate diagnostics on failure
    fn check_file(&self, input_file: &Path) -> Result<()> {
        if let Ok(file_type) = FileManager::detect_file_type(input_file) {
            if file_type != FileType::Subtitle {
                warn!(
                    "File does not look like an SRT subtitle: {:?}",
                    input_file
                );
            }
        }

        let content = FileManager::read_to_string(input_file)?;

        match srt_codec::parse(&content) {
            Ok(subs) => {
                info!("{:?}: {} cues", input_file, subs.len());
                Ok(())
            }
            Err(e) => {
                error!("{:?}: {}", input_file, e);
                error!("  {}", e.failure_reason());
                error!("  {}", e.recovery_suggestion());
                Err(anyhow::anyhow!(
                    "Invalid subtitle file {:?} (line {})",
                    input_file,
                    e.line_number()
                ))
            }
        }
    }

    /// Validate every .srt file under a directory with progress reporting
    fn run_check_folder(&self, input_dir: &Path) -> Result<()> {
        let subtitle_files = FileManager::find_files(input_dir, "srt")
            .with_context(|| format!("Failed to scan directory: {:?}", input_dir))?;

        if subtitle_files.is_empty() {
            warn!("No .srt files found in directory: {:?}", input_dir);
            return Ok(());
        }

        info!(
            "Checking {} subtitle file(s) in {:?}",
            subtitle_files.len(),
            input_dir
        );

        // Create a progress bar for folder processing
        let progress_bar = ProgressBar::new(subtitle_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("█▓▒░"));
        progress_bar.set_message("Checking files");

        // Track success and failure counts
        let mut success_count = 0;
        let mut error_count = 0;

        for subtitle_file in subtitle_files.iter() {
            match self.check_file(subtitle_file) {
                Ok(()) => success_count += 1,
                Err(_) => error_count += 1,
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        if error_count > 0 {
            Err(anyhow::anyhow!(
                "{} of {} subtitle files failed validation",
                error_count,
                success_count + error_count
            ))
        } else {
            info!("All {} subtitle files are valid", success_count);
            Ok(())
        }
    }

    /// Rewrite a subtitle file in canonical form.
    ///
    /// The file is parsed, optionally renumbered to contiguous 1..N
    /// indices, then re-serialized; whitespace noise and stray blank lines
    /// from the source do not survive the round trip. Writes back in place
    /// unless an output path is given; refuses to overwrite a distinct
    /// existing output without `force_overwrite`.
    pub fn run_format(
        &self,
        input_file: &Path,
        output_file: Option<&Path>,
        renumber: bool,
        force_overwrite: bool,
    ) -> Result<()> {
        if !input_file.is_file() {
            return Err(anyhow::anyhow!(
                "Input file does not exist: {:?}",
                input_file
            ));
        }

        let mut document = SubtitleDocument::open(input_file)
            .map(|doc| doc.with_history_limit(self.config.history_limit))
            .map_err(|e| anyhow::anyhow!("Failed to open {:?}: {}", input_file, e))?;

        if renumber {
            document.renumber();
            debug!("Renumbered {} cues", document.len());
        }

        let target = output_file.unwrap_or(input_file);
        if target != input_file && target.exists() && !force_overwrite {
            return Err(anyhow::anyhow!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                target
            ));
        }

        document
            .save_as(target)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", target, e))?;

        info!("Wrote {} cues to {:?}", document.len(), target);
        Ok(())
    }
}
