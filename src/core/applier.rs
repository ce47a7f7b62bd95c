// watermarker/src/core/applier.rs
use super::{ApplyStats, Result, WatermarkConfig, WatermarkError};
use crate::processors::{Compositor, LoadedImage, Loader, Watermark, Writer};
use crate::utils::{format_file_size, is_same_directory, output_path_for};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct WatermarkApplier {
    config: WatermarkConfig,
    loader: Loader,
    compositor: Compositor,
    writer: Writer,
    show_progress: bool,
}

impl WatermarkApplier {
    pub fn new(config: WatermarkConfig) -> Self {
        let compositor = Compositor::new(config.position, config.padding);
        let writer = Writer::new(config.jpeg_quality);

        Self {
            config,
            loader: Loader::new(),
            compositor,
            writer,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &WatermarkConfig {
        &self.config
    }

    /// Watermark every decodable image directly inside `target_dir` and write
    /// the results into `output_dir` under the same file names.
    pub fn apply_directory(
        &self,
        target_dir: &Path,
        watermark_path: &Path,
        output_dir: &Path,
    ) -> Result<ApplyStats> {
        self.config.validate()?;
        self.validate_paths(target_dir, watermark_path, output_dir)?;

        let watermark = Watermark::load(watermark_path, self.config.opacity)?;

        std::fs::create_dir_all(output_dir).map_err(|e| WatermarkError::ImageWrite {
            path: output_dir.to_path_buf(),
            reason: format!("cannot create output directory: {}", e),
        })?;

        let files = self.collect_files(target_dir)?;
        if files.is_empty() {
            log::warn!("No files found in {}", target_dir.display());
            return Ok(ApplyStats::default());
        }

        log::info!(
            "Watermarking {} files from {} into {}",
            files.len(),
            target_dir.display(),
            output_dir.display()
        );

        let pb = self.create_progress_bar(files.len());
        let mut stats = ApplyStats::default();

        for input_path in &files {
            let output_path = output_path_for(input_path, output_dir)?;

            let result = self
                .loader
                .load(input_path)
                .map_err(|e| as_per_file(input_path, e))
                .and_then(|loaded| {
                    self.composite_and_save(input_path, loaded, &watermark, &output_path)
                });

            match result {
                Ok(bytes) => {
                    stats.processed_count += 1;
                    stats.bytes_written += bytes;
                }
                Err(e) if e.is_per_file() => {
                    log::warn!("Skipping {}: {}", input_path.display(), e);
                    stats.skipped.push((input_path.clone(), e.to_string()));
                }
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message(format!(
            "Watermarked {} images ({} skipped)",
            stats.processed_count,
            stats.skipped_count()
        ));

        log::info!(
            "Processed {} images, skipped {}, wrote {}",
            stats.processed_count,
            stats.skipped_count(),
            format_file_size(stats.bytes_written)
        );

        Ok(stats)
    }

    /// Watermark a single image. Returns the number of bytes written.
    pub fn apply_to_file(
        &self,
        target_path: &Path,
        watermark_path: &Path,
        output_path: &Path,
    ) -> Result<u64> {
        self.config.validate()?;
        let watermark = Watermark::load(watermark_path, self.config.opacity)?;

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WatermarkError::ImageWrite {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })?;
            }
        }

        let loaded = self.loader.load(target_path)?;
        self.composite_and_save(target_path, loaded, &watermark, output_path)
    }

    fn composite_and_save(
        &self,
        target_path: &Path,
        loaded: LoadedImage,
        watermark: &Watermark,
        output_path: &Path,
    ) -> Result<u64> {
        let composited = self.compositor.composite(&loaded.image, watermark);
        let bytes = self.writer.save(&composited, output_path, loaded.format)?;

        log::debug!(
            "Watermarked {} -> {}",
            target_path.display(),
            output_path.display()
        );

        Ok(bytes)
    }

    fn collect_files(&self, target_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(target_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let io = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory loop"));
                    return Err(unreadable_target(target_dir, io));
                }
                Err(e) => {
                    log::warn!("Cannot read directory entry: {}", e);
                    continue;
                }
            };

            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    }

    fn validate_paths(
        &self,
        target_dir: &Path,
        watermark_path: &Path,
        output_dir: &Path,
    ) -> Result<()> {
        if !target_dir.exists() {
            return Err(WatermarkError::InvalidPath(format!(
                "Target directory does not exist: {}",
                target_dir.display()
            )));
        }

        if !target_dir.is_dir() {
            return Err(WatermarkError::InvalidPath(format!(
                "Target path is not a directory: {}",
                target_dir.display()
            )));
        }

        std::fs::read_dir(target_dir).map_err(|e| unreadable_target(target_dir, e))?;

        if !watermark_path.is_file() {
            return Err(WatermarkError::InvalidPath(format!(
                "Watermark file does not exist: {}",
                watermark_path.display()
            )));
        }

        if output_dir.exists() && !output_dir.is_dir() {
            return Err(WatermarkError::ImageWrite {
                path: output_dir.to_path_buf(),
                reason: "output path exists but is not a directory".to_string(),
            });
        }

        // Writing into the target directory would overwrite the inputs
        if is_same_directory(target_dir, output_dir) {
            return Err(WatermarkError::InvalidParameter(
                "Target and output directories cannot be the same".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for WatermarkApplier {
    fn default() -> Self {
        Self::new(WatermarkConfig::default())
    }
}

fn unreadable_target(target_dir: &Path, e: std::io::Error) -> WatermarkError {
    WatermarkError::InvalidPath(format!(
        "Cannot read target directory {}: {}",
        target_dir.display(),
        e
    ))
}

/// A listed file that vanished or cannot be opened only affects that file.
fn as_per_file(path: &Path, e: WatermarkError) -> WatermarkError {
    match e {
        WatermarkError::InvalidPath(reason) => WatermarkError::ImageDecode {
            path: path.to_path_buf(),
            reason,
        },
        WatermarkError::Io(io) => WatermarkError::ImageDecode {
            path: path.to_path_buf(),
            reason: io.to_string(),
        },
        other => other,
    }
}

/// Watermark every image in `target_dir` with the default configuration and
/// return how many images were written.
pub fn apply(target_dir: &Path, watermark_path: &Path, output_dir: &Path) -> Result<usize> {
    WatermarkApplier::default()
        .apply_directory(target_dir, watermark_path, output_dir)
        .map(|stats| stats.processed_count)
}
