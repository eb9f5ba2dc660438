use anyhow::{Result, Context};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(())
    }

    // @generates: Output path for a re-split subtitle, next to the input
    // @params: input_file, suffix
    pub fn split_output_path<P: AsRef<Path>>(input_file: P, suffix: &str) -> PathBuf {
        let input_file = input_file.as_ref();
        let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
        let extension = input_file
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_else(|| "srt".to_string());

        input_file.with_file_name(format!("{}{}.{}", stem, suffix, extension))
    }

    // @checks: Whether a file is itself a re-split output
    pub fn is_split_output<P: AsRef<Path>>(path: P, suffix: &str) -> bool {
        path.as_ref()
            .file_stem()
            .map(|stem| stem.to_string_lossy().ends_with(suffix))
            .unwrap_or(false)
    }

    /// Find files with a specific extension in a directory, sorted by path
    pub fn find_files<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Vec<PathBuf>> {
        let wanted = extension.trim_start_matches('.');
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(wanted))
            {
                result.push(path.to_path_buf());
            }
        }

        result.sort();
        Ok(result)
    }

    /// Find SRT files that still need re-splitting
    pub fn find_srt_files<P: AsRef<Path>>(dir: P, suffix: &str) -> Result<Vec<PathBuf>> {
        Ok(Self::find_files(dir, "srt")?
            .into_iter()
            .filter(|path| !Self::is_split_output(path, suffix))
            .collect())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
