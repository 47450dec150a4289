use flate2::read::GzDecoder;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{InputError, Result};
use crate::WorkRecord;

/// Parses a JSON array of work records.
pub fn parse_works(text: &str) -> Result<Vec<WorkRecord>> {
    serde_json::from_str(text).map_err(InputError::from_json)
}

pub fn parse_works_reader<R: Read>(reader: R) -> Result<Vec<WorkRecord>> {
    serde_json::from_reader(reader).map_err(InputError::from_json)
}

/// Reads one export file; `.gz` files are decompressed on the fly.
pub fn load_works<P: AsRef<Path>>(path: P) -> Result<Vec<WorkRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_gzip = path.extension().is_some_and(|ext| ext == "gz");
    if is_gzip {
        parse_works_reader(BufReader::new(GzDecoder::new(file)))
    } else {
        parse_works_reader(BufReader::new(file))
    }
}

/// A file is returned as is; a directory is searched recursively for
/// `.json` and `.json.gz` exports, sorted by path.
pub fn find_input_files<P: AsRef<Path>>(path: P) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for suffix in ["**/*.json", "**/*.json.gz"] {
        let pattern = path.join(suffix);
        files.extend(glob(&pattern.to_string_lossy())?.filter_map(std::result::Result::ok));
    }
    files.sort();

    if files.is_empty() {
        return Err(InputError::NoInputFiles(path.to_path_buf()));
    }
    Ok(files)
}

/// Loads every export under `path` and concatenates their works in file order.
pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<WorkRecord>> {
    let files = find_input_files(path)?;

    let progress = if files.len() > 1 {
        let bar = ProgressBar::new(files.len() as u64);
        if let Ok(style) =
            ProgressStyle::default_bar().template("[{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})")
        {
            bar.set_style(style.progress_chars("#>-"));
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let mut works = Vec::new();
    for file in &files {
        let batch = load_works(file)?;
        debug!("Loaded {} works from {}", batch.len(), file.display());
        works.extend(batch);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(works)
}
