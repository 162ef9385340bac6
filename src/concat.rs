use crate::clipboard::ClipboardSink;
use crate::ClipboardError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

pub const DEFAULT_INPUT_LIST: &str = "files_to_extract.csv";

#[derive(Debug, Clone)]
pub struct ConcatConfig {
    pub input_list: PathBuf,
    pub base_dir: PathBuf,
}

impl Default for ConcatConfig {
    fn default() -> Self {
        ConcatConfig {
            input_list: PathBuf::from(DEFAULT_INPUT_LIST),
            base_dir: PathBuf::from("."),
        }
    }
}

/// Result of a successful concatenation run.
#[derive(Debug, Clone)]
pub struct ConcatRun {
    pub blocks: usize,
    pub failures: usize,
    pub output: String,
}

/// One labelled unit of the concatenated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormattedBlock {
    Content { path: String, content: String },
    ReadError { path: String, message: String },
}

impl FormattedBlock {
    pub fn path(&self) -> &str {
        match self {
            FormattedBlock::Content { path, .. } | FormattedBlock::ReadError { path, .. } => {
                path.as_str()
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormattedBlock::ReadError { .. })
    }
}

impl fmt::Display for FormattedBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormattedBlock::Content { path, content } => {
                write!(f, "=== File: {} ===\n{}\n\n", path, content)
            }
            FormattedBlock::ReadError { path, message } => {
                write!(f, "=== Error reading {}: {} ===\n\n", path, message)
            }
        }
    }
}

/// Reads the first field of every row. There is no header row.
pub fn read_path_list(input: &Path) -> Result<Vec<String>, ClipboardError> {
    debug!("Reading file list from {:?}", input);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(input)
        .map_err(|e| ClipboardError::InputListError(format!("{}: {}", input.display(), e)))?;

    let mut paths = Vec::new();
    for record in reader.records() {
        let record = record?;
        // The reader drops blank lines, so every record has a first field.
        paths.extend(record.get(0).map(str::to_owned));
    }
    debug!("Read {} paths", paths.len());
    Ok(paths)
}

/// Reads one listed file. Failures are folded into the block, never returned.
pub fn read_block(base_dir: &Path, path: &str) -> FormattedBlock {
    let resolved = base_dir.join(path);
    trace!("Reading {:?}", resolved);
    match fs::read_to_string(&resolved) {
        Ok(content) => FormattedBlock::Content {
            path: path.to_owned(),
            content,
        },
        Err(e) => {
            warn!("Failed to read file {}: {}", path, e);
            FormattedBlock::ReadError {
                path: path.to_owned(),
                message: e.to_string(),
            }
        }
    }
}

pub fn concatenate_blocks(blocks: &[FormattedBlock]) -> String {
    blocks.iter().map(ToString::to_string).collect()
}

/// Reads every listed file in row order and copies the combined text.
///
/// Only a failure to read the list itself, or to write the clipboard,
/// is returned as an error.
pub fn concat_files_to_clipboard(
    config: ConcatConfig,
    clipboard: &mut dyn ClipboardSink,
) -> Result<ConcatRun, ClipboardError> {
    let paths = read_path_list(&config.input_list)?;

    let blocks: Vec<FormattedBlock> = paths
        .iter()
        .map(|path| read_block(&config.base_dir, path))
        .collect();
    let failures = blocks.iter().filter(|b| b.is_error()).count();
    let output = concatenate_blocks(&blocks);
    trace!("Final content length: {}", output.len());

    clipboard.set_text(output.clone())?;

    info!(
        "Copied {} files to clipboard ({} unreadable)",
        blocks.len(),
        failures
    );
    Ok(ConcatRun {
        blocks: blocks.len(),
        failures,
        output,
    })
}
