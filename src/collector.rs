use crate::clipboard::ClipboardSink;
use crate::policy::{IgnorePolicy, IncludePolicy};
use crate::tree::TreeNode;
use crate::ClipboardError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone)]
pub struct TreeCollectorConfig {
    pub root: PathBuf,
    pub ignore_patterns: Option<Vec<String>>,
    pub include_extensions: Option<Vec<String>>,
}

impl Default for TreeCollectorConfig {
    fn default() -> Self {
        TreeCollectorConfig {
            root: PathBuf::from("."),
            ignore_patterns: None,
            include_extensions: None,
        }
    }
}

/// Result of a successful collection run.
#[derive(Debug, Clone)]
pub struct TreeRun {
    pub tree: TreeNode,
    pub rendered: String,
    pub file_count: usize,
    pub dir_count: usize,
}

pub struct TreeCollector {
    root: PathBuf,
    ignore: IgnorePolicy,
    include: IncludePolicy,
}

impl TreeCollector {
    pub fn new(config: TreeCollectorConfig) -> Self {
        TreeCollector {
            root: config.root,
            ignore: IgnorePolicy::new(config.ignore_patterns),
            include: IncludePolicy::new(config.include_extensions),
        }
    }

    /// Walks the root top-down and returns the sorted tree of included files.
    ///
    /// Ignored directories are pruned before descent, so nothing beneath
    /// them is ever visited. Entries that cannot be read are logged and
    /// skipped, including a missing root.
    pub fn collect(&self) -> Result<TreeNode, ClipboardError> {
        debug!("Collecting tree under {:?}", self.root);
        let mut tree = TreeNode::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !is_directory(entry)
                    || !self.ignore.should_ignore(&entry.file_name().to_string_lossy())
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if entry.depth() == 0 || is_directory(&entry) {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.include.includes(&name) || self.ignore.should_ignore(&name) {
                trace!("Skipping file: {:?}", entry.path());
                continue;
            }

            let segments = relative_segments(&self.root, entry.path())?;
            trace!("Including file: {:?}", segments);
            if segments.len() == 1 {
                tree.push_file(&segments[0]);
            } else {
                tree.insert_file(&segments[..]);
            }
        }

        tree.sort();
        Ok(tree)
    }
}

// Links are never followed; a link that resolves to a directory still counts
// as one so it is kept out of the file lists.
fn is_directory(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir())
}

fn relative_segments(root: &Path, path: &Path) -> Result<Vec<String>, ClipboardError> {
    let relative = path
        .strip_prefix(root)
        .map_err(|e| ClipboardError::TraversalError(format!("{}: {:?}", e, path)))?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect())
}

/// Renders the tree as JSON indented by two spaces.
pub fn render_tree(tree: &TreeNode) -> Result<String, ClipboardError> {
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Builds, renders and copies the tree, in that order.
///
/// The clipboard is written only after the whole tree has been rendered.
pub fn gather_tree_to_clipboard(
    config: TreeCollectorConfig,
    clipboard: &mut dyn ClipboardSink,
) -> Result<TreeRun, ClipboardError> {
    let collector = TreeCollector::new(config);
    let tree = collector.collect()?;
    let rendered = render_tree(&tree)?;

    clipboard.set_text(rendered.clone())?;

    let file_count = tree.file_count();
    let dir_count = tree.dir_count();
    info!(
        "Copied tree with {} files in {} directories to clipboard",
        file_count, dir_count
    );
    Ok(TreeRun {
        tree,
        rendered,
        file_count,
        dir_count,
    })
}
