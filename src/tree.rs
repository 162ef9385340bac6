use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// One directory level: the included files directly inside it and the
/// child directories that lead to more of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dirs: Option<BTreeMap<String, TreeNode>>,
}

impl TreeNode {
    pub fn new() -> Self {
        TreeNode::default()
    }

    /// Appends a file name to this level.
    pub fn push_file(&mut self, name: &str) {
        trace!("Adding file: {}", name);
        self.files.get_or_insert_with(Vec::new).push(name.to_owned());
    }

    /// Inserts a file given its path segments relative to this node.
    ///
    /// Every segment but the last names a directory; the last is the file.
    pub fn insert_file<S: AsRef<str>>(&mut self, segments: &[S]) {
        let Some((file, dirs)) = segments.split_last() else {
            return;
        };
        let mut current_node = self;
        for dir in dirs {
            current_node = current_node
                .dirs
                .get_or_insert_with(BTreeMap::new)
                .entry(dir.as_ref().to_owned())
                .or_default();
        }
        current_node.push_file(file.as_ref());
    }

    /// Sorts the file list of this node and every descendant.
    pub fn sort(&mut self) {
        if let Some(files) = self.files.as_mut() {
            files.sort();
        }
        if let Some(dirs) = self.dirs.as_mut() {
            for child in dirs.values_mut() {
                child.sort();
            }
        }
    }

    pub fn file_count(&self) -> usize {
        self.files.as_ref().map_or(0, Vec::len)
            + self
                .dirs
                .iter()
                .flat_map(|dirs| dirs.values())
                .map(TreeNode::file_count)
                .sum::<usize>()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.as_ref().map_or(0, |dirs| {
            dirs.len() + dirs.values().map(TreeNode::dir_count).sum::<usize>()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_none() && self.dirs.is_none()
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.dirs.as_ref().and_then(|dirs| dirs.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_creates_intermediate_dirs() {
        let mut root = TreeNode::new();
        root.insert_file(&["src", "lib", "a.ts"]);
        root.insert_file(&["src", "b.ts"]);

        let src = root.child("src").expect("src missing");
        assert_eq!(src.files, Some(vec!["b.ts".to_string()]));
        assert_eq!(
            src.child("lib").and_then(|n| n.files.clone()),
            Some(vec!["a.ts".to_string()])
        );
        assert!(root.files.is_none());
        assert_eq!(root.file_count(), 2);
        assert_eq!(root.dir_count(), 2);
    }

    #[test]
    fn sort_is_recursive_and_idempotent() {
        let mut root = TreeNode::new();
        for name in ["z.ts", "a.ts", "m.ts"] {
            root.push_file(name);
            root.insert_file(&["pkg", name]);
        }
        root.sort();
        let once = root.clone();
        root.sort();

        assert_eq!(root, once);
        let expected = Some(vec!["a.ts".to_string(), "m.ts".to_string(), "z.ts".to_string()]);
        assert_eq!(root.files, expected);
        assert_eq!(root.child("pkg").and_then(|n| n.files.clone()), expected);
    }

    #[test]
    fn empty_node_serializes_to_empty_object() {
        let root = TreeNode::new();
        assert!(root.is_empty());
        assert_eq!(serde_json::to_string(&root).unwrap(), "{}");
    }
}
