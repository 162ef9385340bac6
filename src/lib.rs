pub mod clipboard;
pub mod collector;
pub mod concat;
pub mod errors;
pub mod logger;
pub mod policy;
pub mod tree;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use collector::{gather_tree_to_clipboard, TreeCollectorConfig};
pub use concat::{concat_files_to_clipboard, ConcatConfig};
pub use errors::ClipboardError;
pub use policy::{IgnorePolicy, IncludePolicy};
pub use tree::TreeNode;
