use clipgather::{ClipboardError, ClipboardSink};
use std::fs;
use std::path::Path;

/// Clipboard stand-in that remembers every write.
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
    pub fail: bool,
}

impl RecordingClipboard {
    pub fn failing() -> Self {
        RecordingClipboard {
            writes: Vec::new(),
            fail: true,
        }
    }
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::ClipboardInitError(
                "no clipboard available".to_string(),
            ));
        }
        self.writes.push(text);
        Ok(())
    }
}

pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
