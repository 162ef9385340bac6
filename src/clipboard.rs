use crate::ClipboardError;
use arboard::Clipboard;
use tracing::{debug, trace};

/// Destination for the text a tool produces.
pub trait ClipboardSink {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
///
/// The underlying handle is opened on the first write, so runs that fail
/// before their copy step never touch the clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard { inner: None }
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        if self.inner.is_none() {
            debug!("Initializing clipboard");
            let clipboard =
                Clipboard::new().map_err(|e| ClipboardError::ClipboardInitError(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::ClipboardInitError("clipboard unavailable".to_owned()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        trace!("Writing {} bytes to clipboard", text.len());
        self.handle()?
            .set_text(text)
            .map_err(|e| ClipboardError::ClipboardWriteError(e.to_string()))
    }
}
