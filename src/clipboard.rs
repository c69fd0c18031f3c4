//! Clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use zeroize::Zeroize;

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard. The context is opened lazily on first write so a
/// headless session can still run the generator.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&mut ClipboardContext, ClipboardError> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| ClipboardError(e.to_string()))?;
            self.ctx = Some(ctx);
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| ClipboardError("context not initialised".into()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let ctx = self.context()?;
        ctx.set_contents(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))?;

        // Read back so the provider has taken ownership, then wipe our copy.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

#[cfg(test)]
pub mod fake {
    use super::*;

    /// Records writes, or fails every write.
    #[derive(Debug, Default)]
    pub struct FakeClipboard {
        pub fail: bool,
        pub contents: Option<String>,
        pub writes: usize,
    }

    impl FakeClipboard {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl Clipboard for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.writes += 1;
            if self.fail {
                return Err(ClipboardError("permission denied".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }
}
