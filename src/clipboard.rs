//! Copying result sections to the system clipboard.

use arboard::Clipboard;
use thiserror::Error;

use crate::analysis::AnalysisResult;

/// Part of a result that can be copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CopySection {
    Moral,
    Transformed,
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),

    #[error("Nothing to copy: the result has no {0}")]
    Empty(&'static str),
}

impl CopySection {
    pub fn name(&self) -> &'static str {
        match self {
            CopySection::Moral => "moral",
            CopySection::Transformed => "transformed text",
        }
    }

    /// Text of this section, if the result has any.
    pub fn text<'a>(&self, result: &'a AnalysisResult) -> Option<&'a str> {
        let text = match self {
            CopySection::Moral => Some(result.moral.as_str()),
            CopySection::Transformed => result.transformed_text.as_deref(),
        };
        text.filter(|t| !t.is_empty())
    }
}

/// Handler for clipboard operations.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            clipboard: Clipboard::new()?,
        })
    }

    /// Copy one section of `result`.
    pub fn copy_section(
        &mut self,
        result: &AnalysisResult,
        section: CopySection,
    ) -> Result<(), ClipboardError> {
        let text = section
            .text(result)
            .ok_or(ClipboardError::Empty(section.name()))?;
        self.clipboard.set_text(text.to_string())?;
        tracing::debug!(section = section.name(), len = text.len(), "Copied to clipboard");
        Ok(())
    }
}
