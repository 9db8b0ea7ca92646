//! Output formatters (terminal preview and JSONL)

pub mod jsonl;
pub mod preview;

pub use jsonl::JsonlFormatter;
pub use preview::PreviewFormatter;

use crate::config::{OutputConfig, OutputFormat};
use crate::text::DecoratedText;

/// Render `text` the way `config` asks for.
pub fn format(text: &DecoratedText, config: &OutputConfig) -> String {
    match config.format {
        OutputFormat::Preview => PreviewFormatter::new(config.color).format(text),
        OutputFormat::Jsonl => JsonlFormatter::new().format(text),
    }
}
