#![forbid(unsafe_code)]

//! Decorated text storage

mod decorated_text;
mod runs;

pub use decorated_text::DecoratedText;
pub use runs::Run;
