//! Match-rule engine: locating matches and applying decorations to them

pub mod executor;
pub mod replace;

pub use executor::apply_decoration;
pub use replace::{Replacement, replace_matches};
