//! Configuration file parsing and validation

pub mod spanx_toml;

pub use spanx_toml::{
    ColorConfig, ColorOption, Config, ImageConfig, OutputConfig, OutputFormat, SpanxMeta,
};
