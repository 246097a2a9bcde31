pub mod config;
mod error;
mod label;
mod render;

pub use crate::config::stamp::{StampConfig, StampSection};
pub use crate::error::StampError;
pub use crate::label::{DEFAULT_ENV_VAR, DEFAULT_FALLBACK, LABEL_PREFIX, VersionLabel};
pub use crate::render::{
    DEFAULT_HEADER_PATH, DEFAULT_MACRO_NAME, DEFAULT_TEXT_PATH, render_announcement,
    render_header, render_text,
};
