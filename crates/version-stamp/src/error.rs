use thiserror::Error;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("failed to parse stamp config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("invalid macro name: {0}")]
    InvalidMacroName(String),
    #[error("invalid path for {field}: {value}")]
    InvalidPath { field: &'static str, value: String },
}
