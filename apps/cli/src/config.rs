use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use version_stamp::config::{CONFIG_FILE_NAME, relative_artifact_path};
use version_stamp::{
    DEFAULT_ENV_VAR, DEFAULT_FALLBACK, DEFAULT_HEADER_PATH, DEFAULT_MACRO_NAME, DEFAULT_TEXT_PATH,
    StampConfig,
};

use crate::io;

pub const ENV_VAR_OVERRIDE: &str = "VERSION_STAMP_ENV_VAR";
pub const FALLBACK_OVERRIDE: &str = "VERSION_STAMP_FALLBACK";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampSettings {
    pub root: PathBuf,
    pub env_var: String,
    pub fallback: String,
    pub text_path: PathBuf,
    pub header_path: PathBuf,
    pub macro_name: String,
}

impl StampSettings {
    pub fn text_file(&self) -> PathBuf {
        self.root.join(&self.text_path)
    }

    pub fn header_file(&self) -> PathBuf {
        self.root.join(&self.header_path)
    }
}

#[derive(Debug, Default)]
pub struct SettingsOverrides {
    pub root: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub env_var: Option<String>,
    pub fallback: Option<String>,
}

pub fn load_stamp_config(root: &Path, explicit: Option<&Path>) -> Result<StampConfig> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = root.join(CONFIG_FILE_NAME);
            if !path.exists() {
                return Ok(StampConfig::default());
            }
            path
        }
    };

    let config_text = io::read_to_string(&config_path)?;
    let config = StampConfig::parse(&config_text)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;
    Ok(config)
}

pub fn resolve_stamp_settings<F>(overrides: SettingsOverrides, env: F) -> Result<StampSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let input = overrides.root.unwrap_or_else(|| PathBuf::from("."));
    let root = input
        .canonicalize()
        .with_context(|| format!("Failed to resolve output root {}", input.display()))?;
    if !root.is_dir() {
        bail!("Output root must be a directory: {}", root.display());
    }

    let config = load_stamp_config(&root, overrides.config.as_deref())?;
    let section = config.section();

    let env_var = normalize_optional(overrides.env_var)
        .or_else(|| normalize_optional(env(ENV_VAR_OVERRIDE)))
        .or_else(|| normalize_optional(section.env_var))
        .unwrap_or_else(|| DEFAULT_ENV_VAR.to_string());

    let fallback = normalize_optional(overrides.fallback)
        .or_else(|| normalize_optional(env(FALLBACK_OVERRIDE)))
        .or_else(|| normalize_optional(section.fallback))
        .unwrap_or_else(|| DEFAULT_FALLBACK.to_string());

    let text_path = normalize_optional(section.text_path)
        .unwrap_or_else(|| DEFAULT_TEXT_PATH.to_string());
    let header_path = normalize_optional(section.header_path)
        .unwrap_or_else(|| DEFAULT_HEADER_PATH.to_string());
    let macro_name = normalize_optional(section.macro_name)
        .unwrap_or_else(|| DEFAULT_MACRO_NAME.to_string());

    Ok(StampSettings {
        root,
        env_var,
        fallback,
        text_path: relative_artifact_path("text_path", &text_path)?,
        header_path: relative_artifact_path("header_path", &header_path)?,
        macro_name,
    })
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.and_then(|val| {
        let trimmed = val.trim().to_string();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    })
}
