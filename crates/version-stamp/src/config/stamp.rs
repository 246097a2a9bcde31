use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::StampError;

pub const CONFIG_FILE_NAME: &str = "stamp.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StampConfig {
    pub stamp: Option<StampSection>,
}

/// The `[stamp]` table. Blank values are treated as absent.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StampSection {
    pub env_var: Option<String>,
    pub fallback: Option<String>,
    pub text_path: Option<String>,
    pub header_path: Option<String>,
    pub macro_name: Option<String>,
}

impl StampConfig {
    pub fn parse(contents: &str) -> Result<Self, StampError> {
        let config: StampConfig = toml::from_str(contents)?;
        if let Some(section) = &config.stamp {
            section.validate()?;
        }
        Ok(config)
    }

    pub fn section(&self) -> StampSection {
        self.stamp.clone().unwrap_or_default()
    }
}

impl StampSection {
    fn validate(&self) -> Result<(), StampError> {
        if let Some(path) = non_blank(self.text_path.as_deref()) {
            relative_artifact_path("text_path", path)?;
        }
        if let Some(path) = non_blank(self.header_path.as_deref()) {
            relative_artifact_path("header_path", path)?;
        }
        if let Some(name) = non_blank(self.macro_name.as_deref()) {
            if !is_c_identifier(name) {
                return Err(StampError::InvalidMacroName(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Artifact paths must stay inside the output root.
pub fn relative_artifact_path(field: &'static str, value: &str) -> Result<PathBuf, StampError> {
    let normalized = value.replace('\\', "/");
    let mut out = PathBuf::new();
    for component in Path::new(&normalized).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            _ => {
                return Err(StampError::InvalidPath {
                    field,
                    value: value.to_string(),
                });
            }
        }
    }

    if out.as_os_str().is_empty() {
        return Err(StampError::InvalidPath {
            field,
            value: value.to_string(),
        });
    }

    Ok(out)
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|val| !val.trim().is_empty())
}
