use crate::domain::model::PhraseMapping;
use crate::utils::error::{Result, TranslateError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A phrase table stored as TOML:
///
/// ```toml
/// [table]
/// name = "admin-pt-br"
/// locale = "pt-BR"
///
/// [[phrases]]
/// source = "Login"
/// target = "Entrar"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableInfo>,
    #[serde(default)]
    pub phrases: Vec<PhraseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseConfig {
    pub source: String,
    pub target: String,
}

impl MappingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|source| {
            TranslateError::InputError {
                path: path.as_ref().display().to_string(),
                source,
            }
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TranslateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn from_mapping(mapping: &PhraseMapping, table: Option<TableInfo>) -> Self {
        Self {
            table,
            phrases: mapping
                .entries()
                .iter()
                .map(|entry| PhraseConfig {
                    source: entry.source.clone(),
                    target: entry.target.clone(),
                })
                .collect(),
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| TranslateError::ConfigValidationError {
            field: "toml_serialization".to_string(),
            message: e.to_string(),
        })
    }

    /// Validated phrase table, in file order.
    pub fn into_mapping(self) -> Result<PhraseMapping> {
        PhraseMapping::new(
            self.phrases
                .into_iter()
                .map(|phrase| (phrase.source, phrase.target)),
        )
    }

    pub fn name(&self) -> Option<&str> {
        self.table.as_ref().map(|t| t.name.as_str())
    }
}

/// Checks the `[table]` header. Phrases are checked by `into_mapping`.
impl Validate for MappingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(table) = &self.table {
            crate::utils::validation::validate_non_empty_string("table.name", &table.name)?;
        }
        Ok(())
    }
}
