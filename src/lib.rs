pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::config::mapping_config::MappingConfig;
pub use crate::core::{
    substitution::{apply_all, Substituter},
    translator::Translator,
};
pub use crate::domain::model::{Delimiter, PhraseMapping, SubstitutionReport};
pub use crate::utils::error::{Result, TranslateError};
