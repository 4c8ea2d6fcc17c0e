pub mod builtin;
pub mod cli;
pub mod mapping_config;

#[cfg(feature = "cli")]
use crate::domain::model::PhraseMapping;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "src/pages/Admin.tsx";
pub const OUTPUT_SUFFIX: &str = "_translated";

/// `<stem>_translated<.ext>` next to `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, OUTPUT_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, OUTPUT_SUFFIX),
    };
    input.with_file_name(file_name)
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "ui-translate")]
#[command(about = "Replace English UI strings with Portuguese ones in a source file")]
pub struct CliConfig {
    /// File to translate
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the result [default: <input>_translated.<ext>]
    pub output: Option<PathBuf>,

    /// TOML phrase table to use instead of the built-in one
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// Report what would be replaced without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the active phrase table as TOML and exit
    #[arg(long)]
    pub print_mapping: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// The phrase table from `--mapping`, or the built-in one, with its
    /// `[table]` header when it has one.
    pub fn load_table(&self) -> Result<(PhraseMapping, Option<mapping_config::TableInfo>)> {
        match &self.mapping {
            Some(path) => {
                let mut config = mapping_config::MappingConfig::from_file(path)?;
                config.validate()?;
                tracing::info!(
                    "Loaded phrase table '{}' ({} phrases) from {}",
                    config.name().unwrap_or("unnamed"),
                    config.phrases.len(),
                    path.display()
                );
                let info = config.table.take();
                Ok((config.into_mapping()?, info))
            }
            None => Ok((PhraseMapping::builtin(), Some(builtin::builtin_table_info()))),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input.to_string_lossy())?;
        validate_path("output", &self.output_path().to_string_lossy())?;
        if let Some(mapping) = &self.mapping {
            validate_path("mapping", &mapping.to_string_lossy())?;
        }
        Ok(())
    }
}
