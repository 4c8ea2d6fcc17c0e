use crate::core::substitution::Substituter;
use crate::core::Storage;
use crate::domain::model::{PhraseMapping, SubstitutionReport};
use crate::utils::error::Result;
use std::path::Path;

/// Reads a document, rewrites the phrases of a table inside it and writes the
/// result to a new file.
pub struct Translator<'a, S: Storage> {
    storage: S,
    mapping: &'a PhraseMapping,
}

impl<'a, S: Storage> Translator<'a, S> {
    pub fn new(storage: S, mapping: &'a PhraseMapping) -> Self {
        Self { storage, mapping }
    }

    /// Reads and transforms `input_path` without writing anything.
    pub fn preview(&self, input_path: &Path) -> Result<(String, SubstitutionReport)> {
        tracing::debug!("Reading {}", input_path.display());
        let content = self.storage.read_to_string(input_path)?;
        tracing::debug!("Read {} bytes", content.len());

        let substituter = Substituter::new(self.mapping)?;
        let (translated, report) = substituter.apply(&content);
        tracing::debug!(
            "Applied {} phrase(s), {} replacement(s)",
            self.mapping.len(),
            report.total_replacements()
        );

        Ok((translated, report))
    }

    /// Translates `input_path` and writes the whole result to `output_path`.
    /// Nothing is written if reading fails.
    pub fn translate(&self, input_path: &Path, output_path: &Path) -> Result<SubstitutionReport> {
        let (translated, report) = self.preview(input_path)?;

        tracing::debug!(
            "Writing {} bytes to {}",
            translated.len(),
            output_path.display()
        );
        self.storage.write(output_path, &translated)?;

        println!("✓ Translated file saved to: {}", output_path.display());
        Ok(report)
    }
}
