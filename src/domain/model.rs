use crate::utils::error::{Result, TranslateError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use std::collections::HashSet;

/// One source phrase and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    pub source: String,
    pub target: String,
}

/// Ordered source → target table. Sources are unique and non-empty; the
/// order of entries is the order substitutions are applied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseMapping {
    entries: Vec<PhraseEntry>,
}

impl PhraseMapping {
    pub fn new<I, S, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mapping = Self {
            entries: entries
                .into_iter()
                .map(|(source, target)| PhraseEntry {
                    source: source.into(),
                    target: target.into(),
                })
                .collect(),
        };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Builds a table from a compile-time constant without validating it.
    pub(crate) fn from_static(entries: &[(&str, &str)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(source, target)| PhraseEntry {
                    source: (*source).to_string(),
                    target: (*target).to_string(),
                })
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs `(earlier, later)` where the earlier entry's target equals the
    /// later entry's source. Text produced by `earlier` is matched again by
    /// `later` during a run.
    pub fn chained_entries(&self) -> Vec<(&PhraseEntry, &PhraseEntry)> {
        let mut chains = Vec::new();
        for (i, earlier) in self.entries.iter().enumerate() {
            for later in &self.entries[i + 1..] {
                if later.source == earlier.target {
                    chains.push((earlier, later));
                }
            }
        }
        chains
    }
}

impl Validate for PhraseMapping {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            validate_non_empty_string("phrases.source", &entry.source)?;
            if !seen.insert(entry.source.as_str()) {
                return Err(TranslateError::InvalidConfigValueError {
                    field: "phrases.source".to_string(),
                    value: entry.source.clone(),
                    reason: "Duplicate source phrase".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// The framings a phrase must sit in to be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    SingleQuote,
    DoubleQuote,
    Tag,
}

impl Delimiter {
    /// Application order within one mapping entry.
    pub const ALL: [Delimiter; 3] = [
        Delimiter::SingleQuote,
        Delimiter::DoubleQuote,
        Delimiter::Tag,
    ];

    pub fn open(self) -> char {
        match self {
            Delimiter::SingleQuote => '\'',
            Delimiter::DoubleQuote => '"',
            Delimiter::Tag => '>',
        }
    }

    pub fn close(self) -> char {
        match self {
            Delimiter::SingleQuote => '\'',
            Delimiter::DoubleQuote => '"',
            Delimiter::Tag => '<',
        }
    }

    pub fn frame(self, phrase: &str) -> String {
        let mut framed = String::with_capacity(phrase.len() + 2);
        framed.push(self.open());
        framed.push_str(phrase);
        framed.push(self.close());
        framed
    }
}

/// Replacement counts for one mapping entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryHits {
    pub source: String,
    pub target: String,
    pub single_quoted: usize,
    pub double_quoted: usize,
    pub tag_bounded: usize,
}

impl EntryHits {
    pub fn record(&mut self, delimiter: Delimiter, count: usize) {
        match delimiter {
            Delimiter::SingleQuote => self.single_quoted += count,
            Delimiter::DoubleQuote => self.double_quoted += count,
            Delimiter::Tag => self.tag_bounded += count,
        }
    }

    pub fn total(&self) -> usize {
        self.single_quoted + self.double_quoted + self.tag_bounded
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    pub entries: Vec<EntryHits>,
}

impl SubstitutionReport {
    pub fn total_replacements(&self) -> usize {
        self.entries.iter().map(EntryHits::total).sum()
    }

    pub fn matched_entries(&self) -> impl Iterator<Item = &EntryHits> {
        self.entries.iter().filter(|hits| hits.total() > 0)
    }
}
