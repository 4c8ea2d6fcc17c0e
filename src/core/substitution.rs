use crate::domain::model::{Delimiter, EntryHits, PhraseMapping, SubstitutionReport};
use crate::utils::error::Result;
use regex::{Captures, Regex};
use std::borrow::Cow;

struct CompiledRule {
    delimiter: Delimiter,
    pattern: Regex,
    replacement: String,
}

struct CompiledEntry {
    source: String,
    target: String,
    rules: Vec<CompiledRule>,
}

/// Pre-compiled substitution passes for one phrase table.
pub struct Substituter {
    entries: Vec<CompiledEntry>,
}

impl Substituter {
    pub fn new(mapping: &PhraseMapping) -> Result<Self> {
        let mut entries = Vec::with_capacity(mapping.len());

        for entry in mapping.entries() {
            let mut rules = Vec::with_capacity(Delimiter::ALL.len());
            for delimiter in Delimiter::ALL {
                let pattern = Regex::new(&regex::escape(&delimiter.frame(&entry.source)))?;
                rules.push(CompiledRule {
                    delimiter,
                    pattern,
                    replacement: delimiter.frame(&entry.target),
                });
            }
            entries.push(CompiledEntry {
                source: entry.source.clone(),
                target: entry.target.clone(),
                rules,
            });
        }

        tracing::debug!("Compiled {} substitution patterns", entries.len() * 3);
        Ok(Self { entries })
    }

    /// Runs every entry's three rules over `text`, in table order. Each rule
    /// sees the output of the previous one.
    pub fn apply(&self, text: &str) -> (String, SubstitutionReport) {
        let mut content = text.to_string();
        let mut report = SubstitutionReport {
            entries: Vec::with_capacity(self.entries.len()),
        };

        for entry in &self.entries {
            let mut hits = EntryHits {
                source: entry.source.clone(),
                target: entry.target.clone(),
                ..Default::default()
            };

            for rule in &entry.rules {
                let replacement = rule.replacement.as_str();
                let mut count = 0;
                let replaced = rule.pattern.replace_all(&content, |_: &Captures<'_>| {
                    count += 1;
                    replacement
                });
                // borrowed means nothing matched
                if let Cow::Owned(updated) = replaced {
                    content = updated;
                }
                hits.record(rule.delimiter, count);
            }

            if hits.total() > 0 {
                tracing::debug!(
                    "'{}' -> '{}': {} replacement(s)",
                    hits.source,
                    hits.target,
                    hits.total()
                );
            }
            report.entries.push(hits);
        }

        (content, report)
    }
}

/// Applies the whole phrase table to `text`. No I/O.
pub fn apply_all(text: &str, mapping: &PhraseMapping) -> Result<String> {
    let (content, _) = Substituter::new(mapping)?.apply(text);
    Ok(content)
}
