pub mod substitution;
pub mod translator;

pub use crate::domain::model::{Delimiter, PhraseMapping, SubstitutionReport};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
