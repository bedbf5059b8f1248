pub mod config;
pub mod dictionary;
pub mod error;
pub mod morphology;
pub mod pipeline;
pub mod rules;

pub use dictionary::Dictionary;
pub use error::KslError;
pub use pipeline::{ConfidenceLevel, ConfidenceSummary, ConversionResult, KslConverter};
pub use rules::{RuleConfig, SentenceType};
