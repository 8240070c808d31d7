//! Natural-language command parsing for Ashvale.
//!
//! This crate turns free text into a canonical [`ashvale_engine::Command`]
//! with a confidence score.
//!
//! # Pipeline
//!
//! ```text
//! Input Text
//!     ↓
//! [ParseCache] → hit? reuse the raw parse
//!     ↓
//! [CommandParser] → optional primary, falling back to RuleParser
//!     ↓
//! [InputTokenizer] → lowercase words
//!     ↓
//! [Vocabulary] → verb phrase, direction, object, target
//!     ↓
//! [Validator] → unknown verb or absent object becomes `help`
//!     ↓
//! ParsedCommand
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod parser;
pub mod service;
pub mod tokenizer;
pub mod validation;
pub mod vocabulary;

pub use cache::{CacheKey, DEFAULT_TTL_MS, ParseCache};
pub use parser::{CommandParser, ParseInput, ParsedCommand, ParserKind, RuleParser};
pub use service::ParseService;
pub use tokenizer::InputTokenizer;
pub use validation::Validator;
pub use vocabulary::{Phrase, VerbMatch, Vocabulary};
