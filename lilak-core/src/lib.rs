//! Lilak core library
//!
//! Turns a tagged Persian lexicon into a Hunspell-compatible dictionary
//! and affix file. The morphological suffix behavior of each word
//! (possessive, plural and comparative endings, kam-dandane letter-shape
//! exceptions, offensive-word marking) is encoded as flag codes derived
//! by a deterministic rule table from the word's part of speech, final
//! letter class and phonetic attributes.

pub mod error;
pub mod generator;
pub mod letters;
pub mod lexicon;
pub mod output;
pub mod rules;
pub mod teeth;

pub use error::{LilakError, Result};
pub use generator::{Generator, DICTIONARY_VERSION};
pub use lexicon::{Attributes, Lexicon, PartOfSpeech};
pub use rules::{classify, Flag, FlagSet, RuleDiagnostic, Ruling};
pub use teeth::Generation;
