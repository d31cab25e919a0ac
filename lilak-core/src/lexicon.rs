//! Lexicon parsing
//!
//! The lexicon is a comma-separated, line-oriented list: one word followed
//! by its part of speech, three 0/1 phonetic/offensive flags, and an
//! optional trailing data field. Malformed lines are logged and skipped,
//! never fatal.

use std::collections::BTreeMap;

/// Part-of-speech tag of a lexicon entry.
///
/// The verb family keeps its raw subtag (`verb_present`, `verb_past`, ...)
/// so that distinct verb parses of the same word stay distinct tuples.
/// Unrecognized tags are kept as `Unknown`: the word still reaches the
/// output, it just gets no suffix flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartOfSpeech {
    Verb(String),
    NounCommonSingular,
    NounCommonPlural,
    NounProperSingular,
    NounProperPlural,
    Adjective,
    AdjectiveParticiple,
    AdjectiveComparative,
    AdjectiveSuperlative,
    Adverb,
    Pronoun,
    Numeral,
    Interjection,
    Adposition,
    Conjunction,
    Classifier,
    Foreign,
    Unknown(String),
}

impl PartOfSpeech {
    /// Parse a lexicon tag. Never fails; unknown tags are preserved.
    pub fn parse(tag: &str) -> Self {
        if tag.starts_with("verb") {
            return PartOfSpeech::Verb(tag.to_string());
        }

        match tag {
            "noun_common_singular" | "noun_singular" => PartOfSpeech::NounCommonSingular,
            "noun_common_plural" | "noun_plural" => PartOfSpeech::NounCommonPlural,
            "noun_proper_singular" => PartOfSpeech::NounProperSingular,
            "noun_proper_plural" => PartOfSpeech::NounProperPlural,
            "adjective" => PartOfSpeech::Adjective,
            "adjective_participle" => PartOfSpeech::AdjectiveParticiple,
            "adjective_comparative" => PartOfSpeech::AdjectiveComparative,
            "adjective_superlative" => PartOfSpeech::AdjectiveSuperlative,
            "adverb" => PartOfSpeech::Adverb,
            "pronoun" => PartOfSpeech::Pronoun,
            "numeral" => PartOfSpeech::Numeral,
            "interjection" => PartOfSpeech::Interjection,
            "adposition" => PartOfSpeech::Adposition,
            "conjunction" => PartOfSpeech::Conjunction,
            "classifier" => PartOfSpeech::Classifier,
            "foreign" => PartOfSpeech::Foreign,
            other => PartOfSpeech::Unknown(other.to_string()),
        }
    }

    /// The tag as it appeared in the lexicon, for diagnostics.
    pub fn as_tag(&self) -> &str {
        match self {
            PartOfSpeech::Verb(tag) | PartOfSpeech::Unknown(tag) => tag,
            PartOfSpeech::NounCommonSingular => "noun_common_singular",
            PartOfSpeech::NounCommonPlural => "noun_common_plural",
            PartOfSpeech::NounProperSingular => "noun_proper_singular",
            PartOfSpeech::NounProperPlural => "noun_proper_plural",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::AdjectiveParticiple => "adjective_participle",
            PartOfSpeech::AdjectiveComparative => "adjective_comparative",
            PartOfSpeech::AdjectiveSuperlative => "adjective_superlative",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Numeral => "numeral",
            PartOfSpeech::Interjection => "interjection",
            PartOfSpeech::Adposition => "adposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Classifier => "classifier",
            PartOfSpeech::Foreign => "foreign",
        }
    }
}

/// One attribute tuple of a lexicon word.
///
/// A word may carry several tuples (homographs with different parses);
/// identical tuples for the same word are rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attributes {
    pub pos: PartOfSpeech,
    pub offensive: bool,
    pub ends_with_vowel: bool,
    pub ends_with_aah_uh: bool,
    /// Fifth field, appended verbatim to the output token.
    pub extra: Option<String>,
}

/// Word → attribute-tuple-list mapping.
#[derive(Debug, Default)]
pub struct Lexicon {
    entries: BTreeMap<String, Vec<Attributes>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse lexicon text into a fresh mapping.
    pub fn parse(content: &str) -> Self {
        let mut lexicon = Lexicon::new();
        lexicon.add_content(content);
        lexicon
    }

    /// Parse lexicon text into this mapping. Reprocessing the same lines
    /// is idempotent: exact duplicates are logged and dropped.
    pub fn add_content(&mut self, content: &str) {
        for line in content.lines() {
            if line.starts_with("##") || line.trim().is_empty() {
                continue;
            }
            self.add_line(line);
        }
    }

    fn add_line(&mut self, line: &str) {
        let mut fields = line.split(',');
        let word = fields.next().unwrap_or("").trim();
        let attrs: Vec<&str> = fields.collect();

        if word.is_empty() || word.contains(' ') {
            log::warn!("wrong entry: {line}");
            return;
        }

        if attrs.len() < 4 {
            log::warn!("wrong entry: {line}");
            return;
        }

        let word = match decode_escape(word) {
            Some(decoded) => decoded,
            None => {
                log::warn!("wrong entry: {line}");
                return;
            }
        };

        // The extra field stays raw: its leading space is what separates
        // the flag run from Hunspell morphological fields in the output.
        let attributes = Attributes {
            pos: PartOfSpeech::parse(attrs[0].trim()),
            offensive: attrs[1].trim() == "1",
            ends_with_vowel: attrs[2].trim() == "1",
            ends_with_aah_uh: attrs[3].trim() == "1",
            extra: attrs.get(4).map(|s| s.to_string()),
        };

        let tuples = self.entries.entry(word).or_default();
        if tuples.contains(&attributes) {
            log::warn!("{line} is duplicated");
        } else {
            tuples.push(attributes);
        }
    }

    /// Whether `word` is a lexicon key.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Iterate words with their attribute tuples, in code-point order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Attributes])> + '_ {
        self.entries.iter().map(|(w, a)| (w.as_str(), a.as_slice()))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode the `u<decimal>` convention for characters that are awkward to
/// type in the lexicon source. Returns `None` for an out-of-range code
/// point; tokens that merely start with `u` pass through unchanged.
fn decode_escape(word: &str) -> Option<String> {
    let digits = match word.strip_prefix('u') {
        Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) => rest,
        _ => return Some(word.to_string()),
    };

    let code: u32 = digits.parse().ok()?;
    char::from_u32(code).map(String::from)
}
