//! Dictionary and affix assembly
//!
//! Pure text-in, text-out building blocks: token rendering, user-word
//! merging, the letter-frequency alphabet, and serialization of the
//! dictionary and affix artifacts. File placement lives in the generator.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::error::{LilakError, Result};
use crate::lexicon::Lexicon;
use crate::rules::FlagSet;

/// Marker appended to the flag run of an offensive word.
pub const OFFENSIVE_MARKER: &str = "!!";

/// Separator between a word and its flag run.
pub const FLAG_SEPARATOR: char = '/';

/// Render one output token: `word[/flags][extra]`.
///
/// The offensive marker joins the flag run, so an offensive word with no
/// suffix flags still renders as `word/!!`. The extra field is appended
/// verbatim, after the flags when present.
pub fn render_token(word: &str, flags: &FlagSet, offensive: bool, extra: Option<&str>) -> String {
    let mut label = flags.encode();
    if offensive {
        label.push_str(OFFENSIVE_MARKER);
    }

    let mut token = word.to_string();
    if !label.is_empty() {
        token.push(FLAG_SEPARATOR);
        token.push_str(&label);
    }
    if let Some(extra) = extra {
        token.push_str(extra);
    }
    token
}

/// Words from a user-supplied list that the lexicon does not already
/// cover. `#` comment lines and blanks are skipped; user entries never
/// shadow generated ones.
pub fn filter_user_words(content: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut words = Vec::new();
    for line in content.lines() {
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        if !lexicon.contains(word) {
            words.push(word.to_string());
        }
    }
    words
}

/// Alphabet ordered by descending letter frequency over the word set,
/// counting each token only up to its flag separator. Hunspell uses this
/// as a compression heuristic, so ties just break by code point.
pub fn frequency_alphabet<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for word in words {
        for c in word.chars() {
            if c == FLAG_SEPARATOR {
                break;
            }
            *counts.entry(c).or_default() += 1;
        }
    }

    let mut letters: Vec<(char, usize)> = counts.into_iter().collect();
    letters.sort_by_key(|&(c, n)| (Reverse(n), c));
    letters.into_iter().map(|(c, _)| c).collect()
}

/// Serialize the dictionary: a count line, then one token per line in
/// code-point order.
pub fn render_dictionary(words: &BTreeSet<String>) -> String {
    let mut out = String::new();
    out.push_str(&words.len().to_string());
    out.push('\n');
    for word in words {
        out.push_str(word);
        out.push('\n');
    }
    out
}

/// Fill the affix template's positional slots: `{0}` version, `{1}`
/// generation date, `{2}` frequency-ordered alphabet.
pub fn render_affix(template: &str, version: &str, date: &str, alphabet: &str) -> Result<String> {
    let mut out = template.to_string();
    for (slot, value) in [(0, version), (1, date), (2, alphabet)] {
        let placeholder = format!("{{{slot}}}");
        if !out.contains(&placeholder) {
            return Err(LilakError::TemplateSlot { slot });
        }
        out = out.replace(&placeholder, value);
    }
    Ok(out)
}
