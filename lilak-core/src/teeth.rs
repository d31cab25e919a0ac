//! Few-teeth (kam-dandane) detection
//!
//! Persian orthography tolerates plural and comparative suffixes written
//! without a ZWNJ when the base word is visually sparse. The heuristic sums
//! a weighted "tooth count" over the word and compares it to a threshold.
//! The threshold and the scored span changed between rule generations, so
//! each generation is its own strategy.

use crate::letters::{self, ZWNJ};

/// Tooth-count threshold for the current rule generation.
pub const STANDARD_THRESHOLD: u32 = 5;

/// Tooth-count threshold used by the historical rule generation.
pub const LEGACY_THRESHOLD: u32 = 10;

/// Weighted tooth count of a letter sequence.
///
/// Single-tooth letters weigh 1, triple-tooth letters weigh 3. YE and NOON
/// weigh 1 only when another letter follows them and that letter is not a
/// ZWNJ: a trailing YE/NOON, or one at a ZWNJ boundary, marks a suffix seam
/// rather than a tooth in the joined body.
pub fn tooth_count(segment: &str) -> u32 {
    let mut count = 0;
    let mut chars = segment.chars().peekable();

    while let Some(c) = chars.next() {
        if letters::is_tooth(c) {
            count += 1;
        } else if letters::is_triple_tooth(c) {
            count += 3;
        } else if c == letters::YE || c == letters::NOON {
            if let Some(&next) = chars.peek() {
                if next != ZWNJ {
                    count += 1;
                }
            }
        }
    }

    count
}

/// Rule generation in effect for a run.
///
/// The original tool selected this through an untyped mode number; each
/// historical variant is kept as a distinct strategy here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Generation {
    /// Current rules: score only the tail after the last separator letter,
    /// few teeth below 5.
    #[default]
    Standard,
    /// Historical rules: score the whole word, few teeth below 10.
    Legacy,
    /// Non-joined variant spellings disabled outright.
    Strict,
}

impl Generation {
    /// Whether `word` counts as few-teethed under this generation.
    pub fn few_teeth(self, word: &str) -> bool {
        match self {
            Generation::Standard => tooth_count(scored_tail(word)) < STANDARD_THRESHOLD,
            Generation::Legacy => tooth_count(word) < LEGACY_THRESHOLD,
            Generation::Strict => false,
        }
    }
}

/// The span scored by the standard generation: everything after the last
/// separator character. Affixed material before the seam does not add to
/// the base word's letter density.
fn scored_tail(word: &str) -> &str {
    match word.char_indices().rev().find(|(_, c)| letters::is_separator(*c)) {
        Some((idx, c)) => &word[idx + c.len_utf8()..],
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::{ALEF, BE, NOON, PE, SHIN, SIN, TE, YE};

    fn word(chars: &[char]) -> String {
        chars.iter().collect()
    }

    #[test]
    fn test_tooth_weights() {
        assert_eq!(tooth_count(&word(&[BE, PE, TE])), 3);
        assert_eq!(tooth_count(&word(&[SIN])), 3);
        assert_eq!(tooth_count(&word(&[SHIN, SIN])), 6);
    }

    #[test]
    fn test_trailing_ye_and_noon_not_counted() {
        assert_eq!(tooth_count(&word(&[YE])), 0);
        assert_eq!(tooth_count(&word(&[NOON])), 0);
        assert_eq!(tooth_count(&word(&[YE, BE])), 2);
        assert_eq!(tooth_count(&word(&[NOON, BE])), 2);
    }

    #[test]
    fn test_ye_before_zwnj_not_counted() {
        assert_eq!(tooth_count(&word(&[YE, ZWNJ, BE])), 1);
        assert_eq!(tooth_count(&word(&[NOON, ZWNJ, BE])), 1);
    }

    #[test]
    fn test_standard_threshold_boundary() {
        // four single-tooth letters < 5
        assert!(Generation::Standard.few_teeth(&word(&[BE, PE, TE, BE])));
        // five reaches the threshold
        assert!(!Generation::Standard.few_teeth(&word(&[BE, PE, TE, BE, PE])));
    }

    #[test]
    fn test_legacy_threshold_boundary() {
        let nine = word(&[SIN, SIN, BE, PE, TE]); // 3 + 3 + 3
        assert!(Generation::Legacy.few_teeth(&nine));
        let ten = word(&[SIN, SIN, SIN, BE]); // 9 + 1
        assert!(!Generation::Legacy.few_teeth(&ten));
    }

    #[test]
    fn test_standard_scores_only_after_last_separator() {
        // dense prefix, then ALEF separator, then a sparse tail
        let w = word(&[SIN, SHIN, SIN, ALEF, BE]);
        assert!(Generation::Standard.few_teeth(&w));
        // the legacy generation scores the whole word
        assert!(!Generation::Legacy.few_teeth(&w));
    }

    #[test]
    fn test_standard_zwnj_is_a_separator() {
        let w = word(&[SIN, SHIN, SIN, SHIN, ZWNJ, BE, PE]);
        assert!(Generation::Standard.few_teeth(&w));
    }

    #[test]
    fn test_strict_never_few_teeth() {
        assert!(!Generation::Strict.few_teeth(&word(&[BE])));
        assert!(!Generation::Strict.few_teeth(""));
    }
}
