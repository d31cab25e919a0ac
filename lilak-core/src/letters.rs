//! Persian letter constants and category predicates
//!
//! The suffix rules only care about a handful of fixed letter categories:
//! which letters detach from a following letter in cursive script, which
//! carry "teeth", and which act as separators for the tooth count.

/// Zero-width non-joiner, used between a stem and certain suffixes.
pub const ZWNJ: char = '\u{200C}';

pub const HE: char = '\u{0647}';
pub const YE: char = '\u{06CC}';
pub const WAW: char = '\u{0648}';
pub const ALEF: char = '\u{0627}';
pub const DAL: char = '\u{062F}';
pub const ZAL: char = '\u{0630}';
pub const RE: char = '\u{0631}';
pub const ZE: char = '\u{0632}';
pub const ZHE: char = '\u{0698}';
pub const SIN: char = '\u{0633}';
pub const SHIN: char = '\u{0634}';
pub const SAD: char = '\u{0635}';
pub const ZAD: char = '\u{0636}';
pub const TA: char = '\u{0637}';
pub const ZA: char = '\u{0638}';
pub const BE: char = '\u{0628}';
pub const PE: char = '\u{067E}';
pub const TE: char = '\u{062A}';
pub const SE: char = '\u{062B}';
pub const NOON: char = '\u{0646}';
pub const HAMZE: char = '\u{0621}';
pub const LAM: char = '\u{0644}';
pub const KAF: char = '\u{06A9}';
pub const GAF: char = '\u{06AF}';
/// Arabic teh marbuta, seen at the end of loanwords.
pub const TE_ARABIC: char = '\u{0629}';

/// Letters that do not connect to a following letter in cursive script.
pub const DETACHED: [char; 8] = [WAW, ALEF, DAL, ZAL, RE, ZE, ZHE, HAMZE];

/// Letters drawn with a single tooth.
pub const TOOTH: [char; 6] = [BE, PE, TE, SE, SAD, ZAD];

/// Letters drawn with three teeth.
pub const TRIPLE_TOOTH: [char; 2] = [SIN, SHIN];

/// Characters that end a joined letter group for the tooth count.
pub const SEPARATORS: [char; 15] = [
    ALEF, DAL, TA, ZA, LAM, ZWNJ, WAW, ZAL, RE, ZE, ZHE, HAMZE, KAF, GAF, TE_ARABIC,
];

/// Whether `c` detaches from the letter after it.
#[inline]
pub fn is_detached(c: char) -> bool {
    DETACHED.contains(&c)
}

/// Whether `c` carries a single tooth.
#[inline]
pub fn is_tooth(c: char) -> bool {
    TOOTH.contains(&c)
}

/// Whether `c` carries three teeth.
#[inline]
pub fn is_triple_tooth(c: char) -> bool {
    TRIPLE_TOOTH.contains(&c)
}

/// Whether `c` is TA or ZA.
#[inline]
pub fn is_ta_or_za(c: char) -> bool {
    c == TA || c == ZA
}

/// Whether `c` ends a joined letter group for tooth counting.
#[inline]
pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Final-letter class a word falls into for suffix selection.
///
/// WAW and ALEF belong to the detached set but get their own variants;
/// the rules distinguish them from the rest of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalShape {
    /// Ends in HE
    He,
    /// Ends in WAW
    Waw,
    /// Ends in YE
    Ye,
    /// Ends in ALEF
    Alef,
    /// Ends in another detached letter (DAL, ZAL, RE, ZE, ZHE, HAMZE)
    Detached,
    /// Ends in TA or ZA
    TaZa,
    /// Any other (joining) final letter
    Joined,
}

impl FinalShape {
    /// Classify a word by its last character.
    ///
    /// Empty words never reach the rules (the loader rejects them); an
    /// empty input falls through to `Joined`.
    pub fn of(word: &str) -> Self {
        match word.chars().next_back() {
            Some(HE) => FinalShape::He,
            Some(WAW) => FinalShape::Waw,
            Some(YE) => FinalShape::Ye,
            Some(ALEF) => FinalShape::Alef,
            Some(c) if is_detached(c) => FinalShape::Detached,
            Some(c) if is_ta_or_za(c) => FinalShape::TaZa,
            _ => FinalShape::Joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_covers_waw_and_alef() {
        assert!(is_detached(WAW));
        assert!(is_detached(ALEF));
        assert!(is_detached(RE));
        assert!(!is_detached(HE));
        assert!(!is_detached(YE));
    }

    #[test]
    fn test_tooth_categories_disjoint() {
        for c in TOOTH {
            assert!(!is_triple_tooth(c));
        }
        assert!(is_triple_tooth(SIN));
        assert!(is_triple_tooth(SHIN));
        assert!(!is_tooth(SIN));
    }

    #[test]
    fn test_final_shape_precedence() {
        // WAW and ALEF are detached letters but classify as themselves
        assert_eq!(FinalShape::of("گفتگو"), FinalShape::Waw);
        assert_eq!(FinalShape::of("پا"), FinalShape::Alef);
        assert_eq!(FinalShape::of("برادر"), FinalShape::Detached);
        assert_eq!(FinalShape::of("نگاه"), FinalShape::He);
        assert_eq!(FinalShape::of("کشتی"), FinalShape::Ye);
        assert_eq!(FinalShape::of("خط"), FinalShape::TaZa);
        assert_eq!(FinalShape::of("کتاب"), FinalShape::Joined);
    }

    #[test]
    fn test_final_shape_empty_word() {
        assert_eq!(FinalShape::of(""), FinalShape::Joined);
    }

    #[test]
    fn test_separator_set() {
        assert!(is_separator(ZWNJ));
        assert!(is_separator(KAF));
        assert!(is_separator(GAF));
        assert!(is_separator(TE_ARABIC));
        assert!(!is_separator(BE));
        assert!(!is_separator(HE));
    }
}
