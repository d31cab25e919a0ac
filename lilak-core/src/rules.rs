//! Suffix rule engine
//!
//! Maps one lexicon attribute tuple to the set of suffix-flag codes that
//! are grammatically valid for the word's shape. Hunspell's affix model
//! needs every morphological class with distinct suffix combinations
//! enumerated explicitly, so this is a plain decision table: part of
//! speech, then final-letter class, then the phonetic flags, then (in a
//! few leaves) the few-teeth flag. Word shapes the table does not cover
//! produce an empty set plus a diagnostic instead of failing the run.

use std::fmt;

use crate::lexicon::{Attributes, PartOfSpeech};
use crate::letters::FinalShape;

/// One suffix-family flag consumed by the Hunspell affix file.
///
/// `Pa` covers the privative prefix; the `S*` flags cover possessive,
/// copula, plural, definite-article and comparative suffix families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Pa,
    Sa,
    Sb,
    Sc,
    Sd,
    Se,
    Sf,
    Sg,
    Sh,
    Si,
    Sj,
    Sk,
    Sl,
    Sm,
    Sn,
    So,
    Sp,
    Sq,
    Sr,
    St,
    Su,
}

impl Flag {
    /// Two-character code written to the dictionary.
    pub fn code(self) -> &'static str {
        match self {
            Flag::Pa => "pa",
            Flag::Sa => "sa",
            Flag::Sb => "sb",
            Flag::Sc => "sc",
            Flag::Sd => "sd",
            Flag::Se => "se",
            Flag::Sf => "sf",
            Flag::Sg => "sg",
            Flag::Sh => "sh",
            Flag::Si => "si",
            Flag::Sj => "sj",
            Flag::Sk => "sk",
            Flag::Sl => "sl",
            Flag::Sm => "sm",
            Flag::Sn => "sn",
            Flag::So => "so",
            Flag::Sp => "sp",
            Flag::Sq => "sq",
            Flag::Sr => "sr",
            Flag::St => "st",
            Flag::Su => "su",
        }
    }
}

/// Ordered, duplicate-free sequence of flags.
///
/// Order only matters for output determinism; duplicates are avoided by
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSet(Vec<Flag>);

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a flag unless already present.
    pub fn push(&mut self, flag: Flag) {
        if !self.0.contains(&flag) {
            self.0.push(flag);
        }
    }

    pub fn extend(&mut self, flags: impl IntoIterator<Item = Flag>) {
        for flag in flags {
            self.push(flag);
        }
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0.contains(&flag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Flag] {
        &self.0
    }

    /// Concatenated flag codes, e.g. `sasosgshsislsj`.
    pub fn encode(&self) -> String {
        self.0.iter().map(|f| f.code()).collect()
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut set = FlagSet::new();
        set.extend(iter);
        set
    }
}

/// Observable event from a table leaf that carries no flags by design.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleDiagnostic {
    /// Word shape not anticipated for its part of speech.
    Unpredicted { word: String, tag: String },
    /// Participles are expected to end in HE.
    NonHeParticiple { word: String },
    /// Part-of-speech tag outside the known set.
    UnknownTag { word: String, tag: String },
}

impl fmt::Display for RuleDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleDiagnostic::Unpredicted { word, tag } => {
                write!(f, "unpredicted case for {word}:{tag}")
            }
            RuleDiagnostic::NonHeParticiple { word } => {
                write!(f, "adjective_participle should end with HE only: {word}")
            }
            RuleDiagnostic::UnknownTag { word, tag } => write!(f, "{word} {tag}: unknown tag"),
        }
    }
}

/// Result of one table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruling {
    pub flags: FlagSet,
    pub diagnostic: Option<RuleDiagnostic>,
}

impl Ruling {
    fn flags(flags: FlagSet) -> Self {
        Ruling {
            flags,
            diagnostic: None,
        }
    }

    fn empty() -> Self {
        Ruling::flags(FlagSet::new())
    }

    fn unpredicted(word: &str, pos: &PartOfSpeech) -> Self {
        Ruling {
            flags: FlagSet::new(),
            diagnostic: Some(RuleDiagnostic::Unpredicted {
                word: word.to_string(),
                tag: pos.as_tag().to_string(),
            }),
        }
    }
}

/// Derive the suffix flags for one attribute tuple.
///
/// Pure: the result depends only on the word's final-letter class, the
/// tuple's part of speech and phonetic flags, and `few_teeth`.
pub fn classify(word: &str, attrs: &Attributes, few_teeth: bool) -> Ruling {
    let shape = FinalShape::of(word);
    let vowel = attrs.ends_with_vowel;
    let aah_uh = attrs.ends_with_aah_uh;

    match &attrs.pos {
        PartOfSpeech::Verb(_) => Ruling::empty(),
        PartOfSpeech::NounCommonSingular => noun_common_singular(shape, vowel, aah_uh, few_teeth),
        PartOfSpeech::NounCommonPlural => noun_common_plural(word, shape, vowel, aah_uh),
        PartOfSpeech::NounProperSingular => {
            noun_proper_singular(shape, vowel, aah_uh, few_teeth)
        }
        PartOfSpeech::NounProperPlural => noun_proper_plural(word, shape, vowel, aah_uh),
        PartOfSpeech::Adjective => adjective(shape, vowel, aah_uh, few_teeth),
        PartOfSpeech::AdjectiveParticiple => adjective_participle(word, shape),
        PartOfSpeech::AdjectiveComparative => adjective_comparative(word, shape),
        PartOfSpeech::AdjectiveSuperlative => adjective_superlative(word, shape),
        PartOfSpeech::Pronoun => pronoun(word, shape, vowel, aah_uh),
        PartOfSpeech::Numeral => numeral(shape),
        PartOfSpeech::Foreign => foreign(shape),
        // Closed classes take no suffix families at all.
        PartOfSpeech::Adverb
        | PartOfSpeech::Interjection
        | PartOfSpeech::Adposition
        | PartOfSpeech::Conjunction
        | PartOfSpeech::Classifier => Ruling::empty(),
        PartOfSpeech::Unknown(tag) => Ruling {
            flags: FlagSet::new(),
            diagnostic: Some(RuleDiagnostic::UnknownTag {
                word: word.to_string(),
                tag: tag.clone(),
            }),
        },
    }
}

fn noun_common_singular(shape: FinalShape, vowel: bool, aah_uh: bool, few_teeth: bool) -> Ruling {
    use Flag::*;

    // بی‌انگیزه، بی‌حوصله
    let mut flags = FlagSet::new();
    flags.push(Pa);

    match shape {
        FinalShape::He => {
            if aah_uh {
                // نگاه، کوه
                flags.extend([Sa, Sr, Sg, Sh, Si, Sl]);
                if few_teeth {
                    // نگاهها، کوهها
                    flags.extend([Sd, Se, Sf]);
                }
            } else if vowel {
                // خانه
                flags.extend([Sc, Sp, Sg, Sh, Si, Sm, Sk]);
            } else {
                // روبه
                flags.extend([Sc, Sp, Sg, Sh, Si, Sl]);
            }
        }
        FinalShape::Waw => {
            if vowel {
                // عمو
                flags.extend([Sb, Sq, Sd, Se, Sf, Sl, Sn]);
            } else {
                // رهرو
                flags.extend([Sa, Sr, Sd, Se, Sf, Sl, Sj]);
            }
        }
        FinalShape::Ye => {
            // کشتی
            flags.extend([Sc, Sp, Sg, Sh, Si, Sm, Sj]);
            if few_teeth {
                // بازیها
                flags.extend([Sd, Se, Sf]);
            }
        }
        FinalShape::Alef => {
            // پا
            flags.extend([Sb, Sq, Sd, Se, Sf, Sl, Sn]);
        }
        FinalShape::Detached => {
            // برادر
            flags.extend([Sa, So, Sd, Se, Sf, Sl, Sj]);
        }
        FinalShape::TaZa => {
            // خط
            flags.extend([Sa, So, Sg, Sh, Si, Sl, Sj]);
        }
        FinalShape::Joined => {
            // کتاب
            flags.extend([Sa, So, Sg, Sh, Si, Sl, Sj]);
            if few_teeth {
                // کتابها
                flags.extend([Sd, Se, Sf]);
            }
        }
    }

    Ruling::flags(flags)
}

fn noun_common_plural(word: &str, shape: FinalShape, vowel: bool, aah_uh: bool) -> Ruling {
    use Flag::*;

    let mut flags = FlagSet::new();
    match shape {
        FinalShape::He => {
            if aah_uh {
                // وجوه
            } else if vowel {
                // فلاسفه
                flags.extend([Sc, Sp, Sk, Sm]);
            } else {
                // اشربه
            }
        }
        FinalShape::Ye => {
            // فتاوی
            flags.extend([Sc, Sp, Sm]);
        }
        FinalShape::Waw => {
            return Ruling::unpredicted(word, &PartOfSpeech::NounCommonPlural);
        }
        FinalShape::Alef => {
            // هدایا
            flags.extend([Sb, Sq, Sl, Sn]);
        }
        FinalShape::TaZa => {
            // اقساط
            flags.extend([Sa, So, Sl]);
        }
        FinalShape::Detached => {
            // آثار
            flags.extend([Sa, So, Sl]);
        }
        FinalShape::Joined => {
            // احزاب
            flags.extend([Sa, So, Sl]);
        }
    }

    Ruling::flags(flags)
}

fn noun_proper_singular(shape: FinalShape, vowel: bool, aah_uh: bool, few_teeth: bool) -> Ruling {
    use Flag::*;

    let mut flags = FlagSet::new();
    match shape {
        FinalShape::He => {
            if aah_uh {
                // کرمانشاه
                flags.extend([Sa, Sr, Sg, Sh, Si, Sl]);
            } else if vowel {
                // آباده
                flags.extend([Sc, Sp, Sg, Sh, Si, Sm, Sk]);
            } else {
                // عبده
                flags.extend([Sc, Sp, Sg, Sh, Si, Sm]);
            }
        }
        FinalShape::Waw => {
            if vowel {
                // باکو
                flags.extend([Sb, Sq, Sd, Se, Sf, Sl, Sn]);
            } else {
                // آپولو
                flags.extend([Sa, Sr, Sd, Se, Sf, Sl, Sn]);
            }
        }
        FinalShape::Ye => {
            // آبادانی
            flags.extend([Sc, Sp, Sg, Sh, Si, Sm]);
        }
        FinalShape::Alef => {
            // آپادانا
            flags.extend([Sb, Sq, Sd, Se, Sf, Sl, Sn]);
        }
        FinalShape::Detached => {
            // البرز
            flags.extend([Sa, So, Sd, Se, Sf, Sl]);
        }
        FinalShape::TaZa => {
            // بقراط
            flags.extend([Sa, So, Sg, Sh, Si, Sl]);
        }
        FinalShape::Joined => {
            // بناب
            flags.extend([Sa, So, Sg, Sh, Si, Sl]);
            if few_teeth {
                flags.extend([Sd, Se, Sf]);
            }
        }
    }

    Ruling::flags(flags)
}

fn noun_proper_plural(word: &str, shape: FinalShape, vowel: bool, aah_uh: bool) -> Ruling {
    use Flag::*;

    let pos = PartOfSpeech::NounProperPlural;
    match shape {
        FinalShape::He => {
            if aah_uh {
                Ruling::unpredicted(word, &pos)
            } else if vowel {
                // ارامنه
                Ruling::flags([Sc, Sp, Sk, Sm].into_iter().collect())
            } else {
                Ruling::unpredicted(word, &pos)
            }
        }
        FinalShape::Ye
        | FinalShape::Waw
        | FinalShape::Alef
        | FinalShape::Detached
        | FinalShape::TaZa => Ruling::unpredicted(word, &pos),
        FinalShape::Joined => {
            // امارات
            Ruling::flags([Sa, So, Sl].into_iter().collect())
        }
    }
}

fn adjective(shape: FinalShape, vowel: bool, aah_uh: bool, few_teeth: bool) -> Ruling {
    use Flag::*;

    let mut flags = FlagSet::new();
    match shape {
        FinalShape::He => {
            if aah_uh {
                // کوتاه، باشکوه
                flags.extend([Sa, Sr, Sl, Sg, Si, Su]);
            } else if vowel {
                // شایسته
                flags.extend([Sc, Sp, Sk, Sg, Si, Su]);
            } else {
                // کوته
                flags.extend([Sc, Sp, Sl, Sg, Si, Su]);
            }
        }
        FinalShape::Waw => {
            if vowel {
                // پررو
                flags.extend([Sb, Sq, Sl, Sn, Sd, Sf, St]);
            } else {
                // کنجکاو
                flags.extend([Sa, Sr, Sl, Sd, Sf, St, Sj]);
            }
        }
        FinalShape::Ye => {
            // عالی
            flags.extend([Sc, Sp, Sm, Sg, Si, Su]);
        }
        FinalShape::Alef => {
            // اعلا
            flags.extend([Sb, Sq, Sl, Sn, Sd, Sf, St]);
        }
        FinalShape::Detached => {
            // آباد
            flags.extend([Sa, So, Sl, Sd, Sf, St, Sj]);
        }
        FinalShape::TaZa => {
            // بانشاط takes both joined and ZWNJ comparatives
            flags.extend([Sa, So, Sl, Sg, Si, St, Su, Sj]);
        }
        FinalShape::Joined => {
            // مرتب
            flags.extend([Sa, So, Sl, Sg, Si, Su, Sj]);
            if few_teeth {
                flags.extend([Sd, Sf, St]);
            }
        }
    }

    Ruling::flags(flags)
}

fn adjective_participle(word: &str, shape: FinalShape) -> Ruling {
    use Flag::*;

    if shape == FinalShape::He {
        // شایسته
        Ruling::flags([Sc, Sk, Sg, Si].into_iter().collect())
    } else {
        Ruling {
            flags: FlagSet::new(),
            diagnostic: Some(RuleDiagnostic::NonHeParticiple {
                word: word.to_string(),
            }),
        }
    }
}

fn adjective_comparative(word: &str, shape: FinalShape) -> Ruling {
    use Flag::*;

    let pos = PartOfSpeech::AdjectiveComparative;
    match shape {
        FinalShape::He | FinalShape::Waw | FinalShape::Ye | FinalShape::TaZa => {
            Ruling::unpredicted(word, &pos)
        }
        // ALEF sits in the detached group here; comparatives make no finer
        // distinction.
        FinalShape::Alef | FinalShape::Detached => {
            // ارشد
            Ruling::flags([Sa, So, Sl, Sd, Sf].into_iter().collect())
        }
        FinalShape::Joined => {
            // افزون
            Ruling::flags([Sa, So, Sl, Sg].into_iter().collect())
        }
    }
}

fn adjective_superlative(word: &str, shape: FinalShape) -> Ruling {
    use Flag::*;

    let pos = PartOfSpeech::AdjectiveSuperlative;
    match shape {
        FinalShape::He | FinalShape::Waw | FinalShape::Ye | FinalShape::TaZa => {
            Ruling::unpredicted(word, &pos)
        }
        FinalShape::Alef | FinalShape::Detached => {
            // اولی‌تر
            Ruling::flags([Sa, So, Sl, Sd, Sf].into_iter().collect())
        }
        FinalShape::Joined => {
            // بهترین
            Ruling::flags([Sa, So, Sl, Sg, Si].into_iter().collect())
        }
    }
}

fn pronoun(word: &str, shape: FinalShape, vowel: bool, aah_uh: bool) -> Ruling {
    use Flag::*;

    let mut flags = FlagSet::new();
    match shape {
        FinalShape::He => {
            if aah_uh {
                return Ruling::unpredicted(word, &PartOfSpeech::Pronoun);
            } else if vowel {
                // آنچه
                flags.push(Sp);
            }
        }
        FinalShape::Waw => {
            if vowel {
                // همو
                flags.push(Sq);
            }
            // تو takes nothing
        }
        FinalShape::Ye => {
            // چی
            flags.push(Sp);
        }
        FinalShape::Alef => {
            // آنها
            flags.push(Sq);
        }
        FinalShape::Detached => {
            // دگر
            flags.push(So);
        }
        FinalShape::TaZa | FinalShape::Joined => {
            // آن
            flags.push(So);
        }
    }

    Ruling::flags(flags)
}

fn numeral(shape: FinalShape) -> Ruling {
    use Flag::*;

    // Only the joining behavior of the last letter matters here, so WAW
    // and ALEF fold back into the detached group.
    let mut flags = FlagSet::new();
    match shape {
        FinalShape::Waw | FinalShape::Alef | FinalShape::Detached => flags.push(Sd),
        _ => flags.push(Sg),
    }

    Ruling::flags(flags)
}

fn foreign(shape: FinalShape) -> Ruling {
    use Flag::*;

    let mut flags = FlagSet::new();
    if shape != FinalShape::He {
        // طرفة‌العینی
        flags.push(Sl);
    }

    Ruling::flags(flags)
}
