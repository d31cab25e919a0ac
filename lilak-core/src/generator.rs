//! Pipeline orchestration
//!
//! One `Generator` instance per run: load the lexicon, derive flags for
//! every attribute tuple, merge user words, and write the dictionary and
//! affix artifacts. Missing input files degrade to no-ops so a partial
//! run still produces output; destination files are removed and written
//! fresh (regeneration is the retry mechanism, writes are not atomic).

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LilakError, Result};
use crate::lexicon::Lexicon;
use crate::output;
use crate::rules;
use crate::teeth::Generation;

/// Version string substituted into the affix template.
pub const DICTIONARY_VERSION: &str = "3.0";

/// Batch dictionary generator. Owns the lexicon and the output token set;
/// single-threaded, in-memory, rerunnable.
#[derive(Debug, Default)]
pub struct Generator {
    generation: Generation,
    lexicon: Lexicon,
    words: BTreeSet<String>,
}

impl Generator {
    pub fn new(generation: Generation) -> Self {
        Generator {
            generation,
            lexicon: Lexicon::new(),
            words: BTreeSet::new(),
        }
    }

    /// Read and parse the lexicon file. A missing file is logged and
    /// contributes nothing.
    pub fn load_lexicon(&mut self, path: &Path) -> Result<()> {
        log::info!("read lexicon {}", path.display());
        if let Some(content) = read_optional(path)? {
            self.lexicon.add_content(&content);
        }
        Ok(())
    }

    /// Derive flags for every attribute tuple and collect output tokens.
    pub fn generate(&mut self) {
        for (word, tuples) in self.lexicon.iter() {
            for attrs in tuples {
                let few_teeth = self.generation.few_teeth(word);
                let ruling = rules::classify(word, attrs, few_teeth);
                if let Some(diagnostic) = &ruling.diagnostic {
                    log::warn!("{diagnostic}");
                }
                let token =
                    output::render_token(word, &ruling.flags, attrs.offensive, attrs.extra.as_deref());
                self.words.insert(token);
            }
        }
    }

    /// Merge a user word list into the output set. Words already in the
    /// lexicon are skipped; the rest are added as bare tokens.
    pub fn merge_user_words(&mut self, path: &Path) -> Result<()> {
        log::info!("read user dictionary {}", path.display());
        if let Some(content) = read_optional(path)? {
            self.words
                .extend(output::filter_user_words(&content, &self.lexicon));
        }
        Ok(())
    }

    /// Write the dictionary file: count line, then sorted tokens.
    pub fn write_dictionary(&self, path: &Path) -> Result<()> {
        log::info!("write dictionary {}", path.display());
        overwrite(path, &output::render_dictionary(&self.words))
    }

    /// Fill the affix template and write the affix file. A missing
    /// template is logged and skips the step.
    pub fn write_affix(
        &self,
        template_path: &Path,
        path: &Path,
        version: &str,
        date: &str,
    ) -> Result<()> {
        log::info!("write affixes {}", path.display());
        let template = match read_optional(template_path)? {
            Some(template) => template,
            None => return Ok(()),
        };

        let alphabet = output::frequency_alphabet(self.words.iter().map(String::as_str));
        let affix = output::render_affix(&template, version, date, &alphabet)?;
        overwrite(path, &affix)
    }

    /// Write the delta word list: user-maintained words kept outside the
    /// main dictionary, filtered against the lexicon and sorted.
    pub fn write_delta(&self, input_path: &Path, path: &Path) -> Result<()> {
        log::info!("write delta list {}", path.display());
        let content = match read_optional(input_path)? {
            Some(content) => content,
            None => return Ok(()),
        };

        let delta: BTreeSet<String> = output::filter_user_words(&content, &self.lexicon)
            .into_iter()
            .collect();

        let mut out = String::new();
        for word in &delta {
            out.push_str(word);
            out.push('\n');
        }
        overwrite(path, &out)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The output token set accumulated so far.
    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }
}

/// Read a file, treating absence as "nothing to contribute".
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!("file does not exist: {}", path.display());
            Ok(None)
        }
        Err(err) => Err(LilakError::io(path, err)),
    }
}

/// Remove any existing destination, then write fresh.
fn overwrite(path: &Path, content: &str) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(LilakError::io(path, err)),
    }
    fs::write(path, content).map_err(|err| LilakError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_generate_collects_tokens() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(
            &dir,
            "lexicon",
            "## test lexicon\nکتاب,noun_common_singular,0,0,0\nرفت,verb_past,0,0,0\n",
        );

        let mut generator = Generator::new(Generation::Strict);
        generator.load_lexicon(&lexicon).unwrap();
        generator.generate();

        let words: Vec<&String> = generator.words().iter().collect();
        assert_eq!(words.len(), 2);
        assert!(generator.words().contains("کتاب/pasasosgshsislsj"));
        assert!(generator.words().contains("رفت"));
    }

    #[test]
    fn test_duplicate_tuples_collapse_in_output() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(
            &dir,
            "lexicon",
            "کتاب,noun_common_singular,0,0,0\nکتاب,noun_common_singular,0,0,0\n",
        );

        let mut generator = Generator::new(Generation::Strict);
        generator.load_lexicon(&lexicon).unwrap();
        generator.generate();
        assert_eq!(generator.words().len(), 1);
    }

    #[test]
    fn test_missing_lexicon_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut generator = Generator::new(Generation::Standard);
        generator
            .load_lexicon(&dir.path().join("absent"))
            .unwrap();
        generator.generate();
        assert!(generator.words().is_empty());
    }

    #[test]
    fn test_dictionary_count_matches_lines() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(
            &dir,
            "lexicon",
            "کتاب,noun_common_singular,0,0,0\nرفت,verb_past,0,0,0\n",
        );
        let out = dir.path().join("fa_IR.dic");

        let mut generator = Generator::new(Generation::Standard);
        generator.load_lexicon(&lexicon).unwrap();
        generator.generate();
        generator.write_dictionary(&out).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        let mut lines = content.lines();
        let count: usize = lines.next().unwrap().parse().unwrap();
        assert_eq!(count, lines.count());
    }

    #[test]
    fn test_user_words_do_not_shadow_lexicon() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(&dir, "lexicon", "کتاب,noun_common_singular,0,0,0\n");
        let users = write(&dir, "dic_users", "# users\nکتاب\nرایانه\n");

        let mut generator = Generator::new(Generation::Standard);
        generator.load_lexicon(&lexicon).unwrap();
        generator.generate();
        generator.merge_user_words(&users).unwrap();

        assert!(generator.words().contains("رایانه"));
        // the generated token, not the bare user word
        assert!(!generator.words().contains("کتاب"));
    }

    #[test]
    fn test_affix_written_from_template() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(&dir, "lexicon", "کتاب,noun_common_singular,0,0,0\n");
        let template = write(&dir, "affixes", "# lilak {0} {1}\nTRY {2}\n");
        let out = dir.path().join("fa_IR.aff");

        let mut generator = Generator::new(Generation::Standard);
        generator.load_lexicon(&lexicon).unwrap();
        generator.generate();
        generator
            .write_affix(&template, &out, "3.0", "2026-08-27")
            .unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.starts_with("# lilak 3.0 2026-08-27"));
        // alphabet counts only the chars before the flag separator
        assert!(!content.contains('s'));
    }

    #[test]
    fn test_missing_template_skips_affix_step() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("fa_IR.aff");

        let generator = Generator::new(Generation::Standard);
        generator
            .write_affix(&dir.path().join("absent"), &out, "3.0", "2026-08-27")
            .unwrap();
        assert!(!out.exists());
    }

    #[test]
    fn test_delta_list_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(&dir, "lexicon", "کتاب,noun_common_singular,0,0,0\n");
        let delta = write(&dir, "dic_delta", "ب\nآ\nکتاب\n");
        let out = dir.path().join("fa_IR.dic_delta");

        let mut generator = Generator::new(Generation::Standard);
        generator.load_lexicon(&lexicon).unwrap();
        generator.write_delta(&delta, &out).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "آ\nب\n");
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let lexicon = write(
            &dir,
            "lexicon",
            "کتاب,noun_common_singular,0,0,0\nشیر,noun_common_singular,0,0,0\nشیر,adjective,0,0,0\n",
        );
        let out_a = dir.path().join("a.dic");
        let out_b = dir.path().join("b.dic");

        for out in [&out_a, &out_b] {
            let mut generator = Generator::new(Generation::Standard);
            generator.load_lexicon(&lexicon).unwrap();
            generator.generate();
            generator.write_dictionary(out).unwrap();
        }

        assert_eq!(
            fs::read(&out_a).unwrap(),
            fs::read(&out_b).unwrap()
        );
    }

    #[test]
    fn test_overwrite_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("fa_IR.dic");
        fs::write(&out, "stale").unwrap();

        let generator = Generator::new(Generation::Standard);
        generator.write_dictionary(&out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "0\n");
    }
}
