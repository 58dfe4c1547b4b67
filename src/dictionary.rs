use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

/// Spell-check oracle: whole-string, case-insensitive membership. The game
/// core only ever asks this one question, so hosts can plug in whatever
/// backs it (the bundled set, a system word file, a stub in tests).
pub trait DictionaryOracle {
    fn is_real_word(&self, word: &str) -> bool;
}

impl<F: Fn(&str) -> bool> DictionaryOracle for F {
    fn is_real_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Dictionary backed by a set of lowercased words.
pub struct SetDictionary {
    words: HashSet<String>,
}

impl SetDictionary {
    pub fn from_text(data: &str) -> Self {
        let words = data
            .lines()
            .map(|line| line.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    pub fn embedded() -> Self {
        Self::from_text(EMBEDDED_DICTIONARY)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for SetDictionary {
    fn is_real_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_is_case_insensitive() {
        let dict = SetDictionary::from_text("silk\nWORM\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.is_real_word("silk"));
        assert!(dict.is_real_word("SILK"));
        assert!(dict.is_real_word("Worm"));
        assert!(!dict.is_real_word("silkx"));
    }

    #[test]
    fn whole_string_match_only() {
        let dict = SetDictionary::from_text("silkworm\n");
        assert!(!dict.is_real_word("silk"));
        assert!(!dict.is_real_word("silkworms"));
    }

    #[test]
    fn embedded_dictionary_has_expected_words() {
        let dict = SetDictionary::embedded();
        assert!(!dict.is_empty());
        assert!(dict.is_real_word("silk"));
        assert!(dict.is_real_word("worm"));
        assert!(dict.is_real_word("key"));
    }

    #[test]
    fn closure_oracle_works() {
        let always = |_: &str| true;
        assert!(always.is_real_word("anything"));
        let never = |_: &str| false;
        assert!(!never.is_real_word("anything"));
    }
}
