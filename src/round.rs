use crate::wordlist::FALLBACK_WORD;
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

/// State of one round: the root word whose letters are in play, the answers
/// accepted so far (most recent first), and the round score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl RoundState {
    /// Starts a round with a root word drawn uniformly at random from the
    /// list. Score resets to 0 each round. The caller keeps the list
    /// non-empty via the word-list fallback; an empty list still gets the
    /// fallback word rather than a panic.
    pub fn start<R: Rng + ?Sized>(word_list: &[String], rng: &mut R) -> Self {
        let root_word = word_list
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_WORD.to_string());
        debug!("round started with root word '{root_word}'");
        Self::with_root(root_word)
    }

    /// Starts a round with a known root word. Used by tests and by hosts
    /// that manage their own word selection.
    pub fn with_root(root_word: impl Into<String>) -> Self {
        Self {
            root_word: root_word.into().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted answers, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Records an accepted answer. Call only after `validate` returned
    /// `Accepted`; this does no checking of its own.
    pub fn accept(&mut self, candidate: &str) {
        self.used_words.insert(0, candidate.to_lowercase());
        self.score += 1;
    }
}
