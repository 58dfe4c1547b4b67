use crate::dictionary::DictionaryOracle;
use crate::round::RoundState;

/// Why a submission was turned down. Each reason carries the title and
/// message the host shows in its acknowledgment dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    NotPossible,
    NotOriginal,
    NotReal,
}

impl Rejection {
    pub fn title(self) -> &'static str {
        match self {
            Self::Empty => "No word entered",
            Self::NotPossible => "Word not possible",
            Self::NotOriginal => "Word already used",
            Self::NotReal => "Word not recognized",
        }
    }

    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::Empty => "Type a word before submitting!".to_string(),
            Self::NotPossible => {
                format!("You can't spell that word from '{root_word}'")
            }
            Self::NotOriginal => "Be more original!".to_string(),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

/// Checks a submission against the current round. Pure: rejection leaves no
/// trace, and acceptance is recorded by the caller via `RoundState::accept`.
///
/// Rules run in strict order and the first failure wins: empty check,
/// letter-pool check, originality check, dictionary check. The candidate is
/// lowercased but never trimmed; stray whitespace fails the letter-pool
/// check like any other unavailable character.
pub fn validate(
    candidate: &str,
    state: &RoundState,
    dictionary: &dyn DictionaryOracle,
) -> Verdict {
    let answer = candidate.to_lowercase();

    if answer.is_empty() {
        return Verdict::Rejected(Rejection::Empty);
    }
    if !is_possible(&answer, state.root_word()) {
        return Verdict::Rejected(Rejection::NotPossible);
    }
    if !is_original(&answer, state) {
        return Verdict::Rejected(Rejection::NotOriginal);
    }
    if !is_real(&answer, dictionary) {
        return Verdict::Rejected(Rejection::NotReal);
    }
    Verdict::Accepted
}

/// Multiset-subset test: each letter of the answer consumes one matching
/// letter from the root word's pool, so duplicates in the answer need
/// duplicates in the root.
fn is_possible(answer: &str, root_word: &str) -> bool {
    let mut pool: Vec<char> = root_word.chars().collect();
    for letter in answer.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(index) => {
                pool.remove(index);
            }
            None => return false,
        }
    }
    true
}

fn is_original(answer: &str, state: &RoundState) -> bool {
    answer != state.root_word() && !state.used_words().iter().any(|used| used == answer)
}

fn is_real(answer: &str, dictionary: &dyn DictionaryOracle) -> bool {
    answer.chars().count() >= 3 && dictionary.is_real_word(answer)
}
