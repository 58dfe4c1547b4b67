// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game;
pub mod logging;
pub mod round;
pub mod tui;
pub mod validator;
pub mod wordlist;

// Re-export the core types for easier testing
pub use dictionary::{DictionaryOracle, SetDictionary};
pub use game::{GameInterface, UserAction, game_loop};
pub use round::RoundState;
pub use validator::{Rejection, Verdict, validate};
pub use wordlist::{load_or_fallback, load_wordlist_from_file, load_wordlist_from_str};
