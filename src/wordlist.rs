use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

/// Substituted whenever no usable root words can be loaded.
pub const FALLBACK_WORD: &str = "silkworm";

fn is_root_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordlist_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_root_word(word))
        .collect()
}

pub fn load_wordlist_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_root_word(&word) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Per-user override for the embedded list, honored when no `--wordlist`
/// flag is given.
pub fn user_wordlist_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("word-scramble").join("wordlist.txt"))
}

/// Loads root words from the first usable source: the explicit path, the
/// per-user config file, then the embedded list. Load failures are logged
/// and skipped; an empty result substitutes the single-word fallback list,
/// so the returned list is never empty.
pub fn load_or_fallback(explicit: Option<&Path>) -> Vec<String> {
    load_cascade(explicit, user_wordlist_path().as_deref())
}

fn load_cascade(explicit: Option<&Path>, user: Option<&Path>) -> Vec<String> {
    if let Some(path) = explicit
        && let Some(words) = try_load_file(path)
    {
        return words;
    }
    if let Some(path) = user
        && path.is_file()
        && let Some(words) = try_load_file(path)
    {
        debug!("using per-user word list {}", path.display());
        return words;
    }

    let words = load_wordlist_from_str(EMBEDDED_WORDLIST);
    if words.is_empty() {
        warn!("no usable root words; falling back to '{FALLBACK_WORD}'");
        return vec![FALLBACK_WORD.to_string()];
    }
    words
}

fn try_load_file(path: &Path) -> Option<Vec<String>> {
    match load_wordlist_from_file(path) {
        Ok(words) if !words.is_empty() => Some(words),
        Ok(_) => {
            warn!("word list '{}' contains no usable words", path.display());
            None
        }
        Err(e) => {
            warn!("failed to load word list '{}': {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_lowercases_lines() {
        let words = load_wordlist_from_str("Silkworm\nKEYBOARD\n  notebook  \n");
        assert_eq!(words, vec!["silkworm", "keyboard", "notebook"]);
    }

    #[test]
    fn skips_blank_and_non_alphabetic_lines() {
        let words = load_wordlist_from_str("calendar\n\nwo rd\n1234\nsand-wich\nfestival");
        assert_eq!(words, vec!["calendar", "festival"]);
    }

    #[test]
    fn embedded_wordlist_is_usable() {
        let words = load_wordlist_from_str(EMBEDDED_WORDLIST);
        assert!(!words.is_empty());
        assert!(words.contains(&"silkworm".to_string()));
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn missing_explicit_file_falls_back() {
        let words = load_or_fallback(Some(Path::new("/definitely/not/here.txt")));
        assert!(!words.is_empty());
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn explicit_path_wins_over_user_and_embedded() {
        let explicit = write_temp("ws_cascade_explicit.txt", "keyboard\n");
        let user = write_temp("ws_cascade_explicit_user.txt", "festival\n");
        let words = load_cascade(Some(&explicit), Some(&user));
        assert_eq!(words, vec!["keyboard"]);
        let _ = std::fs::remove_file(&explicit);
        let _ = std::fs::remove_file(&user);
    }

    #[test]
    fn failed_explicit_falls_through_to_user_config() {
        let user = write_temp("ws_cascade_user.txt", "keyboard\nfestival\n");
        let words = load_cascade(Some(Path::new("/no/such/file.txt")), Some(&user));
        assert_eq!(words, vec!["keyboard", "festival"]);
        let _ = std::fs::remove_file(&user);
    }

    #[test]
    fn empty_explicit_file_falls_through_to_user_config() {
        // filters to nothing usable, so the explicit tier is skipped
        let explicit = write_temp("ws_cascade_empty.txt", "1234\nwo rd\n");
        let user = write_temp("ws_cascade_empty_user.txt", "notebook\n");
        let words = load_cascade(Some(&explicit), Some(&user));
        assert_eq!(words, vec!["notebook"]);
        let _ = std::fs::remove_file(&explicit);
        let _ = std::fs::remove_file(&user);
    }

    #[test]
    fn user_config_wins_over_embedded() {
        let user = write_temp("ws_cascade_user_only.txt", "festival\n");
        let words = load_cascade(None, Some(&user));
        assert_eq!(words, vec!["festival"]);
        let _ = std::fs::remove_file(&user);
    }

    #[test]
    fn missing_user_config_falls_back_to_embedded() {
        let words = load_cascade(None, Some(Path::new("/no/such/config.txt")));
        assert!(words.contains(&"silkworm".to_string()));
    }

    #[test]
    fn load_from_file_roundtrip() {
        let path = std::env::temp_dir().join("word_scramble_wordlist_test.txt");
        std::fs::write(&path, "keyboard\nsilkworm\n").unwrap();
        let words = load_wordlist_from_file(&path).unwrap();
        assert_eq!(words, vec!["keyboard", "silkworm"]);
        let _ = std::fs::remove_file(&path);
    }
}
