use crate::game::{GameInterface, UserAction};
use crate::round::RoundState;
use crate::validator::Rejection;
use clap::Parser;
use std::io::BufRead;

/// Word Scramble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited root-word file
    #[arg(short = 'i', long = "wordlist")]
    pub wordlist_path: Option<String>,

    /// Path to a newline-delimited dictionary file
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Run the full-screen terminal interface
    #[arg(long = "tui")]
    pub tui: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Line-oriented interface: each line is a submission, except the reserved
/// commands 'new'/'next' (new round) and 'exit'/'quit'. A line starting
/// with ':' submits the rest literally, so the reserved words themselves
/// stay playable (':new' submits "new"), matching the full-screen
/// interface where every typed word is a submission. The submitted answer
/// keeps its whitespace; only the line ending is stripped.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn decode_line(line: &str) -> UserAction {
    let answer = strip_line_ending(line);
    if let Some(literal) = answer.strip_prefix(':') {
        return UserAction::Submit(literal.to_string());
    }
    match answer.trim().to_lowercase().as_str() {
        "exit" | "quit" => UserAction::Exit,
        "new" | "next" => UserAction::NewRound,
        _ => UserAction::Submit(answer.to_string()),
    }
}

fn print_used_words(state: &RoundState) {
    for word in state.used_words() {
        println!("  {word}");
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_round(&mut self, state: &RoundState) {
        println!("\nNew round! Your word is: {}", state.root_word());
        println!("Make words from its letters (3+ letters, no repeats).");
    }

    fn read_action(&mut self) -> Option<UserAction> {
        println!("\nEnter an answer (or 'new' for a new round, 'exit' to quit):");
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) | Err(_) => Some(UserAction::Exit),
            Ok(_) => Some(decode_line(&line)),
        }
    }

    fn display_accepted(&mut self, state: &RoundState) {
        println!("Nice! Score: {}", state.score());
        print_used_words(state);
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        println!("{}: {}", rejection.title(), rejection.message(root_word));
    }

    fn display_exit_message(&mut self) {
        println!("Thanks for playing!");
    }
}
