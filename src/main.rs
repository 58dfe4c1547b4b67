mod cli;
mod dictionary;
mod game;
mod logging;
mod round;
mod tui;
mod validator;
mod wordlist;

use cli::{CliInterface, parse_cli};
use dictionary::SetDictionary;
use game::game_loop;
use log::warn;
use std::io;
use std::path::Path;

fn main() {
    logging::init();
    let cli = parse_cli();

    let word_list = wordlist::load_or_fallback(cli.wordlist_path.as_deref().map(Path::new));

    let dictionary = match &cli.dictionary_path {
        Some(path) => match SetDictionary::from_file(path) {
            Ok(dict) if !dict.is_empty() => dict,
            Ok(_) => {
                warn!("dictionary '{path}' is empty; using the bundled dictionary");
                SetDictionary::embedded()
            }
            Err(e) => {
                warn!("failed to load dictionary '{path}': {e}; using the bundled dictionary");
                SetDictionary::embedded()
            }
        },
        None => SetDictionary::embedded(),
    };

    if cli.tui {
        if let Err(e) = tui::run(&word_list, &dictionary) {
            eprintln!("terminal error: {e}");
        }
    } else {
        let mut interface = CliInterface::new(io::stdin().lock());
        game_loop(&word_list, &dictionary, &mut interface);
    }
}
