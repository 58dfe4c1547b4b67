//! Full-screen terminal interface built on Ratatui.
//!
//! Layout: a header with the root word and score, the list of accepted
//! answers (most recent first), an input box, and a key legend. A rejected
//! submission opens a modal title+message dialog dismissed by any key.

use crate::dictionary::DictionaryOracle;
use crate::game::{GameInterface, UserAction, game_loop};
use crate::round::RoundState;
use crate::validator::Rejection;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_ANSWER_LEN: usize = 24;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const SCORE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const DIALOG_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const LEGEND_STYLE: Style = Style::new().fg(Color::Gray);

#[derive(Debug)]
enum TuiState {
    EnteringAnswer,
    /// Modal acknowledgment; any key returns to EnteringAnswer.
    ShowingDialog { title: String, message: String },
}

pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    current_input: String,
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

/// Runs the game in the full-screen interface; the terminal is restored on
/// return (and by Drop on panic).
pub fn run(word_list: &[String], dictionary: &dyn DictionaryOracle) -> io::Result<()> {
    let mut interface = TuiInterface::new()?;
    game_loop(word_list, dictionary, &mut interface);
    interface.cleanup()
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state: TuiState::EnteringAnswer,
            current_input: String::new(),
            root_word: String::new(),
            used_words: Vec::new(),
            score: 0,
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let root_word = &self.root_word;
        let used_words = &self.used_words;
        let score = self.score;
        let current_input = &self.current_input;
        let state = &self.state;

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3), // Header: root word + score
                    Constraint::Min(5),    // Accepted answers
                    Constraint::Length(3), // Input box
                    Constraint::Length(3), // Key legend
                ])
                .split(f.area());

            render_header(f, chunks[0], root_word, score);
            render_used_words(f, chunks[1], used_words);
            render_input(f, chunks[2], current_input);
            render_legend(f, chunks[3], state);

            if let TuiState::ShowingDialog { title, message } = state {
                render_dialog(f, title, message);
            }
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug!("draw error: {e}");
        }
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            return Ok(None);
        };
        // Press only; Release/Repeat would double letters on some terminals
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        match self.state {
            TuiState::ShowingDialog { .. } => {
                self.state = TuiState::EnteringAnswer;
                Ok(None)
            }
            TuiState::EnteringAnswer => Ok(self.handle_answer_input(key)),
        }
    }

    fn handle_answer_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => return Some(UserAction::Exit),
            KeyCode::Char('n' | 'N') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(UserAction::NewRound);
            }
            KeyCode::Enter => {
                // The empty string is a legal submission; the validator
                // answers it with the Empty rejection.
                let answer = std::mem::take(&mut self.current_input);
                return Some(UserAction::Submit(answer));
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Char(c)
                if c.is_ascii_alphabetic()
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                    && self.current_input.len() < MAX_ANSWER_LEN =>
            {
                self.current_input.push(c.to_ascii_lowercase());
            }
            _ => {
                debug!("ignoring key: {:?}", key.code);
            }
        }
        None
    }
}

fn render_header(f: &mut Frame, area: Rect, root_word: &str, score: u32) {
    let line = Line::from(vec![
        Span::styled(root_word.to_uppercase(), HEADER_STYLE),
        Span::raw("    "),
        Span::styled(format!("Score: {score}"), SCORE_STYLE),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Word Scramble"),
    );
    f.render_widget(header, area);
}

fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
    let lines: Vec<Line> = if used_words.is_empty() {
        vec![Line::from(Span::styled(
            "No answers yet",
            LEGEND_STYLE,
        ))]
    } else {
        used_words
            .iter()
            .map(|word| Line::from(format!("  {word}")))
            .collect()
    };
    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Answers"))
        .wrap(Wrap { trim: true });
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
    let input = Paragraph::new(format!("{current_input}_"))
        .block(Block::default().borders(Borders::ALL).title("Your answer"));
    f.render_widget(input, area);
}

fn render_legend(f: &mut Frame, area: Rect, state: &TuiState) {
    let text = match state {
        TuiState::EnteringAnswer => "Type letters | ENTER: Submit | CTRL-N: New round | ESC: Quit",
        TuiState::ShowingDialog { .. } => "Press any key to continue",
    };
    let legend = Paragraph::new(text)
        .style(LEGEND_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(legend, area);
}

fn render_dialog(f: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(f.area(), 50, 20);
    let dialog = Paragraph::new(message)
        .style(DIALOG_STYLE)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

impl GameInterface for TuiInterface {
    fn display_round(&mut self, state: &RoundState) {
        self.root_word = state.root_word().to_string();
        self.used_words.clear();
        self.score = state.score();
        self.current_input.clear();
        self.state = TuiState::EnteringAnswer;
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                return Some(UserAction::Exit);
            }
            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    debug!("input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, state: &RoundState) {
        self.used_words = state.used_words().to_vec();
        self.score = state.score();
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: Rejection, root_word: &str) {
        self.state = TuiState::ShowingDialog {
            title: rejection.title().to_string(),
            message: rejection.message(root_word),
        };
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        // Nothing to show; the alternate screen is torn down right after.
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
