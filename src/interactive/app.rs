//! TUI application state and logic

use crate::commands::new_puzzle;
use crate::config::PuzzleConfig;
use crate::core::{GuessOutcome, Puzzle};
use crate::engine::JumbleEngine;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: JumbleEngine<'a>,
    pub config: PuzzleConfig,
    pub puzzle: Puzzle,
    /// Letters as currently displayed; reshuffled on demand
    pub letters: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub last_found: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Completed,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_played: usize,
    pub puzzles_completed: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    /// Create the app with a first puzzle
    ///
    /// # Errors
    ///
    /// Returns an error if no puzzle can be assembled with `config`.
    pub fn new(engine: JumbleEngine<'a>, config: PuzzleConfig) -> Result<Self> {
        let puzzle = new_puzzle(&engine, &config)?;
        let letters = puzzle.scrambled().text().to_string();

        Ok(Self {
            engine,
            config,
            puzzle,
            letters,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Find every word hidden in the letters.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. TAB shuffles the letters.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                puzzles_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
            last_found: None,
        })
    }

    /// Submit the contents of the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.trim().to_lowercase();
        self.input_buffer.clear();

        if guess.is_empty() {
            return;
        }

        match self.puzzle.guess(&guess) {
            GuessOutcome::Correct => {
                self.stats.words_found += 1;
                self.last_found = Some(guess.clone());
                self.add_message(
                    &format!(
                        "✓ {} ({}/{})",
                        guess.to_uppercase(),
                        self.puzzle.solved_count(),
                        self.puzzle.total()
                    ),
                    MessageStyle::Success,
                );

                if self.puzzle.is_complete() {
                    self.stats.puzzles_completed += 1;
                    self.input_mode = InputMode::Completed;
                    info!("Puzzle '{}' completed", self.puzzle.original());
                    self.add_message(
                        "🎉 ALL WORDS FOUND! Press 'n' for a new puzzle or 'q' to quit.",
                        MessageStyle::Success,
                    );
                }
            }
            GuessOutcome::AlreadyFound => self.add_message(
                &format!("Already found {}", guess.to_uppercase()),
                MessageStyle::Info,
            ),
            GuessOutcome::Unscrambled => self.add_message(
                &format!("🎯 {} is the full word!", guess.to_uppercase()),
                MessageStyle::Success,
            ),
            GuessOutcome::NotAnAnswer => {
                let reason = if self.engine.exists(&guess) {
                    "can't be made from these letters"
                } else {
                    "is not in the dictionary"
                };
                self.add_message(
                    &format!("{} {reason}", guess.to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Reshuffle the displayed letters
    pub fn shuffle(&mut self) {
        self.letters = self.engine.scramble(&self.letters);
    }

    /// Reveal every remaining answer and end the puzzle
    pub fn give_up(&mut self) {
        self.puzzle.reveal_all();
        self.input_mode = InputMode::Completed;
        self.add_message(
            &format!(
                "The word was {}. Press 'n' for a new puzzle.",
                self.puzzle.original().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    /// Replace the puzzle with a fresh one
    pub fn new_game(&mut self) {
        match new_puzzle(&self.engine, &self.config) {
            Ok(puzzle) => {
                self.letters = puzzle.scrambled().text().to_string();
                self.puzzle = puzzle;
                self.stats.puzzles_played += 1;
                self.input_buffer.clear();
                self.last_found = None;
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New puzzle started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&format!("{err:#}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Accept a typed character while guessing
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < self.puzzle.original().len() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    session_result(res)
}

/// Surface a failure from the event loop once the terminal is restored
fn session_result(res: Result<()>) -> Result<()> {
    res.context("Interactive session failed")
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::Completed => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Tab => app.shuffle(),
                    KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.new_game();
                    }
                    KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.give_up();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;

    fn sample_index() -> DictionaryIndex {
        DictionaryIndex::from_words(["yellow", "yell", "owl", "low", "zebra"])
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit_guess();
    }

    #[test]
    fn new_app_starts_guessing() {
        let index = sample_index();
        let app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.puzzle.total(), 3);
        assert_eq!(app.stats.puzzles_played, 1);
        assert_ne!(app.letters, "yellow");
    }

    #[test]
    fn correct_guesses_complete_puzzle() {
        let index = sample_index();
        let mut app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();

        type_word(&mut app, "OWL");
        assert_eq!(app.last_found.as_deref(), Some("owl"));
        assert_eq!(app.stats.words_found, 1);

        type_word(&mut app, "low");
        type_word(&mut app, "yell");
        assert_eq!(app.input_mode, InputMode::Completed);
        assert_eq!(app.stats.puzzles_completed, 1);
    }

    #[test]
    fn wrong_guess_explains_reason() {
        let index = sample_index();
        let mut app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();

        type_word(&mut app, "zebra");
        let last = app.messages.last().unwrap();
        assert!(last.text.contains("can't be made"));

        type_word(&mut app, "wey");
        let last = app.messages.last().unwrap();
        assert!(last.text.contains("not in the dictionary"));
    }

    #[test]
    fn input_ignores_non_letters_and_overflow() {
        let index = sample_index();
        let mut app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();

        for c in "ab1-cdefgh".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "abcdef");
    }

    #[test]
    fn give_up_then_new_game() {
        let index = sample_index();
        let mut app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();

        app.give_up();
        assert_eq!(app.input_mode, InputMode::Completed);
        assert!(app.puzzle.is_complete());

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.puzzle.solved_count(), 0);
        assert_eq!(app.stats.puzzles_played, 2);
    }

    #[test]
    fn shuffle_keeps_letters() {
        let index = sample_index();
        let mut app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();

        let mut before: Vec<char> = app.letters.chars().collect();
        app.shuffle();
        let mut after: Vec<char> = app.letters.chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        assert_eq!(before, after);
    }

    #[test]
    fn messages_are_capped() {
        let index = sample_index();
        let mut app = App::new(JumbleEngine::new(&index), PuzzleConfig::default()).unwrap();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }

    #[test]
    fn session_errors_are_returned() {
        let err = session_result(Err(anyhow::anyhow!("read failed"))).unwrap_err();
        assert_eq!(err.to_string(), "Interactive session failed");
        assert_eq!(err.root_cause().to_string(), "read failed");
        assert!(session_result(Ok(())).is_ok());
    }
}
