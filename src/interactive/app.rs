//! TUI application state and logic

use crate::commands::{SolutionsResult, find_solutions};
use crate::dictionary::WordListDictionary;
use crate::session::GameSession;
use crate::validation::SubmissionOutcome;
use crate::wordlists::WordListSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info};

/// Application state
pub struct App<'a> {
    pub session: GameSession<WordListSource, &'a WordListDictionary>,
    pub dictionary: &'a WordListDictionary,
    pub solutions: SolutionsResult,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
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
    pub games_played: usize,
    pub best_score: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        session: GameSession<WordListSource, &'a WordListDictionary>,
        dictionary: &'a WordListDictionary,
    ) -> Self {
        let solutions = find_solutions(session.root_word(), dictionary);

        Self {
            session,
            dictionary,
            solutions,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Spell words using the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Ctrl-R starts a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        }
    }

    /// Submit the input buffer as a candidate word
    ///
    /// The input is only cleared once a word is accepted.
    pub fn submit_word(&mut self) {
        match self.session.submit(&self.input_buffer) {
            SubmissionOutcome::Accepted(word) => {
                self.input_buffer.clear();
                self.stats.words_found += 1;
                self.stats.best_score = self.stats.best_score.max(self.session.score());
                self.add_message(
                    &format!("+{} for '{word}'", word.chars().count()),
                    MessageStyle::Success,
                );
            }
            SubmissionOutcome::Rejected(reason) => {
                if let Some(alert) = reason.alert(self.session.root_word().text()) {
                    self.add_message(
                        &format!("{}: {}", alert.title, alert.message),
                        MessageStyle::Error,
                    );
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.session.restart() {
            Ok(()) => {
                self.solutions = find_solutions(self.session.root_word(), self.dictionary);
                self.stats.games_played += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message(
                    &format!(
                        "New game! {} words hide in '{}'.",
                        self.solutions.word_count(),
                        self.session.root_word()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                error!(%err, "Restart failed");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
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

    /// Solutions the player has not found yet
    #[must_use]
    pub fn words_left(&self) -> usize {
        self.solutions.remaining(self.session.used_words())
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_word();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Starting TUI");

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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            info!(
                games = app.stats.games_played,
                best_score = app.stats.best_score,
                "Leaving TUI"
            );
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Language;

    fn dictionary() -> WordListDictionary {
        WordListDictionary::new(Language::ENGLISH, ["lines", "net", "silent", "tin"])
    }

    fn app(dictionary: &WordListDictionary) -> App<'_> {
        let session =
            GameSession::with_seed(WordListSource::from_words(&["listen"]), dictionary, 3)
                .unwrap();
        App::new(session, dictionary)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn starts_with_all_words_left() {
        let dictionary = dictionary();
        let app = app(&dictionary);
        assert_eq!(app.words_left(), 4);
        assert_eq!(app.stats.games_played, 1);
    }

    #[test]
    fn typing_and_enter_submits() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "lines");

        assert_eq!(app.session.score(), 5);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.words_left(), 3);
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.best_score, 5);
    }

    #[test]
    fn rejection_shows_error_message() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "sisters");

        let last = app.messages.last().unwrap();
        assert!(matches!(last.style, MessageStyle::Error));
        assert!(last.text.starts_with("Word not possible"));
        assert_eq!(app.input_buffer, "sisters");
    }

    #[test]
    fn every_rejection_keeps_typed_word() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "net");
        assert!(app.input_buffer.is_empty());

        for word in ["net", "listen", "lets"] {
            type_word(&mut app, word);
            assert_eq!(app.input_buffer, word);
            app.input_buffer.clear();
        }
        assert_eq!(app.session.score(), 3);
    }

    #[test]
    fn too_short_keeps_input_without_message() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        let messages_before = app.messages.len();
        type_word(&mut app, "ne");

        assert_eq!(app.input_buffer, "ne");
        assert_eq!(app.messages.len(), messages_before);
    }

    #[test]
    fn backspace_edits_input() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('x'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "n");
    }

    #[test]
    fn ctrl_r_starts_new_game() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        type_word(&mut app, "net");
        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert_eq!(app.session.score(), 0);
        assert_eq!(app.words_left(), 4);
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.stats.best_score, 3);
    }

    #[test]
    fn escape_quits() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn message_log_is_bounded() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for _ in 0..10 {
            app.add_message("hello", MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
    }
}
