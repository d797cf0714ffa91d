//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::DictionaryOracle;
use crate::session::GameSession;
use crate::validation::SubmissionOutcome;
use crate::wordlists::RootWordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin and stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output, or if
/// the root word source runs dry on restart.
pub fn run_simple<S, D>(session: &mut GameSession<S, D>) -> anyhow::Result<()>
where
    S: RootWordSource,
    D: DictionaryOracle,
{
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output streams
///
/// Every line is a submission, except `:new`, `:words` and `:quit`. End of input
/// ends the game.
///
/// # Errors
///
/// Returns an error on I/O failure, or if the root word source runs dry on restart.
pub fn run_simple_with<S, D, R, W>(
    session: &mut GameSession<S, D>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    S: RootWordSource,
    D: DictionaryOracle,
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                   Word Scramble - Simple Mode                ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Spell words of three letters or more using the root word's letters.")?;
    writeln!(output, "Commands: ':new' for a new root word, ':words' to list your words, ':quit' to exit\n")?;

    print_root_word(session, &mut output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":new" | ":n" => {
                session.restart()?;
                writeln!(output, "\n🔄 New game started!")?;
                print_root_word(session, &mut output)?;
            }
            ":words" | ":w" => print_used_words(session, &mut output)?,
            _ => match session.submit(&line) {
                SubmissionOutcome::Accepted(word) => {
                    writeln!(
                        output,
                        "{} {} {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        format!("+{} (score {})", word.chars().count(), session.score())
                            .bright_black()
                    )?;
                }
                SubmissionOutcome::Rejected(reason) => {
                    if let Some(alert) = reason.alert(session.root_word().text()) {
                        writeln!(
                            output,
                            "{} {}",
                            format!("❌ {}:", alert.title).red().bold(),
                            alert.message
                        )?;
                    }
                }
            },
        }
    }

    writeln!(output, "\n👋 Final score: {}\n", session.score())?;
    Ok(())
}

fn print_root_word<S, D, W>(session: &GameSession<S, D>, output: &mut W) -> io::Result<()>
where
    S: RootWordSource,
    D: DictionaryOracle,
    W: Write,
{
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        session.root_word().text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

fn print_used_words<S, D, W>(session: &GameSession<S, D>, output: &mut W) -> io::Result<()>
where
    S: RootWordSource,
    D: DictionaryOracle,
    W: Write,
{
    if session.used_words().next().is_none() {
        return writeln!(output, "No words yet!");
    }

    for word in session.used_words() {
        writeln!(output, "  {:>2}  {word}", word.chars().count())?;
    }
    writeln!(output, "Score: {}", session.score())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Language, WordListDictionary};
    use crate::wordlists::WordListSource;
    use std::io::Cursor;

    fn play(script: &str) -> (String, usize) {
        let dictionary = WordListDictionary::new(Language::ENGLISH, ["lines", "net", "silent"]);
        let mut session =
            GameSession::with_seed(WordListSource::from_words(&["listen"]), dictionary, 1)
                .unwrap();

        let mut output = Vec::new();
        run_simple_with(&mut session, Cursor::new(script), &mut output).unwrap();
        (String::from_utf8(output).unwrap(), session.score())
    }

    #[test]
    fn accepted_words_add_to_score() {
        let (output, score) = play("lines\nnet\n");
        assert_eq!(score, 8);
        assert!(output.contains("Final score: 8"));
    }

    #[test]
    fn rejections_print_alerts() {
        let (output, score) = play("sisters\nnet\nnet\nlets\n");
        assert_eq!(score, 3);
        assert!(output.contains("You can't spell that word from 'listen'!"));
        assert!(output.contains("Be more original"));
        assert!(output.contains("You can't just make them up, you know!"));
    }

    #[test]
    fn too_short_is_silent() {
        let (output, score) = play("ab\n");
        assert_eq!(score, 0);
        assert!(!output.contains("❌"));
    }

    #[test]
    fn quit_stops_reading() {
        let (_, score) = play(":quit\nlines\n");
        assert_eq!(score, 0);
    }

    #[test]
    fn new_game_resets_score() {
        let (output, score) = play("lines\n:new\nnet\n");
        assert_eq!(score, 3);
        assert!(output.contains("New game started!"));
    }

    #[test]
    fn words_lists_history() {
        let (output, _) = play(":words\nsilent\n:words\n");
        assert!(output.contains("No words yet!"));
        assert!(output.contains("silent"));
        assert!(output.contains("Score: 6"));
    }
}
