//! Word Scramble - CLI
//!
//! Word building game with TUI and simple line modes, plus tools to explore the
//! root word corpus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{find_solutions, run_simple, run_survey},
    core::RootWord,
    dictionary::WordListDictionary,
    logging,
    output::{print_solutions_result, print_survey_result},
    session::GameSession,
    wordlists::WordListSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'all' (default, embedded list) or path to a whitespace-separated file
    #[arg(short, long, global = true, default_value = "all")]
    roots: String,

    /// Dictionary: 'all' (default, embedded English list) or path to a word list file
    #[arg(short, long, global = true, default_value = "all")]
    dictionary: String,

    /// Seed for the root word draw, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file for the TUI (other modes log to stderr)
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,

    /// List every word a root word allows
    Solutions {
        /// Root word to solve
        word: String,

        /// Only list this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank every root word by how many words it allows
    Survey {
        /// Number of root words to show from each end
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

/// Load the root word source based on the -r flag
fn load_roots(roots: &str) -> Result<WordListSource> {
    match roots {
        "all" => Ok(WordListSource::embedded()),
        path => WordListSource::from_file(path)
            .with_context(|| format!("Failed to load root words from {path}")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary: &str) -> Result<WordListDictionary> {
    match dictionary {
        "all" => Ok(WordListDictionary::embedded()),
        path => WordListDictionary::from_file(path)
            .with_context(|| format!("Failed to load dictionary from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if matches!(command, Commands::Play) {
        logging::init_file(&cli.log_level, &cli.log_file)
            .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    } else {
        logging::init_stderr(&cli.log_level);
    }

    let dictionary = load_dictionary(&cli.dictionary)?;

    match command {
        Commands::Play => {
            let roots = load_roots(&cli.roots)?;
            run_play_command(roots, &dictionary, cli.seed)
        }
        Commands::Simple => {
            let roots = load_roots(&cli.roots)?;
            run_simple_command(roots, &dictionary, cli.seed)
        }
        Commands::Solutions { word, limit } => run_solutions_command(&word, limit, &dictionary),
        Commands::Survey { top } => {
            let roots = load_roots(&cli.roots)?;
            run_survey_command(&roots, top, &dictionary);
            Ok(())
        }
    }
}

fn start_session(
    roots: WordListSource,
    dictionary: &WordListDictionary,
    seed: Option<u64>,
) -> Result<GameSession<WordListSource, &WordListDictionary>> {
    let session = match seed {
        Some(seed) => GameSession::with_seed(roots, dictionary, seed),
        None => GameSession::new(roots, dictionary),
    };
    session.context("Cannot start a game")
}

fn run_play_command(
    roots: WordListSource,
    dictionary: &WordListDictionary,
    seed: Option<u64>,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = start_session(roots, dictionary, seed)?;
    let app = App::new(session, dictionary);
    run_tui(app)
}

fn run_simple_command(
    roots: WordListSource,
    dictionary: &WordListDictionary,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = start_session(roots, dictionary, seed)?;
    run_simple(&mut session)
}

fn run_solutions_command(
    word: &str,
    limit: Option<usize>,
    dictionary: &WordListDictionary,
) -> Result<()> {
    let root = RootWord::new(word).with_context(|| format!("'{word}' cannot be a root word"))?;
    let result = find_solutions(&root, dictionary);
    print_solutions_result(&result, limit);
    Ok(())
}

fn run_survey_command(roots: &WordListSource, top: usize, dictionary: &WordListDictionary) {
    use word_scramble::wordlists::RootWordSource;

    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSurveying {} root words against {} dictionary words\n",
        roots.len(),
        dictionary.len()
    );

    let result = run_survey(roots.all_root_words(), dictionary, true);
    print_survey_result(&result, top);
}
