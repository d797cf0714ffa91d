//! Display functions for command results

use super::formatters::{create_progress_bar, score_badge};
use crate::commands::{SolutionsResult, SurveyResult};
use colored::Colorize;

/// Print every word a root word allows
///
/// At most `limit` words are listed when a limit is given.
pub fn print_solutions_result(result: &SolutionsResult, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words, {} points available",
        result.word_count().to_string().bright_yellow().bold(),
        result.max_score.to_string().bright_yellow().bold()
    );
    println!("   Found in {:.2}ms\n", result.duration.as_secs_f64() * 1000.0);

    let shown = limit.unwrap_or(result.words.len());
    for word in result.words.iter().take(shown) {
        println!("   {} {}", score_badge(word.chars().count()).green(), word);
    }

    if shown < result.words.len() {
        println!(
            "{}",
            format!("   ... and {} more", result.words.len() - shown).bright_black()
        );
    }
}

/// Print the corpus survey, `top` entries from each end
pub fn print_survey_result(result: &SurveyResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Corpus:".bright_cyan().bold());
    println!("   Root words:       {}", result.entries.len());
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Barren roots:     {}", result.barren().count());
    println!("   Time taken:       {:.2}s", result.total_time.as_secs_f64());

    let max_words = result.entries.first().map_or(0, |e| e.word_count) as f64;

    println!("\n🏆 {}", "Richest root words:".bright_cyan().bold());
    for entry in result.entries.iter().take(top) {
        let bar = create_progress_bar(entry.word_count as f64, max_words, 30);
        println!(
            "   {:<12} {} {:4} words {:5} pts",
            entry.root,
            bar.green(),
            entry.word_count,
            entry.max_score
        );
    }

    if result.entries.len() > top {
        println!("\n🪨 {}", "Poorest root words:".bright_cyan().bold());
        let skip = result.entries.len().saturating_sub(top).max(top);
        for entry in result.entries.iter().skip(skip) {
            let bar = create_progress_bar(entry.word_count as f64, max_words, 30);
            println!(
                "   {:<12} {} {:4} words {:5} pts",
                entry.root,
                bar.yellow(),
                entry.word_count,
                entry.max_score
            );
        }
    }
}
