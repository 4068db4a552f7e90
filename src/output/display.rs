//! Display functions for command results

use super::formatters::{columns, masked_word, solved_bar, spaced_letters};
use crate::commands::{
    BenchmarkResult, ExistsResult, ScrambleResult, SubWordsResult, WordListResult,
};
use crate::core::Puzzle;
use colored::Colorize;

/// Print a scrambled word next to its original
pub fn print_scramble_result(result: &ScrambleResult) {
    println!(
        "{} → {}",
        result.original.bright_white(),
        result.scrambled.bright_yellow().bold()
    );
}

/// Print the outcome of an existence check
pub fn print_exists_result(result: &ExistsResult) {
    if result.exists {
        println!("{} {}", "✓".green().bold(), result.word.bright_white().bold());
    } else {
        println!(
            "{} {} is not in the dictionary",
            "✗".red().bold(),
            result.word.bright_white()
        );
    }
}

/// Print a randomly picked word
pub fn print_random_word(word: Option<&str>, length: Option<usize>) {
    match (word, length) {
        (Some(word), _) => println!("{}", word.bright_yellow().bold()),
        (None, Some(length)) => println!("{}", format!("No word of length {length}").red()),
        (None, None) => println!("{}", "Dictionary is empty".red()),
    }
}

/// Print a titled list of words
pub fn print_word_list(result: &WordListResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} ({})",
        result.title.bright_cyan().bold(),
        result.words.len().to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("  {}", "No matching words".bright_black());
        return;
    }

    for row in columns(&result.words, 6) {
        println!("  {row}");
    }
}

/// Print generated sub-words grouped by length
pub fn print_sub_words(result: &SubWordsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUB-WORDS OF".bright_cyan().bold(),
        result.seed.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} words of {}+ letters in {:.2}ms",
        result.words.len().to_string().bright_yellow().bold(),
        result.min_length,
        result.duration.as_secs_f64() * 1000.0
    );

    for (length, words) in &result.by_length {
        println!("\n  {}", format!("{length} letters:").bright_cyan());
        for row in columns(words, 8) {
            println!("    {row}");
        }
    }
}

/// Print a puzzle, masking unsolved answers
pub fn print_puzzle(puzzle: &Puzzle, reveal: bool) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PUZZLE:".bright_cyan().bold(),
        spaced_letters(puzzle.scrambled().text())
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n   Progress: [{}] {}/{}",
        solved_bar(puzzle.solved_count(), puzzle.total(), 30).green(),
        puzzle.solved_count(),
        puzzle.total()
    );
    println!();

    for (word, &solved) in puzzle.sub_words() {
        if solved || reveal {
            println!("   {}", word.to_uppercase().green());
        } else {
            println!("   {}", masked_word(word).bright_black());
        }
    }

    if reveal {
        println!(
            "\n   Original word: {}",
            puzzle.original().text().to_uppercase().bright_yellow().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles built:    {}", result.total_puzzles);
    println!(
        "   Average answers:  {}",
        format!("{:.2}", result.average_answers)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest answers:   {}",
        format!("{}", result.min_answers).yellow()
    );
    println!(
        "   Most answers:     {}",
        format!("{}", result.max_answers).green()
    );
    println!(
        "   Slowest puzzle:   {:.2}ms",
        result.slowest.as_secs_f64() * 1000.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.total_puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Answers per puzzle:".bright_cyan().bold());
    for (answers, &count) in &result.distribution {
        let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {answers:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}
