//! Simple interactive CLI mode
//!
//! Line-based puzzle game without the TUI. Reads guesses from any `BufRead`
//! and writes to any `Write`, so it runs equally on stdin/stdout or in tests.

use super::puzzle::new_puzzle;
use crate::config::PuzzleConfig;
use crate::core::{GuessOutcome, Puzzle};
use crate::engine::JumbleEngine;
use crate::output::formatters::{masked_word, spaced_letters};
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};

/// Run the simple interactive game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if a puzzle
/// cannot be assembled with `config`.
pub fn run_simple<R: BufRead, W: Write>(
    engine: &JumbleEngine,
    config: &PuzzleConfig,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                Word Jumble - Interactive Mode                ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Find every word hidden in the scrambled letters.")?;
    writeln!(
        output,
        "Commands: 'list' progress, 'shuffle' new letter order, 'reveal' give up, 'new' next puzzle, 'quit' to exit\n"
    )?;

    let mut puzzle = new_puzzle(engine, config)?;
    let mut letters = puzzle.scrambled().text().to_string();
    show_puzzle(&mut output, &puzzle, &letters)?;

    loop {
        write!(output, "Guess: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "list" | "l" => show_progress(&mut output, &puzzle)?,
            "shuffle" | "s" => {
                letters = engine.scramble(&letters);
                show_puzzle(&mut output, &puzzle, &letters)?;
            }
            "reveal" => {
                puzzle.reveal_all();
                writeln!(
                    output,
                    "\nThe word was {}.",
                    puzzle.original().text().to_uppercase()
                )?;
                show_progress(&mut output, &puzzle)?;
            }
            "new" | "n" => {
                puzzle = new_puzzle(engine, config)?;
                letters = puzzle.scrambled().text().to_string();
                writeln!(output, "\n🔄 New puzzle!\n")?;
                show_puzzle(&mut output, &puzzle, &letters)?;
            }
            guess => {
                let message = match puzzle.guess(guess) {
                    GuessOutcome::Correct => format!(
                        "✓ {} ({}/{})",
                        guess.to_uppercase(),
                        puzzle.solved_count(),
                        puzzle.total()
                    ),
                    GuessOutcome::AlreadyFound => {
                        format!("Already found {}", guess.to_uppercase())
                    }
                    GuessOutcome::Unscrambled => {
                        format!("🎯 {} is the full word!", guess.to_uppercase())
                    }
                    GuessOutcome::NotAnAnswer => {
                        format!("❌ {} is not an answer", guess.to_uppercase())
                    }
                };
                writeln!(output, "{message}")?;

                if puzzle.is_complete() && puzzle.total() > 0 {
                    info!("Puzzle '{}' completed", puzzle.original());
                    writeln!(
                        output,
                        "\n🎉 All {} words found! Type 'new' for another puzzle or 'quit'.\n",
                        puzzle.total()
                    )?;
                }
            }
        }
    }
}

fn show_puzzle<W: Write>(output: &mut W, puzzle: &Puzzle, letters: &str) -> Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(output, "Letters: {}", spaced_letters(letters))?;
    writeln!(
        output,
        "{} words to find ({} found)",
        puzzle.total(),
        puzzle.solved_count()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    Ok(())
}

fn show_progress<W: Write>(output: &mut W, puzzle: &Puzzle) -> Result<()> {
    writeln!(output)?;
    for (word, &solved) in puzzle.sub_words() {
        if solved {
            writeln!(output, "  • {}", word.to_uppercase())?;
        } else {
            writeln!(output, "  • {}", masked_word(word))?;
        }
    }
    writeln!(output, "\n{}/{} found\n", puzzle.solved_count(), puzzle.total())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;
    use std::io::Cursor;

    fn run(input: &str) -> String {
        let index = DictionaryIndex::from_words(["yellow", "yell", "owl", "low"]);
        let engine = JumbleEngine::new(&index);

        let mut output = Vec::new();
        run_simple(
            &engine,
            &PuzzleConfig::default(),
            Cursor::new(input.to_string()),
            &mut output,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn correct_and_wrong_guesses() {
        let output = run("owl\nzebra\nowl\nquit\n");
        assert!(output.contains("✓ OWL (1/3)"));
        assert!(output.contains("❌ ZEBRA is not an answer"));
        assert!(output.contains("Already found OWL"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn finding_every_word_completes() {
        let output = run("owl\nlow\nYELL\n");
        assert!(output.contains("All 3 words found"));
    }

    #[test]
    fn full_word_is_recognized() {
        let output = run("yellow\n");
        assert!(output.contains("YELLOW is the full word"));
    }

    #[test]
    fn list_masks_unsolved_words() {
        let output = run("low\nlist\n");
        assert!(output.contains("  • LOW"));
        assert!(output.contains("  • _ _ _"));
        assert!(output.contains("1/3 found"));
    }

    #[test]
    fn reveal_shows_every_answer() {
        let output = run("reveal\n");
        assert!(output.contains("The word was YELLOW"));
        assert!(output.contains("  • OWL"));
        assert!(output.contains("3/3 found"));
    }

    #[test]
    fn end_of_input_stops_cleanly() {
        let output = run("");
        assert!(output.contains("Letters:"));
    }

    #[test]
    fn fails_when_no_puzzle_possible() {
        let index = DictionaryIndex::from_words(["owl"]);
        let engine = JumbleEngine::new(&index);
        let result = run_simple(
            &engine,
            &PuzzleConfig::default(),
            Cursor::new(String::new()),
            Vec::<u8>::new(),
        );
        assert!(result.is_err());
    }
}
