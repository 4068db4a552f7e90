//! Benchmark command
//!
//! Assembles many puzzles and reports generation speed and answer counts.

use crate::config::PuzzleConfig;
use crate::engine::{EngineError, JumbleEngine};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub total_answers: usize,
    pub average_answers: f64,
    pub min_answers: usize,
    pub max_answers: usize,
    /// Answer count -> number of puzzles with that many answers
    pub distribution: BTreeMap<usize, usize>,
    pub slowest: Duration,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Assemble `count` puzzles with `config`, in parallel
///
/// # Errors
///
/// Returns the first `EngineError` hit, e.g. invalid settings or no
/// dictionary word of the configured length.
pub fn run_benchmark(
    engine: &JumbleEngine,
    config: &PuzzleConfig,
    count: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, EngineError> {
    config.validate()?;

    let pb = if show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(format!("{}-letter puzzles", config.length));

    let start = Instant::now();

    let samples: Vec<(usize, Duration)> = (0..count)
        .into_par_iter()
        .map(|_| -> Result<(usize, Duration), EngineError> {
            let puzzle_start = Instant::now();
            let puzzle = engine.create_puzzle(config.length, Some(config.min_length))?;
            pb.inc(1);
            Ok((puzzle.total(), puzzle_start.elapsed()))
        })
        .collect::<Result<_, EngineError>>()?;

    let duration = start.elapsed();
    pb.finish_and_clear();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &(answers, _) in &samples {
        *distribution.entry(answers).or_insert(0) += 1;
    }

    let total_answers: usize = samples.iter().map(|&(answers, _)| answers).sum();
    let total_puzzles = samples.len();

    debug!(
        "Benchmarked {total_puzzles} puzzles in {:.2}s",
        duration.as_secs_f64()
    );

    Ok(BenchmarkResult {
        total_puzzles,
        total_answers,
        average_answers: if total_puzzles > 0 {
            total_answers as f64 / total_puzzles as f64
        } else {
            0.0
        },
        min_answers: samples.iter().map(|&(answers, _)| answers).min().unwrap_or(0),
        max_answers: samples.iter().map(|&(answers, _)| answers).max().unwrap_or(0),
        distribution,
        slowest: samples
            .iter()
            .map(|&(_, elapsed)| elapsed)
            .max()
            .unwrap_or_default(),
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;
    use crate::wordlists::DICTIONARY;

    #[test]
    fn benchmark_runs() {
        let index = DictionaryIndex::from_words(DICTIONARY);
        let engine = JumbleEngine::new(&index);

        let result = run_benchmark(&engine, &PuzzleConfig::default(), 20, false).unwrap();

        assert_eq!(result.total_puzzles, 20);
        assert!(result.min_answers <= result.max_answers);
        assert!(result.average_answers >= result.min_answers as f64);
        assert!(result.average_answers <= result.max_answers as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let index = DictionaryIndex::from_words(DICTIONARY);
        let engine = JumbleEngine::new(&index);

        let result = run_benchmark(&engine, &PuzzleConfig::new(5, 3), 15, false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_puzzles);
        let weighted: usize = result.distribution.iter().map(|(a, n)| a * n).sum();
        assert_eq!(weighted, result.total_answers);
    }

    #[test]
    fn benchmark_zero_puzzles() {
        let index = DictionaryIndex::from_words(DICTIONARY);
        let engine = JumbleEngine::new(&index);

        let result = run_benchmark(&engine, &PuzzleConfig::default(), 0, false).unwrap();
        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.total_answers, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn benchmark_fails_without_words_of_length() {
        let index = DictionaryIndex::from_words(["cat", "act"]);
        let engine = JumbleEngine::new(&index);

        let result = run_benchmark(&engine, &PuzzleConfig::default(), 3, false);
        assert!(matches!(result, Err(EngineError::NoWordOfLength(6))));
    }
}
