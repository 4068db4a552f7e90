//! Formatting utilities for terminal output

/// Uppercase letters separated by spaces, e.g. "lowyel" -> "L O W Y E L"
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One underscore per letter, e.g. "owl" -> "_ _ _"
#[must_use]
pub fn masked_word(word: &str) -> String {
    vec!["_"; word.chars().count()].join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for found answers out of the total
#[must_use]
pub fn solved_bar(solved: usize, total: usize, width: usize) -> String {
    create_progress_bar(solved as f64, total as f64, width)
}

/// Lay words out in rows of `per_row`, each column padded to the longest word
#[must_use]
pub fn columns(words: &[String], per_row: usize) -> Vec<String> {
    let width = words.iter().map(String::len).max().unwrap_or(0);
    words
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|word| format!("{word:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect()
}
