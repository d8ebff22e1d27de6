//! Text normalization shared by the skill matcher and dimension scorers.
//!
//! The allowed character set keeps `+`, `.` and `#` so skill tokens like
//! "c++", "c#" and "node.js" survive normalization intact.

/// Lowercases and replaces every character outside `[a-z0-9+.# ]` with a space.
///
/// Total: any input (including empty) produces a valid string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '.' | '#' | ' ') {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Normalizes and splits on whitespace runs, dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello  world ");
    }

    #[test]
    fn test_normalize_preserves_skill_characters() {
        assert_eq!(normalize("C++ and C# and Node.js"), "c++ and c# and node.js");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_tokenize_splits_on_whitespace_runs() {
        assert_eq!(tokenize("react,  redux\njavascript"), vec!["react", "redux", "javascript"]);
    }

    #[test]
    fn test_tokenize_empty_input_yields_empty_vec() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("?!").is_empty());
    }
}
