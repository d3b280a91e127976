//! Formatting utilities for terminal output

/// Uppercase the first character, lowercase the rest
///
/// Used for category menu entries, mirroring how list files are usually
/// written all-lowercase.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Join guessed characters for display, showing space as a visible word
#[must_use]
pub fn join_guessed(chars: &[char]) -> String {
    let shown: Vec<String> = chars
        .iter()
        .map(|&c| {
            if c == ' ' {
                "(space)".to_string()
            } else {
                c.to_string()
            }
        })
        .collect();
    shown.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("animals"), "Animals");
        assert_eq!(capitalize("VIDEO GAMES"), "Video games");
    }

    #[test]
    fn capitalize_empty() {
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_single_char() {
        assert_eq!(capitalize("x"), "X");
    }

    #[test]
    fn join_guessed_shows_space() {
        assert_eq!(join_guessed(&['A', ' ', 'Z']), "A, (space), Z");
    }

    #[test]
    fn join_guessed_empty() {
        assert_eq!(join_guessed(&[]), "");
    }
}
