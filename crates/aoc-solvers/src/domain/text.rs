//! Line helpers for raw puzzle input

/// Lines of `text` up to (not including) the first empty line
///
/// Puzzle input ends with a newline, which yields a final empty line that is
/// dropped here along with anything after it.
pub fn split_lines_until_empty(text: &str) -> impl Iterator<Item = &str> + Clone + '_ {
    text.split('\n').take_while(|line| !line.is_empty())
}

/// Strip the leading newline of a raw-string example fixture
pub fn prepare_example_input(text: &str) -> &str {
    text.strip_prefix('\n').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_until_empty() {
        let lines: Vec<&str> = split_lines_until_empty("a\nb\n\nc\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_split_lines_without_trailing_newline() {
        let lines: Vec<&str> = split_lines_until_empty("a\nb").collect();
        assert_eq!(lines, vec!["a", "b"]);
        assert_eq!(split_lines_until_empty("").count(), 0);
    }

    #[test]
    fn test_prepare_example_input() {
        assert_eq!(prepare_example_input("\n1\n2\n"), "1\n2\n");
        assert_eq!(prepare_example_input("1\n"), "1\n");
    }
}
