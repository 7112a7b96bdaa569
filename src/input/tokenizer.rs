/// Delimiters a command line is split on: space, tab, carriage return,
/// newline, and bell.
const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Splits a raw line into whitespace-delimited argument tokens.
///
/// Runs of delimiters collapse, so an all-whitespace line yields no tokens.
/// There is no quoting or escape syntax; a quote character is an ordinary
/// token character.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(&DELIMITERS[..])
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_runs_of_whitespace() {
        assert_eq!(tokenize("  cd   /tmp  "), vec!["cd", "/tmp"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_only_line() {
        assert!(tokenize(" \t \r ").is_empty());
    }

    #[test]
    fn test_tabs_and_bell_are_delimiters() {
        assert_eq!(tokenize("ping\t127.0.0.1\x07-c"), vec!["ping", "127.0.0.1", "-c"]);
    }

    #[test]
    fn test_quotes_are_ordinary_characters() {
        assert_eq!(tokenize("echo \"hello world\""), vec!["echo", "\"hello", "world\""]);
    }

    #[test]
    fn test_single_token() {
        assert_eq!(tokenize("exit"), vec!["exit"]);
    }
}
