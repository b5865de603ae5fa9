/// Splits raw report content into trimmed, non-empty lines.
///
/// Third-party exports arrive with byte-order marks, NUL padding and mixed
/// CRLF/LF line endings; every later stage assumes those are gone.
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .replace(['\u{FEFF}', '\0'], "")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_nul_characters() {
        let lines = normalize_lines("\u{FEFF}profit,time\r\n10.5,2024-01-01\0\r\n");
        assert_eq!(lines, vec!["profit,time", "10.5,2024-01-01"]);
    }

    #[test]
    fn drops_blank_and_whitespace_lines() {
        let lines = normalize_lines("a\n\n   \n\tb\t\n");
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines("\r\n\r\n").is_empty());
    }
}
