use crate::domain::BookId;

use super::error::FormatError;

/// Parse a book ID typed by the user
pub fn parse_book_id(raw: &str) -> Result<BookId, FormatError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map(BookId::new)
        .map_err(|_| FormatError {
            input: trimmed.to_string(),
        })
}

/// Strip the line terminator left by `read_line`
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_id() {
        assert_eq!(parse_book_id("12"), Ok(BookId::new(12)));
        assert_eq!(parse_book_id("  7 "), Ok(BookId::new(7)));
        assert_eq!(parse_book_id("-1"), Ok(BookId::new(-1)));
    }

    #[test]
    fn test_parse_book_id_rejects_non_numeric() {
        assert_eq!(
            parse_book_id("abc"),
            Err(FormatError {
                input: "abc".to_string()
            })
        );
        assert!(parse_book_id("").is_err());
        assert!(parse_book_id("1e3").is_err());
        assert!(parse_book_id("1.5").is_err());
    }

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("Dune\n"), "Dune");
        assert_eq!(strip_line_ending("Dune\r\n"), "Dune");
        assert_eq!(strip_line_ending(" Dune "), " Dune ");
    }
}
