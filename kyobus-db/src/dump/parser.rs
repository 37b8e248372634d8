use crate::error::{load_failed, DbError};

const PARSE_CONTEXT: &str = "splitting dump statements";

/// splits dump text into individual SQL statements, preserving file order.
///
/// `;` only terminates a statement outside string literals. quote handling
/// covers the two literal shapes `pg_dump --inserts` can emit: standard
/// single-quoted strings (embedded quotes doubled, so a close-then-open pair
/// reads as one escaped quote) and `E'...'` strings with backslash escapes.
/// `--` line comments and blank lines are dropped.
pub fn split_statements(text: &str) -> Result<Vec<String>, DbError> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    let mut in_literal = false;
    let mut backslash_escapes = false;

    while let Some(c) = chars.next() {
        if in_literal {
            current.push(c);
            if backslash_escapes && c == '\\' {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
                continue;
            }
            if c == '\'' {
                in_literal = false;
            }
            continue;
        }
        match c {
            '\'' => {
                // an identifier cannot end in a bare E directly before a
                // quote, so this detects the E'...' escape-string prefix
                backslash_escapes =
                    current.ends_with('E') || current.ends_with('e');
                in_literal = true;
                current.push(c);
            }
            '-' if chars.peek() == Some(&'-') => {
                for comment_char in chars.by_ref() {
                    if comment_char == '\n' {
                        break;
                    }
                }
                current.push(' ');
            }
            ';' => {
                let statement = current.trim();
                if !statement.is_empty() {
                    statements.push(statement.to_string());
                }
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if in_literal {
        return Err(load_failed(
            PARSE_CONTEXT,
            "dump ends inside an unterminated string literal",
        ));
    }
    if !current.trim().is_empty() {
        return Err(load_failed(
            PARSE_CONTEXT,
            format!(
                "dump ends with an unterminated statement: '{}'",
                truncate_for_message(current.trim())
            ),
        ));
    }

    Ok(statements)
}

fn truncate_for_message(statement: &str) -> String {
    const LIMIT: usize = 80;
    if statement.chars().count() <= LIMIT {
        statement.to_string()
    } else {
        let head: String = statement.chars().take(LIMIT).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dump_has_zero_statements() {
        assert!(split_statements("").unwrap().is_empty());
        assert!(split_statements("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines_are_dropped() {
        let text = "-- PostgreSQL database dump\n--\n\nINSERT INTO stops (id) VALUES (1);\n";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements, vec!["INSERT INTO stops (id) VALUES (1)"]);
    }

    #[test]
    fn test_semicolon_inside_literal_does_not_split() {
        let text = "INSERT INTO stops (id, name) VALUES (1, 'a;b');";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("'a;b'"));
    }

    #[test]
    fn test_doubled_quote_escape() {
        let text = "INSERT INTO stops (id, name) VALUES (1, 'Gion''s corner; east');";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].ends_with("'Gion''s corner; east')"));
    }

    #[test]
    fn test_escape_string_with_backslash_quote() {
        let text = r"INSERT INTO notes (body) VALUES (E'it\'s; fine');";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains(r"E'it\'s; fine'"));
    }

    #[test]
    fn test_statement_spanning_multiple_lines() {
        let text = "INSERT INTO stops\n  (id, name)\nVALUES\n  (1, 'Kyoto Station');\n";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].starts_with("INSERT INTO stops"));
    }

    #[test]
    fn test_statements_keep_file_order() {
        let text = "SET client_encoding = 'UTF8';\nINSERT INTO a (x) VALUES (1);\nINSERT INTO a (x) VALUES (2);\n";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements.len(), 3);
        assert!(statements[0].starts_with("SET"));
        assert!(statements[1].ends_with("(1)"));
        assert!(statements[2].ends_with("(2)"));
    }

    #[test]
    fn test_comment_between_tokens_acts_as_whitespace() {
        let text = "INSERT INTO a (x) -- trailing note\nVALUES (1);";
        let statements = split_statements(text).unwrap();
        assert_eq!(statements.len(), 1);
        assert!(statements[0].contains("VALUES (1)"));
        assert!(!statements[0].contains("trailing note"));
    }

    #[test]
    fn test_unterminated_statement_is_rejected() {
        let result = split_statements("INSERT INTO stops (id) VALUES (1)");
        assert!(matches!(result, Err(DbError::LoadFailed { .. })));
    }

    #[test]
    fn test_unterminated_literal_is_rejected() {
        let result = split_statements("INSERT INTO stops (name) VALUES ('oops;");
        assert!(matches!(result, Err(DbError::LoadFailed { .. })));
    }
}
