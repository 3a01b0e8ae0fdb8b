/// Splits one line of comma-delimited text into trimmed field values.
///
/// Double quotes enclose a field and may contain literal commas; a doubled
/// quote inside a quoted field is a single literal quote. An unterminated
/// quote is tolerated: end of line always emits the final field. This never
/// fails — the worst input still yields a best-effort field sequence.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote, stays literal.
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_owned());
    fields
}

#[cfg(test)]
mod tests {
    use super::split_fields;

    #[test]
    fn plain_fields_are_split_and_trimmed() {
        assert_eq!(
            split_fields("Jane, Austen ,Pride and Prejudice"),
            vec!["Jane", "Austen", "Pride and Prejudice"]
        );
    }

    #[test]
    fn quoted_field_keeps_embedded_comma() {
        assert_eq!(split_fields(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn doubled_quote_becomes_literal_quote() {
        assert_eq!(split_fields(r#"a,"b""c",d"#), vec!["a", "b\"c", "d"]);
    }

    #[test]
    fn consecutive_delimiters_yield_empty_fields() {
        assert_eq!(split_fields("a,,b,"), vec!["a", "", "b", ""]);
    }

    #[test]
    fn empty_line_yields_one_empty_field() {
        assert_eq!(split_fields(""), vec![""]);
    }

    #[test]
    fn unterminated_quote_is_tolerated() {
        assert_eq!(split_fields(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn tokenizing_is_idempotent_per_line() {
        let line = r#"Unknown,"Home Design: Volume 1",Magazines,English"#;
        assert_eq!(split_fields(line), split_fields(line));
    }

    #[test]
    fn round_trips_fields_without_delimiters_or_quotes() {
        let fields = ["Jane", "Austen", "Persuasion", "Fiction"];
        let joined = fields.join(",");
        assert_eq!(split_fields(&joined), fields);
    }
}
