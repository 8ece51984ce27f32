//! Line tokenizers for tabular files.
//!
//! Two deliberately different splitters live here:
//!
//! - [`split_quoted`] understands a minimal quoting convention and is used
//!   when re-displaying files the tool generated itself.
//! - [`split_plain`] treats every comma as a delimiter and is used for bulk
//!   echoing of arbitrary CSV input.
//!
//! Neither is an RFC 4180 parser. There is no escape for embedded quotes,
//! and malformed quoting never errors; it degrades to literal text.

/// Split a line into fields, honoring quotes at field edges.
///
/// A `"` opens a quoted field only when it is the first character of the
/// field, and closes it only when followed by `,` or the end of the line.
/// Both edge quotes are dropped. Any other `"` is kept as a literal
/// character. The last field is always emitted, so an empty line yields a
/// single empty field.
///
/// # Example
///
/// ```
/// use stepflow::steps::tokenizer::split_quoted;
///
/// assert_eq!(split_quoted(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
/// assert_eq!(split_quoted(r#"5" screen,ok"#), vec![r#"5" screen"#, "ok"]);
/// ```
pub fn split_quoted(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes && field.is_empty() => in_quotes = true,
            '"' if in_quotes && matches!(chars.peek(), None | Some(',')) => in_quotes = false,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}

/// Split a line on every comma, with no quote handling.
///
/// # Example
///
/// ```
/// use stepflow::steps::tokenizer::split_plain;
///
/// assert_eq!(split_plain(r#"a,"b,c""#), vec!["a", "\"b", "c\""]);
/// ```
pub fn split_plain(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}
