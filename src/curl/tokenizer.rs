//! Shell-like tokenizer for curl command lines
//!
//! Splits a raw command string on whitespace while honoring single and double
//! quotes. This is deliberately not a shell: there is no escape processing,
//! no expansion and no error for an unterminated quote.

/// Split a command line into tokens.
///
/// - Whitespace outside quotes separates tokens; runs of whitespace never
///   produce empty tokens.
/// - `'` or `"` outside quotes opens a quoted span. The quote characters are
///   not part of the token.
/// - The matching closing quote always ends the token, even when more
///   characters follow without a space, so `'a''b'` yields `a` and `b`.
///   An explicitly empty quoted span (`''`) yields an empty token.
/// - The other quote character inside a quoted span is literal content.
/// - Whatever is left at end of input is emitted, quoted or not.
///
/// # Examples
/// ```
/// use curl2retrofit::curl::tokenize;
/// assert_eq!(tokenize("curl 'a b' c"), vec!["curl", "a b", "c"]);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in raw.chars() {
        match (quote, c) {
            (None, c) if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            (None, '\'' | '"') => {
                quote = Some(c);
            }
            (Some(q), c) if c == q => {
                quote = None;
                tokens.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
