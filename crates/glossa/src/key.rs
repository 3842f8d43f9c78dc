//! Composite catalog key building.

use std::borrow::Cow;

/// Separator joining a disambiguation context and a source phrase into one
/// catalog key, matching the po2json compiled-catalog convention
/// (ASCII "end of transmission").
pub const GLUE: char = '\u{0004}';

/// Build the composite lookup key for a phrase.
///
/// Returns the phrase alone when no context is given; otherwise
/// `context + glue + phrase`. Contexts must not themselves contain the
/// glue character (caller responsibility, not validated here).
pub fn build_key<'a>(context: Option<&str>, phrase: &'a str, glue: char) -> Cow<'a, str> {
    match context {
        Some(context) if !context.is_empty() => {
            let mut key = String::with_capacity(context.len() + glue.len_utf8() + phrase.len());
            key.push_str(context);
            key.push(glue);
            key.push_str(phrase);
            Cow::Owned(key)
        }
        _ => Cow::Borrowed(phrase),
    }
}
