/// Replaces every space with `+` for use in the lookup query string.
///
/// Nothing else is escaped or case-folded.
pub fn format_word(word: &str) -> String {
    word.replace(' ', "+")
}
