//! Field joiner
//!
//! Banks deliver some text fields (remote name, purpose) as several lines.
//! The joiner collapses them into one string.

/// Join multi-line text fragments into one string
///
/// Non-empty fragments are concatenated in order with no separator, so
/// `["ACME", "Corp"]` becomes `"ACMECorp"`. Whitespace-only fragments count as
/// content and are kept verbatim.
///
/// Returns `None` when there is nothing to join: an empty sequence, or one made
/// only of empty fragments.
pub fn join_fields<I, S>(fragments: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .fold(None, |acc: Option<String>, fragment| {
            let fragment = fragment.as_ref();
            if fragment.is_empty() {
                return acc;
            }
            let mut joined = acc.unwrap_or_default();
            joined.push_str(fragment);
            Some(joined)
        })
}
