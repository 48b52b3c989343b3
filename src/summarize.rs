pub const NO_DESCRIPTION: &str = "No description provided.";
/// Characters kept when the body has no usable first sentence.
pub const PREVIEW_CHARS: usize = 220;

/// Reduces an issue body to a one-line preview.
///
/// Returns the first sentence (through its period) when there is one with some text
/// before the period, otherwise the first [`PREVIEW_CHARS`] characters. Whitespace runs,
/// newlines included, collapse to single spaces. Blank input yields [`NO_DESCRIPTION`].
pub fn summarize(text: &str) -> String {
    if text.trim().is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    if let Some(idx) = text.find('.') {
        if !text[..idx].trim().is_empty() {
            return single_line(&text[..=idx]);
        }
    }

    let preview = single_line(&first_chars(text));
    if preview.is_empty() {
        // Leading whitespace filled the whole window.
        return single_line(&first_chars(text.trim_start()));
    }
    preview
}

fn first_chars(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
