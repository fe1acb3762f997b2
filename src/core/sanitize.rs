// src/core/sanitize.rs

/// Concatenated text nodes of an element with the surrounding whitespace
/// trimmed. Whitespace inside the text is left alone.
pub fn element_text(el: scraper::ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
