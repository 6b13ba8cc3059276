use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Wrap text to fit within specified width, breaking at word boundaries
///
/// Widths are measured in terminal columns, so wide characters count double.
///
/// # Examples
/// ```
/// use folio_core::utils::text::wrap_text;
/// let text = "This is a long text that needs wrapping";
/// let wrapped = wrap_text(text, 10);
/// assert_eq!(wrapped[0], "This is a");
/// ```
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current_line = String::with_capacity(max_width);
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        if word_width <= max_width {
            current_line.push_str(word);
            current_width = word_width;
            continue;
        }

        // Single word wider than a line: hard-break it
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > max_width && current_width > 0 {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            current_line.push(ch);
            current_width += ch_width;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

/// Wrap text that may contain explicit line breaks; blank lines are kept.
pub fn wrap_paragraphs(text: &str, max_width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|paragraph| wrap_text(paragraph, max_width))
        .collect()
}

/// Truncate text to `max_width` columns, ending with an ellipsis when cut.
pub fn truncate_text(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.width();

    if max_width <= ellipsis_width {
        return ELLIPSIS[..max_width].to_string();
    }

    let target_width = max_width - ellipsis_width;
    let mut result = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }

    result.push_str(ELLIPSIS);
    result
}
