// Text and number formatters
//
// Shared formatting utilities for the page renderer.

use unicode_width::UnicodeWidthStr;

/// Format a large number with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Greedy word wrap to `width` display columns
///
/// Words wider than a whole line are split by character. Always returns at
/// least one (possibly empty) line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word.width() <= width {
            current.push_str(word);
            continue;
        }
        for ch in word.chars() {
            if current.width() + ch.to_string().width() > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// First `chars` characters spread over pre-wrapped `lines`
///
/// Lines keep their count so typed text never reflows the page.
pub fn reveal_lines(lines: &[String], mut chars: usize) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let take = line.chars().count().min(chars);
            chars -= take;
            line.chars().take(take).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(3214), "3,214");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(
            wrap_text("scroll aware navigation bar", 12),
            vec!["scroll aware", "navigation", "bar"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
        assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_reveal_lines_keeps_line_count() {
        let lines = vec!["Bassa Naga".to_string(), "Jala".to_string()];
        assert_eq!(reveal_lines(&lines, 0), vec!["", ""]);
        assert_eq!(reveal_lines(&lines, 4), vec!["Bass", ""]);
        assert_eq!(reveal_lines(&lines, 12), vec!["Bassa Naga", "Ja"]);
        assert_eq!(reveal_lines(&lines, 100), lines);
    }
}
