//! Front-matter templating and field edits

use std::ops::Range;

use chrono::NaiveDate;
use regex_lite::Regex;

/// Fence delimiting a front-matter block.
const FENCE: &str = "---";

/// Render the front matter written into newly created files.
///
/// Posts carry a `date:` field in addition to the title; drafts, pages and
/// collection files get the title alone. A blank line follows the closing
/// fence so the body starts cleanly.
pub fn render(title: &str, date: Option<NaiveDate>) -> String {
    let mut out = String::new();
    out.push_str(FENCE);
    out.push('\n');
    out.push_str(&format!("title: {}\n", yaml_value(title)));
    if let Some(date) = date {
        out.push_str(&format!("date: {}\n", date.format("%Y-%m-%d")));
    }
    out.push_str(FENCE);
    out.push_str("\n\n");
    out
}

/// Extract the `title:` field from the front-matter block.
///
/// Surrounding quotes are stripped. Returns `None` when the content has no
/// front-matter block or the block has no title line.
pub fn extract_title(content: &str) -> Option<String> {
    let range = block_range(content)?;
    let re = Regex::new(r"^title:\s*(.+)$").unwrap();

    for line in content[range].lines() {
        let Some(captures) = re.captures(line) else {
            continue;
        };
        if let Some(m) = captures.get(1) {
            let title = m.as_str().trim().trim_matches(|c| c == '"' || c == '\'');
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }
    }

    None
}

/// Insert or update the `date:` field of the front-matter block.
///
/// An existing `date:` line is rewritten in place; otherwise the field is
/// inserted directly after the opening fence. Content without a front-matter
/// block is returned unchanged.
pub fn set_date(content: &str, date: NaiveDate) -> String {
    let Some(range) = block_range(content) else {
        return content.to_owned();
    };

    let date_line = format!("date: {}\n", date.format("%Y-%m-%d"));
    let block = &content[range.clone()];
    let mut rewritten = String::with_capacity(block.len() + date_line.len());
    let mut replaced = false;

    for line in block.split_inclusive('\n') {
        if !replaced && line.starts_with("date:") {
            rewritten.push_str(&date_line);
            replaced = true;
        } else {
            rewritten.push_str(line);
        }
    }

    if !replaced {
        rewritten.insert_str(0, &date_line);
    }

    splice_block(content, &range, &rewritten)
}

/// Remove the `date:` field from the front-matter block.
///
/// Only the first `date:` line inside the block is removed; a `date:` in the
/// body is left alone. Content without a block or without the field is
/// returned unchanged.
pub fn strip_date(content: &str) -> String {
    let Some(range) = block_range(content) else {
        return content.to_owned();
    };

    let block = &content[range.clone()];
    let mut rewritten = String::with_capacity(block.len());
    let mut removed = false;

    for line in block.split_inclusive('\n') {
        if !removed && line.starts_with("date:") {
            removed = true;
            continue;
        }
        rewritten.push_str(line);
    }

    splice_block(content, &range, &rewritten)
}

/// Content after the front-matter block, for rendering.
pub fn body(content: &str) -> &str {
    let Some(range) = block_range(content) else {
        return content;
    };

    // Skip the closing fence line itself, then any blank lines before the body.
    let after = &content[range.end..];
    match after.find('\n') {
        Some(idx) => after[idx + 1..].trim_start_matches(['\r', '\n']),
        None => "",
    }
}

/// Byte range of the field lines between the opening and closing fences.
///
/// `None` when the content does not begin with a front-matter block or the
/// closing fence is missing.
fn block_range(content: &str) -> Option<Range<usize>> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Some(start..offset);
        }
        offset += line.len();
    }

    None
}

/// Replace the field lines of the block, keeping everything around them.
fn splice_block(content: &str, range: &Range<usize>, block: &str) -> String {
    let mut out = String::with_capacity(content.len() + block.len());
    out.push_str(&content[..range.start]);
    out.push_str(block);
    out.push_str(&content[range.end..]);
    out
}

/// Write a title as a YAML scalar, double-quoting it when the bare form
/// would change its meaning.
fn yaml_value(title: &str) -> String {
    let needs_quotes = title.is_empty()
        || title.starts_with(char::is_whitespace)
        || title.ends_with(char::is_whitespace)
        || title.contains(": ")
        || title.ends_with(':')
        || title.contains(" #")
        || title.contains('"')
        || title.contains('\\')
        || title.starts_with([
            '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%',
            '@', '`',
        ]);

    if !needs_quotes {
        return title.to_owned();
    }

    let mut quoted = String::with_capacity(title.len() + 2);
    quoted.push('"');
    for ch in title.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_render_post() {
        let expected = "---\ntitle: My Awesome Post\ndate: 2025-07-12\n---\n\n";
        assert_eq!(render("My Awesome Post", Some(date("2025-07-12"))), expected);
    }

    #[test]
    fn test_render_without_date() {
        assert_eq!(render("About", None), "---\ntitle: About\n---\n\n");
    }

    #[test]
    fn test_render_quotes_tricky_titles() {
        assert_eq!(
            render("Dev: Diary #1", None),
            "---\ntitle: \"Dev: Diary #1\"\n---\n\n"
        );
        assert_eq!(
            render("She said \"hi\"", None),
            "---\ntitle: \"She said \\\"hi\\\"\"\n---\n\n"
        );
        assert_eq!(render("- leading dash", None), "---\ntitle: \"- leading dash\"\n---\n\n");
    }

    #[test]
    fn test_extract_title() {
        let content = "---\ntitle: Hello World\ndate: 2025-01-01\n---\n\nBody\n";
        assert_eq!(extract_title(content), Some("Hello World".to_string()));
    }

    #[test]
    fn test_extract_title_strips_quotes() {
        let content = "---\ntitle: \"Quoted Title\"\n---\n";
        assert_eq!(extract_title(content), Some("Quoted Title".to_string()));
        let content = "---\ntitle: 'Single'\n---\n";
        assert_eq!(extract_title(content), Some("Single".to_string()));
    }

    #[test]
    fn test_extract_title_ignores_body_lines() {
        let content = "No front matter here\ntitle: Not Me\n";
        assert_eq!(extract_title(content), None);
        let content = "---\nlayout: post\n---\n\ntitle: In Body\n";
        assert_eq!(extract_title(content), None);
    }

    #[test]
    fn test_set_date_inserts_after_fence() {
        let content = "---\ntitle: Draft\n---\n\nBody\n";
        let expected = "---\ndate: 2025-07-12\ntitle: Draft\n---\n\nBody\n";
        assert_eq!(set_date(content, date("2025-07-12")), expected);
    }

    #[test]
    fn test_set_date_updates_existing() {
        let content = "---\ntitle: Draft\ndate: 2020-01-01\n---\n\nBody\n";
        let expected = "---\ntitle: Draft\ndate: 2025-07-12\n---\n\nBody\n";
        assert_eq!(set_date(content, date("2025-07-12")), expected);
    }

    #[test]
    fn test_set_date_without_block_is_noop() {
        let content = "Just a body, no fences.\n";
        assert_eq!(set_date(content, date("2025-07-12")), content);
    }

    #[test]
    fn test_strip_date_only_touches_block() {
        let content = "---\ntitle: Post\ndate: 2025-07-12\n---\n\ndate: in body\n";
        let expected = "---\ntitle: Post\n---\n\ndate: in body\n";
        assert_eq!(strip_date(content), expected);
    }

    #[test]
    fn test_strip_date_without_field_is_noop() {
        let content = "---\ntitle: Post\n---\n\nBody\n";
        assert_eq!(strip_date(content), content);
    }

    #[test]
    fn test_set_then_strip_round_trips() {
        let content = "---\ntitle: Draft\nlayout: post\n---\n\nSome body text.\n";
        let published = set_date(content, date("2025-07-12"));
        assert_eq!(strip_date(&published), content);
    }

    #[test]
    fn test_body_skips_front_matter() {
        let content = "---\ntitle: Post\n---\n\n# Heading\n";
        assert_eq!(body(content), "# Heading\n");
        assert_eq!(body("no fences\n"), "no fences\n");
    }

    #[test]
    fn test_unterminated_block_is_left_alone() {
        let content = "---\ntitle: Broken\n\nBody without closing fence\n";
        assert_eq!(extract_title(content), None);
        assert_eq!(strip_date(content), content);
        assert_eq!(body(content), content);
    }
}
