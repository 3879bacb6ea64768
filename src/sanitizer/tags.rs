//! Markup tag removal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    Tag { quote: Option<char> },
    Comment,
}

/// Removes markup tags, comments and processing instructions, keeping text.
///
/// A `<` followed by whitespace, or ending the input, is ordinary text.
/// Carriage returns after the `<` are skipped when deciding, since whitespace
/// collapsing removes them later. Inside a tag, a `>` within a quoted
/// attribute value does not close the tag. An unterminated tag or comment
/// swallows the rest of the input.
pub(crate) fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = State::Text;
    let mut chars = text.char_indices();

    while let Some((i, c)) = chars.next() {
        match state {
            State::Text => {
                if c != '<' {
                    out.push(c);
                } else if opens_nothing(&text[i + 1..]) {
                    out.push('<');
                } else if text[i + 1..].starts_with("!--") {
                    chars.nth(2);
                    state = State::Comment;
                } else {
                    state = State::Tag { quote: None };
                }
            }
            State::Tag { quote: Some(q) } => {
                if c == q {
                    state = State::Tag { quote: None };
                }
            }
            State::Tag { quote: None } => match c {
                '"' | '\'' => state = State::Tag { quote: Some(c) },
                '>' => state = State::Text,
                _ => {}
            },
            State::Comment => {
                if text[i..].starts_with("-->") {
                    chars.nth(1);
                    state = State::Text;
                }
            }
        }
    }
    out
}

fn opens_nothing(after: &str) -> bool {
    after
        .chars()
        .find(|&c| c != '\r')
        .map_or(true, char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_tags_keeps_text() {
        assert_eq!(strip("<b>bold</b> and <i>italic</i>"), "bold and italic");
        assert_eq!(strip("<script>alert(1)</script>"), "alert(1)");
        assert_eq!(strip("<br/>line"), "line");
    }

    #[test]
    fn quoted_gt_does_not_close_tag() {
        assert_eq!(strip(r#"<a title="x > y">link</a>"#), "link");
        assert_eq!(strip("<a title='>'>link</a>"), "link");
    }

    #[test]
    fn removes_comments_and_instructions() {
        assert_eq!(strip("a<!-- <b>hidden</b> -->b"), "ab");
        assert_eq!(strip("a<?php echo 1; ?>b"), "ab");
    }

    #[test]
    fn lone_lt_before_space_is_text() {
        assert_eq!(strip("1 < 2"), "1 < 2");
        assert_eq!(strip("a <\nb"), "a <\nb");
    }

    #[test]
    fn unterminated_tag_drops_rest() {
        assert_eq!(strip("keep<drop"), "keep");
        assert_eq!(strip("keep<!-- never closed"), "keep");
    }

    #[test]
    fn trailing_lt_is_text() {
        assert_eq!(strip("keep<"), "keep<");
        assert_eq!(strip("a <\r"), "a <\r");
    }

    #[test]
    fn carriage_return_does_not_hide_a_tag() {
        assert_eq!(strip("a<\rb>c"), "ac");
        assert_eq!(strip("a<\r\nb"), "a<\r\nb");
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(strip("no markup here > really"), "no markup here > really");
        assert_eq!(strip("Grüße 🌍"), "Grüße 🌍");
    }
}
