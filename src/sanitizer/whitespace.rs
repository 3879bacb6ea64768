//! Whitespace normalization.

/// Normalizes whitespace in four passes, in this order:
///
/// 1. carriage returns are removed
/// 2. tabs become single spaces
/// 3. runs of newlines become one newline
/// 4. runs of spaces become one space
///
/// Other whitespace (form feeds, non-breaking spaces) is left alone.
pub(crate) fn collapse(text: &str) -> String {
    let text = text.replace('\r', "");
    let text = text.replace('\t', " ");
    let text = collapse_runs(&text, '\n');
    collapse_runs(&text, ' ')
}

fn collapse_runs(text: &str, target: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous = None;
    for c in text.chars() {
        if c == target && previous == Some(target) {
            continue;
        }
        out.push(c);
        previous = Some(c);
    }
    out
}
