//! Shared proptest strategies for unit tests.

use proptest::prelude::*;

/// Text the default String pipeline leaves unchanged: ASCII words joined by
/// single spaces, nothing to trim, strip, collapse or encode.
pub(crate) fn arb_plain_text(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9.,:!?()-]{1,8}", 1..=max_words.max(1))
        .prop_map(|words| words.join(" "))
}

/// Arbitrary text without `&` or `<`, the two characters whose cleaning
/// depends on what follows them.
pub(crate) fn arb_markup_free_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            8 => prop::char::range('a', 'z'),
            2 => Just(' '),
            1 => Just('\t'),
            1 => Just('\n'),
            1 => Just('\r'),
            1 => Just('>'),
            1 => Just('"'),
            1 => Just('\''),
            1 => Just('é'),
            1 => Just('日'),
        ],
        0..=max_len,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Text as a browser might submit it: markup, references in every form,
/// stray `<`, `&` and `;`, carriage returns and non-ASCII characters.
pub(crate) fn arb_form_text(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            6 => "[a-z ]",
            1 => prop::sample::select(vec![
                "&", ";", "#", "<", ">", "/", "!--", "-->", "'", "\"", "\t", "\n", "\r",
                "&amp;", "&lt;", "&gt;", "&#039;", "&#32;", "&#x3C;", "&eacute;", "&bogus;",
                "<b>", "</b>", "<!-- c -->", "< ", "é", "日",
            ])
            .prop_map(String::from),
        ],
        0..=max_len,
    )
    .prop_map(|parts| parts.concat())
}
