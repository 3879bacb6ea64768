//! Charset normalization.

use encoding_rs::{Encoder, EncoderResult, Encoding, UTF_8};

/// Stands in for characters the target charset cannot represent.
pub(crate) const PLACEHOLDER: &str = "?";

/// Restricts `text` to the characters `charset` can represent.
///
/// The text is encoded into `charset` with every unmappable character
/// replaced by [`PLACEHOLDER`], then decoded back. Charsets whose output
/// encoding is UTF-8 represent every character, so the text is returned as is.
pub(crate) fn normalize(text: &str, charset: &'static Encoding) -> String {
    if charset.output_encoding() == UTF_8 {
        return text.to_string();
    }

    let mut encoder = charset.new_encoder();
    let mut bytes = Vec::new();
    let mut rest = text;

    loop {
        reserve_for(&encoder, &mut bytes, rest.len());
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(rest, &mut bytes, true);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => {
                reserve_for(&encoder, &mut bytes, PLACEHOLDER.len());
                // The placeholder is ASCII and maps in every non-UTF charset.
                let _ = encoder.encode_from_utf8_to_vec_without_replacement(
                    PLACEHOLDER,
                    &mut bytes,
                    false,
                );
            }
        }
    }

    let (decoded, _) = charset.decode_without_bom_handling(&bytes);
    decoded.into_owned()
}

fn reserve_for(encoder: &Encoder, bytes: &mut Vec<u8>, len: usize) {
    let needed = encoder
        .max_buffer_length_from_utf8_without_replacement(len)
        .unwrap_or(len.saturating_mul(4).saturating_add(16));
    bytes.reserve(needed);
}
