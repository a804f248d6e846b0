// src/core/decode.rs
use encoding_rs::{Encoding, GBK, UTF_8};
use log::debug;

use crate::error::WordTallyError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodings tried in order when turning file bytes into text.
#[inline]
#[must_use]
pub fn fallback_chain() -> [&'static Encoding; 2] {
    [UTF_8, GBK]
}

/// Decodes file bytes as UTF-8, falling back to GBK.
///
/// Both attempts are strict: malformed input is never patched with
/// replacement characters. A leading UTF-8 byte order mark is dropped.
///
/// # Errors
///
/// Returns [`WordTallyError::Decode`] when the bytes are valid under
/// neither encoding.
#[inline]
pub fn decode_text(bytes: &[u8]) -> Result<String, WordTallyError> {
    let without_bom = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(without_bom) {
        debug!("decoded {} bytes as {}", bytes.len(), UTF_8.name());
        return Ok(text.into_owned());
    }
    debug!("{} bytes are not valid {}", bytes.len(), UTF_8.name());

    if let Some(text) = decode_strict_gbk(bytes) {
        debug!("decoded {} bytes as {}", bytes.len(), GBK.name());
        return Ok(text);
    }
    debug!("{} bytes are not valid {}", bytes.len(), GBK.name());

    Err(WordTallyError::Decode {
        len: bytes.len(),
        attempted: fallback_chain().iter().map(|encoding| encoding.name()).collect(),
    })
}

/// The `GBK` decoder of `encoding_rs` is a full GB18030 decoder. Plain GBK
/// has no four-byte sequences and no single-byte euro sign (`0x80`), so the
/// decoded text must encode back to exactly the same bytes and must not
/// contain a euro sign.
fn decode_strict_gbk(bytes: &[u8]) -> Option<String> {
    let text = GBK.decode_without_bom_handling_and_without_replacement(bytes)?;
    if text.contains('\u{20AC}') {
        return None;
    }

    let round_trips = {
        let (encoded, _, had_unmappable) = GBK.encode(&text);
        !had_unmappable && encoded.as_ref() == bytes
    };
    round_trips.then(|| text.into_owned())
}
