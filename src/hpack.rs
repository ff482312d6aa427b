//! HPACK: Header Compression for HTTP/2 (RFC 7541)
//!
//! Thin wrapper around `fluke-hpack` that speaks [`HeaderList`]/[`HeaderField`].
//! Decoded fields are checked against the header grammar and have their values
//! trimmed on the way in; credential fields (`authorization`, `proxy-authorization`,
//! `cookie`) come out marked sensitive. On the way out, fields marked sensitive are written as
//! "literal never indexed" so they stay out of every dynamic table along the path.

use tracing::trace;

use crate::error::HeaderError;
use crate::field_check::check_field;
use crate::header::{HeaderField, HeaderList};

/// HPACK decoder for HTTP/2 header blocks.
/// Wraps `fluke_hpack::Decoder` which maintains dynamic table state per-connection.
pub struct HpackDecoder {
    inner: fluke_hpack::Decoder<'static>,
}

impl std::fmt::Debug for HpackDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpackDecoder").finish()
    }
}

impl Default for HpackDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HpackDecoder {
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Decoder::new(),
        }
    }

    /// Decode an HPACK-encoded header block into a header list.
    ///
    /// Fails on a malformed block or on the first field with an illegal name or value.
    pub fn decode(&mut self, data: &[u8]) -> Result<HeaderList, HeaderError> {
        let pairs = self.inner.decode(data).map_err(|e| HeaderError::hpack(format!("{e:?}")))?;
        let mut headers = HeaderList::with_capacity(pairs.len());
        for (name, value) in pairs {
            check_field(&name, &value)?;
            let sensitive = is_credential(&name);
            headers.add_header(name, value, sensitive);
        }
        Ok(headers)
    }
}

/// Names whose values must stay out of shared compression state once decoded.
fn is_credential(name: &[u8]) -> bool {
    matches!(name, b"authorization" | b"proxy-authorization" | b"cookie")
}

/// HPACK encoder for HTTP/2 header blocks.
/// Wraps `fluke_hpack::Encoder` which maintains dynamic table state per-connection.
pub struct HpackEncoder {
    inner: fluke_hpack::Encoder<'static>,
}

impl std::fmt::Debug for HpackEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HpackEncoder").finish()
    }
}

impl Default for HpackEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl HpackEncoder {
    pub fn new() -> Self {
        Self {
            inner: fluke_hpack::Encoder::new(),
        }
    }

    /// Encode fields into an HPACK header block, preserving their order.
    pub fn encode(&mut self, headers: &[HeaderField]) -> Vec<u8> {
        let mut block = Vec::new();
        // Consecutive non-sensitive fields go through the inner encoder in one call
        for run in headers.split_inclusive(|h| h.sensitive) {
            let (plain, sensitive) = match run.split_last() {
                Some((last, rest)) if last.sensitive => (rest, Some(last)),
                _ => (run, None),
            };
            if !plain.is_empty() {
                let pairs: Vec<(&[u8], &[u8])> = plain
                    .iter()
                    .map(|h| (&h.name[..], &h.value[..]))
                    .collect();
                block.extend_from_slice(&self.inner.encode(pairs));
            }
            if let Some(field) = sensitive {
                trace!(name = ?field.name, "encoding never-indexed field");
                encode_never_indexed(&mut block, field);
            }
        }
        block
    }
}

/// Literal header field never indexed, new name (RFC 7541 Section 6.2.3).
fn encode_never_indexed(dst: &mut Vec<u8>, field: &HeaderField) {
    dst.push(0x10);
    encode_string(dst, &field.name);
    encode_string(dst, &field.value);
}

/// String literal without Huffman coding.
fn encode_string(dst: &mut Vec<u8>, s: &[u8]) {
    encode_integer(dst, s.len(), 7, 0x00);
    dst.extend_from_slice(s);
}

/// Integer with an N-bit prefix (RFC 7541 Section 5.1).
fn encode_integer(dst: &mut Vec<u8>, mut value: usize, prefix_bits: u8, first_byte: u8) {
    let max_prefix = (1usize << prefix_bits) - 1;
    if value < max_prefix {
        dst.push(first_byte | value as u8);
        return;
    }
    dst.push(first_byte | max_prefix as u8);
    value -= max_prefix;
    while value >= 128 {
        dst.push((value % 128) as u8 | 0x80);
        value /= 128;
    }
    dst.push(value as u8);
}

// ============================================================================
// Tests
// ============================================================================
