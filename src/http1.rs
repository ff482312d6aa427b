//! HTTP/1.1 header block rendering for fields coming from an HTTP/2 message.

use bytes::{BufMut, BytesMut};

use crate::header::HeaderList;
use crate::hop_by_hop::admit_http1_egress;

/// Append every field admissible toward an HTTP/1.1 peer as
/// `Name: value\r\n`, with the name re-cased (`content-type` → `Content-Type`).
///
/// The terminating empty line is left to the caller, which usually appends its
/// own framing headers first.
pub fn build_http1_headers(dst: &mut BytesMut, headers: &HeaderList) {
    for field in headers {
        if !admit_http1_egress(&field.name) {
            continue;
        }
        dst.reserve(field.name.len() + field.value.len() + 4);
        put_capitalized(dst, &field.name);
        dst.put_slice(b": ");
        dst.put_slice(&field.value);
        dst.put_slice(b"\r\n");
    }
}

/// Uppercase the first byte and every byte following `-`, lowercase the rest.
pub fn put_capitalized(dst: &mut BytesMut, name: &[u8]) {
    let mut upper = true;
    for &b in name {
        dst.put_u8(if upper {
            b.to_ascii_uppercase()
        } else {
            b.to_ascii_lowercase()
        });
        upper = b == b'-';
    }
}
