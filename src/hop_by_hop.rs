//! Hop-by-hop filtering for protocol translation.
//!
//! Two drop-lists, one per egress direction. Pseudo-headers and empty names are
//! never copied as regular fields in either direction. `transfer-encoding` is only
//! dropped toward HTTP/2: an HTTP/1.1 peer may need its own framing header.

use tracing::trace;

use crate::header::HeaderList;
use crate::token::Token;

/// Whether a field with this name may be forwarded to an HTTP/2 peer.
pub fn admit_http2_egress(name: &[u8]) -> bool {
    if is_pseudo_or_empty(name) {
        return false;
    }
    !matches!(
        Token::lookup(name),
        Some(
            Token::Cookie
                | Token::Connection
                | Token::Http2Settings
                | Token::KeepAlive
                | Token::ProxyConnection
                | Token::Server
                | Token::Trailer
                | Token::TransferEncoding
                | Token::Upgrade
                | Token::Via
                | Token::XForwardedFor
                | Token::XForwardedProto
        )
    )
}

/// Whether a field with this name may be forwarded to an HTTP/1.1 peer.
pub fn admit_http1_egress(name: &[u8]) -> bool {
    if is_pseudo_or_empty(name) {
        return false;
    }
    !matches!(
        Token::lookup(name),
        Some(
            Token::Connection
                | Token::Cookie
                | Token::Http2Settings
                | Token::KeepAlive
                | Token::ProxyConnection
                | Token::Server
                | Token::Trailer
                | Token::Upgrade
                | Token::Via
                | Token::XForwardedFor
                | Token::XForwardedProto
        )
    )
}

/// Regular fields of `headers` admissible toward an HTTP/2 peer, in order,
/// with their `sensitive` flag kept.
pub fn copy_headers_to_http2(headers: &HeaderList) -> HeaderList {
    let mut out = HeaderList::with_capacity(headers.len());
    for field in headers {
        if admit_http2_egress(&field.name) {
            out.push(field.clone());
        } else {
            trace!(name = ?field.name, "dropped toward HTTP/2 peer");
        }
    }
    out
}

fn is_pseudo_or_empty(name: &[u8]) -> bool {
    name.first().map_or(true, |&b| b == b':')
}
