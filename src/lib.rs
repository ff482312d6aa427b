//! h2-proxy-headers: HTTP/2 header semantics for reverse proxies
//!
//! This crate provides the per-field header logic a proxy needs when it sits between
//! HTTP/2 clients and HTTP/1.1 or HTTP/2 backends. Everything here is synchronous,
//! allocation-light and free of shared mutable state.
//!
//! # Features
//!
//! - **Token Lookup**: exact, hash-free classification of proxy-relevant header names
//! - **Header Index**: token → position of the last occurrence in a header list
//! - **Pseudo-Header Checks**: RFC 7540 mandatory request/response pseudo-headers
//! - **Hop-by-Hop Filtering**: separate drop-lists for HTTP/2 and HTTP/1.1 egress
//! - **HTTP/1.1 Rendering**: `Content-Type: text/html\r\n` style header blocks
//! - **Location Rewriting**: same-origin redirects stay on the proxy, foreign ones are untouched
//! - **Flow Control**: half-window WINDOW_UPDATE batching
//! - **HPACK Support**: header compression via fluke-hpack, never-indexed sensitive fields
//!
//! # Quick Start
//!
//! ```rust
//! use bytes::BytesMut;
//! use h2_proxy_headers::{
//!     build_http1_headers, http2_mandatory_request_headers_presence, HeaderList, Token,
//! };
//!
//! let mut headers = HeaderList::new();
//! headers.add_header(":method", "GET", false);
//! headers.add_header(":scheme", "https", false);
//! headers.add_header(":path", "/index.html", false);
//! headers.add_header(":authority", "example.com", false);
//! headers.add_header("accept-language", " en ", false);
//!
//! let index = headers.build_index();
//! assert!(http2_mandatory_request_headers_presence(&index));
//! assert_eq!(index.lookup(Token::Authority, &headers).unwrap().value, "example.com");
//!
//! let mut http1 = BytesMut::new();
//! build_http1_headers(&mut http1, &headers);
//! assert_eq!(http1, "Accept-Language: en\r\n");
//! ```
//!
//! # Architecture
//!
//! This crate is intentionally narrow. It provides:
//! - Header name classification and indexing
//! - Validation and filtering decisions over already-decoded header lists
//! - Redirect rewriting over already-parsed URI components
//!
//! It does NOT provide:
//! - Frame parsing or stream state (use an HTTP/2 codec)
//! - Full URI parsing (`UriFields::split` only locates components)
//! - Connection management (your responsibility)

pub mod config;
pub mod error;
pub mod field_check;
pub mod flow;
pub mod header;
pub mod hop_by_hop;
pub mod hpack;
pub mod http1;
pub mod location;
pub mod pseudo;
pub mod status;
pub mod token;

pub use config::UpstreamConfig;
pub use error::{ConfigError, HeaderError};
pub use field_check::{check_field, check_nv, is_legal_header_name, is_legal_header_value};
pub use flow::{
    advise_window_update_for, determine_window_update_transmission, window_update_frame,
    FlowControlAccounting,
};
pub use header::{
    dump_headers, is_lws, non_empty_value, value_or_empty, HeaderField, HeaderIndex, HeaderList,
};
pub use hop_by_hop::{admit_http1_egress, admit_http2_egress, copy_headers_to_http2};
pub use hpack::{HpackDecoder, HpackEncoder};
pub use http1::{build_http1_headers, put_capitalized};
pub use location::{rewrite_location, rewrite_location_uri, UriFields};
pub use pseudo::{
    check_http2_request_pseudo_header, check_http2_response_pseudo_header,
    http2_mandatory_request_headers_presence, http2_mandatory_response_headers_presence,
    validate_request_headers, validate_response_headers,
};
pub use status::{parse_http_status_code, status_string};
pub use token::{http2_header_allowed, Token};
