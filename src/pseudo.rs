//! HTTP/2 pseudo-header checks (RFC 7540 Section 8.1.2).
//!
//! The presence predicates only look at a finished [`HeaderIndex`]. Because the
//! index keeps the last occurrence of each token, they cannot see duplicates; use
//! the incremental `check_http2_*_pseudo_header` predicates while indexing, or the
//! strict [`validate_request_headers`]/[`validate_response_headers`] which do so.

use tracing::debug;

use crate::error::HeaderError;
use crate::header::{HeaderIndex, HeaderList};
use crate::token::{http2_header_allowed, Token};

/// `:method`, `:path` and `:scheme` present, plus `:authority` or `host`.
pub fn http2_mandatory_request_headers_presence(index: &HeaderIndex) -> bool {
    index.contains(Token::Method)
        && index.contains(Token::Path)
        && index.contains(Token::Scheme)
        && (index.contains(Token::Authority) || index.contains(Token::Host))
}

/// `:status` present.
pub fn http2_mandatory_response_headers_presence(index: &HeaderIndex) -> bool {
    index.contains(Token::Status)
}

/// True if `token` is a request pseudo-header that has not been indexed yet.
///
/// Any other token, `:status` included, yields false.
pub fn check_http2_request_pseudo_header(index: &HeaderIndex, token: Token) -> bool {
    is_request_pseudo(token) && !index.contains(token)
}

/// True if `token` is `:status` and it has not been indexed yet.
pub fn check_http2_response_pseudo_header(index: &HeaderIndex, token: Token) -> bool {
    token == Token::Status && !index.contains(token)
}

/// Index a request header list, rejecting it on the first violation:
/// a duplicated, unknown or misplaced pseudo-header, a connection-specific
/// header, or missing mandatory pseudo-headers.
pub fn validate_request_headers(list: &HeaderList) -> Result<HeaderIndex, HeaderError> {
    let index = validate(list, check_http2_request_pseudo_header, is_request_pseudo)?;
    if !http2_mandatory_request_headers_presence(&index) {
        debug!("request rejected: missing mandatory pseudo-headers");
        return Err(HeaderError::MissingRequestPseudoHeaders);
    }
    Ok(index)
}

/// Response counterpart of [`validate_request_headers`].
pub fn validate_response_headers(list: &HeaderList) -> Result<HeaderIndex, HeaderError> {
    let index = validate(list, check_http2_response_pseudo_header, |t| t == Token::Status)?;
    if !http2_mandatory_response_headers_presence(&index) {
        debug!("response rejected: missing :status");
        return Err(HeaderError::MissingStatus);
    }
    Ok(index)
}

fn validate(
    list: &HeaderList,
    admissible: fn(&HeaderIndex, Token) -> bool,
    expected: fn(Token) -> bool,
) -> Result<HeaderIndex, HeaderError> {
    let mut index = HeaderIndex::new();
    let mut seen_regular = false;

    for (position, field) in list.iter().enumerate() {
        let token = field.token();
        if field.is_pseudo() {
            if seen_regular {
                debug!(name = ?field.name, "pseudo-header after regular header");
                return Err(HeaderError::pseudo_header_after_regular(&field.name));
            }
            match token {
                Some(t) if admissible(&index, t) => index.index_header(t, position),
                Some(t) if expected(t) => {
                    debug!(token = %t, "duplicate pseudo-header");
                    return Err(HeaderError::DuplicatePseudoHeader(t));
                }
                _ => {
                    debug!(name = ?field.name, "unexpected pseudo-header");
                    return Err(HeaderError::unexpected_pseudo_header(&field.name));
                }
            }
            continue;
        }

        seen_regular = true;
        if let Some(t) = token {
            if !http2_header_allowed(token) {
                debug!(token = %t, "connection-specific header");
                return Err(HeaderError::ConnectionSpecific(t));
            }
            index.index_header(t, position);
        }
    }

    Ok(index)
}

fn is_request_pseudo(token: Token) -> bool {
    matches!(token, Token::Authority | Token::Method | Token::Path | Token::Scheme)
}
