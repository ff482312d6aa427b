//! Character grammar for header names and values.
//!
//! Names follow the RFC 7230 `token` rule restricted to lowercase, as HTTP/2
//! requires, with an optional leading `:` for pseudo-headers. Values may contain
//! HTAB, visible ASCII, SP and obs-text; any other control byte (CR, LF and NUL
//! included) makes the value illegal, which is what keeps header injection out.

use crate::error::HeaderError;

/// True if `name` is a legal HTTP/2 header field name.
pub fn is_legal_header_name(name: &[u8]) -> bool {
    let body = match name.split_first() {
        None => return false,
        Some((b':', rest)) => rest,
        Some(_) => name,
    };
    !body.is_empty() && body.iter().all(|&b| is_lower_tchar(b))
}

/// True if `value` is a legal header field value.
pub fn is_legal_header_value(value: &[u8]) -> bool {
    value
        .iter()
        .all(|&b| b == b'\t' || (0x20..0x7f).contains(&b) || b >= 0x80)
}

/// True if both name and value are legal.
pub fn check_nv(name: &[u8], value: &[u8]) -> bool {
    is_legal_header_name(name) && is_legal_header_value(value)
}

/// Like [`check_nv`] but reports which half failed.
pub fn check_field(name: &[u8], value: &[u8]) -> Result<(), HeaderError> {
    if !is_legal_header_name(name) {
        return Err(HeaderError::invalid_name(name));
    }
    if !is_legal_header_value(value) {
        return Err(HeaderError::invalid_value(name));
    }
    Ok(())
}

fn is_lower_tchar(b: u8) -> bool {
    matches!(b,
        b'a'..=b'z' | b'0'..=b'9'
        | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+'
        | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~')
}
