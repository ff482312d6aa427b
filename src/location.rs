//! `Location` rewriting for redirects that pass back through the proxy.
//!
//! A redirect pointing at the host the client asked for is rewritten to the
//! scheme and port the client should use; anything else is left untouched. Only
//! `http` locations (or scheme-relative ones) are considered: `https` targets are
//! never rewritten.

use std::ops::Range;

use tracing::trace;

/// Byte ranges of the components of a URI string, as produced by a URI parser.
///
/// Ranges exclude delimiters: `query` has no leading `?`, `fragment` no leading `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriFields {
    pub scheme: Option<Range<usize>>,
    pub host: Option<Range<usize>>,
    pub path: Option<Range<usize>>,
    pub query: Option<Range<usize>>,
    pub fragment: Option<Range<usize>>,
}

impl UriFields {
    /// Split `uri` into components without normalizing it (RFC 3986, appendix B).
    ///
    /// Ranges point into `uri` itself: case, percent-encoding and dot-segments are
    /// left as they are. The host excludes userinfo and port; an empty authority
    /// yields no host.
    pub fn split(uri: &str) -> Self {
        let b = uri.as_bytes();
        let mut fields = Self::default();
        let mut pos = 0;

        if let Some(i) = find_any(b, 0, b":/?#") {
            if b[i] == b':' && i > 0 {
                fields.scheme = Some(0..i);
                pos = i + 1;
            }
        }
        if b[pos..].starts_with(b"//") {
            let start = pos + 2;
            let end = find_any(b, start, b"/?#").unwrap_or(b.len());
            fields.host = host_in_authority(b, start..end);
            pos = end;
        }
        let path_end = find_any(b, pos, b"?#").unwrap_or(b.len());
        if path_end > pos {
            fields.path = Some(pos..path_end);
        }
        pos = path_end;
        if b.get(pos) == Some(&b'?') {
            let end = find_any(b, pos + 1, b"#").unwrap_or(b.len());
            fields.query = Some(pos + 1..end);
            pos = end;
        }
        if b.get(pos) == Some(&b'#') {
            fields.fragment = Some(pos + 1..b.len());
        }
        fields
    }
}

fn find_any(b: &[u8], from: usize, set: &[u8]) -> Option<usize> {
    b[from..]
        .iter()
        .position(|c| set.contains(c))
        .map(|i| from + i)
}

fn host_in_authority(b: &[u8], authority: Range<usize>) -> Option<Range<usize>> {
    let start = match b[authority.clone()].iter().rposition(|&c| c == b'@') {
        Some(at) => authority.start + at + 1,
        None => authority.start,
    };
    let host = &b[start..authority.end];
    let len = if host.first() == Some(&b'[') {
        host.iter().position(|&c| c == b']').map_or(host.len(), |i| i + 1)
    } else {
        host.iter().position(|&c| c == b':').unwrap_or(host.len())
    };
    (len > 0).then_some(start..start + len)
}

/// Rewrite `uri` so the client follows the redirect through the proxy.
///
/// `request_host` is the host (optionally with `:port`) the client sent. The
/// location host must equal it, or be followed in it directly by `:`; a mere
/// prefix such as `example.com` in `example.com.evil.com` does not match.
///
/// Returns `None` when the location must be passed on unchanged.
pub fn rewrite_location_uri(
    uri: &str,
    fields: &UriFields,
    request_host: &str,
    upstream_scheme: &str,
    upstream_port: u16,
) -> Option<String> {
    if let Some(scheme) = &fields.scheme {
        if uri.get(scheme.clone())? != "http" {
            trace!("location not rewritten: scheme is not http");
            return None;
        }
    }
    let Some(host) = fields.host.as_ref().and_then(|r| uri.get(r.clone())) else {
        trace!("location not rewritten: no host");
        return None;
    };
    if !host_matches(request_host, host) {
        trace!(host, request_host, "location not rewritten: foreign host");
        return None;
    }

    let mut res = String::with_capacity(uri.len() + upstream_scheme.len() + 8);
    res.push_str(upstream_scheme);
    res.push_str("://");
    res.push_str(host);
    let default_port = match upstream_scheme {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    };
    if default_port.is_some_and(|p| p != upstream_port) {
        res.push(':');
        res.push_str(&upstream_port.to_string());
    }
    if let Some(path) = &fields.path {
        res.push_str(uri.get(path.clone())?);
    }
    if let Some(query) = &fields.query {
        res.push('?');
        res.push_str(uri.get(query.clone())?);
    }
    if let Some(fragment) = &fields.fragment {
        res.push('#');
        res.push_str(uri.get(fragment.clone())?);
    }
    Some(res)
}

/// [`rewrite_location_uri`] over the components found by [`UriFields::split`].
pub fn rewrite_location(
    location: &str,
    request_host: &str,
    upstream_scheme: &str,
    upstream_port: u16,
) -> Option<String> {
    let fields = UriFields::split(location);
    rewrite_location_uri(location, &fields, request_host, upstream_scheme, upstream_port)
}

fn host_matches(request_host: &str, host: &str) -> bool {
    match request_host.as_bytes().strip_prefix(host.as_bytes()) {
        Some(rest) => rest.is_empty() || rest[0] == b':',
        None => false,
    }
}
