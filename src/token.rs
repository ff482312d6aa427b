//! Header name tokens
//!
//! A closed set of header names that carry proxy semantics. Every name in the set
//! maps to exactly one [`Token`]; every other byte string (including prefixes,
//! extensions and near-misses of a curated name) maps to `None`.
//!
//! Names are expected in HTTP/2 canonical (lowercase) form. Lookup does not fold case.

/// A recognized header name. The discriminant doubles as the slot in a
/// [`HeaderIndex`](crate::HeaderIndex).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Token {
    Authority,
    Method,
    Path,
    Scheme,
    Status,
    AltSvc,
    Connection,
    ContentLength,
    Cookie,
    Expect,
    Host,
    Http2Settings,
    IfModifiedSince,
    KeepAlive,
    Location,
    ProxyConnection,
    Server,
    Te,
    Trailer,
    TransferEncoding,
    Upgrade,
    Via,
    XForwardedFor,
    XForwardedProto,
}

impl Token {
    /// Number of tokens, i.e. the size of a header index.
    pub const COUNT: usize = 24;

    /// Every token, in discriminant order.
    pub const ALL: [Token; Token::COUNT] = [
        Token::Authority,
        Token::Method,
        Token::Path,
        Token::Scheme,
        Token::Status,
        Token::AltSvc,
        Token::Connection,
        Token::ContentLength,
        Token::Cookie,
        Token::Expect,
        Token::Host,
        Token::Http2Settings,
        Token::IfModifiedSince,
        Token::KeepAlive,
        Token::Location,
        Token::ProxyConnection,
        Token::Server,
        Token::Te,
        Token::Trailer,
        Token::TransferEncoding,
        Token::Upgrade,
        Token::Via,
        Token::XForwardedFor,
        Token::XForwardedProto,
    ];

    /// Classify a header name.
    ///
    /// Dispatches on the name length, then on its last byte, and only then compares
    /// the remaining bytes against the single candidate (or two) left. No hashing,
    /// no allocation.
    pub fn lookup(name: &[u8]) -> Option<Token> {
        let (&last, head) = name.split_last()?;
        let token = match name.len() {
            2 => match last {
                b'e' if head == b"t" => Token::Te,
                _ => return None,
            },
            3 => match last {
                b'a' if head == b"vi" => Token::Via,
                _ => return None,
            },
            4 => match last {
                b't' if head == b"hos" => Token::Host,
                _ => return None,
            },
            5 => match last {
                b'h' if head == b":pat" => Token::Path,
                _ => return None,
            },
            6 => match last {
                b'e' if head == b"cooki" => Token::Cookie,
                b'r' if head == b"serve" => Token::Server,
                b't' if head == b"expec" => Token::Expect,
                _ => return None,
            },
            7 => match last {
                b'c' if head == b"alt-sv" => Token::AltSvc,
                b'd' if head == b":metho" => Token::Method,
                b'e' if head == b":schem" => Token::Scheme,
                b'e' if head == b"upgrad" => Token::Upgrade,
                b'r' if head == b"traile" => Token::Trailer,
                b's' if head == b":statu" => Token::Status,
                _ => return None,
            },
            8 => match last {
                b'n' if head == b"locatio" => Token::Location,
                _ => return None,
            },
            10 => match last {
                b'e' if head == b"keep-aliv" => Token::KeepAlive,
                b'n' if head == b"connectio" => Token::Connection,
                b'y' if head == b":authorit" => Token::Authority,
                _ => return None,
            },
            14 => match last {
                b'h' if head == b"content-lengt" => Token::ContentLength,
                b's' if head == b"http2-setting" => Token::Http2Settings,
                _ => return None,
            },
            15 => match last {
                b'r' if head == b"x-forwarded-fo" => Token::XForwardedFor,
                _ => return None,
            },
            16 => match last {
                b'n' if head == b"proxy-connectio" => Token::ProxyConnection,
                _ => return None,
            },
            17 => match last {
                b'e' if head == b"if-modified-sinc" => Token::IfModifiedSince,
                b'g' if head == b"transfer-encodin" => Token::TransferEncoding,
                b'o' if head == b"x-forwarded-prot" => Token::XForwardedProto,
                _ => return None,
            },
            _ => return None,
        };
        Some(token)
    }

    /// Canonical (lowercase) header name of this token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Authority => ":authority",
            Token::Method => ":method",
            Token::Path => ":path",
            Token::Scheme => ":scheme",
            Token::Status => ":status",
            Token::AltSvc => "alt-svc",
            Token::Connection => "connection",
            Token::ContentLength => "content-length",
            Token::Cookie => "cookie",
            Token::Expect => "expect",
            Token::Host => "host",
            Token::Http2Settings => "http2-settings",
            Token::IfModifiedSince => "if-modified-since",
            Token::KeepAlive => "keep-alive",
            Token::Location => "location",
            Token::ProxyConnection => "proxy-connection",
            Token::Server => "server",
            Token::Te => "te",
            Token::Trailer => "trailer",
            Token::TransferEncoding => "transfer-encoding",
            Token::Upgrade => "upgrade",
            Token::Via => "via",
            Token::XForwardedFor => "x-forwarded-for",
            Token::XForwardedProto => "x-forwarded-proto",
        }
    }

    /// True for the HTTP/2 pseudo-header tokens (`:authority`, `:method`, `:path`,
    /// `:scheme`, `:status`).
    pub const fn is_pseudo(self) -> bool {
        matches!(
            self,
            Token::Authority | Token::Method | Token::Path | Token::Scheme | Token::Status
        )
    }

    /// Slot of this token in a header index.
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a header may appear inside an HTTP/2 message at all.
///
/// Connection-specific fields (RFC 7540 Section 8.1.2.2) are not allowed. `te` is
/// accepted here; restricting its value to `trailers` is left to the caller.
pub fn http2_header_allowed(token: Option<Token>) -> bool {
    !matches!(
        token,
        Some(
            Token::Connection
                | Token::KeepAlive
                | Token::ProxyConnection
                | Token::TransferEncoding
                | Token::Upgrade
        )
    )
}
