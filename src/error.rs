use thiserror::Error;

use crate::token::Token;

/// Failures surfaced by the fallible parts of the crate.
///
/// The per-field hot path (lookup, filtering, rewriting) reports absence through
/// `Option`/`bool` instead; these variants cover decoding and the opt-in strict
/// validators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("HPACK decode error: {reason}")]
    Hpack { reason: String },

    #[error("invalid header name: {name:?}")]
    InvalidName { name: String },

    #[error("invalid value for header {name:?}")]
    InvalidValue { name: String },

    #[error("duplicate pseudo-header {0}")]
    DuplicatePseudoHeader(Token),

    #[error("pseudo-header {name:?} not allowed here")]
    UnexpectedPseudoHeader { name: String },

    #[error("pseudo-header {name:?} after regular header")]
    PseudoHeaderAfterRegular { name: String },

    #[error("connection-specific header {0} in HTTP/2 message")]
    ConnectionSpecific(Token),

    #[error("missing mandatory request pseudo-headers")]
    MissingRequestPseudoHeaders,

    #[error("missing :status pseudo-header")]
    MissingStatus,
}

impl HeaderError {
    pub fn hpack<S: ToString>(reason: S) -> Self {
        Self::Hpack { reason: reason.to_string() }
    }

    pub fn invalid_name(name: &[u8]) -> Self {
        Self::InvalidName { name: String::from_utf8_lossy(name).into_owned() }
    }

    pub fn invalid_value(name: &[u8]) -> Self {
        Self::InvalidValue { name: String::from_utf8_lossy(name).into_owned() }
    }

    pub fn unexpected_pseudo_header(name: &[u8]) -> Self {
        Self::UnexpectedPseudoHeader { name: String::from_utf8_lossy(name).into_owned() }
    }

    pub fn pseudo_header_after_regular(name: &[u8]) -> Self {
        Self::PseudoHeaderAfterRegular { name: String::from_utf8_lossy(name).into_owned() }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid upstream config: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("unsupported upstream scheme: {scheme}")]
    UnsupportedScheme { scheme: String },
}
