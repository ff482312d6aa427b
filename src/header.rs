//! Header fields, ordered header lists and the token index built over them.
//!
//! A [`HeaderList`] keeps fields in arrival order; duplicates keep their relative
//! order. A [`HeaderIndex`] maps each [`Token`] to the position of its *last*
//! occurrence in the list it was built from. It does not follow later mutations of
//! that list: rebuild it after every change.

use std::io::{self, Write};

use bytes::Bytes;

use crate::token::Token;

/// A single header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    pub name: Bytes,
    pub value: Bytes,
    /// Must never enter a compression table shared across requests
    /// (HPACK "never indexed").
    pub sensitive: bool,
}

impl HeaderField {
    /// Create a field, storing name and value verbatim.
    pub fn new(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            sensitive: false,
        }
    }

    /// Create a field that must stay out of shared compression state.
    pub fn sensitive(name: impl Into<Bytes>, value: impl Into<Bytes>) -> Self {
        Self {
            sensitive: true,
            ..Self::new(name, value)
        }
    }

    pub fn token(&self) -> Option<Token> {
        Token::lookup(&self.name)
    }

    /// True if the name starts with the pseudo-header sigil `:`.
    pub fn is_pseudo(&self) -> bool {
        self.name.first() == Some(&b':')
    }
}

/// Ordered collection of header fields for one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderList {
    fields: Vec<HeaderField>,
}

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field, stripping leading and trailing SP/HTAB from the value first.
    pub fn add_header(
        &mut self,
        name: impl Into<Bytes>,
        value: impl Into<Bytes>,
        sensitive: bool,
    ) {
        let value = trim_lws(value.into());
        self.fields.push(HeaderField {
            name: name.into(),
            value,
            sensitive,
        });
    }

    /// Append a field as-is.
    pub fn push(&mut self, field: HeaderField) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&HeaderField> {
        self.fields.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HeaderField> {
        self.fields.iter()
    }

    pub fn as_slice(&self) -> &[HeaderField] {
        &self.fields
    }

    /// Last field whose name equals `name`, by linear scan.
    ///
    /// For lists without a prebuilt [`HeaderIndex`], or for names outside the token set.
    pub fn find(&self, name: &[u8]) -> Option<&HeaderField> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    pub fn build_index(&self) -> HeaderIndex {
        HeaderIndex::build(self)
    }
}

impl FromIterator<HeaderField> for HeaderList {
    fn from_iter<I: IntoIterator<Item = HeaderField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl std::ops::Index<usize> for HeaderList {
    type Output = HeaderField;

    fn index(&self, position: usize) -> &HeaderField {
        &self.fields[position]
    }
}

impl<'a> IntoIterator for &'a HeaderList {
    type Item = &'a HeaderField;
    type IntoIter = std::slice::Iter<'a, HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl IntoIterator for HeaderList {
    type Item = HeaderField;
    type IntoIter = std::vec::IntoIter<HeaderField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

/// Token → position of the last field carrying that token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderIndex {
    slots: [Option<usize>; Token::COUNT],
}

impl Default for HeaderIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderIndex {
    /// An index with every slot absent.
    pub fn new() -> Self {
        Self {
            slots: [None; Token::COUNT],
        }
    }

    /// Index every field of `list`. Later occurrences overwrite earlier ones;
    /// duplicates are not reported.
    pub fn build(list: &HeaderList) -> Self {
        let mut index = Self::new();
        for (position, field) in list.iter().enumerate() {
            if let Some(token) = field.token() {
                index.index_header(token, position);
            }
        }
        index
    }

    /// Record `token` at `position`, replacing any previous entry.
    pub fn index_header(&mut self, token: Token, position: usize) {
        self.slots[token.slot()] = Some(position);
    }

    pub fn get(&self, token: Token) -> Option<usize> {
        self.slots[token.slot()]
    }

    pub fn contains(&self, token: Token) -> bool {
        self.get(token).is_some()
    }

    /// The field for `token` in `list`, which must be the list this index was built from.
    pub fn lookup<'a>(&self, token: Token, list: &'a HeaderList) -> Option<&'a HeaderField> {
        list.get(self.get(token)?)
    }
}

/// The field's value, or an empty slice when the field is absent.
pub fn value_or_empty(field: Option<&HeaderField>) -> &[u8] {
    match field {
        Some(f) => &f.value,
        None => &[],
    }
}

/// True when the field is present and its value is not empty.
pub fn non_empty_value(field: Option<&HeaderField>) -> bool {
    field.is_some_and(|f| !f.value.is_empty())
}

/// True if `value` consists only of SP and HTAB (an empty value included).
pub fn is_lws(value: &[u8]) -> bool {
    value.iter().all(|&b| is_lws_byte(b))
}

/// Write `name: value` lines followed by a blank line. Diagnostics only.
pub fn dump_headers<W: Write>(out: &mut W, fields: &[HeaderField]) -> io::Result<()> {
    for field in fields {
        out.write_all(&field.name)?;
        out.write_all(b": ")?;
        out.write_all(&field.value)?;
        out.write_all(b"\n")?;
    }
    out.write_all(b"\n")?;
    out.flush()
}

fn is_lws_byte(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn trim_lws(value: Bytes) -> Bytes {
    let start = value
        .iter()
        .position(|&b| !is_lws_byte(b))
        .unwrap_or(value.len());
    let end = value
        .iter()
        .rposition(|&b| !is_lws_byte(b))
        .map_or(start, |i| i + 1);
    value.slice(start..end)
}
