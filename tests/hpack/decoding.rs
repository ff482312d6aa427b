//! Tests for HPACK decoding

use h2_proxy_headers::{HeaderError, HpackDecoder, HpackEncoder, Token};

#[test]
fn test_decode_indexed_header() {
    let mut decoder = HpackDecoder::new();

    // 0x82 = indexed header, index 2 = :method: GET
    let data = [0x82];
    let headers = decoder.decode(&data).unwrap();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].name, ":method");
    assert_eq!(headers[0].value, "GET");
    assert!(!headers[0].sensitive);
}

#[test]
fn test_decode_multiple_indexed_headers() {
    let mut decoder = HpackDecoder::new();

    // 0x82 = :method: GET, 0x86 = :scheme: http, 0x84 = :path: /
    let data = [0x82, 0x86, 0x84];
    let headers = decoder.decode(&data).unwrap();

    assert_eq!(headers.len(), 3);
    assert_eq!(headers[0].name, ":method");
    assert_eq!(headers[0].value, "GET");
    assert_eq!(headers[1].name, ":scheme");
    assert_eq!(headers[1].value, "http");
    assert_eq!(headers[2].name, ":path");
    assert_eq!(headers[2].value, "/");
}

#[test]
fn test_decode_literal_indexed_name() {
    let mut decoder = HpackDecoder::new();

    // 0x41 = literal with indexing, indexed name (index 1 = :authority)
    let data = [
        0x41, // Literal with indexing, name index 1
        0x0B, // Value length: 11
        b'e', b'x', b'a', b'm', b'p', b'l', b'e', b'.', b'c', b'o', b'm',
    ];

    let headers = decoder.decode(&data).unwrap();

    assert_eq!(headers.len(), 1);
    assert_eq!(headers[0].name, ":authority");
    assert_eq!(headers[0].value, "example.com");
}

#[test]
fn test_decoded_request_is_indexable() {
    let mut decoder = HpackDecoder::new();

    // :method GET, :scheme http, :path /, :authority example.com
    let mut data = vec![0x82, 0x86, 0x84, 0x41, 0x0B];
    data.extend_from_slice(b"example.com");

    let headers = decoder.decode(&data).unwrap();
    let index = headers.build_index();
    assert_eq!(index.get(Token::Method), Some(0));
    assert_eq!(index.get(Token::Authority), Some(3));
}

#[test]
fn test_decode_rejects_uppercase_name() {
    let mut decoder = HpackDecoder::new();

    // Literal without indexing, new name "X-A", value "1"
    let data = [0x00, 0x03, b'X', b'-', b'A', 0x01, b'1'];

    let result = decoder.decode(&data);
    assert!(matches!(result, Err(HeaderError::InvalidName { .. })));
}

#[test]
fn test_decode_truncated_block_is_error() {
    let mut decoder = HpackDecoder::new();

    // Name length claims 6 bytes, only 2 follow
    let data = [0x40, 0x06, b'c', b'u'];

    let result = decoder.decode(&data);
    assert!(matches!(result, Err(HeaderError::Hpack { .. })));
}

#[test]
fn test_decoded_credentials_stay_out_of_dynamic_table() {
    let mut decoder = HpackDecoder::new();

    // Literal with incremental indexing, indexed name 32 (cookie), value "id=1"
    let data = [0x60, 0x04, b'i', b'd', b'=', b'1'];

    let headers = decoder.decode(&data).unwrap();
    assert_eq!(headers[0].name, "cookie");
    assert!(headers[0].sensitive);

    // Re-encoding toward the next hop writes it as literal never indexed
    let mut encoder = HpackEncoder::new();
    let encoded = encoder.encode(headers.as_slice());
    assert_eq!(encoded[0] & 0xF0, 0x10);

    let mut next_hop = HpackDecoder::new();
    let relayed = next_hop.decode(&encoded).unwrap();
    assert_eq!(relayed[0].value, "id=1");
    assert!(relayed[0].sensitive);
}
