//! Tests for HPACK encoding

use h2_proxy_headers::{copy_headers_to_http2, HeaderField, HeaderList, HpackDecoder, HpackEncoder};

#[test]
fn test_encode_decode_roundtrip() {
    let mut encoder = HpackEncoder::new();
    let mut decoder = HpackDecoder::new();
    let headers = vec![
        HeaderField::new(":status", "200"),
        HeaderField::new("content-type", "application/json"),
    ];
    let encoded = encoder.encode(&headers);
    let decoded = decoder.decode(&encoded).unwrap();
    assert_eq!(decoded.len(), 2);
}

#[test]
fn test_encode_literal_header() {
    let mut encoder = HpackEncoder::new();
    let mut decoder = HpackDecoder::new();
    let headers = vec![HeaderField::new("x-custom", "value")];
    let encoded = encoder.encode(&headers);
    let decoded = decoder.decode(&encoded).unwrap();
    assert_eq!(decoded[0].name, "x-custom");
}

#[test]
fn test_sensitive_field_uses_never_indexed_representation() {
    let mut encoder = HpackEncoder::new();
    let headers = vec![HeaderField::sensitive("authorization", "secret")];
    let encoded = encoder.encode(&headers);
    // 0001xxxx: literal never indexed
    assert_eq!(encoded[0] & 0xF0, 0x10);
}

#[test]
fn test_sensitive_fields_keep_order() {
    let mut encoder = HpackEncoder::new();
    let mut decoder = HpackDecoder::new();
    let headers = vec![
        HeaderField::sensitive("cookie", "a=1"),
        HeaderField::new("x-a", "1"),
        HeaderField::new("x-b", "2"),
        HeaderField::sensitive("cookie", "b=2"),
        HeaderField::new("x-c", "3"),
    ];
    let encoded = encoder.encode(&headers);
    let decoded = decoder.decode(&encoded).unwrap();
    let pairs: Vec<_> = decoded.iter().map(|h| (h.name.clone(), h.value.clone())).collect();
    let expected: Vec<_> = headers.iter().map(|h| (h.name.clone(), h.value.clone())).collect();
    assert_eq!(pairs, expected);
}

#[test]
fn test_encode_empty_list() {
    let mut encoder = HpackEncoder::new();
    assert!(encoder.encode(&[]).is_empty());
}

#[test]
fn test_encode_http2_egress() {
    // Filtered egress list then encoded: hop-by-hop fields never hit the wire
    let mut encoder = HpackEncoder::new();
    let mut decoder = HpackDecoder::new();

    let mut headers = HeaderList::new();
    headers.add_header(":status", "200", false);
    headers.add_header("connection", "keep-alive", false);
    headers.add_header("content-length", "5", false);
    headers.add_header("x-forwarded-for", "10.0.0.1", false);

    let egress = copy_headers_to_http2(&headers);
    let decoded = decoder.decode(&encoder.encode(egress.as_slice())).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].name, "content-length");
}
