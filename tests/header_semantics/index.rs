//! Tests for the header list and its token index

use h2_proxy_headers::{
    non_empty_value, value_or_empty, HeaderField, HeaderIndex, HeaderList, Token,
};

fn request() -> HeaderList {
    let mut headers = HeaderList::new();
    headers.add_header(":method", "GET", false);
    headers.add_header(":path", "/", false);
    headers.add_header("cookie", "a=1", true);
    headers.add_header("x-unknown", "u", false);
    headers.add_header("cookie", "b=2", true);
    headers
}

#[test]
fn test_index_resolves_last_occurrence() {
    let headers = request();
    let index = HeaderIndex::build(&headers);
    assert_eq!(index.get(Token::Cookie), Some(4));
    assert_eq!(index.lookup(Token::Cookie, &headers).unwrap().value, "b=2");
}

#[test]
fn test_index_ignores_unknown_names() {
    let headers = request();
    let index = headers.build_index();
    let indexed: Vec<Token> = Token::ALL.into_iter().filter(|&t| index.contains(t)).collect();
    assert_eq!(indexed, vec![Token::Method, Token::Path, Token::Cookie]);
}

#[test]
fn test_lookup_absent_token() {
    let headers = request();
    let index = headers.build_index();
    assert!(index.lookup(Token::Host, &headers).is_none());
    assert_eq!(value_or_empty(index.lookup(Token::Host, &headers)), b"");
    assert!(!non_empty_value(index.lookup(Token::Host, &headers)));
    assert!(non_empty_value(index.lookup(Token::Method, &headers)));
}

#[test]
fn test_find_without_index() {
    let headers = request();
    assert_eq!(headers.find(b"cookie").unwrap().value, "b=2");
    assert_eq!(headers.find(b"x-unknown").unwrap().value, "u");
    assert!(headers.find(b"x-missing").is_none());
}

#[test]
fn test_rebuild_after_mutation() {
    let mut headers = request();
    let stale = headers.build_index();
    headers.push(HeaderField::new("cookie", "c=3"));
    assert_eq!(stale.get(Token::Cookie), Some(4));
    assert_eq!(headers.build_index().get(Token::Cookie), Some(5));
}

#[test]
fn test_empty_list_has_empty_index() {
    assert_eq!(HeaderList::new().build_index(), HeaderIndex::new());
}
