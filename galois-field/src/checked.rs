//! Range checked conversions for values that arrive untyped, from the command line or a config file.

use crate::Error;

pub fn element(value: i64) -> Result<u8, Error> {
    u8::try_from(value).map_err(|_| Error::OutOfRange { kind: "element", value })
}

pub fn polynomial(value: i64) -> Result<u16, Error> {
    u16::try_from(value).map_err(|_| Error::OutOfRange {
        kind: "polynomial",
        value,
    })
}

/// Parses decimal or `0x` prefixed hexadecimal.
pub fn parse_integer(text: &str) -> Result<i64, Error> {
    let trimmed = text.trim();
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| Error::Parse(text.to_owned()))
}

pub fn parse_element(text: &str) -> Result<u8, Error> {
    element(parse_integer(text)?)
}

pub fn parse_polynomial(text: &str) -> Result<u16, Error> {
    polynomial(parse_integer(text)?)
}

#[test]
fn test_element() {
    assert_eq!(element(0), Ok(0));
    assert_eq!(element(255), Ok(255));
    assert_eq!(element(256), Err(Error::OutOfRange { kind: "element", value: 256 }));
    assert_eq!(element(-1), Err(Error::OutOfRange { kind: "element", value: -1 }));
}

#[test]
fn test_polynomial() {
    assert_eq!(polynomial(0x11B), Ok(0x11B));
    assert_eq!(polynomial(0xFFFF), Ok(0xFFFF));
    assert!(matches!(polynomial(0x10000), Err(Error::OutOfRange { .. })));
}

#[test]
fn test_parse() {
    assert_eq!(parse_integer("0x11B"), Ok(0x11B));
    assert_eq!(parse_integer(" 283 "), Ok(283));
    assert_eq!(parse_element("0XCA"), Ok(0xCA));
    assert_eq!(parse_polynomial("0x11d"), Ok(0x11D));
    assert_eq!(parse_element("zz"), Err(Error::Parse("zz".to_owned())));
    assert!(matches!(parse_element("300"), Err(Error::OutOfRange { value: 300, .. })));
}
