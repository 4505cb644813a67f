//! Request body format sniffing
//!
//! Each check answers "does this payload look like format X" by attempting to
//! parse it. A parser failure is an expected outcome and is reported as
//! `false`; the underlying error detail is discarded.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// True if the payload starts with `{` or `[` and parses as a JSON value
pub fn is_json(data: &str) -> bool {
    if !data.starts_with('{') && !data.starts_with('[') {
        return false;
    }
    serde_json::from_str::<serde_json::Value>(data).is_ok()
}

/// Entities every XML parser knows without a DTD
const PREDEFINED_ENTITIES: &[&[u8]] = &[b"lt", b"gt", b"amp", b"apos", b"quot"];

/// True if the payload is a well-formed XML document: exactly one root
/// element, balanced tags, well-formed names and attributes, only predefined
/// or character references, and no character data outside the root.
pub fn is_xml(data: &str) -> bool {
    let mut reader = Reader::from_str(data);
    let mut depth = 0usize;
    let mut has_root = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if !is_well_formed_tag(&e) || (depth == 0 && has_root) {
                    return false;
                }
                has_root = true;
                depth += 1;
            }
            Ok(Event::End(_)) => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            Ok(Event::Empty(e)) => {
                if !is_well_formed_tag(&e) {
                    return false;
                }
                if depth == 0 {
                    if has_root {
                        return false;
                    }
                    has_root = true;
                }
            }
            Ok(Event::Text(text)) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return false;
                }
            }
            Ok(Event::GeneralRef(r)) => {
                if depth == 0 || !is_known_reference(&r) {
                    return false;
                }
            }
            Ok(Event::CData(_)) => {
                if depth == 0 {
                    return false;
                }
            }
            Ok(Event::Eof) => return has_root && depth == 0,
            Ok(_) => {}
            Err(_) => return false,
        }
    }
}

/// Element name, attribute names and attribute values of a start tag.
/// Attribute checks reject missing or unquoted values and duplicates.
fn is_well_formed_tag(e: &BytesStart) -> bool {
    if !is_xml_name(e.name().as_ref()) {
        return false;
    }
    let mut attributes = e.attributes();
    attributes.with_checks(true);
    for attr in attributes {
        let Ok(attr) = attr else {
            return false;
        };
        if !is_xml_name(attr.key.as_ref()) || !is_valid_attribute_value(&attr.value) {
            return false;
        }
    }
    true
}

/// Names start with a letter, `_` or `:` and continue with letters, digits,
/// `-`, `.`, `_` or `:`. Non-ASCII characters are allowed anywhere.
fn is_xml_name(name: &[u8]) -> bool {
    let Ok(name) = std::str::from_utf8(name) else {
        return false;
    };
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let starts = first.is_alphabetic() || first == '_' || first == ':';
    starts && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '.' | '_' | ':'))
}

/// `&name;` references inside an attribute value must resolve, and a raw `<`
/// is not allowed.
fn is_valid_attribute_value(value: &[u8]) -> bool {
    if value.contains(&b'<') {
        return false;
    }
    let mut rest = value;
    while let Some(start) = rest.iter().position(|&b| b == b'&') {
        let after = &rest[start + 1..];
        let Some(end) = after.iter().position(|&b| b == b';') else {
            return false;
        };
        if !is_known_reference(&after[..end]) {
            return false;
        }
        rest = &after[end + 1..];
    }
    true
}

/// Predefined entity or a decimal / hex character reference
fn is_known_reference(name: &[u8]) -> bool {
    match name {
        [b'#', b'x', hex @ ..] => !hex.is_empty() && hex.iter().all(u8::is_ascii_hexdigit),
        [b'#', digits @ ..] => !digits.is_empty() && digits.iter().all(u8::is_ascii_digit),
        _ => PREDEFINED_ENTITIES.contains(&name),
    }
}

/// True if the payload is `application/x-www-form-urlencoded`: it contains
/// `=`, every `%` escape is well formed, and each `&`-separated segment holds
/// exactly one `=`.
pub fn is_url_encoded(data: &str) -> bool {
    data.contains('=')
        && has_valid_percent_escapes(data)
        && data.split('&').all(|pair| pair.matches('=').count() == 1)
}

/// True if every `%` in the input starts a `%XX` escape with two hex digits
pub fn has_valid_percent_escapes(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3);
            match escape {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
