//! Objective-C runtime type encoding grammar
//!
//! ```text
//! type      := qualifier* ( primitive | '^' type | '[' digits type ']'
//!            | '{' name ( '=' type* )? '}' | '(' name ( '=' type* )? ')'
//!            | '@' ( '"' class '"' | '?' ( '<' signature '>' )? )?
//!            | 'b' digits )
//! qualifier := 'r' | 'n' | 'N' | 'o' | 'O' | 'R' | 'V' | 'A' | 'j'
//! signature := ( type digits? )*           (method / block encodings)
//! ```

use ahash::AHashMap;
use lazy_static::lazy_static;

use crate::shared::models::{UNKNOWN_ENCODING, UNKNOWN_TYPE};

lazy_static! {
    /// Leading encoding character → type name
    static ref ENCODING_TYPE_NAMES: AHashMap<char, &'static str> = {
        let mut map = AHashMap::new();
        map.insert('c', "char");
        map.insert('i', "int");
        map.insert('s', "short");
        map.insert('l', "long");
        map.insert('q', "long_long");
        map.insert('C', "uchar");
        map.insert('I', "uint");
        map.insert('S', "ushort");
        map.insert('L', "ulong");
        map.insert('Q', "ulong_long");
        map.insert('t', "int128");
        map.insert('T', "uint128");
        map.insert('f', "float");
        map.insert('d', "double");
        map.insert('D', "long_double");
        map.insert('B', "bool");
        map.insert('v', "void");
        map.insert('*', "pointer");
        map.insert('^', "pointer");
        map.insert('@', "id");
        map.insert('#', "class");
        map.insert(':', "SEL");
        map.insert('{', "struct");
        map.insert('(', "union");
        map.insert('[', "constant_array");
        map.insert('b', "bitfield");
        map.insert('?', UNKNOWN_TYPE);
        map
    };
}

/// Type qualifiers (`const`, `in`, `inout`, `out`, `bycopy`, `byref`,
/// `oneway`, `_Atomic`, `_Complex`)
pub fn is_qualifier(ch: char) -> bool {
    matches!(ch, 'r' | 'n' | 'N' | 'o' | 'O' | 'R' | 'V' | 'A' | 'j')
}

/// Split an encoding into one token per encoded value.
///
/// Qualifiers are kept on their token; frame offsets between tokens are
/// dropped. Works for single types (`{CGPoint=dd}`), method encodings
/// (`v24@0:8@16`) and block signatures (`v@?B`).
pub fn tokenize(encoding: &str) -> Vec<String> {
    let chars: Vec<char> = encoding.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_ascii_digit() || chars[i] == '-' {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && is_qualifier(chars[i]) {
            i += 1;
        }
        let end = scan_type(&chars, i);
        tokens.push(chars[start..end].iter().collect());
        i = end;
    }

    tokens
}

/// Index one past the type starting at `i`
fn scan_type(chars: &[char], i: usize) -> usize {
    let Some(&ch) = chars.get(i) else {
        return i;
    };
    match ch {
        '^' => {
            let mut j = i + 1;
            while j < chars.len() && is_qualifier(chars[j]) {
                j += 1;
            }
            scan_type(chars, j)
        }
        '{' => scan_group(chars, i, '{', '}'),
        '(' => scan_group(chars, i, '(', ')'),
        '[' => scan_group(chars, i, '[', ']'),
        '@' => match chars.get(i + 1) {
            Some('"') => match chars[i + 2..].iter().position(|&c| c == '"') {
                Some(offset) => i + 2 + offset + 1,
                None => chars.len(),
            },
            Some('?') => {
                if chars.get(i + 2) == Some(&'<') {
                    scan_group(chars, i + 2, '<', '>')
                } else {
                    i + 2
                }
            }
            _ => i + 1,
        },
        'b' => {
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            j
        }
        _ => i + 1,
    }
}

/// Index one past the matching `close`, honouring nesting and quoted names
fn scan_group(chars: &[char], i: usize, open: char, close: char) -> usize {
    let mut depth = 0usize;
    let mut in_quotes = false;
    let mut j = i;
    while j < chars.len() {
        let c = chars[j];
        if c == '"' {
            in_quotes = !in_quotes;
        } else if !in_quotes {
            if c == open {
                depth += 1;
            } else if c == close {
                depth -= 1;
                if depth == 0 {
                    return j + 1;
                }
            }
        }
        j += 1;
    }
    chars.len()
}

/// Argument encodings of a method encoding, without the return type and the
/// implicit `self` / `_cmd` receivers
pub fn method_argument_encodings(method_encoding: &str) -> Vec<String> {
    tokenize(method_encoding).into_iter().skip(3).collect()
}

/// Return encoding of a method or block signature
pub fn return_encoding(signature: &str) -> Option<String> {
    tokenize(signature).into_iter().next()
}

/// Strip qualifiers and frame offsets, recursing into block signatures.
/// Aggregate bodies are kept verbatim.
pub fn filter_encoding(encoding: &str) -> String {
    tokenize(encoding).iter().map(|t| filter_token(t)).collect()
}

fn filter_token(token: &str) -> String {
    let token = token.trim_start_matches(is_qualifier);
    if let Some(rest) = token.strip_prefix('^') {
        return format!("^{}", filter_token(rest));
    }
    if let Some(inner) = token
        .strip_prefix("@?<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        return format!("@?<{}>", filter_encoding(inner));
    }
    token.to_string()
}

/// Best-effort type name for an encoding
pub fn encoding_to_type(encoding: &str) -> String {
    let filtered = filter_encoding(encoding);
    if filtered.starts_with("@?") {
        return "block".to_string();
    }
    if filtered.starts_with("^?") {
        return "function_callback".to_string();
    }
    filtered
        .chars()
        .next()
        .and_then(|c| ENCODING_TYPE_NAMES.get(&c).copied())
        .unwrap_or(UNKNOWN_TYPE)
        .to_string()
}

/// True when an encoding carries no usable information
pub fn needs_resolving(encoding: &str) -> bool {
    let filtered = filter_encoding(encoding);
    filtered.is_empty() || filtered == UNKNOWN_ENCODING
}

/// Remove generic argument lists: `NSArray<NSString *> *` → `NSArray *`
pub fn strip_template_args(spelling: &str) -> String {
    let mut out = String::with_capacity(spelling.len());
    let mut depth = 0usize;
    for c in spelling.chars() {
        match c {
            '<' => depth += 1,
            '>' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `{Name=...}` / `(Name=...)` from member encodings; the bare `{Name}` form
/// when `members` is `None`
pub fn aggregate_encoding(
    open: char,
    close: char,
    name: &str,
    members: Option<&[&str]>,
) -> String {
    match members {
        Some(members) => format!("{open}{name}={}{close}", members.concat()),
        None => format!("{open}{name}{close}"),
    }
}
