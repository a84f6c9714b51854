//! Name helpers for selectors and aggregate spellings

/// Fold a selector into a method name: `initWithFrame:style:` → `initWithFrameStyle`
pub fn selector_to_name(selector: &str) -> String {
    let mut name = String::with_capacity(selector.len());
    for (i, part) in selector.split(':').filter(|p| !p.is_empty()).enumerate() {
        if i == 0 {
            name.push_str(part);
            continue;
        }
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Strip elaboration and qualifiers: `const struct CGPoint` → `CGPoint`
pub fn aggregate_name(spelling: &str) -> String {
    let mut rest = spelling.trim();
    loop {
        let stripped = ["const ", "volatile ", "struct ", "union ", "enum "]
            .iter()
            .find_map(|prefix| rest.strip_prefix(prefix));
        match stripped {
            Some(next) => rest = next.trim_start(),
            None => break,
        }
    }
    rest.to_string()
}

/// Front ends spell unnamed records as `struct (anonymous at foo.h:3:9)`
/// or `(unnamed struct at ...)`
pub fn is_anonymous_name(name: &str) -> bool {
    name.is_empty() || name.contains("(anonymous") || name.contains("(unnamed")
}
