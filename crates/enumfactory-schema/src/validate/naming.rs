use crate::MAX_NAME_LEN;
use std::{collections::HashSet, sync::LazyLock};

///
/// RESERVED_WORDS
/// rust keywords, plus names that collide with the generated items
///

static RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut words = Vec::new();

    // rust
    // https://doc.rust-lang.org/reference/keywords.html
    words.extend(vec![
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
        "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
        "unsafe", "use", "where", "while", "async", "await", "dyn", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
    ]);

    // generated associated items
    words.extend(vec![
        "TOTAL", "COUNT", "LABELS", "LABEL_SLOTS", "MEMBERS", "ENTRIES", "value", "from_value",
        "name", "is_valid", "to_label", "slot_of",
    ]);

    words.into_iter().collect()
});

/// Check if a name is a reserved word.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word)
}

/// Ensure a name can be emitted verbatim as a Rust identifier.
pub fn validate_ident(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("name is empty".to_string());
    };

    if name.len() > MAX_NAME_LEN {
        return Err(format!("name exceeds max length {MAX_NAME_LEN}"));
    }
    if !name.is_ascii() {
        return Err("name must be ASCII".to_string());
    }
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err("name must start with a letter or '_'".to_string());
    }
    if name == "_" {
        return Err("'_' is not a usable name".to_string());
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!("character '{c}' is not allowed"));
    }
    if is_reserved_word(name) {
        return Err(format!("the word '{name}' is reserved"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_reserved_words() {
        assert!(validate_ident("").is_err(), "empty names should fail");
        assert!(
            validate_ident("match").is_err(),
            "reserved keywords should be rejected"
        );
        assert!(validate_ident("TOTAL").is_err());
    }

    #[test]
    fn rejects_non_identifiers() {
        assert!(validate_ident("1st").is_err());
        assert!(validate_ident("not-found").is_err());
        assert!(validate_ident("_").is_err());
        assert!(validate_ident("café").is_err());
    }

    #[test]
    fn accepts_identifier_styles() {
        for name in ["RED", "NOT_FOUND", "NotFound", "_internal", "v2"] {
            assert!(validate_ident(name).is_ok(), "{name} should be accepted");
        }
    }
}
