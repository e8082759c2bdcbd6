use crate::spelling::{MIN_TOKEN_CHARS, tokenize};

#[test]
fn test_tokens_are_long_lowercase_words() {
    let text = "Nexign — лидер рынка BSS/OSS! Звоните: +7 (495) 000-00-00, E-mail: info@nexign.com";
    let tokens = tokenize(text);

    assert!(!tokens.is_empty());
    for token in &tokens {
        assert!(token.chars().count() >= MIN_TOKEN_CHARS, "{}", token);
        assert!(
            token.chars().all(|c| c.is_alphanumeric() || c == '_'),
            "{}",
            token
        );
        assert_eq!(token, &token.to_lowercase());
    }
}

#[test]
fn test_length_boundary() {
    assert!(tokenize("the").is_empty());
    assert_eq!(tokenize("word"), vec!["word"]);
    assert!(tokenize("мир").is_empty());
    assert_eq!(tokenize("мира"), vec!["мира"]);
}

#[test]
fn test_punctuation_is_removed_not_split() {
    assert_eq!(tokenize("don't"), vec!["dont"]);
    assert_eq!(tokenize("nexign.com"), vec!["nexigncom"]);
    assert_eq!(tokenize("(hello), [world]!"), vec!["hello", "world"]);
}

#[test]
fn test_combining_marks_are_stripped() {
    // Stress accent (U+0301) on a decomposed vowel
    assert_eq!(tokenize("Пре\u{301}дприятие"), vec!["предприятие"]);
    assert_eq!(tokenize("мо\u{301}ре зна\u{301}ние"), vec!["море", "знание"]);
    // Removing the mark can shrink a token below the length limit
    assert!(tokenize("э\u{301}то").is_empty());
}

#[test]
fn test_order_and_duplicates_kept() {
    assert_eq!(
        tokenize("Beta alpha BETA gamma"),
        vec!["beta", "alpha", "beta", "gamma"]
    );
}

#[test]
fn test_digits_and_underscores_are_word_characters() {
    assert_eq!(tokenize("2024 snake_case 42"), vec!["2024", "snake_case"]);
}

#[test]
fn test_short_or_empty_text() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t ").is_empty());
    assert!(tokenize("a to the и в на, ...").is_empty());
}

#[test]
fn test_counts_characters_not_bytes() {
    // Three Cyrillic letters are six bytes
    assert!(tokenize("это").is_empty());
    assert_eq!(tokenize("ёжик"), vec!["ёжик"]);
}
