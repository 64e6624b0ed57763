// Sensitive-keyword masking: a pure display filter.
//
// Sensitive keywords stay in the stored record unmasked; only rendering is
// affected. Unmasking is therefore just a flag flip, no recomputation.

/// Topics treated as personally sensitive. A keyword is sensitive when it
/// contains any of these substrings. Keywords reach this module already
/// lowercased, so plain containment is effectively case-insensitive.
const SENSITIVE_KEYWORDS: &[&str] = &[
    "정치",
    "종교",
    "성",
    "섹스",
    "건강",
    "질병",
    "병",
    "우울",
    "암",
    "임신",
    "약물",
    "도박",
    "범죄",
];

/// What a sensitive keyword renders as.
pub const MASK_TOKEN: &str = "•••";

pub fn is_sensitive(word: &str) -> bool {
    SENSITIVE_KEYWORDS.iter().any(|needle| word.contains(needle))
}

/// The word itself, or the mask token when it is sensitive.
pub fn mask_keyword(word: &str) -> &str {
    if is_sensitive(word) {
        MASK_TOKEN
    } else {
        word
    }
}

/// Element-wise masked view of a keyword list. Identity when the owner
/// allows sensitive display. Length and order always match the input.
pub fn masked_keywords(keywords: &[String], allow_sensitive: bool) -> Vec<String> {
    if allow_sensitive {
        keywords.to_vec()
    } else {
        keywords
            .iter()
            .map(|word| mask_keyword(word).to_string())
            .collect()
    }
}
