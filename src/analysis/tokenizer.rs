// Tokenization and frequency ranking.
//
// The pipeline is deliberately dumb: lowercase, split on anything that is
// not a letter or digit, drop stop words and one-character tokens, count,
// keep the most frequent. No stemming, no language detection. Ties are
// broken by first occurrence so output never depends on hash map
// iteration order.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

/// How many ranked keywords an analysis keeps.
pub const MAX_KEYWORDS: usize = 10;

/// Fixed domain stop words for the two languages the product targets:
/// Korean particles and connectives, plus the platform-generic nouns
/// (영상, 노래, 듣기, 보기) that would otherwise top every profile.
const DOMAIN_STOP_WORDS: &[&str] = &[
    "the",
    "and",
    "that",
    "this",
    "with",
    "from",
    "your",
    "just",
    "have",
    "you",
    "for",
    "are",
    "가",
    "이",
    "은",
    "는",
    "을",
    "를",
    "의",
    "에",
    "와",
    "과",
    "한",
    "그리고",
    "하지만",
    "또",
    "더",
    "보다",
    "영상",
    "노래",
    "듣기",
    "보기",
];

// The stop-words crate covers general English function words; the domain
// list above layers the Korean and product-specific entries on top.
static STOP_WORDS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let mut set: HashSet<String> = get(LANGUAGE::English).into_iter().collect();
    set.extend(DOMAIN_STOP_WORDS.iter().map(|w| (*w).to_string()));
    set
});

/// Split raw text into normalized word tokens.
///
/// Token boundaries are runs of characters that are neither letters nor
/// digits (Unicode-aware), so punctuation, whitespace, emoji, and symbols
/// all separate tokens. Tokens of length one and stop words are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.to_lowercase();
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() > 1 && !STOP_WORDS.contains(*word))
        .map(str::to_string)
        .collect()
}

/// Count token frequency and return the top `limit` tokens, highest count
/// first.
///
/// Counting runs over an insertion-ordered vector, not a bare map, and the
/// sort is stable, so equal counts keep first-occurrence order and the
/// ranking is reproducible on every run.
pub fn rank_keywords(tokens: &[String], limit: usize) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(limit).map(|(word, _)| word).collect()
}
