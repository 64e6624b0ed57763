// Category classification: fixed buckets, first-match substring rules.
//
// A keyword maps to exactly one category. The rule table is an ordered
// slice, never a map: declaration order is the priority order, and the
// first rule whose substring occurs in the keyword wins. Unmatched
// keywords land in Other.

use crate::models::CategoryBreakdown;

/// The closed set of topical buckets, in fixed enumeration order.
/// Display names are the product's Korean labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Music,
    Knowledge,
    Game,
    Life,
    Mood,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Music,
        Category::Knowledge,
        Category::Game,
        Category::Life,
        Category::Mood,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "음악",
            Category::Knowledge => "지식",
            Category::Game => "게임",
            Category::Life => "라이프",
            Category::Mood => "감성",
            Category::Other => "기타",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered classification rules. Keywords are already lowercased when they
/// reach this table.
const CATEGORY_RULES: &[(&str, Category)] = &[
    ("lofi", Category::Mood),
    ("힙합", Category::Music),
    ("pop", Category::Music),
    ("kpop", Category::Music),
    ("ost", Category::Music),
    ("study", Category::Knowledge),
    ("coding", Category::Knowledge),
    ("개발", Category::Knowledge),
    ("tutorial", Category::Knowledge),
    ("game", Category::Game),
    ("gaming", Category::Game),
    ("플레이", Category::Game),
    ("vlog", Category::Life),
    ("여행", Category::Life),
    ("요리", Category::Life),
    ("요가", Category::Life),
    ("힐링", Category::Mood),
    ("감성", Category::Mood),
    ("다큐", Category::Knowledge),
];

/// Classify a single keyword: first matching rule, or Other.
pub fn categorize(keyword: &str) -> Category {
    CATEGORY_RULES
        .iter()
        .find(|(needle, _)| keyword.contains(needle))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Other)
}

/// Build the category histogram for a keyword list.
///
/// Every category starts at zero; zero-count entries are filtered from the
/// output, so the emitted values always sum to the keyword count. Output
/// order is the fixed enumeration order, not count order.
pub fn build_histogram(keywords: &[String]) -> Vec<CategoryBreakdown> {
    let mut counts = [0u32; 6];
    for keyword in keywords {
        counts[categorize(keyword) as usize] += 1;
    }

    Category::ALL
        .iter()
        .zip(counts)
        .filter(|(_, value)| *value > 0)
        .map(|(category, value)| CategoryBreakdown {
            name: category.as_str().to_string(),
            value,
        })
        .collect()
}

/// The name of the top category by count, or None when the histogram is
/// empty.
///
/// Ties resolve to the first category reaching the maximum, scanning in
/// enumeration order. An explicit scan instead of a sort, so the pick is
/// the same on every run.
pub fn dominant_category(categories: &[CategoryBreakdown]) -> Option<&str> {
    let mut best: Option<&CategoryBreakdown> = None;
    for entry in categories {
        if best.map_or(true, |b| entry.value > b.value) {
            best = Some(entry);
        }
    }
    best.map(|b| b.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_categorize_substring_match() {
        assert_eq!(categorize("lofi"), Category::Mood);
        assert_eq!(categorize("kpop"), Category::Music);
        assert_eq!(categorize("플레이리스트"), Category::Game);
        assert_eq!(categorize("브이로그vlog"), Category::Life);
    }

    #[test]
    fn test_categorize_first_rule_wins() {
        // Contains both "lofi" (Mood) and "pop" (Music); lofi is declared first
        assert_eq!(categorize("lofipop"), Category::Mood);
    }

    #[test]
    fn test_categorize_unmatched_is_other() {
        // No rule substring occurs in 코딩; only the English "coding" is a rule
        assert_eq!(categorize("코딩"), Category::Other);
        assert_eq!(categorize("퇴근길"), Category::Other);
    }

    #[test]
    fn test_histogram_sums_to_keyword_count() {
        let kws = keywords(&["lofi", "코딩", "감성", "plays", "study"]);
        let histogram = build_histogram(&kws);
        let total: u32 = histogram.iter().map(|c| c.value).sum();
        assert_eq!(total, kws.len() as u32);
    }

    #[test]
    fn test_histogram_filters_zero_counts_keeps_enum_order() {
        let kws = keywords(&["감성", "study", "lofi"]);
        let histogram = build_histogram(&kws);
        let names: Vec<&str> = histogram.iter().map(|c| c.name.as_str()).collect();
        // Knowledge comes before Mood in enumeration order regardless of count
        assert_eq!(names, vec!["지식", "감성"]);
        assert!(histogram.iter().all(|c| c.value > 0));
    }

    #[test]
    fn test_histogram_empty_keywords() {
        assert!(build_histogram(&[]).is_empty());
    }

    #[test]
    fn test_dominant_category_ties_resolve_in_enum_order() {
        let kws = keywords(&["힙합", "감성"]);
        let histogram = build_histogram(&kws);
        // Music and Mood both count 1; Music enumerates first
        assert_eq!(dominant_category(&histogram), Some("음악"));
    }

    #[test]
    fn test_dominant_category_empty() {
        assert_eq!(dominant_category(&[]), None);
    }
}
