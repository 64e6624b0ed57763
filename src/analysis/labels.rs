// Derived display labels: summary sentences, catchphrase, type code.
//
// The wording is product copy carried over verbatim; the contract is the
// shape. Every generator is total: missing keywords or an empty histogram
// fall back to fixed literals instead of failing.

use crate::models::CategoryBreakdown;

use super::categories;

/// Three fixed-template sentences referencing the top keyword, the second
/// keyword, and the dominant category. The third sentence is static.
pub fn build_summary(keywords: &[String], categories: &[CategoryBreakdown]) -> Vec<String> {
    let primary = keywords.first().map(String::as_str).unwrap_or("트렌드");
    let secondary = keywords.get(1).map(String::as_str).unwrap_or("발견");
    let dominant = categories::dominant_category(categories).unwrap_or("탐험");

    vec![
        format!("당신의 알고리즘은 {primary} 중심으로 빠르게 반응해요."),
        format!("{secondary} 키워드를 통해 {dominant} 영역을 깊게 파고들고 있어요."),
        "짧은 시간에도 다양한 주제를 교차 소비하는 다이내믹한 패턴입니다.".to_string(),
    ]
}

/// One templated sentence built from the top two keywords.
pub fn build_catchphrase(keywords: &[String]) -> String {
    let primary = keywords.first().map(String::as_str).unwrap_or("탐험");
    let secondary = keywords.get(1).map(String::as_str).unwrap_or("리듬");
    format!("{primary}로 시작해 {secondary}로 확장하는 알고리즘 탐험가")
}

/// Compact type code: `AM-{category prefix}-{keyword prefix}`.
///
/// Prefixes are the first two characters of the dominant category name and
/// of the top keyword (upper-cased). Fallbacks when the histogram or the
/// keyword list is empty: "X" for the category slot, "AL" for the keyword
/// slot, so empty input yields "AM-X-AL".
pub fn build_algo_type(keywords: &[String], categories: &[CategoryBreakdown]) -> String {
    let dominant: String = categories::dominant_category(categories)
        .unwrap_or("X")
        .chars()
        .take(2)
        .collect();
    let core = keywords
        .first()
        .map(|word| word.chars().take(2).collect::<String>().to_uppercase())
        .unwrap_or_else(|| "AL".to_string());
    format!("AM-{dominant}-{core}")
}
