// Two-profile comparison: set semantics over keyword lists.
//
// Stateless: callers pass whichever lists they want compared. The result
// view passes already-masked keywords here, which keeps masked words
// hidden but has a known quirk: distinct sensitive keywords collapse into
// the shared mask token and register as common. That behavior is kept
// deliberately; see the tests.

use serde::Serialize;

/// The partition of two keyword lists by exact string equality.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Keywords present in both lists, in the order they appear in mine.
    pub common: Vec<String>,
    /// Keywords only in my list, order preserved.
    pub unique_mine: Vec<String>,
    /// Keywords only in the friend's list, order preserved from theirs.
    pub unique_friend: Vec<String>,
}

pub fn compare(mine: &[String], friend: &[String]) -> Comparison {
    Comparison {
        common: mine
            .iter()
            .filter(|&keyword| friend.contains(keyword))
            .cloned()
            .collect(),
        unique_mine: mine
            .iter()
            .filter(|&keyword| !friend.contains(keyword))
            .cloned()
            .collect(),
        unique_friend: friend
            .iter()
            .filter(|&keyword| !mine.contains(keyword))
            .cloned()
            .collect(),
    }
}

/// Three conversation-starter questions seeded from each side's first
/// unique keyword. The third question is static.
pub fn generate_questions(mine: &[String], friend: &[String]) -> [String; 3] {
    let comparison = compare(mine, friend);
    let mine_pick = comparison
        .unique_mine
        .first()
        .map(String::as_str)
        .unwrap_or("새로운");
    let friend_pick = comparison
        .unique_friend
        .first()
        .map(String::as_str)
        .unwrap_or("특정");

    [
        format!("요즘 {mine_pick} 콘텐츠를 어떻게 발견해?"),
        format!("{friend_pick} 장르에 빠진 계기가 있어?"),
        "우리 공통 키워드 말고 서로 추천하고 싶은 콘텐츠 하나씩 알려줘.".to_string(),
    ]
}
