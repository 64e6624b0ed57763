// Data models: the records that flow through the pipeline and storage.
//
// These are separate from both the analysis functions and the store so
// either side can use them without depending on the other. Field names
// serialize in camelCase to keep the persisted JSON record compatible
// with the original web client's shape.

use serde::{Deserialize, Serialize};

/// Where the history text came from. Supplied by the caller, never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    Spotify,
    Melon,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Spotify => "Spotify",
            Platform::Melon => "Melon",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One non-zero bucket of the category histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub name: String,
    pub value: u32,
}

/// The complete output of one analysis run. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub platform: Platform,
    pub input_text: String,
    /// Top keywords, at most ten, highest frequency first.
    /// Ties keep first-occurrence order.
    pub keywords: Vec<String>,
    /// Non-zero categories only, in fixed enumeration order.
    pub categories: Vec<CategoryBreakdown>,
    /// Exactly three sentences.
    pub summary: Vec<String>,
    pub catchphrase: String,
    pub algo_type: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// An analysis result plus the two user-controlled display flags.
/// Flags start false and may be toggled any number of times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub is_public: bool,
    pub allow_sensitive: bool,
}

impl StoredProfile {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            result,
            is_public: false,
            allow_sensitive: false,
        }
    }
}

/// The comparison counterpart. Same shape as a profile minus the flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendProfile {
    pub name: String,
    pub platform: Platform,
    pub keywords: Vec<String>,
    pub categories: Vec<CategoryBreakdown>,
    pub catchphrase: String,
    pub algo_type: String,
}

/// Fixed stand-in "other party" for comparison. There is no multi-user
/// exchange, so the friend side is predeclared.
pub fn sample_friend() -> FriendProfile {
    FriendProfile {
        name: "친구 리나".to_string(),
        platform: Platform::Spotify,
        keywords: [
            "citypop",
            "재즈",
            "night",
            "workout",
            "플레이리스트",
            "러닝",
            "감성",
            "힐링",
            "lofi",
            "vlog",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        categories: vec![
            CategoryBreakdown {
                name: "음악".to_string(),
                value: 4,
            },
            CategoryBreakdown {
                name: "감성".to_string(),
                value: 3,
            },
            CategoryBreakdown {
                name: "라이프".to_string(),
                value: 3,
            },
        ],
        catchphrase: "재즈와 러닝으로 하루를 리셋하는 타입".to_string(),
        algo_type: "AM-음악-CI".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_display() {
        assert_eq!(Platform::YouTube.to_string(), "YouTube");
        assert_eq!(Platform::Melon.as_str(), "Melon");
    }

    #[test]
    fn test_stored_profile_starts_private() {
        let result = AnalysisResult {
            platform: Platform::Spotify,
            input_text: "lofi".to_string(),
            keywords: vec!["lofi".to_string()],
            categories: vec![],
            summary: vec![],
            catchphrase: String::new(),
            algo_type: String::new(),
            created_at: String::new(),
        };
        let profile = StoredProfile::new(result);
        assert!(!profile.is_public);
        assert!(!profile.allow_sensitive);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let result = AnalysisResult {
            platform: Platform::YouTube,
            input_text: "lofi playlist".to_string(),
            keywords: vec!["lofi".to_string()],
            categories: vec![CategoryBreakdown {
                name: "감성".to_string(),
                value: 1,
            }],
            summary: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            catchphrase: "c".to_string(),
            algo_type: "AM-감성-LO".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
        };
        let profile = StoredProfile::new(result);
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"inputText\""));
        assert!(json.contains("\"algoType\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"isPublic\""));
        assert!(json.contains("\"allowSensitive\""));
    }

    #[test]
    fn test_sample_friend_shape() {
        let friend = sample_friend();
        assert_eq!(friend.keywords.len(), 10);
        let total: u32 = friend.categories.iter().map(|c| c.value).sum();
        assert_eq!(total, 10);
    }
}
