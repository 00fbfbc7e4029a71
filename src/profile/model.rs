use serde::{Deserialize, Serialize};

/// The signed-in user's own profile, as kept in the local store.
///
/// Serialized with camelCase keys; `profileImage` is an opaque URL or data
/// URI and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub nickname: String,
    pub age: u32,
    pub mbti: String,
    pub tags: Vec<String>,
    pub description: String,
    #[serde(default)]
    pub profile_image: String,
}

impl Default for UserProfile {
    /// Profile seeded into an empty store.
    fn default() -> Self {
        Self {
            name: "배고픈 춘식이".to_string(),
            nickname: "HHHLL".to_string(),
            age: 22,
            mbti: "ENTJ".to_string(),
            tags: vec![
                "긍정적".to_string(),
                "독창적".to_string(),
                "무계획".to_string(),
            ],
            description: "명확한 비전과 논리적인 사고를 바탕으로 전략을 세우고, \
                          효율적으로 실행하는 것을 좋아합니다."
                .to_string(),
            profile_image: String::new(),
        }
    }
}

/// A card shown in the matching deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: u64,
    pub name: String,
    pub age: u32,
    pub mbti: String,
    pub nickname: String,
    pub tags: Vec<String>,
    pub description: String,
}

/// The built-in demo deck.
pub fn demo_candidates() -> Vec<CandidateProfile> {
    vec![
        CandidateProfile {
            id: 1,
            name: "배고픈 춘식이".to_string(),
            age: 22,
            mbti: "ENTJ".to_string(),
            nickname: "HHHLL".to_string(),
            tags: vec![
                "긍정적".to_string(),
                "독창적".to_string(),
                "무계획".to_string(),
            ],
            description: "명확한 비전과 논리적인 사고를 바탕으로 전략을 세우고, \
                          효율적으로 실행하는 것을 좋아합니다."
                .to_string(),
        },
        CandidateProfile {
            id: 2,
            name: "행복한 라이언".to_string(),
            age: 25,
            mbti: "INFP".to_string(),
            nickname: "HAPPY".to_string(),
            tags: vec![
                "창의적".to_string(),
                "감성적".to_string(),
                "예술가".to_string(),
            ],
            description: "따뜻한 마음과 풍부한 상상력으로 세상을 바라봅니다.".to_string(),
        },
    ]
}
