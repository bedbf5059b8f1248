//! 규칙 엔진 설정
//!
//! 시간/장소 단어 목록과 방향동사 매핑. 기본값은 내장 테이블이며
//! 테스트나 지역화를 위해 교체할 수 있습니다.

use serde::{Deserialize, Serialize};

/// 방향동사 하나와 그 방향 태그
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DirectionalVerb {
    /// 동사 기본형 (예: "주다")
    pub verb: String,
    /// 방향 태그 (예: "{dir:1→3}")
    pub tag: String,
}

impl DirectionalVerb {
    pub fn new(verb: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            tag: tag.into(),
        }
    }
}

/// 규칙 테이블
///
/// `directional_verbs`는 순서가 있는 목록입니다. 한 토큰에 여러 동사가
/// 부분 문자열로 들어 있으면 목록에서 먼저 나오는 동사의 태그가 붙습니다.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RuleConfig {
    /// 앞으로 옮길 시간 단어
    #[serde(default = "default_time_words")]
    pub time_words: Vec<String>,
    /// 시간 단어 다음으로 옮길 장소 단어
    #[serde(default = "default_place_words")]
    pub place_words: Vec<String>,
    #[serde(default = "default_directional_verbs")]
    pub directional_verbs: Vec<DirectionalVerb>,
}

fn default_time_words() -> Vec<String> {
    [
        "오늘", "내일", "어제", "지금", "나중에", "아침", "점심", "저녁", "오전", "오후", "주말",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn default_place_words() -> Vec<String> {
    [
        "학교", "집", "병원", "식당", "회사", "가게", "은행", "역", "공원", "도서관", "카페", "마트",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

fn default_directional_verbs() -> Vec<DirectionalVerb> {
    [
        ("가다", "{dir:1→3}"),
        ("오다", "{dir:3→1}"),
        ("주다", "{dir:1→3}"),
        ("받다", "{dir:3→1}"),
        ("보여주다", "{dir:1→3}"),
        ("도와주다", "{dir:1→3}"),
        ("신고하다", "{dir:1→3}"),
    ]
    .iter()
    .map(|(verb, tag)| DirectionalVerb::new(*verb, *tag))
    .collect()
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            time_words: default_time_words(),
            place_words: default_place_words(),
            directional_verbs: default_directional_verbs(),
        }
    }
}

impl RuleConfig {
    /// 기본 테이블로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 시간 단어 목록 교체
    pub fn with_time_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.time_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// 장소 단어 목록 교체
    pub fn with_place_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.place_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// 방향동사 매핑 교체 (순서 유지)
    pub fn with_directional_verbs(mut self, verbs: Vec<DirectionalVerb>) -> Self {
        self.directional_verbs = verbs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = RuleConfig::default();
        assert_eq!(config.time_words.len(), 11);
        assert_eq!(config.place_words.len(), 12);
        assert_eq!(config.directional_verbs[0], DirectionalVerb::new("가다", "{dir:1→3}"));
        assert_eq!(config.directional_verbs[1].tag, "{dir:3→1}");
    }

    #[test]
    fn test_builder_pattern() {
        let config = RuleConfig::new()
            .with_time_words(["새벽"])
            .with_place_words(vec!["바다".to_string()])
            .with_directional_verbs(vec![DirectionalVerb::new("묻다", "{dir:1→2}")]);

        assert_eq!(config.time_words, vec!["새벽"]);
        assert_eq!(config.place_words, vec!["바다"]);
        assert_eq!(config.directional_verbs.len(), 1);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let json = r#"{ "time_words": ["새벽"] }"#;
        let config: RuleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.time_words, vec!["새벽"]);
        assert_eq!(config.place_words, RuleConfig::default().place_words);
        assert_eq!(config.directional_verbs.len(), 7);
    }
}
