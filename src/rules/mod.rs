//! KSL 변환 규칙
//!
//! 글로스 토큰 열에 적용하는 두 재작성 규칙과 문장 유형 판별:
//!
//! 1. **시간/장소 전면화**: 시간 -> 장소 -> 나머지 순서
//! 2. **방향동사 태그**: `주다` -> `주다 {dir:1→3}`
//! 3. **문장 유형**: 원문 기준, NMM 태그 하나로 매핑
//!
//! ```
//! use ksl_gloss::rules::{RuleSet, SentenceType};
//!
//! let rules = RuleSet::default();
//! let tokens = vec!["저".to_string(), "학교".to_string(), "내일".to_string(), "가다".to_string()];
//! assert_eq!(rules.apply(tokens), vec!["내일", "학교", "저", "가다 {dir:1→3}"]);
//! assert_eq!(rules.classify_sentence("어디 가세요?"), SentenceType::Question);
//! ```

mod config;
mod directional;
mod reorder;
mod sentence;

pub use config::{DirectionalVerb, RuleConfig};
pub use directional::{find_directional_tag, tag_directional};
pub use reorder::front_time_place;
pub use sentence::{classify_sentence, SentenceType};

/// 규칙 테이블에 묶인 규칙 집합
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    config: RuleConfig,
}

impl RuleSet {
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// 현재 규칙 테이블
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// 원문의 문장 유형
    pub fn classify_sentence(&self, text: &str) -> SentenceType {
        classify_sentence(text)
    }

    /// 시간/장소 단어를 앞으로
    pub fn front_time_place(&self, tokens: Vec<String>) -> Vec<String> {
        front_time_place(tokens, &self.config.time_words, &self.config.place_words)
    }

    /// 방향동사 태그 추가
    pub fn tag_directional(&self, tokens: Vec<String>) -> Vec<String> {
        tag_directional(tokens, &self.config.directional_verbs)
    }

    /// 전면화 후 방향동사 태그
    pub fn apply(&self, tokens: Vec<String>) -> Vec<String> {
        let fronted = self.front_time_place(tokens);
        self.tag_directional(fronted)
    }
}
