//! 문장 유형 판별과 비수지 신호(NMM) 태그
//!
//! 정규화 전 원문을 기준으로 판별합니다. 유형은 우선순위대로 검사하며
//! 첫 번째로 일치한 유형 하나만 사용합니다 (의문 > 부정 > 명령 > 감탄 > 평서).

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 문장 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    Question,
    Negative,
    Imperative,
    Exclamatory,
    Declarative,
}

impl SentenceType {
    /// 유형별 NMM 태그
    pub fn nmm_tag(&self) -> &'static str {
        match self {
            SentenceType::Question => "{NMM:WH?}",
            SentenceType::Negative => "{NMM:neg}",
            SentenceType::Imperative => "{NMM:imp}",
            SentenceType::Exclamatory => "{NMM:excl}",
            SentenceType::Declarative => "{NMM:neutral}",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Question => "question",
            SentenceType::Negative => "negative",
            SentenceType::Imperative => "imperative",
            SentenceType::Exclamatory => "exclamatory",
            SentenceType::Declarative => "declarative",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    /// 물음표, 의문형 어미, 의문사
    static ref QUESTION: Regex =
        Regex::new(r"\?|니까$|나요$|까요$|어디|언제|무엇|누구|왜|어떻게|뭐").unwrap();

    /// 단독 부정 부사(안/못/없)는 단어 경계로만 일치
    static ref NEGATIVE: Regex =
        Regex::new(r"\b안\b|\b못\b|\b없\b|아니|싫|싶지\s*않|말지\s*말").unwrap();

    /// 명령형 어미 또는 금지 표현 ("하지 마", "하지 마라")
    static ref IMPERATIVE: Regex =
        Regex::new(r"(세요|어라|아라|가라|오라|해라)$|하지\s*마").unwrap();
}

/// 원문의 문장 유형 판별
pub fn classify_sentence(text: &str) -> SentenceType {
    if QUESTION.is_match(text) {
        SentenceType::Question
    } else if NEGATIVE.is_match(text) {
        SentenceType::Negative
    } else if IMPERATIVE.is_match(text) {
        SentenceType::Imperative
    } else if text.contains('!') {
        // 감탄사(아!, 오!, 와!, 어머!, 세상에!)는 모두 '!'를 포함
        SentenceType::Exclamatory
    } else {
        SentenceType::Declarative
    }
}
