//! 형태소 분석 (어미/조사 제거)
//!
//! 사전에 바로 걸리지 않는 활용형에서 흔한 어미와 조사를 떼어
//! 사전 조회용 어간을 복원합니다. 완전한 형태소 분석기가 아니라
//! 우선순위가 정해진 접미사 패턴 목록이며, 첫 번째로 일치한 패턴이 이깁니다.
//!
//! 1. 동사 어미: 어간 + "다"로 기본형 복원 (예: "가요" -> "가다")
//! 2. 조사: 앞부분이 어간 (예: "학교에" -> "학교")
//! 3. "입니다"/"니다" 단순 제거
//! 4. 그 외: 원형 그대로

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// 일치한 접미사 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphemeType {
    /// 었습니다/았습니다/였습니다
    PastFormal,
    /// 습니다/ㅂ니다
    Formal,
    /// 었어요/았어요/였어요
    PastPolite,
    /// 어요/아요/여요
    Polite,
    /// 을게요/ㄹ게요
    Future,
    /// 세요/으세요
    Honorific,
    /// 요
    PoliteEnding,
    /// 어/아/여
    Casual,
    Particle,
    Simple,
    None,
}

impl MorphemeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MorphemeType::PastFormal => "past_formal",
            MorphemeType::Formal => "formal",
            MorphemeType::PastPolite => "past_polite",
            MorphemeType::Polite => "polite",
            MorphemeType::Future => "future",
            MorphemeType::Honorific => "honorific",
            MorphemeType::PoliteEnding => "polite_ending",
            MorphemeType::Casual => "casual",
            MorphemeType::Particle => "particle",
            MorphemeType::Simple => "simple",
            MorphemeType::None => "none",
        }
    }
}

impl fmt::Display for MorphemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 토큰 하나의 분석 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MorphemeResult {
    /// 사전 조회용 어간
    pub stem: String,
    /// 떼어낸 어미/조사 (없으면 빈 문자열)
    pub suffix: String,
    pub morpheme_type: MorphemeType,
    /// 분석 전 토큰
    pub original: String,
}

impl MorphemeResult {
    fn unchanged(word: &str) -> Self {
        Self {
            stem: word.to_string(),
            suffix: String::new(),
            morpheme_type: MorphemeType::None,
            original: word.to_string(),
        }
    }
}

lazy_static! {
    /// 동사 어미 패턴 (순서 = 우선순위)
    ///
    /// 과거형은 같은 어미의 현재형보다 먼저 검사해야 "주었어요" -> "주다"가 됩니다.
    static ref VERB_ENDINGS: Vec<(Regex, MorphemeType)> = vec![
        (Regex::new(r"([가-힣]+)(었습니다|았습니다|였습니다)$").unwrap(), MorphemeType::PastFormal),
        (Regex::new(r"([가-힣]+)(습니다|ㅂ니다)$").unwrap(), MorphemeType::Formal),
        (Regex::new(r"([가-힣]+)(었어요|았어요|였어요)$").unwrap(), MorphemeType::PastPolite),
        (Regex::new(r"([가-힣]+)(어요|아요|여요)$").unwrap(), MorphemeType::Polite),
        (Regex::new(r"([가-힣]+)(을게요|ㄹ게요)$").unwrap(), MorphemeType::Future),
        (Regex::new(r"([가-힣]+)(세요|으세요)$").unwrap(), MorphemeType::Honorific),
        (Regex::new(r"([가-힣]+)(요)$").unwrap(), MorphemeType::PoliteEnding),
        (Regex::new(r"([가-힣]+)(어|아|여)$").unwrap(), MorphemeType::Casual),
    ];

    /// 조사 패턴: 한 글자 조사 문자 집합 또는 "에서"/"으로"
    static ref PARTICLE: Regex =
        Regex::new(r"([가-힣]+)([은는이가을를에의로와과부터까지도만]|에서|으로)$").unwrap();

    /// "입니다"는 위치와 무관하게, "니다"는 끝에서만 제거
    static ref SIMPLE_ENDING: Regex = Regex::new(r"입니다|니다$").unwrap();
}

/// 토큰에서 어미/조사를 떼어 어간을 복원
///
/// # Examples
/// ```
/// use ksl_gloss::morphology::{analyze_morpheme, MorphemeType};
///
/// let result = analyze_morpheme("가요");
/// assert_eq!(result.stem, "가다");
/// assert_eq!(result.morpheme_type, MorphemeType::PoliteEnding);
///
/// let result = analyze_morpheme("학교에서");
/// assert_eq!(result.stem, "학교");
/// assert_eq!(result.suffix, "에서");
/// ```
pub fn analyze_morpheme(word: &str) -> MorphemeResult {
    for (pattern, morpheme_type) in VERB_ENDINGS.iter() {
        if let Some((stem, suffix)) = split_captures(pattern, word) {
            log::trace!("어미 분석: {} -> {}다 + {} ({})", word, stem, suffix, morpheme_type);
            return MorphemeResult {
                stem: format!("{}다", stem),
                suffix: suffix.to_string(),
                morpheme_type: *morpheme_type,
                original: word.to_string(),
            };
        }
    }

    if let Some((stem, suffix)) = split_captures(&PARTICLE, word) {
        log::trace!("조사 분석: {} -> {} + {}", word, stem, suffix);
        return MorphemeResult {
            stem: stem.to_string(),
            suffix: suffix.to_string(),
            morpheme_type: MorphemeType::Particle,
            original: word.to_string(),
        };
    }

    let cleaned = SIMPLE_ENDING.replace_all(word, "");
    if cleaned != word && !cleaned.is_empty() {
        let suffix = word.replacen(&*cleaned, "", 1);
        return MorphemeResult {
            stem: cleaned.into_owned(),
            suffix,
            morpheme_type: MorphemeType::Simple,
            original: word.to_string(),
        };
    }

    MorphemeResult::unchanged(word)
}

/// (어간, 접미사) 캡처. 두 패턴 그룹은 모두 필수이므로 일치하면 항상 채워짐
fn split_captures<'h>(pattern: &Regex, word: &'h str) -> Option<(&'h str, &'h str)> {
    let caps = pattern.captures(word)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}
