//! 한국어 -> KSL 글로스 통합 변환기
//!
//! 정규화 -> 토큰 분리 -> 사전 매핑 -> 규칙 적용 -> 글로스/태그 생성 -> 신뢰도

use serde::{Deserialize, Serialize};

use crate::config::KslConfig;
use crate::dictionary::Dictionary;
use crate::error::{KslError, Result};
use crate::rules::{RuleConfig, RuleSet, SentenceType};

use super::confidence::{calculate_confidence, ConfidenceLevel, ConfidenceSummary};
use super::mapper::map_to_gloss;
use super::normalizer::{normalize_text, tokenize};

/// 변환 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// 입력 원문 (정규화 전)
    pub original: String,
    /// 공백으로 이은 글로스
    pub gloss: String,
    /// NMM 태그
    pub tags: String,
    /// 사전으로 풀린 토큰 비율 (0.0 ~ 1.0)
    pub confidence: f64,
}

impl ConversionResult {
    /// 변환 실패 시 원문을 그대로 돌려주는 결과
    pub fn passthrough(text: &str) -> Self {
        Self {
            original: text.to_string(),
            gloss: text.to_string(),
            tags: SentenceType::Declarative.nmm_tag().to_string(),
            confidence: 0.0,
        }
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.confidence)
    }
}

/// KSL 변환기
///
/// 사전과 규칙 테이블은 생성 후 변경되지 않으므로 여러 스레드에서
/// `&KslConverter`로 동시에 호출해도 됩니다.
#[derive(Debug, Clone)]
pub struct KslConverter {
    dictionary: Dictionary,
    rules: RuleSet,
    /// 입력 최대 길이 (문자 수, `None`이면 제한 없음)
    max_input_chars: Option<usize>,
}

impl Default for KslConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl KslConverter {
    /// 내장 사전과 기본 규칙으로 생성
    pub fn new() -> Self {
        Self::with_tables(Dictionary::builtin(), RuleConfig::default())
    }

    /// 사전과 규칙 테이블을 지정하여 생성
    pub fn with_tables(dictionary: Dictionary, rules: RuleConfig) -> Self {
        Self {
            dictionary,
            rules: RuleSet::new(rules),
            max_input_chars: None,
        }
    }

    /// 입력 길이 제한 설정
    ///
    /// 제한을 넘는 입력은 `try_convert`에서 `KslError::InputTooLong`,
    /// `convert`에서는 원문 그대로의 결과가 됩니다.
    pub fn with_max_input_chars(mut self, max: usize) -> Self {
        self.max_input_chars = Some(max);
        self
    }

    /// 설정에서 생성
    ///
    /// `dictionary_path`가 있으면 해당 JSON 사전으로 내장 사전을 확장합니다.
    pub fn from_config(config: &KslConfig) -> Result<Self> {
        let mut dictionary = Dictionary::builtin();
        if let Some(ref path) = config.dictionary_path {
            dictionary = dictionary.extend(Dictionary::load(path)?);
        }
        let mut converter = Self::with_tables(dictionary, config.rules.clone());
        converter.max_input_chars = config.max_input_chars;
        Ok(converter)
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// 텍스트를 KSL 글로스로 변환
    ///
    /// 빈 입력(공백만 포함)이면 `None`. `try_convert`가 실패해도 에러를 전파하지 않고
    /// 원문을 그대로 담은 결과(신뢰도 0)를 돌려줍니다.
    ///
    /// # Examples
    /// ```
    /// use ksl_gloss::KslConverter;
    ///
    /// let converter = KslConverter::new();
    /// let result = converter.convert("저는 내일 학교에 가요").unwrap();
    /// assert_eq!(result.gloss, "내일 학교 저 가다 {dir:1→3}");
    /// assert_eq!(result.tags, "{NMM:neutral}");
    /// assert!(converter.convert("   ").is_none());
    /// ```
    pub fn convert(&self, text: &str) -> Option<ConversionResult> {
        match self.try_convert(text) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("KSL 변환 오류, 원문 유지: {}", e);
                Some(ConversionResult::passthrough(text))
            }
        }
    }

    /// 실패를 `Err`로 돌려주는 변환
    ///
    /// 입력 길이 제한을 넘으면 `KslError::InputTooLong`.
    pub fn try_convert(&self, text: &str) -> Result<Option<ConversionResult>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        if let Some(max) = self.max_input_chars {
            let len = text.chars().count();
            if len > max {
                return Err(KslError::InputTooLong { len, max });
            }
        }

        // 1. 정규화
        let normalized = normalize_text(text);
        // 2. 토큰 분리
        let tokens = tokenize(&normalized);
        // 3. 사전 매핑
        let gloss_tokens = map_to_gloss(&self.dictionary, &tokens);
        log::debug!("사전 매핑: {:?} -> {:?}", tokens, gloss_tokens);
        // 4. 전면화 + 방향동사 태그
        let processed = self.rules.apply(gloss_tokens);
        // 5. 글로스
        let gloss = processed.join(" ");
        // 6. 문장 유형 태그 (원문 기준)
        let sentence_type = self.rules.classify_sentence(text);
        // 7. 신뢰도 (재배치 전 원문 토큰 기준)
        let confidence = calculate_confidence(&self.dictionary, &tokens);

        log::debug!(
            "KSL 변환: '{}' -> '{}' ({}, {:.2})",
            text,
            gloss,
            sentence_type,
            confidence
        );

        Ok(Some(ConversionResult {
            original: text.to_string(),
            gloss,
            tags: sentence_type.nmm_tag().to_string(),
            confidence,
        }))
    }

    /// 여러 텍스트를 차례로 변환
    pub fn convert_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Option<ConversionResult>> {
        texts.iter().map(|t| self.convert(t.as_ref())).collect()
    }

    /// 여러 텍스트를 변환하고 신뢰도 요약까지 반환 (빈 입력은 요약에서 제외)
    pub fn summarize<S: AsRef<str>>(&self, texts: &[S]) -> ConfidenceSummary {
        let results: Vec<ConversionResult> =
            self.convert_all(texts).into_iter().flatten().collect();
        ConfidenceSummary::from_results(&results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        let converter = KslConverter::new();
        let result = converter.convert("안녕하세요").unwrap();
        assert_eq!(result.original, "안녕하세요");
        assert_eq!(result.gloss, "안녕");
        assert_eq!(result.tags, "{NMM:imp}");
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_input() {
        let converter = KslConverter::new();
        assert!(converter.convert("").is_none());
        assert!(converter.convert(" \t\n").is_none());
        assert!(converter.try_convert("").unwrap().is_none());
    }

    #[test]
    fn test_punctuation_only() {
        let converter = KslConverter::new();
        let result = converter.convert("?!").unwrap();
        assert_eq!(result.gloss, "");
        assert_eq!(result.tags, "{NMM:WH?}");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_directional_after_morpheme() {
        let converter = KslConverter::new();
        let result = converter.convert("언니가 선물을 주었어요").unwrap();
        assert_eq!(result.gloss, "언니 선물 주다 {dir:1→3}");
        assert_eq!(result.tags, "{NMM:neutral}");
    }

    #[test]
    fn test_simple_ending_resolves() {
        let converter = KslConverter::new();
        let result = converter.convert("안녕하세요 저는 사람입니다").unwrap();
        assert_eq!(result.gloss, "안녕 저 사람");
        assert!((result.confidence - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_uses_original_tokens() {
        let converter = KslConverter::new();
        let result = converter.convert("오늘 컴퓨터 샀어요").unwrap();
        assert_eq!(result.gloss, "오늘 컴퓨터 샀어요");
        assert!((result.confidence - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.confidence_level(), ConfidenceLevel::Low);
    }

    #[test]
    fn test_custom_tables() {
        let dictionary = Dictionary::from_entries([("사과", "APPLE"), ("먹다", "EAT"), ("새벽", "DAWN")]).unwrap();
        let rules = RuleConfig::new().with_time_words(["DAWN"]);
        let converter = KslConverter::with_tables(dictionary, rules);

        let result = converter.convert("사과를 새벽에 먹어요").unwrap();
        assert_eq!(result.gloss, "DAWN APPLE EAT");
    }

    #[test]
    fn test_passthrough_result() {
        let result = ConversionResult::passthrough("뭔가 잘못됨");
        assert_eq!(result.gloss, "뭔가 잘못됨");
        assert_eq!(result.tags, "{NMM:neutral}");
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_input_too_long_degrades_to_passthrough() {
        let converter = KslConverter::new().with_max_input_chars(5);

        let err = converter.try_convert("저는 내일 학교에 가요").unwrap_err();
        assert!(matches!(err, KslError::InputTooLong { len: 12, max: 5 }));

        let result = converter.convert("저는 내일 학교에 가요").unwrap();
        assert_eq!(result, ConversionResult::passthrough("저는 내일 학교에 가요"));

        // 제한 이하는 정상 변환
        let result = converter.convert("안녕하세요").unwrap();
        assert_eq!(result.gloss, "안녕");
    }

    #[test]
    fn test_summarize_skips_empty() {
        let converter = KslConverter::new();
        let summary = converter.summarize(&["안녕하세요", "", "컴퓨터"]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.high, 1);
        assert_eq!(summary.low, 1);
    }

    #[test]
    fn test_from_config_default() {
        let converter = KslConverter::from_config(&KslConfig::default()).unwrap();
        assert_eq!(converter.dictionary().len(), Dictionary::builtin().len());
    }

    #[test]
    fn test_from_config_missing_dictionary() {
        let config = KslConfig {
            dictionary_path: Some("/nonexistent/dict.json".into()),
            ..KslConfig::default()
        };
        assert!(KslConverter::from_config(&config).is_err());
    }

    #[test]
    fn test_from_config_input_limit() {
        let config = KslConfig {
            max_input_chars: Some(3),
            ..KslConfig::default()
        };
        let converter = KslConverter::from_config(&config).unwrap();
        assert!(converter.try_convert("안녕하세요").is_err());
        assert!(converter.try_convert("안녕").unwrap().is_some());
    }

    #[test]
    fn test_result_json_fields() {
        let converter = KslConverter::new();
        let result = converter.convert("감사합니다").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["original"], "감사합니다");
        assert_eq!(json["gloss"], "감사");
        assert_eq!(json["tags"], "{NMM:neutral}");
        assert_eq!(json["confidence"], 1.0);
    }
}
