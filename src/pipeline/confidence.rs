//! 변환 신뢰도
//!
//! 원문 토큰 중 사전으로 풀린 토큰의 비율(0.0 ~ 1.0)을 계산합니다.
//! 규칙 엔진의 재배치와 무관하게 원문 토큰만 봅니다.

use serde::{Deserialize, Serialize};

use crate::dictionary::Dictionary;

use super::converter::ConversionResult;
use super::mapper::resolve;

/// 토큰 신뢰도 계산
///
/// 토큰이 없으면 0.0.
pub fn calculate_confidence(dictionary: &Dictionary, tokens: &[String]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }

    let resolved = tokens
        .iter()
        .filter(|token| resolve(dictionary, token).is_some())
        .count();

    (resolved as f64 / tokens.len() as f64).min(1.0)
}

/// 신뢰도 구간
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// 0.8 이상
    High,
    /// 0.5 이상 0.8 미만
    Medium,
    /// 0.5 미만
    Low,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ConfidenceLevel::High
        } else if score >= 0.5 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// 여러 변환 결과의 신뢰도 요약
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSummary {
    /// 집계한 결과 수
    pub total: usize,
    /// 평균 신뢰도 (결과가 없으면 0.0)
    pub average: f64,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl ConfidenceSummary {
    /// 결과 목록에서 요약 생성
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a ConversionResult>,
    {
        let mut summary = Self::default();
        let mut sum = 0.0;

        for result in results {
            summary.total += 1;
            sum += result.confidence;
            match result.confidence_level() {
                ConfidenceLevel::High => summary.high += 1,
                ConfidenceLevel::Medium => summary.medium += 1,
                ConfidenceLevel::Low => summary.low += 1,
            }
        }

        if summary.total > 0 {
            summary.average = sum / summary.total as f64;
        }
        summary
    }
}
