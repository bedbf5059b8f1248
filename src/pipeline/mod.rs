//! 변환 파이프라인
//!
//! 정규화 -> 토큰 분리 -> 사전 매핑 -> 규칙 적용 -> 태그/신뢰도.
//! 각 단계는 순수 함수이며 호출 사이에 공유하는 가변 상태가 없습니다.

mod confidence;
mod converter;
mod mapper;
mod normalizer;

pub use confidence::{calculate_confidence, ConfidenceLevel, ConfidenceSummary};
pub use converter::{ConversionResult, KslConverter};
pub use mapper::{map_to_gloss, resolve};
pub use normalizer::{normalize_text, tokenize};
