//! 사전 매핑
//!
//! 토큰마다 (1) 사전 정확 일치, (2) 형태소 분석 어간 일치,
//! (3) 원본 그대로 순서로 글로스를 고릅니다. 매핑되지 않은 토큰도 버리지 않습니다.

use crate::dictionary::Dictionary;
use crate::morphology::analyze_morpheme;

/// 토큰의 사전 글로스 (정확 일치 또는 어간 일치)
pub fn resolve<'d>(dictionary: &'d Dictionary, token: &str) -> Option<&'d str> {
    if let Some(gloss) = dictionary.get(token) {
        return Some(gloss);
    }

    let morpheme = analyze_morpheme(token);
    if morpheme.stem.is_empty() {
        return None;
    }
    dictionary.get(&morpheme.stem)
}

/// 토큰 열을 글로스 토큰 열로 변환
pub fn map_to_gloss(dictionary: &Dictionary, tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| resolve(dictionary, token).map_or_else(|| token.clone(), str::to_string))
        .collect()
}
