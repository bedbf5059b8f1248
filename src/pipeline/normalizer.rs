//! 텍스트 정규화와 토큰 분리

/// 문장부호(`.`, `!`, `?`) 제거 후 앞뒤 공백 제거
pub fn normalize_text(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '.' | '!' | '?'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// 공백 기준 토큰 분리 (빈 조각 제외, 순서 유지)
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}
