//! 방향동사 태그
//!
//! 주어/목적어 방향에 따라 수형이 바뀌는 동사 뒤에 `{dir:X→Y}` 태그를 붙입니다.

use super::config::DirectionalVerb;

/// 토큰에 붙일 방향 태그 검색
///
/// 정확히 일치하는 동사가 먼저이고, 없으면 목록 순서대로 부분 문자열 검사.
pub fn find_directional_tag<'a>(token: &str, verbs: &'a [DirectionalVerb]) -> Option<&'a str> {
    if let Some(exact) = verbs.iter().find(|v| v.verb == token) {
        return Some(exact.tag.as_str());
    }
    verbs
        .iter()
        .find(|v| !v.verb.is_empty() && token.contains(v.verb.as_str()))
        .map(|v| v.tag.as_str())
}

/// 방향동사 토큰 뒤에 태그 추가 (`"<토큰> <태그>"`)
pub fn tag_directional(tokens: Vec<String>, verbs: &[DirectionalVerb]) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| match find_directional_tag(&token, verbs) {
            Some(tag) => format!("{} {}", token, tag),
            None => token,
        })
        .collect()
}
