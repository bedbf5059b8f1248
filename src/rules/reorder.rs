//! 시간/장소 전면화
//!
//! KSL 어순에 맞춰 시간 -> 장소 -> 나머지 순서로 토큰을 재배치합니다.
//! 각 묶음 안의 상대 순서는 그대로 유지됩니다.

/// 토큰이 단어 목록 중 하나를 포함하는지 (정확히 일치 포함)
pub(crate) fn contains_any<S: AsRef<str>>(token: &str, words: &[S]) -> bool {
    words.iter().any(|w| {
        let w = w.as_ref();
        !w.is_empty() && token.contains(w)
    })
}

/// 시간 단어, 장소 단어, 나머지 순서로 재배치
///
/// 시간과 장소 단어를 모두 포함하는 토큰은 시간 묶음으로 갑니다.
pub fn front_time_place<S: AsRef<str>>(
    tokens: Vec<String>,
    time_words: &[S],
    place_words: &[S],
) -> Vec<String> {
    let mut time_found = Vec::new();
    let mut place_found = Vec::new();
    let mut others = Vec::new();

    for token in tokens {
        if contains_any(&token, time_words) {
            time_found.push(token);
        } else if contains_any(&token, place_words) {
            place_found.push(token);
        } else {
            others.push(token);
        }
    }

    time_found.extend(place_found);
    time_found.extend(others);
    time_found
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIME: &[&str] = &["오늘", "내일"];
    const PLACE: &[&str] = &["학교", "집"];

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_time_then_place_then_rest() {
        let result = front_time_place(tokens(&["저", "학교", "내일", "가다"]), TIME, PLACE);
        assert_eq!(result, tokens(&["내일", "학교", "저", "가다"]));
    }

    #[test]
    fn test_stable_within_buckets() {
        let result = front_time_place(
            tokens(&["집", "먹다", "오늘", "학교", "자다", "내일"]),
            TIME,
            PLACE,
        );
        assert_eq!(result, tokens(&["오늘", "내일", "집", "학교", "먹다", "자다"]));
    }

    #[test]
    fn test_substring_match() {
        // "집에서"처럼 단어를 포함하는 토큰도 장소로 취급
        let result = front_time_place(tokens(&["빵", "집에서"]), TIME, PLACE);
        assert_eq!(result, tokens(&["집에서", "빵"]));
    }

    #[test]
    fn test_time_wins_over_place() {
        let result = front_time_place(tokens(&["학교", "오늘집"]), TIME, PLACE);
        assert_eq!(result, tokens(&["오늘집", "학교"]));
    }

    #[test]
    fn test_empty_words_never_match() {
        let result = front_time_place(tokens(&["가", "나"]), &[""], &["나"]);
        assert_eq!(result, tokens(&["나", "가"]));
    }

    #[test]
    fn test_empty_input() {
        let result = front_time_place(Vec::new(), TIME, PLACE);
        assert!(result.is_empty());
    }
}
