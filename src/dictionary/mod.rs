//! KSL 사전
//!
//! 한국어 표면형을 KSL 글로스 토큰으로 매핑하는 읽기 전용 사전입니다.
//! 내장 데이터 외에 JSON 객체 형식의 사전을 불러와 확장할 수 있습니다.
//!
//! ```
//! use ksl_gloss::Dictionary;
//!
//! let dict = Dictionary::builtin();
//! assert_eq!(dict.get("감사합니다"), Some("감사"));
//!
//! let custom = Dictionary::from_json(r#"{ "사랑해요": "사랑" }"#).unwrap();
//! let merged = dict.extend(custom);
//! assert_eq!(merged.get("사랑해요"), Some("사랑"));
//! ```

mod data;

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{KslError, Result};

/// 한국어 -> KSL 글로스 사전
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// 내장 사전 데이터로 생성
    pub fn builtin() -> Self {
        let entries = data::BUILTIN_ENTRIES
            .iter()
            .map(|(word, gloss)| (word.to_string(), gloss.to_string()))
            .collect();
        Self { entries }
    }

    /// (표면형, 글로스) 쌍으로 사전 생성
    ///
    /// 빈 키나 빈 글로스가 있으면 에러. 중복 키는 뒤의 값이 남습니다.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map = HashMap::new();
        for (word, gloss) in entries {
            let word = word.into();
            let gloss = gloss.into();
            if word.trim().is_empty() {
                return Err(KslError::Dictionary("빈 표면형 키".into()));
            }
            if gloss.trim().is_empty() {
                return Err(KslError::Dictionary(format!("빈 글로스 값: {}", word)));
            }
            map.insert(word, gloss);
        }
        Ok(Self { entries: map })
    }

    /// JSON 문자열에서 사전 생성
    ///
    /// # 형식
    /// ```json
    /// { "안녕하세요": "안녕", "학교": "학교" }
    /// ```
    pub fn from_json(json_str: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json_str)?;
        Self::from_entries(entries)
    }

    /// JSON 파일에서 사전 로드
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let entries: HashMap<String, String> = serde_json::from_reader(reader)?;
        let dict = Self::from_entries(entries)?;
        log::debug!(
            "사전 로드: {} ({}개 항목)",
            path.as_ref().display(),
            dict.len()
        );
        Ok(dict)
    }

    /// 다른 사전의 항목을 덮어써서 합친 사전 반환
    pub fn extend(mut self, other: Dictionary) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// 정확히 일치하는 항목의 글로스 조회
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// 키 존재 여부
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
