//! 변환기 에러 타입

use thiserror::Error;

/// KSL 변환기 에러
#[derive(Error, Debug)]
pub enum KslError {
    /// 파일 읽기/쓰기 실패
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱/직렬화 실패
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),

    /// 사전 데이터 형식 오류
    #[error("사전 형식 오류: {0}")]
    Dictionary(String),

    /// 입력이 설정한 최대 길이(문자 수)를 넘음
    #[error("입력이 너무 김: {len}자 (최대 {max}자)")]
    InputTooLong { len: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, KslError>;
