//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::rules::RuleConfig;

/// ksl-gloss 설정
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct KslConfig {
    /// 내장 사전을 확장할 JSON 사전 경로
    #[serde(default)]
    pub dictionary_path: Option<String>,
    /// 시간/장소 단어, 방향동사 매핑
    #[serde(default)]
    pub rules: RuleConfig,
    /// 입력 최대 길이 (문자 수)
    #[serde(default)]
    pub max_input_chars: Option<usize>,
}

/// 설정 파일 경로: ~/.config/ksl-gloss/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("ksl-gloss").join("config.json")
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> KslConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_from(path: &Path) -> KslConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용 ({}): {}", path.display(), e);
            KslConfig::default()
        }),
        Err(_) => KslConfig::default(),
    }
}

/// 기본 경로에 설정 저장
pub fn save_config(config: &KslConfig) -> Result<()> {
    save_config_to(&config_path(), config)
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(path: &Path, config: &KslConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
