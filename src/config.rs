// Configuration - 설정 파일 + 환경 변수
//
// 우선순위: 기본값 < TOML 파일 < 환경 변수

use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;
use tracing::debug;

use crate::models::Orientation;
use crate::system::DEFAULT_CELL_WIDTH;
use crate::ui::notification::DEFAULT_RESTRICTED_WORDS;
use crate::ui::viewport::DEFAULT_BREAKPOINT;
use crate::utils::error::{PanelDeckError, Result};

pub const CONFIG_ENV: &str = "PANELDECK_CONFIG";
pub const DEMO_MODE_ENV: &str = "PANELDECK_DEMO_MODE";
pub const PREFERENCES_FILE_ENV: &str = "PANELDECK_PREFERENCES_FILE";
pub const BREAKPOINT_ENV: &str = "PANELDECK_BREAKPOINT";
pub const LOG_ENV: &str = "PANELDECK_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// compact 분류 경계 (너비 단위)
    pub breakpoint: u32,
    /// 터미널 열 하나의 너비 단위
    pub cell_width: u32,
    /// 데모 모드 (세션 시작 시 한 번 결정)
    pub demo_mode: bool,
    /// 사이드 패널 위치
    pub sidebar_position: Orientation,
    /// false 면 패널 상태를 세션 메모리에만 둔다
    pub persist_preferences: bool,
    /// 환경설정 파일 경로 (없으면 `$HOME/.paneldeck/preferences.toml`)
    pub preferences_file: Option<PathBuf>,
    /// 로그 파일 경로
    pub log_file: Option<PathBuf>,
    /// 데모 모드에서 숨길 진행 메시지 어휘
    pub restricted_words: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            breakpoint: DEFAULT_BREAKPOINT,
            cell_width: DEFAULT_CELL_WIDTH,
            demo_mode: false,
            sidebar_position: Orientation::Left,
            persist_preferences: true,
            preferences_file: None,
            log_file: None,
            restricted_words: DEFAULT_RESTRICTED_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// 설정 파일과 환경 변수에서 로드
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => match fs::read_to_string(&path) {
                Ok(data) => {
                    debug!(path = %path.display(), "config file loaded");
                    Self::from_toml_str(&data)?
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => Self::default(),
                Err(err) => return Err(err.into()),
            },
            None => Self::default(),
        };
        config.apply_env(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn config_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(CONFIG_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("paneldeck").join("config.toml"))
    }

    pub fn from_toml_str(data: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(data).map_err(|e| PanelDeckError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 환경 변수 덮어쓰기 (조회 함수 주입)
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(DEMO_MODE_ENV) {
            self.demo_mode = parse_flag(&raw).ok_or_else(|| {
                PanelDeckError::Config(format!("{DEMO_MODE_ENV}: not a boolean: {raw:?}"))
            })?;
        }
        if let Some(raw) = lookup(PREFERENCES_FILE_ENV) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.preferences_file = Some(PathBuf::from(trimmed));
            }
        }
        if let Some(raw) = lookup(BREAKPOINT_ENV) {
            self.breakpoint = raw.trim().parse().map_err(|_| {
                PanelDeckError::Config(format!("{BREAKPOINT_ENV}: not a number: {raw:?}"))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.breakpoint == 0 {
            return Err(PanelDeckError::Config("breakpoint must be positive".into()));
        }
        if self.cell_width == 0 {
            return Err(PanelDeckError::Config("cell_width must be positive".into()));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
