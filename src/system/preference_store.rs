// Preference store - 키/값 문자열 환경설정 저장소
//
// 읽기는 best-effort: 저장 매체가 없거나 깨져 있으면 "없음"으로 취급하고,
// 쓰기 실패는 경고 로그만 남기고 무시한다 (재시도 없음).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

/// 사이드 패널 펼침 상태 키
pub const SIDEBAR_STATE_KEY: &str = "sidebar_state";

/// 내부 저장소 오류 (외부로 노출되지 않음)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("preference storage is unavailable")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed preference file: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// 영속 환경설정 저장소
pub trait PreferenceStore {
    /// 값 읽기. 저장 매체를 쓸 수 없으면 `None`
    fn read(&self, key: &str) -> Option<String>;

    /// 값 쓰기. 저장 매체를 쓸 수 없으면 아무것도 하지 않음
    fn write(&self, key: &str, value: &str);
}

/// TOML 파일 기반 저장소
///
/// 파일은 `key = "value"` 형태의 평면 테이블이며, 쓰기 시 다른 키는 보존된다.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 기본 경로 (`$HOME/.paneldeck/preferences.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".paneldeck").join("preferences.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_table(&self) -> Result<toml::Table, StoreError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(toml::Table::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(data.parse::<toml::Table>()?)
    }

    /// 문자열이 아닌 값은 없는 것으로 본다
    fn try_read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .load_table()?
            .get(key)
            .and_then(toml::Value::as_str)
            .map(str::to_string))
    }

    fn try_write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = match self.load_table() {
            Ok(table) => table,
            // 문법이 깨진 파일만 새 테이블로 교체
            Err(StoreError::Decode(error)) => {
                debug!(%error, path = %self.path.display(), "replacing malformed preference file");
                toml::Table::new()
            }
            Err(error) => return Err(error),
        };
        table.insert(key.to_string(), toml::Value::String(value.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = toml::to_string_pretty(&table)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        match self.try_read(key) {
            Ok(value) => value,
            Err(error) => {
                debug!(%error, path = %self.path.display(), key, "preference read degraded to default");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(error) = self.try_write(key, value) {
            warn!(%error, path = %self.path.display(), key, "preference write dropped");
        }
    }
}

/// 프로세스 메모리 저장소 (헤드리스 실행/테스트용)
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// 영속 저장 매체가 없는 환경
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn read(&self, key: &str) -> Option<String> {
        debug!(key, error = %StoreError::Unavailable, "preference read degraded to default");
        None
    }

    fn write(&self, key: &str, _value: &str) {
        debug!(key, error = %StoreError::Unavailable, "preference write skipped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_missing_file_reads_absent() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nope.toml"));
        assert_eq!(store.read(SIDEBAR_STATE_KEY), None);
    }

    #[test]
    fn test_file_store_write_then_read() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("nested").join("prefs.toml"));

        store.write(SIDEBAR_STATE_KEY, "false");

        assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));
        // 새 인스턴스 (재시작 시뮬레이션)
        let reopened = FileStore::new(store.path());
        assert_eq!(reopened.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_file_store_preserves_other_keys() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("prefs.toml"));

        store.write("theme", "dark");
        store.write(SIDEBAR_STATE_KEY, "true");

        assert_eq!(store.read("theme").as_deref(), Some("dark"));
        assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_malformed_file_degrades() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        let store = FileStore::new(&path);

        assert_eq!(store.read(SIDEBAR_STATE_KEY), None);

        // 쓰기는 깨진 파일을 새 테이블로 교체
        store.write(SIDEBAR_STATE_KEY, "false");
        assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_file_store_keeps_non_string_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");
        fs::write(&path, "x = 1\n").unwrap();
        let store = FileStore::new(&path);

        assert_eq!(store.read("x"), None);
        store.write(SIDEBAR_STATE_KEY, "false");

        let data = fs::read_to_string(&path).unwrap();
        let table: toml::Table = data.parse().unwrap();
        assert_eq!(table.get("x").and_then(toml::Value::as_integer), Some(1));
        assert_eq!(store.read(SIDEBAR_STATE_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_file_store_io_error_skips_write() {
        let temp = TempDir::new().unwrap();
        // 파일 자리에 디렉토리가 있으면 읽기가 I/O 오류
        let path = temp.path().join("prefs.toml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep.txt"), "x").unwrap();
        let store = FileStore::new(&path);

        store.write(SIDEBAR_STATE_KEY, "false");

        assert_eq!(store.read(SIDEBAR_STATE_KEY), None);
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn test_file_store_unwritable_path_is_noop() {
        let temp = TempDir::new().unwrap();
        // 부모 경로가 파일이라 디렉토리 생성 실패
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let store = FileStore::new(blocker.join("prefs.toml"));

        store.write(SIDEBAR_STATE_KEY, "false");

        assert_eq!(store.read(SIDEBAR_STATE_KEY), None);
    }

    #[test]
    fn test_unavailable_store() {
        let store = UnavailableStore;
        store.write(SIDEBAR_STATE_KEY, "false");
        assert_eq!(store.read(SIDEBAR_STATE_KEY), None);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.read("k"), None);
        store.write("k", "v");
        assert_eq!(store.read("k").as_deref(), Some("v"));
    }
}
