//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리에 JSON 파일로 설정을 저장/로드한다.
//! 파일이 없으면 기본 설정을 생성해 저장한다.

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::CoreError;

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 설정 관리자
///
/// 설정 파일의 로드/저장을 관리한다.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 현재 설정
    config: AppConfig,
    /// 설정 파일 경로
    config_path: PathBuf,
}

impl ConfigManager {
    /// 새 설정 관리자 생성 및 설정 로드 (플랫폼 기본 경로)
    pub fn new() -> Result<Self, CoreError> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// 지정된 경로로 설정 관리자 생성
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        if let Some(parent) = config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = AppConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("기본 설정 파일 생성: {}", config_path.display());
            default_config
        };

        config.validate()?;

        Ok(Self {
            config,
            config_path,
        })
    }

    /// 현재 설정 반환 (복제본)
    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// 설정 변경 후 파일 저장
    pub fn update_with<F>(&mut self, updater: F) -> Result<AppConfig, CoreError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.clone();
        updater(&mut config);
        config.validate()?;

        Self::save_to_file(&self.config_path, &config)?;
        debug!("설정 저장 완료: {}", self.config_path.display());

        self.config = config.clone();
        Ok(config)
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// 플랫폼별 기본 설정 파일 경로
    fn default_config_path() -> Result<PathBuf, CoreError> {
        let dirs = ProjectDirs::from("io", "gwanje", "gwanje").ok_or_else(|| {
            CoreError::Config("플랫폼 설정 디렉토리를 결정할 수 없습니다".to_string())
        })?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &PathBuf) -> Result<AppConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })?;

        debug!("설정 파일 로드 완료: {}", path.display());
        Ok(config)
    }

    /// 파일에 설정 저장
    fn save_to_file(path: &PathBuf, config: &AppConfig) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::Config(format!("설정 직렬화 실패: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            CoreError::Config(format!("설정 파일 저장 실패: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        // 새 관리자 생성 (기본 설정 파일 생성됨)
        let manager = ConfigManager::with_path(config_path.clone()).unwrap();
        assert!(config_path.exists());

        let config = manager.get();
        assert_eq!(config.server.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn update_and_persist_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut manager = ConfigManager::with_path(config_path.clone()).unwrap();

        manager
            .update_with(|c| {
                c.poll.summary_interval_ms = 10_000;
                c.view.default_page_size = 25;
            })
            .unwrap();

        // 새 관리자로 다시 로드
        let manager2 = ConfigManager::with_path(config_path).unwrap();
        let config = manager2.get();

        assert_eq!(config.poll.summary_interval_ms, 10_000);
        assert_eq!(config.view.default_page_size, 25);
    }

    #[test]
    fn update_rejects_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut manager = ConfigManager::with_path(config_path).unwrap();
        let result = manager.update_with(|c| c.view.default_page_size = 7);
        assert!(result.is_err());

        // 거부된 변경은 메모리에도 남지 않는다
        assert_eq!(manager.get().view.default_page_size, 10);
    }

    #[test]
    fn invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json").unwrap();

        assert!(ConfigManager::with_path(config_path).is_err());
    }
}
