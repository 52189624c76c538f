use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::industry::Industry;
use crate::tco::calculator::DEFAULT_FTE_COST_PER_YEAR;
use crate::tco::CalculationConfig;

/// 기본 설정 파일 이름.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 계산 조건 기본값. CLI 옵션이 주어지면 그 값이 우선한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationDefaults {
    pub device_count: u32,
    pub years: u32,
    pub fte_cost_per_year: f64,
    /// 볼륨 할인 상한. 없으면 구간 할인율을 그대로 쓴다.
    #[serde(default)]
    pub volume_discount: Option<f64>,
    #[serde(default)]
    pub industry: Option<Industry>,
    /// ROI/NPV 계산용 할인율(소수)
    pub discount_rate: f64,
}

impl Default for CalculationDefaults {
    fn default() -> Self {
        Self {
            device_count: 1_000,
            years: 3,
            fte_cost_per_year: DEFAULT_FTE_COST_PER_YEAR,
            volume_discount: None,
            industry: None,
            discount_rate: 0.08,
        }
    }
}

impl CalculationDefaults {
    pub fn to_calculation_config(&self) -> CalculationConfig {
        CalculationConfig {
            device_count: self.device_count,
            years: self.years,
            fte_cost_per_year: Some(self.fte_cost_per_year),
            volume_discount: self.volume_discount,
            industry: self.industry,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드 (auto/ko/en-us)
    #[serde(default = "default_language")]
    pub language: String,
    /// 비교 기준 벤더 id
    #[serde(default = "default_baseline")]
    pub baseline_vendor: String,
    /// 외부 벤더 카탈로그(TOML). 없으면 내장 기준표를 쓴다.
    #[serde(default)]
    pub vendor_catalog: Option<PathBuf>,
    #[serde(default)]
    pub defaults: CalculationDefaults,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_baseline() -> String {
    "portnox".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            baseline_vendor: default_baseline(),
            vendor_catalog: None,
            defaults: CalculationDefaults::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        if let Err(err) = save_config(&cfg, path) {
            // 읽기 전용 디렉터리에서도 기본값으로 계속 진행한다.
            warn!(path = %path.display(), error = %err, "could not write default config");
        }
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 지정한 경로에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("baseline_vendor = \"cisco\"").expect("parse");
        assert_eq!(cfg.baseline_vendor, "cisco");
        assert_eq!(cfg.language, "auto");
        assert_eq!(cfg.defaults, CalculationDefaults::default());
    }

    #[test]
    fn default_config_survives_toml_round_trip() {
        let cfg = Config {
            vendor_catalog: Some(PathBuf::from("vendors.toml")),
            defaults: CalculationDefaults {
                industry: Some(Industry::Healthcare),
                volume_discount: Some(0.1),
                ..CalculationDefaults::default()
            },
            ..Config::default()
        };
        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let back: Config = toml::from_str(&text).expect("parse");
        assert_eq!(back, cfg);
    }

    #[test]
    fn defaults_become_a_valid_calculation_config() {
        let cfg = CalculationDefaults::default().to_calculation_config();
        assert_eq!(cfg.device_count, 1_000);
        assert_eq!(cfg.years, 3);
        assert_eq!(cfg.fte_cost_per_year, Some(DEFAULT_FTE_COST_PER_YEAR));
        assert_eq!(cfg.volume_discount, None);
        assert!(cfg.validate().is_ok());
    }
}
