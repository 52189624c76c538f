use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{self, Config};
use crate::i18n::{self, Translator};
use crate::industry::Industry;
use crate::report;
use crate::tco::{self, CalculationConfig, TcoCalculator, TcoError};
use crate::ui_cli::{self, MenuChoice};
use crate::vendor::{CatalogError, VendorCatalog};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] config::ConfigError),
    /// 벤더 카탈로그 로드 오류
    #[error("카탈로그 오류: {0}")]
    Catalog(#[from] CatalogError),
    /// TCO/비교/ROI 계산 오류
    #[error("계산 오류: {0}")]
    Tco(#[from] TcoError),
    /// JSON 출력 오류
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 설정 기본값 위에 덮어쓸 계산 조건. None 이면 설정값을 쓴다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioOverrides {
    pub device_count: Option<u32>,
    pub years: Option<u32>,
    pub fte_cost_per_year: Option<f64>,
    pub volume_discount: Option<f64>,
    pub industry: Option<Industry>,
}

/// 실행 중 공유하는 설정/카탈로그/번역기 묶음. 전역 상태 대신 명시적으로 전달한다.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub config_path: PathBuf,
    pub catalog: VendorCatalog,
    pub tr: Translator,
}

impl Session {
    /// 설정 파일과 카탈로그를 로드한다. `catalog_path` 가 주어지면 설정보다 우선한다.
    pub fn open(
        config_path: &Path,
        catalog_path: Option<&Path>,
        lang_arg: &str,
    ) -> Result<Self, AppError> {
        let mut config = config::load_or_default(config_path)?;
        let lang = i18n::resolve_language(lang_arg, Some(config.language.as_str()));
        if lang_arg != "auto" {
            config.language = lang.clone();
        }
        let catalog = match catalog_path.or(config.vendor_catalog.as_deref()) {
            Some(path) => VendorCatalog::load(path)?,
            None => VendorCatalog::built_in(),
        };
        if catalog.find(&config.baseline_vendor).is_none() {
            warn!(baseline = %config.baseline_vendor, "baseline vendor not in catalog");
        }
        Ok(Self::new(
            config,
            config_path.to_path_buf(),
            catalog,
            Translator::new_with_pack(&lang, None),
        ))
    }

    pub fn new(
        config: Config,
        config_path: PathBuf,
        catalog: VendorCatalog,
        tr: Translator,
    ) -> Self {
        Self {
            config,
            config_path,
            catalog,
            tr,
        }
    }

    pub fn calculator(&self) -> TcoCalculator<'_> {
        TcoCalculator::new(&self.catalog)
    }

    /// 설정 기본값과 오버라이드를 합쳐 계산 조건을 만든다.
    pub fn calculation_config(&self, overrides: &ScenarioOverrides) -> CalculationConfig {
        let base = self.config.defaults.to_calculation_config();
        CalculationConfig {
            device_count: overrides.device_count.unwrap_or(base.device_count),
            years: overrides.years.unwrap_or(base.years),
            fte_cost_per_year: overrides.fte_cost_per_year.or(base.fte_cost_per_year),
            volume_discount: overrides.volume_discount.or(base.volume_discount),
            industry: overrides.industry.or(base.industry),
        }
    }

    pub fn save_config(&self) -> Result<(), AppError> {
        self.config.save(&self.config_path)?;
        Ok(())
    }
}

/// 벤더 1개의 TCO 를 계산해 출력 문자열을 만든다.
pub fn calculate(
    session: &Session,
    vendor_id: &str,
    overrides: &ScenarioOverrides,
    format: OutputFormat,
) -> Result<String, AppError> {
    let cfg = session.calculation_config(overrides);
    info!(vendor = vendor_id, devices = cfg.device_count, years = cfg.years, "calculate");
    let calc = session.calculator();
    let result = calc.calculate(vendor_id, &cfg)?;
    Ok(match format {
        OutputFormat::Json => report::to_json(&result)?,
        OutputFormat::Text => {
            let mut out = report::render_tco(&session.tr, &result);
            if let Some(industry) = cfg.industry {
                let vendor = calc.vendor(vendor_id)?;
                out.push_str(&report::render_industry_score(&session.tr, vendor, industry));
            }
            out
        }
    })
}

/// 기준 벤더 대비 비교. `vendor_ids` 가 비어 있으면 카탈로그 전체를 비교한다.
pub fn compare(
    session: &Session,
    vendor_ids: &[String],
    baseline: Option<&str>,
    overrides: &ScenarioOverrides,
    format: OutputFormat,
) -> Result<String, AppError> {
    let cfg = session.calculation_config(overrides);
    let baseline = baseline.unwrap_or(session.config.baseline_vendor.as_str());
    let ids: Vec<&str> = if vendor_ids.is_empty() {
        session.catalog.ids().collect()
    } else {
        vendor_ids.iter().map(String::as_str).collect()
    };
    info!(baseline, vendors = ids.len(), "compare");
    let comparison = tco::compare_vendors(&session.calculator(), &ids, &cfg, baseline)?;
    Ok(match format {
        OutputFormat::Json => report::to_json(&comparison)?,
        OutputFormat::Text => report::render_comparison(&session.tr, &comparison),
    })
}

/// 현재 벤더(`competitor`)에서 기준 벤더로 전환할 때의 ROI.
pub fn roi(
    session: &Session,
    competitor: &str,
    baseline: Option<&str>,
    overrides: &ScenarioOverrides,
    discount_rate: Option<f64>,
    format: OutputFormat,
) -> Result<String, AppError> {
    let cfg = session.calculation_config(overrides);
    let baseline = baseline.unwrap_or(session.config.baseline_vendor.as_str());
    let rate = discount_rate.unwrap_or(session.config.defaults.discount_rate);
    info!(baseline, competitor, rate, "roi");
    let calc = session.calculator();
    let base = calc.calculate(baseline, &cfg)?;
    let other = calc.calculate(competitor, &cfg)?;
    let result = tco::analyze_roi(&base, &other, rate)?;
    Ok(match format {
        OutputFormat::Json => report::to_json(&result)?,
        OutputFormat::Text => report::render_roi(&session.tr, &result),
    })
}

/// 카탈로그 벤더 목록.
pub fn vendors(
    session: &Session,
    industry: Option<Industry>,
    format: OutputFormat,
) -> Result<String, AppError> {
    Ok(match format {
        OutputFormat::Json => report::to_json(&session.catalog.vendors())?,
        OutputFormat::Text => report::render_vendor_list(&session.tr, &session.catalog, industry),
    })
}

/// 대화형 메뉴 루프를 실행한다. 계산 오류는 출력만 하고 메뉴로 돌아간다.
pub fn run(session: &mut Session) -> Result<(), AppError> {
    loop {
        let outcome = match ui_cli::main_menu(&session.tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(session),
            MenuChoice::Compare => ui_cli::handle_compare(session),
            MenuChoice::Roi => ui_cli::handle_roi(session),
            MenuChoice::Vendors => ui_cli::handle_vendors(session),
            MenuChoice::Settings => {
                ui_cli::handle_settings(session).and_then(|_| session.save_config())
            }
            MenuChoice::Exit => {
                session.save_config()?;
                println!("{}", session.tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Ok(()) => {}
            Err(AppError::Tco(err)) => {
                println!("{}: {err}", session.tr.t(i18n::keys::ERROR_PREFIX));
            }
            Err(err) if ui_cli::is_end_of_input(&err) => break,
            Err(err) => return Err(err),
        }
    }
    Ok(())
}
