//! CLI 출력(텍스트/JSON) 테스트. 설정 파일은 쓰지 않는다.
use std::path::PathBuf;

use nac_tco_toolbox::app::{self, AppError, OutputFormat, ScenarioOverrides, Session};
use nac_tco_toolbox::config::Config;
use nac_tco_toolbox::i18n::Translator;
use nac_tco_toolbox::industry::Industry;
use nac_tco_toolbox::tco::TcoError;
use nac_tco_toolbox::vendor::VendorCatalog;

fn session(lang: &str) -> Session {
    Session::new(
        Config::default(),
        PathBuf::from("unused-config.toml"),
        VendorCatalog::built_in(),
        Translator::new(lang),
    )
}

fn scenario(devices: u32, years: u32) -> ScenarioOverrides {
    ScenarioOverrides {
        device_count: Some(devices),
        years: Some(years),
        ..ScenarioOverrides::default()
    }
}

#[test]
fn overrides_take_precedence_over_config_defaults() {
    let s = session("en");
    let cfg = s.calculation_config(&ScenarioOverrides {
        device_count: Some(42),
        industry: Some(Industry::Retail),
        ..ScenarioOverrides::default()
    });
    assert_eq!(cfg.device_count, 42);
    assert_eq!(cfg.years, s.config.defaults.years);
    assert_eq!(cfg.fte_cost_per_year, Some(150_000.0));
    assert_eq!(cfg.industry, Some(Industry::Retail));
}

#[test]
fn text_report_shows_grouped_currency() {
    let out = app::calculate(&session("en"), "portnox", &scenario(1_000, 3), OutputFormat::Text)
        .expect("calculate");
    assert!(out.contains("Portnox Cloud"), "{out}");
    // 6,000 + 2,000 + 37,500×3 + 32,640×3
    assert!(out.contains("$218,420"), "{out}");
    assert!(out.contains("15%"), "{out}");
}

#[test]
fn korean_labels_are_used() {
    let out = app::calculate(&session("ko"), "portnox", &scenario(100, 1), OutputFormat::Text)
        .expect("calculate");
    assert!(out.contains("총 소유비용"), "{out}");
}

#[test]
fn json_report_is_machine_readable() {
    let out = app::calculate(&session("en"), "cisco", &scenario(500, 5), OutputFormat::Json)
        .expect("calculate");
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["vendor_id"], "cisco");
    assert_eq!(value["yearly"].as_array().map(Vec::len), Some(5));
}

#[test]
fn comparison_defaults_to_whole_catalog() {
    let s = session("en");
    let out = app::compare(&s, &[], None, &scenario(1_000, 3), OutputFormat::Json)
        .expect("compare");
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(value["baseline"]["vendor_id"], "portnox");
    assert_eq!(
        value["vendors"].as_array().map(Vec::len),
        Some(s.catalog.len() - 1)
    );
}

#[test]
fn unknown_vendor_surfaces_as_tco_error() {
    let err = app::calculate(&session("en"), "nobody", &scenario(10, 1), OutputFormat::Text)
        .unwrap_err();
    assert!(matches!(err, AppError::Tco(TcoError::NotFound(_))), "{err:?}");
}

#[test]
fn roi_report_mentions_payback() {
    let out = app::roi(
        &session("en"),
        "cisco",
        None,
        &scenario(1_000, 3),
        Some(0.08),
        OutputFormat::Text,
    )
    .expect("roi");
    assert!(out.starts_with("cisco -> portnox"), "{out}");
    assert!(out.contains("Payback"), "{out}");
}

#[test]
fn vendor_list_with_industry_scores() {
    let out = app::vendors(&session("en"), Some(Industry::Healthcare), OutputFormat::Text)
        .expect("vendors");
    assert!(out.lines().any(|l| l.starts_with("portnox")), "{out}");
    assert!(out.contains("healthcare"), "{out}");
}
