use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_ROI: &str = "main_menu.roi";
    pub const MAIN_MENU_VENDORS: &str = "main_menu.vendors";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const CALCULATE_HEADING: &str = "calculate.heading";
    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const ROI_HEADING: &str = "roi.heading";
    pub const VENDORS_HEADING: &str = "vendors.heading";

    pub const PROMPT_VENDOR: &str = "prompt.vendor";
    pub const PROMPT_VENDOR_LIST: &str = "prompt.vendor_list";
    pub const PROMPT_COMPETITOR: &str = "prompt.competitor";
    pub const PROMPT_DEVICE_COUNT: &str = "prompt.device_count";
    pub const PROMPT_YEARS: &str = "prompt.years";
    pub const PROMPT_FTE_COST: &str = "prompt.fte_cost";
    pub const PROMPT_KEEP_DEFAULT: &str = "prompt.keep_default";

    pub const RESULT_VENDOR: &str = "result.vendor";
    pub const RESULT_PRICING_MODEL: &str = "result.pricing_model";
    pub const RESULT_VOLUME_DISCOUNT: &str = "result.volume_discount";
    pub const RESULT_TOTAL_COST: &str = "result.total_cost";
    pub const RESULT_INITIAL_COST: &str = "result.initial_cost";
    pub const RESULT_OPERATIONAL_COST: &str = "result.operational_cost";
    pub const RESULT_MAINTENANCE_COST: &str = "result.maintenance_cost";
    pub const RESULT_COST_PER_DEVICE: &str = "result.cost_per_device";
    pub const RESULT_COST_PER_DEVICE_MONTH: &str = "result.cost_per_device_month";
    pub const RESULT_BREAKDOWN: &str = "result.breakdown";
    pub const RESULT_YEARLY: &str = "result.yearly";
    pub const RESULT_YEAR: &str = "result.year";
    pub const RESULT_CUMULATIVE: &str = "result.cumulative";
    pub const RESULT_BASELINE: &str = "result.baseline";
    pub const RESULT_SAVINGS: &str = "result.savings";
    pub const RESULT_CHEAPEST: &str = "result.cheapest";
    pub const RESULT_INDUSTRY_SCORE: &str = "result.industry_score";
    pub const RESULT_ANNUAL_SAVINGS: &str = "result.annual_savings";
    pub const RESULT_PAYBACK: &str = "result.payback";
    pub const RESULT_PAYBACK_NEVER: &str = "result.payback_never";
    pub const RESULT_ROI: &str = "result.roi";
    pub const RESULT_NPV: &str = "result.npv";
    pub const RESULT_MONTHS: &str = "result.months";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_BASELINE: &str = "settings.current_baseline";
    pub const SETTINGS_PROMPT_BASELINE: &str = "settings.prompt_baseline";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_UNKNOWN_VENDOR: &str = "settings.unknown_vendor";

    pub const NO_DATA: &str = "general.no_data";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en 으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 번역을 가져온다. 언어팩 > 내장 문자열 순이며, 한국어에 없는 키는 영어로 폴백한다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)).unwrap_or(key),
            Language::En => en(key).unwrap_or(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" | "en-gb" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵 또는 섹션 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== NAC TCO Toolbox ===",
        MAIN_MENU_CALCULATE => "1) 벤더 TCO 계산",
        MAIN_MENU_COMPARE => "2) 벤더 비교",
        MAIN_MENU_ROI => "3) 전환 ROI 분석",
        MAIN_MENU_VENDORS => "4) 벤더 목록",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        CALCULATE_HEADING => "\n-- 벤더 TCO 계산 --",
        COMPARE_HEADING => "\n-- 벤더 비교 --",
        ROI_HEADING => "\n-- 전환 ROI 분석 --",
        VENDORS_HEADING => "\n-- 벤더 목록 --",
        PROMPT_VENDOR => "벤더 id: ",
        PROMPT_VENDOR_LIST => "비교할 벤더 id (쉼표 구분, 엔터 시 전체): ",
        PROMPT_COMPETITOR => "현재 사용 중인 벤더 id: ",
        PROMPT_DEVICE_COUNT => "장비 수",
        PROMPT_YEARS => "분석 기간 [년]",
        PROMPT_FTE_COST => "FTE 연 인건비 [USD]",
        PROMPT_KEEP_DEFAULT => "엔터 시 기본값",
        RESULT_VENDOR => "벤더",
        RESULT_PRICING_MODEL => "가격 모델",
        RESULT_VOLUME_DISCOUNT => "볼륨 할인",
        RESULT_TOTAL_COST => "총 소유비용",
        RESULT_INITIAL_COST => "초기 비용",
        RESULT_OPERATIONAL_COST => "인건비",
        RESULT_MAINTENANCE_COST => "라이선스/유지보수",
        RESULT_COST_PER_DEVICE => "장비당 비용",
        RESULT_COST_PER_DEVICE_MONTH => "장비당 월 비용",
        RESULT_BREAKDOWN => "항목별 비용",
        RESULT_YEARLY => "연도별 비용",
        RESULT_YEAR => "연차",
        RESULT_CUMULATIVE => "누적",
        RESULT_BASELINE => "기준 벤더",
        RESULT_SAVINGS => "절감액",
        RESULT_CHEAPEST => "최저 비용 벤더",
        RESULT_INDUSTRY_SCORE => "업종 가중 점수",
        RESULT_ANNUAL_SAVINGS => "연간 운영비 절감",
        RESULT_PAYBACK => "회수 기간",
        RESULT_PAYBACK_NEVER => "회수 불가",
        RESULT_ROI => "ROI",
        RESULT_NPV => "NPV",
        RESULT_MONTHS => "개월",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_BASELINE => "현재 기준 벤더:",
        SETTINGS_PROMPT_BASELINE => "새 기준 벤더 id (취소하려면 엔터): ",
        SETTINGS_SAVED => "기준 벤더가 변경되었습니다:",
        SETTINGS_UNKNOWN_VENDOR => "카탈로그에 없는 벤더이므로 변경하지 않습니다.",
        NO_DATA => "표시할 데이터가 없습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== NAC TCO Toolbox ===",
        MAIN_MENU_CALCULATE => "1) Vendor TCO",
        MAIN_MENU_COMPARE => "2) Compare vendors",
        MAIN_MENU_ROI => "3) Migration ROI",
        MAIN_MENU_VENDORS => "4) Vendor list",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        CALCULATE_HEADING => "\n-- Vendor TCO --",
        COMPARE_HEADING => "\n-- Compare vendors --",
        ROI_HEADING => "\n-- Migration ROI --",
        VENDORS_HEADING => "\n-- Vendors --",
        PROMPT_VENDOR => "Vendor id: ",
        PROMPT_VENDOR_LIST => "Vendor ids to compare (comma separated, enter for all): ",
        PROMPT_COMPETITOR => "Current vendor id: ",
        PROMPT_DEVICE_COUNT => "Device count",
        PROMPT_YEARS => "Analysis period [years]",
        PROMPT_FTE_COST => "Annual FTE cost [USD]",
        PROMPT_KEEP_DEFAULT => "enter keeps default",
        RESULT_VENDOR => "Vendor",
        RESULT_PRICING_MODEL => "Pricing model",
        RESULT_VOLUME_DISCOUNT => "Volume discount",
        RESULT_TOTAL_COST => "Total cost of ownership",
        RESULT_INITIAL_COST => "Initial cost",
        RESULT_OPERATIONAL_COST => "Personnel",
        RESULT_MAINTENANCE_COST => "Licensing/maintenance",
        RESULT_COST_PER_DEVICE => "Cost per device",
        RESULT_COST_PER_DEVICE_MONTH => "Cost per device per month",
        RESULT_BREAKDOWN => "Cost breakdown",
        RESULT_YEARLY => "Yearly cost",
        RESULT_YEAR => "Year",
        RESULT_CUMULATIVE => "Cumulative",
        RESULT_BASELINE => "Baseline",
        RESULT_SAVINGS => "Savings",
        RESULT_CHEAPEST => "Lowest-cost vendor",
        RESULT_INDUSTRY_SCORE => "Industry-weighted score",
        RESULT_ANNUAL_SAVINGS => "Annual operating savings",
        RESULT_PAYBACK => "Payback",
        RESULT_PAYBACK_NEVER => "never",
        RESULT_ROI => "ROI",
        RESULT_NPV => "NPV",
        RESULT_MONTHS => "months",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_BASELINE => "Current baseline vendor:",
        SETTINGS_PROMPT_BASELINE => "New baseline vendor id (enter to cancel): ",
        SETTINGS_SAVED => "Baseline vendor changed to:",
        SETTINGS_UNKNOWN_VENDOR => "Vendor not in catalog; baseline unchanged.",
        NO_DATA => "No data available.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_both_languages() {
        use keys::*;
        for key in [
            MAIN_MENU_TITLE,
            RESULT_TOTAL_COST,
            RESULT_SAVINGS,
            SETTINGS_UNKNOWN_VENDOR,
            NO_DATA,
        ] {
            assert!(ko(key).is_some(), "ko missing {key}");
            assert!(en(key).is_some(), "en missing {key}");
        }
    }

    #[test]
    fn unknown_key_echoes_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("nope.missing"), "nope.missing");
    }

    #[test]
    fn overrides_win_over_built_ins() {
        let mut tr = Translator::new("ko");
        tr.overrides = parse_toml_to_map("[result]\ntotal_cost = \"TCO\"\n");
        assert_eq!(tr.t(keys::RESULT_TOTAL_COST), "TCO");
        assert_eq!(tr.t(keys::RESULT_SAVINGS), "절감액");
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language("ko-KR", Some("en")), "ko-kr");
        assert_eq!(resolve_language("auto", Some("en-gb")), "en-us");
    }
}
