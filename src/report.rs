//! 계산 결과를 CLI 용 텍스트/JSON 으로 표현한다.

use std::fmt::Write;

use crate::format::{format_currency, format_percentage, format_unit_price};
use crate::i18n::{keys, Translator};
use crate::industry::{weighted_score, Industry};
use crate::tco::{ComparisonResult, RoiResult, TcoResult};
use crate::vendor::{Vendor, VendorCatalog};

/// 결과를 들여쓴 JSON 으로 직렬화한다.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// 벤더 1개의 TCO 상세.
pub fn render_tco(tr: &Translator, result: &TcoResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} ({})",
        tr.t(keys::RESULT_VENDOR),
        result.vendor_name,
        result.vendor_id
    );
    let _ = writeln!(
        out,
        "{}: {}",
        tr.t(keys::RESULT_VOLUME_DISCOUNT),
        format_percentage(result.volume_discount * 100.0)
    );
    let _ = writeln!(
        out,
        "{}: {}",
        tr.t(keys::RESULT_TOTAL_COST),
        format_currency(result.total_cost)
    );
    for (label, value) in [
        (keys::RESULT_INITIAL_COST, result.total_initial_cost),
        (keys::RESULT_OPERATIONAL_COST, result.total_operational_cost),
        (keys::RESULT_MAINTENANCE_COST, result.total_maintenance_cost),
    ] {
        let _ = writeln!(out, "  {}: {}", tr.t(label), format_currency(value));
    }
    let _ = writeln!(
        out,
        "{}: {}  /  {}: {}",
        tr.t(keys::RESULT_COST_PER_DEVICE),
        format_unit_price(result.cost_per_device),
        tr.t(keys::RESULT_COST_PER_DEVICE_MONTH),
        format_unit_price(result.cost_per_device_per_month)
    );

    let _ = writeln!(out, "{}:", tr.t(keys::RESULT_BREAKDOWN));
    for (name, value) in result.breakdown.entries() {
        if value != 0.0 {
            let _ = writeln!(out, "  {name:<16}{:>14}", format_currency(value));
        }
    }

    let _ = writeln!(out, "{}:", tr.t(keys::RESULT_YEARLY));
    for y in &result.yearly {
        let _ = writeln!(
            out,
            "  {} {:<3}{:>14}  {} {:>14}",
            tr.t(keys::RESULT_YEAR),
            y.year,
            format_currency(y.cost),
            tr.t(keys::RESULT_CUMULATIVE),
            format_currency(y.cumulative_cost)
        );
    }
    out
}

/// 비교 표. 기준 벤더를 첫 줄에 두고 나머지는 입력 순서대로 나열한다.
pub fn render_comparison(tr: &Translator, comparison: &ComparisonResult) -> String {
    let mut out = String::new();
    let baseline = &comparison.baseline;
    let _ = writeln!(
        out,
        "{:<32}{:>16}{:>14}{:>10}",
        tr.t(keys::RESULT_VENDOR),
        tr.t(keys::RESULT_TOTAL_COST),
        tr.t(keys::RESULT_SAVINGS),
        "%"
    );
    let _ = writeln!(
        out,
        "{:<32}{:>16}{:>14}{:>10}",
        format!("{} *", baseline.vendor_name),
        format_currency(baseline.total_cost),
        "-",
        "-"
    );
    for entry in &comparison.vendors {
        let _ = writeln!(
            out,
            "{:<32}{:>16}{:>14}{:>10}",
            entry.result.vendor_name,
            format_currency(entry.result.total_cost),
            format_currency(entry.savings),
            entry.savings_percentage.to_string()
        );
    }
    let _ = writeln!(
        out,
        "* {}  |  {}: {}",
        tr.t(keys::RESULT_BASELINE),
        tr.t(keys::RESULT_CHEAPEST),
        comparison.cheapest().vendor_name
    );
    out
}

/// ROI 분석 요약.
pub fn render_roi(tr: &Translator, roi: &RoiResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} -> {}", roi.competitor_id, roi.baseline_id);
    let _ = writeln!(
        out,
        "{}: {}",
        tr.t(keys::RESULT_ANNUAL_SAVINGS),
        format_currency(roi.annual_operating_savings)
    );
    let _ = writeln!(
        out,
        "{}: {}",
        tr.t(keys::RESULT_SAVINGS),
        format_currency(roi.total_savings)
    );
    let payback = match roi.payback_months {
        Some(months) => format!("{months:.1} {}", tr.t(keys::RESULT_MONTHS)),
        None => tr.t(keys::RESULT_PAYBACK_NEVER).to_string(),
    };
    let _ = writeln!(out, "{}: {payback}", tr.t(keys::RESULT_PAYBACK));
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_ROI), roi.roi_percentage);
    let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_NPV), format_currency(roi.npv));
    out
}

/// 카탈로그 벤더 목록. 업종이 주어지면 업종 가중 점수를 함께 표시한다.
pub fn render_vendor_list(
    tr: &Translator,
    catalog: &VendorCatalog,
    industry: Option<Industry>,
) -> String {
    if catalog.is_empty() {
        return format!("{}\n", tr.t(keys::NO_DATA));
    }
    let mut out = String::new();
    for vendor in catalog.vendors() {
        let _ = write!(
            out,
            "{:<14}{:<32}{:<34}",
            vendor.id,
            vendor.name,
            vendor.pricing.kind().label()
        );
        if let Some(industry) = industry {
            let _ = write!(out, "{:>6.1}", weighted_score(vendor, industry));
        }
        out.push('\n');
    }
    if let Some(industry) = industry {
        let _ = writeln!(out, "({}: {industry})", tr.t(keys::RESULT_INDUSTRY_SCORE));
    }
    out
}

/// 벤더 1개의 업종 가중 점수 한 줄.
pub fn render_industry_score(tr: &Translator, vendor: &Vendor, industry: Industry) -> String {
    format!(
        "{} ({industry}): {:.1}\n",
        tr.t(keys::RESULT_INDUSTRY_SCORE),
        weighted_score(vendor, industry)
    )
}
