use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::calculator::{calculate_tco, TcoCalculator};
use super::{CalculationConfig, TcoError, TcoResult};

/// 백분율 값. 분모가 0 이면 비율을 정의할 수 없으므로 별도 값으로 구분한다.
/// 비교의 절감률과 ROI 에 함께 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Percentage {
    Percent(f64),
    NotApplicable,
}

impl Percentage {
    /// `numerator / denominator × 100`. 분모가 0 이면 `NotApplicable`.
    pub fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            Percentage::NotApplicable
        } else {
            Percentage::Percent(numerator / denominator * 100.0)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Percentage::Percent(v) => Some(*v),
            Percentage::NotApplicable => None,
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Percent(v) => f.write_str(&crate::format::format_percentage(*v)),
            Percentage::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// 기준 벤더 대비 경쟁 벤더 1개의 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VendorComparison {
    pub result: TcoResult,
    /// 경쟁 벤더 총비용 - 기준 벤더 총비용. 양수면 기준 벤더가 저렴하다.
    pub savings: f64,
    pub savings_percentage: Percentage,
}

/// 여러 벤더 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub baseline: TcoResult,
    /// 입력 순서를 유지한다. 기준 벤더는 포함하지 않는다.
    pub vendors: Vec<VendorComparison>,
}

impl ComparisonResult {
    /// 총비용 오름차순 (기준 벤더 포함).
    pub fn ranked(&self) -> Vec<&TcoResult> {
        let mut all: Vec<&TcoResult> = std::iter::once(&self.baseline)
            .chain(self.vendors.iter().map(|c| &c.result))
            .collect();
        all.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));
        all
    }

    pub fn cheapest(&self) -> &TcoResult {
        self.vendors
            .iter()
            .map(|c| &c.result)
            .fold(&self.baseline, |best, r| {
                if r.total_cost < best.total_cost {
                    r
                } else {
                    best
                }
            })
    }

    pub fn get(&self, vendor_id: &str) -> Option<&VendorComparison> {
        self.vendors
            .iter()
            .find(|c| c.result.vendor_id.eq_ignore_ascii_case(vendor_id))
    }
}

fn compare_result(baseline: &TcoResult, result: TcoResult) -> VendorComparison {
    let savings = result.total_cost - baseline.total_cost;
    let savings_percentage = Percentage::ratio(savings, result.total_cost);
    VendorComparison {
        result,
        savings,
        savings_percentage,
    }
}

/// 기준 벤더와 각 벤더의 TCO 를 계산해 절감액/절감률을 구한다.
/// 중복 id 와 기준 벤더 id 는 건너뛴다. 하나라도 실패하면 전체가 실패한다.
pub fn compare_vendors(
    calculator: &TcoCalculator<'_>,
    vendor_ids: &[&str],
    config: &CalculationConfig,
    baseline_id: &str,
) -> Result<ComparisonResult, TcoError> {
    let baseline_vendor = calculator.vendor(baseline_id)?;
    let baseline = calculate_tco(baseline_vendor, config)?;

    let mut seen: Vec<&str> = vec![baseline_vendor.id.as_str()];
    let mut vendors = Vec::with_capacity(vendor_ids.len());
    for id in vendor_ids {
        let vendor = calculator.vendor(id)?;
        if seen.contains(&vendor.id.as_str()) {
            continue;
        }
        seen.push(vendor.id.as_str());
        let result = calculate_tco(vendor, config)?;
        vendors.push(compare_result(&baseline, result));
    }

    debug!(
        baseline = %baseline.vendor_id,
        compared = vendors.len(),
        "vendor comparison finished"
    );
    Ok(ComparisonResult { baseline, vendors })
}

impl TcoCalculator<'_> {
    /// `compare_vendors` 의 메서드 형태.
    pub fn compare(
        &self,
        vendor_ids: &[&str],
        config: &CalculationConfig,
        baseline_id: &str,
    ) -> Result<ComparisonResult, TcoError> {
        compare_vendors(self, vendor_ids, config, baseline_id)
    }
}
