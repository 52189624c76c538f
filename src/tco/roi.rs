//! 경쟁 벤더에서 기준 벤더로 전환할 때의 투자 회수 분석.

use serde::Serialize;

use super::comparison::Percentage;
use super::{TcoError, TcoResult};

/// ROI 분석 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiResult {
    pub baseline_id: String,
    pub competitor_id: String,
    /// 연간 운영비 절감액 [USD/년]
    pub annual_operating_savings: f64,
    /// 분석 기간 총 절감액 [USD]
    pub total_savings: f64,
    /// 단순 회수기간 [개월]. 운영비 절감이 없으면 None.
    pub payback_months: Option<f64>,
    /// 총 절감액 / 기준 벤더 총비용
    pub roi_percentage: Percentage,
    /// 순현재가치(NPV) [USD]
    pub npv: f64,
}

/// 두 계산 결과로 회수기간, ROI, NPV 를 계산한다.
/// `discount_rate` 는 소수(0.08 = 8%)이며 0 이상 1 미만이어야 한다.
pub fn analyze(
    baseline: &TcoResult,
    competitor: &TcoResult,
    discount_rate: f64,
) -> Result<RoiResult, TcoError> {
    if !(0.0..1.0).contains(&discount_rate) {
        return Err(TcoError::InvalidInput(format!(
            "할인율은 0 이상 1 미만이어야 합니다 (입력: {discount_rate})"
        )));
    }
    if baseline.years != competitor.years || baseline.device_count != competitor.device_count {
        return Err(TcoError::InvalidInput(
            "같은 조건(장비 수/기간)으로 계산한 결과끼리만 비교할 수 있습니다".into(),
        ));
    }

    let annual_operating_savings = competitor.annual_run_cost() - baseline.annual_run_cost();
    let total_savings = competitor.total_cost - baseline.total_cost;
    let investment = baseline.total_initial_cost;

    let payback_months = if investment == 0.0 {
        Some(0.0)
    } else if annual_operating_savings > 0.0 {
        Some(investment / annual_operating_savings * 12.0)
    } else {
        None
    };

    let years = i32::try_from(baseline.years).map_err(|_| {
        TcoError::InvalidInput(format!("분석 기간이 너무 깁니다 (입력: {})", baseline.years))
    })?;
    let mut npv = -investment;
    for year in 1..=years {
        let df = (1.0 + discount_rate).powi(year);
        npv += annual_operating_savings / df;
    }

    Ok(RoiResult {
        baseline_id: baseline.vendor_id.clone(),
        competitor_id: competitor.vendor_id.clone(),
        annual_operating_savings,
        total_savings,
        payback_months,
        roi_percentage: Percentage::ratio(total_savings, baseline.total_cost),
        npv,
    })
}
