//! TCO/ROI 계산 모듈 모음.
//!
//! 모든 계산은 입력만으로 결정되는 순수 함수이다. 결과는 호출할 때마다 새로
//! 만들어지고 이후 변경되지 않는다.

pub mod calculator;
pub mod comparison;
pub mod roi;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::industry::Industry;
use crate::vendor::VendorDataError;

pub use calculator::{calculate_tco, TcoCalculator};
pub use comparison::{compare_vendors, ComparisonResult, Percentage, VendorComparison};
pub use roi::{RoiResult, analyze as analyze_roi};

/// TCO 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TcoError {
    /// 장비 수/기간 등 입력값 오류
    #[error("입력 오류: {0}")]
    InvalidInput(String),
    /// 카탈로그에 없는 벤더 id
    #[error("알 수 없는 벤더: {0}")]
    NotFound(String),
    /// 가격 모델에 필요한 필드 누락 등 벤더 데이터 오류
    #[error(transparent)]
    MalformedVendorData(#[from] VendorDataError),
}

/// 계산 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// 관리 대상 장비 수 (1 이상)
    pub device_count: u32,
    /// 분석 기간 [년] (1 이상)
    pub years: u32,
    /// 1 FTE 연 인건비 [USD]. 없으면 150,000.
    #[serde(default)]
    pub fte_cost_per_year: Option<f64>,
    /// 볼륨 할인 상한(0~1). 지정하면 구간 할인율과 비교해 작은 값을 쓴다.
    #[serde(default)]
    pub volume_discount: Option<f64>,
    /// 표시/가중치 용도. 비용 계산에는 쓰지 않는다.
    #[serde(default)]
    pub industry: Option<Industry>,
}

impl CalculationConfig {
    pub fn new(device_count: u32, years: u32) -> Self {
        Self {
            device_count,
            years,
            fte_cost_per_year: None,
            volume_discount: None,
            industry: None,
        }
    }

    pub fn with_fte_cost(mut self, fte_cost_per_year: f64) -> Self {
        self.fte_cost_per_year = Some(fte_cost_per_year);
        self
    }

    pub fn with_volume_discount(mut self, discount: f64) -> Self {
        self.volume_discount = Some(discount);
        self
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    /// 계산 전에 입력 범위를 확인한다.
    pub fn validate(&self) -> Result<(), TcoError> {
        if self.device_count == 0 {
            return Err(TcoError::InvalidInput(
                "장비 수는 1 이상이어야 합니다".into(),
            ));
        }
        if self.years == 0 || self.years > calculator::MAX_YEARS {
            return Err(TcoError::InvalidInput(format!(
                "분석 기간은 1~{}년이어야 합니다 (입력: {})",
                calculator::MAX_YEARS,
                self.years
            )));
        }
        if let Some(fte) = self.fte_cost_per_year {
            if !fte.is_finite() || fte < 0.0 {
                return Err(TcoError::InvalidInput(format!(
                    "FTE 인건비는 0 이상이어야 합니다 (입력: {fte})"
                )));
            }
        }
        if let Some(discount) = self.volume_discount {
            if !(0.0..=1.0).contains(&discount) {
                return Err(TcoError::InvalidInput(format!(
                    "볼륨 할인율은 0~1 범위여야 합니다 (입력: {discount})"
                )));
            }
        }
        Ok(())
    }
}

/// 비용 항목별 합계 [USD, 분석 기간 전체].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CostBreakdown {
    pub hardware: f64,
    pub licensing: f64,
    pub implementation: f64,
    pub maintenance: f64,
    pub personnel: f64,
    pub training: f64,
    pub support: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.hardware
            + self.licensing
            + self.implementation
            + self.maintenance
            + self.personnel
            + self.training
            + self.support
    }

    /// 표시용 (항목명, 금액) 목록.
    pub fn entries(&self) -> [(&'static str, f64); 7] {
        [
            ("hardware", self.hardware),
            ("licensing", self.licensing),
            ("implementation", self.implementation),
            ("maintenance", self.maintenance),
            ("personnel", self.personnel),
            ("training", self.training),
            ("support", self.support),
        ]
    }
}

/// 연도별 비용과 누적 비용.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlyCost {
    /// 1부터 시작하는 연차
    pub year: u32,
    pub cost: f64,
    pub cumulative_cost: f64,
}

/// 벤더 1개에 대한 TCO 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TcoResult {
    pub vendor_id: String,
    pub vendor_name: String,
    pub device_count: u32,
    pub years: u32,
    /// 실제 적용된 볼륨 할인율
    pub volume_discount: f64,
    pub annual_licensing: f64,
    pub annual_fte: f64,
    pub breakdown: CostBreakdown,
    pub total_initial_cost: f64,
    pub total_operational_cost: f64,
    pub total_maintenance_cost: f64,
    pub total_cost: f64,
    pub cost_per_device: f64,
    pub cost_per_device_per_month: f64,
    pub yearly: Vec<YearlyCost>,
}

impl TcoResult {
    /// 초기비를 제외한 연간 운영비 (라이선스 + 유지보수 + 지원 + 인건비).
    pub fn annual_run_cost(&self) -> f64 {
        let years = f64::from(self.years);
        (self.total_operational_cost + self.total_maintenance_cost) / years
    }

    /// 연도별 누적 비용의 마지막 값 (연 상승률 반영).
    pub fn escalated_total(&self) -> f64 {
        self.yearly.last().map(|y| y.cumulative_cost).unwrap_or(0.0)
    }
}
