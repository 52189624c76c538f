use tracing::debug;

use super::{CalculationConfig, CostBreakdown, TcoError, TcoResult, YearlyCost};
use crate::vendor::{PricingModel, Vendor, VendorCatalog};

// 아래 상수는 영업 모델의 정책 값이다. 근거 자료가 따로 없으므로 변경 시
// 테스트의 기준 시나리오도 함께 갱신해야 한다.

/// 1 FTE 기본 연 인건비 [USD]
pub const DEFAULT_FTE_COST_PER_YEAR: f64 = 150_000.0;
/// (최소 장비 수, 할인율). 큰 구간부터 검사한다.
pub const VOLUME_DISCOUNT_TIERS: [(u32, f64); 2] = [(5_000, 0.30), (1_000, 0.15)];
/// (최소 장비 수, 구축비 배수)
pub const IMPLEMENTATION_MULTIPLIERS: [(u32, f64); 2] = [(5_000, 1.5), (1_000, 1.2)];
/// 2년차 이후 연 비용에 곱하는 상승률 (복리 아님)
pub const YEARLY_ESCALATION: f64 = 0.05;
/// 사용자 과금 모델에서 장비 1대당 추정 사용자 수
pub const USERS_PER_DEVICE: f64 = 0.8;
/// 분석 기간 상한 [년]
pub const MAX_YEARS: u32 = 100;

/// 장비 수 구간에 따른 볼륨 할인율.
pub fn tier_discount(device_count: u32) -> f64 {
    VOLUME_DISCOUNT_TIERS
        .iter()
        .find(|(min, _)| device_count >= *min)
        .map(|(_, discount)| *discount)
        .unwrap_or(0.0)
}

/// 실제 적용할 볼륨 할인율. 오버라이드가 있으면 구간 할인율의 상한으로 쓴다.
pub fn effective_volume_discount(device_count: u32, override_discount: Option<f64>) -> f64 {
    let tier = tier_discount(device_count);
    match override_discount {
        Some(cap) => tier.min(cap),
        None => tier,
    }
}

/// 장비 수 구간에 따른 구축비 배수.
pub fn implementation_multiplier(device_count: u32) -> f64 {
    IMPLEMENTATION_MULTIPLIERS
        .iter()
        .find(|(min, _)| device_count >= *min)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}

/// 사용자 과금 모델의 추정 사용자 수.
pub fn estimated_user_count(device_count: u32) -> f64 {
    (f64::from(device_count) * USERS_PER_DEVICE).ceil()
}

/// 가격 모델별 연 라이선스 비용 [USD/년].
pub fn annual_licensing(pricing: &PricingModel, device_count: u32, volume_discount: f64) -> f64 {
    let devices = f64::from(device_count);
    match *pricing {
        PricingModel::SubscriptionPerDeviceMonthly {
            per_device_monthly,
            yearly_discount,
        } => {
            let monthly = per_device_monthly * (1.0 - volume_discount) * (1.0 - yearly_discount);
            monthly * 12.0 * devices
        }
        PricingModel::PerDeviceYearly { per_device_yearly } => per_device_yearly * devices,
        PricingModel::PerUserMonthly { per_user_monthly } => {
            per_user_monthly * 12.0 * estimated_user_count(device_count)
        }
        PricingModel::Flat { annual } => annual,
    }
}

/// 벤더 1개의 TCO 를 계산한다.
pub fn calculate_tco(vendor: &Vendor, config: &CalculationConfig) -> Result<TcoResult, TcoError> {
    config.validate()?;
    vendor.validate()?;

    let devices = config.device_count;
    let years = config.years;
    let fte_cost = config
        .fte_cost_per_year
        .unwrap_or(DEFAULT_FTE_COST_PER_YEAR);

    let volume_discount = effective_volume_discount(devices, config.volume_discount);
    let licensing = annual_licensing(&vendor.pricing, devices, volume_discount);
    let implementation = vendor.one_time.implementation * implementation_multiplier(devices);
    let annual_fte = vendor.operations.fte_requirement * fte_cost;
    let maintenance = vendor.operations.annual_maintenance;
    let support = vendor.operations.annual_support;

    let initial = vendor.one_time.initial + implementation + vendor.one_time.training;
    let recurring = licensing + maintenance + support + annual_fte;

    let mut yearly = Vec::with_capacity(years as usize);
    let mut cumulative = 0.0;
    for i in 0..years {
        let mut cost = recurring;
        if i == 0 {
            cost += initial;
        } else {
            cost *= 1.0 + YEARLY_ESCALATION;
        }
        cumulative += cost;
        yearly.push(YearlyCost {
            year: i + 1,
            cost,
            cumulative_cost: cumulative,
        });
    }

    let n = f64::from(years);
    let breakdown = CostBreakdown {
        hardware: vendor.one_time.initial,
        licensing: licensing * n,
        implementation,
        maintenance: maintenance * n,
        personnel: annual_fte * n,
        training: vendor.one_time.training,
        support: support * n,
    };
    let total_initial_cost = initial;
    let total_operational_cost = annual_fte * n;
    let total_maintenance_cost = (licensing + maintenance + support) * n;
    let total_cost = total_initial_cost + total_operational_cost + total_maintenance_cost;
    let cost_per_device = total_cost / f64::from(devices);
    let cost_per_device_per_month = cost_per_device / (n * 12.0);

    debug!(
        vendor = %vendor.id,
        devices,
        years,
        volume_discount,
        total_cost,
        "tco calculated"
    );

    Ok(TcoResult {
        vendor_id: vendor.id.clone(),
        vendor_name: vendor.name.clone(),
        device_count: devices,
        years,
        volume_discount,
        annual_licensing: licensing,
        annual_fte,
        breakdown,
        total_initial_cost,
        total_operational_cost,
        total_maintenance_cost,
        total_cost,
        cost_per_device,
        cost_per_device_per_month,
        yearly,
    })
}

/// 카탈로그를 주입받아 벤더 id 로 계산하는 진입점.
#[derive(Debug, Clone, Copy)]
pub struct TcoCalculator<'a> {
    catalog: &'a VendorCatalog,
}

impl<'a> TcoCalculator<'a> {
    pub fn new(catalog: &'a VendorCatalog) -> Self {
        Self { catalog }
    }

    pub fn vendor(&self, vendor_id: &str) -> Result<&'a Vendor, TcoError> {
        self.catalog
            .find(vendor_id)
            .ok_or_else(|| TcoError::NotFound(vendor_id.to_string()))
    }

    pub fn calculate(
        &self,
        vendor_id: &str,
        config: &CalculationConfig,
    ) -> Result<TcoResult, TcoError> {
        calculate_tco(self.vendor(vendor_id)?, config)
    }
}
