//! 임의 벤더/조건에 대한 TCO 불변식 검사.
use nac_tco_toolbox::tco::calculator::tier_discount;
use nac_tco_toolbox::tco::{calculate_tco, CalculationConfig, TcoError};
use nac_tco_toolbox::vendor::{OneTimeCosts, Operations, PricingModel, Vendor, VendorScores};
use proptest::prelude::*;

fn pricing_strategy() -> impl Strategy<Value = PricingModel> {
    prop_oneof![
        (0.0..50.0f64, 0.0..=1.0f64).prop_map(|(per_device_monthly, yearly_discount)| {
            PricingModel::SubscriptionPerDeviceMonthly {
                per_device_monthly,
                yearly_discount,
            }
        }),
        (0.0..200.0f64).prop_map(|per_device_yearly| PricingModel::PerDeviceYearly {
            per_device_yearly
        }),
        (0.0..20.0f64).prop_map(|per_user_monthly| PricingModel::PerUserMonthly {
            per_user_monthly
        }),
        (0.0..500_000.0f64).prop_map(|annual| PricingModel::Flat { annual }),
    ]
}

fn vendor_strategy() -> impl Strategy<Value = Vendor> {
    (
        pricing_strategy(),
        (0.0..200_000.0f64, 0.0..200_000.0f64, 0.0..20_000.0f64),
        (0.0..5.0f64, 0.0..50_000.0f64, 0.0..20_000.0f64),
    )
        .prop_map(|(pricing, (initial, implementation, training), (fte, maint, support))| {
            Vendor {
                id: "prop".into(),
                name: "Prop".into(),
                pricing,
                one_time: OneTimeCosts {
                    initial,
                    implementation,
                    training,
                },
                operations: Operations {
                    fte_requirement: fte,
                    annual_maintenance: maint,
                    annual_support: support,
                },
                scores: VendorScores::default(),
            }
        })
}

fn config_strategy() -> impl Strategy<Value = CalculationConfig> {
    (
        1u32..20_000,
        1u32..10,
        proptest::option::of(0.0..400_000.0f64),
        proptest::option::of(0.0..=1.0f64),
    )
        .prop_map(|(devices, years, fte, discount)| CalculationConfig {
            device_count: devices,
            years,
            fte_cost_per_year: fte,
            volume_discount: discount,
            industry: None,
        })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn totals_are_consistent(vendor in vendor_strategy(), cfg in config_strategy()) {
        let r = calculate_tco(&vendor, &cfg).unwrap();
        prop_assert!(close(
            r.total_cost,
            r.total_initial_cost + r.total_operational_cost + r.total_maintenance_cost
        ));
        prop_assert!(close(r.total_cost, r.breakdown.total()));
        prop_assert!(close(r.cost_per_device * f64::from(cfg.device_count), r.total_cost));
        prop_assert!(r.total_cost >= 0.0);
        prop_assert!(r.total_cost.is_finite());
    }

    #[test]
    fn cumulative_cost_never_decreases(vendor in vendor_strategy(), cfg in config_strategy()) {
        let r = calculate_tco(&vendor, &cfg).unwrap();
        prop_assert_eq!(r.yearly.len(), cfg.years as usize);
        for pair in r.yearly.windows(2) {
            prop_assert!(pair[1].cumulative_cost >= pair[0].cumulative_cost);
        }
    }

    #[test]
    fn repeated_calls_are_identical(vendor in vendor_strategy(), cfg in config_strategy()) {
        let a = calculate_tco(&vendor, &cfg).unwrap();
        let b = calculate_tco(&vendor, &cfg).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn volume_discount_is_monotonic(small in 1u32..1_000, mid in 1_000u32..5_000, large in 5_000u32..100_000) {
        prop_assert_eq!(tier_discount(small), 0.0);
        prop_assert!(tier_discount(large) >= tier_discount(mid));
        prop_assert!(tier_discount(mid) >= tier_discount(small));
    }

    #[test]
    fn zero_devices_never_produces_numbers(vendor in vendor_strategy(), years in 1u32..10) {
        let err = calculate_tco(&vendor, &CalculationConfig::new(0, years)).unwrap_err();
        prop_assert!(matches!(err, TcoError::InvalidInput(_)));
    }
}
