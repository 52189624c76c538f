//! 카탈로그 TOML 로드/검증 테스트.
use nac_tco_toolbox::vendor::{CatalogError, PricingKind, PricingModel, VendorCatalog};

const SCORES: &str = r#"
[vendors.scores.features]
zero_trust = 80
cloud_native = 90
agentless = 70
iot_coverage = 60
automation = 75
scalability = 85

[vendors.scores.compliance]
hipaa = 90
pci_dss = 85
nist = 88
gdpr = 80
soc2 = 92
iso27001 = 86
"#;

fn catalog_toml(pricing: &str) -> String {
    format!(
        r#"
[[vendors]]
id = "Acme"
name = "Acme NAC"

[vendors.pricing]
{pricing}

[vendors.one_time]
initial = 1000
implementation = 2000

[vendors.operations]
fte_requirement = 0.5
annual_maintenance = 300
{SCORES}"#
    )
}

#[test]
fn loads_subscription_vendor() {
    let src = catalog_toml(
        "model = \"subscription-per-device-monthly\"\nper_device_monthly = 3.5\nyearly_discount = 0.1",
    );
    let catalog = VendorCatalog::from_toml_str(&src).expect("catalog");
    let acme = catalog.find("acme").expect("acme");
    assert_eq!(acme.id, "acme");
    assert_eq!(
        acme.pricing,
        PricingModel::SubscriptionPerDeviceMonthly {
            per_device_monthly: 3.5,
            yearly_discount: 0.1
        }
    );
    assert_eq!(acme.one_time.training, 0.0);
    assert_eq!(acme.operations.annual_support, 0.0);
}

#[test]
fn yearly_discount_is_optional() {
    let src = catalog_toml("model = \"subscription-per-device-monthly\"\nper_device_monthly = 2");
    let catalog = VendorCatalog::from_toml_str(&src).expect("catalog");
    let acme = catalog.find("acme").expect("acme");
    assert_eq!(acme.pricing.kind(), PricingKind::SubscriptionPerDeviceMonthly);
}

#[test]
fn missing_rate_for_declared_model_is_malformed() {
    // per-user 모델인데 장비 단가만 있음
    let src = catalog_toml("model = \"per-user-monthly\"\nper_device_monthly = 3.5");
    let err = VendorCatalog::from_toml_str(&src).unwrap_err();
    match err {
        CatalogError::Vendor(e) => {
            assert_eq!(e.vendor, "acme");
            assert!(e.reason.contains("per_user_monthly"), "{}", e.reason);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn out_of_range_discount_is_malformed() {
    let src = catalog_toml(
        "model = \"subscription-per-device-monthly\"\nper_device_monthly = 3.5\nyearly_discount = 1.2",
    );
    assert!(matches!(
        VendorCatalog::from_toml_str(&src),
        Err(CatalogError::Vendor(_))
    ));
}

#[test]
fn unknown_model_is_a_parse_error() {
    let src = catalog_toml("model = \"per-seat-lifetime\"\nannual = 1");
    assert!(matches!(
        VendorCatalog::from_toml_str(&src),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let one = catalog_toml("model = \"flat\"\nannual = 1000");
    let doubled = format!("{one}\n{one}");
    assert!(matches!(
        VendorCatalog::from_toml_str(&doubled),
        Err(CatalogError::DuplicateId(_))
    ));
}

#[test]
fn empty_catalog_is_rejected() {
    assert!(matches!(
        VendorCatalog::from_toml_str(""),
        Err(CatalogError::Empty)
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = VendorCatalog::load(std::path::Path::new("definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("here.toml"));
}

#[test]
fn loads_catalog_file_and_reproduces_reference_scenario() {
    use nac_tco_toolbox::tco::{CalculationConfig, TcoCalculator};

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/vendors.toml");
    let catalog = VendorCatalog::load(&path).expect("catalog file");
    assert_eq!(catalog.ids().collect::<Vec<_>>(), vec!["portnox", "legacy"]);

    let cmp = TcoCalculator::new(&catalog)
        .compare(&["legacy"], &CalculationConfig::new(1_000, 3), "portnox")
        .expect("compare");
    assert!((cmp.baseline.total_cost - 193_920.0).abs() < 1e-6);
    assert!(cmp.vendors[0].savings > 0.0);
}
