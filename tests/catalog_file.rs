//! Integration tests for loading pricing catalogs from YAML files.

use rust_decimal::Decimal;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use pricing_engine::adapters::RecordingRenderer;
use pricing_engine::application::PricingSession;
use pricing_engine::config::CatalogConfig;
use pricing_engine::domain::catalog::{
    BillingPeriod, CatalogDocument, CatalogError, CurrencyCode, PlanId, PricingCatalog,
};
use pricing_engine::domain::pricing::PricingEngine;

fn shipped_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("catalog/black-friday.yaml")
}

fn session_for(catalog: PricingCatalog) -> PricingSession {
    PricingSession::new(
        Arc::new(catalog),
        PricingEngine::default(),
        Box::new(RecordingRenderer::new()),
    )
}

#[test]
fn shipped_promotion_catalog_is_valid() {
    let doc = CatalogDocument::from_path(shipped_catalog()).unwrap();
    let catalog = PricingCatalog::from_document(doc, true).unwrap();
    assert_eq!(catalog.override_count(), 9);
    assert_eq!(catalog.plan(PlanId::Pro2).monthly_price_per_user_eur, Decimal::from(99));
}

#[test]
fn promotion_switch_controls_annual_price() {
    let config = CatalogConfig {
        path: Some(shipped_catalog()),
    };

    let mut off = session_for(config.load(false).unwrap());
    off.set_users(2, Some(BillingPeriod::Annual)).unwrap();
    let standard = off.set_billing_period(BillingPeriod::Annual).unwrap();
    assert!(!standard.promotional);
    assert_eq!(standard.displayed_price, 110);

    let mut on = session_for(config.load(true).unwrap());
    on.set_users(2, Some(BillingPeriod::Annual)).unwrap();
    let promo = on.set_billing_period(BillingPeriod::Annual).unwrap();
    assert!(promo.promotional);
    assert_eq!(promo.displayed_price, 98);
    assert_eq!(promo.original_price, Some(138));
    assert_eq!(promo.discount_percent, 29);
}

#[test]
fn promotion_does_not_touch_other_periods() {
    let config = CatalogConfig {
        path: Some(shipped_catalog()),
    };
    let mut session = session_for(config.load(true).unwrap());
    session.set_currency(CurrencyCode::USD).unwrap();
    let quarterly = session.set_billing_period(BillingPeriod::Quarterly).unwrap();
    assert!(!quarterly.promotional);
    // round(69 × 0.9) = 62, round(62 × 1.08) = 67
    assert_eq!(quarterly.displayed_price, 67);
}

#[test]
fn written_standard_document_loads_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let yaml = PricingCatalog::standard_document().to_yaml().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = CatalogConfig {
        path: Some(file.path().to_path_buf()),
    };
    assert!(config.validate().is_ok());
    assert_eq!(config.load(false).unwrap(), PricingCatalog::standard(false));
}

#[test]
fn incomplete_catalog_file_is_rejected() {
    let mut doc = PricingCatalog::standard_document();
    doc.currencies.retain(|c| c.code != CurrencyCode::USD);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(doc.to_yaml().unwrap().as_bytes()).unwrap();

    let config = CatalogConfig {
        path: Some(file.path().to_path_buf()),
    };
    assert!(matches!(
        config.load(false),
        Err(CatalogError::MissingCurrency(CurrencyCode::USD))
    ));
}

#[test]
fn malformed_catalog_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"plans: not-a-list\n").unwrap();

    let config = CatalogConfig {
        path: Some(file.path().to_path_buf()),
    };
    assert!(matches!(config.load(false), Err(CatalogError::Parse(_))));
}
