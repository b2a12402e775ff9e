//! Integration tests for campaign rule validation

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;
use smallvec::smallvec;
use testresult::TestResult;

use promotion_rules::prelude::*;

const NOW: Timestamp = Timestamp::constant(4_070_908_800, 0);

fn minimal_record() -> CampaignRecord {
    CampaignRecord {
        campaign_type: Some(CampaignType::Auto),
        start_date: Some(NOW + SignedDuration::from_hours(24)),
        end_date: Some(NOW + SignedDuration::from_hours(48)),
        purchased_products: vec!["milk".to_string(), "cookie".to_string()],
        purchased_amount: Some(2),
        ..CampaignRecord::default()
    }
}

fn settings(value: &str) -> InMemorySettings {
    [TenantSetting::new(VERTICAL_SETTING, value)]
        .into_iter()
        .collect()
}

fn error_code(record: &CampaignRecord, store: &InMemorySettings) -> TestResult<Option<&'static str>> {
    Ok(RuleValidator::new(store).validate_at(record, NOW)?.error_code())
}

#[test]
fn minimal_campaign_is_valid() -> TestResult {
    let store = settings("retail");

    assert_eq!(error_code(&minimal_record(), &store)?, None);

    Ok(())
}

#[test]
fn missing_tenant_setting_disables_features() -> TestResult {
    let store = InMemorySettings::new();
    let mut record = minimal_record();
    record.customer_group_ids = smallvec![7];

    assert_eq!(error_code(&record, &store)?, Some("group-targeting-disabled"));

    Ok(())
}

#[test]
fn scope_rule_takes_precedence_over_award_rule() -> TestResult {
    let store = settings("retail");
    let mut record = minimal_record();
    record.warehouse_id = Some(1);
    record.store_group = Some("north".to_string());
    record.awarded_amount = Some(1);

    assert_eq!(error_code(&record, &store)?, Some("multiple-scope-settings"));

    record.store_group = None;

    assert_eq!(error_code(&record, &store)?, Some("award-missing-discount"));

    Ok(())
}

#[test]
fn validation_is_idempotent() -> TestResult {
    let store = settings("retail");
    let validator = RuleValidator::new(&store);
    let mut record = minimal_record();
    record.lowest_price_item_is_awarded = true;

    let first = validator.validate_at(&record, NOW)?;
    let second = validator.validate_at(&record, NOW)?;

    assert_eq!(first, second);
    assert_eq!(first.error_code(), Some("lowest-price-award-missing-discount"));

    Ok(())
}

#[test]
fn max_items_bound_is_inclusive() -> TestResult {
    let store = settings("retail");
    let mut record = minimal_record();
    record.purchased_amount = Some(4);

    record.max_items_with_special_unit_price = Some(4);
    assert_eq!(error_code(&record, &store)?, None);

    record.max_items_with_special_unit_price = Some(3);
    assert_eq!(
        error_code(&record, &store)?,
        Some("max-items-below-purchased-amount")
    );

    Ok(())
}

#[test]
fn purchased_subsidies_must_match_products() -> TestResult {
    let store = settings("retail");
    let mut record = minimal_record();
    record.percentage_off_matching_items = Some(10);
    record.purchased_product_subsidies = vec!["0.10".to_string()];

    assert_eq!(
        error_code(&record, &store)?,
        Some("subsidy-length-mismatch-purchased")
    );

    record.purchased_product_subsidies.push("0.20".to_string());

    assert_eq!(error_code(&record, &store)?, None);

    Ok(())
}

#[test]
fn redemption_limit_conflicts_with_entire_purchase_percentage() -> TestResult {
    let store = settings("retail");
    let mut record = minimal_record();
    record.redemption_limit = Some(5);
    record.percentage_off_entire_purchase = Some(1);

    assert_eq!(error_code(&record, &store)?, Some("redemption-limit-conflict"));

    Ok(())
}

#[test]
fn manager_override_needs_manual_campaign() -> TestResult {
    let store = settings("retail");
    let mut record = minimal_record();
    record.requires_manager_override = true;

    assert_eq!(error_code(&record, &store)?, Some("manager-override-conflict"));

    record.campaign_type = Some(CampaignType::Manual);

    assert_eq!(error_code(&record, &store)?, None);

    Ok(())
}

#[test]
fn region_targeting_follows_tenant_token() -> TestResult {
    let mut record = minimal_record();
    record.store_region_ids = smallvec![1, 2, 3];

    assert_eq!(
        error_code(&record, &settings("retail"))?,
        Some("region-targeting-disabled")
    );
    assert_eq!(error_code(&record, &settings("retail,store_regions"))?, None);

    Ok(())
}

#[test]
fn zero_values_read_as_unset() -> TestResult {
    let store = settings("retail");
    let mut record = minimal_record();
    record.warehouse_id = Some(0);
    record.store_group = Some(String::new());
    record.store_region_ids = smallvec![];
    record.sum_off = Some(Decimal::ZERO);
    record.redemption_limit = Some(0);

    assert_eq!(error_code(&record, &store)?, None);

    Ok(())
}

#[test]
fn all_violations_mode_reports_in_rule_order() -> TestResult {
    let store = settings("retail");
    let validator = RuleValidator::with_settings(
        &store,
        ValidatorSettings::default().with_reporting(ReportingMode::AllViolations),
    );
    let mut record = minimal_record();
    record.campaign_type = Some(CampaignType::from("weekly"));
    record.end_date = record.start_date;
    record.redemption_limit = Some(5);
    record.percentage_off_entire_purchase = Some(1);

    let rules: Vec<Rule> = validator
        .report_at(&record, NOW)?
        .iter()
        .map(Violation::rule)
        .collect();

    assert_eq!(
        rules,
        vec![
            Rule::CampaignType,
            Rule::EndDate,
            Rule::RedemptionLimitConflict,
            Rule::RedemptionLimitMaxItems,
        ]
    );

    Ok(())
}
