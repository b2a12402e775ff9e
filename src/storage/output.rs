//! Campaign Output
//!
//! The flat read model returned by the promotion API. Absent values are
//! reported as zero or empty, lists as comma-joined text and flags as `0`/`1`.

use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::{
    campaigns::CampaignRecord,
    storage::{AttributeValue, StoredCampaign},
};

/// Campaign as returned to API clients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[expect(
    missing_docs,
    reason = "fields mirror CampaignRecord under the same wire names"
)]
pub struct CampaignOutput {
    #[serde(rename = "campaignID")]
    pub campaign_id: u32,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    #[serde(rename = "warehouseID")]
    pub warehouse_id: u32,
    #[serde(rename = "awardedProductGroupID")]
    pub awarded_product_group_id: u32,
    #[serde(rename = "awardedBrandID")]
    pub awarded_brand_id: u32,
    pub lowest_price_item_is_awarded: u8,
    #[serde(rename = "percentageOFF")]
    pub percentage_off: Decimal,
    #[serde(rename = "sumOFF")]
    pub sum_off: Decimal,
    pub discount_for_one_line: u32,
    #[serde(rename = "requiredCouponID")]
    pub required_coupon_id: String,
    pub required_coupon_code: String,
    pub purchased_products: String,
    pub awarded_products: String,
    pub excluded_products: String,
    pub percentage_off_excluded_products: String,
    pub percentage_off_included_products: String,
    pub purchased_product_subsidies: String,
    pub sum_off_excluded_products: String,
    pub sum_off_included_products: String,
    pub awarded_product_subsidies: String,
    #[serde(rename = "storeRegionIDs")]
    pub store_region_ids: String,
    #[serde(rename = "customerGroupIDs")]
    pub customer_group_ids: String,
    pub awarded_amount: u32,
    #[serde(rename = "purchasedProductCategoryID")]
    pub purchased_product_category_id: u32,
    #[serde(rename = "awardedProductCategoryID")]
    pub awarded_product_category_id: u32,
    pub maximum_points_discount: u32,
    pub customer_can_use_only_once: u8,
    pub price_at_least: u32,
    pub price_at_most: u32,
    pub requires_manager_override: u8,
    pub sum_off_matching_items: u32,
    pub percentage_off_matching_items: u32,
    pub exclude_discounted_from_percentage_off_entire_purchase: u8,
    pub exclude_promotion_items_from_percentage_off_entire_purchase: u8,
    #[serde(rename = "reasonID")]
    pub reason_id: u32,
    pub special_unit_price: u32,
    pub max_items_with_special_unit_price: u32,
    pub redemption_limit: u32,
    pub store_group: String,
    pub can_be_applied_manually_multiple_times: u8,
    #[serde(rename = "purchasedProductGroupID")]
    pub purchased_product_group_id: u32,
    #[serde(rename = "purchasedBrandID")]
    pub purchased_brand_id: u32,
    pub purchased_amount: u32,
    pub purchase_total_value: Decimal,
    pub reward_points: u32,
    pub percentage_off_entire_purchase: u32,
    pub sum_off_entire_purchase: Decimal,
    pub special_price: Decimal,
    pub added: i64,
    #[serde(rename = "addedby")]
    pub added_by: String,
    pub changed: i64,
    #[serde(rename = "changedby")]
    pub changed_by: String,
}

impl CampaignOutput {
    /// Read model of a record that has not been stored.
    pub fn from_record(record: &CampaignRecord) -> Self {
        Self {
            campaign_id: record.campaign_id.unwrap_or_default(),
            start_date: record.start_date,
            end_date: record.end_date,
            name: record.name.clone().unwrap_or_default(),
            campaign_type: record
                .campaign_type
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            warehouse_id: record.warehouse_id.unwrap_or_default(),
            awarded_product_group_id: record.awarded_product_group_id.unwrap_or_default(),
            awarded_brand_id: record.awarded_brand_id.unwrap_or_default(),
            lowest_price_item_is_awarded: u8::from(record.lowest_price_item_is_awarded),
            percentage_off: record.percentage_off.unwrap_or_default(),
            sum_off: record.sum_off.unwrap_or_default(),
            discount_for_one_line: record.discount_for_one_line.unwrap_or_default(),
            required_coupon_id: record.required_coupon_id.clone().unwrap_or_default(),
            required_coupon_code: record.required_coupon_code.clone().unwrap_or_default(),
            purchased_products: record.purchased_products.join(","),
            awarded_products: record.awarded_products.join(","),
            excluded_products: record.excluded_products.join(","),
            percentage_off_excluded_products: record.percentage_off_excluded_products.join(","),
            percentage_off_included_products: record.percentage_off_included_products.join(","),
            purchased_product_subsidies: record.purchased_product_subsidies.join(","),
            sum_off_excluded_products: record.sum_off_excluded_products.join(","),
            sum_off_included_products: record.sum_off_included_products.join(","),
            awarded_product_subsidies: record.awarded_product_subsidies.join(","),
            store_region_ids: join_ids(&record.store_region_ids),
            customer_group_ids: join_ids(&record.customer_group_ids),
            awarded_amount: record.awarded_amount.unwrap_or_default(),
            purchased_product_category_id: record
                .purchased_product_category_id
                .unwrap_or_default(),
            awarded_product_category_id: record.awarded_product_category_id.unwrap_or_default(),
            maximum_points_discount: record.maximum_points_discount.unwrap_or_default(),
            customer_can_use_only_once: u8::from(record.customer_can_use_only_once),
            price_at_least: record.price_at_least.unwrap_or_default(),
            price_at_most: record.price_at_most.unwrap_or_default(),
            requires_manager_override: u8::from(record.requires_manager_override),
            sum_off_matching_items: record.sum_off_matching_items.unwrap_or_default(),
            percentage_off_matching_items: record
                .percentage_off_matching_items
                .unwrap_or_default(),
            exclude_discounted_from_percentage_off_entire_purchase: u8::from(
                record.exclude_discounted_from_percentage_off_entire_purchase,
            ),
            exclude_promotion_items_from_percentage_off_entire_purchase: u8::from(
                record.exclude_promotion_items_from_percentage_off_entire_purchase,
            ),
            reason_id: record.reason_id.unwrap_or_default(),
            special_unit_price: record.special_unit_price.unwrap_or_default(),
            max_items_with_special_unit_price: record
                .max_items_with_special_unit_price
                .unwrap_or_default(),
            redemption_limit: record.redemption_limit.unwrap_or_default(),
            store_group: record.store_group.clone().unwrap_or_default(),
            can_be_applied_manually_multiple_times: u8::from(
                record.can_be_applied_manually_multiple_times,
            ),
            purchased_product_group_id: record.purchased_product_group_id.unwrap_or_default(),
            purchased_brand_id: record.purchased_brand_id.unwrap_or_default(),
            purchased_amount: record.purchased_amount.unwrap_or_default(),
            purchase_total_value: record.purchase_total_value.unwrap_or_default(),
            reward_points: record.reward_points.unwrap_or_default(),
            percentage_off_entire_purchase: record
                .percentage_off_entire_purchase
                .unwrap_or_default(),
            sum_off_entire_purchase: record.sum_off_entire_purchase.unwrap_or_default(),
            special_price: record.special_price.unwrap_or_default(),
            ..Self::default()
        }
    }
}

impl From<&StoredCampaign> for CampaignOutput {
    fn from(stored: &StoredCampaign) -> Self {
        let row = &stored.row;
        let attributes = Attributes::new(stored);

        Self {
            campaign_id: row.id.unwrap_or_default(),
            start_date: row.start_date,
            end_date: row.end_date,
            name: row.name.clone(),
            campaign_type: row.campaign_type.clone(),
            warehouse_id: row.warehouse_id.unwrap_or_default(),
            awarded_product_group_id: row.awarded_product_group_id.unwrap_or_default(),
            awarded_brand_id: attributes.int("awardedBrandID"),
            lowest_price_item_is_awarded: u8::from(row.award_lowest_priced_item),
            percentage_off: row.percentage_off.unwrap_or_default(),
            sum_off: row.sum_off.unwrap_or_default(),
            discount_for_one_line: attributes.int("discountForOneLine"),
            required_coupon_id: attributes.text("requiredCouponID"),
            required_coupon_code: attributes.text("requiredCouponCode"),
            purchased_products: attributes.text("purchasedProducts"),
            awarded_products: attributes.text("awardedProducts"),
            excluded_products: attributes.text("excludedProducts"),
            percentage_off_excluded_products: attributes.text("percentageOffExcludedProducts"),
            percentage_off_included_products: attributes.text("percentageOffIncludedProducts"),
            purchased_product_subsidies: attributes.text("purchasedProductSubsidies"),
            sum_off_excluded_products: attributes.text("sumOffExcludedProducts"),
            sum_off_included_products: attributes.text("sumOffIncludedProducts"),
            awarded_product_subsidies: attributes.text("awardedProductSubsidies"),
            store_region_ids: attributes.text("storeRegionIDs"),
            customer_group_ids: attributes.text("customerGroupIDs"),
            awarded_amount: attributes.int("awardedAmount"),
            purchased_product_category_id: attributes.int("purchasedProductCategoryID"),
            awarded_product_category_id: attributes.int("awardedProductCategoryID"),
            maximum_points_discount: attributes.int("maximumPointsDiscount"),
            customer_can_use_only_once: attributes.flag("customerCanUseOnlyOnce"),
            price_at_least: attributes.int("priceAtLeast"),
            price_at_most: attributes.int("priceAtMost"),
            requires_manager_override: attributes.flag("requiresManagerOverride"),
            sum_off_matching_items: attributes.int("sumOffMatchingItems"),
            percentage_off_matching_items: row.percentage_off_any_one_line.unwrap_or_default(),
            exclude_discounted_from_percentage_off_entire_purchase: attributes
                .flag("excludeDiscountedFromPercentageOffEntirePurchase"),
            exclude_promotion_items_from_percentage_off_entire_purchase: attributes
                .flag("excludePromotionItemsFromPercentageOffEntirePurchase"),
            reason_id: attributes.int("reasonID"),
            special_unit_price: attributes.int("specialUnitPrice"),
            max_items_with_special_unit_price: attributes.int("maxItemsWithSpecialUnitPrice"),
            redemption_limit: attributes.int("redemptionLimit"),
            store_group: attributes.text("storeGroup"),
            can_be_applied_manually_multiple_times: attributes
                .flag("canBeAppliedManuallyMultipleTimes"),
            purchased_product_group_id: row.purchased_product_group_id.unwrap_or_default(),
            purchased_brand_id: attributes.int("purchasedBrandID"),
            purchased_amount: row.purchased_amount.unwrap_or_default(),
            purchase_total_value: row.purchase_total_value.unwrap_or_default(),
            reward_points: row.reward_points.unwrap_or_default(),
            percentage_off_entire_purchase: row.percentage_off_all_items.unwrap_or_default(),
            sum_off_entire_purchase: row.sum_off_entire_purchase.unwrap_or_default(),
            special_price: row.special_price.unwrap_or_default(),
            added: row.added.as_second(),
            added_by: row.added_by.clone(),
            changed: row.changed.map(Timestamp::as_second).unwrap_or_default(),
            changed_by: row.changed_by.clone().unwrap_or_default(),
        }
    }
}

struct Attributes<'a> {
    values: FxHashMap<&'static str, &'a AttributeValue>,
}

impl<'a> Attributes<'a> {
    fn new(stored: &'a StoredCampaign) -> Self {
        Self {
            values: stored
                .attributes
                .iter()
                .map(|attribute| (attribute.name, &attribute.value))
                .collect(),
        }
    }

    fn int(&self, name: &str) -> u32 {
        match self.values.get(name) {
            Some(AttributeValue::Int(value)) => u32::try_from(*value).unwrap_or_default(),
            _ => 0,
        }
    }

    fn flag(&self, name: &str) -> u8 {
        u8::from(self.int(name) != 0)
    }

    fn text(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(AttributeValue::Text(value)) => value.clone(),
            _ => String::new(),
        }
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::{campaigns::CampaignType, storage::AuditStamp};

    use super::*;

    fn full_record() -> CampaignRecord {
        CampaignRecord {
            campaign_id: Some(12),
            name: Some("Spring".to_string()),
            campaign_type: Some(CampaignType::Manual),
            store_region_ids: smallvec![4, 5],
            purchased_products: vec!["milk".to_string(), "cookie".to_string()],
            purchased_amount: Some(2),
            awarded_products: vec!["cake".to_string()],
            percentage_off: Some(Decimal::new(15, 0)),
            purchased_product_subsidies: vec!["1".to_string(), "2".to_string()],
            percentage_off_matching_items: Some(5),
            requires_manager_override: true,
            redemption_limit: Some(3),
            max_items_with_special_unit_price: Some(4),
            required_coupon_code: Some("SPRING".to_string()),
            ..CampaignRecord::default()
        }
    }

    #[test]
    fn stored_campaign_reads_back_like_the_record() {
        let record = full_record();
        let stamp = AuditStamp::new(Timestamp::constant(1_700_000_000, 0), "admin");

        let stored = StoredCampaign::from_record(&record, stamp);
        let output = CampaignOutput::from(&stored);

        assert_eq!(
            output,
            CampaignOutput {
                added: 1_700_000_000,
                added_by: "admin".to_string(),
                ..CampaignOutput::from_record(&record)
            }
        );
    }

    #[test]
    fn serializes_wire_names() -> TestResult {
        let output = CampaignOutput::from_record(&full_record());

        let json = serde_json::to_value(&output)?;
        let field = |name: &str| json.get(name).cloned().unwrap_or_default();

        assert_eq!(field("campaignID"), json!(12));
        assert_eq!(field("type"), json!("manual"));
        assert_eq!(field("storeRegionIDs"), json!("4,5"));
        assert_eq!(field("purchasedProducts"), json!("milk,cookie"));
        assert_eq!(field("requiresManagerOverride"), json!(1));
        assert_eq!(field("customerCanUseOnlyOnce"), json!(0));
        assert_eq!(field("addedby"), json!(""));

        Ok(())
    }
}
