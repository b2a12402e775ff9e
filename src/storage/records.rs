//! Storage Records
//!
//! A campaign is persisted as one core row plus typed attribute rows for
//! everything the core table has no column for.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::campaigns::CampaignRecord;

/// Who wrote a row, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    /// Write time.
    pub at: Timestamp,

    /// Short name of the writing user.
    pub by: String,
}

impl AuditStamp {
    /// Stamp for `by` at `at`.
    pub fn new(at: Timestamp, by: impl Into<String>) -> Self {
        Self { at, by: by.into() }
    }
}

/// Core campaign row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[expect(missing_docs, reason = "fields are table columns")]
pub struct CampaignRow {
    pub id: Option<u32>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub name: String,
    pub warehouse_id: Option<u32>,
    pub purchased_amount: Option<u32>,
    #[serde(rename = "purchased_prodgroup_id")]
    pub purchased_product_group_id: Option<u32>,
    pub purchase_total_value: Option<Decimal>,
    pub award_lowest_priced_item: bool,
    pub special_price: Option<Decimal>,
    pub percentage_off: Option<Decimal>,
    pub sum_off: Option<Decimal>,
    #[serde(rename = "awarded_prodgroup_id")]
    pub awarded_product_group_id: Option<u32>,
    pub percentage_off_all_items: Option<u32>,
    pub sum_off_entire_purchase: Option<Decimal>,
    #[serde(rename = "rewardpoints")]
    pub reward_points: Option<u32>,
    pub percentage_off_any_one_line: Option<u32>,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub added: Timestamp,
    #[serde(rename = "addedby")]
    pub added_by: String,
    pub changed: Option<Timestamp>,
    #[serde(rename = "changedby")]
    pub changed_by: Option<String>,
}

/// Typed attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AttributeValue {
    /// Free text, including comma-joined lists.
    Text(String),

    /// Integer, including 0/1 flags.
    Int(i64),
}

/// Named attribute attached to a campaign row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignAttribute {
    /// Wire name of the record field.
    pub name: &'static str,

    /// Stored value.
    #[serde(flatten)]
    pub value: AttributeValue,
}

/// A campaign split into its storage shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredCampaign {
    /// Core row.
    pub row: CampaignRow,

    /// Attribute rows, in field order.
    pub attributes: Vec<CampaignAttribute>,
}

impl StoredCampaign {
    /// Split a record into a row and attributes.
    ///
    /// Attributes are only written for fields that are set.
    pub fn from_record(record: &CampaignRecord, stamp: AuditStamp) -> Self {
        let row = CampaignRow {
            id: record.campaign_id,
            start_date: record.start_date,
            end_date: record.end_date,
            name: record.name.clone().unwrap_or_default(),
            warehouse_id: record.warehouse_id,
            purchased_amount: record.purchased_amount,
            purchased_product_group_id: record.purchased_product_group_id,
            purchase_total_value: record.purchase_total_value,
            award_lowest_priced_item: record.lowest_price_item_is_awarded,
            special_price: record.special_price,
            percentage_off: record.percentage_off,
            sum_off: record.sum_off,
            awarded_product_group_id: record.awarded_product_group_id,
            percentage_off_all_items: record.percentage_off_entire_purchase,
            sum_off_entire_purchase: record.sum_off_entire_purchase,
            reward_points: record.reward_points,
            percentage_off_any_one_line: record.percentage_off_matching_items,
            campaign_type: record
                .campaign_type
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            added: stamp.at,
            added_by: stamp.by,
            changed: None,
            changed_by: None,
        };

        let mut attributes = AttributeWriter::default();

        attributes
            .int("awardedBrandID", record.awarded_brand_id)
            .int("discountForOneLine", record.discount_for_one_line)
            .text("requiredCouponID", record.required_coupon_id.as_deref())
            .text("requiredCouponCode", record.required_coupon_code.as_deref())
            .list("purchasedProducts", &record.purchased_products)
            .list("awardedProducts", &record.awarded_products)
            .list("excludedProducts", &record.excluded_products)
            .list(
                "percentageOffExcludedProducts",
                &record.percentage_off_excluded_products,
            )
            .list(
                "percentageOffIncludedProducts",
                &record.percentage_off_included_products,
            )
            .list("sumOffExcludedProducts", &record.sum_off_excluded_products)
            .list("sumOffIncludedProducts", &record.sum_off_included_products)
            .int("awardedAmount", record.awarded_amount)
            .int(
                "purchasedProductCategoryID",
                record.purchased_product_category_id,
            )
            .int(
                "awardedProductCategoryID",
                record.awarded_product_category_id,
            )
            .int("maximumPointsDiscount", record.maximum_points_discount)
            .flag("customerCanUseOnlyOnce", record.customer_can_use_only_once)
            .int("priceAtLeast", record.price_at_least)
            .int("priceAtMost", record.price_at_most)
            .flag("requiresManagerOverride", record.requires_manager_override)
            .int("sumOffMatchingItems", record.sum_off_matching_items)
            .flag(
                "excludeDiscountedFromPercentageOffEntirePurchase",
                record.exclude_discounted_from_percentage_off_entire_purchase,
            )
            .flag(
                "excludePromotionItemsFromPercentageOffEntirePurchase",
                record.exclude_promotion_items_from_percentage_off_entire_purchase,
            )
            .int("reasonID", record.reason_id)
            .int("specialUnitPrice", record.special_unit_price)
            .int(
                "maxItemsWithSpecialUnitPrice",
                record.max_items_with_special_unit_price,
            )
            .int("redemptionLimit", record.redemption_limit)
            .text("storeGroup", record.store_group.as_deref())
            .flag(
                "canBeAppliedManuallyMultipleTimes",
                record.can_be_applied_manually_multiple_times,
            )
            .int("purchasedBrandID", record.purchased_brand_id)
            .list(
                "purchasedProductSubsidies",
                &record.purchased_product_subsidies,
            )
            .list("awardedProductSubsidies", &record.awarded_product_subsidies)
            .ids("storeRegionIDs", &record.store_region_ids)
            .ids("customerGroupIDs", &record.customer_group_ids);

        Self {
            row,
            attributes: attributes.finish(),
        }
    }

    /// Look up an attribute by wire name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| &attribute.value)
    }
}

#[derive(Debug, Default)]
struct AttributeWriter {
    attributes: Vec<CampaignAttribute>,
}

impl AttributeWriter {
    fn push(&mut self, name: &'static str, value: AttributeValue) -> &mut Self {
        self.attributes.push(CampaignAttribute { name, value });
        self
    }

    fn int(&mut self, name: &'static str, value: Option<u32>) -> &mut Self {
        match value {
            Some(value) if value != 0 => self.push(name, AttributeValue::Int(i64::from(value))),
            _ => self,
        }
    }

    fn flag(&mut self, name: &'static str, value: bool) -> &mut Self {
        if value {
            self.push(name, AttributeValue::Int(1))
        } else {
            self
        }
    }

    fn text(&mut self, name: &'static str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) if !value.is_empty() => {
                self.push(name, AttributeValue::Text(value.to_string()))
            }
            _ => self,
        }
    }

    fn list(&mut self, name: &'static str, values: &[String]) -> &mut Self {
        if values.is_empty() {
            return self;
        }

        self.push(name, AttributeValue::Text(values.join(",")))
    }

    fn ids(&mut self, name: &'static str, values: &[u32]) -> &mut Self {
        if values.is_empty() {
            return self;
        }

        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.push(name, AttributeValue::Text(joined))
    }

    fn finish(&mut self) -> Vec<CampaignAttribute> {
        std::mem::take(&mut self.attributes)
    }
}
