//! Campaign Forms
//!
//! Maps urlencoded form fields onto a [`CampaignRecord`]. Field names match
//! the record's wire names; unknown fields are ignored and empty values are
//! treated as absent.

use jiff::{Timestamp, civil::Date, tz::TimeZone};
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use thiserror::Error;

use crate::campaigns::{CampaignRecord, CampaignType};

/// Form body could not be mapped onto a record.
#[derive(Debug, Error)]
pub enum FormError {
    /// The body is not valid `application/x-www-form-urlencoded` data.
    #[error("malformed form body")]
    Body(#[from] serde_urlencoded::de::Error),

    /// A field holds a value of the wrong shape.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Wire name of the field.
        field: &'static str,

        /// What was wrong with the value.
        reason: String,
    },
}

impl FormError {
    fn invalid(field: &'static str, reason: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.to_string(),
        }
    }

    /// Stable error code.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Body(_) | Self::InvalidValue { .. } => "invalid-field-value",
        }
    }

    /// Numeric error code of the public promotion API.
    pub const fn legacy_code(&self) -> u16 {
        match self {
            Self::Body(_) | Self::InvalidValue { .. } => 1014,
        }
    }

    /// Field blamed for the error, if any.
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Body(_) => None,
            Self::InvalidValue { field, .. } => Some(*field),
        }
    }
}

/// Submitted campaign form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignForm {
    fields: FxHashMap<String, String>,
}

impl CampaignForm {
    /// Parse an urlencoded body. Repeated keys keep their last value.
    ///
    /// # Errors
    ///
    /// Returns an error when the body cannot be decoded.
    pub fn parse(body: &str) -> Result<Self, FormError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body)?;

        Ok(Self::from_pairs(pairs))
    }

    /// Build a form from decoded name/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }

    /// Trimmed, non-empty value of a field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    /// Number of submitted fields, empty ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields were submitted.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Map the form onto a campaign record.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidValue`] naming the first field whose value
    /// does not parse.
    pub fn into_record(self) -> Result<CampaignRecord, FormError> {
        Ok(CampaignRecord {
            campaign_id: self.uint("campaignID")?,
            name: self.text("name"),
            start_date: self.date("startDate")?,
            end_date: self.date("endDate")?,
            campaign_type: self.get("type").map(CampaignType::from),
            warehouse_id: self.uint("warehouseID")?,
            store_group: self.text("storeGroup"),
            store_region_ids: self.uint_list("storeRegionIDs")?,
            customer_group_ids: self.uint_list("customerGroupIDs")?,
            purchased_product_group_id: self.uint("purchasedProductGroupID")?,
            purchased_product_category_id: self.uint("purchasedProductCategoryID")?,
            purchased_brand_id: self.uint("purchasedBrandID")?,
            purchased_products: self.list("purchasedProducts"),
            purchased_amount: self.uint("purchasedAmount")?,
            purchase_total_value: self.decimal("purchaseTotalValue")?,
            reward_points: self.uint("rewardPoints")?,
            awarded_product_group_id: self.uint("awardedProductGroupID")?,
            awarded_product_category_id: self.uint("awardedProductCategoryID")?,
            awarded_brand_id: self.uint("awardedBrandID")?,
            awarded_products: self.list("awardedProducts"),
            awarded_amount: self.uint("awardedAmount")?,
            lowest_price_item_is_awarded: self.flag("lowestPriceItemIsAwarded")?,
            percentage_off: self.decimal("percentageOFF")?,
            sum_off: self.decimal("sumOFF")?,
            discount_for_one_line: self.uint("discountForOneLine")?,
            percentage_off_entire_purchase: self.uint("percentageOffEntirePurchase")?,
            sum_off_entire_purchase: self.decimal("sumOffEntirePurchase")?,
            percentage_off_matching_items: self.uint("percentageOffMatchingItems")?,
            sum_off_matching_items: self.uint("sumOffMatchingItems")?,
            special_price: self.decimal("specialPrice")?,
            special_unit_price: self.uint("specialUnitPrice")?,
            max_items_with_special_unit_price: self.uint("maxItemsWithSpecialUnitPrice")?,
            required_coupon_id: self.text("requiredCouponID"),
            required_coupon_code: self.text("requiredCouponCode"),
            excluded_products: self.list("excludedProducts"),
            percentage_off_excluded_products: self.list("percentageOffExcludedProducts"),
            percentage_off_included_products: self.list("percentageOffIncludedProducts"),
            sum_off_excluded_products: self.list("sumOffExcludedProducts"),
            sum_off_included_products: self.list("sumOffIncludedProducts"),
            purchased_product_subsidies: self.list("purchasedProductSubsidies"),
            awarded_product_subsidies: self.list("awardedProductSubsidies"),
            price_at_least: self.uint("priceAtLeast")?,
            price_at_most: self.uint("priceAtMost")?,
            maximum_points_discount: self.uint("maximumPointsDiscount")?,
            redemption_limit: self.uint("redemptionLimit")?,
            customer_can_use_only_once: self.flag("customerCanUseOnlyOnce")?,
            can_be_applied_manually_multiple_times: self
                .flag("canBeAppliedManuallyMultipleTimes")?,
            requires_manager_override: self.flag("requiresManagerOverride")?,
            exclude_discounted_from_percentage_off_entire_purchase: self
                .flag("excludeDiscountedFromPercentageOffEntirePurchase")?,
            exclude_promotion_items_from_percentage_off_entire_purchase: self
                .flag("excludePromotionItemsFromPercentageOffEntirePurchase")?,
            reason_id: self.uint("reasonID")?,
        })
    }

    fn text(&self, field: &'static str) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    fn uint(&self, field: &'static str) -> Result<Option<u32>, FormError> {
        self.get(field)
            .map(|value| parse_uint(field, value))
            .transpose()
    }

    fn decimal(&self, field: &'static str) -> Result<Option<Decimal>, FormError> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };

        let decimal: Decimal = value
            .parse()
            .map_err(|error| FormError::invalid(field, error))?;

        if decimal.is_sign_negative() && !decimal.is_zero() {
            return Err(FormError::invalid(field, "must not be negative"));
        }

        Ok(Some(decimal))
    }

    fn flag(&self, field: &'static str) -> Result<bool, FormError> {
        match self.get(field) {
            None | Some("0") => Ok(false),
            Some("1") => Ok(true),
            Some(_) => Err(FormError::invalid(field, "expected 0 or 1")),
        }
    }

    fn list(&self, field: &'static str) -> Vec<String> {
        self.get(field)
            .map(|value| split_list(value).map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn uint_list(&self, field: &'static str) -> Result<SmallVec<[u32; 4]>, FormError> {
        self.get(field).map_or_else(
            || Ok(SmallVec::new()),
            |value| {
                split_list(value)
                    .map(|entry| parse_uint(field, entry))
                    .collect()
            },
        )
    }

    fn date(&self, field: &'static str) -> Result<Option<Timestamp>, FormError> {
        let Some(value) = self.get(field) else {
            return Ok(None);
        };

        if let Ok(timestamp) = value.parse::<Timestamp>() {
            return Ok(Some(timestamp));
        }

        let date: Date = value
            .parse()
            .map_err(|error| FormError::invalid(field, error))?;

        let midnight = date
            .to_zoned(TimeZone::UTC)
            .map_err(|error| FormError::invalid(field, error))?;

        Ok(Some(midnight.timestamp()))
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
}

fn parse_uint(field: &'static str, value: &str) -> Result<u32, FormError> {
    value
        .parse()
        .map_err(|error| FormError::invalid(field, error))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn maps_fields_by_wire_name() -> TestResult {
        let form = CampaignForm::parse(
            "type=manual&startDate=2030-01-01&endDate=2030-02-01T12%3A00%3A00Z\
             &storeRegionIDs=1%2C2&purchasedProducts=milk%2Ccookie&purchasedAmount=2\
             &percentageOFF=12.5&requiresManagerOverride=1&unknownField=x",
        )?;

        let record = form.into_record()?;

        assert_eq!(record.campaign_type, Some(CampaignType::Manual));
        assert_eq!(
            record.start_date,
            Some(date(2030, 1, 1).to_zoned(TimeZone::UTC)?.timestamp())
        );
        assert_eq!(record.end_date, Some("2030-02-01T12:00:00Z".parse::<Timestamp>()?));
        assert_eq!(record.store_region_ids.as_slice(), &[1, 2]);
        assert_eq!(record.purchased_products, vec!["milk", "cookie"]);
        assert_eq!(record.purchased_amount, Some(2));
        assert_eq!(record.percentage_off, Some(Decimal::new(125, 1)));
        assert!(record.requires_manager_override);

        Ok(())
    }

    #[test]
    fn empty_values_are_absent() -> TestResult {
        let record = CampaignForm::from_pairs([("warehouseID", ""), ("storeGroup", "  ")])
            .into_record()?;

        assert_eq!(record.warehouse_id, None);
        assert_eq!(record.store_group, None);

        Ok(())
    }

    #[test]
    fn explicit_zero_is_kept() -> TestResult {
        let record = CampaignForm::from_pairs([("purchasedAmount", "0")]).into_record()?;

        assert_eq!(record.purchased_amount, Some(0));

        Ok(())
    }

    #[test]
    fn rejects_negative_numbers() {
        let amount = CampaignForm::from_pairs([("purchasedAmount", "-1")]).into_record();
        let sum = CampaignForm::from_pairs([("sumOFF", "-0.5")]).into_record();

        assert!(matches!(
            amount,
            Err(FormError::InvalidValue {
                field: "purchasedAmount",
                ..
            })
        ));
        assert!(matches!(
            sum,
            Err(FormError::InvalidValue { field: "sumOFF", .. })
        ));
    }

    #[test]
    fn flags_accept_only_zero_or_one() -> TestResult {
        let off = CampaignForm::from_pairs([("customerCanUseOnlyOnce", "0")]).into_record()?;
        let bad = CampaignForm::from_pairs([("customerCanUseOnlyOnce", "yes")]).into_record();

        assert!(!off.customer_can_use_only_once);
        assert!(matches!(
            bad,
            Err(FormError::InvalidValue {
                field: "customerCanUseOnlyOnce",
                ..
            })
        ));

        Ok(())
    }

    #[test]
    fn integer_lists_reject_non_numeric_entries() -> TestResult {
        let error = CampaignForm::from_pairs([("customerGroupIDs", "1,two")])
            .into_record()
            .err()
            .ok_or("expected an error")?;

        assert_eq!(error.field(), Some("customerGroupIDs"));
        assert_eq!(error.code(), "invalid-field-value");
        assert_eq!(error.legacy_code(), 1014);

        Ok(())
    }

    #[test]
    fn rejects_unparseable_dates() {
        let result = CampaignForm::from_pairs([("startDate", "01/02/2030")]).into_record();

        assert!(matches!(
            result,
            Err(FormError::InvalidValue {
                field: "startDate",
                ..
            })
        ));
    }

    #[test]
    fn lists_skip_blank_entries() -> TestResult {
        let record =
            CampaignForm::from_pairs([("awardedProducts", "cake, ,pie,")]).into_record()?;

        assert_eq!(record.awarded_products, vec!["cake", "pie"]);

        Ok(())
    }
}
