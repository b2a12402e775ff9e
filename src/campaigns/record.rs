//! Campaign Record

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::campaigns::CampaignType;

/// Candidate promotion configuration.
///
/// Scalar fields are optional so that an explicit zero can be told apart from
/// an omitted value; list fields are empty when omitted. Attribute names on
/// the wire follow the public API (`campaignID`, `percentageOFF`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[expect(
    clippy::struct_excessive_bools,
    reason = "each flag is an independent promotion setting"
)]
pub struct CampaignRecord {
    /// Existing campaign identifier, absent on create.
    #[serde(rename = "campaignID")]
    pub campaign_id: Option<u32>,

    /// Display name.
    pub name: Option<String>,

    /// First moment the promotion is active.
    pub start_date: Option<Timestamp>,

    /// Moment the promotion stops being active.
    pub end_date: Option<Timestamp>,

    /// How the promotion is applied.
    #[serde(rename = "type")]
    pub campaign_type: Option<CampaignType>,

    /// Restrict the promotion to a single store.
    #[serde(rename = "warehouseID")]
    pub warehouse_id: Option<u32>,

    /// Restrict the promotion to a named store group.
    pub store_group: Option<String>,

    /// Restrict the promotion to a set of store regions.
    #[serde(rename = "storeRegionIDs")]
    pub store_region_ids: SmallVec<[u32; 4]>,

    /// Restrict the promotion to customers in these groups.
    #[serde(rename = "customerGroupIDs")]
    pub customer_group_ids: SmallVec<[u32; 4]>,

    /// Purchase requirement: any product from this product group.
    #[serde(rename = "purchasedProductGroupID")]
    pub purchased_product_group_id: Option<u32>,

    /// Purchase requirement: any product from this category.
    #[serde(rename = "purchasedProductCategoryID")]
    pub purchased_product_category_id: Option<u32>,

    /// Purchase requirement: any product of this brand.
    #[serde(rename = "purchasedBrandID")]
    pub purchased_brand_id: Option<u32>,

    /// Purchase requirement: any of these products.
    pub purchased_products: Vec<String>,

    /// Number of qualifying items that must be bought.
    pub purchased_amount: Option<u32>,

    /// Minimum value of the whole purchase.
    pub purchase_total_value: Option<Decimal>,

    /// Reward points the customer must redeem.
    pub reward_points: Option<u32>,

    /// Award: items from this product group are discounted.
    #[serde(rename = "awardedProductGroupID")]
    pub awarded_product_group_id: Option<u32>,

    /// Award: items from this category are discounted.
    #[serde(rename = "awardedProductCategoryID")]
    pub awarded_product_category_id: Option<u32>,

    /// Award: items of this brand are discounted.
    #[serde(rename = "awardedBrandID")]
    pub awarded_brand_id: Option<u32>,

    /// Award: these products are discounted.
    pub awarded_products: Vec<String>,

    /// Award: how many items receive the discount.
    pub awarded_amount: Option<u32>,

    /// Award the discount to the lowest priced qualifying item.
    pub lowest_price_item_is_awarded: bool,

    /// Percentage taken off awarded items.
    #[serde(rename = "percentageOFF")]
    pub percentage_off: Option<Decimal>,

    /// Amount taken off awarded items.
    #[serde(rename = "sumOFF")]
    pub sum_off: Option<Decimal>,

    /// Limit the award to a single sale line.
    pub discount_for_one_line: Option<u32>,

    /// Percentage taken off the entire purchase.
    pub percentage_off_entire_purchase: Option<u32>,

    /// Amount taken off the entire purchase.
    pub sum_off_entire_purchase: Option<Decimal>,

    /// Percentage taken off the items matching the purchase requirement.
    pub percentage_off_matching_items: Option<u32>,

    /// Amount taken off the items matching the purchase requirement.
    pub sum_off_matching_items: Option<u32>,

    /// Fixed price for the qualifying items.
    pub special_price: Option<Decimal>,

    /// Fixed unit price for the qualifying items.
    pub special_unit_price: Option<u32>,

    /// Upper bound of items sold at `special_unit_price`.
    pub max_items_with_special_unit_price: Option<u32>,

    /// Coupon that activates the promotion.
    #[serde(rename = "requiredCouponID")]
    pub required_coupon_id: Option<String>,

    /// Coupon code that activates the promotion.
    pub required_coupon_code: Option<String>,

    /// Products never discounted by this promotion.
    pub excluded_products: Vec<String>,

    /// Products excluded from the entire-purchase percentage discount.
    pub percentage_off_excluded_products: Vec<String>,

    /// Products included in the entire-purchase percentage discount.
    pub percentage_off_included_products: Vec<String>,

    /// Products excluded from the entire-purchase sum discount.
    pub sum_off_excluded_products: Vec<String>,

    /// Products included in the entire-purchase sum discount.
    pub sum_off_included_products: Vec<String>,

    /// Subsidy amount per purchased product, positionally matched.
    pub purchased_product_subsidies: Vec<String>,

    /// Subsidy amount per awarded product, positionally matched.
    pub awarded_product_subsidies: Vec<String>,

    /// Qualifying items must cost at least this much.
    pub price_at_least: Option<u32>,

    /// Qualifying items must cost at most this much.
    pub price_at_most: Option<u32>,

    /// Cap on the discount obtainable with reward points.
    pub maximum_points_discount: Option<u32>,

    /// Maximum number of times the promotion applies to one sale.
    pub redemption_limit: Option<u32>,

    /// Each customer may use the promotion once.
    pub customer_can_use_only_once: bool,

    /// The cashier may apply the promotion more than once per sale.
    pub can_be_applied_manually_multiple_times: bool,

    /// Applying the promotion needs a store manager's approval.
    pub requires_manager_override: bool,

    /// Skip already discounted items in the entire-purchase percentage.
    pub exclude_discounted_from_percentage_off_entire_purchase: bool,

    /// Skip items of other promotions in the entire-purchase percentage.
    pub exclude_promotion_items_from_percentage_off_entire_purchase: bool,

    /// Reason code attached to the promotion.
    #[serde(rename = "reasonID")]
    pub reason_id: Option<u32>,
}
