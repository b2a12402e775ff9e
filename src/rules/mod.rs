//! Campaign Rules
//!
//! The ordered catalogue of business rules a campaign record must satisfy.
//! Evaluation order is part of the contract: when several rules are broken,
//! the one listed first in [`Rule::ALL`] is the one reported.

use std::fmt;

use jiff::Timestamp;

use crate::{campaigns::CampaignRecord, tenants::TenantFeatures};

mod awards;
mod catalogue;
mod limits;
mod purchases;
mod schedule;
mod targeting;
mod violation;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalogue::write_catalogue;
pub use violation::Violation;

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// The candidate record.
    pub record: &'a CampaignRecord,

    /// Targeting features enabled for the tenant.
    pub features: TenantFeatures,

    /// Start dates at or before this instant are rejected.
    pub earliest_start: Timestamp,
}

/// A single campaign rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Type is `auto`, `manual` or `coupon`.
    CampaignType,

    /// Region targeting is enabled for the tenant when regions are set.
    RegionTargeting,

    /// Customer-group targeting is enabled for the tenant when groups are set.
    CustomerGroupTargeting,

    /// Start date is set and not further in the past than the grace window.
    StartDate,

    /// End date is set and strictly after the start date.
    EndDate,

    /// Manager override is only allowed on manual promotions.
    ManagerOverride,

    /// At most one of store group, warehouse and region list.
    SingleScope,

    /// A purchase requirement needs a purchased amount.
    PurchaseAmount,

    /// At most one purchase requirement.
    SinglePurchaseOption,

    /// An award needs a sum or percentage discount.
    AwardDiscount,

    /// At most one award definition.
    SingleAwardOption,

    /// Percentage product lists come in pairs with an entire-purchase percentage.
    PercentageProductLists,

    /// Sum product lists come in pairs with an entire-purchase sum.
    SumProductLists,

    /// Price bounds need a purchased amount.
    PriceBounds,

    /// Points discounts need reward points and an entire-purchase sum.
    PointsDiscount,

    /// Awarding the lowest priced item needs a sum or percentage discount.
    LowestPriceAward,

    /// A special price needs a purchased amount.
    SpecialPrice,

    /// Entire-purchase discounts need a purchased amount.
    EntirePurchaseDiscount,

    /// Excluding discounted items needs an entire-purchase percentage.
    ExcludeDiscounted,

    /// Excluding promotion items needs an entire-purchase percentage.
    ExcludePromotionItems,

    /// Reason code is valid for promotions.
    ///
    /// Not implemented: reason codes are not checked and the rule always
    /// holds. It keeps its slot so codes and ordering stay stable.
    ReasonCode,

    /// Purchased-product subsidies need purchased products and a matching-items discount.
    PurchasedSubsidies,

    /// One purchased-product subsidy per purchased product.
    PurchasedSubsidyLength,

    /// One awarded-product subsidy per awarded product.
    AwardedSubsidyLength,

    /// A special unit price needs a purchased amount.
    SpecialUnitPrice,

    /// Special-unit-price item cap is at least the purchased amount.
    MaxSpecialUnitItems,

    /// A purchased amount needs a purchase requirement.
    AmountRequirement,

    /// Redemption limits exclude entire-purchase percentages and reward points.
    RedemptionLimitConflict,

    /// Redemption limits need a special-unit-price item cap.
    RedemptionLimitMaxItems,
}

impl Rule {
    /// Every rule, in evaluation order.
    pub const ALL: [Rule; 29] = [
        Rule::CampaignType,
        Rule::RegionTargeting,
        Rule::CustomerGroupTargeting,
        Rule::StartDate,
        Rule::EndDate,
        Rule::ManagerOverride,
        Rule::SingleScope,
        Rule::PurchaseAmount,
        Rule::SinglePurchaseOption,
        Rule::AwardDiscount,
        Rule::SingleAwardOption,
        Rule::PercentageProductLists,
        Rule::SumProductLists,
        Rule::PriceBounds,
        Rule::PointsDiscount,
        Rule::LowestPriceAward,
        Rule::SpecialPrice,
        Rule::EntirePurchaseDiscount,
        Rule::ExcludeDiscounted,
        Rule::ExcludePromotionItems,
        Rule::ReasonCode,
        Rule::PurchasedSubsidies,
        Rule::PurchasedSubsidyLength,
        Rule::AwardedSubsidyLength,
        Rule::SpecialUnitPrice,
        Rule::MaxSpecialUnitItems,
        Rule::AmountRequirement,
        Rule::RedemptionLimitConflict,
        Rule::RedemptionLimitMaxItems,
    ];

    /// One-based position in the evaluation order.
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|rule| *rule == self)
            .map_or(0, |index| index + 1)
    }

    /// Whether the rule holds in the given context.
    pub fn holds(self, ctx: &RuleContext<'_>) -> bool {
        let record = ctx.record;

        match self {
            Rule::CampaignType => schedule::type_is_recognised(record),
            Rule::RegionTargeting => targeting::regions_enabled(record, ctx.features),
            Rule::CustomerGroupTargeting => {
                targeting::customer_groups_enabled(record, ctx.features)
            }
            Rule::StartDate => schedule::start_date_is_current(record, ctx.earliest_start),
            Rule::EndDate => schedule::end_date_follows_start(record),
            Rule::ManagerOverride => schedule::manager_override_is_attended(record),
            Rule::SingleScope => targeting::single_scope(record),
            Rule::PurchaseAmount => purchases::requirement_has_amount(record),
            Rule::SinglePurchaseOption => purchases::single_requirement(record),
            Rule::AwardDiscount => awards::award_has_discount(record),
            Rule::SingleAwardOption => awards::single_award(record),
            Rule::PercentageProductLists => awards::percentage_lists_paired(record),
            Rule::SumProductLists => awards::sum_lists_paired(record),
            Rule::PriceBounds => purchases::price_bounds_have_amount(record),
            Rule::PointsDiscount => awards::points_discount_has_entire_sum(record),
            Rule::LowestPriceAward => awards::lowest_price_award_has_discount(record),
            Rule::SpecialPrice => purchases::special_price_has_amount(record),
            Rule::EntirePurchaseDiscount => purchases::entire_discount_has_amount(record),
            Rule::ExcludeDiscounted => awards::exclude_discounted_has_entire_percentage(record),
            Rule::ExcludePromotionItems => {
                awards::exclude_promotion_items_has_entire_percentage(record)
            }
            Rule::ReasonCode => limits::reason_code_is_valid(record),
            Rule::PurchasedSubsidies => awards::purchased_subsidies_have_matching_discount(record),
            Rule::PurchasedSubsidyLength => awards::purchased_subsidies_match_products(record),
            Rule::AwardedSubsidyLength => awards::awarded_subsidies_match_products(record),
            Rule::SpecialUnitPrice => purchases::special_unit_price_has_amount(record),
            Rule::MaxSpecialUnitItems => purchases::max_special_unit_items_cover_amount(record),
            Rule::AmountRequirement => purchases::amount_has_requirement(record),
            Rule::RedemptionLimitConflict => limits::redemption_limit_is_compatible(record),
            Rule::RedemptionLimitMaxItems => limits::redemption_limit_has_max_items(record),
        }
    }

    /// Stable error code reported when the rule is violated.
    pub const fn code(self) -> &'static str {
        match self {
            Rule::CampaignType => "type-invalid",
            Rule::RegionTargeting => "region-targeting-disabled",
            Rule::CustomerGroupTargeting => "group-targeting-disabled",
            Rule::StartDate => "start-date-invalid",
            Rule::EndDate => "end-date-invalid",
            Rule::ManagerOverride => "manager-override-conflict",
            Rule::SingleScope => "multiple-scope-settings",
            Rule::PurchaseAmount => "purchase-requirement-missing-amount",
            Rule::SinglePurchaseOption => "multiple-purchase-options",
            Rule::AwardDiscount => "award-missing-discount",
            Rule::SingleAwardOption => "multiple-award-options",
            Rule::PercentageProductLists => "percentage-lists-without-entire-discount",
            Rule::SumProductLists => "sum-lists-without-entire-discount",
            Rule::PriceBounds => "price-bound-without-amount",
            Rule::PointsDiscount => "points-discount-requires-entire-sum",
            Rule::LowestPriceAward => "lowest-price-award-missing-discount",
            Rule::SpecialPrice => "special-price-without-amount",
            Rule::EntirePurchaseDiscount => "entire-discount-without-amount",
            Rule::ExcludeDiscounted => "exclude-discounted-without-entire-discount",
            Rule::ExcludePromotionItems => "exclude-promotion-without-entire-discount",
            Rule::ReasonCode => "reason-id-invalid",
            Rule::PurchasedSubsidies => "subsidies-without-matching-discount",
            Rule::PurchasedSubsidyLength => "subsidy-length-mismatch-purchased",
            Rule::AwardedSubsidyLength => "subsidy-length-mismatch-awarded",
            Rule::SpecialUnitPrice => "special-unit-price-without-amount",
            Rule::MaxSpecialUnitItems => "max-items-below-purchased-amount",
            Rule::AmountRequirement => "amount-without-purchase-requirement",
            Rule::RedemptionLimitConflict => "redemption-limit-conflict",
            Rule::RedemptionLimitMaxItems => "redemption-limit-requires-max-items",
        }
    }

    /// Numeric error code of the public promotion API.
    pub const fn legacy_code(self) -> u16 {
        match self {
            Rule::CampaignType | Rule::StartDate | Rule::EndDate => 1014,
            Rule::RegionTargeting | Rule::CustomerGroupTargeting => 1028,
            Rule::ManagerOverride => 1076,
            Rule::SingleScope => 1110,
            Rule::PurchaseAmount => 1111,
            Rule::SinglePurchaseOption => 1112,
            Rule::AwardDiscount => 1113,
            Rule::SingleAwardOption => 1114,
            Rule::PercentageProductLists => 1115,
            Rule::SumProductLists => 1116,
            Rule::PriceBounds => 1117,
            Rule::PointsDiscount => 1118,
            Rule::LowestPriceAward => 1119,
            Rule::SpecialPrice => 1122,
            Rule::EntirePurchaseDiscount => 1123,
            Rule::ExcludeDiscounted => 1129,
            Rule::ExcludePromotionItems => 1182,
            Rule::ReasonCode => 1131,
            Rule::PurchasedSubsidies => 1132,
            Rule::PurchasedSubsidyLength => 1133,
            Rule::AwardedSubsidyLength => 1134,
            Rule::SpecialUnitPrice => 1139,
            Rule::MaxSpecialUnitItems => 1140,
            Rule::AmountRequirement => 1141,
            Rule::RedemptionLimitConflict => 1144,
            Rule::RedemptionLimitMaxItems => 1145,
        }
    }

    /// Wire name of the offending field, when a single field is to blame.
    pub const fn field(self) -> Option<&'static str> {
        match self {
            Rule::CampaignType => Some("type"),
            Rule::RegionTargeting => Some("storeRegionIDs"),
            Rule::CustomerGroupTargeting => Some("customerGroupIDs"),
            Rule::StartDate => Some("startDate"),
            Rule::EndDate => Some("endDate"),
            Rule::ManagerOverride => Some("requiresManagerOverride"),
            Rule::SingleScope
            | Rule::SinglePurchaseOption
            | Rule::AwardDiscount
            | Rule::SingleAwardOption => None,
            Rule::PurchaseAmount
            | Rule::PriceBounds
            | Rule::SpecialPrice
            | Rule::EntirePurchaseDiscount
            | Rule::SpecialUnitPrice
            | Rule::AmountRequirement => Some("purchasedAmount"),
            Rule::PercentageProductLists => Some("percentageOffEntirePurchase"),
            Rule::SumProductLists | Rule::PointsDiscount => Some("sumOffEntirePurchase"),
            Rule::LowestPriceAward => Some("lowestPriceItemIsAwarded"),
            Rule::ExcludeDiscounted => Some("excludeDiscountedFromPercentageOffEntirePurchase"),
            Rule::ExcludePromotionItems => {
                Some("excludePromotionItemsFromPercentageOffEntirePurchase")
            }
            Rule::ReasonCode => Some("reasonID"),
            Rule::PurchasedSubsidies | Rule::PurchasedSubsidyLength => {
                Some("purchasedProductSubsidies")
            }
            Rule::AwardedSubsidyLength => Some("awardedProductSubsidies"),
            Rule::MaxSpecialUnitItems => Some("maxItemsWithSpecialUnitPrice"),
            Rule::RedemptionLimitConflict | Rule::RedemptionLimitMaxItems => {
                Some("redemptionLimit")
            }
        }
    }

    /// Human-readable statement of what the rule requires.
    pub const fn description(self) -> &'static str {
        match self {
            Rule::CampaignType => "type is auto, manual or coupon",
            Rule::RegionTargeting => "store regions require the store_regions feature",
            Rule::CustomerGroupTargeting => "customer groups require the promotion_regions feature",
            Rule::StartDate => "start date is set and not in the past",
            Rule::EndDate => "end date is set and after the start date",
            Rule::ManagerOverride => "manager override only on manual promotions",
            Rule::SingleScope => "at most one of storeGroup, warehouseID, storeRegionIDs",
            Rule::PurchaseAmount => "purchase requirement needs purchasedAmount",
            Rule::SinglePurchaseOption => "at most one purchase requirement",
            Rule::AwardDiscount => "award needs sumOFF or percentageOFF",
            Rule::SingleAwardOption => "at most one award definition",
            Rule::PercentageProductLists => {
                "percentage product lists in pairs with percentageOffEntirePurchase"
            }
            Rule::SumProductLists => "sum product lists in pairs with sumOffEntirePurchase",
            Rule::PriceBounds => "priceAtLeast/priceAtMost need purchasedAmount",
            Rule::PointsDiscount => {
                "maximumPointsDiscount needs rewardPoints and sumOffEntirePurchase"
            }
            Rule::LowestPriceAward => "lowest priced item award needs sumOFF or percentageOFF",
            Rule::SpecialPrice => "specialPrice needs purchasedAmount",
            Rule::EntirePurchaseDiscount => "entire purchase discounts need purchasedAmount",
            Rule::ExcludeDiscounted => "excluding discounted items needs percentageOffEntirePurchase",
            Rule::ExcludePromotionItems => {
                "excluding promotion items needs percentageOffEntirePurchase"
            }
            Rule::ReasonCode => "reason code is a promotion reason (not checked)",
            Rule::PurchasedSubsidies => {
                "subsidies need purchasedProducts and a matching items discount"
            }
            Rule::PurchasedSubsidyLength => "one subsidy per purchased product",
            Rule::AwardedSubsidyLength => "one subsidy per awarded product",
            Rule::SpecialUnitPrice => "specialUnitPrice needs purchasedAmount",
            Rule::MaxSpecialUnitItems => "maxItemsWithSpecialUnitPrice >= purchasedAmount",
            Rule::AmountRequirement => "purchasedAmount needs a purchase requirement",
            Rule::RedemptionLimitConflict => {
                "redemptionLimit excludes percentageOffEntirePurchase and rewardPoints"
            }
            Rule::RedemptionLimitMaxItems => "redemptionLimit needs maxItemsWithSpecialUnitPrice",
        }
    }

    /// Whether the rule is a placeholder that never fails.
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Rule::ReasonCode)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Count how many of the given options are set.
pub(crate) fn count_set(options: &[bool]) -> usize {
    options.iter().filter(|set| **set).count()
}
