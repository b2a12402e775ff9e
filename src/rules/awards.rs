//! Award, discount and subsidy rules.

use crate::{
    campaigns::{
        CampaignRecord,
        presence::{Magnitude, Presence},
    },
    rules::count_set,
};

fn awards(record: &CampaignRecord) -> [bool; 4] {
    [
        record.awarded_product_group_id.is_set(),
        record.awarded_product_category_id.is_set(),
        record.awarded_products.is_set(),
        record.awarded_amount.is_set(),
    ]
}

fn has_item_discount(record: &CampaignRecord) -> bool {
    record.sum_off.is_positive() || record.percentage_off.is_positive()
}

pub(super) fn award_has_discount(record: &CampaignRecord) -> bool {
    count_set(&awards(record)) == 0 || has_item_discount(record)
}

pub(super) fn single_award(record: &CampaignRecord) -> bool {
    count_set(&awards(record)) <= 1
}

pub(super) fn percentage_lists_paired(record: &CampaignRecord) -> bool {
    let excluded = record.percentage_off_excluded_products.is_set();
    let included = record.percentage_off_included_products.is_set();

    !(excluded || included)
        || (excluded && included && record.percentage_off_entire_purchase.is_positive())
}

pub(super) fn sum_lists_paired(record: &CampaignRecord) -> bool {
    let excluded = record.sum_off_excluded_products.is_set();
    let included = record.sum_off_included_products.is_set();

    !(excluded || included)
        || (excluded && included && record.sum_off_entire_purchase.is_positive())
}

pub(super) fn points_discount_has_entire_sum(record: &CampaignRecord) -> bool {
    if !(record.maximum_points_discount.is_set() || record.reward_points.is_set()) {
        return true;
    }

    record.maximum_points_discount.is_positive()
        && record.reward_points.is_positive()
        && record.sum_off_entire_purchase.is_positive()
}

pub(super) fn lowest_price_award_has_discount(record: &CampaignRecord) -> bool {
    !record.lowest_price_item_is_awarded || has_item_discount(record)
}

pub(super) fn exclude_discounted_has_entire_percentage(record: &CampaignRecord) -> bool {
    !record.exclude_discounted_from_percentage_off_entire_purchase
        || record.percentage_off_entire_purchase.is_positive()
}

pub(super) fn exclude_promotion_items_has_entire_percentage(record: &CampaignRecord) -> bool {
    !record.exclude_promotion_items_from_percentage_off_entire_purchase
        || record.percentage_off_entire_purchase.is_positive()
}

pub(super) fn purchased_subsidies_have_matching_discount(record: &CampaignRecord) -> bool {
    if !record.purchased_product_subsidies.is_set() {
        return true;
    }

    record.purchased_products.is_set()
        && (record.percentage_off_matching_items.is_positive()
            || record.sum_off_matching_items.is_positive())
}

pub(super) fn purchased_subsidies_match_products(record: &CampaignRecord) -> bool {
    !record.purchased_product_subsidies.is_set()
        || record.purchased_product_subsidies.len() == record.purchased_products.len()
}

pub(super) fn awarded_subsidies_match_products(record: &CampaignRecord) -> bool {
    !record.awarded_product_subsidies.is_set()
        || record.awarded_product_subsidies.len() == record.awarded_products.len()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::rules::test_support::minimal_record;

    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn award_needs_item_discount() {
        let mut record = minimal_record();
        record.awarded_amount = Some(1);
        assert!(!award_has_discount(&record));

        record.percentage_off = Some(Decimal::new(10, 0));
        assert!(award_has_discount(&record));

        record.percentage_off = None;
        record.sum_off = Some(Decimal::new(150, 2));
        assert!(award_has_discount(&record));
    }

    #[test]
    fn zero_discount_does_not_count() {
        let mut record = minimal_record();
        record.awarded_products = strings(&["cake"]);
        record.sum_off = Some(Decimal::ZERO);

        assert!(!award_has_discount(&record));
    }

    #[test]
    fn awards_are_mutually_exclusive() {
        let mut record = minimal_record();
        record.awarded_product_group_id = Some(3);
        assert!(single_award(&record));

        record.awarded_amount = Some(1);
        assert!(!single_award(&record));
    }

    #[test]
    fn percentage_lists_need_both_lists_and_discount() {
        let mut record = minimal_record();
        assert!(percentage_lists_paired(&record));

        record.percentage_off_excluded_products = strings(&["tea"]);
        record.percentage_off_entire_purchase = Some(10);
        assert!(!percentage_lists_paired(&record));

        record.percentage_off_included_products = strings(&["coffee"]);
        assert!(percentage_lists_paired(&record));

        record.percentage_off_entire_purchase = None;
        assert!(!percentage_lists_paired(&record));
    }

    #[test]
    fn sum_lists_need_both_lists_and_discount() {
        let mut record = minimal_record();
        record.sum_off_included_products = strings(&["coffee"]);
        record.sum_off_excluded_products = strings(&["tea"]);
        assert!(!sum_lists_paired(&record));

        record.sum_off_entire_purchase = Some(Decimal::new(5, 0));
        assert!(sum_lists_paired(&record));
    }

    #[test]
    fn points_discount_needs_points_and_entire_sum() {
        let mut record = minimal_record();
        record.maximum_points_discount = Some(10);
        assert!(!points_discount_has_entire_sum(&record));

        record.reward_points = Some(100);
        assert!(!points_discount_has_entire_sum(&record));

        record.sum_off_entire_purchase = Some(Decimal::new(10, 0));
        assert!(points_discount_has_entire_sum(&record));

        record.maximum_points_discount = None;
        assert!(!points_discount_has_entire_sum(&record));
    }

    #[test]
    fn lowest_price_award_needs_discount() {
        let mut record = minimal_record();
        record.lowest_price_item_is_awarded = true;
        assert!(!lowest_price_award_has_discount(&record));

        record.sum_off = Some(Decimal::ONE);
        assert!(lowest_price_award_has_discount(&record));
    }

    #[test]
    fn exclusion_flags_need_entire_percentage() {
        let mut record = minimal_record();
        record.exclude_discounted_from_percentage_off_entire_purchase = true;
        record.exclude_promotion_items_from_percentage_off_entire_purchase = true;
        assert!(!exclude_discounted_has_entire_percentage(&record));
        assert!(!exclude_promotion_items_has_entire_percentage(&record));

        record.percentage_off_entire_purchase = Some(15);
        assert!(exclude_discounted_has_entire_percentage(&record));
        assert!(exclude_promotion_items_has_entire_percentage(&record));
    }

    #[test]
    fn purchased_subsidies_need_matching_items_discount() {
        let mut record = minimal_record();
        record.purchased_product_subsidies = strings(&["1", "2"]);
        assert!(!purchased_subsidies_have_matching_discount(&record));

        record.sum_off_matching_items = Some(2);
        assert!(purchased_subsidies_have_matching_discount(&record));

        record.purchased_products.clear();
        assert!(!purchased_subsidies_have_matching_discount(&record));
    }

    #[test]
    fn subsidies_pair_with_products() {
        let mut record = minimal_record();
        record.purchased_product_subsidies = strings(&["1"]);
        assert!(!purchased_subsidies_match_products(&record));

        record.purchased_product_subsidies = strings(&["1", "2"]);
        assert!(purchased_subsidies_match_products(&record));

        record.awarded_products = strings(&["cake", "pie"]);
        record.awarded_product_subsidies = strings(&["3"]);
        assert!(!awarded_subsidies_match_products(&record));

        record.awarded_product_subsidies.clear();
        assert!(awarded_subsidies_match_products(&record));
    }
}
