//! Purchase requirement rules.

use crate::{
    campaigns::{
        CampaignRecord,
        presence::{Magnitude, Presence},
    },
    rules::count_set,
};

fn requirements(record: &CampaignRecord) -> [bool; 3] {
    [
        record.purchased_product_group_id.is_set(),
        record.purchased_product_category_id.is_set(),
        record.purchased_products.is_set(),
    ]
}

fn has_amount(record: &CampaignRecord) -> bool {
    record.purchased_amount.is_positive()
}

pub(super) fn requirement_has_amount(record: &CampaignRecord) -> bool {
    count_set(&requirements(record)) == 0 || has_amount(record)
}

pub(super) fn single_requirement(record: &CampaignRecord) -> bool {
    count_set(&requirements(record)) <= 1
}

pub(super) fn price_bounds_have_amount(record: &CampaignRecord) -> bool {
    !(record.price_at_least.is_set() || record.price_at_most.is_set()) || has_amount(record)
}

pub(super) fn special_price_has_amount(record: &CampaignRecord) -> bool {
    !record.special_price.is_set() || has_amount(record)
}

pub(super) fn entire_discount_has_amount(record: &CampaignRecord) -> bool {
    let entire_discount =
        record.sum_off_entire_purchase.is_set() || record.percentage_off_entire_purchase.is_set();

    !entire_discount || has_amount(record)
}

pub(super) fn special_unit_price_has_amount(record: &CampaignRecord) -> bool {
    !record.special_unit_price.is_set() || has_amount(record)
}

pub(super) fn max_special_unit_items_cover_amount(record: &CampaignRecord) -> bool {
    match record.max_items_with_special_unit_price {
        Some(max_items) if max_items != 0 => max_items >= record.purchased_amount.unwrap_or(0),
        _ => true,
    }
}

pub(super) fn amount_has_requirement(record: &CampaignRecord) -> bool {
    !record.purchased_amount.is_set() || count_set(&requirements(record)) > 0
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::rules::test_support::minimal_record;

    use super::*;

    #[test]
    fn every_requirement_kind_needs_an_amount() {
        let mut record = minimal_record();
        record.purchased_amount = Some(0);

        assert!(!requirement_has_amount(&record));

        record.purchased_products.clear();
        record.purchased_product_group_id = Some(1);
        assert!(!requirement_has_amount(&record));

        record.purchased_product_group_id = None;
        record.purchased_product_category_id = Some(1);
        assert!(!requirement_has_amount(&record));

        record.purchased_amount = Some(3);
        assert!(requirement_has_amount(&record));
    }

    #[test]
    fn no_requirement_needs_no_amount() {
        let mut record = minimal_record();
        record.purchased_products.clear();
        record.purchased_amount = None;

        assert!(requirement_has_amount(&record));
    }

    #[test]
    fn requirements_are_mutually_exclusive() {
        let mut record = minimal_record();
        assert!(single_requirement(&record));

        record.purchased_product_category_id = Some(1);
        assert!(!single_requirement(&record));

        record.purchased_products.clear();
        record.purchased_product_group_id = Some(1);
        assert!(!single_requirement(&record));
    }

    #[test]
    fn price_bounds_need_amount() {
        let mut record = minimal_record();
        record.price_at_most = Some(10);
        assert!(price_bounds_have_amount(&record));

        record.purchased_amount = None;
        assert!(!price_bounds_have_amount(&record));

        record.price_at_most = None;
        record.price_at_least = Some(2);
        assert!(!price_bounds_have_amount(&record));
    }

    #[test]
    fn special_prices_need_amount() {
        let mut record = minimal_record();
        record.purchased_amount = None;
        assert!(special_price_has_amount(&record));
        assert!(special_unit_price_has_amount(&record));

        record.special_price = Some(Decimal::new(999, 2));
        record.special_unit_price = Some(3);
        assert!(!special_price_has_amount(&record));
        assert!(!special_unit_price_has_amount(&record));
    }

    #[test]
    fn entire_purchase_discounts_need_amount() {
        let mut record = minimal_record();
        record.percentage_off_entire_purchase = Some(10);
        assert!(entire_discount_has_amount(&record));

        record.purchased_amount = Some(0);
        assert!(!entire_discount_has_amount(&record));

        record.percentage_off_entire_purchase = None;
        record.sum_off_entire_purchase = Some(Decimal::new(5, 0));
        assert!(!entire_discount_has_amount(&record));
    }

    #[test]
    fn max_items_bound_is_inclusive() {
        let mut record = minimal_record();
        record.purchased_amount = Some(5);

        record.max_items_with_special_unit_price = Some(5);
        assert!(max_special_unit_items_cover_amount(&record));

        record.max_items_with_special_unit_price = Some(4);
        assert!(!max_special_unit_items_cover_amount(&record));

        record.max_items_with_special_unit_price = Some(0);
        assert!(max_special_unit_items_cover_amount(&record));
    }

    #[test]
    fn amount_needs_a_requirement() {
        let mut record = minimal_record();
        record.purchased_products.clear();

        assert!(!amount_has_requirement(&record));

        record.purchased_product_category_id = Some(9);
        assert!(amount_has_requirement(&record));
    }
}
