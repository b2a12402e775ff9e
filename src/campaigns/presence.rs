//! Field Presence
//!
//! A field counts as set when it was supplied with a non-zero, non-empty
//! value. Explicit zeroes are kept on the record but read as unset here.

use jiff::Timestamp;
use num_traits::Zero;
use rust_decimal::Decimal;
use smallvec::{Array, SmallVec};

/// Whether a record field carries a value.
pub(crate) trait Presence {
    /// Returns `true` when the field is set.
    fn is_set(&self) -> bool;
}

/// Strictly positive numeric fields.
pub(crate) trait Magnitude {
    /// Returns `true` when the field is set and greater than zero.
    fn is_positive(&self) -> bool;
}

fn non_zero<T: Zero>(value: Option<&T>) -> bool {
    value.is_some_and(|value| !value.is_zero())
}

impl Presence for Option<u32> {
    fn is_set(&self) -> bool {
        non_zero(self.as_ref())
    }
}

impl Presence for Option<Decimal> {
    fn is_set(&self) -> bool {
        non_zero(self.as_ref())
    }
}

impl Presence for Option<String> {
    fn is_set(&self) -> bool {
        self.as_deref().is_some_and(|value| !value.is_empty())
    }
}

impl Presence for Option<Timestamp> {
    fn is_set(&self) -> bool {
        self.is_some_and(|value| value != Timestamp::UNIX_EPOCH)
    }
}

impl<T> Presence for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<A: Array> Presence for SmallVec<A> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for bool {
    fn is_set(&self) -> bool {
        *self
    }
}

impl<T: Zero + PartialOrd> Magnitude for Option<T> {
    fn is_positive(&self) -> bool {
        self.as_ref().is_some_and(|value| *value > T::zero())
    }
}
