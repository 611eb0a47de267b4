//! Estimated delivery time calculation.
//!
//! A pure mapping from delivery method to an offset applied to a reference
//! timestamp. The estimate is computed once, from the record's creation time;
//! later updates do not shift it.

use crate::model::DeliveryMethod;
use chrono::{DateTime, Duration, Utc};

/// The fixed offset a delivery method adds to its creation time.
pub fn delivery_offset(method: DeliveryMethod) -> Duration {
    match method {
        DeliveryMethod::Standard => Duration::days(5),
        DeliveryMethod::Express => Duration::days(2),
        DeliveryMethod::Overnight => Duration::days(1),
    }
}

/// Computes the estimated delivery time for `method` relative to `reference`.
pub fn estimated_delivery_time(
    method: DeliveryMethod,
    reference: DateTime<Utc>,
) -> DateTime<Utc> {
    reference + delivery_offset(method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_the_method_table() {
        assert_eq!(delivery_offset(DeliveryMethod::Standard), Duration::days(5));
        assert_eq!(delivery_offset(DeliveryMethod::Express), Duration::days(2));
        assert_eq!(
            delivery_offset(DeliveryMethod::Overnight),
            Duration::days(1)
        );
    }

    #[test]
    fn estimate_is_relative_to_the_reference_time() {
        let reference = Utc::now();
        assert_eq!(
            estimated_delivery_time(DeliveryMethod::Express, reference),
            reference + Duration::days(2)
        );
    }
}
