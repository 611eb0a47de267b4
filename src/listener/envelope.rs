//! # Order Event Wire Format
//!
//! The order service publishes events as UTF-8 JSON of the shape
//! `[[{"order_data": {...}}]]`: the payload object sits inside a nested
//! singleton array, an artifact of the upstream producer that this decoder
//! treats as the expected wire shape.
//!
//! Two generations of the payload schema are in circulation: the original
//! labels the carrier `delivery_provider`, a later producer variant sends
//! `payment_method` instead. Rather than silently aliasing one field onto the
//! other, both are modeled as explicit, named schema versions of
//! [`OrderData`], so the full set of accepted shapes is visible in one place.

use crate::delivery_actor::DeliveryError;
use crate::model::{DeliveryCreate, DeliveryMethod, DeliveryStatus};
use serde::Deserialize;

/// One entry of the outer envelope array.
#[derive(Debug, Deserialize)]
struct EnvelopeEntry {
    order_data: OrderData,
}

/// The order payload, in either of the two schema versions seen on the wire.
///
/// Version detection is structural: a payload carrying `delivery_provider`
/// decodes as `V1`, one carrying `payment_method` as `V2`. Anything carrying
/// neither fails decoding outright.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OrderData {
    /// Original schema: the carrier travels as `delivery_provider`.
    V1 {
        id: i64,
        delivery_provider: String,
        status: Option<String>,
        address: Option<String>,
        delivery_method: Option<String>,
    },
    /// Later producer variant: the carrier label travels as
    /// `payment_method`.
    V2 {
        id: i64,
        payment_method: String,
        status: Option<String>,
        address: Option<String>,
        delivery_method: Option<String>,
    },
}

impl OrderData {
    /// Converts the decoded payload into delivery creation parameters.
    ///
    /// Status strings must name one of the known statuses; an unknown status
    /// rejects the event. Unknown delivery methods fall back to standard
    /// instead of rejecting, matching the record default.
    pub fn into_delivery_create(self) -> Result<DeliveryCreate, DeliveryError> {
        let (id, provider, status, address, delivery_method) = match self {
            OrderData::V1 {
                id,
                delivery_provider,
                status,
                address,
                delivery_method,
            } => (id, delivery_provider, status, address, delivery_method),
            OrderData::V2 {
                id,
                payment_method,
                status,
                address,
                delivery_method,
            } => (id, payment_method, status, address, delivery_method),
        };

        let status = status
            .map(|s| s.parse::<DeliveryStatus>())
            .transpose()
            .map_err(DeliveryError::Validation)?;

        Ok(DeliveryCreate {
            order_id: id,
            delivery_provider: provider,
            status,
            current_location: address,
            delivery_method: delivery_method
                .as_deref()
                .map(DeliveryMethod::parse_or_default),
        })
    }
}

/// Decodes a raw message body into its order payload.
///
/// Peels the nested singleton arrays and returns the first entry's
/// `order_data`; an empty envelope at either level is a decode error.
pub fn decode(body: &[u8]) -> Result<OrderData, DeliveryError> {
    let envelope: Vec<Vec<EnvelopeEntry>> =
        serde_json::from_slice(body).map_err(|e| DeliveryError::Decode(e.to_string()))?;

    envelope
        .into_iter()
        .next()
        .and_then(|inner| inner.into_iter().next())
        .map(|entry| entry.order_data)
        .ok_or_else(|| DeliveryError::Decode("empty order event envelope".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_nested_envelope() {
        let body = br#"[[{"order_data": {"id": 7, "delivery_provider": "DHL",
            "status": "ready", "address": "Elm St 4", "delivery_method": "overnight"}}]]"#;
        let params = decode(body).unwrap().into_delivery_create().unwrap();
        assert_eq!(params.order_id, 7);
        assert_eq!(params.delivery_provider, "DHL");
        assert_eq!(params.status, Some(DeliveryStatus::Ready));
        assert_eq!(params.current_location.as_deref(), Some("Elm St 4"));
        assert_eq!(params.delivery_method, Some(DeliveryMethod::Overnight));
    }

    #[test]
    fn payment_method_variant_is_accepted() {
        let body = br#"[[{"order_data": {"id": 3, "payment_method": "UPS"}}]]"#;
        let params = decode(body).unwrap().into_delivery_create().unwrap();
        assert_eq!(params.delivery_provider, "UPS");
        assert_eq!(params.status, None);
        assert_eq!(params.delivery_method, None);
    }

    #[test]
    fn empty_envelope_is_a_decode_error() {
        assert!(matches!(decode(b"[[]]"), Err(DeliveryError::Decode(_))));
        assert!(matches!(decode(b"[]"), Err(DeliveryError::Decode(_))));
    }

    #[test]
    fn unknown_status_is_a_validation_error() {
        let body = br#"[[{"order_data": {"id": 9, "delivery_provider": "DHL",
            "status": "vanished"}}]]"#;
        let result = decode(body).unwrap().into_delivery_create();
        assert!(matches!(result, Err(DeliveryError::Validation(_))));
    }
}
