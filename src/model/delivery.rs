use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for deliveries.
///
/// Minted once by the delivery actor's id generator; never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryId(pub String);

impl Display for DeliveryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a delivery currently stands in its lifecycle.
///
/// Only these five values are ever persisted; wire strings that match none of
/// them are rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    #[default]
    OnHold,
    Ready,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeliveryStatus::OnHold => "on_hold",
            DeliveryStatus::Ready => "ready",
            DeliveryStatus::OnTheWay => "on_the_way",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DeliveryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on_hold" => Ok(DeliveryStatus::OnHold),
            "ready" => Ok(DeliveryStatus::Ready),
            "on_the_way" => Ok(DeliveryStatus::OnTheWay),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "cancelled" => Ok(DeliveryStatus::Cancelled),
            other => Err(format!("unknown delivery status: {}", other)),
        }
    }
}

/// How a delivery travels, which fixes its estimated arrival offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMethod {
    #[default]
    Standard,
    Express,
    Overnight,
}

impl DeliveryMethod {
    /// Parses a wire string, falling back to [`DeliveryMethod::Standard`]
    /// when the value is unrecognized. Upstream producers occasionally send
    /// methods this service does not know; those shipments get the standard
    /// treatment instead of being dropped.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl Display for DeliveryMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DeliveryMethod::Standard => "standard",
            DeliveryMethod::Express => "express",
            DeliveryMethod::Overnight => "overnight",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DeliveryMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(DeliveryMethod::Standard),
            "express" => Ok(DeliveryMethod::Express),
            "overnight" => Ok(DeliveryMethod::Overnight),
            other => Err(format!("unknown delivery method: {}", other)),
        }
    }
}

/// A tracked shipment record tied to one order.
///
/// `order_id` is not unique across deliveries: an order may have several
/// delivery attempts, each with its own record. `estimated_delivery_time` is
/// derived from the method and `created_at` when the record is built and is
/// never supplied by a caller.
///
/// The serialized form is the response contract consumed by the HTTP layer:
/// the id field travels as `delivery_id`, and `updated_at` is internal
/// bookkeeping that stays out of responses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    #[serde(rename = "delivery_id")]
    pub id: DeliveryId,
    pub order_id: i64,
    pub delivery_provider: String,
    pub status: DeliveryStatus,
    pub current_location: Option<String>,
    pub estimated_delivery_time: DateTime<Utc>,
    pub delivery_method: DeliveryMethod,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new delivery.
///
/// `status` and `delivery_method` default to `OnHold` and `Standard` when
/// absent, matching the record defaults.
#[derive(Debug, Clone)]
pub struct DeliveryCreate {
    pub order_id: i64,
    pub delivery_provider: String,
    pub status: Option<DeliveryStatus>,
    pub current_location: Option<String>,
    pub delivery_method: Option<DeliveryMethod>,
}

/// Payload for updating an existing delivery.
///
/// Only the two mutable fields appear here; everything else on a delivery is
/// fixed at creation. A `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct DeliveryUpdate {
    pub status: Option<DeliveryStatus>,
    pub current_location: Option<String>,
}
