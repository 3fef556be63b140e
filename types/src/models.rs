//! Entity types and response envelopes
//!
//! These mirror the backend's JSON shapes exactly (Mongo-style `_id` keys,
//! camelCase fields). The client never persists any of this beyond the
//! current page; collections are refetched wholesale after every mutation.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Status Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Publication status shared by trips and transport routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Active,
    ComingSoon,
}

impl TripStatus {
    /// Wire value used in status-toggle request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::ComingSoon => "coming_soon",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Active => "Active",
            TripStatus::ComingSoon => "Coming Soon",
        }
    }

    /// The state a status switch moves to when flipped.
    pub fn toggled(&self) -> TripStatus {
        match self {
            TripStatus::Active => TripStatus::ComingSoon,
            TripStatus::ComingSoon => TripStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, TripStatus::Active)
    }
}

impl Default for TripStatus {
    fn default() -> Self {
        TripStatus::ComingSoon
    }
}

/// How a pending wallet top-up was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "QR")]
    Qr,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Qr => "QR",
            PaymentMethod::Other => "Other",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entities
// ─────────────────────────────────────────────────────────────────────────────

/// One priced line item in a trip's payment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetail {
    pub description: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(rename = "_id")]
    pub id: String,
    pub destination: String,
    /// ISO-8601 date string, backend-owned; formatted for display only.
    pub date: String,
    pub original_price: f64,
    pub sale_price: f64,
    pub max_participants: u32,
    #[serde(default)]
    pub current_bookings: u32,
    #[serde(default)]
    pub status: TripStatus,
    /// Image path relative to the backend origin.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub payment_details: Vec<PaymentDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub sap_id: String,
    #[serde(default)]
    pub gender: String,
    /// Backend-authoritative balance; the client never computes it.
    #[serde(default)]
    pub wallet: f64,
}

/// Populated user reference embedded in transactions, refunds and bookings.
/// The backend may return null for deleted users.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, rename = "sapId")]
    pub sap_id: String,
}

/// A pending wallet top-up. State lives in which collection it appears in;
/// approve/deny simply invalidate the pending list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, rename = "userId")]
    pub user: Option<UserRef>,
    pub amount: f64,
    pub method: PaymentMethod,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, rename = "userId")]
    pub user: Option<UserRef>,
    pub trip_destination: String,
    pub amount: f64,
    pub requested_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportRoute {
    #[serde(rename = "_id")]
    pub id: String,
    pub route_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub departure_time: String,
    pub price: f64,
    pub capacity: u32,
    #[serde(default)]
    pub status: TripStatus,
}

/// Read-only booking row, surfaced per-trip in a modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(default, rename = "userId")]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub booking_date: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response Envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// The backend's `{success, message?}` envelope for mutations.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsersEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct TransactionsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
pub struct RefundsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub refunds: Vec<RefundRequest>,
}

#[derive(Debug, Deserialize)]
pub struct RoutesEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<TransportRoute>,
}

#[derive(Debug, Deserialize)]
pub struct BookingsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

/// `GET /api/settings/background`; `background` is a media path relative
/// to the backend origin.
#[derive(Debug, Deserialize)]
pub struct BackgroundEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Request Payloads
// ─────────────────────────────────────────────────────────────────────────────

/// `PUT /api/admin/trips/:id` body. Payment details travel as the same
/// JSON-encoded field the multipart create form uses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripUpdate {
    pub destination: String,
    pub date: String,
    pub original_price: f64,
    pub sale_price: f64,
    pub max_participants: u32,
    pub payment_details: String,
    pub password: String,
}

/// `POST`/`PUT /api/admin/transport[...]` body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePayload {
    pub route_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub departure_time: String,
    pub price: f64,
    pub capacity: u32,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub name: String,
    pub username: String,
    pub email: String,
    pub sap_id: String,
    pub gender: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_deserializes_backend_shape() {
        let json = r#"{
            "_id": "t1",
            "destination": "Manali",
            "date": "2026-03-12T00:00:00.000Z",
            "originalPrice": 5000,
            "salePrice": 4000,
            "maxParticipants": 30,
            "currentBookings": 12,
            "status": "active",
            "image": "/uploads/manali.jpg",
            "paymentDetails": [{"description": "Transport", "price": 500}]
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, "t1");
        assert_eq!(trip.status, TripStatus::Active);
        assert_eq!(trip.payment_details.len(), 1);
        assert_eq!(trip.payment_details[0].description, "Transport");
    }

    #[test]
    fn trip_tolerates_missing_optional_fields() {
        let json = r#"{
            "_id": "t2",
            "destination": "Goa",
            "date": "2026-04-01",
            "originalPrice": 8000,
            "salePrice": 6500,
            "maxParticipants": 20
        }"#;
        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.current_bookings, 0);
        assert_eq!(trip.status, TripStatus::ComingSoon);
        assert!(trip.payment_details.is_empty());
    }

    #[test]
    fn status_toggle_round_trips() {
        assert_eq!(TripStatus::Active.toggled(), TripStatus::ComingSoon);
        assert_eq!(TripStatus::Active.toggled().toggled(), TripStatus::Active);
        assert_eq!(TripStatus::Active.as_str(), "active");
        assert_eq!(TripStatus::ComingSoon.as_str(), "coming_soon");
    }

    #[test]
    fn transaction_with_deleted_user() {
        let json = r#"{
            "_id": "tx1",
            "userId": null,
            "amount": 1500,
            "method": "QR",
            "createdAt": "2026-02-01T10:30:00.000Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert!(tx.user.is_none());
        assert_eq!(tx.method, PaymentMethod::Qr);
    }

    #[test]
    fn unknown_payment_method_maps_to_other() {
        let json = r#"{
            "_id": "tx2",
            "userId": {"name": "Asha", "username": "asha1"},
            "amount": 200,
            "method": "UPI",
            "createdAt": "2026-02-01T10:30:00.000Z"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.method, PaymentMethod::Other);
        assert_eq!(tx.user.unwrap().name, "Asha");
    }

    #[test]
    fn route_kind_uses_type_key() {
        let json = r#"{
            "_id": "r1",
            "routeName": "Campus - Airport",
            "type": "bus",
            "departureTime": "06:30",
            "price": 250,
            "capacity": 40,
            "status": "coming_soon"
        }"#;
        let route: TransportRoute = serde_json::from_str(json).unwrap();
        assert_eq!(route.kind, "bus");
        assert_eq!(route.status, TripStatus::ComingSoon);
    }

    #[test]
    fn envelope_defaults_cover_sparse_responses() {
        let env: UsersEnvelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!env.success);
        assert!(env.users.is_empty());
        assert!(env.message.is_none());
    }
}
