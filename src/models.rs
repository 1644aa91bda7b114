// models.rs - Core order and inventory types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================
// ORDER
// ============================================================

/// A room booking for `[from, to)`.
///
/// The same shape is accepted from clients and echoed back on success.
/// `from`/`to` accept either RFC 3339 timestamps or plain `YYYY-MM-DD`
/// dates (read as midnight UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = "reddison")]
    pub hotel_id: String,
    #[schema(example = "lux")]
    pub room_id: String,
    #[schema(example = "guest@example.com")]
    pub email: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub from: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    #[schema(example = "2024-01-03T00:00:00Z")]
    pub to: DateTime<Utc>,
}

impl Order {
    pub fn new(
        hotel_id: impl Into<String>,
        room_id: impl Into<String>,
        email: impl Into<String>,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            room_id: room_id.into(),
            email: email.into(),
            from,
            to,
        }
    }
}

// ============================================================
// ROOM AVAILABILITY
// ============================================================

/// Remaining quota for one room of one hotel on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoomAvailability {
    pub hotel_id: String,
    pub room_id: String,
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub date: NaiveDate,
    pub quota: u32,
}

impl RoomAvailability {
    pub fn new(
        hotel_id: impl Into<String>,
        room_id: impl Into<String>,
        date: NaiveDate,
        quota: u32,
    ) -> Self {
        Self {
            hotel_id: hotel_id.into(),
            room_id: room_id.into(),
            date,
            quota,
        }
    }

    /// Whether this record is the inventory slot for `(hotel_id, room_id, day)`.
    #[inline]
    pub fn matches(&self, hotel_id: &str, room_id: &str, day: NaiveDate) -> bool {
        self.hotel_id == hotel_id && self.room_id == room_id && self.date == day
    }

    /// Ledger key. Two records with equal keys are duplicates.
    pub fn key(&self) -> (&str, &str, NaiveDate) {
        (&self.hotel_id, &self.room_id, self.date)
    }
}

// ============================================================
// SERDE HELPERS
// ============================================================

mod timestamp {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};

    /// Accepts `2024-01-01T10:00:00Z` style timestamps and bare `2024-01-01` dates.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let raw = String::deserialize(deserializer)?;
        if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .ok_or_else(|| D::Error::custom(format!("invalid date: {}", raw)))
    }
}
