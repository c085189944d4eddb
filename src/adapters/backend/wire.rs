//! Wire types for the ticketing backend's JSON responses.
//!
//! The backend is loose about types: ids and rows arrive as strings or
//! numbers, prices occasionally as numeric strings, and optional fields go
//! missing. These types accept that shape and normalize it into domain
//! values.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::foundation::{GroupId, Money, SeatId, SectionId, Timestamp};
use crate::domain::seating::{Level, Seat, Section};
use crate::ports::BackendError;

/// `{group_id}` from `POST /queue/create-group`.
#[derive(Debug, Deserialize)]
pub(crate) struct CreateGroupBody {
    #[serde(default)]
    pub group_id: Value,
}

impl CreateGroupBody {
    pub fn into_group_id(self) -> Result<GroupId, BackendError> {
        let raw = scalar_to_string(&self.group_id)
            .ok_or_else(|| BackendError::parse("create-group response has no group_id"))?;
        GroupId::new(raw).map_err(|e| BackendError::parse(e.to_string()))
    }
}

/// `{position}` from `GET /queue/position/...`.
#[derive(Debug, Deserialize)]
pub(crate) struct PositionBody {
    #[serde(default)]
    pub position: Value,
}

impl PositionBody {
    pub fn into_position(self) -> Result<Option<u32>, BackendError> {
        if self.position.is_null() {
            return Ok(None);
        }
        let n = scalar_to_f64(&self.position)
            .ok_or_else(|| BackendError::parse("position is not a number"))?;
        if n < 0.0 || n > u32::MAX as f64 {
            return Err(BackendError::parse(format!("position {} out of range", n)));
        }
        Ok(Some(n as u32))
    }
}

/// `{expires_at}` from `POST /checkout/lock`.
#[derive(Debug, Deserialize)]
pub(crate) struct LockBody {
    #[serde(default)]
    pub expires_at: Value,
}

impl LockBody {
    /// Numbers are Unix seconds; strings are ISO 8601 (or numeric seconds).
    pub fn into_expiry(self) -> Result<Timestamp, BackendError> {
        match &self.expires_at {
            Value::Number(n) => n
                .as_f64()
                .and_then(Timestamp::from_unix_secs_f64)
                .ok_or_else(|| BackendError::parse(format!("expires_at {} out of range", n))),
            Value::String(s) => Timestamp::parse(s).or_else(|e| {
                s.trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(Timestamp::from_unix_secs_f64)
                    .ok_or_else(|| BackendError::parse(e.to_string()))
            }),
            _ => Err(BackendError::parse("lock response has no expires_at")),
        }
    }
}

/// `{sections: [...]}`; a missing or null list is empty.
#[derive(Debug, Deserialize)]
pub(crate) struct SectionsBody {
    #[serde(default)]
    pub sections: Option<Vec<WireSection>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireSection {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub base_price: Value,
    #[serde(default)]
    pub total_seats: Value,
    #[serde(default)]
    pub available_seats: Value,
}

impl WireSection {
    pub fn into_domain(self) -> Result<Section, BackendError> {
        let id = scalar_to_string(&self.id)
            .ok_or_else(|| BackendError::parse("section without id"))
            .and_then(|raw| SectionId::new(raw).map_err(|e| BackendError::parse(e.to_string())))?;

        Ok(Section {
            label: self.label.unwrap_or_else(|| id.to_string()),
            level: Level::from_wire(self.level.as_deref()),
            base_price: money_or_zero(&self.base_price)?,
            total_seats: count_or_zero(&self.total_seats),
            available_seats: count_or_zero(&self.available_seats),
            id,
        })
    }
}

/// `{seats: [...]}`; a missing or null list is empty.
#[derive(Debug, Deserialize)]
pub(crate) struct SeatsBody {
    #[serde(default)]
    pub seats: Option<Vec<WireSeat>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireSeat {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub section_id: Value,
    #[serde(default)]
    pub row: Value,
    #[serde(default)]
    pub number: Value,
    #[serde(default)]
    pub price: Value,
    #[serde(default)]
    pub available: Value,
}

impl WireSeat {
    /// Seats that omit their section are assigned to the requested one.
    pub fn into_domain(self, requested: &SectionId) -> Result<Seat, BackendError> {
        let id = scalar_to_string(&self.id)
            .ok_or_else(|| BackendError::parse("seat without id"))
            .and_then(|raw| SeatId::new(raw).map_err(|e| BackendError::parse(e.to_string())))?;

        let section_id = match scalar_to_string(&self.section_id) {
            Some(raw) => SectionId::new(raw).map_err(|e| BackendError::parse(e.to_string()))?,
            None => requested.clone(),
        };

        let number = scalar_to_f64(&self.number)
            .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
            .ok_or_else(|| BackendError::parse(format!("seat {} has no valid number", id)))?;

        let price = scalar_to_f64(&self.price)
            .ok_or_else(|| BackendError::parse(format!("seat {} has no valid price", id)))
            .and_then(|p| Money::try_from_dollars_f64(p).map_err(|e| BackendError::parse(e.to_string())))?;

        Ok(Seat {
            row: scalar_to_string(&self.row).unwrap_or_default(),
            number: number as u32,
            price,
            available: truthy(&self.available),
            section_id,
            id,
        })
    }
}

/// String or number as a string; anything else is `None`.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Number or numeric string as `f64`.
fn scalar_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn money_or_zero(value: &Value) -> Result<Money, BackendError> {
    match scalar_to_f64(value) {
        Some(p) => Money::try_from_dollars_f64(p).map_err(|e| BackendError::parse(e.to_string())),
        None => Ok(Money::ZERO),
    }
}

fn count_or_zero(value: &Value) -> u32 {
    scalar_to_f64(value)
        .filter(|n| *n >= 0.0)
        .map(|n| n.min(u32::MAX as f64) as u32)
        .unwrap_or(0)
}

/// JavaScript-style truthiness.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
