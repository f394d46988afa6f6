//! Dashboard data model
//!
//! Shapes serialized by the demo endpoints. Field names are the wire names.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of dispensers attributed in every pump breakdown.
pub const PUMP_COUNT: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
}

impl Default for Station {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Demo Central".to_string(),
        }
    }
}

/// Fuel grades sold at the station. Declaration order is the order used for
/// random draws and for JSON object keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FuelType {
    Vpower,
    Super,
    Regular,
    Diesel,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Vpower,
        FuelType::Super,
        FuelType::Regular,
        FuelType::Diesel,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayStatus {
    Open,
    Closed,
}

impl DayStatus {
    pub fn is_closed(&self) -> bool {
        matches!(self, DayStatus::Closed)
    }
}

/// Approximate attribution of one day's sales to a single dispenser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PumpRow {
    pub pump: u8,
    pub fuels: BTreeMap<FuelType, i64>,
    pub total: i64,
}

/// One business day's sales snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub total_sold: i64,
    pub vouchers: i64,
    pub transfers: i64,
    /// Never negative: clamped at zero when payments exceed sales.
    pub cash_expected: i64,
    pub fuel_breakdown: BTreeMap<FuelType, i64>,
    pub pump_breakdown: Vec<PumpRow>,
}

impl DayRecord {
    /// Copy of this record marked `CLOSED`.
    pub fn closed(&self) -> DayRecord {
        DayRecord {
            status: DayStatus::Closed,
            ..self.clone()
        }
    }
}

/// Snapshot returned by `GET /demo/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub station: Station,
    pub open_day: Option<DayRecord>,
    pub history: Vec<DayRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fuel_keys_serialize_uppercase_in_declared_order() {
        let mut fuels = BTreeMap::new();
        fuels.insert(FuelType::Diesel, 4);
        fuels.insert(FuelType::Vpower, 1);
        fuels.insert(FuelType::Regular, 3);
        fuels.insert(FuelType::Super, 2);

        let text = serde_json::to_string(&fuels).unwrap();
        assert_eq!(text, r#"{"VPOWER":1,"SUPER":2,"REGULAR":3,"DIESEL":4}"#);
    }

    #[test]
    fn day_record_wire_shape() {
        let day = DayRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            status: DayStatus::Open,
            total_sold: 10,
            vouchers: 3,
            transfers: 2,
            cash_expected: 5,
            fuel_breakdown: BTreeMap::new(),
            pump_breakdown: vec![PumpRow {
                pump: 1,
                fuels: BTreeMap::new(),
                total: 0,
            }],
        };

        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2026-10-15",
                "status": "OPEN",
                "total_sold": 10,
                "vouchers": 3,
                "transfers": 2,
                "cash_expected": 5,
                "fuel_breakdown": {},
                "pump_breakdown": [{"pump": 1, "fuels": {}, "total": 0}],
            })
        );
    }

    #[test]
    fn closed_copy_keeps_numbers() {
        let day = DayRecord {
            date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            status: DayStatus::Open,
            total_sold: 100,
            vouchers: 10,
            transfers: 20,
            cash_expected: 70,
            fuel_breakdown: BTreeMap::new(),
            pump_breakdown: Vec::new(),
        };
        let closed = day.closed();
        assert_eq!(closed.status, DayStatus::Closed);
        assert_eq!(closed.total_sold, 100);
        assert_eq!(day.status, DayStatus::Open);
    }
}
