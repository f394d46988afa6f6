//! Demo dashboard routes
//!
//! - GET /demo/dashboard - station, open day and closed-day history
//! - POST /demo/cutoff - close the open day and open the next one
//!
//! A rejected cutoff is still a 200; the outcome lives in the `ok` field.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::app_state::SharedState;
use crate::demo::Dashboard;

pub const CUTOFF_DONE: &str = "Corte realizado";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffResponse {
    pub ok: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_date: Option<NaiveDate>,
}

/// GET /demo/dashboard
pub async fn dashboard(State(state): State<SharedState>) -> Json<Dashboard> {
    let dash = state.store.lock().dashboard();
    Json(dash)
}

/// POST /demo/cutoff
pub async fn cutoff(State(state): State<SharedState>) -> Json<CutoffResponse> {
    let result = state.store.lock().cutoff();
    let body = match result {
        Ok(closed) => CutoffResponse {
            ok: true,
            message: CUTOFF_DONE.to_string(),
            closed_date: Some(closed),
        },
        Err(e) => CutoffResponse {
            ok: false,
            message: e.to_string(),
            closed_date: None,
        },
    };
    Json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_cutoff_omits_closed_date() {
        let body = CutoffResponse {
            ok: false,
            message: "El día ya fue cerrado.".into(),
            closed_date: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"ok": false, "message": "El día ya fue cerrado."})
        );
    }

    #[test]
    fn successful_cutoff_carries_iso_date() {
        let body = CutoffResponse {
            ok: true,
            message: CUTOFF_DONE.into(),
            closed_date: NaiveDate::from_ymd_opt(2026, 10, 15),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"ok": true, "message": "Corte realizado", "closed_date": "2026-10-15"})
        );
    }
}
