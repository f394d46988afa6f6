//! Day-state store
//!
//! Owns the station, the closed-day history and the current open day. The
//! only transition is a cutoff: the open day is appended to history as
//! `CLOSED` and a fresh `OPEN` day for the following date replaces it.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::generator::{make_open_day, Entropy};
use super::model::{Dashboard, DayRecord, Station};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CutoffError {
    #[error("El día ya fue cerrado.")]
    AlreadyClosed,
    #[error("no hay día siguiente a {0}")]
    DateOverflow(NaiveDate),
}

/// Entropy shared across threads by the HTTP layer.
pub type SharedEntropy = Box<dyn Entropy + Send>;

#[derive(Debug, Clone, Default)]
pub struct DemoState {
    pub station: Station,
    pub history: Vec<DayRecord>,
    pub open_day: Option<DayRecord>,
}

pub struct DemoStore {
    state: DemoState,
    clock: Arc<dyn Clock>,
    entropy: SharedEntropy,
}

impl DemoStore {
    pub fn new(station: Station, clock: Arc<dyn Clock>, entropy: SharedEntropy) -> Self {
        Self {
            state: DemoState {
                station,
                ..DemoState::default()
            },
            clock,
            entropy,
        }
    }

    /// Store backed by the host clock and an OS-seeded generator.
    pub fn with_system_sources(station: Station) -> Self {
        Self::new(
            station,
            Arc::new(SystemClock),
            Box::new(StdRng::from_entropy()),
        )
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    /// Seed yesterday (closed) and today (open) when no open day exists.
    /// Returns true when seeding happened.
    pub fn seed_if_needed(&mut self) -> bool {
        if self.state.open_day.is_some() {
            return false;
        }

        let today = self.clock.today();

        // No closed day before the first representable date.
        match today.pred_opt() {
            Some(yesterday) => {
                let closed = make_open_day(yesterday, &mut *self.entropy).closed();
                self.state.history.push(closed);
                info!(
                    station_id = self.state.station.id,
                    closed = %yesterday,
                    "seeded closed day"
                );
            }
            None => warn!(open = %today, "no previous date, seeding without history"),
        }
        self.state.open_day = Some(make_open_day(today, &mut *self.entropy));

        info!(station_id = self.state.station.id, open = %today, "demo state seeded");
        true
    }

    pub fn dashboard(&mut self) -> Dashboard {
        self.seed_if_needed();
        Dashboard {
            station: self.state.station.clone(),
            open_day: self.state.open_day.clone(),
            history: self.state.history.clone(),
        }
    }

    /// Close the open day and open the next one. Returns the closed date.
    pub fn cutoff(&mut self) -> Result<NaiveDate, CutoffError> {
        self.seed_if_needed();

        let current = match self.state.open_day.as_ref() {
            Some(day) if !day.status.is_closed() => day,
            _ => {
                warn!("cutoff rejected: open day already closed");
                return Err(CutoffError::AlreadyClosed);
            }
        };

        let closed = current.closed();
        let closed_date = closed.date;
        let next_date = closed_date
            .checked_add_days(Days::new(1))
            .ok_or(CutoffError::DateOverflow(closed_date))?;

        self.state.history.push(closed);
        self.state.open_day = Some(make_open_day(next_date, &mut *self.entropy));

        info!(closed = %closed_date, open = %next_date, history = self.state.history.len(), "cutoff done");
        debug!(station_id = self.state.station.id, "new open day installed");
        Ok(closed_date)
    }
}
