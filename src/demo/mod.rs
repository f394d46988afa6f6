//! Simulated fuel-station sales: day generator and the day-state store.

pub mod clock;
pub mod generator;
pub mod model;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use generator::{make_open_day, Entropy};
pub use model::{Dashboard, DayRecord, DayStatus, FuelType, PumpRow, Station};
pub use store::{CutoffError, DemoState, DemoStore};
