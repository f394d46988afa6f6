//! Synthetic day generator
//!
//! Builds a plausible open day from random draws within fixed ranges. The
//! draw order is stable: four fuel totals, vouchers, transfers, then one
//! jitter per (pump, fuel) pair, pump-major.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use super::model::{DayRecord, DayStatus, FuelType, PumpRow, PUMP_COUNT};

pub const VOUCHER_RANGE: RangeInclusive<i64> = 8_000..=25_000;
pub const TRANSFER_RANGE: RangeInclusive<i64> = 5_000..=20_000;
pub const PUMP_JITTER: RangeInclusive<i64> = -800..=800;

/// Daily total range for each fuel grade.
pub fn fuel_range(fuel: FuelType) -> RangeInclusive<i64> {
    match fuel {
        FuelType::Vpower => 18_000..=35_000,
        FuelType::Super => 35_000..=55_000,
        FuelType::Regular => 30_000..=50_000,
        FuelType::Diesel => 10_000..=20_000,
    }
}

/// Source of uniform integer draws, inclusive on both ends.
pub trait Entropy {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64;
}

impl<R: rand::Rng + ?Sized> Entropy for R {
    fn draw(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.gen_range(range)
    }
}

/// Generate an `OPEN` day for `date`.
pub fn make_open_day<E: Entropy + ?Sized>(date: NaiveDate, entropy: &mut E) -> DayRecord {
    let mut fuel_breakdown = BTreeMap::new();
    for fuel in FuelType::ALL {
        fuel_breakdown.insert(fuel, entropy.draw(fuel_range(fuel)));
    }
    let total_sold: i64 = fuel_breakdown.values().sum();

    let vouchers = entropy.draw(VOUCHER_RANGE);
    let transfers = entropy.draw(TRANSFER_RANGE);
    let cash_expected = (total_sold - vouchers - transfers).max(0);

    // Each pump gets a jittered sixth of every fuel; rows are not reconciled
    // against fuel_breakdown.
    let pump_breakdown = (1..=PUMP_COUNT)
        .map(|pump| {
            let mut fuels = BTreeMap::new();
            for (fuel, amount) in &fuel_breakdown {
                let base = amount / i64::from(PUMP_COUNT);
                let jitter = entropy.draw(PUMP_JITTER);
                fuels.insert(*fuel, (base + jitter).max(0));
            }
            let total = fuels.values().sum();
            PumpRow { pump, fuels, total }
        })
        .collect();

    DayRecord {
        date,
        status: DayStatus::Open,
        total_sold,
        vouchers,
        transfers,
        cash_expected,
        fuel_breakdown,
        pump_breakdown,
    }
}
