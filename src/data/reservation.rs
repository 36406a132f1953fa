use crate::calc::date_range::{format_date, parse_date};
use crate::data::persistence::Persistable;
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One booking: a guest, a room, and an inclusive arrival..departure span.
/// The departure day is a checkout event, not a lodging night.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Reservation {
    pub guest: String,
    pub room: String,
    #[serde(rename = "arrival")]
    pub arrival_raw: String,
    #[serde(rename = "departure")]
    pub departure_raw: String,
    pub guests: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub revenue: f64,
    #[serde(skip)]
    pub arrival: Option<NaiveDate>,
    #[serde(skip)]
    pub departure: Option<NaiveDate>,
}

impl Reservation {
    pub fn new(
        guest: &str,
        room: &str,
        arrival: NaiveDate,
        departure: NaiveDate,
        guests: u32,
        notes: &str,
        revenue: f64,
    ) -> Self {
        Reservation {
            guest: guest.to_string(),
            room: room.to_string(),
            arrival_raw: format_date(arrival),
            departure_raw: format_date(departure),
            guests,
            notes: notes.to_string(),
            revenue,
            arrival: Some(arrival),
            departure: Some(departure),
        }
    }

    /// Populates the parsed date fields from the raw `dd/mm/yyyy` strings.
    /// Same-day arrival and departure is a legal day-use booking.
    pub fn parse_dates(&mut self) -> Result<()> {
        let arrival = parse_date(&self.arrival_raw)
            .with_context(|| format!("failed to parse arrival date for '{}'", self.guest))?;
        let departure = parse_date(&self.departure_raw)
            .with_context(|| format!("failed to parse departure date for '{}'", self.guest))?;
        if arrival > departure {
            bail!(
                "reservation for '{}' departs {} before arriving {}",
                self.guest,
                self.departure_raw,
                self.arrival_raw
            );
        }
        self.arrival = Some(arrival);
        self.departure = Some(departure);
        Ok(())
    }

    /// True when `day` falls in [arrival, departure], both ends included.
    pub fn covers(&self, day: NaiveDate) -> bool {
        match (self.arrival, self.departure) {
            (Some(a), Some(d)) => day >= a && day <= d,
            _ => false,
        }
    }

    /// True when the room is slept in on the night of `day`.
    pub fn lodges(&self, day: NaiveDate) -> bool {
        match (self.arrival, self.departure) {
            (Some(a), Some(d)) => day >= a && day < d,
            _ => false,
        }
    }

    /// 1-based day of stay; the arrival day is day 1.
    pub fn night_number(&self, day: NaiveDate) -> i64 {
        match self.arrival {
            Some(a) => (day - a).num_days() + 1,
            None => 0,
        }
    }
}

/// Formats a monetary amount with the configured currency symbol.
pub fn format_money(amount: f64, currency: &str) -> String {
    format!("{} {:.2}", currency, amount)
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct ReservationData {
    pub reservations: Vec<Reservation>,
}

impl Persistable for ReservationData {
    fn filename() -> &'static str {
        "reservations.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl ReservationData {
    pub fn load_and_parse() -> Result<Self> {
        let mut data = Self::load()?;
        for r in &mut data.reservations {
            r.parse_dates()?;
        }
        Ok(data)
    }

    pub fn add(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
        self.reservations.sort_by(|a, b| a.arrival.cmp(&b.arrival));
    }

    pub fn for_room<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a Reservation> {
        self.reservations.iter().filter(move |r| r.room == room)
    }
}
