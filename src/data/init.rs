use crate::data::app_settings::BoardSettings;
use crate::data::persistence::{get_data_dir, Persistable};
use crate::data::reservation::{Reservation, ReservationData};
use crate::data::rooms::{RoomGroup, RoomLayout};
use anyhow::Result;
use chrono::{Days, Local, NaiveDate};
use std::fs;

pub fn init() -> Result<()> {
    let data_dir = get_data_dir()?;

    fs::create_dir_all(&data_dir)?;

    println!("Initializing data directory: {}", data_dir.display());
    println!("\nGenerating sample data...");

    sample_layout().save()?;
    println!("✓ rooms.yaml created");

    sample_reservations(Local::now().date_naive()).save()?;
    println!("✓ reservations.json created");

    BoardSettings::default().save()?;
    println!("✓ settings.yaml created");

    println!("\n✓ Initialization complete!");

    Ok(())
}

pub(crate) fn sample_layout() -> RoomLayout {
    RoomLayout {
        groups: vec![
            RoomGroup {
                name: "Main house".to_string(),
                rooms: vec![
                    "Room 1".to_string(),
                    "Room 2".to_string(),
                    "Room 3".to_string(),
                ],
            },
            RoomGroup {
                name: "Annex".to_string(),
                rooms: vec!["Room 4".to_string(), "Room 5".to_string()],
            },
            RoomGroup {
                name: "Apartments".to_string(),
                rooms: vec!["Studio".to_string()],
            },
        ],
    }
}

pub(crate) fn sample_reservations(today: NaiveDate) -> ReservationData {
    let mut data = ReservationData::default();
    data.add(Reservation::new(
        "Rossi, Mario",
        "Room 1",
        shifted(today, -2),
        shifted(today, 3),
        2,
        "Late check-in",
        450.0,
    ));
    // arrives the day the first stay ends: renders as a turnover
    data.add(Reservation::new(
        "Bianchi, Anna",
        "Room 1",
        shifted(today, 3),
        shifted(today, 6),
        1,
        "",
        270.0,
    ));
    data.add(Reservation::new(
        "Verdi, Luca",
        "Room 4",
        shifted(today, 1),
        shifted(today, 5),
        3,
        "Cot requested",
        520.0,
    ));
    data.add(Reservation::new(
        "Esposito, Sara",
        "Studio",
        today,
        today,
        2,
        "Day use",
        80.0,
    ));
    data
}

fn shifted(date: NaiveDate, days: i64) -> NaiveDate {
    let moved = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    moved.unwrap_or(date)
}
