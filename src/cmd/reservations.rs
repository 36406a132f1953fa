use crate::data::{Persistable, ReservationData};
use anyhow::Result;

pub fn run() -> Result<()> {
    let data = ReservationData::load_and_parse()?;
    write_reservations(&data, &mut std::io::stdout())
}

pub(crate) fn write_reservations<W: std::io::Write>(
    data: &ReservationData,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Reservations")?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "  {:<4} {:<24} {:<10} {:<12} {:<12} {:>6} {:>10}",
        "#", "Guest", "Room", "Arrival", "Departure", "Guests", "Revenue"
    )?;
    for (i, r) in data.reservations.iter().enumerate() {
        writeln!(
            out,
            "  {:<4} {:<24} {:<10} {:<12} {:<12} {:>6} {:>10.2}",
            i + 1,
            r.guest,
            r.room,
            r.arrival_raw,
            r.departure_raw,
            r.guests,
            r.revenue
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} reservation(s)", data.reservations.len())?;
    Ok(())
}
