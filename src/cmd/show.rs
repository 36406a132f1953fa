use crate::calc::{build_board, format_date, parse_date, Board, DateRange, Locale, Palette};
use crate::data::{BoardSettings, Persistable, ReservationData, RoomLayout};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};

pub fn run(week: bool, from: Option<&str>, days: Option<u64>) -> Result<()> {
    let settings = BoardSettings::load()?;
    let reservations = ReservationData::load_and_parse()?;
    let layout = RoomLayout::load()?;

    let range = resolve_range(week, from, days, settings.default_days)?;
    let locale = Locale::from_tag(&settings.locale);
    let board = build_board(
        &range,
        &reservations.reservations,
        &layout,
        &Palette::default(),
        &settings.currency,
    );

    write_board(
        &board,
        &locale,
        Local::now().date_naive(),
        &settings.currency,
        &mut std::io::stdout(),
    )
}

/// Picks the range from the CLI flags: --week wins, then --from (with
/// --days or the configured default span), then --days from today, and
/// the current month when nothing is given.
pub(crate) fn resolve_range(
    week: bool,
    from: Option<&str>,
    days: Option<u64>,
    default_days: u64,
) -> Result<DateRange> {
    if week {
        return Ok(DateRange::this_week());
    }
    match from {
        Some(text) => {
            let start = parse_date(text)?;
            DateRange::period(start, days.unwrap_or(default_days))
        }
        None => match days {
            Some(n) => DateRange::period_from_today(n),
            None => Ok(DateRange::this_month()),
        },
    }
}

pub(crate) fn write_board<W: std::io::Write>(
    board: &Board,
    locale: &Locale,
    today: NaiveDate,
    currency: &str,
    out: &mut W,
) -> Result<()> {
    let range = &board.range;
    let n_days = range.num_days() as u64;

    writeln!(
        out,
        "{}  [{} - {}]",
        range.month_label(locale, today),
        format_date(range.start()),
        format_date(range.end())
    )?;

    write!(out, "{:<24}", "")?;
    for i in 0..n_days {
        write!(out, "{:>3}", range.weekday_label(i, locale))?;
    }
    writeln!(out)?;
    write!(out, "{:<24}", "")?;
    for i in 0..n_days {
        write!(out, "{:>3}", range.date_at(i).day())?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;

    for row in &board.rows {
        let group = if row.first_in_group {
            row.group.as_str()
        } else {
            ""
        };
        write!(out, "{:<12} {:<11}", group, row.room)?;
        for cell in &row.cells {
            write!(out, "{:>3}", cell.symbol.glyph())?;
        }
        writeln!(out)?;
    }

    writeln!(out, "---")?;
    write!(out, "{:<24}", "Rooms occupied")?;
    for i in 0..n_days {
        write!(out, "{:>3}", board.occupancy_on(i))?;
    }
    writeln!(out)?;
    write!(out, "{:<24}", "Guests")?;
    for i in 0..n_days {
        write!(out, "{:>3}", board.guests_on(i))?;
    }
    writeln!(out)?;
    writeln!(out, "---")?;
    writeln!(out, "Total revenue: {}", board.total_revenue_text(currency))?;

    Ok(())
}
