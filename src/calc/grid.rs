use crate::calc::date_range::DateRange;
use crate::calc::palette::Palette;
use crate::data::reservation::{format_money, Reservation};
use crate::data::rooms::RoomLayout;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Cell state for one room on one day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Empty,
    Arrival,
    Departure,
    /// Arrival and departure of the same reservation on one day (day use).
    ArrivalDeparture,
    /// Departure of one reservation meeting the arrival of another.
    Turnover,
    /// A night mid-stay.
    Night,
}

impl Symbol {
    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::Empty => "",
            Symbol::Arrival => "→",
            Symbol::Departure => "←",
            Symbol::ArrivalDeparture => "↔",
            Symbol::Turnover => "⇄",
            Symbol::Night => "•",
        }
    }
}

/// Per-day totals plus the revenue of every stay ending inside the range.
///
/// Computed as a standalone pass over the reservations before any cell is
/// rendered, so the numbers never depend on presentation order.
#[derive(Debug, Default)]
pub struct DayAggregates {
    occupancy: HashMap<NaiveDate, u32>,
    guests: HashMap<NaiveDate, u32>,
    total_revenue: f64,
}

impl DayAggregates {
    pub fn compute(range: &DateRange, reservations: &[Reservation], layout: &RoomLayout) -> Self {
        let mut agg = DayAggregates::default();
        for r in reservations {
            // Unknown room: tolerated and not counted.
            if !layout.contains_room(&r.room) {
                continue;
            }
            for day in range.days() {
                if r.lodges(day) {
                    *agg.occupancy.entry(day).or_default() += 1;
                }
                if r.covers(day) {
                    *agg.guests.entry(day).or_default() += r.guests;
                }
            }
            if r.departure.is_some_and(|d| range.contains(d)) {
                agg.total_revenue += r.revenue;
            }
        }
        agg
    }

    pub fn occupancy_on(&self, day: NaiveDate) -> u32 {
        self.occupancy.get(&day).copied().unwrap_or(0)
    }

    pub fn guests_on(&self, day: NaiveDate) -> u32 {
        self.guests.get(&day).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoardCell {
    pub symbol: Symbol,
    pub tooltip: String,
    pub color: String,
    pub color_light: String,
}

#[derive(Clone, Debug)]
pub struct BoardRow {
    pub group: String,
    pub group_index: usize,
    /// True for the first room of its group; the group label renders here.
    pub first_in_group: bool,
    pub room: String,
    pub cells: Vec<BoardCell>,
}

/// The markup-independent board: one row per room in layout order, one cell
/// per day, plus the aggregate totals a footer needs.
#[derive(Debug)]
pub struct Board {
    pub range: DateRange,
    pub rows: Vec<BoardRow>,
    aggregates: DayAggregates,
}

impl Board {
    /// Occupied-room count for day offset `i`.
    pub fn occupancy_on(&self, i: u64) -> u32 {
        self.aggregates.occupancy_on(self.range.date_at(i))
    }

    /// Guest total for day offset `i`.
    pub fn guests_on(&self, i: u64) -> u32 {
        self.aggregates.guests_on(self.range.date_at(i))
    }

    pub fn total_revenue(&self) -> f64 {
        self.aggregates.total_revenue
    }

    pub fn total_revenue_text(&self, currency: &str) -> String {
        format_money(self.aggregates.total_revenue, currency)
    }
}

pub fn build_board(
    range: &DateRange,
    reservations: &[Reservation],
    layout: &RoomLayout,
    palette: &Palette,
    currency: &str,
) -> Board {
    let aggregates = DayAggregates::compute(range, reservations, layout);

    let mut rows = Vec::with_capacity(layout.room_count());
    for (group_index, group) in layout.groups.iter().enumerate() {
        let color = palette.color(group_index).to_string();
        let color_light = palette.color_light(group_index).to_string();
        for (room_index, room) in group.rooms.iter().enumerate() {
            let mut cells = Vec::with_capacity(range.num_days() as usize);
            for day in range.days() {
                let (symbol, tooltip) = resolve_cell(day, room, reservations, currency);
                cells.push(BoardCell {
                    symbol,
                    tooltip,
                    color: color.clone(),
                    color_light: color_light.clone(),
                });
            }
            rows.push(BoardRow {
                group: group.name.clone(),
                group_index,
                first_in_group: room_index == 0,
                room: room.clone(),
                cells,
            });
        }
    }

    Board {
        range: *range,
        rows,
        aggregates,
    }
}

/// Resolves the symbol and tooltip for one room on one day.
fn resolve_cell(
    day: NaiveDate,
    room: &str,
    reservations: &[Reservation],
    currency: &str,
) -> (Symbol, String) {
    let matching: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.room == room && r.covers(day))
        .collect();

    // A departure meeting a different reservation's arrival folds into one
    // turnover cell; the arriving stay is not rendered separately today.
    let departing = matching
        .iter()
        .find(|r| r.departure == Some(day) && r.arrival != Some(day));
    let arriving = matching
        .iter()
        .find(|r| r.arrival == Some(day) && r.departure != Some(day));
    if let (Some(out), Some(inc)) = (departing, arriving) {
        let tooltip = format!(
            "Departure of:\n{}\n\nArrival of:\n{}",
            guest_block(out, currency),
            guest_block(inc, currency)
        );
        return (Symbol::Turnover, tooltip);
    }

    let mut symbol = Symbol::Empty;
    let mut tooltip = String::new();
    for r in &matching {
        match (r.arrival == Some(day), r.departure == Some(day)) {
            (true, true) => {
                symbol = Symbol::ArrivalDeparture;
                tooltip = format!("Arrival and departure of:\n{}", guest_block(r, currency));
            }
            (true, false) => {
                symbol = Symbol::Arrival;
                tooltip = format!("Arrival of:\n{}", guest_block(r, currency));
            }
            (false, true) => {
                symbol = Symbol::Departure;
                tooltip = format!("Departure of:\n{}", guest_block(r, currency));
            }
            (false, false) => {
                symbol = Symbol::Night;
                tooltip = format!(
                    "Day {} of stay for:\n{}",
                    r.night_number(day),
                    guest_block(r, currency)
                );
            }
        }
    }
    (symbol, tooltip)
}

fn guest_block(r: &Reservation, currency: &str) -> String {
    format!(
        "{}\nGuests: {}\n\nNotes:\n{}\n\nRevenue: {}",
        r.guest,
        r.guests,
        r.notes,
        format_money(r.revenue, currency)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::rooms::RoomGroup;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn res(
        guest: &str,
        room: &str,
        arrival: NaiveDate,
        departure: NaiveDate,
        guests: u32,
        revenue: f64,
    ) -> Reservation {
        Reservation::new(guest, room, arrival, departure, guests, "", revenue)
    }

    fn layout() -> RoomLayout {
        RoomLayout {
            groups: vec![
                RoomGroup {
                    name: "Main".to_string(),
                    rooms: vec!["R1".to_string(), "R2".to_string()],
                },
                RoomGroup {
                    name: "Annex".to_string(),
                    rooms: vec!["R3".to_string()],
                },
            ],
        }
    }

    fn april() -> DateRange {
        DateRange::month(d(2025, 4, 15))
    }

    fn build(reservations: &[Reservation]) -> Board {
        build_board(&april(), reservations, &layout(), &Palette::default(), "€")
    }

    #[test]
    fn test_stay_renders_arrival_nights_and_departure() {
        let reservations = vec![res("Rossi", "R1", d(2025, 4, 10), d(2025, 4, 13), 2, 300.0)];
        let board = build(&reservations);
        let row = &board.rows[0];
        assert_eq!(row.cells[8].symbol, Symbol::Empty); // Apr 9
        assert_eq!(row.cells[9].symbol, Symbol::Arrival); // Apr 10
        assert_eq!(row.cells[10].symbol, Symbol::Night);
        assert_eq!(row.cells[11].symbol, Symbol::Night);
        assert_eq!(row.cells[12].symbol, Symbol::Departure); // Apr 13
        assert_eq!(row.cells[13].symbol, Symbol::Empty);
    }

    #[test]
    fn test_departure_day_counts_guests_but_not_occupancy() {
        let reservations = vec![res("Rossi", "R1", d(2025, 4, 10), d(2025, 4, 13), 2, 300.0)];
        let board = build(&reservations);
        for offset in 9..=11 {
            assert_eq!(board.occupancy_on(offset), 1, "offset {offset}");
            assert_eq!(board.guests_on(offset), 2, "offset {offset}");
        }
        // Apr 13: checkout only, still covered for the guest total
        assert_eq!(board.occupancy_on(12), 0);
        assert_eq!(board.guests_on(12), 2);
        assert_eq!(board.occupancy_on(13), 0);
        assert_eq!(board.guests_on(13), 0);
        assert_eq!(board.total_revenue(), 300.0);
    }

    #[test]
    fn test_night_tooltip_carries_stay_ordinal() {
        let reservations = vec![res("Rossi", "R1", d(2025, 4, 10), d(2025, 4, 13), 2, 300.0)];
        let board = build(&reservations);
        let row = &board.rows[0];
        assert!(row.cells[10].tooltip.starts_with("Day 2 of stay for:\nRossi"));
        assert!(row.cells[11].tooltip.starts_with("Day 3 of stay for:\nRossi"));
    }

    #[test]
    fn test_tooltip_embeds_guests_notes_and_revenue() {
        let reservations = vec![Reservation::new(
            "Rossi",
            "R1",
            d(2025, 4, 10),
            d(2025, 4, 13),
            2,
            "Late check-in",
            300.0,
        )];
        let board = build(&reservations);
        let tooltip = &board.rows[0].cells[9].tooltip;
        assert!(tooltip.starts_with("Arrival of:\nRossi"));
        assert!(tooltip.contains("Guests: 2"));
        assert!(tooltip.contains("Notes:\nLate check-in"));
        assert!(tooltip.contains("Revenue: € 300.00"));
    }

    #[test]
    fn test_turnover_folds_departure_and_arrival() {
        let reservations = vec![
            res("Departing", "R1", d(2025, 4, 8), d(2025, 4, 12), 2, 400.0),
            res("Arriving", "R1", d(2025, 4, 12), d(2025, 4, 15), 3, 500.0),
        ];
        let board = build(&reservations);
        let cell = &board.rows[0].cells[11]; // Apr 12
        assert_eq!(cell.symbol, Symbol::Turnover);
        assert!(cell.tooltip.contains("Departure of:\nDeparting"));
        assert!(cell.tooltip.contains("Arrival of:\nArriving"));
        // the day after the turnover belongs to the arriving stay alone
        assert_eq!(board.rows[0].cells[12].symbol, Symbol::Night);
    }

    #[test]
    fn test_turnover_is_order_independent() {
        let forward = vec![
            res("Departing", "R1", d(2025, 4, 8), d(2025, 4, 12), 2, 400.0),
            res("Arriving", "R1", d(2025, 4, 12), d(2025, 4, 15), 3, 500.0),
        ];
        let reversed: Vec<Reservation> = forward.iter().rev().cloned().collect();
        let a = build(&forward);
        let b = build(&reversed);
        assert_eq!(a.rows[0].cells[11].symbol, b.rows[0].cells[11].symbol);
        assert_eq!(a.rows[0].cells[11].tooltip, b.rows[0].cells[11].tooltip);
        assert_eq!(a.total_revenue(), b.total_revenue());
        assert_eq!(a.guests_on(11), b.guests_on(11));
    }

    #[test]
    fn test_turnover_day_aggregates() {
        let reservations = vec![
            res("Departing", "R1", d(2025, 4, 8), d(2025, 4, 12), 2, 400.0),
            res("Arriving", "R1", d(2025, 4, 12), d(2025, 4, 15), 3, 500.0),
        ];
        let board = build(&reservations);
        // Apr 12: the arriving stay lodges, both are covered for guests
        assert_eq!(board.occupancy_on(11), 1);
        assert_eq!(board.guests_on(11), 5);
        // both stays end inside April
        assert_eq!(board.total_revenue(), 900.0);
    }

    #[test]
    fn test_turnover_in_different_rooms_does_not_fold() {
        let reservations = vec![
            res("Departing", "R1", d(2025, 4, 8), d(2025, 4, 12), 2, 400.0),
            res("Arriving", "R2", d(2025, 4, 12), d(2025, 4, 15), 3, 500.0),
        ];
        let board = build(&reservations);
        assert_eq!(board.rows[0].cells[11].symbol, Symbol::Departure);
        assert_eq!(board.rows[1].cells[11].symbol, Symbol::Arrival);
    }

    #[test]
    fn test_day_use_same_day_arrival_and_departure() {
        let reservations = vec![res("DayUse", "R3", d(2025, 4, 10), d(2025, 4, 10), 2, 80.0)];
        let board = build(&reservations);
        let row = board.rows.iter().find(|r| r.room == "R3").unwrap();
        assert_eq!(row.cells[9].symbol, Symbol::ArrivalDeparture);
        assert!(row.cells[9].tooltip.starts_with("Arrival and departure of:"));
        // no lodging night, but guests and revenue count
        assert_eq!(board.occupancy_on(9), 0);
        assert_eq!(board.guests_on(9), 2);
        assert_eq!(board.total_revenue(), 80.0);
    }

    #[test]
    fn test_empty_reservation_list() {
        let board = build(&[]);
        assert_eq!(board.rows.len(), 3);
        for row in &board.rows {
            assert_eq!(row.cells.len(), 30);
            for cell in &row.cells {
                assert_eq!(cell.symbol, Symbol::Empty);
                assert!(cell.tooltip.is_empty());
            }
        }
        for offset in 0..30 {
            assert_eq!(board.occupancy_on(offset), 0);
            assert_eq!(board.guests_on(offset), 0);
        }
        assert_eq!(board.total_revenue(), 0.0);
    }

    #[test]
    fn test_unknown_room_is_silently_skipped() {
        let reservations = vec![res("Ghost", "R9", d(2025, 4, 10), d(2025, 4, 13), 2, 300.0)];
        let board = build(&reservations);
        for row in &board.rows {
            assert!(row.cells.iter().all(|c| c.symbol == Symbol::Empty));
        }
        assert_eq!(board.occupancy_on(10), 0);
        assert_eq!(board.guests_on(10), 0);
        assert_eq!(board.total_revenue(), 0.0);
    }

    #[test]
    fn test_zero_guests_aggregate_as_zero() {
        let reservations = vec![res("NoGuests", "R1", d(2025, 4, 10), d(2025, 4, 12), 0, 100.0)];
        let board = build(&reservations);
        assert_eq!(board.occupancy_on(9), 1);
        assert_eq!(board.guests_on(9), 0);
    }

    #[test]
    fn test_revenue_counted_only_for_departures_in_range() {
        let reservations = vec![
            res("EndsInMay", "R1", d(2025, 4, 28), d(2025, 5, 3), 2, 600.0),
            res("EndsInApril", "R2", d(2025, 4, 10), d(2025, 4, 12), 1, 200.0),
        ];
        let board = build(&reservations);
        // the May departure still lodges in late April
        assert_eq!(board.occupancy_on(27), 1);
        assert_eq!(board.total_revenue(), 200.0);
    }

    #[test]
    fn test_rows_follow_group_order_and_colors() {
        let board = build(&[]);
        let palette = Palette::default();
        assert_eq!(board.rows[0].room, "R1");
        assert!(board.rows[0].first_in_group);
        assert_eq!(board.rows[0].group, "Main");
        assert_eq!(board.rows[0].cells[0].color, palette.color(0));
        assert_eq!(board.rows[0].cells[0].color_light, palette.color_light(0));
        assert!(!board.rows[1].first_in_group);
        assert_eq!(board.rows[2].group, "Annex");
        assert!(board.rows[2].first_in_group);
        assert_eq!(board.rows[2].group_index, 1);
        assert_eq!(board.rows[2].cells[0].color, palette.color(1));
    }

    #[test]
    fn test_total_revenue_text_is_formatted() {
        let reservations = vec![res("Rossi", "R1", d(2025, 4, 10), d(2025, 4, 13), 2, 300.0)];
        let board = build(&reservations);
        assert_eq!(board.total_revenue_text("€"), "€ 300.00");
    }
}
