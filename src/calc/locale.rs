/// Month and weekday name tables used for board labels.
///
/// Passed explicitly into the label functions rather than read from a
/// process-wide locale, so callers and tests pick the table set directly.
#[derive(Clone, Debug)]
pub struct Locale {
    pub months_full: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Two-letter weekday labels, Monday..Sunday.
    pub weekdays: [&'static str; 7],
    /// One-letter weekday labels, Monday..Sunday.
    pub weekdays_short: [&'static str; 7],
}

impl Locale {
    pub fn italian() -> Self {
        Locale {
            months_full: [
                "gennaio",
                "febbraio",
                "marzo",
                "aprile",
                "maggio",
                "giugno",
                "luglio",
                "agosto",
                "settembre",
                "ottobre",
                "novembre",
                "dicembre",
            ],
            months_short: [
                "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
            ],
            weekdays: ["Lu", "Ma", "Me", "Gi", "Ve", "Sa", "Do"],
            // lowercase m keeps mercoledì distinct from martedì
            weekdays_short: ["L", "M", "m", "G", "V", "S", "D"],
        }
    }

    pub fn english() -> Self {
        Locale {
            months_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            months_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            weekdays: ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"],
            weekdays_short: ["M", "T", "W", "T", "F", "S", "S"],
        }
    }

    /// Resolves a settings tag to a table set. Unknown tags fall back to Italian.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "en" => Locale::english(),
            _ => Locale::italian(),
        }
    }

    /// Name of calendar month `month` (1..=12).
    pub fn month_name(&self, month: u32, abbreviated: bool) -> &'static str {
        let index = (month.clamp(1, 12) - 1) as usize;
        if abbreviated {
            self.months_short[index]
        } else {
            self.months_full[index]
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::italian()
    }
}
