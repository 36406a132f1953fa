use crate::calc::locale::Locale;
use anyhow::{bail, Context, Result};
use chrono::{Datelike, Days, Local, NaiveDate};

/// An inclusive calendar date range: both endpoints are rendered days.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            bail!(
                "invalid range: start {} is after end {}",
                format_date(start),
                format_date(end)
            );
        }
        Ok(DateRange { start, end })
    }

    /// The Monday..Sunday week containing `date`.
    pub fn week(date: NaiveDate) -> Self {
        let monday = date
            .checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
            .unwrap_or(date);
        let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
        DateRange {
            start: monday,
            end: sunday,
        }
    }

    pub fn this_week() -> Self {
        Self::week(Local::now().date_naive())
    }

    /// First..last day of the month containing `date`.
    pub fn month(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        let next_month = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
        };
        let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(date);
        DateRange {
            start: first,
            end: last,
        }
    }

    pub fn this_month() -> Self {
        Self::month(Local::now().date_naive())
    }

    /// `n_days` consecutive days starting at `start`.
    pub fn period(start: NaiveDate, n_days: u64) -> Result<Self> {
        if n_days == 0 {
            bail!("a period must cover at least one day");
        }
        let end = start
            .checked_add_days(Days::new(n_days - 1))
            .context("period end date out of range")?;
        Ok(DateRange { start, end })
    }

    pub fn period_from_today(n_days: u64) -> Result<Self> {
        Self::period(Local::now().date_naive(), n_days)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, both endpoints included.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Date at `offset` days past the start. Plain day arithmetic, so any
    /// offset inside `0..num_days()` is correct whatever months the range
    /// crosses.
    pub fn date_at(&self, offset: u64) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(offset))
            .unwrap_or(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let range = *self;
        (0..range.num_days() as u64).map(move |i| range.date_at(i))
    }

    /// Label for the covered month(s): one capitalized name when the range
    /// stays inside a month, "NameA-NameB" when it spans more. A year is
    /// appended to a name only when it differs from `today`'s year.
    ///
    /// Abbreviation quirk, kept on purpose: ranges of 16 days or more use
    /// the abbreviated names, shorter ranges the full ones.
    pub fn month_label(&self, locale: &Locale, today: NaiveDate) -> String {
        let abbreviated = self.num_days() >= 16;
        let mut label = month_with_year(self.start, locale, abbreviated, today);
        if self.start.month() != self.end.month() || self.start.year() != self.end.year() {
            label.push('-');
            label.push_str(&month_with_year(self.end, locale, abbreviated, today));
        }
        label
    }

    /// Weekday label for day offset `i`: two letters for ranges under 14
    /// days, a single letter for longer ones.
    pub fn weekday_label(&self, i: u64, locale: &Locale) -> &'static str {
        let index = self.date_at(i).weekday().num_days_from_monday() as usize;
        if self.num_days() < 14 {
            locale.weekdays[index]
        } else {
            locale.weekdays_short[index]
        }
    }
}

fn month_with_year(date: NaiveDate, locale: &Locale, abbreviated: bool, today: NaiveDate) -> String {
    let name = capitalize(locale.month_name(date.month(), abbreviated));
    if date.year() != today.year() {
        format!("{} {}", name, date.year())
    } else {
        name
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Parses a `dd/mm/yyyy` date. The text must split into exactly three
/// `/`-separated numeric components forming a real calendar date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 3 {
        bail!("expected dd/mm/yyyy, got '{}'", text);
    }
    let day: u32 = parts[0]
        .trim()
        .parse()
        .with_context(|| format!("invalid day in '{}'", text))?;
    let month: u32 = parts[1]
        .trim()
        .parse()
        .with_context(|| format!("invalid month in '{}'", text))?;
    let year: i32 = parts[2]
        .trim()
        .parse()
        .with_context(|| format!("invalid year in '{}'", text))?;
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("'{}' is not a calendar date", text))
}

/// Formats a date back to the `dd/mm/yyyy` pattern `parse_date` reads.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
