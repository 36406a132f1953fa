pub mod date_range;
pub mod grid;
pub mod locale;
pub mod palette;

pub use date_range::{format_date, parse_date, DateRange};
pub use grid::{build_board, Board};
pub use locale::Locale;
pub use palette::Palette;
