pub mod colors;
pub mod decimal;
pub mod formatting;
pub mod mask;
pub mod path;
pub mod table;
pub mod time;

pub use mask::{is_complete_clock, mask_to_clock};
pub use time::{clock_to_seconds, format_signed_seconds, seconds_to_clock};
