mod format;
mod maths_utils;
mod time_utils;

pub use format::{format_currency, format_percentage, group_thousands};
pub use maths_utils::round_half_up;
pub use time_utils::now_iso;
