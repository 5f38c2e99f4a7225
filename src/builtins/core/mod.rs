//! The core implementation of the value types.
//!
//! Nothing in this module reaches for global state: zone lookups go through
//! an explicit [`ZoneContext`] and the current instant through a [`Clock`].

mod clock;
mod date;
mod month;
mod month_day;
mod period;
mod year;
mod year_month;

pub mod zone;

#[doc(inline)]
pub use clock::{Clock, FixedClock, SystemClock};
#[doc(inline)]
pub use date::PlainDate;
#[doc(inline)]
pub use month::Month;
#[doc(inline)]
pub use month_day::PlainMonthDay;
#[doc(inline)]
pub use period::Period;
#[doc(inline)]
pub use year::Year;
#[doc(inline)]
pub use year_month::PlainYearMonth;
#[doc(inline)]
pub use zone::{ZoneContext, ZoneId, ZoneOffset};
