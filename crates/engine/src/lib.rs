//! Daily limit tracking for money spent and calories eaten.
//!
//! Both reports share the same core: an [`Aggregator`] holding a daily limit
//! and a list of dated [`Record`]s, able to sum what was recorded today and
//! over the trailing week. [`CalorieReport`] and [`CashReport`] turn today's
//! total into a message.
//!
//! ```rust
//! use engine::{CashReport, Record};
//!
//! let mut cash = CashReport::new(1000.0);
//! cash.add_record(Record::new(145.0).with_comment("кофе"));
//! cash.add_record(Record::parse(3000.0, "08.11.2022").unwrap());
//! assert_eq!(cash.remaining_message("rub").unwrap(), "На сегодня осталось 855.0 руб");
//! assert!(cash.remaining_message("xyz").is_err());
//! ```
pub use aggregator::{Aggregator, WEEK_WINDOW_DAYS};
pub use calories::{CalorieReport, CalorieStatus};
pub use cash::{CashReport, CashStatus};
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::Currency;
pub use error::EngineError;
pub use record::{DATE_FORMAT, Record, parse_date};

mod aggregator;
mod calories;
mod cash;
mod clock;
mod currency;
mod error;
mod record;

pub type ResultEngine<T> = Result<T, EngineError>;
