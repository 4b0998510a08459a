use serde::{Deserialize, Serialize};

use crate::EngineError;

pub const USD_RATE: f64 = 60.00;
pub const EURO_RATE: f64 = 70.00;
pub const RUB_RATE: f64 = 1.00;

/// Currency a cash report can be rendered in.
///
/// The limit and all record amounts are expressed in roubles; [`rate`] gives
/// how many roubles one unit of the currency is worth. Rates are fixed for the
/// lifetime of the process.
///
/// [`rate`]: Currency::rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Usd,
    Eur,
    Rub,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Rub];

    /// Lowercase lookup code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Rub => "rub",
        }
    }

    /// Name shown in report messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "Euro",
            Currency::Rub => "руб",
        }
    }

    /// Base units per one unit of this currency.
    #[must_use]
    pub const fn rate(self) -> f64 {
        match self {
            Currency::Usd => USD_RATE,
            Currency::Eur => EURO_RATE,
            Currency::Rub => RUB_RATE,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == value)
            .ok_or_else(|| EngineError::InvalidCurrency(value.to_string()))
    }
}

impl core::str::FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::try_from(s)
    }
}
