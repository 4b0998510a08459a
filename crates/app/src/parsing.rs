use engine::{Clock, EngineError, Record};

#[derive(Debug, thiserror::Error, PartialEq)]
pub(crate) enum ParseError {
    #[error("empty record")]
    Empty,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error(transparent)]
    Date(#[from] EngineError),
}

/// Parses a record given on the command line.
///
/// Form: `AMOUNT[@DD.MM.YYYY][ comment...]`
/// - `145 кофе` => 145 today, comment "кофе"
/// - `3000@08.11.2022 бар` => 3000 on 8 Nov 2022
/// - `12,5` => 12.5 today, no comment
pub(crate) fn parse_record(input: &str, clock: &impl Clock) -> Result<Record, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (head, tail) = match trimmed.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail),
        None => (trimmed, ""),
    };
    let (amount_str, date_str) = match head.split_once('@') {
        Some((amount, date)) => (amount, Some(date)),
        None => (head, None),
    };

    let amount: f64 = amount_str
        .replace(',', ".")
        .parse()
        .map_err(|_| ParseError::InvalidAmount(amount_str.to_string()))?;
    if !amount.is_finite() {
        return Err(ParseError::InvalidAmount(amount_str.to_string()));
    }

    let record = match date_str {
        Some(date) => Record::parse(amount, date)?,
        None => Record::today_by(amount, clock),
    };

    let comment = tail.split_whitespace().collect::<Vec<_>>().join(" ");
    Ok(if comment.is_empty() {
        record
    } else {
        record.with_comment(comment)
    })
}
