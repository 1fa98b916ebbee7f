use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Present lifecycle thresholds are not strictly increasing in tier order.
    ThresholdOrder {
        earlier: &'static str,
        later: &'static str,
        earlier_days: f64,
        later_days: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ThresholdOrder {
                earlier,
                later,
                earlier_days,
                later_days,
            } => write!(
                f,
                "lifecycle threshold order: {later} ({later_days} days) must exceed {earlier} ({earlier_days} days)"
            ),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
