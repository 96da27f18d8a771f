//! Look-back intervals for power queries.

use std::fmt;
use std::str::FromStr;

use crate::error::{ClientError, Result};

/// Look-back window for a power query.
///
/// The Papillon master reports power readings between `starttime` and
/// `endtime`. `endtime` is always the wall clock at the moment of the call;
/// `starttime` is `endtime` minus the interval length. The wire codes 0, 1
/// and 2 come from the API documentation; any other code is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    /// One hour look-back (code 0).
    #[default]
    OneHour,
    /// Twelve hour look-back (code 1).
    TwelveHours,
    /// Twenty-four hour look-back (code 2).
    TwentyFourHours,
}

impl Interval {
    /// Build an interval from its wire code.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::OneHour),
            1 => Ok(Self::TwelveHours),
            2 => Ok(Self::TwentyFourHours),
            other => Err(ClientError::InvalidInterval(other.to_string())),
        }
    }

    /// The wire code for this interval.
    pub fn code(self) -> i64 {
        match self {
            Self::OneHour => 0,
            Self::TwelveHours => 1,
            Self::TwentyFourHours => 2,
        }
    }

    /// Length of the look-back window in seconds.
    pub fn seconds(self) -> i64 {
        match self {
            Self::OneHour => 3_600,
            Self::TwelveHours => 43_200,
            Self::TwentyFourHours => 86_400,
        }
    }

    /// Start of the window ending at `now` (Unix seconds).
    pub fn window_start(self, now: i64) -> i64 {
        now - self.seconds()
    }

    /// The `(starttime, endtime)` pair for a window ending at `now`.
    pub fn window(self, now: i64) -> (i64, i64) {
        (self.window_start(now), now)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OneHour => "1h",
            Self::TwelveHours => "12h",
            Self::TwentyFourHours => "24h",
        };
        f.write_str(label)
    }
}

impl FromStr for Interval {
    type Err = ClientError;

    /// Accepts the human labels (`1h`, `12h`, `24h`) and the wire codes.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1h" | "0" => Ok(Self::OneHour),
            "12h" | "1" => Ok(Self::TwelveHours),
            "24h" | "2" => Ok(Self::TwentyFourHours),
            other => Err(ClientError::InvalidInterval(other.to_string())),
        }
    }
}
