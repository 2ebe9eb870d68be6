use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Trailing window picked in the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RangeSelection {
    #[default]
    Last7Days,
    Last30Days,
    AllTime,
}

impl RangeSelection {
    pub const ALL: [RangeSelection; 3] = [
        RangeSelection::Last7Days,
        RangeSelection::Last30Days,
        RangeSelection::AllTime,
    ];

    /// Window length in days, `None` for all time.
    pub fn window_days(self) -> Option<u32> {
        match self {
            RangeSelection::Last7Days => Some(7),
            RangeSelection::Last30Days => Some(30),
            RangeSelection::AllTime => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RangeSelection::Last7Days => "7 days",
            RangeSelection::Last30Days => "30 days",
            RangeSelection::AllTime => "All time",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RangeSelection::Last7Days => RangeSelection::Last30Days,
            RangeSelection::Last30Days => RangeSelection::AllTime,
            RangeSelection::AllTime => RangeSelection::Last7Days,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            RangeSelection::Last7Days => RangeSelection::AllTime,
            RangeSelection::Last30Days => RangeSelection::Last7Days,
            RangeSelection::AllTime => RangeSelection::Last30Days,
        }
    }
}

impl fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            RangeSelection::Last7Days => "7d",
            RangeSelection::Last30Days => "30d",
            RangeSelection::AllTime => "all",
        };
        f.write_str(key)
    }
}

impl FromStr for RangeSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "7" | "7d" | "week" => Ok(RangeSelection::Last7Days),
            "30" | "30d" | "month" => Ok(RangeSelection::Last30Days),
            "all" | "all-time" | "alltime" => Ok(RangeSelection::AllTime),
            other => Err(anyhow!("Unknown range '{}' (expected 7d, 30d or all)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_aliases() {
        assert_eq!("7d".parse::<RangeSelection>().unwrap(), RangeSelection::Last7Days);
        assert_eq!("Month".parse::<RangeSelection>().unwrap(), RangeSelection::Last30Days);
        assert_eq!("all".parse::<RangeSelection>().unwrap(), RangeSelection::AllTime);
        assert!("90d".parse::<RangeSelection>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for selection in RangeSelection::ALL {
            assert_eq!(selection.to_string().parse::<RangeSelection>().unwrap(), selection);
        }
    }

    #[test]
    fn test_cycle_visits_every_range() {
        let start = RangeSelection::Last7Days;
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.previous(), RangeSelection::AllTime);
        assert_eq!(start.next().previous(), start);
    }
}
