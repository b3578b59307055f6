//! Reporting period selector for the analytics screen.

use std::fmt;
use std::str::FromStr;

/// Time window the appointment analytics are aggregated over.
///
/// Serialized as the lowercase query value (`?period=month`) and parsed from
/// CLI arguments and the interactive selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingPeriod {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportingPeriod {
    /// All periods in selector order.
    pub const ALL: [ReportingPeriod; 4] = [Self::Week, Self::Month, Self::Quarter, Self::Year];

    /// The query-string value expected by the backend.
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Human-readable selector label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "Last Week",
            Self::Month => "Last Month",
            Self::Quarter => "Last Quarter",
            Self::Year => "Last Year",
        }
    }
}

impl fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for ReportingPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            other => Err(format!(
                "invalid period '{other}' (expected week, month, quarter or year)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values() {
        assert_eq!(ReportingPeriod::Week.as_query(), "week");
        assert_eq!(ReportingPeriod::Month.as_query(), "month");
        assert_eq!(ReportingPeriod::Quarter.as_query(), "quarter");
        assert_eq!(ReportingPeriod::Year.as_query(), "year");
    }

    #[test]
    fn test_parse_roundtrip() {
        for period in ReportingPeriod::ALL {
            assert_eq!(period.as_query().parse::<ReportingPeriod>(), Ok(period));
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Month".parse::<ReportingPeriod>(), Ok(ReportingPeriod::Month));
        assert_eq!("WEEK".parse::<ReportingPeriod>(), Ok(ReportingPeriod::Week));
    }

    #[test]
    fn test_parse_invalid() {
        assert!("decade".parse::<ReportingPeriod>().is_err());
    }

    #[test]
    fn test_default_is_month() {
        assert_eq!(ReportingPeriod::default(), ReportingPeriod::Month);
    }
}
