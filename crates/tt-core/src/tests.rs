//! Unit tests for tt-core primitives.

#[cfg(test)]
mod codec {
    use crate::{format_clock, parse_clock, FormatError, Minute, MINUTES_PER_DAY};

    #[test]
    fn parse_padded() {
        assert_eq!(parse_clock("08:00").unwrap(), Minute(480));
        assert_eq!(parse_clock("23:59").unwrap(), Minute(1_439));
    }

    #[test]
    fn parse_unpadded_fields() {
        // hours=8, minutes=5
        assert_eq!(parse_clock("8:5").unwrap(), Minute(485));
    }

    #[test]
    fn parse_has_no_range_check() {
        assert_eq!(parse_clock("25:00").unwrap(), Minute(1_500));
        assert_eq!(parse_clock("0:75").unwrap(), Minute(75));
    }

    #[test]
    fn parse_tolerates_field_whitespace() {
        assert_eq!(parse_clock(" 8: 05 ").unwrap(), Minute(485));
    }

    #[test]
    fn parse_rejects_separator_count() {
        assert_eq!(parse_clock("0800"), Err(FormatError::ClockSeparator("0800".into())));
        assert!(matches!(parse_clock("08:00:00"), Err(FormatError::ClockSeparator(_))));
        assert!(matches!(parse_clock(""), Err(FormatError::ClockSeparator(_))));
    }

    #[test]
    fn parse_rejects_non_integer_fields() {
        assert_eq!(
            parse_clock("ab:10"),
            Err(FormatError::ClockField { text: "ab:10".into(), field: "hours" }),
        );
        assert_eq!(
            parse_clock("8:1.5"),
            Err(FormatError::ClockField { text: "8:1.5".into(), field: "minutes" }),
        );
        assert!(matches!(parse_clock("8:"), Err(FormatError::ClockField { .. })));
    }

    #[test]
    fn parse_rejects_offsets_beyond_i64() {
        // Fits as an hours field, overflows once scaled to minutes.
        assert_eq!(
            parse_clock("153722867280912931:0"),
            Err(FormatError::ClockRange("153722867280912931:0".into())),
        );
        let max_hours = i64::MAX / 60;
        assert!(matches!(
            parse_clock(&format!("{max_hours}:59")),
            Err(FormatError::ClockRange(_)),
        ));
        assert_eq!(parse_clock(&format!("{max_hours}:0")).unwrap(), Minute(max_hours * 60));
    }

    #[test]
    fn format_zero_pads() {
        assert_eq!(format_clock(Minute(0)), "00:00");
        assert_eq!(format_clock(Minute(485)), "08:05");
    }

    #[test]
    fn format_wraps_at_midnight() {
        assert_eq!(format_clock(Minute(MINUTES_PER_DAY)), "00:00");
        assert_eq!(format_clock(Minute(1_445)), "00:05");
        assert_eq!(format_clock(Minute(-5)), "23:55");
    }

    #[test]
    fn round_trip_within_one_day() {
        for m in 0..MINUTES_PER_DAY {
            assert_eq!(parse_clock(&format_clock(Minute(m))).unwrap(), Minute(m));
        }
    }

    #[test]
    fn from_str_delegates() {
        let m: Minute = "12:30".parse().unwrap();
        assert_eq!(m, Minute(750));
    }

    #[test]
    fn day_index() {
        assert_eq!(Minute(0).day(), 0);
        assert_eq!(Minute(1_439).day(), 0);
        assert_eq!(Minute(1_440).day(), 1);
        assert_eq!(Minute(-1).day(), -1);
    }

    #[test]
    fn arithmetic() {
        assert_eq!(Minute(480) + 5, Minute(485));
        assert_eq!(Minute(480) - 2, Minute(478));
        assert_eq!(Minute(490).since(Minute(480)), 10);
    }

    #[test]
    fn arithmetic_saturates() {
        assert_eq!(Minute(i64::MAX - 3) + 10, Minute(i64::MAX));
        assert_eq!(Minute(i64::MIN + 1) - 5, Minute(i64::MIN));
        assert_eq!(Minute(i64::MAX).since(Minute(-1)), i64::MAX);
    }
}

#[cfg(test)]
mod ids {
    use crate::{FormatError, Station, TrainId};

    #[test]
    fn parse_trims() {
        assert_eq!(Station::parse("  A ").unwrap(), Station::new("A"));
        assert_eq!(TrainId::parse("T1\t").unwrap().as_str(), "T1");
    }

    #[test]
    fn parse_rejects_blank() {
        assert_eq!(Station::parse("   "), Err(FormatError::BlankToken { what: "station" }));
        assert_eq!(TrainId::parse(""), Err(FormatError::BlankToken { what: "train id" }));
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Station::new("A") < Station::new("B"));
        assert!(TrainId::new("T10") < TrainId::new("T2"));
    }

    #[test]
    fn display() {
        assert_eq!(Station::new("Central").to_string(), "Central");
    }
}

#[cfg(test)]
mod config {
    use crate::SchedulerConfig;

    #[test]
    fn defaults() {
        let c = SchedulerConfig::default();
        assert_eq!(c.dwell(), 2);
        assert_eq!(c.headway(), 2);
    }
}
