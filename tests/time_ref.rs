#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
    use okr::libs::time_ref::{self, TimeInterval, TimeRefError, TimeScale};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_micro_opt(h, min, s, micro)
            .unwrap()
    }

    fn start_of(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at(y, m, d, 0, 0, 0, 0)
    }

    fn end_of(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at(y, m, d, 23, 59, 59, 999_999)
    }

    fn tick() -> Duration {
        Duration::microseconds(1)
    }

    // === ROUND TRIP ===

    #[test]
    fn test_resolve_matches_numeric_entry_points() {
        for year in [1999, 2020, 2024, 2025, 2100] {
            assert_eq!(
                time_ref::resolve(&format!("{}", year), TimeScale::Year).unwrap(),
                time_ref::year_interval(year).unwrap()
            );
            for quarter in 1..=4 {
                let reference = time_ref::reference_for(TimeScale::Quarter, year, quarter).unwrap();
                assert_eq!(
                    time_ref::resolve(&reference, TimeScale::Quarter).unwrap(),
                    time_ref::quarter_interval(year, quarter).unwrap()
                );
            }
            for month in 1..=12 {
                let reference = time_ref::reference_for(TimeScale::Month, year, month).unwrap();
                assert_eq!(
                    time_ref::resolve(&reference, TimeScale::Month).unwrap(),
                    time_ref::month_interval(year, month).unwrap()
                );
            }
            for week in 1..=time_ref::iso_weeks_in_year(year).unwrap() {
                let reference = time_ref::reference_for(TimeScale::Week, year, week).unwrap();
                assert_eq!(
                    time_ref::resolve(&reference, TimeScale::Week).unwrap(),
                    time_ref::week_interval(year, week).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_week_reference_with_and_without_padding() {
        let padded = time_ref::resolve("2025-W07", TimeScale::Week).unwrap();
        let short = time_ref::resolve("2025-W7", TimeScale::Week).unwrap();
        assert_eq!(padded, short);
        assert_eq!(padded, time_ref::week_interval(2025, 7).unwrap());
    }

    // === CONTIGUITY ===

    #[test]
    fn test_months_partition_the_year() {
        for year in [2023, 2024, 2025] {
            let months: Vec<TimeInterval> = (1..=12).map(|m| time_ref::month_interval(year, m).unwrap()).collect();
            let whole = time_ref::year_interval(year).unwrap();

            assert_eq!(months[0].start, whole.start);
            assert_eq!(months[11].end, whole.end);
            for pair in months.windows(2) {
                assert_eq!(pair[0].end + tick(), pair[1].start);
            }
        }
    }

    #[test]
    fn test_weeks_are_contiguous_across_years() {
        let last_2024 = time_ref::week_interval(2024, time_ref::iso_weeks_in_year(2024).unwrap()).unwrap();
        let first_2025 = time_ref::week_interval(2025, 1).unwrap();
        assert_eq!(last_2024.end + tick(), first_2025.start);

        let last_2026 = time_ref::week_interval(2026, 53).unwrap();
        let first_2027 = time_ref::week_interval(2027, 1).unwrap();
        assert_eq!(last_2026.end + tick(), first_2027.start);
    }

    // === QUARTER COMPOSITION ===

    #[test]
    fn test_quarter_spans_three_months() {
        for year in [2023, 2024] {
            for quarter in 1..=4 {
                let q = time_ref::quarter_interval(year, quarter).unwrap();
                let first = time_ref::quarter_start_month(quarter).unwrap();
                assert_eq!(q.start, time_ref::month_interval(year, first).unwrap().start);
                assert_eq!(q.end, time_ref::month_interval(year, first + 2).unwrap().end);
            }
        }
    }

    #[test]
    fn test_quarter_start_months() {
        let months: Vec<u32> = (1..=4).map(|q| time_ref::quarter_start_month(q).unwrap()).collect();
        assert_eq!(months, vec![1, 4, 7, 10]);
        assert!(matches!(
            time_ref::quarter_start_month(0),
            Err(TimeRefError::Range { field: "quarter", .. })
        ));
    }

    #[test]
    fn test_leap_february() {
        assert_eq!(time_ref::month_interval(2024, 2).unwrap().end, end_of(2024, 2, 29));
        assert_eq!(time_ref::month_interval(2025, 2).unwrap().end, end_of(2025, 2, 28));
        assert_eq!(time_ref::quarter_interval(2024, 1).unwrap().days(), 91);
        assert_eq!(time_ref::quarter_interval(2025, 1).unwrap().days(), 90);
    }

    // === ISO WEEKS ===

    #[test]
    fn test_week_invariants() {
        for year in 1990..=2040 {
            for week in 1..=time_ref::iso_weeks_in_year(year).unwrap() {
                let interval = time_ref::week_interval(year, week).unwrap();
                assert_eq!(interval.start.weekday(), Weekday::Mon, "{}-W{}", year, week);
                assert_eq!(interval.end.weekday(), Weekday::Sun, "{}-W{}", year, week);
                assert_eq!((interval.end.date() - interval.start.date()).num_days(), 6);
                assert_eq!(interval.start.time(), start_of(2000, 1, 1).time());
                assert_eq!(interval.end.time(), end_of(2000, 1, 1).time());
            }
        }
    }

    #[test]
    fn test_weeks_agree_with_chrono_iso_calendar() {
        for year in 1990..=2040 {
            for week in 1..=time_ref::iso_weeks_in_year(year).unwrap() {
                let expected = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon).unwrap();
                assert_eq!(time_ref::week_interval(year, week).unwrap().start.date(), expected);
            }
        }
    }

    #[test]
    fn test_week_one_may_start_in_previous_year() {
        // 2025-01-01 is a Wednesday.
        let w1 = time_ref::week_interval(2025, 1).unwrap();
        assert_eq!(w1.start, start_of(2024, 12, 30));
        assert_eq!(w1.end, end_of(2025, 1, 5));

        // 2021-01-01 is a Friday, so week 1 starts after it.
        let w1 = time_ref::week_interval(2021, 1).unwrap();
        assert_eq!(w1.start, start_of(2021, 1, 4));

        // 2024-01-01 is a Monday.
        let w1 = time_ref::week_interval(2024, 1).unwrap();
        assert_eq!(w1.start, start_of(2024, 1, 1));
    }

    #[test]
    fn test_iso_weeks_in_year() {
        assert_eq!(time_ref::iso_weeks_in_year(2020).unwrap(), 53);
        assert_eq!(time_ref::iso_weeks_in_year(2024).unwrap(), 52);
        assert_eq!(time_ref::iso_weeks_in_year(2025).unwrap(), 52);
        assert_eq!(time_ref::iso_weeks_in_year(2026).unwrap(), 53);
    }

    #[test]
    fn test_week_53() {
        let w53 = time_ref::week_interval(2026, 53).unwrap();
        assert_eq!(w53.start, start_of(2026, 12, 28));
        assert_eq!(w53.end, end_of(2027, 1, 3));

        assert_eq!(
            time_ref::week_interval(2025, 53),
            Err(TimeRefError::Range {
                field: "week",
                value: 53,
                min: 1,
                max: 52
            })
        );
        // Grammatically fine, rejected on resolution.
        assert!(time_ref::validate("2025-W53", TimeScale::Week));
        assert!(matches!(
            time_ref::resolve("2025-W53", TimeScale::Week),
            Err(TimeRefError::Range { field: "week", .. })
        ));
    }

    // === VALIDATION ===

    #[test]
    fn test_validate_accepts_well_formed_references() {
        assert!(time_ref::validate("2024", TimeScale::Year));
        assert!(time_ref::validate("2024-Q1", TimeScale::Quarter));
        assert!(time_ref::validate("2024-Q4", TimeScale::Quarter));
        assert!(time_ref::validate("2025-01", TimeScale::Month));
        assert!(time_ref::validate("2025-12", TimeScale::Month));
        assert!(time_ref::validate("2025-W1", TimeScale::Week));
        assert!(time_ref::validate("2025-W15", TimeScale::Week));
        assert!(time_ref::validate("2025-W53", TimeScale::Week));
        assert!(time_ref::validate("2025-07-15", TimeScale::Day));
        // Grammar only, not the calendar.
        assert!(time_ref::validate("2025-02-31", TimeScale::Day));
    }

    #[test]
    fn test_validate_rejects_malformed_references() {
        assert!(!time_ref::validate("2024-Q5", TimeScale::Quarter));
        assert!(!time_ref::validate("2024-Q0", TimeScale::Quarter));
        assert!(!time_ref::validate("2025-13", TimeScale::Month));
        assert!(!time_ref::validate("2025-00", TimeScale::Month));
        assert!(!time_ref::validate("2025-7", TimeScale::Month));
        assert!(!time_ref::validate("24", TimeScale::Year));
        assert!(!time_ref::validate("20245", TimeScale::Year));
        assert!(!time_ref::validate("2025-W54", TimeScale::Week));
        assert!(!time_ref::validate("2025-W100", TimeScale::Week));
        assert!(!time_ref::validate("2025-07-32", TimeScale::Day));
        assert!(!time_ref::validate("2025-7-15", TimeScale::Day));
        assert!(!time_ref::validate("", TimeScale::Day));
        assert!(!time_ref::validate("invalid", TimeScale::Year));
    }

    #[test]
    fn test_validate_rejects_cross_scale_tokens() {
        let samples = [
            (TimeScale::Year, "2024"),
            (TimeScale::Quarter, "2024-Q4"),
            (TimeScale::Month, "2025-07"),
            (TimeScale::Week, "2025-W15"),
            (TimeScale::Day, "2025-07-15"),
        ];
        for (own_scale, reference) in samples {
            for scale in TimeScale::ALL {
                assert_eq!(time_ref::validate(reference, scale), scale == own_scale, "{} as {}", reference, scale);
            }
        }
    }

    #[test]
    fn test_resolve_fails_with_format_error() {
        assert_eq!(
            time_ref::resolve("invalid", TimeScale::Year),
            Err(TimeRefError::Format {
                reference: "invalid".to_string(),
                scale: TimeScale::Year
            })
        );
        assert!(matches!(
            time_ref::resolve("2024-Q4", TimeScale::Month),
            Err(TimeRefError::Format { .. })
        ));
        assert!(matches!(
            time_ref::resolve("2025-02-30", TimeScale::Day),
            Err(TimeRefError::Format { .. })
        ));
    }

    #[test]
    fn test_format_error_message_names_expected_shape() {
        let err = time_ref::resolve("2025-7", TimeScale::Month).unwrap_err();
        assert_eq!(err.to_string(), "Invalid month reference '2025-7', expected YYYY-MM");
    }

    // === CONCRETE SCENARIOS ===

    #[test]
    fn test_concrete_intervals() {
        let q4 = time_ref::quarter_interval(2024, 4).unwrap();
        assert_eq!(q4.start, start_of(2024, 10, 1));
        assert_eq!(q4.end, end_of(2024, 12, 31));

        let july = time_ref::month_interval(2025, 7).unwrap();
        assert_eq!(july.start, start_of(2025, 7, 1));
        assert_eq!(july.end, end_of(2025, 7, 31));

        let year = time_ref::resolve("2024", TimeScale::Year).unwrap();
        assert_eq!(year.start, start_of(2024, 1, 1));
        assert_eq!(year.end, end_of(2024, 12, 31));

        let w15 = time_ref::week_interval(2025, 15).unwrap();
        assert_eq!(w15.start, start_of(2025, 4, 7));
        assert_eq!(w15.end, end_of(2025, 4, 13));

        let day = time_ref::resolve("2025-07-15", TimeScale::Day).unwrap();
        assert_eq!(day.start, start_of(2025, 7, 15));
        assert_eq!(day.end, end_of(2025, 7, 15));
        assert_eq!(day.days(), 1);
    }

    #[test]
    fn test_numeric_arguments_out_of_range() {
        assert_eq!(
            time_ref::quarter_interval(2024, 5),
            Err(TimeRefError::Range {
                field: "quarter",
                value: 5,
                min: 1,
                max: 4
            })
        );
        assert!(matches!(time_ref::quarter_interval(2024, 0), Err(TimeRefError::Range { .. })));
        assert!(matches!(time_ref::month_interval(2025, 13), Err(TimeRefError::Range { field: "month", .. })));
        assert!(matches!(time_ref::month_interval(2025, 0), Err(TimeRefError::Range { field: "month", .. })));
        assert!(matches!(time_ref::week_interval(2025, 0), Err(TimeRefError::Range { field: "week", .. })));
        assert!(matches!(time_ref::week_interval(2026, 54), Err(TimeRefError::Range { field: "week", .. })));
    }

    #[test]
    fn test_interval_contains_its_bounds_only() {
        let july = time_ref::month_interval(2025, 7).unwrap();
        assert!(july.contains(july.start));
        assert!(july.contains(july.end));
        assert!(!july.contains(july.start - tick()));
        assert!(!july.contains(july.end + tick()));
    }

    // === REFERENCE FORMATTING ===

    #[test]
    fn test_reference_for() {
        assert_eq!(time_ref::reference_for(TimeScale::Year, 2024, 0).unwrap(), "2024");
        assert_eq!(time_ref::reference_for(TimeScale::Quarter, 2024, 3).unwrap(), "2024-Q3");
        assert_eq!(time_ref::reference_for(TimeScale::Month, 2025, 7).unwrap(), "2025-07");
        assert_eq!(time_ref::reference_for(TimeScale::Week, 2025, 7).unwrap(), "2025-W07");
        assert!(matches!(
            time_ref::reference_for(TimeScale::Month, 2025, 13),
            Err(TimeRefError::Range { .. })
        ));
        assert!(matches!(
            time_ref::reference_for(TimeScale::Day, 2025, 7),
            Err(TimeRefError::Format { .. })
        ));
    }

    #[test]
    fn test_current_reference() {
        let now = at(2025, 7, 15, 14, 30, 0, 0);
        assert_eq!(time_ref::current_reference(TimeScale::Day, now), "2025-07-15");
        assert_eq!(time_ref::current_reference(TimeScale::Week, now), "2025-W29");
        assert_eq!(time_ref::current_reference(TimeScale::Month, now), "2025-07");
        assert_eq!(time_ref::current_reference(TimeScale::Quarter, now), "2025-Q3");
        assert_eq!(time_ref::current_reference(TimeScale::Year, now), "2025");
    }

    #[test]
    fn test_current_week_uses_iso_week_year() {
        // Monday 2024-12-30 belongs to 2025-W01.
        let now = at(2024, 12, 30, 9, 0, 0, 0);
        assert_eq!(time_ref::current_reference(TimeScale::Week, now), "2025-W01");
        assert_eq!(time_ref::current_reference(TimeScale::Year, now), "2024");

        // Friday 2021-01-01 belongs to 2020-W53.
        let now = at(2021, 1, 1, 9, 0, 0, 0);
        assert_eq!(time_ref::current_reference(TimeScale::Week, now), "2020-W53");
    }

    #[test]
    fn test_current_quarter_boundaries() {
        let cases = [(1, "Q1"), (3, "Q1"), (4, "Q2"), (6, "Q2"), (7, "Q3"), (9, "Q3"), (10, "Q4"), (12, "Q4")];
        for (month, quarter) in cases {
            let now = start_of(2025, month, 1);
            assert_eq!(
                time_ref::current_reference(TimeScale::Quarter, now),
                format!("2025-{}", quarter)
            );
        }
    }

    #[test]
    fn test_current_interval_contains_now() {
        let instants = [
            at(2024, 12, 30, 0, 0, 0, 0),
            at(2024, 12, 31, 23, 59, 59, 999_999),
            at(2025, 1, 1, 0, 0, 0, 0),
            at(2024, 2, 29, 12, 0, 0, 0),
            at(2026, 12, 31, 18, 0, 0, 0),
        ];
        for now in instants {
            for scale in TimeScale::ALL {
                let interval = time_ref::current_interval(scale, now).unwrap();
                assert!(interval.contains(now), "{} {}", scale, now);
            }
        }
    }

    #[test]
    fn test_span_defaults_to_end_of_containing_period() {
        let start = at(2025, 7, 15, 14, 30, 0, 0);
        let span = time_ref::span_from(TimeScale::Quarter, start, None).unwrap();
        assert_eq!(span.start, start);
        assert_eq!(span.end, end_of(2025, 9, 30));

        let span = time_ref::span_from(TimeScale::Week, start_of(2024, 12, 31), None).unwrap();
        assert_eq!(span.end, end_of(2025, 1, 5));

        let span = time_ref::span_from(TimeScale::Day, start, None).unwrap();
        assert_eq!(span.end, end_of(2025, 7, 15));
    }

    #[test]
    fn test_span_keeps_explicit_end() {
        let start = start_of(2025, 7, 15);
        let end = at(2025, 8, 1, 12, 0, 0, 0);
        let span = time_ref::span_from(TimeScale::Day, start, Some(end)).unwrap();
        assert_eq!(span, TimeInterval { start, end });

        let same = time_ref::span_from(TimeScale::Month, start, Some(start)).unwrap();
        assert_eq!(same.end, start);
    }

    #[test]
    fn test_span_rejects_end_before_start() {
        let start = start_of(2025, 7, 15);
        let end = start - tick();
        assert_eq!(
            time_ref::span_from(TimeScale::Month, start, Some(end)),
            Err(TimeRefError::EndBeforeStart { start, end })
        );
    }

    #[test]
    fn test_scale_from_str() {
        assert_eq!("quarter".parse::<TimeScale>().unwrap(), TimeScale::Quarter);
        assert_eq!(
            "fortnight".parse::<TimeScale>(),
            Err(TimeRefError::UnknownScale("fortnight".to_string()))
        );
        for scale in TimeScale::ALL {
            assert_eq!(scale.to_string().parse::<TimeScale>().unwrap(), scale);
        }
    }
}
