use chrono::NaiveDate;
use small_utils::date::is_leap_year;

#[test]
fn test_known_leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
}

#[test]
fn test_divisibility_rule_over_range() {
    for year in -800i64..=2400 {
        let expected = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        assert_eq!(is_leap_year(year), expected, "year {}", year);
    }
}

#[test]
fn test_agrees_with_proleptic_gregorian_calendar() {
    // chrono only decides whether February 29 exists in the given year.
    for year in -800i64..=2400 {
        let feb_29 = NaiveDate::from_ymd_opt(year as i32, 2, 29);
        assert_eq!(is_leap_year(year), feb_29.is_some(), "year {}", year);
    }
}
