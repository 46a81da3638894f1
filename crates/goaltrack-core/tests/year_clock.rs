use goaltrack_core::clock::{current_year, year_progress, year_window};
use jiff::Timestamp;

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[test]
fn fraction_is_zero_at_the_year_start() {
    let yp = year_progress(ts("2026-01-01T00:00:00Z"), 2026).unwrap();
    assert_eq!(yp.fraction, 0.0);
    assert_eq!((yp.days, yp.hours, yp.minutes, yp.seconds), (0, 0, 0, 0));
}

#[test]
fn fraction_is_one_hundred_at_the_window_end() {
    let (_, end) = year_window(2026).unwrap();
    let yp = year_progress(end, 2026).unwrap();
    assert_eq!(yp.fraction, 100.0);
    assert_eq!(yp.days, 364);
}

#[test]
fn instants_outside_the_window_clamp() {
    let before = year_progress(ts("2025-12-31T23:59:59Z"), 2026).unwrap();
    assert_eq!(before.fraction, 0.0);

    let after = year_progress(ts("2027-03-01T00:00:00Z"), 2026).unwrap();
    assert_eq!(after.fraction, 100.0);
}

#[test]
fn fraction_is_monotonic_within_the_year() {
    let samples = [
        "2026-01-01T00:00:00Z",
        "2026-01-01T00:00:01Z",
        "2026-02-14T08:30:00Z",
        "2026-06-30T23:59:59Z",
        "2026-07-01T00:00:00Z",
        "2026-11-05T17:45:12Z",
        "2026-12-31T23:59:59Z",
    ];
    let fractions: Vec<f64> = samples
        .iter()
        .map(|s| year_progress(ts(s), 2026).unwrap().fraction)
        .collect();
    for pair in fractions.windows(2) {
        assert!(pair[0] <= pair[1], "fraction went backwards: {pair:?}");
    }
}

#[test]
fn elapsed_decomposes_into_exact_units() {
    // One day, three hours, four minutes, five seconds into the year.
    let yp = year_progress(ts("2026-01-02T03:04:05Z"), 2026).unwrap();
    assert_eq!((yp.days, yp.hours, yp.minutes, yp.seconds), (1, 3, 4, 5));
}

#[test]
fn leap_year_window_spans_366_days() {
    let (_, end) = year_window(2028).unwrap();
    let yp = year_progress(end, 2028).unwrap();
    assert_eq!(yp.days, 365);
}

#[test]
fn fraction_displays_with_six_significant_digits() {
    let start = year_progress(ts("2026-01-01T00:00:00Z"), 2026).unwrap();
    assert_eq!(start.fraction_display(), "0.00000");

    let end = year_progress(ts("2027-01-01T00:00:00Z"), 2026).unwrap();
    assert_eq!(end.fraction_display(), "100.000");

    let mid = year_progress(ts("2026-08-25T00:00:00Z"), 2026).unwrap();
    let shown = mid.fraction_display();
    // Six significant digits: two integer digits plus four decimals.
    assert_eq!(shown.len(), 7);
    assert!(shown.contains('.'));
}

fn significant_digits(shown: &str) -> usize {
    shown
        .chars()
        .filter(|c| c.is_ascii_digit())
        .skip_while(|c| *c == '0')
        .count()
}

#[test]
fn fractions_below_one_percent_keep_six_significant_digits() {
    // Just under a day in: the fraction is ~0.27%, where the leading zero
    // does not count as a significant digit.
    let yp = year_progress(ts("2026-01-01T23:40:00Z"), 2026).unwrap();
    let shown = yp.fraction_display();
    assert!(shown.starts_with("0.2"), "unexpected rendering: {shown:?}");
    assert!(
        significant_digits(&shown) >= 6,
        "expected >= 6 significant digits, got {} in {shown:?}",
        significant_digits(&shown)
    );

    // One second into the year the fraction is a few millionths of a
    // percent; the display keeps widening to hold six digits.
    let yp = year_progress(ts("2026-01-01T00:00:01Z"), 2026).unwrap();
    let shown = yp.fraction_display();
    assert!(shown.starts_with("0.0000"), "unexpected rendering: {shown:?}");
    assert!(
        significant_digits(&shown) >= 6,
        "expected >= 6 significant digits, got {} in {shown:?}",
        significant_digits(&shown)
    );
}

#[test]
fn current_year_is_read_in_utc() {
    assert_eq!(current_year(ts("2026-08-25T10:00:00Z")), 2026);
    // The UTC date decides, even an instant before midnight.
    assert_eq!(current_year(ts("2026-12-31T23:59:59Z")), 2026);
    assert_eq!(current_year(ts("2027-01-01T00:00:00Z")), 2027);
}
