use super::*;

#[test]
fn count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(15_420), "15,420");
    assert_eq!(format_count(2_995_000), "2,995,000");
}

#[test]
fn count_handles_negatives() {
    assert_eq!(format_count(-1_845), "-1,845");
    assert_eq!(format_count(-7), "-7");
}

#[test]
fn pkr_rounds_to_whole_rupees() {
    assert_eq!(format_pkr(18_450.0), "PKR 18,450");
    assert_eq!(format_pkr(742_000.49), "PKR 742,000");
    assert_eq!(format_pkr(742_000.5), "PKR 742,001");
}

#[test]
fn exact_pkr_keeps_paisa() {
    assert_eq!(format_pkr_exact(2.43), "PKR 2.43");
    assert_eq!(format_pkr_exact(18_450.0), "PKR 18450.00");
}

#[test]
fn percent_keeps_one_decimal() {
    assert_eq!(format_percent(8.0), "8.0%");
    assert_eq!(format_percent(2.22), "2.2%");
    assert_eq!(format_percent(42.56), "42.6%");
}

#[test]
fn ratio_keeps_two_decimals() {
    assert_eq!(format_ratio(3.64), "3.64x");
    assert_eq!(format_ratio(6.0), "6.00x");
}

#[test]
fn durations_split_into_minutes_and_seconds() {
    assert_eq!(format_duration_secs(45), "45s");
    assert_eq!(format_duration_secs(60), "1m");
    assert_eq!(format_duration_secs(185), "3m 5s");
    assert_eq!(format_duration_secs(240), "4m");
}
