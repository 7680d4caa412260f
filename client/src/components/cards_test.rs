use super::*;

#[test]
fn fit_score_nine_and_ten_read_as_strong() {
    assert_eq!(fit_score_class("9/10 - Strong alignment"), "badge badge--strong");
    assert_eq!(fit_score_class("10/10 - Integrated strategy"), "badge badge--strong");
}

#[test]
fn fit_score_four_or_below_reads_as_weak() {
    assert_eq!(fit_score_class("4/10 - Gap between ambition and validation"), "badge badge--weak");
    assert_eq!(fit_score_class("3/10"), "badge badge--weak");
}

#[test]
fn fit_score_middle_band_reads_as_middling() {
    assert_eq!(fit_score_class("7/10 - Solid"), "badge badge--middling");
}

#[test]
fn unparseable_score_falls_back_to_plain_badge() {
    assert_eq!(fit_score_class("n/a"), "badge");
}
