use chrono::{NaiveTime, Weekday};
use coursecat::CatalogError;
use coursecat::period::{MeetingType, Period};
use coursecat::tag::{Element, FromTag};

fn period(kind: &str, start: &str, end: &str, days: &[&str]) -> Element {
    let mut tag = Element::new("period")
        .with_attribute("type", kind)
        .with_attribute("instructor", "  Smith ")
        .with_attribute("start", start)
        .with_attribute("end", end)
        .with_attribute("location", " DCC 308\n");
    for day in days {
        tag = tag.with_child(Element::new("day").with_text(*day));
    }
    tag
}

#[test]
fn announced_period_reads_times_and_days() {
    let p = Period::from_tag(&period("LEC", "900", "950", &["0", "2", "4"])).expect("period");
    assert!(!p.tba());
    assert_eq!(p.start(), Some(900));
    assert_eq!(p.end(), Some(950));
    assert_eq!(p.days(), vec!["Monday", "Wednesday", "Friday"]);
    assert_eq!(p.int_days(), vec![0, 2, 4]);
    assert_eq!(p.weekdays(), &[Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    assert_eq!(p.instructor(), "Smith");
    assert_eq!(p.location(), "DCC 308");
    assert_eq!(p.start_time(), NaiveTime::from_hms_opt(9, 0, 0));
    assert_eq!(p.end_time(), NaiveTime::from_hms_opt(9, 50, 0));
}

#[test]
fn sentinel_times_leave_period_unannounced() {
    let p = Period::from_tag(&period("LEC", "** TBA **", "** TBA **", &[])).expect("period");
    assert!(p.tba());
    assert_eq!(p.start(), None);
    assert_eq!(p.end(), None);
    assert_eq!(p.start_time(), None);
    // one numeric bound is not enough, both stay absent
    let p = Period::from_tag(&period("LEC", "1000", "** TBA **", &[])).expect("period");
    assert!(p.tba());
    assert_eq!(p.start(), None);
}

#[test]
fn duplicate_days_are_kept_in_order() {
    let p = Period::from_tag(&period("LAB", "1400", "1550", &["3", " 1 ", "3"])).expect("period");
    assert_eq!(p.days(), vec!["Thursday", "Tuesday", "Thursday"]);
}

#[test]
fn type_codes_are_case_sensitive() {
    let lec = Period::from_tag(&period("LEC", "900", "950", &[])).unwrap();
    assert!(lec.is_lecture());
    assert_eq!(lec.meeting_type(), MeetingType::Lecture);
    let lower = Period::from_tag(&period("lec", "900", "950", &[])).unwrap();
    assert!(!lower.is_lecture());
    assert_eq!(lower.meeting_type(), MeetingType::Other("lec".to_string()));
    assert!(Period::from_tag(&period("STU", "900", "950", &[])).unwrap().is_studio());
    assert!(Period::from_tag(&period("LAB", "900", "950", &[])).unwrap().is_lab());
    assert!(Period::from_tag(&period("TES", "900", "950", &[])).unwrap().is_testing_period());
    assert!(Period::from_tag(&period("REC", "900", "950", &[])).unwrap().is_recitation());
}

#[test]
fn unknown_child_is_a_schema_violation() {
    let tag = period("LEC", "900", "950", &["0"]).with_child(Element::new("room").at(7, 3));
    match Period::from_tag(&tag) {
        Err(CatalogError::UnexpectedTag { parent, found }) => {
            assert_eq!(parent, "period");
            assert_eq!(found.kind, "room");
            assert_eq!(found.position, Some((7, 3)));
        }
        other => panic!("expected unexpected tag error, got {other:?}"),
    }
}

#[test]
fn bad_day_codes_are_rejected() {
    let err = Period::from_tag(&period("LEC", "900", "950", &["M"])).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDay { ref value, .. } if value == "M"), "{err}");
    let err = Period::from_tag(&period("LEC", "900", "950", &["9"])).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDay { .. }));
}

#[test]
fn missing_attribute_is_reported() {
    let tag = Element::new("period").with_attribute("type", "LEC");
    let err = Period::from_tag(&tag).unwrap_err();
    match err {
        CatalogError::MissingAttribute { attribute, tag } => {
            assert_eq!(attribute, "instructor");
            assert_eq!(tag.kind, "period");
        }
        other => panic!("expected missing attribute, got {other:?}"),
    }
}

#[test]
fn equal_tags_give_equal_periods() {
    let a = Period::from_tag(&period("LEC", "900", "950", &["0", "2"])).unwrap();
    let b = Period::from_tag(&period("LEC", "900", "950", &["0", "2"])).unwrap();
    let c = Period::from_tag(&period("LEC", "900", "950", &["2", "0"])).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn out_of_range_times_have_no_time_of_day() {
    let p = Period::from_tag(&period("LEC", "429496730500", "429496730550", &[])).expect("period");
    assert!(!p.tba(), "numeric times are still announced");
    assert_eq!(p.start(), Some(429496730500));
    assert_eq!(p.start_time(), None);
    assert_eq!(p.end_time(), None);

    let p = Period::from_tag(&period("LEC", "2460", "-5", &[])).expect("period");
    assert_eq!(p.start_time(), None, "minute 60 is not a time of day");
    assert_eq!(p.end_time(), None, "negative times are not a time of day");
}
