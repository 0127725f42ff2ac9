// ABOUTME: Integration tests for training pace derivation from a race pace
// ABOUTME: Reference pace table, unit handling, and ordering of the derived paces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride_coach::intelligence::{
    get_paces_from_race_pace, get_paces_from_race_pace_in, parse_pace, TrainingPaceTable,
};
use stride_coach::models::DistanceUnit;

#[test]
fn test_reference_table_from_five_thirty() {
    let table = get_paces_from_race_pace(330.0).to_table();
    assert_eq!(
        table,
        TrainingPaceTable {
            easy: "7:00".to_owned(),
            marathon: "5:45".to_owned(),
            threshold: "5:15".to_owned(),
            interval: "5:00".to_owned(),
            race: "5:30".to_owned(),
        }
    );
}

#[test]
fn test_parsed_race_pace_feeds_the_table() {
    let paces = get_paces_from_race_pace(parse_pace("5:30") as f64);
    assert_eq!(paces.race.whole_seconds(), 330);
    assert_eq!(paces.easy.unit, DistanceUnit::Miles);
}

#[test]
fn test_paces_are_ordered_slowest_to_fastest() {
    for race_pace in [240.0, 300.0, 330.0, 420.0, 540.0] {
        let paces = get_paces_from_race_pace(race_pace);
        assert!(paces.easy.seconds >= paces.marathon.seconds);
        assert!(paces.marathon.seconds >= paces.race.seconds);
        assert!(paces.race.seconds >= paces.threshold.seconds);
        assert!(paces.threshold.seconds >= paces.interval.seconds);
    }
}

#[test]
fn test_every_pace_lands_on_a_quarter_minute() {
    let paces = get_paces_from_race_pace_in(DistanceUnit::Kilometers, 263.0);
    for pace in [paces.easy, paces.marathon, paces.threshold, paces.interval, paces.race] {
        assert_eq!(pace.whole_seconds() % 15, 0);
        assert_eq!(pace.unit, DistanceUnit::Kilometers);
    }
}

#[test]
fn test_table_serializes_with_named_fields() {
    let json = serde_json::to_value(get_paces_from_race_pace(330.0).to_table()).unwrap();
    assert_eq!(json["easy"], "7:00");
    assert_eq!(json["threshold"], "5:15");
}

#[test]
fn test_mile_paces_convert_to_kilometers() {
    let per_mile = get_paces_from_race_pace(330.0);
    let per_km = per_mile.converted_to(DistanceUnit::Kilometers);

    assert_eq!(per_km.race.unit, DistanceUnit::Kilometers);
    let table = per_km.to_table();
    assert_eq!(table.easy, "4:21");
    assert_eq!(table.race, "3:25");
    assert_eq!(table.interval, "3:06");

    let back = per_km.converted_to(DistanceUnit::Miles);
    assert_eq!(back.easy.whole_seconds(), 420);
    assert_eq!(back, back.converted_to(DistanceUnit::Miles));
}
