use parkvisits_core::{ModelError, ModelErrorKind, NationalPark, Registry, Trip, Visitor};

struct Fixture {
    registry: Registry,
    visitor: Visitor,
    park: NationalPark,
}

fn fixture() -> Fixture {
    let mut registry = Registry::new();
    let visitor = Visitor::new("Ivy").expect("valid visitor");
    let park = NationalPark::new(&mut registry, "Death Valley").expect("valid park");
    Fixture {
        registry,
        visitor,
        park,
    }
}

#[test]
fn trip_new_links_both_sides_exactly_once() {
    let Fixture {
        mut registry,
        visitor,
        park,
    } = fixture();

    let trip = Trip::new(&mut registry, &visitor, &park, "2024-01-01", "2024-01-10")
        .expect("valid trip");

    assert_eq!(trip.visitor(), visitor);
    assert_eq!(trip.national_park(), park);
    assert_eq!(trip.start_date(), "2024-01-01");
    assert_eq!(trip.end_date(), "2024-01-10");
    assert_eq!(registry.trips(), &[trip.clone()]);
    assert_eq!(visitor.trips(&registry).iter().filter(|t| **t == trip).count(), 1);
    assert_eq!(park.trips(&registry).iter().filter(|t| **t == trip).count(), 1);
}

#[test]
fn trip_new_rejects_short_dates_without_registering() {
    let Fixture {
        mut registry,
        visitor,
        park,
    } = fixture();

    let start_err = Trip::new(&mut registry, &visitor, &park, "2024-1", "2024-01-10")
        .expect_err("start date under 7 chars");
    assert_eq!(
        start_err,
        ModelError::OutOfRange {
            field: "start_date",
            min: 7,
            max: None,
            actual: 6,
        }
    );

    let end_err = Trip::new(&mut registry, &visitor, &park, "2024-01-01", "")
        .expect_err("empty end date");
    assert_eq!(end_err.field(), "end_date");
    assert_eq!(end_err.kind(), ModelErrorKind::OutOfRange);

    assert!(registry.trips().is_empty());
}

#[test]
fn trip_dates_are_not_parsed() {
    let Fixture {
        mut registry,
        visitor,
        park,
    } = fixture();

    let trip = Trip::new(&mut registry, &visitor, &park, "someday", "later on")
        .expect("free-form dates of 7+ chars");
    assert_eq!(trip.start_date(), "someday");
}

#[test]
fn trip_new_rejects_park_from_other_registry() {
    let Fixture {
        mut registry,
        visitor,
        ..
    } = fixture();
    let mut other = Registry::new();
    let foreign = NationalPark::new(&mut other, "Haleakala").expect("valid park");

    let err = Trip::new(&mut registry, &visitor, &foreign, "2024-01-01", "2024-01-10")
        .expect_err("foreign park");
    assert_eq!(err.kind(), ModelErrorKind::TypeMismatch);
    assert!(registry.trips().is_empty());
    assert!(other.trips().is_empty());
}

#[test]
fn setters_revalidate_and_apply() {
    let Fixture {
        mut registry,
        visitor,
        park,
    } = fixture();
    let trip = Trip::new(&mut registry, &visitor, &park, "2024-01-01", "2024-01-10")
        .expect("valid trip");
    let other_visitor = Visitor::new("Max").expect("valid visitor");
    let other_park = NationalPark::new(&mut registry, "Joshua Tree").expect("valid park");

    trip.set_visitor(&other_visitor);
    trip.set_national_park(&other_park).expect("registered park");
    trip.set_start_date("2024-02-01").expect("valid start");
    trip.set_end_date("2024-02-09").expect("valid end");

    assert_eq!(trip.visitor(), other_visitor);
    assert_eq!(trip.national_park(), other_park);
    assert_eq!(trip.start_date(), "2024-02-01");
    assert_eq!(trip.end_date(), "2024-02-09");

    assert!(visitor.trips(&registry).is_empty());
    assert_eq!(other_visitor.trips(&registry), vec![trip.clone()]);
    assert!(park.trips(&registry).is_empty());
    assert_eq!(other_park.total_visits(&registry), 1);
}

#[test]
fn failed_setters_keep_previous_values() {
    let Fixture {
        mut registry,
        visitor,
        park,
    } = fixture();
    let trip = Trip::new(&mut registry, &visitor, &park, "2024-01-01", "2024-01-10")
        .expect("valid trip");
    let mut other = Registry::new();
    let foreign = NationalPark::new(&mut other, "Kenai Fjords").expect("valid park");

    let park_err = trip
        .set_national_park(&foreign)
        .expect_err("foreign park");
    assert_eq!(park_err.kind(), ModelErrorKind::TypeMismatch);
    assert!(trip.set_start_date("short").is_err());
    assert!(trip.set_end_date("tiny").is_err());

    assert_eq!(trip.national_park(), park);
    assert_eq!(trip.start_date(), "2024-01-01");
    assert_eq!(trip.end_date(), "2024-01-10");
}

#[test]
fn trip_clones_share_updates() {
    let Fixture {
        mut registry,
        visitor,
        park,
    } = fixture();
    let trip = Trip::new(&mut registry, &visitor, &park, "2024-01-01", "2024-01-10")
        .expect("valid trip");

    trip.set_end_date("2024-01-12").expect("valid end");

    assert_eq!(registry.trips()[0].end_date(), "2024-01-12");
}
