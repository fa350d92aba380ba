use parkvisits_core::{ModelErrorKind, NationalPark, Registry, Trip, Visitor};

fn visit(registry: &mut Registry, visitor: &Visitor, park: &NationalPark) -> Trip {
    Trip::new(registry, visitor, park, "2024-01-01", "2024-01-10").expect("valid trip")
}

#[test]
fn park_new_rejects_short_names_without_registering() {
    let mut registry = Registry::new();

    for name in ["", "A", "Ab"] {
        let err = NationalPark::new(&mut registry, name).expect_err("name under 3 chars");
        assert_eq!(err.kind(), ModelErrorKind::OutOfRange);
    }
    assert!(registry.parks().is_empty());
}

#[test]
fn park_new_appends_in_creation_order() {
    let mut registry = Registry::new();
    let first = NationalPark::new(&mut registry, "Big Bend").expect("valid park");
    let second = NationalPark::new(&mut registry, "Big Bend").expect("valid park");
    let third = NationalPark::new(&mut registry, "Saguaro").expect("valid park");

    assert_eq!(registry.parks(), &[first.clone(), second.clone(), third]);
    assert_ne!(first, second);
    assert_eq!(first.name(), second.name());
}

#[test]
fn park_rename_never_changes_name_or_fails() {
    let mut registry = Registry::new();
    let park = NationalPark::new(&mut registry, "Shenandoah").expect("valid park");

    for attempt in ["Blue Ridge", "", "x"] {
        park.set_name(attempt);
        assert_eq!(park.name(), "Shenandoah");
    }
}

#[test]
fn trips_visitors_and_total_visits() {
    let mut registry = Registry::new();
    let ann = Visitor::new("Ann").expect("valid visitor");
    let bob = Visitor::new("Bob").expect("valid visitor");
    let rainier = NationalPark::new(&mut registry, "Mount Rainier").expect("valid park");
    let olympic = NationalPark::new(&mut registry, "Olympic").expect("valid park");

    let t1 = visit(&mut registry, &bob, &rainier);
    visit(&mut registry, &ann, &olympic);
    let t2 = visit(&mut registry, &ann, &rainier);
    let t3 = visit(&mut registry, &bob, &rainier);

    assert_eq!(rainier.trips(&registry), vec![t1, t2, t3]);
    assert_eq!(rainier.total_visits(&registry), 3);
    assert_eq!(rainier.visitors(&registry), vec![bob, ann.clone()]);
    assert_eq!(olympic.visitors(&registry), vec![ann]);
}

#[test]
fn best_visitor_is_none_without_trips() {
    let mut registry = Registry::new();
    let park = NationalPark::new(&mut registry, "Isle Royale").expect("valid park");

    assert_eq!(park.best_visitor(&registry), None);
    assert_eq!(park.total_visits(&registry), 0);
    assert!(park.visitors(&registry).is_empty());
}

#[test]
fn best_visitor_has_maximum_trip_count() {
    let mut registry = Registry::new();
    let ann = Visitor::new("Ann").expect("valid visitor");
    let bob = Visitor::new("Bob").expect("valid visitor");
    let park = NationalPark::new(&mut registry, "Capitol Reef").expect("valid park");

    visit(&mut registry, &ann, &park);
    visit(&mut registry, &bob, &park);
    visit(&mut registry, &bob, &park);

    assert_eq!(park.best_visitor(&registry), Some(bob));
}

#[test]
fn best_visitor_tie_goes_to_first_seen() {
    let mut registry = Registry::new();
    let ann = Visitor::new("Ann").expect("valid visitor");
    let bob = Visitor::new("Bob").expect("valid visitor");
    let park = NationalPark::new(&mut registry, "Redwood").expect("valid park");

    visit(&mut registry, &bob, &park);
    visit(&mut registry, &ann, &park);
    visit(&mut registry, &ann, &park);
    visit(&mut registry, &bob, &park);

    assert_eq!(park.best_visitor(&registry), Some(bob));
}

#[test]
fn most_visited_is_none_for_empty_registry() {
    let registry = Registry::new();

    assert_eq!(NationalPark::most_visited(&registry), None);
}

#[test]
fn most_visited_matches_manual_max_with_first_tie() {
    let mut registry = Registry::new();
    let visitor = Visitor::new("Rae").expect("valid visitor");
    let quiet = NationalPark::new(&mut registry, "Great Basin").expect("valid park");
    let busy = NationalPark::new(&mut registry, "Great Smoky").expect("valid park");
    let also_busy = NationalPark::new(&mut registry, "Grand Canyon").expect("valid park");

    visit(&mut registry, &visitor, &also_busy);
    visit(&mut registry, &visitor, &busy);
    visit(&mut registry, &visitor, &also_busy);
    visit(&mut registry, &visitor, &busy);

    let manual_max = registry
        .parks()
        .iter()
        .map(|park| park.total_visits(&registry))
        .max()
        .expect("parks exist");
    let most = NationalPark::most_visited(&registry).expect("parks exist");

    assert_eq!(most.total_visits(&registry), manual_max);
    assert_eq!(most, busy);
    assert_eq!(quiet.total_visits(&registry), 0);
}

#[test]
fn most_visited_with_no_trips_is_first_park() {
    let mut registry = Registry::new();
    let first = NationalPark::new(&mut registry, "Badlands").expect("valid park");
    NationalPark::new(&mut registry, "Wind Cave").expect("valid park");

    assert_eq!(NationalPark::most_visited(&registry), Some(first));
}

#[test]
fn registries_are_isolated() {
    let mut first = Registry::new();
    let second = Registry::new();
    NationalPark::new(&mut first, "Congaree").expect("valid park");

    assert_eq!(first.parks().len(), 1);
    assert!(second.parks().is_empty());
    assert_eq!(NationalPark::most_visited(&second), None);
}
