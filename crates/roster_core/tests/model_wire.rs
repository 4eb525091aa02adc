use roster_core::{Assignment, Day, Driver, EntityValidationError, Named, Route};
use uuid::Uuid;

#[test]
fn days_serialize_as_labels() {
    let json = serde_json::to_value(Day::ALL).unwrap();
    assert_eq!(
        json,
        serde_json::json!(["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"])
    );

    let decoded: Day = serde_json::from_str("\"Sat\"").unwrap();
    assert_eq!(decoded, Day::Sat);
    assert!(serde_json::from_str::<Day>("\"Saturday\"").is_err());
}

#[test]
fn route_serialization_uses_expected_wire_fields() {
    let route_id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let driver_id = Uuid::parse_str("66666666-7777-4888-9999-aaaaaaaaaaaa").unwrap();
    let mut route = Route::with_id(route_id, "Harbor Express").unwrap();
    route.assignments.push(Assignment::new(driver_id, Day::Wed));

    let json = serde_json::to_value(&route).unwrap();
    assert_eq!(json["id"], route_id.to_string());
    assert_eq!(json["name"], "Harbor Express");
    assert_eq!(json["assignments"][0]["driver_id"], driver_id.to_string());
    assert_eq!(json["assignments"][0]["day"], "Wed");

    let decoded: Route = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, route);
}

#[test]
fn constructors_trim_and_validate_names() {
    let driver = Driver::new("  Alice  ").unwrap();
    assert_eq!(driver.name(), "Alice");
    assert_eq!(
        Driver::new(" ").unwrap_err(),
        EntityValidationError::BlankDriverName
    );
    assert_eq!(
        Route::new("").unwrap_err(),
        EntityValidationError::BlankRouteName
    );
}

#[test]
fn route_reports_assignment_membership() {
    let driver = Driver::new("Alice").unwrap();
    let mut route = Route::new("North").unwrap();
    assert!(route.is_unassigned());

    route.assignments.push(Assignment::new(driver.id, Day::Mon));
    assert!(route.has_assignment(driver.id, Day::Mon));
    assert!(!route.has_assignment(driver.id, Day::Tue));
    assert!(!route.is_unassigned());
}
