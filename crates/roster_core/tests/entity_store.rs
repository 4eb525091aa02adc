use roster_core::{
    Assignment, Day, Driver, EntityValidationError, InMemoryScheduleRepository, RepoError, Route,
    ScheduleError, ScheduleRepository, ScheduleService,
};
use std::collections::HashSet;
use uuid::Uuid;

fn service() -> ScheduleService<InMemoryScheduleRepository> {
    ScheduleService::new(InMemoryScheduleRepository::new())
}

#[test]
fn blank_driver_names_are_rejected() {
    let mut service = service();

    for name in ["", "   ", "\t\n"] {
        let err = service.add_driver(name).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Validation(EntityValidationError::BlankDriverName)
        );
    }
    assert!(service.get_drivers().is_empty());
}

#[test]
fn add_driver_stores_exactly_one_trimmed_driver() {
    let mut service = service();

    let alice = service.add_driver("  Alice ").unwrap();
    assert_eq!(alice.name, "Alice");
    assert!(!alice.id.is_nil());

    let drivers = service.get_drivers();
    assert_eq!(drivers, vec![alice]);
}

#[test]
fn generated_ids_are_distinct() {
    let mut service = service();
    let mut ids = HashSet::new();

    for index in 0..50 {
        ids.insert(service.add_driver(&format!("Driver {index}")).unwrap().id);
        ids.insert(service.add_route(&format!("Route {index}")).unwrap().id);
    }
    assert_eq!(ids.len(), 100);
}

#[test]
fn add_route_starts_without_assignments() {
    let mut service = service();

    let route = service.add_route("North Loop").unwrap();
    assert!(route.assignments.is_empty());
    assert!(route.is_unassigned());
    assert_eq!(service.get_routes(), vec![route]);

    let err = service.add_route(" ").unwrap_err();
    assert_eq!(
        err,
        ScheduleError::Validation(EntityValidationError::BlankRouteName)
    );
}

#[test]
fn listings_keep_insertion_order() {
    let mut service = service();
    for name in ["Carol", "Alice", "Bob"] {
        service.add_driver(name).unwrap();
    }

    let names: Vec<String> = service
        .get_drivers()
        .into_iter()
        .map(|driver| driver.name)
        .collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
}

#[test]
fn repository_rejects_duplicate_ids() {
    let mut repo = InMemoryScheduleRepository::new();
    let driver = Driver::new("Alice").unwrap();
    repo.insert_driver(driver.clone()).unwrap();

    let err = repo.insert_driver(driver.clone()).unwrap_err();
    assert_eq!(err, RepoError::DuplicateId(driver.id));

    let route = Route::new("North").unwrap();
    repo.insert_route(route.clone()).unwrap();
    let err = repo.insert_route(route.clone()).unwrap_err();
    assert_eq!(err, RepoError::DuplicateId(route.id));
}

#[test]
fn snapshots_are_detached_from_the_store() {
    let mut service = service();
    let route = service.add_route("North").unwrap();

    let mut snapshot = service.get_routes();
    snapshot[0].name = "Renamed".to_string();

    assert_eq!(service.get_routes()[0].name, route.name);
}

#[test]
fn public_repository_writes_cannot_double_book() {
    let mut repo = InMemoryScheduleRepository::new();
    let alice = repo.insert_driver(Driver::new("Alice").unwrap()).unwrap();

    let mut prefilled = Route::new("North").unwrap();
    prefilled.assignments.push(Assignment::new(alice.id, Day::Mon));
    prefilled.assignments.push(Assignment::new(alice.id, Day::Mon));
    prefilled.assignments.push(Assignment::new(Uuid::new_v4(), Day::Tue));
    let err = repo.insert_route(prefilled).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));

    let north = repo.insert_route(Route::new("North").unwrap()).unwrap();
    let south = repo.insert_route(Route::new("South").unwrap()).unwrap();
    repo.append_assignment(north.id, Assignment::new(alice.id, Day::Mon))
        .unwrap();
    let err = repo
        .append_assignment(south.id, Assignment::new(alice.id, Day::Mon))
        .unwrap_err();
    assert!(matches!(err, RepoError::AlreadyBooked { route_id, .. } if route_id == north.id));

    let service = ScheduleService::new(repo);
    let monday_bookings = service
        .get_routes()
        .iter()
        .flat_map(|route| route.assignments.iter())
        .filter(|assignment| assignment.driver_id == alice.id && assignment.day == Day::Mon)
        .count();
    assert_eq!(monday_bookings, 1);
    assert_eq!(
        service.booking_for(alice.id, Day::Mon).unwrap(),
        Some(north.id)
    );
}
