#![cfg(test)]
use rentr_common::config::Config;
use rentr_core::customer::Customer;
use rentr_core::fleet::RentalAgency;
use rentr_core::reporter::{EventLog, RentalEvent};
use rentr_core::scenario::{self, ScenarioOptions};
use rentr_core::vehicle::{Vehicle, VehicleKind};
use rentr_core::{ErrorKind, RentalError};

fn section_ids(events: &[RentalEvent]) -> Vec<Vec<String>> {
    let mut sections: Vec<Vec<String>> = Vec::new();
    for event in events {
        match event {
            RentalEvent::Section { .. } => sections.push(Vec::new()),
            RentalEvent::Available { id, .. } => {
                if let Some(current) = sections.last_mut() {
                    current.push(id.clone());
                }
            }
            _ => {}
        }
    }
    sections
}

/// The walkthrough from the reference program: Alice rents the sedan for five
/// days and brings it back.
#[test]
fn demo_walkthrough() {
    let log = EventLog::new();

    let summary = scenario::run(&Config::default(), &ScenarioOptions::default(), &log)
        .expect("demo run failed");

    assert_eq!(summary.cost, 250.0);
    assert_eq!(summary.model, "Sedan");
    assert_eq!(summary.fleet_size, 3);

    assert_eq!(
        section_ids(&log.events()),
        vec![
            vec!["C001", "M001", "T001"],
            vec!["M001", "T001"],
            vec!["C001", "M001", "T001"],
        ]
    );

    assert_eq!(
        log.lines(),
        vec![
            "Available Vehicles:",
            "Sedan (ID: C001) is available for rental.",
            "Sport Bike (ID: M001) is available for rental.",
            "Freight Truck (ID: T001) is available for rental.",
            "Alice rented Sedan for 5 days. Cost: 250.0",
            "Available Vehicles After Renting:",
            "Sport Bike (ID: M001) is available for rental.",
            "Freight Truck (ID: T001) is available for rental.",
            "Alice returned Sedan",
            "Available Vehicles After Returning:",
            "Sedan (ID: C001) is available for rental.",
            "Sport Bike (ID: M001) is available for rental.",
            "Freight Truck (ID: T001) is available for rental.",
        ]
    );
}

#[test]
fn demo_with_other_vehicle() {
    let log = EventLog::new();
    let opts = ScenarioOptions {
        customer: String::from("Bob"),
        vehicle_id: String::from("T001"),
        days: 2,
    };

    let summary = scenario::run(&Config::strict(), &opts, &log).expect("demo run failed");

    assert_eq!(summary.cost, 200.0);
    assert_eq!(section_ids(&log.events())[1], vec!["C001", "M001"]);
}

#[test]
fn two_customers_share_one_fleet() {
    let mut agency = scenario::populate_fleet(&Config::default()).unwrap();
    let mut alice = Customer::new("Alice");
    let mut bob = Customer::new("Bob");
    let log = EventLog::new();

    let car = agency.find_vehicle_by_id_mut("C001").unwrap();
    alice.rent_vehicle(car, 5, &log).unwrap();

    let car = agency.find_vehicle_by_id_mut("C001").unwrap();
    let err = bob.rent_vehicle(car, 1, &log).unwrap_err();
    assert!(matches!(err, RentalError::VehicleUnavailable { .. }));

    let err = bob.return_vehicle(car, &log).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);

    let truck = agency.find_vehicle_by_id_mut("T001").unwrap();
    let cost = bob.rent_vehicle(truck, 1, &log).unwrap();
    assert_eq!(cost, VehicleKind::Truck.daily_rate());

    log.take();
    agency.list_available_vehicles(&log);
    assert_eq!(log.available_ids(), vec!["M001"]);

    let car = agency.find_vehicle_by_id_mut("C001").unwrap();
    alice.return_vehicle(car, &log).unwrap();
    let truck = agency.find_vehicle_by_id_mut("T001").unwrap();
    bob.return_vehicle(truck, &log).unwrap();

    log.take();
    agency.list_available_vehicles(&log);
    assert_eq!(log.available_ids(), vec!["C001", "M001", "T001"]);
}

#[test]
fn strict_agency_rejects_duplicates() {
    let mut agency = RentalAgency::with_config(&Config::strict());
    agency.add_vehicle(Vehicle::car("C001", "Sedan", 50.0).unwrap()).unwrap();

    let result = agency.add_vehicle(Vehicle::motorcycle("C001", "Scooter", 20.0).unwrap());

    assert!(matches!(result, Err(RentalError::InvalidArgument(_))));
    assert_eq!(agency.vehicles().len(), 1);
}

#[test]
fn return_of_vehicle_sharing_id_is_refused() {
    let mut agency = RentalAgency::new();
    agency.add_vehicle(Vehicle::car("C001", "Sedan", 50.0).unwrap()).unwrap();
    agency.add_vehicle(Vehicle::truck("C001", "Pickup", 80.0).unwrap()).unwrap();
    let sedan = agency.vehicles()[0].handle();
    let pickup = agency.vehicles()[1].handle();
    let mut alice = Customer::new("Alice");
    let log = EventLog::new();

    let vehicle = agency.find_vehicle_by_id_mut("C001").unwrap();
    alice.rent_vehicle(vehicle, 5, &log).unwrap();

    let vehicle = agency.find_vehicle_by_handle_mut(pickup).unwrap();
    let err = alice.return_vehicle(vehicle, &log).unwrap_err();
    assert!(matches!(err, RentalError::NotRentedByCustomer { .. }));

    log.take();
    agency.list_available_vehicles(&log);
    assert_eq!(log.lines(), vec!["Pickup (ID: C001) is available for rental."]);
    assert_eq!(alice.rental_history(), &[sedan]);

    let vehicle = agency.find_vehicle_by_handle_mut(sedan).unwrap();
    alice.return_vehicle(vehicle, &log).unwrap();
    assert_eq!(agency.available_vehicles().count(), 2);
}
