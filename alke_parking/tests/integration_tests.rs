/// Scenario tests for the parking lot
///
/// Run with: cargo test --test integration_tests -- --nocapture

use alke_parking::config::{load_fleet, FleetEntry};
use alke_parking::{
    compute_fee, CheckOutError, DailyStats, ManualClock, ParkingLot, Vehicle, VehicleClass,
};
use chrono::{DateTime, TimeZone, Utc};
use std::path::Path;

fn opening_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 7, 30, 0).unwrap()
}

fn class_for(i: usize) -> VehicleClass {
    VehicleClass::ALL[i % VehicleClass::ALL.len()]
}

fn fill(lot: &mut ParkingLot<ManualClock>, count: usize) -> Vec<String> {
    let now = opening_time();
    (0..count)
        .map(|i| {
            let plate = format!("PL{:03}", i);
            let mut v = Vehicle::new(plate.clone(), class_for(i), now);
            if i % 3 == 0 {
                v = v.with_discount_code(format!("DISCOUNT_CARD_{:03}", i));
            }
            assert!(lot.check_in(v), "check-in of {plate} should succeed");
            plate
        })
        .collect()
}

#[test]
fn test_full_day_scenario() {
    println!("\n=== Test: Full Day Scenario ===");
    let mut lot = ParkingLot::with_clock(20, ManualClock::new(opening_time()));

    let plates = fill(&mut lot, 20);
    assert_eq!(lot.occupancy(), 20);
    println!("✓ 20 vehicles admitted");

    let late = Vehicle::new("PL999", VehicleClass::Car, opening_time());
    assert!(!lot.check_in(late));
    assert_eq!(lot.occupancy(), 20);
    println!("✓ 21st vehicle turned away");

    lot.clock().advance_minutes(200);
    // PL001 is a car without discount: 80 extra minutes ~ 5.33 blocks -> 5
    let fee = lot.check_out(&plates[1]).unwrap();
    assert_eq!(fee, compute_fee(VehicleClass::Car, 200, false));
    assert_eq!(fee, 20 + 5 * 5);
    assert_eq!(lot.occupancy(), 19);
    assert_eq!(lot.daily_stats(), DailyStats { earnings: fee, vehicles: 1 });
    assert!(!lot.list_vehicles().contains(&plates[1].as_str()));
    println!("✓ Checkout billed ${} after 200 minutes", fee);
}

#[test]
fn test_failed_operations_leave_state_alone() {
    println!("\n=== Test: Failed Operations ===");
    let mut lot = ParkingLot::with_clock(3, ManualClock::new(opening_time()));
    let plates = fill(&mut lot, 2);

    let dup = Vehicle::new(plates[0].clone(), VehicleClass::Bus, opening_time());
    assert!(!lot.check_in(dup));
    assert_eq!(lot.occupancy(), 2);
    assert_eq!(lot.vehicle(&plates[0]).unwrap().class, class_for(0));

    lot.clock().advance_minutes(30);
    let before = lot.daily_stats();
    assert_eq!(
        lot.check_out("NEVER01"),
        Err(CheckOutError::NotParked { plate: "NEVER01".into() })
    );
    assert_eq!(lot.daily_stats(), before);

    lot.check_out(&plates[0]).unwrap();
    let after_first = lot.daily_stats();
    assert!(lot.check_out(&plates[0]).is_err());
    assert_eq!(lot.daily_stats(), after_first);
    println!("✓ Duplicate, unknown and repeated operations change nothing");
}

#[test]
fn test_stats_accumulate_across_checkouts() {
    println!("\n=== Test: Stats Accumulate ===");
    let mut lot = ParkingLot::with_clock(20, ManualClock::new(opening_time()));
    let plates = fill(&mut lot, 8);

    let mut expected = 0u64;
    for (i, plate) in plates.iter().enumerate() {
        lot.clock().advance_minutes(20);
        let minutes = 20 * (i as u32 + 1);
        let fee = lot.check_out(plate).unwrap();
        assert_eq!(fee, compute_fee(class_for(i), minutes, i % 3 == 0));
        expected += fee;
    }

    assert_eq!(lot.daily_stats(), DailyStats { earnings: expected, vehicles: 8 });
    assert_eq!(lot.occupancy(), 0);
    println!("✓ Earned ${} from 8 checkouts", expected);
}

#[test]
fn test_bundled_fleet_replay() {
    println!("\n=== Test: Bundled Fleet Replay ===");
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/fleet.json");
    let fleet: Vec<FleetEntry> = load_fleet(&path).expect("fleet should load");

    let mut lot = ParkingLot::with_clock(20, ManualClock::new(opening_time()));
    let admitted = fleet
        .iter()
        .filter(|entry| lot.check_in(entry.arriving(opening_time())))
        .count();
    assert_eq!(admitted, 20);
    assert!(!lot.is_parked("BD434FE"));

    // two hours, no discount
    assert_eq!(lot.check_out("AC333WF"), Ok(20));
    // bus with discount after 150 minutes: (30 + 2 * 7) * 0.85 = 37.4
    assert_eq!(lot.check_out("BC833FF"), Ok(37));
    assert!(lot.check_out("AC333WF").is_err());

    assert_eq!(lot.list_vehicles().len(), 18);
    assert_eq!(lot.daily_stats(), DailyStats { earnings: 57, vehicles: 2 });
    println!("✓ Replay matches: 2 vehicles out, $57 earned");
}
