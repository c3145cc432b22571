use flight_booker::app_config::AppConfig;
use flight_booker::core::errors::LoadError;
use flight_booker::core::file_system::FileSystem;
use flight_booker::core::models::{Route, SeatStatus};
use flight_booker::{initialize_system, run_session, EXIT_IO_ERROR, EXIT_OK};
use rust_decimal::Decimal;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_source(dir: &std::path::Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

fn config_for(source_files: Vec<PathBuf>) -> AppConfig {
    AppConfig {
        source_files,
        ..AppConfig::default()
    }
}

#[test]
fn test_cheapest_seat_is_booked_and_saved() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        "flights1.json",
        r#"{"flights": [{"from": 1, "to": 2, "seats": [{"price": 29.99, "status": "free"}, {"price": 45.00, "status": "free"}]}]}"#,
    );

    let mut system = initialize_system(config_for(vec![source.clone()])).unwrap();
    let mut output = Vec::new();
    let code = run_session(&mut system, Cursor::new("1-2\nyes\nAlice\npay\nno\n"), &mut output);

    assert_eq!(code, EXIT_OK);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Ticket booked successfully for Alice."));

    let best = system.find_best_seat(&Route::new(1, 2)).unwrap();
    assert_eq!(best.price, Decimal::new(4500, 2));

    let saved = FileSystem::load_source(&source).unwrap();
    assert_eq!(saved[0].seats[0].price, Decimal::new(2999, 2));
    assert_eq!(saved[0].seats[0].status, SeatStatus::Booked);
    assert_eq!(saved[0].seats[1].status, SeatStatus::Free);

    let reloaded = initialize_system(config_for(vec![source])).unwrap();
    assert_eq!(reloaded.inventory().flights(), system.inventory().flights());
}

#[test]
fn test_duplicate_prices_book_a_single_seat() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_source(
        temp_dir.path(),
        "flights1.json",
        r#"{"flights": [{"from": 5, "to": 6, "seats": [{"price": 50.00, "status": "free"}]}]}"#,
    );
    let second = write_source(
        temp_dir.path(),
        "flights2.json",
        r#"{"flights": [{"from": 5, "to": 6, "seats": [{"price": 50.00, "status": "free"}]}]}"#,
    );
    let second_before = fs::read_to_string(&second).unwrap();

    let mut system = initialize_system(config_for(vec![first.clone(), second.clone()])).unwrap();
    let code = run_session(&mut system, Cursor::new("5-6\nyes\nBob\npay\nno\n"), Vec::<u8>::new());

    assert_eq!(code, EXIT_OK);
    assert_eq!(system.inventory().free_seat_count(&Route::new(5, 6)), 1);
    assert_eq!(FileSystem::load_source(&first).unwrap()[0].seats[0].status, SeatStatus::Booked);
    assert_eq!(fs::read_to_string(&second).unwrap(), second_before);
}

#[test]
fn test_unsaved_booking_exits_with_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    let source = write_source(
        &data_dir,
        "flights1.json",
        r#"{"flights": [{"from": 1, "to": 2, "seats": [{"price": 10, "status": "free"}]}]}"#,
    );

    let mut system = initialize_system(config_for(vec![source])).unwrap();
    fs::remove_dir_all(&data_dir).unwrap();

    let mut output = Vec::new();
    let code = run_session(&mut system, Cursor::new("1-2\nyes\nCarol\npay\nno\n"), &mut output);

    assert_eq!(code, EXIT_IO_ERROR);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Ticket booked for Carol, but the booking could not be saved yet"));
    assert!(system.find_best_seat(&Route::new(1, 2)).is_none());
    assert!(!system.pending_sources().is_empty());
}

#[test]
fn test_session_without_bookings_leaves_files_alone() {
    let temp_dir = TempDir::new().unwrap();
    let content = r#"{"flights": [{"from": 1, "to": 2, "seats": [{"price": 10, "status": "booked"}]}]}"#;
    let source = write_source(temp_dir.path(), "flights1.json", content);

    let mut system = initialize_system(config_for(vec![source.clone()])).unwrap();
    let mut output = Vec::new();
    let code = run_session(&mut system, Cursor::new("bad\n1-2\nno\n"), &mut output);

    assert_eq!(code, EXIT_OK);
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Invalid route 'bad'"));
    assert!(output.contains("No free seats available for route 1-2."));
    assert_eq!(fs::read_to_string(&source).unwrap(), content);
}

#[test]
fn test_missing_source_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let present = write_source(temp_dir.path(), "flights1.json", r#"{"flights": []}"#);
    let absent = temp_dir.path().join("flights2.json");

    let result = initialize_system(config_for(vec![present, absent.clone()]));
    match result {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, absent),
        Err(e) => panic!("Expected Io error, got {}", e),
        Ok(_) => panic!("Expected load to fail"),
    }
}

#[test]
fn test_repeated_source_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_source(
        temp_dir.path(),
        "a.json",
        r#"{"flights": [{"from": 1, "to": 2, "seats": [{"price": 10, "status": "free"}, {"price": 20, "status": "free"}]}]}"#,
    );

    let result = initialize_system(config_for(vec![source.clone(), source.clone()]));
    assert!(matches!(result, Err(LoadError::DuplicateSource { .. })));

    // A single listing still sells the 10.00 seat only once
    let mut system = initialize_system(config_for(vec![source])).unwrap();
    let mut output = Vec::new();
    let code = run_session(&mut system, Cursor::new("1-2\nyes\nA\npay\nyes\n1-2\nyes\nB\npay\nno\n"), &mut output);

    assert_eq!(code, EXIT_OK);
    let output = String::from_utf8(output).unwrap();
    assert_eq!(output.matches("Best price for your flight is $10.").count(), 1);
    assert!(output.contains("Best price for your flight is $20."));
    assert_eq!(system.inventory().free_seat_count(&Route::new(1, 2)), 0);
}
