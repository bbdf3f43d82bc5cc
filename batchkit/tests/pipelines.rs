use std::fs;
use std::path::{Path, PathBuf};

use batchkit::error::{InputError, RunError, StoreError};
use batchkit::{Customer, Hotel, JsonStore, OutputConfig, Repository, Reservation, StoreConfig};
use tempfile::{tempdir, TempDir};

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write input");
    path
}

fn output_in(dir: &TempDir) -> (OutputConfig, PathBuf) {
    let out = dir.path().join("out");
    fs::create_dir_all(&out).expect("create output dir");
    (OutputConfig::new(&out), out)
}

fn last_line(text: &str) -> &str {
    text.lines().last().unwrap_or_default()
}

#[test]
fn hotel_manager_writes_all_three_stores() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        "input.txt",
        "Hotel;H001;Hotel Safi Inn;Lazaro 109;50\n\
         Hotel;H002;Parras Hotel;Ave Revolucion 54;100\n\
         Customer;C001;Manuel Palacios;manuel@example.com\n\
         Customer;C002;Pablo Landeros;pablol@example.com\n\
         Reservation;R001;H001;C001\n\
         Reservation;R002;H002;C002\n\
         Spaceship;S1;Enterprise\n",
    );
    let config = StoreConfig::in_dir(dir.path());

    let report = batchkit::hotel::process_file(&input, &config).unwrap();
    assert_eq!(report.created(), 6);
    assert_eq!(report.skipped.len(), 1);

    let hotels = JsonStore::<Hotel>::new(&config.hotels).load().unwrap();
    assert_eq!(hotels.len(), 2);
    assert_eq!(hotels[0].id, "H001");
    assert_eq!(hotels[0].total_rooms, 50);

    let customers = JsonStore::<Customer>::new(&config.customers).load().unwrap();
    assert_eq!(customers[1].email, "pablol@example.com");

    let reservations = JsonStore::<Reservation>::new(&config.reservations).load().unwrap();
    assert_eq!(reservations[0].id, "R001");
    assert_eq!(reservations[0].customer_id, "C001");

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.hotels).unwrap()).unwrap();
    assert_eq!(raw[1]["name"], "Parras Hotel");
    assert_eq!(raw[1]["total_rooms"], 100);
}

#[test]
fn hotel_manager_rerun_doubles_stores() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "input.txt", "hotel;H1;Inn;Main 1;5\ncustomer;C1;Ana;a@x.io\n");
    let config = StoreConfig::in_dir(dir.path());

    batchkit::hotel::process_file(&input, &config).unwrap();
    batchkit::hotel::process_file(&input, &config).unwrap();

    assert_eq!(JsonStore::<Hotel>::new(&config.hotels).load().unwrap().len(), 2);
    assert_eq!(JsonStore::<Customer>::new(&config.customers).load().unwrap().len(), 2);
    assert!(!config.reservations.exists());
}

#[test]
fn hotel_manager_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let config = StoreConfig::in_dir(dir.path());
    let err = batchkit::hotel::process_file(&dir.path().join("absent.txt"), &config).unwrap_err();
    assert!(matches!(err, RunError::Input(InputError::NotFound(_))));
}

#[test]
fn hotel_manager_malformed_store_is_fatal() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "input.txt", "hotel;H1;Inn;Main 1;5\n");
    let config = StoreConfig::in_dir(dir.path());
    fs::write(&config.hotels, "{ broken").unwrap();

    let err = batchkit::hotel::process_file(&input, &config).unwrap_err();
    assert!(matches!(err, RunError::Store(StoreError::Malformed { .. })));
}

#[test]
fn compute_sales_totals_known_products() {
    let dir = tempdir().unwrap();
    let catalogue = write_input(
        &dir,
        "priceCatalogue.json",
        r#"[{"title": "Rice", "price": 2.5}, {"title": "Soap", "price": 1.25}]"#,
    );
    let sales = write_input(
        &dir,
        "TC1.Sales.json",
        r#"[{"SALE_ID": 1, "Product": "Rice", "Quantity": 4},
            {"SALE_ID": 2, "Product": "Caviar", "Quantity": 1},
            {"SALE_ID": 3, "Product": "Soap", "Quantity": 2}]"#,
    );
    let (output, out_dir) = output_in(&dir);

    let text = batchkit::sales::run(&catalogue, &sales, &output).unwrap();
    assert!(text.starts_with("Sales Summary:\nRice: 4 x 2.50 = 10.00\nSoap: 2 x 1.25 = 2.50\n\n"));
    assert!(text.contains("Total sales: 12.50\n"));
    assert!(!text.contains("Caviar"));
    assert!(last_line(&text).starts_with("Elapsed Time: "));

    let saved = fs::read_to_string(out_dir.join("SalesResults_TC1.Sales.txt")).unwrap();
    assert_eq!(saved, text);
}

#[test]
fn compute_sales_rejects_non_array_input() {
    let dir = tempdir().unwrap();
    let catalogue = write_input(&dir, "catalogue.json", r#"{"title": "Rice", "price": 2.5}"#);
    let sales = write_input(&dir, "sales.json", "[]");
    let (output, out_dir) = output_in(&dir);

    let err = batchkit::sales::run(&catalogue, &sales, &output).unwrap_err();
    assert!(matches!(err, RunError::Input(InputError::NotAnArray(_))));
    assert_eq!(fs::read_dir(out_dir).unwrap().count(), 0);
}

#[test]
fn compute_statistics_reports_and_saves() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "TC1.txt", "1\n2\nseven\n3\n4\n");
    let (output, out_dir) = output_in(&dir);

    let text = batchkit::stats::run(&input, &output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        &lines[..7],
        &[
            "Descriptive Statistics:",
            "Count: 4",
            "Mean: 2.5",
            "Median: 2.5",
            "Mode: No unique mode",
            "Variance: 1.25",
            "Standard Deviation: 1.118033988749895",
        ]
    );
    assert!(lines[7].starts_with("Elapsed Time: "));
    assert!(out_dir.join("TC1_estadisticas.txt").exists());
}

#[test]
fn compute_statistics_without_numbers_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "empty.txt", "abc\n\n1e5\n");
    let (output, out_dir) = output_in(&dir);

    let err = batchkit::stats::run(&input, &output).unwrap_err();
    assert!(matches!(err, RunError::NoValidData("numbers")));
    assert!(!out_dir.join("empty_estadisticas.txt").exists());
}

#[test]
fn convert_numbers_lists_each_integer() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "numbers.txt", "0\n-10\n3.5\n255\n");
    let (output, out_dir) = output_in(&dir);

    let text = batchkit::convert::run(&input, &output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Conversion Results:");
    assert_eq!(lines[1], "Number: 0, Binary: 0, Hexadecimal: 0");
    assert_eq!(lines[2], "Number: -10, Binary: -1010, Hexadecimal: -A");
    assert_eq!(lines[3], "Number: 255, Binary: 11111111, Hexadecimal: FF");
    assert_eq!(lines.len(), 5);
    assert!(out_dir.join("ConvertionResults_numbers.txt").exists());
}

#[test]
fn word_count_sorted_output() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "story.txt", "The cat sat.\nThe CAT ran.\n");
    let (output, out_dir) = output_in(&dir);

    let text = batchkit::words::run(&input, &output).unwrap();
    assert!(text.starts_with("Word Count:\ncat: 2\nran: 1\nsat: 1\nthe: 2\nElapsed Time: "));
    assert!(out_dir.join("WordCountResults_story.txt").exists());
}

#[test]
fn word_count_without_words_is_fatal() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "blank.txt", "... !!!\n\n");
    let (output, _) = output_in(&dir);

    let err = batchkit::words::run(&input, &output).unwrap_err();
    assert!(matches!(err, RunError::NoValidData("words")));
}

#[test]
fn missing_input_reports_path() {
    let dir = tempdir().unwrap();
    let (output, _) = output_in(&dir);
    let missing: &Path = Path::new("definitely/not/here.txt");

    let err = batchkit::words::run(missing, &output).unwrap_err();
    assert!(err.to_string().contains("here.txt"));
}

#[test]
fn word_count_reads_latin1_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin1.txt");
    fs::write(&input, b"caf\xE9 \xA4 \xBD\n").unwrap();
    let (output, _) = output_in(&dir);

    let text = batchkit::words::run(&input, &output).unwrap();
    assert!(text.starts_with("Word Count:\ncaf\u{e9}: 1\nElapsed Time: "));
}
