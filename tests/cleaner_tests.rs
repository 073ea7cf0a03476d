use car_listing_chart::data::{CleanError, DataLoader, DatasetCleaner, ListingRecord};
use serde_json::Value;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "car_listing_chart_{}_{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("raw")).expect("create scratch dir");
    dir
}

#[test]
fn cleans_raw_csvs_into_listing_json() {
    let dir = scratch_dir("clean");
    std::fs::write(
        dir.join("raw/merc.csv"),
        "model,year,price,transmission,mileage,fuelType,tax,mpg,engineSize\n\
         SLK,2005,5200,Automatic,63000,Petrol,325,32.1,1.8\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("raw/audi.csv"),
        "model,year,price,transmission,mileage,fuelType,tax,mpg,engineSize\n\
         A1,2017,12500,Manual,15735,Petrol,150,55.4,1.4\n\
         A6,2016,16500,Automatic,36203,Diesel,20,64.2,2.0\n",
    )
    .unwrap();
    std::fs::write(dir.join("raw/notes.txt"), "ignored").unwrap();

    let output = dir.join("out/cars.json");
    let rows = DatasetCleaner::clean_directory(&dir.join("raw"), &output).expect("clean");
    assert_eq!(rows, 3);

    let text = std::fs::read_to_string(&output).unwrap();
    let values: Vec<Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(values[0]["make"], "Audi");
    assert_eq!(values[0]["model"], "A1");
    assert_eq!(values[0]["mileage"], 15735);
    assert_eq!(values[0]["mpg"], "55.4");
    assert_eq!(values[2]["make"], "Mercedes");
    assert_eq!(values[2]["tax"], 325);

    let keys: Vec<&str> = values[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "model", "year", "price", "transmission", "mileage", "fuelType", "tax", "mpg",
            "engineSize", "make"
        ]
    );

    let records = DataLoader::parse_records(&text).unwrap();
    assert_eq!(
        records,
        vec![
            ListingRecord::new(2017, 12500.0),
            ListingRecord::new(2016, 16500.0),
            ListingRecord::new(2005, 5200.0),
        ]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn non_integer_price_is_rejected() {
    let dir = scratch_dir("bad_price");
    std::fs::write(dir.join("raw/ford.csv"), "model,year,price\nFiesta,2017,n/a\n").unwrap();

    let err = DatasetCleaner::clean_directory(&dir.join("raw"), &dir.join("cars.json")).unwrap_err();
    match err {
        CleanError::InvalidInteger { file, column, row, value } => {
            assert_eq!(file, "ford.csv");
            assert_eq!(column, "price");
            assert_eq!(row, 0);
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected error: {other}"),
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_raw_dir_is_an_io_error() {
    let dir = scratch_dir("missing");
    let err = DatasetCleaner::clean_directory(&dir.join("absent"), &dir.join("cars.json")).unwrap_err();
    assert!(matches!(err, CleanError::Io { .. }));
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_csv_contributes_no_rows() {
    let dir = scratch_dir("empty_file");
    std::fs::write(dir.join("raw/audi.csv"), "model,year,price\nA1,2017,12500\n").unwrap();
    std::fs::write(dir.join("raw/kia.csv"), "").unwrap();

    let output = dir.join("cars.json");
    let rows = DatasetCleaner::clean_directory(&dir.join("raw"), &output).expect("clean");
    assert_eq!(rows, 1);

    let values: Vec<Value> = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(values[0]["make"], "Audi");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn empty_text_cell_stays_empty_string() {
    let dir = scratch_dir("empty_cell");
    std::fs::write(dir.join("raw/audi.csv"), "model,year,price,mpg\nA1,2017,12500,\n").unwrap();

    let rows = DatasetCleaner::clean_file(&dir.join("raw/audi.csv")).expect("clean");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["mpg"], Value::from(""));
    assert_eq!(rows[0]["price"], Value::from(12500));

    let _ = std::fs::remove_dir_all(&dir);
}
