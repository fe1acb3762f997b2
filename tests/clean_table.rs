// tests/clean_table.rs
use std::fs;

use books_scrape::config::NormalizeOptions;
use books_scrape::error::Stage;
use books_scrape::normalize;
use books_scrape::records::{CleanRecord, RawRecord};
use books_scrape::store;

fn raw(title: &str, price: &str, rating: &str) -> RawRecord {
    RawRecord {
        title: title.to_string(),
        price_raw: price.to_string(),
        rating_text: rating.to_string(),
        availability: "In stock".to_string(),
    }
}

#[test]
fn normalize_stage_reads_and_writes_tables() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = NormalizeOptions {
        in_path: tmp.path().join("data/raw.csv"),
        out_path: tmp.path().join("data/clean.csv"),
        ..NormalizeOptions::default()
    };

    let mut rows: Vec<_> = (0..12).map(|i| raw(&format!("Book {i}"), &format!("£{}.50", 20 + i % 3), "Four")).collect();
    rows.push(raw("Pricey, \"Deluxe\" Edition", "Â£99.99", "Five"));
    rows.push(raw("Unrated", "£21.00", "None"));
    rows.push(raw("Odd rating", "£21.00", "Six"));
    rows.push(raw("No price", "sold out", "Two"));
    store::save_raw(&opts.in_path, &rows).unwrap();

    let summary = normalize::run(&opts).unwrap();

    assert_eq!(summary.loaded, 16);
    assert_eq!(summary.kept, 13);
    assert_eq!(summary.dropped, 3);
    assert_eq!(summary.outliers, 1);
    // scored over every priced row, unrated ones included
    assert_eq!(summary.stats.unwrap().count, 15);

    let clean = store::load_clean(&opts.out_path, Stage::Report).unwrap();
    assert_eq!(clean.len(), 13);
    let deluxe = clean.iter().find(|r| r.title.starts_with("Pricey")).unwrap();
    assert_eq!(deluxe.title, "Pricey, \"Deluxe\" Edition");
    assert_eq!(deluxe.price, 99.99);
    assert_eq!(deluxe.rating, 5);
    assert!(deluxe.is_outlier);

    for r in &clean {
        assert!((1..=5).contains(&r.rating));
        assert_eq!(r.is_outlier, r.price_z_score.abs() > 2.0, "{}", r.title);
    }
}

#[test]
fn missing_raw_table_is_reported_as_missing_input() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = NormalizeOptions {
        in_path: tmp.path().join("raw.csv"),
        out_path: tmp.path().join("clean.csv"),
        ..NormalizeOptions::default()
    };
    let err = normalize::run(&opts).unwrap_err();
    assert!(err.is_missing_input());
    assert!(!opts.out_path.exists());
}

#[test]
fn clean_table_written_elsewhere_loads() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("clean.csv");
    fs::write(
        &path,
        "Title,Price,Rating,Availability,Price_Z_Score,Is_Outlier\n\
         A,51.77,3.0,In stock,0.5,false\n\
         B,12.0,1,In stock,-2.1,true\n",
    )
    .unwrap();

    let rows: Vec<CleanRecord> = store::load_clean(&path, Stage::Report).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].rating, 3);
    assert!(!rows[0].is_outlier);
    assert!(rows[1].is_outlier);
}
