use chrono::{NaiveDate, TimeZone as _};
use envsense::sensor::{Reading, SENTINEL};
use envsense::store::Store;
use tempfile::tempdir;

fn basic_reading(id: i64, co2: f64) -> Reading {
    Reading {
        timestamp: chrono_tz::UTC
            .with_ymd_and_hms(2022, 11, 21, 12, 0, 0)
            .unwrap(),
        id,
        co2,
        temp_0: SENTINEL,
        temp_1: SENTINEL,
        humidity: SENTINEL,
        pm1_0: SENTINEL,
        pm2_5: SENTINEL,
        pm10_0: SENTINEL,
    }
}

#[tokio::test]
async fn reruns_within_a_day_append_to_the_same_table() {
    let dir = tempdir().unwrap();
    let date = NaiveDate::from_ymd_opt(2022, 11, 21).unwrap();

    let store = Store::open(dir.path(), date).await.unwrap();
    store.append(&basic_reading(2, 430.0)).await.unwrap();
    store.append(&basic_reading(3, 512.0)).await.unwrap();
    assert_eq!(store.row_count().await.unwrap(), 2);
    store.close().await;

    // Second run, same day: same file, rows accumulate.
    let store = Store::open(dir.path(), date).await.unwrap();
    store.append(&basic_reading(2, 440.0)).await.unwrap();
    assert_eq!(store.row_count().await.unwrap(), 3);
    store.close().await;

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(files, vec!["2022-11-21.db"]);
}

#[tokio::test]
async fn a_new_day_opens_a_new_file() {
    let dir = tempdir().unwrap();
    let monday = NaiveDate::from_ymd_opt(2022, 11, 21).unwrap();
    let tuesday = NaiveDate::from_ymd_opt(2022, 11, 22).unwrap();

    let store = Store::open(dir.path(), monday).await.unwrap();
    store.append(&basic_reading(2, 430.0)).await.unwrap();
    store.close().await;

    let store = Store::open(dir.path(), tuesday).await.unwrap();
    assert_eq!(store.row_count().await.unwrap(), 0);
    store.append(&basic_reading(2, 435.0)).await.unwrap();
    assert_eq!(store.row_count().await.unwrap(), 1);
    store.close().await;

    assert!(Store::path_for_date(dir.path(), monday).exists());
    assert!(Store::path_for_date(dir.path(), tuesday).exists());
}
