//! End-to-end tests of the CST value channel over Zenoh.
//!
//! Note: Zenoh requires multi-thread tokio runtime.
//! Each test uses a unique key prefix to avoid interference.

use std::time::Duration;

use helmview_common::{CstKeys, CstValue, Format, decode_value, encode, encode_desired_speed};

/// Generate a unique test prefix to avoid test interference.
fn unique_prefix() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test_{}/cst", nanos)
}

/// A desiredSpeed write is seen by a subscriber on the CST wildcard.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_desired_speed_round_trip() {
    let keys = CstKeys::new(unique_prefix());

    let session = zenoh::open(zenoh::Config::default())
        .await
        .expect("Failed to open Zenoh session");

    let subscriber = session
        .declare_subscriber(keys.wildcard())
        .await
        .expect("Failed to create subscriber");

    tokio::time::sleep(Duration::from_millis(100)).await;

    let payload = encode_desired_speed(18.0, Format::Json).expect("Failed to encode");
    session
        .put(keys.desired_speed(), payload)
        .await
        .expect("Failed to publish");

    let sample = tokio::time::timeout(Duration::from_secs(5), subscriber.recv_async())
        .await
        .expect("Timeout waiting for sample")
        .expect("Failed to receive sample");

    let key = sample.key_expr().as_str().to_string();
    let name = keys.value_name(&key).expect("Key outside CST prefix");
    let value = decode_value(name, &sample.payload().to_bytes());

    assert_eq!(value, Some(CstValue::DesiredSpeed(18.0)));

    drop(subscriber);
    session.close().await.expect("Failed to close session");
}

/// A CBOR fuel load is decoded the same way as JSON.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_fuel_load_cbor() {
    let keys = CstKeys::new(unique_prefix());

    let session = zenoh::open(zenoh::Config::default())
        .await
        .expect("Failed to open Zenoh session");

    let subscriber = session
        .declare_subscriber(keys.total_fuel_load())
        .await
        .expect("Failed to create subscriber");

    tokio::time::sleep(Duration::from_millis(100)).await;

    let payload = encode(&1520.5_f64, Format::Cbor).expect("Failed to encode");
    session
        .put(keys.total_fuel_load(), payload)
        .await
        .expect("Failed to publish");

    let sample = tokio::time::timeout(Duration::from_secs(5), subscriber.recv_async())
        .await
        .expect("Timeout waiting for sample")
        .expect("Failed to receive sample");

    let value = decode_value("totalFuelLoad", &sample.payload().to_bytes());
    assert_eq!(value, Some(CstValue::TotalFuelLoad(Some(1520.5))));

    drop(subscriber);
    session.close().await.expect("Failed to close session");
}
