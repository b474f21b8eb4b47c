use harness::{load_input, test_one_input, BinaryPlist, JsonPlist};
use std::fs;
use tempfile::tempdir;

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn reads_whole_file() -> Result<(), Box<dyn std::error::Error>> {
    init_logs();
    let tmp = tempdir()?;
    let path = tmp.path().join("big.json");
    let data: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&path, &data)?;
    let buf = load_input(&path)?;
    assert_eq!(buf.len(), data.len());
    assert_eq!(buf, data);
    Ok(())
}

#[test]
fn empty_file_gives_empty_buffer_and_is_released() -> Result<(), Box<dyn std::error::Error>> {
    init_logs();
    let tmp = tempdir()?;
    let path = tmp.path().join("empty");
    fs::write(&path, b"")?;
    let buf = load_input(&path)?;
    assert!(buf.is_empty());
    assert_eq!(test_one_input(&BinaryPlist, &buf), 0);
    assert_eq!(test_one_input(&JsonPlist, &buf), 0);
    Ok(())
}

#[test]
fn missing_file_names_the_path() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("nope.bplist");
    let err = load_input(&path).unwrap_err();
    assert!(err.to_string().contains("nope.bplist"));
}
