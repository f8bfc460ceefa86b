//! Integration tests for the text loader against files on disk.

use std::io::Write;

use numvec::io::{loadtxt, loadtxt_with_options, LoadOptions};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    init_logging();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Single column
// ---------------------------------------------------------------------------

#[test]
fn single_column_file() {
    let file = write_fixture("1\n2\n3\n4\n5\n6\n7\n");
    let cols = loadtxt(file.path(), 0, false).unwrap();
    assert_eq!(cols.len(), 1);
    assert_eq!(cols[0].to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn single_column_skips_header() {
    let file = write_fixture("value\n1.5\n-2.5\n");
    let cols = loadtxt(file.path(), 1, false).unwrap();
    assert_eq!(cols[0].to_vec(), vec![1.5, -2.5]);
}

// ---------------------------------------------------------------------------
// Multiple columns
// ---------------------------------------------------------------------------

#[test]
fn multiple_columns_flat() {
    let file = write_fixture("1\t2\t3\n4\t5\t6\n7\t8\t9\n10\n");
    let cols = loadtxt(file.path(), 0, false).unwrap();
    assert_eq!(
        cols[0].to_vec(),
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]
    );
}

#[test]
fn multiple_columns_unpacked() {
    let file = write_fixture("1\t2\t3\n4\t5\t6\n7\t8\t9\n10\n");
    let options = LoadOptions {
        skip_lines: 0,
        unpack: true,
    };
    let cols = loadtxt_with_options(file.path(), &options).unwrap();
    let cols: Vec<Vec<f64>> = cols.into_iter().map(|c| c.into_vec()).collect();
    assert_eq!(
        cols,
        vec![
            vec![1.0, 4.0, 7.0, 10.0],
            vec![2.0, 5.0, 8.0],
            vec![3.0, 6.0, 9.0]
        ]
    );
}

#[test]
fn mixed_tabs_and_spaces() {
    let file = write_fixture("  1 \t 2\n3\t\t4  \n");
    let cols = loadtxt(file.path(), 0, true).unwrap();
    assert_eq!(cols[0].to_vec(), vec![1.0, 3.0]);
    assert_eq!(cols[1].to_vec(), vec![2.0, 4.0]);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn missing_file_errors() {
    init_logging();
    let err = loadtxt("/nonexistent/data.txt", 0, false).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/data.txt"));
}

#[test]
fn unparseable_field_errors() {
    let file = write_fixture("1 2\n3 x\n");
    let err = loadtxt(file.path(), 0, true).unwrap_err();
    let msg = format!("{:#}", err);
    assert!(msg.contains("line 2, column 2"), "{}", msg);
}
