//! Path-based compress/decompress tests.

use fanoarc_shannon::{
    FanoArcError, FanoConfig, compress_file, decompress_file, read_archive_info,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_file_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("input.txt");
    let archive = dir.path().join("input.sf");
    let output = dir.path().join("output.txt");

    let original = b"It was the best of times, it was the worst of times. ".repeat(40);
    fs::write(&input, &original).expect("write input");

    let report = compress_file(&input, &archive, FanoConfig::COMPATIBLE).expect("compress");
    assert_eq!(report.stats.input_bytes, original.len() as u64);
    assert_eq!(
        report.stats.output_bytes,
        fs::metadata(&archive).expect("metadata").len()
    );
    assert!(report.table.is_prefix_free());

    let stats =
        decompress_file(&archive, &output, FanoConfig::COMPATIBLE, None).expect("decompress");
    assert_eq!(stats.output_bytes, original.len() as u64);
    assert_eq!(fs::read(&output).expect("read output"), original);
}

#[test]
fn test_file_roundtrip_empty() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("empty");
    let archive = dir.path().join("empty.sf");
    let output = dir.path().join("empty.out");
    fs::write(&input, b"").expect("write input");

    compress_file(&input, &archive, FanoConfig::COMPATIBLE).expect("compress");
    assert_eq!(fs::read(&archive).expect("read archive"), vec![0u8; 9]);

    decompress_file(&archive, &output, FanoConfig::COMPATIBLE, None).expect("decompress");
    assert!(fs::read(&output).expect("read output").is_empty());
}

#[test]
fn test_decompress_echo() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in");
    let archive = dir.path().join("in.sf");
    let output = dir.path().join("out");
    fs::write(&input, b"echo me").expect("write input");

    compress_file(&input, &archive, FanoConfig::COMPATIBLE).expect("compress");
    let mut echo = Vec::new();
    decompress_file(&archive, &output, FanoConfig::COMPATIBLE, Some(&mut echo))
        .expect("decompress");
    assert_eq!(echo, b"echo me");
    assert_eq!(fs::read(&output).expect("read output"), b"echo me");
}

#[test]
fn test_missing_input_is_open_error() {
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");
    let archive = dir.path().join("out.sf");

    let err = compress_file(&missing, &archive, FanoConfig::COMPATIBLE).unwrap_err();
    match err {
        FanoArcError::Open { path, .. } => assert_eq!(path, missing),
        other => panic!("expected open error, got {other:?}"),
    }
    assert!(!archive.exists());

    let err = decompress_file(&missing, dir.path().join("x"), FanoConfig::COMPATIBLE, None)
        .unwrap_err();
    assert!(matches!(err, FanoArcError::Open { .. }));
}

#[test]
fn test_unwritable_output_is_open_error() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in");
    fs::write(&input, b"data").expect("write input");
    let bad_output = dir.path().join("no-such-dir").join("out.sf");

    let err = compress_file(&input, &bad_output, FanoConfig::COMPATIBLE).unwrap_err();
    assert!(matches!(err, FanoArcError::Open { ref path, .. } if *path == bad_output));
}

#[test]
fn test_too_many_symbols_leaves_no_archive() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("all-bytes");
    let archive = dir.path().join("all-bytes.sf");
    let output = dir.path().join("all-bytes.out");
    let original: Vec<u8> = (0..=255).collect();
    fs::write(&input, &original).expect("write input");

    let err = compress_file(&input, &archive, FanoConfig::COMPATIBLE).unwrap_err();
    assert!(matches!(err, FanoArcError::TooManySymbols { .. }));
    assert!(!archive.exists());

    compress_file(&input, &archive, FanoConfig::WIDE).expect("wide compress");
    decompress_file(&archive, &output, FanoConfig::WIDE, None).expect("wide decompress");
    assert_eq!(fs::read(&output).expect("read output"), original);
}

#[test]
fn test_output_limit() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in");
    let archive = dir.path().join("in.sf");
    let output = dir.path().join("out");
    fs::write(&input, vec![b'z'; 5000]).expect("write input");
    compress_file(&input, &archive, FanoConfig::COMPATIBLE).expect("compress");

    let roomy = FanoConfig::COMPATIBLE.with_max_output(5000);
    decompress_file(&archive, &output, roomy, None).expect("decompress");
    assert_eq!(fs::read(&output).expect("read output").len(), 5000);

    let tight = FanoConfig::COMPATIBLE.with_max_output(4999);
    let err = decompress_file(&archive, &output, tight, None).unwrap_err();
    assert!(matches!(err, FanoArcError::MalformedArchive { .. }));
    assert!(fs::read(&output).expect("read output").is_empty());
}

#[test]
fn test_archive_info() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("in");
    let archive = dir.path().join("in.sf");
    fs::write(&input, b"aaaabbc").expect("write input");
    compress_file(&input, &archive, FanoConfig::COMPATIBLE).expect("compress");

    let info = read_archive_info(&archive, FanoConfig::COMPATIBLE).expect("info");
    assert_eq!(info.table_size, 3);
    assert_eq!(info.total_bits, 4 + 2 * 2 + 2);
    assert_eq!(info.header_bytes, 1 + 3 * 3 + 8);
    let symbols: Vec<u8> = info.entries.iter().map(|e| e.symbol).collect();
    assert_eq!(symbols, b"abc");

    let json = serde_json::to_value(&info).expect("json");
    assert_eq!(json["table_size"], 3);
    assert_eq!(json["entries"][0]["code"], "0");
}
