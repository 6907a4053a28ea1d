use crcsum_core::enumerate::{base_dir, enumerate};
use crcsum_core::CrcError;
use std::fs;
use std::path::PathBuf;

fn tree() -> tempfile::TempDir {
    let td = tempfile::tempdir().unwrap();
    let root = td.path();
    fs::write(root.join("b"), b"bee").unwrap();
    fs::write(root.join("a"), b"ay").unwrap();
    fs::create_dir(root.join("c")).unwrap();
    fs::write(root.join("c/d"), b"dee").unwrap();
    td
}

#[test]
fn flat_listing_skips_subdirectories() {
    let td = tree();
    let got = enumerate(td.path(), false).unwrap();
    assert_eq!(got, vec![td.path().join("a"), td.path().join("b")]);
}

#[test]
fn recursive_listing_descends() {
    let td = tree();
    let got = enumerate(td.path(), true).unwrap();
    assert_eq!(got, vec![td.path().join("a"), td.path().join("b"), td.path().join("c/d")]);
}

#[test]
fn order_is_stable() {
    let td = tree();
    for i in 0..20 {
        fs::write(td.path().join(format!("f{i:02}")), [i as u8]).unwrap();
    }
    let first = enumerate(td.path(), true).unwrap();
    let second = enumerate(td.path(), true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn single_file_yields_itself() {
    let td = tree();
    let f = td.path().join("a");
    assert_eq!(enumerate(&f, true).unwrap(), vec![f.clone()]);
    assert_eq!(base_dir(&f), td.path().to_path_buf());
}

#[test]
fn missing_root_is_path_not_found() {
    let err = enumerate(&PathBuf::from("/does/not/exist"), false).unwrap_err();
    assert!(matches!(err, CrcError::PathNotFound(_)), "{err:?}");
    assert!(err.is_fatal());
}

#[test]
fn empty_directory_yields_nothing() {
    let td = tempfile::tempdir().unwrap();
    assert!(enumerate(td.path(), true).unwrap().is_empty());
}

#[test]
fn bare_filename_base_is_current_dir() {
    assert_eq!(base_dir(&PathBuf::from("no-such-file.bin")), PathBuf::from("."));
}

#[cfg(target_family = "unix")]
#[test]
fn symlinked_directories_are_not_listed_or_followed() {
    let td = tree();
    std::os::unix::fs::symlink(td.path().join("c"), td.path().join("link")).unwrap();
    let got = enumerate(td.path(), true).unwrap();
    assert_eq!(got, vec![td.path().join("a"), td.path().join("b"), td.path().join("c/d")]);
}
