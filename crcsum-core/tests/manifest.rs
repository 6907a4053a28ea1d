use crcsum_core::manifest::{Manifest, CHECKSUM_LIBRARY_VERSION, VERSION};
use crcsum_core::output::{AlwaysOverwrite, NeverOverwrite};
use crcsum_core::CrcError;
use std::fs;
use std::path::Path;

fn sample(n: usize) -> Manifest {
    let mut mf = Manifest::new();
    for i in 0..n {
        mf.push(format!("dir/file-{i}.bin"), (i as u32).wrapping_mul(0x9E37_79B9));
    }
    mf.push("max.bin", u32::MAX);
    mf
}

#[test]
fn save_then_load_preserves_entries() {
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("crc.json");
    let mf = sample(50);
    mf.save(&p, false, &mut NeverOverwrite).unwrap();
    let back = Manifest::load(&p).unwrap();
    assert_eq!(back, mf);
    assert_eq!(back.files.len(), 51);
}

#[test]
fn wire_keys() {
    let mf = sample(1);
    let v: serde_json::Value = serde_json::from_slice(&mf.to_json(false).unwrap()).unwrap();
    assert_eq!(v["version"], VERSION);
    assert_eq!(v["zlib_version"], CHECKSUM_LIBRARY_VERSION);
    assert_eq!(v["files"][0]["filename"], "dir/file-0.bin");
    assert_eq!(v["files"][1]["crc"], u32::MAX as u64);
}

#[test]
fn pretty_output_is_indented() {
    let mf = sample(1);
    let pretty = String::from_utf8(mf.to_json(true).unwrap()).unwrap();
    let compact = String::from_utf8(mf.to_json(false).unwrap()).unwrap();
    assert!(pretty.contains("\n    \"files\": ["));
    assert!(!compact.contains('\n'));
}

#[test]
fn accepts_library_version_alias_and_legacy_layout() {
    let json = r#"{"files":[{"filename":"a","crc":12}],"version":"0.9","checksum_library_version":"1.2.11"}"#;
    let mf: Manifest = serde_json::from_str(json).unwrap();
    assert_eq!(mf.checksum_library_version, "1.2.11");

    let python = r#"{"files": [{"filename": "./x/y", "crc": 3}], "version": "1.0.0", "zlib_version": "1.2.11"}"#;
    let mf: Manifest = serde_json::from_str(python).unwrap();
    assert_eq!(mf.files[0].filename, "./x/y");
}

fn parse_err(body: &str) -> CrcError {
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("bad.json");
    fs::write(&p, body).unwrap();
    Manifest::load(&p).unwrap_err()
}

#[test]
fn malformed_manifests_are_parse_errors() {
    for body in [
        "not json",
        r#"{"version":"1.0.0"}"#,
        r#"{"files":[{"filename":"a"}]}"#,
        r#"{"files":[{"filename":"a","crc":-1}]}"#,
        r#"{"files":[{"filename":"a","crc":4294967296}]}"#,
    ] {
        let err = parse_err(body);
        assert!(matches!(err, CrcError::ManifestParse { .. }), "{body}: {err:?}");
        assert!(err.is_fatal());
    }
}

#[test]
fn missing_manifest_is_path_not_found() {
    let err = Manifest::load(Path::new("/does/not/exist.json")).unwrap_err();
    assert!(matches!(err, CrcError::PathNotFound(_)), "{err:?}");
}

#[test]
fn existing_destination_needs_consent() {
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("crc.json");
    fs::write(&p, b"keep me").unwrap();
    let mf = sample(2);

    let err = mf.save(&p, false, &mut NeverOverwrite).unwrap_err();
    assert!(matches!(err, CrcError::OutputCollision(_)), "{err:?}");
    assert_eq!(fs::read(&p).unwrap(), b"keep me");

    let mut asked = Vec::new();
    let mut decline = |path: &Path| {
        asked.push(path.to_path_buf());
        false
    };
    assert!(mf.save(&p, false, &mut decline).is_err());
    assert_eq!(asked, vec![p.clone()]);

    mf.save(&p, true, &mut AlwaysOverwrite).unwrap();
    assert_eq!(Manifest::load(&p).unwrap(), mf);
}

#[test]
fn fresh_destination_does_not_ask() {
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("new.json");
    let mut never_called = |_: &Path| -> bool { panic!("should not be asked") };
    sample(1).save(&p, false, &mut never_called).unwrap();
    assert!(p.exists());
}

#[test]
fn unwritable_destination_is_io_error() {
    let td = tempfile::tempdir().unwrap();
    let p = td.path().join("no-such-dir").join("crc.json");
    let err = sample(1).save(&p, false, &mut AlwaysOverwrite).unwrap_err();
    assert!(matches!(err, CrcError::Io { .. }), "{err:?}");
}
