use apk_bundler::bundler::{Bundler, SettingsBuilder, calculate_sha256, entries};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

const EXPECTED_ENTRIES: [&str; 12] = [
    "AndroidManifest.xml",
    "classes.dex",
    "resources.arsc",
    "META-INF/MANIFEST.MF",
    "META-INF/CERT.SF",
    "META-INF/CERT.RSA",
    "assets/app_info.txt",
    "res/mipmap-hdpi/ic_launcher.png",
    "res/mipmap-mdpi/ic_launcher.png",
    "res/mipmap-xhdpi/ic_launcher.png",
    "res/mipmap-xxhdpi/ic_launcher.png",
    "res/values/strings.xml",
];

fn build_into(dir: &Path) -> PathBuf {
    let output = dir.join("LoanBondhu.apk");
    let settings = SettingsBuilder::new().output_path(&output).build().unwrap();
    Bundler::new(settings).bundle().unwrap();
    output
}

fn read_member(archive: &mut ZipArchive<File>, name: &str) -> Vec<u8> {
    let mut member = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    member.read_to_end(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_builds_are_byte_identical() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let a = std::fs::read(build_into(first.path())).unwrap();
    let b = std::fs::read(build_into(second.path())).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_archive_holds_exactly_the_expected_entries() {
    let temp_dir = TempDir::new().unwrap();
    let output = build_into(temp_dir.path());

    let archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();

    let mut expected: Vec<_> = EXPECTED_ENTRIES.iter().map(|s| s.to_string()).collect();
    expected.sort();

    assert_eq!(names, expected);
    assert_eq!(entries().len(), EXPECTED_ENTRIES.len());
}

#[test]
fn test_entry_contents_follow_construction_rules() {
    let temp_dir = TempDir::new().unwrap();
    let output = build_into(temp_dir.path());
    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();

    assert!(read_member(&mut archive, "classes.dex").starts_with(b"dex\n035\x00"));
    assert!(read_member(&mut archive, "resources.arsc").starts_with(b"AAPT\x00\x00\x00\x02"));
    assert_eq!(read_member(&mut archive, "META-INF/CERT.RSA"), vec![0u8; 128]);
    assert!(!read_member(&mut archive, "META-INF/MANIFEST.MF").is_empty());

    for density in ["hdpi", "mdpi", "xhdpi", "xxhdpi"] {
        let icon = read_member(&mut archive, &format!("res/mipmap-{density}/ic_launcher.png"));
        assert!(icon.starts_with(b"\x89PNG\r\n\x1a\n"), "{density}");
    }
}

#[test]
fn test_manifest_declares_package_and_components() {
    let temp_dir = TempDir::new().unwrap();
    let output = build_into(temp_dir.path());
    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();

    let manifest = String::from_utf8(read_member(&mut archive, "AndroidManifest.xml")).unwrap();
    assert!(manifest.contains("com.loanbondhu.app"));
    assert!(manifest.contains("android.permission.INTERNET"));
    assert!(manifest.contains("android.permission.WRITE_EXTERNAL_STORAGE"));
    assert!(manifest.contains(".MainActivity"));
    assert!(manifest.contains(".AdminActivity"));
}

#[test]
fn test_rebuild_overwrites_instead_of_appending() {
    let temp_dir = TempDir::new().unwrap();
    let output = build_into(temp_dir.path());
    let first = std::fs::read(&output).unwrap();

    build_into(temp_dir.path());
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
    let archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    assert_eq!(archive.len(), EXPECTED_ENTRIES.len());
}

#[test]
fn test_missing_directory_leaves_no_archive() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("public").join("LoanBondhu.apk");
    let settings = SettingsBuilder::new().output_path(&output).build().unwrap();

    let err = Bundler::new(settings).bundle().unwrap_err();

    assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    assert!(!output.exists());
}

#[test]
fn test_artifact_checksum_matches_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("LoanBondhu.apk");
    let settings = SettingsBuilder::new().output_path(&output).build().unwrap();

    let artifact = Bundler::new(settings).bundle().unwrap();

    assert_eq!(artifact.checksum, calculate_sha256(&output).unwrap());
    assert_eq!(artifact.entries, EXPECTED_ENTRIES.map(String::from).to_vec());
}
