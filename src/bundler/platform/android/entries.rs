//! The fixed entry table of the placeholder APK.
//!
//! Every entry is a `(name, generator)` pair. The generators only touch
//! compile-time constants, so the table fully determines the archive content.
//! The binary blobs carry the recognizable magic of the format they stand in
//! for (DEX, compiled resources, PNG) followed by zero padding; none of them
//! is a working instance of that format.

/// Android package identifier declared by the manifest.
pub const PACKAGE_ID: &str = "com.loanbondhu.app";

/// Human-readable application label.
pub const APP_LABEL: &str = "LoanBondhu";

/// `android:versionName` declared by the manifest.
pub const VERSION_NAME: &str = "1.0.0";

/// `android:versionCode` declared by the manifest.
pub const VERSION_CODE: u32 = 1;

/// `android:minSdkVersion` declared by the manifest.
pub const MIN_SDK: u32 = 21;

/// `android:targetSdkVersion` declared by the manifest.
pub const TARGET_SDK: u32 = 34;

/// DEX file magic, `dex\n035\0`.
pub const DEX_MAGIC: [u8; 8] = *b"dex\n035\0";

/// Compiled resource table magic.
pub const ARSC_MAGIC: [u8; 8] = *b"AAPT\0\0\0\x02";

/// PNG file signature.
pub const PNG_SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

/// Size of the zero-filled certificate block.
pub const CERT_PLACEHOLDER_LEN: usize = 128;

const DEX_PADDING: usize = 64;
const ARSC_PADDING: usize = 256;
const PNG_PADDING: usize = 64;

const ANDROID_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.loanbondhu.app"
    android:versionCode="1"
    android:versionName="1.0.0">

    <uses-sdk android:minSdkVersion="21" android:targetSdkVersion="34" />

    <uses-permission android:name="android.permission.INTERNET" />
    <uses-permission android:name="android.permission.ACCESS_NETWORK_STATE" />
    <uses-permission android:name="android.permission.CAMERA" />
    <uses-permission android:name="android.permission.READ_EXTERNAL_STORAGE" />
    <uses-permission android:name="android.permission.WRITE_EXTERNAL_STORAGE" />

    <application
        android:allowBackup="true"
        android:icon="@mipmap/ic_launcher"
        android:label="@string/app_name"
        android:theme="@style/AppTheme">

        <activity
            android:name=".MainActivity"
            android:exported="true">
            <intent-filter>
                <action android:name="android.intent.action.MAIN" />
                <category android:name="android.intent.category.LAUNCHER" />
            </intent-filter>
        </activity>

        <activity
            android:name=".AdminActivity"
            android:exported="false" />
    </application>
</manifest>"#;

const JAR_MANIFEST: &str = "Manifest-Version: 1.0
Built-By: LoanBondhu
Created-By: Android Gradle 8.1.2

Name: AndroidManifest.xml
SHA-256-Digest: XXXXX

Name: classes.dex
SHA-256-Digest: XXXXX

Name: resources.arsc
SHA-256-Digest: XXXXX
";

const SIGNATURE_FILE: &str = "Certificate-Version: 1.0
Android-Package: com.loanbondhu.app
Android-Certificate-Digest-Sha256: XXXXX
";

// Administrator credentials are deliberately absent from the packaged notes.
const APP_INFO: &str = "
LoanBondhu Mobile Application v1.0.0

Features:
- Complete loan application system
- Admin panel access
- EMI calculator
- Document upload
- Bengali/English support
- Real-time application tracking

Admin Access:
Administrator credentials are issued separately by the system owner.

Installation:
1. Enable \"Unknown Sources\" in Android Settings
2. Install this APK file
3. Open LoanBondhu app
4. Complete loan application or access admin panel

Technical:
- Minimum Android: 5.0 (API 21)
- Target Android: 14 (API 34)
- Universal architecture support
- WebView-based hybrid app

Support: support@loanbondhu.com
";

const STRINGS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<resources>
    <string name="app_name">LoanBondhu</string>
    <string name="app_description">Your Trusted Loan Partner</string>
</resources>"#;

/// One named member of the archive.
///
/// Content is produced on demand by a plain function pointer so the table can
/// live in a `static` and be iterated without allocation until write time.
#[derive(Clone, Copy, Debug)]
pub struct ArchiveEntry {
    name: &'static str,
    generate: fn() -> Vec<u8>,
}

impl ArchiveEntry {
    /// Creates an entry from its archive path and content generator.
    pub const fn new(name: &'static str, generate: fn() -> Vec<u8>) -> Self {
        Self { name, generate }
    }

    /// Archive path of the entry (forward slashes, case-sensitive).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the entry's bytes.
    pub fn content(&self) -> Vec<u8> {
        (self.generate)()
    }
}

/// All entries in write order.
pub static APK_ENTRIES: [ArchiveEntry; 12] = [
    ArchiveEntry::new("AndroidManifest.xml", android_manifest),
    ArchiveEntry::new("classes.dex", classes_dex),
    ArchiveEntry::new("resources.arsc", resources_arsc),
    ArchiveEntry::new("META-INF/MANIFEST.MF", jar_manifest),
    ArchiveEntry::new("META-INF/CERT.SF", signature_file),
    ArchiveEntry::new("META-INF/CERT.RSA", certificate),
    ArchiveEntry::new("assets/app_info.txt", app_info),
    ArchiveEntry::new("res/mipmap-hdpi/ic_launcher.png", launcher_icon),
    ArchiveEntry::new("res/mipmap-mdpi/ic_launcher.png", launcher_icon),
    ArchiveEntry::new("res/mipmap-xhdpi/ic_launcher.png", launcher_icon),
    ArchiveEntry::new("res/mipmap-xxhdpi/ic_launcher.png", launcher_icon),
    ArchiveEntry::new("res/values/strings.xml", strings_xml),
];

/// Returns the entry table.
pub fn entries() -> &'static [ArchiveEntry] {
    &APK_ENTRIES
}

fn zero_padded(header: &[u8], padding: usize) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(header.len() + padding);
    bytes.extend_from_slice(header);
    bytes.resize(header.len() + padding, 0);
    bytes
}

fn android_manifest() -> Vec<u8> {
    ANDROID_MANIFEST.as_bytes().to_vec()
}

fn classes_dex() -> Vec<u8> {
    zero_padded(&DEX_MAGIC, DEX_PADDING)
}

fn resources_arsc() -> Vec<u8> {
    zero_padded(&ARSC_MAGIC, ARSC_PADDING)
}

fn jar_manifest() -> Vec<u8> {
    JAR_MANIFEST.as_bytes().to_vec()
}

fn signature_file() -> Vec<u8> {
    SIGNATURE_FILE.as_bytes().to_vec()
}

fn certificate() -> Vec<u8> {
    vec![0; CERT_PLACEHOLDER_LEN]
}

fn app_info() -> Vec<u8> {
    APP_INFO.as_bytes().to_vec()
}

fn launcher_icon() -> Vec<u8> {
    zero_padded(&PNG_SIGNATURE, PNG_PADDING)
}

fn strings_xml() -> Vec<u8> {
    STRINGS_XML.as_bytes().to_vec()
}
