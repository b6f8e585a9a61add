//! Android bundling support for placeholder `.apk` packages.
//!
//! An APK is a ZIP container. This module writes a fixed member set:
//!
//! - `AndroidManifest.xml`, `classes.dex`, `resources.arsc` at the root
//! - `META-INF/MANIFEST.MF`, `META-INF/CERT.SF`, `META-INF/CERT.RSA`
//! - `assets/app_info.txt`
//! - `res/mipmap-{hdpi,mdpi,xhdpi,xxhdpi}/ic_launcher.png`
//! - `res/values/strings.xml`
//!
//! The payload, resource table, certificate and icons are placeholders with
//! valid magic bytes only. The package is not signed.

pub mod apk;
pub mod entries;

use crate::bundler::{error::Result, settings::Settings};
use std::path::PathBuf;

/// Bundle the placeholder APK at the configured output path.
/// Returns vector with path to created .apk file.
pub fn bundle_project(settings: &Settings) -> Result<Vec<PathBuf>> {
    let package_path = settings.output_path().to_path_buf();

    log::info!(
        "Bundling {} {} ({})",
        entries::PACKAGE_ID,
        entries::VERSION_NAME,
        package_path.display()
    );

    apk::write_apk(&package_path, entries::entries())?;

    Ok(vec![package_path])
}
