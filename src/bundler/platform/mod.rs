//! Platform-specific bundling implementations.
//!
//! | Platform | Package Types | Module |
//! |----------|--------------|---------|
//! | Android | .apk (placeholder) | [`android`] |

pub mod android;

use std::fmt;

/// Supported package types for bundling.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum PackageType {
    /// Android application package (.apk).
    ///
    /// A ZIP container with a fixed set of placeholder entries.
    Apk,
}

impl PackageType {
    /// Returns the short name for this package type.
    ///
    /// This is the lowercase identifier used in CLI output.
    pub fn short_name(&self) -> &'static str {
        match self {
            PackageType::Apk => "apk",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
