//! Read-only accessors over the build provenance record.

use std::sync::LazyLock;

use crate::metadata::{BuildMetadata, UNKNOWN};

/// Process-wide instance, initialized exactly once on first use from the
/// record stamped by the build script. Readers never observe a partially
/// populated record.
static VERSION_INFO: LazyLock<VersionInfo> =
    LazyLock::new(|| VersionInfo::new(BuildMetadata::from_build_env()));

/// Read API over an optional [`BuildMetadata`] record. Every accessor is
/// total: absence of the record (or a field) yields the `"Unknown"`
/// sentinel, never an error.
#[derive(Debug)]
pub struct VersionInfo {
    metadata: Option<BuildMetadata>,
}

impl VersionInfo {
    pub fn new(metadata: Option<BuildMetadata>) -> Self {
        Self { metadata }
    }

    /// The release version, eg. "1.2.0".
    pub fn version(&self) -> &str {
        self.field(|m| &m.version)
    }

    /// The source-control revision the artifact was built from.
    pub fn revision(&self) -> &str {
        self.field(|m| &m.revision)
    }

    /// The build timestamp, as opaque text.
    pub fn date(&self) -> &str {
        self.field(|m| &m.date)
    }

    /// The account that performed the build.
    pub fn user(&self) -> &str {
        self.field(|m| &m.user)
    }

    /// The source repository location used for the build.
    pub fn url(&self) -> &str {
        self.field(|m| &m.url)
    }

    /// Composite summary built from the four field accessors, so it degrades
    /// field by field rather than as a single combined failure.
    pub fn build_version(&self) -> String {
        format!(
            "{} from {} by {} on {}",
            self.version(),
            self.revision(),
            self.user(),
            self.date()
        )
    }

    fn field(&self, pick: impl Fn(&BuildMetadata) -> &str) -> &str {
        self.metadata.as_ref().map(pick).unwrap_or(UNKNOWN)
    }
}

/// The process-wide [`VersionInfo`].
pub fn global() -> &'static VersionInfo {
    &VERSION_INFO
}

pub fn version() -> &'static str {
    global().version()
}

pub fn revision() -> &'static str {
    global().revision()
}

pub fn date() -> &'static str {
    global().date()
}

pub fn user() -> &'static str {
    global().user()
}

pub fn url() -> &'static str {
    global().url()
}

pub fn build_version() -> String {
    global().build_version()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> VersionInfo {
        VersionInfo::new(Some(BuildMetadata {
            version: "1.2.0".to_string(),
            revision: "abcd123".to_string(),
            date: "2024-01-01".to_string(),
            user: "alice".to_string(),
            url: "scm://repo".to_string(),
        }))
    }

    #[test]
    fn accessors_return_stamped_fields() {
        let info = fixture();
        assert_eq!(info.version(), "1.2.0");
        assert_eq!(info.revision(), "abcd123");
        assert_eq!(info.date(), "2024-01-01");
        assert_eq!(info.user(), "alice");
        assert_eq!(info.url(), "scm://repo");
    }

    #[test]
    fn absent_record_yields_unknown_for_every_field() {
        let info = VersionInfo::new(None);
        assert_eq!(info.version(), "Unknown");
        assert_eq!(info.revision(), "Unknown");
        assert_eq!(info.date(), "Unknown");
        assert_eq!(info.user(), "Unknown");
        assert_eq!(info.url(), "Unknown");
    }

    #[test]
    fn build_version_concatenates_field_accessors() {
        let info = fixture();
        let expected = format!(
            "{} from {} by {} on {}",
            info.version(),
            info.revision(),
            info.user(),
            info.date()
        );
        assert_eq!(info.build_version(), expected);
        assert_eq!(
            info.build_version(),
            "1.2.0 from abcd123 by alice on 2024-01-01"
        );
    }

    #[test]
    fn build_version_degrades_to_unknown_sentinels() {
        let info = VersionInfo::new(None);
        assert_eq!(
            info.build_version(),
            "Unknown from Unknown by Unknown on Unknown"
        );
    }

    #[test]
    fn accessors_are_idempotent() {
        let info = fixture();
        assert_eq!(info.version(), info.version());
        assert_eq!(info.build_version(), info.build_version());

        let absent = VersionInfo::new(None);
        assert_eq!(absent.url(), absent.url());
    }

    #[test]
    fn global_accessor_is_stable() {
        // The stamped record depends on the build environment; only the
        // "loaded once, stable thereafter" contract is checkable here.
        assert_eq!(version(), version());
        assert_eq!(build_version(), build_version());
    }
}
