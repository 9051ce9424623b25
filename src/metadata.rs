//! Build-time metadata record stamped by `build.rs`.

/// Sentinel substituted for any provenance field that was not captured.
pub const UNKNOWN: &str = "Unknown";

/// Immutable build provenance record. Populated once at initialization and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    /// Release identifier, eg. "1.2.0".
    pub version: String,
    /// Source-control revision the artifact was built from.
    pub revision: String,
    /// Build timestamp, opaque text.
    pub date: String,
    /// Account that performed the build.
    pub user: String,
    /// Source repository location used for the build.
    pub url: String,
}

impl BuildMetadata {
    /// Reads the record stamped into the binary by the build script.
    ///
    /// Returns `None` when no field was stamped at all (the build step did
    /// not run, or the metadata was stripped). Individually missing fields
    /// degrade to [`UNKNOWN`] rather than failing the whole record.
    pub fn from_build_env() -> Option<Self> {
        let version = option_env!("BUILDINFO_VERSION");
        let revision = option_env!("BUILDINFO_REVISION");
        let date = option_env!("BUILDINFO_DATE");
        let user = option_env!("BUILDINFO_USER");
        let url = option_env!("BUILDINFO_URL");

        if version.is_none() && revision.is_none() && date.is_none() && user.is_none() && url.is_none()
        {
            return None;
        }

        Some(Self {
            version: version.unwrap_or(UNKNOWN).to_string(),
            revision: revision.unwrap_or(UNKNOWN).to_string(),
            date: date.unwrap_or(UNKNOWN).to_string(),
            user: user.unwrap_or(UNKNOWN).to_string(),
            url: url.unwrap_or(UNKNOWN).to_string(),
        })
    }
}
