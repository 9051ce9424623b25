//! Fixed-layout console report of the build provenance fields.

use crate::version::VersionInfo;
use crate::PRODUCT_NAME;

/// Wraps a value in the light machine-parseable tag form.
fn value_form(v: &str) -> String {
    format!("<value>{}</value>", v)
}

/// The four report lines, in print order.
pub fn report_lines(info: &VersionInfo) -> [String; 4] {
    [
        format!("{} {}", PRODUCT_NAME, value_form(info.version())),
        format!(
            "Subversion {}",
            value_form(&format!("{} -r {}", info.url(), info.revision()))
        ),
        format!(
            "Compiled by {}",
            value_form(&format!("{} on {}", info.user(), info.date()))
        ),
        format!("Build Version {}", value_form(&info.build_version())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::BuildMetadata;

    #[test]
    fn report_has_fixed_layout() {
        let info = VersionInfo::new(Some(BuildMetadata {
            version: "1.2.0".to_string(),
            revision: "abcd123".to_string(),
            date: "2024-01-01".to_string(),
            user: "alice".to_string(),
            url: "scm://repo".to_string(),
        }));
        let lines = report_lines(&info);
        assert_eq!(lines[0], format!("{} <value>1.2.0</value>", PRODUCT_NAME));
        assert_eq!(lines[1], "Subversion <value>scm://repo -r abcd123</value>");
        assert_eq!(lines[2], "Compiled by <value>alice on 2024-01-01</value>");
        assert_eq!(
            lines[3],
            "Build Version <value>1.2.0 from abcd123 by alice on 2024-01-01</value>"
        );
    }

    #[test]
    fn report_prints_sentinels_when_metadata_is_absent() {
        let lines = report_lines(&VersionInfo::new(None));
        assert_eq!(lines[0], format!("{} <value>Unknown</value>", PRODUCT_NAME));
        assert_eq!(
            lines[3],
            "Build Version <value>Unknown from Unknown by Unknown on Unknown</value>"
        );
    }
}
