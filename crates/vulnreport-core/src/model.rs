use serde::Deserialize;

/// Sentinel family label for records that arrive without one.
pub const UNKNOWN_FAMILY: &str = "-";

/// One finding within a scan's results.
///
/// The platform omits fields freely, so every field carries a
/// documented default applied during deserialization: `severity` → 0,
/// `count` → 0, `plugin_family` → `"-"`. Aggregation code downstream
/// never has to branch on absence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vulnerability {
    /// Severity score on the platform's 0–10 scale.
    #[serde(default)]
    pub severity: f64,
    /// Number of affected instances. Negative values are rejected at
    /// the boundary by deserialization.
    #[serde(default)]
    pub count: u64,
    /// Category label grouping findings by detection-rule origin.
    #[serde(default = "unknown_family")]
    pub plugin_family: String,
}

fn unknown_family() -> String {
    UNKNOWN_FAMILY.to_string()
}

impl Default for Vulnerability {
    fn default() -> Self {
        Self {
            severity: 0.0,
            count: 0,
            plugin_family: unknown_family(),
        }
    }
}

/// Identifier and display name of one scan known to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanDescriptor {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// Result payload for a single scan.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScanResults {
    /// Absent key means an empty result, not an error.
    #[serde(default)]
    pub vulnerabilities: Vec<Vulnerability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vulnerability_fields_default_when_absent() {
        let vuln: Vulnerability = serde_json::from_str("{}").expect("empty object should parse");
        assert_eq!(vuln.severity, 0.0);
        assert_eq!(vuln.count, 0);
        assert_eq!(vuln.plugin_family, UNKNOWN_FAMILY);
    }

    #[test]
    fn vulnerability_parses_full_record() {
        let vuln: Vulnerability = serde_json::from_str(
            r#"{"severity": 7.5, "count": 12, "plugin_family": "Web Servers"}"#,
        )
        .expect("full record should parse");
        assert_eq!(vuln.severity, 7.5);
        assert_eq!(vuln.count, 12);
        assert_eq!(vuln.plugin_family, "Web Servers");
    }

    #[test]
    fn negative_count_is_rejected() {
        let result: Result<Vulnerability, _> = serde_json::from_str(r#"{"count": -3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn scan_results_default_to_empty_list() {
        let results: ScanResults = serde_json::from_str("{}").expect("empty object should parse");
        assert!(results.vulnerabilities.is_empty());
    }

    #[test]
    fn scan_descriptor_name_defaults_to_empty() {
        let scan: ScanDescriptor =
            serde_json::from_str(r#"{"id": 42}"#).expect("id-only descriptor should parse");
        assert_eq!(scan.id, 42);
        assert!(scan.name.is_empty());
    }
}
