//! Report Configuration
//!
//! Per-URR measurement settings used when assembling usage reports. The
//! session manager normally supplies these from Create URR; the YAML form is
//! used for static rules and tests.
//!
//! ```yaml
//! default:
//!   method: { volum: true }
//! urr:
//!   - urr_id: 1
//!     method: { volum: true, durat: true }
//!     information: { mnop: true }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::measure::{MeasureInformation, MeasureMethod};

/// Measurement settings of one URR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UrrMeasure {
    pub method: MeasureMethod,
    pub information: MeasureInformation,
}

impl UrrMeasure {
    pub fn new(method: MeasureMethod, information: MeasureInformation) -> Self {
        Self { method, information }
    }
}

/// Settings for a specific URR
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrrMeasureConf {
    pub urr_id: u32,
    #[serde(default)]
    pub method: MeasureMethod,
    #[serde(default)]
    pub information: MeasureInformation,
}

impl UrrMeasureConf {
    pub fn measure(&self) -> UrrMeasure {
        UrrMeasure::new(self.method, self.information)
    }
}

/// Report configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConf {
    /// Applied to URRs without their own entry
    pub default: UrrMeasure,
    /// Per-URR overrides
    pub urr: Vec<UrrMeasureConf>,
}

impl ReportConf {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ReportResult<Self> {
        let conf: ReportConf = serde_yaml::from_str(yaml)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> ReportResult<()> {
        let mut seen = HashSet::new();
        for entry in &self.urr {
            if !seen.insert(entry.urr_id) {
                return Err(ReportError::Config(format!(
                    "duplicate URR ID {}",
                    entry.urr_id
                )));
            }
        }
        Ok(())
    }

    /// Settings for `urr_id`, falling back to the default
    pub fn lookup(&self, urr_id: u32) -> UrrMeasure {
        self.urr
            .iter()
            .find(|entry| entry.urr_id == urr_id)
            .map(UrrMeasureConf::measure)
            .unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default:
  method: { volum: true }
urr:
  - urr_id: 1
    method: { volum: true, durat: true }
    information: { mnop: true }
  - urr_id: 2
    method: { event: true }
"#;

    #[test]
    fn test_parse_sample() {
        let conf = ReportConf::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(conf.urr.len(), 2);

        let urr1 = conf.lookup(1);
        assert!(urr1.method.volum && urr1.method.durat);
        assert!(urr1.information.mnop);

        let urr2 = conf.lookup(2);
        assert!(urr2.method.event);
        assert!(!urr2.method.volum);
    }

    #[test]
    fn test_lookup_falls_back_to_default() {
        let conf = ReportConf::from_yaml_str(SAMPLE).unwrap();
        let other = conf.lookup(99);
        assert!(other.method.volum);
        assert!(!other.method.durat);
        assert!(!other.information.mnop);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let conf = ReportConf::from_yaml_str("{}").unwrap();
        assert_eq!(conf, ReportConf::default());
    }

    #[test]
    fn test_duplicate_urr_rejected() {
        let yaml = "urr:\n  - urr_id: 4\n  - urr_id: 4\n";
        let err = ReportConf::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ReportConf::from_yaml_str("urr: [ { urr_id: nope } ]").unwrap_err();
        assert!(matches!(err, ReportError::Yaml(_)));
    }
}
