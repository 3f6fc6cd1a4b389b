//! NextGCore PFCP Report Library
//!
//! This crate builds the reports a UPF sends to its CP function over PFCP
//! (3GPP TS 29.244): Usage Reports for Session Report Request, Session
//! Modification Response and Session Deletion Response, Downlink Data
//! Reports, and the Session Report that aggregates them.
//!
//! # Features
//!
//! - Reporting Triggers and Usage Report Trigger flag registers
//! - Volume and Duration Measurement
//! - Usage Report IE assembly with the TS 29.244 inclusion rules
//! - Session Report Request body construction
//!
//! # Example
//!
//! ```rust
//! use ogs_report::prelude::*;
//!
//! let mut report = UsaReport::new(1, 0, UsageReportTrigger::from_bits(UsageReportTrigger::PERIO));
//! report.volume_measure = VolumeMeasure::new(1500, 500, 1000, 0, 0, 0);
//!
//! let method = MeasureMethod { volum: true, ..Default::default() };
//! let ies = report.ies(&method, &MeasureInformation::default());
//! assert_eq!(ies.len(), 6);
//!
//! let buf = encode_ies(&ies);
//! assert!(!buf.is_empty());
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod ie;
pub mod measure;
pub mod report;
pub mod session;
pub mod trigger;

#[cfg(test)]
mod property_tests;

pub use error::{ReportError, ReportResult};
pub use report::{Report, ReportType};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::action::ApplyAction;
    pub use crate::config::{ReportConf, UrrMeasure};
    pub use crate::error::{ReportError, ReportResult};
    pub use crate::ie::{encode_ies, Ie, IeType};
    pub use crate::measure::{DurationMeasure, MeasureInformation, MeasureMethod, VolumeMeasure};
    pub use crate::report::{DldReport, Report, ReportType, UsaReport, UsageReportContext};
    pub use crate::session::{BufInfo, MeasureConfig, SessReport};
    pub use crate::trigger::{ReportingTrigger, UsageReportTrigger};
}
