//! Session Reports
//!
//! Reports accumulated for one PFCP session and the buffering notification
//! descriptor.

use std::collections::HashMap;

use crate::config::{ReportConf, UrrMeasure};
use crate::ie::Ie;
use crate::report::{Report, ReportType};

/// Source of per-URR measurement settings
pub trait MeasureConfig {
    fn measure(&self, urr_id: u32) -> Option<UrrMeasure>;
}

impl MeasureConfig for HashMap<u32, UrrMeasure> {
    fn measure(&self, urr_id: u32) -> Option<UrrMeasure> {
        self.get(&urr_id).copied()
    }
}

impl MeasureConfig for ReportConf {
    fn measure(&self, urr_id: u32) -> Option<UrrMeasure> {
        Some(self.lookup(urr_id))
    }
}

/// Everything accumulated for one Session Report Request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessReport {
    pub seid: u64,
    pub reports: Vec<Report>,
}

impl SessReport {
    pub fn new(seid: u64) -> Self {
        Self { seid, reports: Vec::new() }
    }

    pub fn push(&mut self, report: impl Into<Report>) {
        self.reports.push(report.into());
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Union of the carried report types as a Report Type bitmap
    pub fn report_type_bits(&self) -> u8 {
        self.reports
            .iter()
            .fold(0, |bits, r| bits | r.report_type().bit())
    }

    pub fn has(&self, report_type: ReportType) -> bool {
        self.report_type_bits() & report_type.bit() != 0
    }

    /// Report Type IE (IE 39)
    pub fn report_type_ie(&self) -> Ie {
        Ie::ReportType(self.report_type_bits())
    }

    /// IEs of the Session Report Request body: Report Type followed by one
    /// grouped IE per report, in order.
    pub fn ies(&mut self, config: &impl MeasureConfig) -> Vec<Ie> {
        let mut ies = Vec::with_capacity(self.reports.len() + 1);
        ies.push(self.report_type_ie());

        for report in self.reports.iter_mut() {
            let measure = match report.urr_id() {
                Some(urr_id) => config.measure(urr_id).unwrap_or_else(|| {
                    log::warn!("No measurement config for URR[{}]", urr_id);
                    UrrMeasure::default()
                }),
                None => UrrMeasure::default(),
            };
            ies.push(report.grouped_ie(&measure.method, &measure.information));
        }

        log::debug!(
            "Session Report SEID[0x{:x}] with {} report(s)",
            self.seid,
            self.reports.len()
        );
        ies
    }
}

/// Buffering notification: a PDR started buffering for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BufInfo {
    pub seid: u64,
    pub pdr_id: u16,
}

impl BufInfo {
    pub fn new(seid: u64, pdr_id: u16) -> Self {
        Self { seid, pdr_id }
    }
}
