//! Reports
//!
//! Report kinds carried in a PFCP Session Report Request and the Usage
//! Report assembler (TS 29.244 Sections 7.5.8, 7.5.5.2 and 7.5.7.2).

use std::fmt;
use std::time::SystemTime;

use bytes::Bytes;

use crate::action::ApplyAction;
use crate::error::ReportError;
use crate::ie::{Ie, IeType};
use crate::measure::{DurationMeasure, MeasureInformation, MeasureMethod, VolumeMeasure};
use crate::trigger::UsageReportTrigger;

/// Report Type (TS 29.244 Section 8.2.21)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ReportType {
    /// Downlink Data Report
    Dldr = 1,
    /// Usage Report
    Usar = 2,
    /// Error Indication Report
    Erir = 3,
    /// User Plane Inactivity Report
    Upir = 4,
    /// TSC Management Information Report
    Tmir = 5,
    /// Session Report
    Sesr = 6,
    /// UE IP address Usage Information Report
    Uisr = 7,
}

impl ReportType {
    pub fn name(&self) -> &'static str {
        match self {
            ReportType::Dldr => "DLDR",
            ReportType::Usar => "USAR",
            ReportType::Erir => "ERIR",
            ReportType::Upir => "UPIR",
            ReportType::Tmir => "TMIR",
            ReportType::Sesr => "SESR",
            ReportType::Uisr => "UISR",
        }
    }

    /// Bit of this type in the Report Type IE
    pub fn bit(&self) -> u8 {
        1 << (*self as u8 - 1)
    }
}

impl TryFrom<u8> for ReportType {
    type Error = ReportError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Dldr),
            2 => Ok(Self::Usar),
            3 => Ok(Self::Erir),
            4 => Ok(Self::Upir),
            5 => Ok(Self::Tmir),
            6 => Ok(Self::Sesr),
            7 => Ok(Self::Uisr),
            _ => Err(ReportError::InvalidReportType(value)),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Message that carries a Usage Report; selects the grouped IE type only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageReportContext {
    SessionReportRequest,
    SessionModificationResponse,
    SessionDeletionResponse,
}

impl UsageReportContext {
    pub fn ie_type(&self) -> IeType {
        match self {
            UsageReportContext::SessionReportRequest => IeType::UsageReportSrr,
            UsageReportContext::SessionModificationResponse => IeType::UsageReportSmr,
            UsageReportContext::SessionDeletionResponse => IeType::UsageReportSdr,
        }
    }
}

/// Downlink Data Report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DldReport {
    pub pdr_id: u16,
    pub action: ApplyAction,
    pub buf_pkt: Bytes,
}

impl DldReport {
    pub fn new(pdr_id: u16, action: ApplyAction, buf_pkt: Bytes) -> Self {
        Self { pdr_id, action, buf_pkt }
    }

    pub fn report_type(&self) -> ReportType {
        ReportType::Dldr
    }

    pub fn ies(&self) -> Vec<Ie> {
        vec![Ie::PdrId(self.pdr_id)]
    }

    /// Downlink Data Report grouped IE (IE 83)
    pub fn grouped_ie(&self) -> Ie {
        Ie::Grouped {
            ie_type: IeType::DownlinkDataReport,
            ies: self.ies(),
        }
    }
}

/// Usage Report: one URR's measurement snapshot at report time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsaReport {
    pub urr_id: u32,
    pub ur_seqn: u32,
    pub usar_trigger: UsageReportTrigger,
    pub volume_measure: VolumeMeasure,
    pub duration_measure: DurationMeasure,
    pub query_urr_ref: Option<u32>,
    pub start_time: SystemTime,
    pub end_time: SystemTime,
}

impl Default for UsaReport {
    fn default() -> Self {
        Self {
            urr_id: 0,
            ur_seqn: 0,
            usar_trigger: UsageReportTrigger::default(),
            volume_measure: VolumeMeasure::default(),
            duration_measure: DurationMeasure::default(),
            query_urr_ref: None,
            start_time: SystemTime::UNIX_EPOCH,
            end_time: SystemTime::UNIX_EPOCH,
        }
    }
}

impl UsaReport {
    pub fn new(urr_id: u32, ur_seqn: u32, usar_trigger: UsageReportTrigger) -> Self {
        Self {
            urr_id,
            ur_seqn,
            usar_trigger,
            ..Default::default()
        }
    }

    pub fn report_type(&self) -> ReportType {
        ReportType::Usar
    }

    /// Assemble the Usage Report child IEs.
    ///
    /// The same list is mandated for Session Report Request, Session
    /// Modification Response and Session Deletion Response. When the URR
    /// measures volume the volume flags are finalized here, so the report's
    /// `volume_measure` is modified.
    pub fn ies(&mut self, method: &MeasureMethod, info: &MeasureInformation) -> Vec<Ie> {
        let mut ies = vec![
            Ie::UrrId(self.urr_id),
            Ie::UrSeqn(self.ur_seqn),
            Ie::UsageReportTrigger(self.usar_trigger),
        ];

        // Start/End Time are absent for Start of Traffic, Stop of Traffic
        // and MAC Addresses Reporting.
        if self.usar_trigger.requires_timestamps() {
            ies.push(Ie::StartTime(self.start_time));
            ies.push(Ie::EndTime(self.end_time));
        }

        if method.volum {
            self.volume_measure.finalize_flags(info.mnop);
            ies.push(Ie::VolumeMeasurement(self.volume_measure));
        }

        if method.durat {
            ies.push(Ie::DurationMeasurement(self.duration_measure));
        }

        log::trace!(
            "URR[{}] SEQN[{}] assembled {} IEs",
            self.urr_id,
            self.ur_seqn,
            ies.len()
        );
        ies
    }

    /// Usage Report grouped IE for the given message
    pub fn grouped_ie(
        &mut self,
        context: UsageReportContext,
        method: &MeasureMethod,
        info: &MeasureInformation,
    ) -> Ie {
        log::debug!(
            "Usage Report URR[{}] trigger[{}] in {:?}",
            self.urr_id, self.usar_trigger, context
        );
        Ie::Grouped {
            ie_type: context.ie_type(),
            ies: self.ies(method, info),
        }
    }
}

/// A report accumulated for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Dldr(DldReport),
    Usar(UsaReport),
}

impl Report {
    pub fn report_type(&self) -> ReportType {
        match self {
            Report::Dldr(r) => r.report_type(),
            Report::Usar(r) => r.report_type(),
        }
    }

    /// Grouped IE for a Session Report Request
    pub fn grouped_ie(&mut self, method: &MeasureMethod, info: &MeasureInformation) -> Ie {
        match self {
            Report::Dldr(r) => r.grouped_ie(),
            Report::Usar(r) => r.grouped_ie(UsageReportContext::SessionReportRequest, method, info),
        }
    }

    pub fn urr_id(&self) -> Option<u32> {
        match self {
            Report::Usar(r) => Some(r.urr_id),
            Report::Dldr(_) => None,
        }
    }
}

impl From<DldReport> for Report {
    fn from(r: DldReport) -> Self {
        Report::Dldr(r)
    }
}

impl From<UsaReport> for Report {
    fn from(r: UsaReport) -> Self {
        Report::Usar(r)
    }
}
