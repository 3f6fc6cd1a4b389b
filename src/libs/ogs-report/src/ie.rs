//! PFCP Information Elements
//!
//! The IE values produced by report assembly and their TLV encoding as
//! specified in 3GPP TS 29.244 Section 8.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use bytes::{BufMut, Bytes, BytesMut};

use crate::measure::{DurationMeasure, VolumeMeasure};
use crate::trigger::UsageReportTrigger;

/// Seconds between the NTP epoch (1900-01-01) and the Unix epoch
pub const NTP_UNIX_OFFSET: u64 = 2_208_988_800;

/// PFCP IE Type values used by report construction (TS 29.244 Section 8.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum IeType {
    ReportType = 39,
    PdrId = 56,
    UsageReportTrigger = 63,
    VolumeMeasurement = 66,
    DurationMeasurement = 67,
    StartTime = 75,
    EndTime = 76,
    UsageReportSmr = 78,
    UsageReportSdr = 79,
    UsageReportSrr = 80,
    UrrId = 81,
    DownlinkDataReport = 83,
    UrSeqn = 104,
}

/// PFCP IE Header (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IeHeader {
    pub ie_type: u16,
    pub length: u16,
}

impl IeHeader {
    pub const LEN: usize = 4;

    pub fn new(ie_type: IeType, length: u16) -> Self {
        Self {
            ie_type: ie_type as u16,
            length,
        }
    }

    pub fn encode(&self, buf: &mut BytesMut) {
        buf.put_u16(self.ie_type);
        buf.put_u16(self.length);
    }
}

/// One field of an outgoing report, ready for encoding.
///
/// Lists of `Ie` are ordered; the order produced by the assemblers is the
/// order written on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ie {
    UrrId(u32),
    UrSeqn(u32),
    UsageReportTrigger(UsageReportTrigger),
    StartTime(SystemTime),
    EndTime(SystemTime),
    VolumeMeasurement(VolumeMeasure),
    DurationMeasurement(DurationMeasure),
    PdrId(u16),
    /// Report Type bitmap (IE 39)
    ReportType(u8),
    /// Grouped IE; children are encoded in order inside the parent
    Grouped { ie_type: IeType, ies: Vec<Ie> },
}

impl Ie {
    pub fn ie_type(&self) -> IeType {
        match self {
            Ie::UrrId(_) => IeType::UrrId,
            Ie::UrSeqn(_) => IeType::UrSeqn,
            Ie::UsageReportTrigger(_) => IeType::UsageReportTrigger,
            Ie::StartTime(_) => IeType::StartTime,
            Ie::EndTime(_) => IeType::EndTime,
            Ie::VolumeMeasurement(_) => IeType::VolumeMeasurement,
            Ie::DurationMeasurement(_) => IeType::DurationMeasurement,
            Ie::PdrId(_) => IeType::PdrId,
            Ie::ReportType(_) => IeType::ReportType,
            Ie::Grouped { ie_type, .. } => *ie_type,
        }
    }

    /// Children of a grouped IE, or `None` for a leaf
    pub fn children(&self) -> Option<&[Ie]> {
        match self {
            Ie::Grouped { ies, .. } => Some(ies.as_slice()),
            _ => None,
        }
    }

    /// Encoded value, without the IE header
    pub fn value(&self) -> Bytes {
        match self {
            Ie::UrrId(v) | Ie::UrSeqn(v) => {
                Bytes::copy_from_slice(&v.to_be_bytes())
            }
            Ie::UsageReportTrigger(t) => t.encode(),
            Ie::StartTime(t) | Ie::EndTime(t) => {
                Bytes::copy_from_slice(&ntp_seconds(*t).to_be_bytes())
            }
            Ie::VolumeMeasurement(vm) => vm.encode(),
            Ie::DurationMeasurement(dm) => dm.encode(),
            Ie::PdrId(v) => Bytes::copy_from_slice(&v.to_be_bytes()),
            Ie::ReportType(v) => Bytes::copy_from_slice(&[*v]),
            Ie::Grouped { ies, .. } => encode_ies(ies),
        }
    }

    /// Encode as TLV (header followed by value)
    pub fn encode(&self, buf: &mut BytesMut) {
        let value = self.value();
        IeHeader::new(self.ie_type(), value.len() as u16).encode(buf);
        buf.put_slice(&value);
    }
}

/// Encode a list of IEs back to back, preserving order
pub fn encode_ies(ies: &[Ie]) -> Bytes {
    let mut buf = BytesMut::new();
    for ie in ies {
        ie.encode(&mut buf);
    }
    buf.freeze()
}

/// Convert a timestamp to 32-bit NTP seconds (TS 29.244 Section 8.2.38).
///
/// Times before the Unix epoch clamp to the epoch; the counter wraps as NTP
/// era 0 does.
pub fn ntp_seconds(t: SystemTime) -> u32 {
    let unix = t
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_secs();
    (unix + NTP_UNIX_OFFSET) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ie_header_encode() {
        let mut buf = BytesMut::new();
        IeHeader::new(IeType::UrrId, 4).encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x00, 81, 0x00, 0x04]);
    }

    #[test]
    fn test_u32_ie_encode() {
        let mut buf = BytesMut::new();
        Ie::UrrId(0x0102_0304).encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x00, 81, 0x00, 0x04, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_trigger_ie_is_three_octets() {
        let ie = Ie::UsageReportTrigger(UsageReportTrigger::from_bits(UsageReportTrigger::PERIO));
        let mut buf = BytesMut::new();
        ie.encode(&mut buf);
        assert_eq!(buf.as_ref(), &[0x00, 63, 0x00, 0x03, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_ntp_seconds() {
        assert_eq!(ntp_seconds(UNIX_EPOCH), NTP_UNIX_OFFSET as u32);
        let t = UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        assert_eq!(ntp_seconds(t), (1_600_000_000u64 + NTP_UNIX_OFFSET) as u32);
        assert_eq!(ntp_seconds(t - Duration::from_secs(1)), ntp_seconds(t) - 1);
    }

    #[test]
    fn test_grouped_ie_nests_children() {
        let grouped = Ie::Grouped {
            ie_type: IeType::DownlinkDataReport,
            ies: vec![Ie::PdrId(7)],
        };
        let mut buf = BytesMut::new();
        grouped.encode(&mut buf);
        assert_eq!(
            buf.as_ref(),
            &[0x00, 83, 0x00, 0x06, 0x00, 56, 0x00, 0x02, 0x00, 0x07]
        );
        assert_eq!(grouped.children().map(|c| c.len()), Some(1));
        assert!(Ie::PdrId(7).children().is_none());
    }

    #[test]
    fn test_encode_ies_preserves_order() {
        let bytes = encode_ies(&[Ie::UrrId(1), Ie::UrSeqn(2)]);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..2], &[0x00, 81]);
        assert_eq!(&bytes[8..10], &[0x00, 104]);
    }
}
