//! Measurement Types
//!
//! Measurement Method (IE 62), Measurement Information (IE 100), Volume
//! Measurement (IE 66) and Duration Measurement (IE 67).

use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

/// Measurement Method configured on a URR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureMethod {
    pub durat: bool, // Duration
    pub volum: bool, // Volume
    pub event: bool, // Event
}

impl MeasureMethod {
    pub fn encode(&self) -> u8 {
        ((self.event as u8) << 2) | ((self.volum as u8) << 1) | (self.durat as u8)
    }

    pub fn decode(val: u8) -> Self {
        Self {
            durat: val & 0x01 != 0,
            volum: (val >> 1) & 0x01 != 0,
            event: (val >> 2) & 0x01 != 0,
        }
    }
}

/// Measurement Information configured on a URR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasureInformation {
    pub mbqe: bool,  // Measurement Before QoS Enforcement
    pub inam: bool,  // Inactive Measurement
    pub radi: bool,  // Reduced Application Detection Information
    pub istm: bool,  // Immediate Start Time Metering
    pub mnop: bool,  // Measurement of Number of Packets
    pub sspoc: bool, // Send Start Pause of Charging
    pub aspoc: bool, // Applicable for Start of Pause of Charging
    pub ciam: bool,  // Control of Inactive Measurement
}

impl MeasureInformation {
    pub fn encode(&self) -> u8 {
        ((self.ciam as u8) << 7) | ((self.aspoc as u8) << 6)
            | ((self.sspoc as u8) << 5) | ((self.mnop as u8) << 4)
            | ((self.istm as u8) << 3) | ((self.radi as u8) << 2)
            | ((self.inam as u8) << 1) | (self.mbqe as u8)
    }

    pub fn decode(val: u8) -> Self {
        Self {
            mbqe: val & 0x01 != 0,
            inam: (val >> 1) & 0x01 != 0,
            radi: (val >> 2) & 0x01 != 0,
            istm: (val >> 3) & 0x01 != 0,
            mnop: (val >> 4) & 0x01 != 0,
            sspoc: (val >> 5) & 0x01 != 0,
            aspoc: (val >> 6) & 0x01 != 0,
            ciam: (val >> 7) & 0x01 != 0,
        }
    }
}

/// Volume Measurement counters and their presence flags.
///
/// The counters are accumulated by the caller; the flag byte is settled by
/// `finalize_flags` right before the report is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VolumeMeasure {
    flags: u8,
    pub total_volume: u64,
    pub uplink_volume: u64,
    pub downlink_volume: u64,
    pub total_n_packets: u64,
    pub uplink_n_packets: u64,
    pub downlink_n_packets: u64,
}

impl VolumeMeasure {
    pub const TOVOL: u8 = 0x01;
    pub const ULVOL: u8 = 0x02;
    pub const DLVOL: u8 = 0x04;
    pub const TONOP: u8 = 0x08;
    pub const ULNOP: u8 = 0x10;
    pub const DLNOP: u8 = 0x20;

    pub const VOLUME_FLAGS: u8 = Self::TOVOL | Self::ULVOL | Self::DLVOL;
    pub const PACKET_FLAGS: u8 = Self::TONOP | Self::ULNOP | Self::DLNOP;

    /// Encoded length: flag octet plus six 8-octet counters
    pub const WIRE_LEN: usize = 1 + 6 * 8;

    pub fn new(
        total_volume: u64,
        uplink_volume: u64,
        downlink_volume: u64,
        total_n_packets: u64,
        uplink_n_packets: u64,
        downlink_n_packets: u64,
    ) -> Self {
        Self {
            flags: 0,
            total_volume,
            uplink_volume,
            downlink_volume,
            total_n_packets,
            uplink_n_packets,
            downlink_n_packets,
        }
    }

    /// Mark the volume counters present, and the packet counters too when
    /// `include_packet_counts` (MNOP) is set.
    ///
    /// Flags only accumulate. Calling this again never clears a bit, so a
    /// later call with `false` after one with `true` keeps the packet flags.
    pub fn finalize_flags(&mut self, include_packet_counts: bool) {
        self.flags |= Self::VOLUME_FLAGS;
        if include_packet_counts {
            self.flags |= Self::PACKET_FLAGS;
        }
    }

    pub fn flags(&self) -> u8 {
        self.flags
    }

    pub fn tovol(&self) -> bool {
        self.flags & Self::TOVOL != 0
    }

    pub fn ulvol(&self) -> bool {
        self.flags & Self::ULVOL != 0
    }

    pub fn dlvol(&self) -> bool {
        self.flags & Self::DLVOL != 0
    }

    pub fn tonop(&self) -> bool {
        self.flags & Self::TONOP != 0
    }

    pub fn ulnop(&self) -> bool {
        self.flags & Self::ULNOP != 0
    }

    pub fn dlnop(&self) -> bool {
        self.flags & Self::DLNOP != 0
    }

    /// Flag octet followed by all six counters in fixed order. The flags
    /// tell the receiver which counters are valid.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::WIRE_LEN);
        buf.put_u8(self.flags);
        buf.put_u64(self.total_volume);
        buf.put_u64(self.uplink_volume);
        buf.put_u64(self.downlink_volume);
        buf.put_u64(self.total_n_packets);
        buf.put_u64(self.uplink_n_packets);
        buf.put_u64(self.downlink_n_packets);
        buf.freeze()
    }
}

/// Duration Measurement, sent in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationMeasure {
    pub duration: Duration,
}

impl DurationMeasure {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Whole seconds, saturating at the 4-octet field limit
    pub fn seconds(&self) -> u32 {
        u32::try_from(self.duration.as_secs()).unwrap_or(u32::MAX)
    }

    pub fn encode(&self) -> Bytes {
        Bytes::copy_from_slice(&self.seconds().to_be_bytes())
    }
}
