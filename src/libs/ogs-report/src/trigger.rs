//! Trigger Flag Registers
//!
//! Reporting Triggers (IE 37) and Usage Report Trigger (IE 63) as specified
//! in 3GPP TS 29.244 Sections 8.2.19 and 8.2.41.
//!
//! Both IEs are bitmaps of up to three octets. Older peers send two octets,
//! so decoding accepts either length and zero-extends. Encoding always
//! produces three octets, least-significant octet first.

use std::fmt;

use bytes::Bytes;

use crate::error::{ReportError, ReportResult};

/// Number of octets produced by `encode()`
pub const TRIGGER_WIRE_LEN: usize = 3;

/// Minimum number of octets accepted by `decode()`
pub const TRIGGER_MIN_LEN: usize = 2;

const TRIGGER_MASK: u32 = 0x00ff_ffff;

/// Unpack 2 or 3 little-endian octets into a register value.
fn unpack(data: &[u8], ie: &'static str) -> ReportResult<u32> {
    if data.len() < TRIGGER_MIN_LEN {
        return Err(ReportError::MalformedInput {
            ie,
            needed: TRIGGER_MIN_LEN,
            available: data.len(),
        });
    }
    let mut raw = [0u8; 4];
    let n = data.len().min(TRIGGER_WIRE_LEN);
    raw[..n].copy_from_slice(&data[..n]);
    Ok(u32::from_le_bytes(raw))
}

fn pack(bits: u32) -> Bytes {
    Bytes::copy_from_slice(&bits.to_le_bytes()[..TRIGGER_WIRE_LEN])
}

macro_rules! trigger_register {
    (
        $(#[$meta:meta])*
        $name:ident, $ie:literal {
            $($(#[$bit_meta:meta])* $bit:ident, $accessor:ident = $shift:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            flags: u32,
        }

        impl $name {
            $(
                $(#[$bit_meta])*
                pub const $bit: u32 = 1 << $shift;
            )+

            /// All defined bits
            pub const ALL: u32 = 0 $(| Self::$bit)+;

            /// Build from a raw bitmap, keeping only the low 24 bits.
            pub const fn from_bits(bits: u32) -> Self {
                Self { flags: bits & TRIGGER_MASK }
            }

            /// Raw bitmap (never wider than 24 bits)
            pub const fn bits(&self) -> u32 {
                self.flags
            }

            /// True if every bit in `mask` is set
            pub const fn contains(&self, mask: u32) -> bool {
                self.flags & mask == mask && mask != 0
            }

            /// True if no bit is set
            pub const fn is_empty(&self) -> bool {
                self.flags == 0
            }

            $(
                $(#[$bit_meta])*
                pub const fn $accessor(&self) -> bool {
                    self.flags & Self::$bit != 0
                }
            )+

            /// Encode to exactly 3 octets, least-significant first
            pub fn encode(&self) -> Bytes {
                pack(self.flags)
            }

            /// Decode from 2 or 3 octets
            pub fn decode(data: &[u8]) -> ReportResult<Self> {
                Ok(Self { flags: unpack(data, $ie)? })
            }

            /// Overwrite the register from wire octets. On error the
            /// register is left untouched.
            pub fn set_from_wire(&mut self, data: &[u8]) -> ReportResult<()> {
                self.flags = unpack(data, $ie)?;
                Ok(())
            }

            fn names(&self) -> Vec<&'static str> {
                let mut names = Vec::new();
                $(
                    if self.$accessor() {
                        names.push(stringify!($bit));
                    }
                )+
                names
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let names = self.names();
                if names.is_empty() {
                    write!(f, "-")
                } else {
                    write!(f, "{}", names.join("|"))
                }
            }
        }
    };
}

trigger_register! {
    /// Reporting Triggers (IE 37), carried in Create/Update URR
    ReportingTrigger, "Reporting Triggers" {
        /// Periodic Reporting
        PERIO, perio = 0;
        /// Volume Threshold
        VOLTH, volth = 1;
        /// Time Threshold
        TIMTH, timth = 2;
        /// Quota Holding Time
        QUHTI, quhti = 3;
        /// Start of Traffic
        START, start = 4;
        /// Stop of Traffic
        STOPT, stopt = 5;
        /// Dropped DL Traffic Threshold
        DROTH, droth = 6;
        /// Linked Usage Reporting
        LIUSA, liusa = 7;
        /// Volume Quota
        VOLQU, volqu = 8;
        /// Time Quota
        TIMQU, timqu = 9;
        /// Envelope Closure
        ENVCL, envcl = 10;
        /// MAC Addresses Reporting
        MACAR, macar = 11;
        /// Event Threshold
        EVETH, eveth = 12;
        /// Event Quota
        EVEQU, evequ = 13;
        /// IP Multicast Join/Leave
        IPMJL, ipmjl = 14;
        /// Quota Validity Time
        QUVTI, quvti = 15;
        /// Report the End Marker Reception
        REEMR, reemr = 16;
        /// User Plane Inactivity Timer
        UPINT, upint = 17;
    }
}

trigger_register! {
    /// Usage Report Trigger (IE 63), carried in every Usage Report
    UsageReportTrigger, "Usage Report Trigger" {
        /// Periodic Reporting
        PERIO, perio = 0;
        /// Volume Threshold
        VOLTH, volth = 1;
        /// Time Threshold
        TIMTH, timth = 2;
        /// Quota Holding Time
        QUHTI, quhti = 3;
        /// Start of Traffic
        START, start = 4;
        /// Stop of Traffic
        STOPT, stopt = 5;
        /// Dropped DL Traffic Threshold
        DROTH, droth = 6;
        /// Immediate Report
        IMMER, immer = 7;
        /// Volume Quota
        VOLQU, volqu = 8;
        /// Time Quota
        TIMQU, timqu = 9;
        /// Linked Usage Reporting
        LIUSA, liusa = 10;
        /// Termination Report
        TERMR, termr = 11;
        /// Monitoring Time
        MONIT, monit = 12;
        /// Envelope Closure
        ENVCL, envcl = 13;
        /// MAC Addresses Reporting
        MACAR, macar = 14;
        /// Event Threshold
        EVETH, eveth = 15;
        /// Event Quota
        EVEQU, evequ = 16;
        /// Termination By UP function Report
        TEBUR, tebur = 17;
        /// IP Multicast Join/Leave
        IPMJL, ipmjl = 18;
        /// Quota Validity Time
        QUVTI, quvti = 19;
        /// End Marker Reception Report
        EMRRE, emrre = 20;
        /// User Plane Inactivity Timer
        UPINT, upint = 21;
    }
}

impl UsageReportTrigger {
    /// Triggers that carry their own timing, so Start/End Time are omitted
    pub const NO_TIMESTAMPS: u32 = Self::START | Self::STOPT | Self::MACAR;

    /// Whether a usage report with this trigger must carry Start Time and
    /// End Time (TS 29.244 Table 7.5.8.3-1).
    pub const fn requires_timestamps(&self) -> bool {
        self.flags & Self::NO_TIMESTAMPS == 0
    }
}
