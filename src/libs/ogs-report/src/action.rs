//! Apply Action (IE 44)
//!
//! Carried with downlink data reports to tell the CP function what the UP
//! function did with the buffered packet.

/// Apply Action flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyAction {
    pub drop: bool,
    pub forw: bool, // Forward
    pub buff: bool, // Buffer
    pub nocp: bool, // Notify CP function
    pub dupl: bool, // Duplicate
    pub ipma: bool, // IP Multicast Accept
    pub ipmd: bool, // IP Multicast Deny
    pub dfrt: bool, // Duplicate for Redundant Transmission
    pub edrt: bool, // Eliminate Duplicate for Redundant Transmission
    pub bdpn: bool, // Buffered Downlink Packet Notification
    pub ddpn: bool, // Discarded Downlink Packet Notification
    pub fssm: bool, // Forward packets to lower layer SSM
    pub mbsu: bool, // Forward and replicate MBS data using Unicast transport
}

impl ApplyAction {
    /// Buffer and notify the CP function, the usual action behind a
    /// downlink data report
    pub fn buffer_notify() -> Self {
        Self { buff: true, nocp: true, ..Default::default() }
    }

    pub fn encode(&self) -> u16 {
        ((self.mbsu as u16) << 12) | ((self.fssm as u16) << 11)
            | ((self.ddpn as u16) << 10) | ((self.bdpn as u16) << 9)
            | ((self.edrt as u16) << 8) | ((self.dfrt as u16) << 7)
            | ((self.ipmd as u16) << 6) | ((self.ipma as u16) << 5)
            | ((self.dupl as u16) << 4) | ((self.nocp as u16) << 3)
            | ((self.buff as u16) << 2) | ((self.forw as u16) << 1)
            | (self.drop as u16)
    }
}
