//! Universal MIDI Packet word layout.
//!
//! Words are plain `u32`s; the top nibble of the first word of every message
//! is the message-type tag the downstream dispatcher switches on. This crate
//! produces two families:
//!
//! - MIDI 1.0 channel-voice/system, one word:
//!   `[type:4][group:4][status:8][data1:8][data2:8]`
//! - sysex7, two words:
//!   `[type:4][group:4][sysex-status:4][count:4][b0:8][b1:8]` then
//!   `[b2:8][b3:8][b4:8][b5:8]` (unused trailing bytes zero-filled)

/// Message-type nibble for MIDI 1.0 channel-voice/system words.
pub const MESSAGE_TYPE_MIDI1: u8 = 0x2;
/// Message-type nibble for sysex7 word pairs.
pub const MESSAGE_TYPE_SYSEX7: u8 = 0x3;

/// Framing tag carried in the upper nibble of a sysex7 packet's third nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sysex7Status {
    /// The whole message fits in this packet.
    Complete = 0x0,
    /// First packet of a multi-packet message.
    Start = 0x1,
    /// Middle packet.
    Continue = 0x2,
    /// Final packet.
    End = 0x3,
}

/// Pack a 1-word MIDI 1.0 channel-voice/system message.
///
/// Absent data bytes are passed as zero by the caller.
#[inline]
pub fn midi1_word(group: u8, status: u8, data1: u8, data2: u8) -> u32 {
    ((MESSAGE_TYPE_MIDI1 as u32) << 28)
        | (((group & 0x0F) as u32) << 24)
        | ((status as u32) << 16)
        | ((data1 as u32) << 8)
        | (data2 as u32)
}

/// Pack a sysex7 word pair carrying `count` (0-6) payload bytes.
#[inline]
pub fn sysex7_words(group: u8, status: Sysex7Status, bytes: &[u8; 6], count: u8) -> [u32; 2] {
    debug_assert!(count <= 6);
    let word0 = ((MESSAGE_TYPE_SYSEX7 as u32) << 28)
        | (((group & 0x0F) as u32) << 24)
        | ((status as u32) << 20)
        | (((count & 0x0F) as u32) << 16)
        | ((bytes[0] as u32) << 8)
        | (bytes[1] as u32);
    let word1 = ((bytes[2] as u32) << 24)
        | ((bytes[3] as u32) << 16)
        | ((bytes[4] as u32) << 8)
        | (bytes[5] as u32);
    [word0, word1]
}

/// Message-type nibble (bits 31-28) of a UMP word.
#[inline]
pub fn message_type(word: u32) -> u8 {
    ((word >> 28) & 0x0F) as u8
}

/// Group field (bits 27-24) of a UMP word.
#[inline]
pub fn group(word: u32) -> u8 {
    ((word >> 24) & 0x0F) as u8
}
