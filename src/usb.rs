//! USB-MIDI 1.0 event packet extraction.
//!
//! Class-compliant devices multiplex up to 16 virtual cables over one
//! endpoint, 32 bits per event packet: `[cable:4][CIN:4][midi0:8][midi1:8]
//! [midi2:8]`. The Code Index Number (CIN) determines how many of the three
//! trailing bytes carry MIDI data.

use tracing::trace;

use crate::error::{Error, Result};
use crate::fifo::Fifo;

/// Code Index Number of a USB-MIDI event packet (bits 27-24).
///
/// Exhaustive over the 4-bit space; 0x0/0x1 are reserved by the class spec
/// and extract zero bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodeIndexNumber {
    Reserved,
    SystemCommon2,
    SystemCommon3,
    SysexStartOrContinue,
    SysexEnd1,
    SysexEnd2,
    SysexEnd3,
    NoteOff,
    NoteOn,
    PolyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
    SingleByte,
}

impl CodeIndexNumber {
    /// Classify the low nibble of a packet's CIN field.
    pub fn from_nibble(nibble: u8) -> Self {
        match nibble & 0x0F {
            0x0 | 0x1 => CodeIndexNumber::Reserved,
            0x2 => CodeIndexNumber::SystemCommon2,
            0x3 => CodeIndexNumber::SystemCommon3,
            0x4 => CodeIndexNumber::SysexStartOrContinue,
            0x5 => CodeIndexNumber::SysexEnd1,
            0x6 => CodeIndexNumber::SysexEnd2,
            0x7 => CodeIndexNumber::SysexEnd3,
            0x8 => CodeIndexNumber::NoteOff,
            0x9 => CodeIndexNumber::NoteOn,
            0xA => CodeIndexNumber::PolyPressure,
            0xB => CodeIndexNumber::ControlChange,
            0xC => CodeIndexNumber::ProgramChange,
            0xD => CodeIndexNumber::ChannelPressure,
            0xE => CodeIndexNumber::PitchBend,
            _ => CodeIndexNumber::SingleByte,
        }
    }

    /// Number of valid MIDI bytes in a packet with this CIN.
    pub fn payload_len(self) -> usize {
        match self {
            CodeIndexNumber::Reserved => 0,
            CodeIndexNumber::SystemCommon2 => 2,
            CodeIndexNumber::SystemCommon3 => 3,
            CodeIndexNumber::SysexStartOrContinue => 3,
            CodeIndexNumber::SysexEnd1 => 1,
            CodeIndexNumber::SysexEnd2 => 2,
            CodeIndexNumber::SysexEnd3 => 3,
            CodeIndexNumber::NoteOff => 3,
            CodeIndexNumber::NoteOn => 3,
            CodeIndexNumber::PolyPressure => 3,
            CodeIndexNumber::ControlChange => 3,
            CodeIndexNumber::ProgramChange => 2,
            CodeIndexNumber::ChannelPressure => 2,
            CodeIndexNumber::PitchBend => 3,
            CodeIndexNumber::SingleByte => 1,
        }
    }
}

/// Pulls raw MIDI 1.0 bytes out of USB-MIDI event packets for one cable.
///
/// Packets addressed to other cables are normal multiplexing noise and are
/// dropped silently. Extracted bytes queue in arrival order and are drained
/// with [`read`](UsbMidiExtractor::read).
#[derive(Debug)]
pub struct UsbMidiExtractor {
    cable: u8,
    output: Fifo<u8, 4>,
}

impl UsbMidiExtractor {
    /// Create an extractor filtering on `cable` (0-15).
    pub fn new(cable: u8) -> Result<Self> {
        if cable > 0x0F {
            return Err(Error::InvalidCable(cable));
        }
        Ok(Self {
            cable,
            output: Fifo::new(),
        })
    }

    /// The cable this extractor listens on.
    #[inline]
    pub fn cable(&self) -> u8 {
        self.cable
    }

    /// Feed one 32-bit event packet.
    pub fn receive(&mut self, packet: u32) {
        let cable = ((packet >> 28) & 0x0F) as u8;
        if cable != self.cable {
            trace!(cable, filter = self.cable, "dropping packet for other cable");
            return;
        }
        let cin = CodeIndexNumber::from_nibble(((packet >> 24) & 0x0F) as u8);
        // MIDI bytes sit most-significant first: bits 23-16, 15-8, 7-0.
        let bytes = [
            ((packet >> 16) & 0xFF) as u8,
            ((packet >> 8) & 0xFF) as u8,
            (packet & 0xFF) as u8,
        ];
        for &byte in &bytes[..cin.payload_len()] {
            self.output.push_back(byte);
        }
    }

    /// True when extracted bytes are waiting to be read.
    #[inline]
    pub fn available(&self) -> bool {
        !self.output.is_empty()
    }

    /// Next extracted byte in FIFO order, or `None` when drained.
    #[inline]
    pub fn read(&mut self) -> Option<u8> {
        self.output.pop_front()
    }
}
