//! MIDI 1.0 byte stream to Universal MIDI Packet translation.
//!
//! Feeds on raw serial MIDI bytes one at a time, reconstructing message
//! boundaries (running status, System Exclusive framing) and producing
//! 32-bit UMP words for a downstream dispatcher to consume in order. The
//! byte source is arbitrary: a serial port, or the output of
//! [`UsbMidiExtractor`](crate::UsbMidiExtractor).

use tracing::trace;

use crate::error::{Error, Result};
use crate::fifo::Fifo;
use crate::ump::{midi1_word, sysex7_words, Sysex7Status};

const SYSEX_START: u8 = 0xF0;
const SYSEX_END: u8 = 0xF7;
const TUNE_REQUEST: u8 = 0xF6;

/// System Exclusive accumulation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SysexState {
    /// No sysex message open.
    Idle,
    /// 0xF0 seen, nothing flushed yet.
    Started,
    /// At least one packet flushed for the open message.
    Continuing,
}

/// Translates a MIDI 1.0 byte stream into UMP words.
///
/// Each instance owns its running-status register, sysex accumulator, and a
/// 4-word output buffer; one [`push`](UmpTranslator::push) produces at most
/// 2 words, so callers that drain with [`pop`](UmpTranslator::pop) between
/// pushes never overflow. Single-producer, single-consumer; no allocation,
/// no I/O.
#[derive(Debug)]
pub struct UmpTranslator {
    group: u8,
    running_status: Option<u8>,
    needed: usize,
    data: [u8; 2],
    data_len: usize,
    sysex: SysexState,
    sysex_bytes: [u8; 6],
    sysex_len: usize,
    output: Fifo<u32, 4>,
}

impl UmpTranslator {
    /// Create a translator stamping `group` (0-15) into every word.
    pub fn with_group(group: u8) -> Result<Self> {
        if group > 0x0F {
            return Err(Error::InvalidGroup(group));
        }
        Ok(Self {
            group,
            running_status: None,
            needed: 0,
            data: [0; 2],
            data_len: 0,
            sysex: SysexState::Idle,
            sysex_bytes: [0; 6],
            sysex_len: 0,
            output: Fifo::new(),
        })
    }

    /// The group stamped into produced words.
    #[inline]
    pub fn group(&self) -> u8 {
        self.group
    }

    /// Feed one raw MIDI 1.0 byte; may queue 0, 1, or 2 UMP words.
    pub fn push(&mut self, byte: u8) {
        if byte & 0x80 != 0 {
            self.on_status(byte);
        } else {
            self.on_data(byte);
        }
    }

    /// Next queued word in production order, or `None` when drained.
    #[inline]
    pub fn pop(&mut self) -> Option<u32> {
        self.output.pop_front()
    }

    /// True when no produced words are waiting.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Drop all translation state: running status, the sysex accumulator,
    /// and any queued output. Used when upstream synchronization is lost.
    pub fn reset(&mut self) {
        self.running_status = None;
        self.needed = 0;
        self.data_len = 0;
        self.sysex = SysexState::Idle;
        self.sysex_len = 0;
        self.output.clear();
    }

    fn on_status(&mut self, status: u8) {
        match status {
            SYSEX_START => {
                if self.sysex != SysexState::Idle {
                    trace!(pending = self.sysex_len, "sysex restarted mid-message");
                }
                self.sysex = SysexState::Started;
                self.sysex_len = 0;
                // A sysex start invalidates whatever channel message was open.
                self.running_status = None;
                self.data_len = 0;
            }
            SYSEX_END => {
                match self.sysex {
                    // Nothing flushed yet: the whole payload fits one packet.
                    SysexState::Started => self.flush_sysex(Sysex7Status::Complete),
                    SysexState::Continuing => self.flush_sysex(Sysex7Status::End),
                    SysexState::Idle => {
                        trace!("sysex end with no open message");
                        return;
                    }
                }
                self.sysex = SysexState::Idle;
                self.sysex_len = 0;
            }
            // System realtime: single byte, interleaves anywhere, leaves
            // running status and any open sysex untouched.
            0xF8..=0xFF => {
                self.output.push_back(midi1_word(self.group, status, 0, 0));
            }
            _ => {
                if self.sysex != SysexState::Idle {
                    // Orphaned partial bytes are dropped without an end
                    // packet; the sender never terminated them.
                    trace!(pending = self.sysex_len, "status byte aborted open sysex");
                    self.sysex = SysexState::Idle;
                    self.sysex_len = 0;
                }
                self.data_len = 0;
                match data_byte_count(status) {
                    Some(0) => {
                        // Tune request completes immediately and cannot
                        // carry running-status repeats.
                        self.output.push_back(midi1_word(self.group, status, 0, 0));
                        self.running_status = None;
                    }
                    Some(needed) => {
                        self.running_status = Some(status);
                        self.needed = needed;
                    }
                    None => {
                        trace!(status, "reserved status byte");
                        self.running_status = None;
                    }
                }
            }
        }
    }

    fn on_data(&mut self, byte: u8) {
        if self.sysex != SysexState::Idle {
            self.sysex_bytes[self.sysex_len] = byte;
            self.sysex_len += 1;
            if self.sysex_len == 6 {
                let status = match self.sysex {
                    SysexState::Started => Sysex7Status::Start,
                    _ => Sysex7Status::Continue,
                };
                self.flush_sysex(status);
                self.sysex = SysexState::Continuing;
                self.sysex_len = 0;
            }
            return;
        }

        let Some(status) = self.running_status else {
            // No status established yet: stay silent until one arrives.
            trace!(byte, "data byte with no running status");
            return;
        };

        self.data[self.data_len] = byte;
        self.data_len += 1;
        if self.data_len == self.needed {
            let data2 = if self.needed > 1 { self.data[1] } else { 0 };
            self.output
                .push_back(midi1_word(self.group, status, self.data[0], data2));
            // Keep the status: a following message may rely on running status.
            self.data_len = 0;
        }
    }

    fn flush_sysex(&mut self, status: Sysex7Status) {
        let mut bytes = [0u8; 6];
        bytes[..self.sysex_len].copy_from_slice(&self.sysex_bytes[..self.sysex_len]);
        let words = sysex7_words(self.group, status, &bytes, self.sysex_len as u8);
        self.output.push_back(words[0]);
        self.output.push_back(words[1]);
    }
}

impl Default for UmpTranslator {
    /// Translator on group 0.
    fn default() -> Self {
        Self::with_group(0).expect("group 0 is valid")
    }
}

/// Data bytes required to complete a message with this status byte, or
/// `None` for the reserved system commons (0xF4/0xF5).
fn data_byte_count(status: u8) -> Option<usize> {
    match status {
        // Note off/on, poly pressure, control change.
        0x80..=0xBF => Some(2),
        // Program change, channel pressure.
        0xC0..=0xDF => Some(1),
        // Pitch bend.
        0xE0..=0xEF => Some(2),
        // MTC quarter frame, song select.
        0xF1 | 0xF3 => Some(1),
        // Song position pointer.
        0xF2 => Some(2),
        TUNE_REQUEST => Some(0),
        _ => None,
    }
}
