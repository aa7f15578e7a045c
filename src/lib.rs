//! Transcoding between wire encodings of the MIDI protocol family.
//!
//! Moves bytes and words between three encodings without interpreting event
//! meaning:
//! - [`UmpTranslator`]: classic serial MIDI 1.0 byte stream (running status,
//!   System Exclusive framing) to 32-bit Universal MIDI Packet words
//! - [`UsbMidiExtractor`]: USB-MIDI 1.0 event packets to raw MIDI 1.0 bytes,
//!   filtered per virtual cable
//! - [`decode_le7`]/[`encode_le7`]: the little-endian 7-bit integer codec
//!   shared with MIDI Capability Inquiry payload fields
//!
//! All components are synchronous, allocation-free, and single-owner; each
//! instance buffers its pending output in a fixed 4-slot FIFO drained by the
//! caller. Downstream word consumption (dispatch, reassembly of multi-word
//! sysex7 messages) is out of scope: words are handed over strictly in
//! production order, one `pop` at a time.
//!
//! Feature gates: `serde` (serialization derives on the plain data enums).

pub mod error;
pub use error::{Error, Result};

mod fifo;
pub use fifo::Fifo;

mod le7;
pub use le7::{decode_le7, encode_le7};

pub mod ump;
pub use ump::{midi1_word, sysex7_words, Sysex7Status};

mod usb;
pub use usb::{CodeIndexNumber, UsbMidiExtractor};

mod translator;
pub use translator::UmpTranslator;
