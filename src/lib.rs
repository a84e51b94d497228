//! # kdebug-parser
//!
//! This crate parses macOS and iOS kdebug kernel traces: the raw
//! RAW_VERSION2 / RAW_VERSION3 container formats, the 64-byte kd_buf
//! event records inside them, and the start/end bracket structure that
//! groups related records into syscalls, scheduler transitions, page
//! faults, dyld loader events, kperf samples and turnstile operations.
//!
//! ## Example
//!
//! ```rust
//! use kdebug_parser::{default_trace_codes, KdBufParser, TracesParser};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), kdebug_parser::ParseError> {
//! // A minimal RAW_VERSION2 container: magic, empty header, then one
//! // BSC_read start/end bracket on thread 7573.
//! let record = |timestamp: u64, args: [u64; 4], debugid: u32| {
//!     let mut buf = [0u8; 64];
//!     buf[0..8].copy_from_slice(&timestamp.to_le_bytes());
//!     for (i, arg) in args.iter().enumerate() {
//!         buf[8 + i * 8..16 + i * 8].copy_from_slice(&arg.to_le_bytes());
//!     }
//!     buf[40..48].copy_from_slice(&7573u64.to_le_bytes());
//!     buf[48..52].copy_from_slice(&debugid.to_le_bytes());
//!     buf
//! };
//! let mut container = vec![0x00, 0x02, 0xaa, 0x55];
//! container.extend_from_slice(&[0u8; 0x11c]);
//! container.extend_from_slice(&record(
//!     15783429453,
//!     [7, 4763795456, 25558, 6127540328],
//!     0x40c000d,
//! ));
//! container.extend_from_slice(&record(15783456070, [0, 25558, 0, 144], 0x40c000e));
//!
//! let mut reader = KdBufParser::new(Cursor::new(container));
//! let mut parser = TracesParser::new(default_trace_codes());
//! let traces: Vec<String> = reader
//!     .events()
//!     .collect::<Result<Vec<_>, _>>()?
//!     .into_iter()
//!     .filter_map(|event| parser.feed(event))
//!     .map(|trace| trace.to_string())
//!     .collect();
//! assert_eq!(traces, vec!["read(7, 0x11bf1c000, 25558), count: 25558"]);
//! # Ok(())
//! # }
//! ```
pub mod callstacks;
pub mod decoders;
mod error;
pub mod filter;
mod kd_buf;
pub mod os_log;
mod reader;
mod trace_codes;
mod traces;

pub use error::ParseError;
pub use kd_buf::{FuncQualifier, RawEvent, KDBG_EVENTID_MASK, KDBG_FUNC_MASK, KD_BUF_SIZE};
pub use reader::{
    Events, HeaderV2, HeaderV3, KdBufParser, ProcessData, RAW_VERSION2_BYTES, RAW_VERSION3_BYTES,
};
pub use trace_codes::{
    default_trace_codes, from_trace_codes_file, from_trace_codes_text, TraceCodes,
};
pub use traces::{FeedIter, TracesParser, Vnode};

pub use callstacks::{Callstack, CallstacksParser, Frame};
pub use decoders::Trace;
pub use filter::{EventClass, TraceFilter};
pub use os_log::OsLogEvent;
