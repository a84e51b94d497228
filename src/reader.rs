use std::collections::HashMap;
use std::io::{Cursor, ErrorKind, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::error::ParseError;
use crate::kd_buf::{RawEvent, KD_BUF_SIZE};

pub const RAW_VERSION2_BYTES: [u8; 4] = [0x00, 0x02, 0xaa, 0x55];
pub const RAW_VERSION3_BYTES: [u8; 4] = [0x00, 0x03, 0xaa, 0x55];

const TRACEV3_STACKSHOT_END: &[u8] = b"stackshot_out_fl";
const TRACEV3_THREADMAP_TAG: &[u8] = &[0x00, 0x1d, 0, 0, 0, 0, 0, 0];
const TRACEV3_EVENTS_TAG: &[u8] = &[0x00, 0x1e, 0, 0, 0, 0, 0, 0];
const TRACEV3_MORE_EVENTS: [u8; 8] = [0x00, 0x20, 0, 0, 0, 0, 0, 0];

const THREADMAP_ENTRY_SIZE: u64 = 32;

/// The process a thread belonged to when the trace was captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessData {
    pub pid: u32,
    pub name: String,
}

/// Fixed header of a version 2 container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderV2 {
    pub number_of_threads: u32,
    pub is_64bit: bool,
    pub tick_frequency: u64,
}

/// Header record of a version 3 container.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderV3 {
    pub tag: u32,
    pub sub_tag: u32,
    pub length: u64,
    pub timebase_numer: u32,
    pub timebase_denom: u32,
    pub timestamp: u64,
    pub walltime_secs: u64,
    pub walltime_usecs: u32,
    pub timezone_minuteswest: u32,
    pub timezone_dst: u32,
    pub flags: u32,
    pub tag2: u32,
    pub cpu_info: plist::Value,
}

enum State {
    Start,
    V2,
    V3 { remaining_events: u64, started: bool },
    Finished,
}

/// Streaming reader for kdebug trace containers.
///
/// Detects the container version from the leading magic and yields the
/// event records in file order. Version 3 containers additionally carry
/// a stackshot, an embedded trace codes listing and per-binary metadata
/// plists; those are collected on the reader as the stream is consumed.
pub struct KdBufParser<R: Read> {
    reader: R,
    state: State,
    /// First byte of the first v2 event record, consumed while skipping
    /// the zero run after the thread map.
    pending: Option<u8>,
    pub header_v2: Option<HeaderV2>,
    pub header_v3: Option<HeaderV3>,
    pub thread_map: HashMap<u64, ProcessData>,
    /// Trace codes text embedded in a version 3 container.
    pub trace_codes: String,
    pub binaries: plist::Dictionary,
    pub images: plist::Dictionary,
    pub kernel_binaries: plist::Dictionary,
}

impl<R: Read> KdBufParser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_thread_map(reader, HashMap::new())
    }

    /// Create a reader with a pre-populated thread map. The map is
    /// replaced by the container's own thread map once the header has
    /// been parsed.
    pub fn with_thread_map(reader: R, thread_map: HashMap<u64, ProcessData>) -> Self {
        KdBufParser {
            reader,
            state: State::Start,
            pending: None,
            header_v2: None,
            header_v3: None,
            thread_map,
            trace_codes: String::new(),
            binaries: plist::Dictionary::new(),
            images: plist::Dictionary::new(),
            kernel_binaries: plist::Dictionary::new(),
        }
    }

    /// Read the next event record, parsing container headers and
    /// trailing sections as they are encountered.
    pub fn next_event(&mut self) -> Result<Option<RawEvent>, ParseError> {
        loop {
            match self.state {
                State::Start => {
                    let mut magic = [0u8; 4];
                    self.read_exact(&mut magic, "container magic")?;
                    if magic == RAW_VERSION2_BYTES {
                        self.parse_header_v2()?;
                        self.state = State::V2;
                    } else if magic == RAW_VERSION3_BYTES {
                        self.parse_header_v3()?;
                        self.state = State::V3 {
                            remaining_events: 0,
                            started: false,
                        };
                    } else {
                        return Err(ParseError::UnsupportedVersion(magic));
                    }
                }
                State::V2 => match self.read_event_v2()? {
                    Some(event) => return Ok(Some(event)),
                    None => {
                        self.state = State::Finished;
                        return Ok(None);
                    }
                },
                State::V3 {
                    remaining_events,
                    started,
                } => {
                    if remaining_events > 0 {
                        let mut buf = [0u8; KD_BUF_SIZE];
                        self.read_exact(&mut buf, "event record")?;
                        self.state = State::V3 {
                            remaining_events: remaining_events - 1,
                            started,
                        };
                        return Ok(Some(RawEvent::from_kd_buf(&buf)));
                    }
                    if started {
                        let mut tag = [0u8; 8];
                        self.read_exact(&mut tag, "events chunk tag")?;
                        if tag != TRACEV3_MORE_EVENTS {
                            self.parse_v3_trailer()?;
                            self.state = State::Finished;
                            return Ok(None);
                        }
                    }
                    self.seek_until(TRACEV3_EVENTS_TAG, "events section")?;
                    let size = self.read_u64("events section size")?;
                    let mut unknown = [0u8; 8];
                    self.read_exact(&mut unknown, "events section")?;
                    self.state = State::V3 {
                        remaining_events: size / KD_BUF_SIZE as u64,
                        started: true,
                    };
                }
                State::Finished => return Ok(None),
            }
        }
    }

    /// Iterate over the remaining event records.
    pub fn events(&mut self) -> Events<'_, R> {
        Events { parser: self }
    }

    fn parse_header_v2(&mut self) -> Result<(), ParseError> {
        let number_of_threads = self.read_u32("v2 header")?;
        self.skip(12, "v2 header")?;
        let is_64bit = self.read_u32("v2 header")?;
        let tick_frequency = self.read_u64("v2 header")?;
        self.skip(0x100, "v2 header")?;
        self.header_v2 = Some(HeaderV2 {
            number_of_threads,
            is_64bit: is_64bit != 0,
            tick_frequency,
        });

        self.thread_map.clear();
        for _ in 0..number_of_threads {
            let (tid, process) = self.read_threadmap_entry()?;
            self.thread_map.insert(tid, process);
        }

        // The event records start at the first non-zero byte after the
        // thread map.
        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte)? {
                0 => break,
                _ if byte[0] == 0 => continue,
                _ => {
                    self.pending = Some(byte[0]);
                    break;
                }
            }
        }
        Ok(())
    }

    fn read_event_v2(&mut self) -> Result<Option<RawEvent>, ParseError> {
        let mut buf = [0u8; KD_BUF_SIZE];
        let mut filled = 0;
        if let Some(byte) = self.pending.take() {
            buf[0] = byte;
            filled = 1;
        }
        while filled < KD_BUF_SIZE {
            let n = self.reader.read(&mut buf[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled == 0 {
            return Ok(None);
        }
        if filled < KD_BUF_SIZE {
            return Err(ParseError::Truncated("event record"));
        }
        Ok(Some(RawEvent::from_kd_buf(&buf)))
    }

    fn parse_header_v3(&mut self) -> Result<(), ParseError> {
        let tag = self.read_u32("v3 header")?;
        let sub_tag = self.read_u32("v3 header")?;
        let length = self.read_u64("v3 header")?;
        let timebase_numer = self.read_u32("v3 header")?;
        let timebase_denom = self.read_u32("v3 header")?;
        let timestamp = self.read_u64("v3 header")?;
        let walltime_secs = self.read_u64("v3 header")?;
        let walltime_usecs = self.read_u32("v3 header")?;
        let timezone_minuteswest = self.read_u32("v3 header")?;
        let timezone_dst = self.read_u32("v3 header")?;
        let flags = self.read_u32("v3 header")?;
        let tag2 = self.read_u32("v3 header")?;
        let cpu_info_size = self.read_u64("v3 cpu info")?;
        let cpu_info = self.read_plist_value(cpu_info_size, "v3 cpu info")?;

        // The header record is padded to a multiple of 8 bytes, and the
        // 4-byte magic before it leaves the stream another 4 bytes short
        // of alignment.
        let consumed = 60 + 8 + cpu_info_size;
        self.skip((consumed.wrapping_neg() % 8) as usize, "v3 header")?;
        self.skip(4, "v3 header")?;

        self.header_v3 = Some(HeaderV3 {
            tag,
            sub_tag,
            length,
            timebase_numer,
            timebase_denom,
            timestamp,
            walltime_secs,
            walltime_usecs,
            timezone_minuteswest,
            timezone_dst,
            flags,
            tag2,
            cpu_info,
        });

        // The thread map tag can also occur as stackshot payload, so
        // scan past the stackshot first.
        self.seek_until(TRACEV3_STACKSHOT_END, "stackshot section")?;
        self.seek_until(TRACEV3_THREADMAP_TAG, "thread map section")?;
        let size = self.read_u64("thread map size")?;
        self.thread_map.clear();
        for _ in 0..size / THREADMAP_ENTRY_SIZE {
            let (tid, process) = self.read_threadmap_entry()?;
            self.thread_map.insert(tid, process);
        }
        Ok(())
    }

    fn parse_v3_trailer(&mut self) -> Result<(), ParseError> {
        for _ in 0..2 {
            let size = self.read_u64("trace codes section")?;
            let mut text = vec![0u8; size as usize];
            self.read_exact(&mut text, "trace codes section")?;
            self.trace_codes.push_str(&String::from_utf8_lossy(&text));
            self.skip(10, "trace codes section")?;
        }
        let size = self.read_u64("binaries section")?;
        let binaries = self.read_plist_dictionary(size, "binaries section")?;
        self.binaries.extend(binaries);
        self.skip(12, "binaries section")?;
        let size = self.read_u64("images section")?;
        let images = self.read_plist_dictionary(size, "images section")?;
        self.images.extend(images);
        self.skip(12, "images section")?;
        let size = self.read_u64("kernel binaries section")?;
        let kernel_binaries = self.read_plist_dictionary(size, "kernel binaries section")?;
        self.kernel_binaries.extend(kernel_binaries);
        Ok(())
    }

    fn read_threadmap_entry(&mut self) -> Result<(u64, ProcessData), ParseError> {
        let tid = self.read_u64("thread map entry")?;
        let pid = self.read_u32("thread map entry")?;
        let mut name = [0u8; 20];
        self.read_exact(&mut name, "thread map entry")?;
        let len = memchr::memchr(0, &name).unwrap_or(name.len());
        let name = String::from_utf8_lossy(&name[..len]).into_owned();
        Ok((tid, ProcessData { pid, name }))
    }

    fn read_plist_value(
        &mut self,
        size: u64,
        what: &'static str,
    ) -> Result<plist::Value, ParseError> {
        let mut buf = vec![0u8; size as usize];
        self.read_exact(&mut buf, what)?;
        Ok(plist::Value::from_reader(Cursor::new(buf))?)
    }

    fn read_plist_dictionary(
        &mut self,
        size: u64,
        what: &'static str,
    ) -> Result<plist::Dictionary, ParseError> {
        let value = self.read_plist_value(size, what)?;
        value
            .into_dictionary()
            .ok_or(ParseError::Truncated(what))
    }

    /// Scan the stream byte by byte until `marker` has been consumed.
    fn seek_until(&mut self, marker: &[u8], what: &'static str) -> Result<(), ParseError> {
        let mut window = vec![0u8; marker.len()];
        self.read_exact(&mut window, what)?;
        while window != marker {
            window.rotate_left(1);
            let mut byte = [0u8; 1];
            self.read_exact(&mut byte, what)?;
            window[marker.len() - 1] = byte[0];
        }
        Ok(())
    }

    fn skip(&mut self, count: usize, what: &'static str) -> Result<(), ParseError> {
        let mut buf = vec![0u8; count];
        self.read_exact(&mut buf, what)
    }

    fn read_u32(&mut self, what: &'static str) -> Result<u32, ParseError> {
        self.reader
            .read_u32::<LittleEndian>()
            .map_err(|e| Self::eof_to_truncated(e, what))
    }

    fn read_u64(&mut self, what: &'static str) -> Result<u64, ParseError> {
        self.reader
            .read_u64::<LittleEndian>()
            .map_err(|e| Self::eof_to_truncated(e, what))
    }

    fn read_exact(&mut self, buf: &mut [u8], what: &'static str) -> Result<(), ParseError> {
        self.reader
            .read_exact(buf)
            .map_err(|e| Self::eof_to_truncated(e, what))
    }

    fn eof_to_truncated(e: std::io::Error, what: &'static str) -> ParseError {
        if e.kind() == ErrorKind::UnexpectedEof {
            ParseError::Truncated(what)
        } else {
            ParseError::Io(e)
        }
    }
}

/// Iterator over the event records of a [`KdBufParser`].
pub struct Events<'a, R: Read> {
    parser: &'a mut KdBufParser<R>,
}

impl<R: Read> Iterator for Events<'_, R> {
    type Item = Result<RawEvent, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parser.next_event().transpose()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kd_buf::FuncQualifier;
    use std::io::Cursor;

    fn v2_container(records: &[[u8; 64]]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&RAW_VERSION2_BYTES);
        buf.extend_from_slice(&[0u8; 0x11c]);
        for record in records {
            buf.extend_from_slice(record);
        }
        buf
    }

    #[test]
    fn v2_single_event() {
        let record: [u8; 64] = *b"\xa50\x147_\x06\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
                                  \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
                                  \xc6\x01\x00\x00\x00\x00\x00\x00y\xd8\t\x00\x00\x00\x00\x00\
                                  \x2a\x03\x0c\x04\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00";
        let buf = v2_container(&[record]);
        let mut parser = KdBufParser::new(Cursor::new(buf));
        let event = parser.next_event().unwrap().unwrap();
        assert_eq!(event.timestamp, 7006015729829);
        assert_eq!(event.args, [0, 0, 0, 454]);
        assert_eq!(event.tid, 645241);
        assert_eq!(event.debugid, 67896106);
        assert_eq!(event.eventid, 67896104);
        assert_eq!(event.qualifier, FuncQualifier::End);
        assert_eq!(parser.next_event().unwrap(), None);
        assert_eq!(parser.next_event().unwrap(), None);
        assert!(parser.thread_map.is_empty());
    }

    #[test]
    fn v2_thread_map_and_zero_padding() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&RAW_VERSION2_BYTES);
        let mut header = [0u8; 0x11c];
        header[0..4].copy_from_slice(&1u32.to_le_bytes()); // one thread
        header[16..20].copy_from_slice(&1u32.to_le_bytes()); // is_64bit
        header[20..28].copy_from_slice(&24_000_000u64.to_le_bytes());
        buf.extend_from_slice(&header);
        buf.extend_from_slice(&0x1234u64.to_le_bytes());
        buf.extend_from_slice(&77u32.to_le_bytes());
        let mut name = [0u8; 20];
        name[..9].copy_from_slice(b"launchd\x00x");
        buf.extend_from_slice(&name);
        // Zero run before the first record, which starts with a
        // non-zero timestamp byte.
        buf.extend_from_slice(&[0u8; 17]);
        let mut record = [0u8; 64];
        record[0..8].copy_from_slice(&5u64.to_le_bytes());
        record[40..48].copy_from_slice(&0x1234u64.to_le_bytes());
        buf.extend_from_slice(&record);

        let mut parser = KdBufParser::new(Cursor::new(buf));
        let event = parser.next_event().unwrap().unwrap();
        assert_eq!(event.timestamp, 5);
        assert_eq!(event.tid, 0x1234);
        assert_eq!(parser.next_event().unwrap(), None);

        let header = parser.header_v2.unwrap();
        assert_eq!(header.number_of_threads, 1);
        assert!(header.is_64bit);
        assert_eq!(header.tick_frequency, 24_000_000);
        assert_eq!(
            parser.thread_map[&0x1234],
            ProcessData {
                pid: 77,
                name: "launchd".into()
            }
        );
    }

    #[test]
    fn v2_truncated_record() {
        let mut buf = v2_container(&[]);
        buf.push(0xa5);
        buf.extend_from_slice(&[1u8; 20]);
        let mut parser = KdBufParser::new(Cursor::new(buf));
        assert!(matches!(
            parser.next_event(),
            Err(ParseError::Truncated("event record"))
        ));
    }

    #[test]
    fn unknown_magic() {
        let mut parser = KdBufParser::new(Cursor::new(b"\x00\x04\xaa\x55".to_vec()));
        assert!(matches!(
            parser.next_event(),
            Err(ParseError::UnsupportedVersion([0x00, 0x04, 0xaa, 0x55]))
        ));
    }

    fn prefixed(payload: &[u8]) -> Vec<u8> {
        let mut out = (payload.len() as u64).to_le_bytes().to_vec();
        out.extend_from_slice(payload);
        out
    }

    fn plist_bytes(dict: &plist::Dictionary) -> Vec<u8> {
        let mut out = Vec::new();
        plist::Value::Dictionary(dict.clone())
            .to_writer_binary(&mut out)
            .unwrap();
        out
    }

    #[test]
    fn v3_container() {
        let mut cpu_info = plist::Dictionary::new();
        cpu_info.insert("kdbg_osversion".into(), plist::Value::from("20G165"));
        let cpu_info_bytes = plist_bytes(&cpu_info);

        let mut buf = Vec::new();
        buf.extend_from_slice(&RAW_VERSION3_BYTES);
        buf.extend_from_slice(&0x1600u32.to_le_bytes()); // tag
        buf.extend_from_slice(&0u32.to_le_bytes()); // sub_tag
        buf.extend_from_slice(&0u64.to_le_bytes()); // length
        buf.extend_from_slice(&125u32.to_le_bytes()); // timebase_numer
        buf.extend_from_slice(&3u32.to_le_bytes()); // timebase_denom
        buf.extend_from_slice(&777u64.to_le_bytes()); // timestamp
        buf.extend_from_slice(&1_600_000_000u64.to_le_bytes()); // walltime_secs
        buf.extend_from_slice(&0u32.to_le_bytes()); // walltime_usecs
        buf.extend_from_slice(&0u32.to_le_bytes()); // timezone_minuteswest
        buf.extend_from_slice(&0u32.to_le_bytes()); // timezone_dst
        buf.extend_from_slice(&0u32.to_le_bytes()); // flags
        buf.extend_from_slice(&0u32.to_le_bytes()); // tag2
        buf.extend_from_slice(&prefixed(&cpu_info_bytes));
        let consumed = 60 + 8 + cpu_info_bytes.len();
        buf.extend_from_slice(&vec![0xee; (consumed.wrapping_neg()) % 8]);
        buf.extend_from_slice(&[0xee; 4]); // magic alignment

        // Stackshot with an embedded decoy thread map tag.
        buf.extend_from_slice(&[0x00, 0x1d, 0, 0, 0, 0, 0, 0]);
        buf.extend_from_slice(b"...stackshot_out_fl");

        buf.extend_from_slice(&[0x00, 0x1d, 0, 0, 0, 0, 0, 0]);
        let mut entry = Vec::new();
        entry.extend_from_slice(&42u64.to_le_bytes());
        entry.extend_from_slice(&7u32.to_le_bytes());
        let mut name = [0u8; 20];
        name[..4].copy_from_slice(b"bash");
        entry.extend_from_slice(&name);
        buf.extend_from_slice(&prefixed(&entry));

        // Two event chunks joined by a continuation tag.
        let mut record = [0u8; 64];
        record[0..8].copy_from_slice(&1u64.to_le_bytes());
        buf.extend_from_slice(&[0x00, 0x1e, 0, 0, 0, 0, 0, 0]);
        buf.extend_from_slice(&64u64.to_le_bytes());
        buf.extend_from_slice(&[0u8; 8]);
        buf.extend_from_slice(&record);
        buf.extend_from_slice(&TRACEV3_MORE_EVENTS);
        record[0..8].copy_from_slice(&2u64.to_le_bytes());
        buf.extend_from_slice(&[0x00, 0x1e, 0, 0, 0, 0, 0, 0]);
        buf.extend_from_slice(&64u64.to_le_bytes());
        buf.extend_from_slice(&[0u8; 8]);
        buf.extend_from_slice(&record);
        buf.extend_from_slice(&[0x00, 0x21, 0, 0, 0, 0, 0, 0]);

        buf.extend_from_slice(&prefixed(b"0x40c000c\tBSC_read\n"));
        buf.extend_from_slice(&[0u8; 10]);
        buf.extend_from_slice(&prefixed(b"0x1400000\tMACH_SCHED\n"));
        buf.extend_from_slice(&[0u8; 10]);
        let mut binaries = plist::Dictionary::new();
        binaries.insert("bash".into(), plist::Value::from(100u64));
        buf.extend_from_slice(&prefixed(&plist_bytes(&binaries)));
        buf.extend_from_slice(&[0u8; 12]);
        let mut images = plist::Dictionary::new();
        images.insert("dyld".into(), plist::Value::from(200u64));
        buf.extend_from_slice(&prefixed(&plist_bytes(&images)));
        buf.extend_from_slice(&[0u8; 12]);
        let kernel_binaries = plist::Dictionary::new();
        buf.extend_from_slice(&prefixed(&plist_bytes(&kernel_binaries)));

        let mut parser = KdBufParser::new(Cursor::new(buf));
        let events: Vec<_> = parser.events().collect::<Result<_, _>>().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].timestamp, 1);
        assert_eq!(events[1].timestamp, 2);

        let header = parser.header_v3.as_ref().unwrap();
        assert_eq!(header.timebase_numer, 125);
        assert_eq!(header.timebase_denom, 3);
        assert_eq!(header.walltime_secs, 1_600_000_000);
        assert_eq!(
            header
                .cpu_info
                .as_dictionary()
                .and_then(|d| d.get("kdbg_osversion"))
                .and_then(plist::Value::as_string),
            Some("20G165")
        );
        assert_eq!(
            parser.thread_map[&42],
            ProcessData {
                pid: 7,
                name: "bash".into()
            }
        );
        assert_eq!(parser.trace_codes, "0x40c000c\tBSC_read\n0x1400000\tMACH_SCHED\n");
        assert_eq!(parser.binaries.get("bash").and_then(plist::Value::as_unsigned_integer), Some(100));
        assert_eq!(parser.images.get("dyld").and_then(plist::Value::as_unsigned_integer), Some(200));
        assert!(parser.kernel_binaries.is_empty());
    }

    #[test]
    fn v3_truncated_marker_scan() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&RAW_VERSION3_BYTES);
        buf.extend_from_slice(&[0u8; 60]);
        let cpu_info = plist_bytes(&plist::Dictionary::new());
        buf.extend_from_slice(&prefixed(&cpu_info));
        let consumed = 60 + 8 + cpu_info.len();
        buf.extend_from_slice(&vec![0u8; (consumed.wrapping_neg()) % 8]);
        buf.extend_from_slice(&[0u8; 4]);
        buf.extend_from_slice(b"no stackshot terminator here");
        let mut parser = KdBufParser::new(Cursor::new(buf));
        assert!(matches!(
            parser.next_event(),
            Err(ParseError::Truncated("stackshot section"))
        ));
    }
}
