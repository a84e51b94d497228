use std::fmt;

use crate::decoders::dyld::{DyldUuidMapA, Uuid};
use crate::decoders::Trace;

/// One sampled frame, resolved against the image index when possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub address: u64,
    /// Image containing the address, when a mapping at or below it is known.
    pub uuid: Option<Uuid>,
    pub offset: Option<u64>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.uuid, self.offset) {
            (Some(uuid), Some(offset)) => {
                write!(f, "{:#x} ({} + {:#x})", self.address, uuid, offset)
            }
            _ => write!(f, "{:#x}", self.address),
        }
    }
}

/// A user callstack lifted out of one kperf sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callstack {
    pub timestamp: u64,
    pub tid: u64,
    pub frames: Vec<Frame>,
}

impl fmt::Display for Callstack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timestamp: {}, tid: {}", self.timestamp, self.tid)?;
        for frame in &self.frames {
            write!(f, "\n\t{frame}")?;
        }
        Ok(())
    }
}

/// Symbolication pass over a decoded trace stream.
///
/// Image load events grow a sorted load-address index; kperf samples that
/// carry a user stack are resolved against it. The two vectors are kept
/// parallel and ordered by address so lookup and insertion are both binary
/// searches.
#[derive(Debug, Default)]
pub struct CallstacksParser {
    pub dyld_addresses: Vec<u64>,
    pub dyld_uuids: Vec<Uuid>,
}

impl CallstacksParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe one decoded trace. Image mappings update the index;
    /// samples with user stacks come back as callstacks.
    pub fn feed(&mut self, trace: &Trace) -> Option<Callstack> {
        match trace {
            Trace::PerfEvent(sample) => {
                let cs_frames = sample.cs_frames.as_ref()?;
                let frames = cs_frames.iter().map(|&addr| self.resolve(addr)).collect();
                Some(Callstack {
                    timestamp: sample.ktraces[0].timestamp,
                    tid: sample.ktraces[0].tid,
                    frames,
                })
            }
            Trace::DyldUuidMapA(map) => {
                self.insert_image(map.load_addr, map.uuid);
                None
            }
            Trace::DyldLaunchExecutable(launch) => {
                for DyldUuidMapA { load_addr, uuid, .. } in &launch.uuid_map_a {
                    self.insert_image(*load_addr, *uuid);
                }
                None
            }
            _ => None,
        }
    }

    /// Lazily feed a trace iterator, yielding the resolved callstacks.
    pub fn feed_iter<I>(&mut self, traces: I) -> CallstackIter<'_, I::IntoIter>
    where
        I: IntoIterator<Item = Trace>,
    {
        CallstackIter {
            parser: self,
            traces: traces.into_iter(),
        }
    }

    fn resolve(&self, address: u64) -> Frame {
        // Last image mapped at or below the address, if any.
        let index = self.dyld_addresses.partition_point(|&a| a <= address);
        match index.checked_sub(1) {
            Some(index) => Frame {
                address,
                uuid: Some(self.dyld_uuids[index]),
                offset: Some(address - self.dyld_addresses[index]),
            },
            None => Frame {
                address,
                uuid: None,
                offset: None,
            },
        }
    }

    fn insert_image(&mut self, address: u64, uuid: Uuid) {
        if let Err(index) = self.dyld_addresses.binary_search(&address) {
            self.dyld_addresses.insert(index, address);
            self.dyld_uuids.insert(index, uuid);
        }
    }
}

/// Iterator returned by [`CallstacksParser::feed_iter`].
pub struct CallstackIter<'a, I> {
    parser: &'a mut CallstacksParser,
    traces: I,
}

impl<I: Iterator<Item = Trace>> Iterator for CallstackIter<'_, I> {
    type Item = Callstack;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let trace = self.traces.next()?;
            if let Some(callstack) = self.parser.feed(&trace) {
                return Some(callstack);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decoders::perf::{PerfEvent, SamplerAction};
    use crate::kd_buf::{FuncQualifier, RawEvent, KDBG_EVENTID_MASK};

    fn event(debugid: u32, timestamp: u64, tid: u64) -> RawEvent {
        RawEvent {
            timestamp,
            data: [0; 32],
            args: [0; 4],
            tid,
            debugid,
            eventid: debugid & KDBG_EVENTID_MASK,
            qualifier: FuncQualifier::from_debugid(debugid),
            cpuid: 0,
        }
    }

    fn sample(frames: Vec<u64>) -> Trace {
        Trace::PerfEvent(PerfEvent {
            ktraces: vec![event(0x25000000, 99, 42)],
            sample_what: SamplerAction::SAMPLER_USTACK,
            actionid: 1,
            th_info: None,
            cs_flags: None,
            cs_frames: Some(frames),
        })
    }

    fn uuid(byte: u8) -> Uuid {
        Uuid([byte; 16])
    }

    #[test]
    fn frames_resolve_to_the_preceding_image() {
        let mut parser = CallstacksParser::new();
        parser.insert_image(0x1000, uuid(0xaa));
        parser.insert_image(0x8000, uuid(0xbb));

        let callstack = parser.feed(&sample(vec![0x1020, 0x8000, 0x7fff])).unwrap();
        assert_eq!(callstack.timestamp, 99);
        assert_eq!(callstack.tid, 42);
        assert_eq!(
            callstack.frames,
            vec![
                Frame {
                    address: 0x1020,
                    uuid: Some(uuid(0xaa)),
                    offset: Some(0x20)
                },
                Frame {
                    address: 0x8000,
                    uuid: Some(uuid(0xbb)),
                    offset: Some(0)
                },
                Frame {
                    address: 0x7fff,
                    uuid: Some(uuid(0xaa)),
                    offset: Some(0x6fff)
                },
            ]
        );
    }

    #[test]
    fn unmapped_frame_stays_unresolved() {
        let mut parser = CallstacksParser::new();
        parser.insert_image(0x4000, uuid(1));
        let callstack = parser.feed(&sample(vec![0x100])).unwrap();
        assert_eq!(
            callstack.frames,
            vec![Frame {
                address: 0x100,
                uuid: None,
                offset: None
            }]
        );
    }

    #[test]
    fn duplicate_mapping_keeps_the_first_uuid() {
        let mut parser = CallstacksParser::new();
        parser.insert_image(0x2000, uuid(1));
        parser.insert_image(0x2000, uuid(2));
        assert_eq!(parser.dyld_addresses, vec![0x2000]);
        assert_eq!(parser.dyld_uuids, vec![uuid(1)]);
    }

    #[test]
    fn index_stays_sorted_under_out_of_order_inserts() {
        let mut parser = CallstacksParser::new();
        parser.insert_image(0x9000, uuid(3));
        parser.insert_image(0x1000, uuid(1));
        parser.insert_image(0x5000, uuid(2));
        assert_eq!(parser.dyld_addresses, vec![0x1000, 0x5000, 0x9000]);
        assert_eq!(parser.dyld_uuids, vec![uuid(1), uuid(2), uuid(3)]);
    }

    #[test]
    fn display_marks_resolved_frames() {
        let frame = Frame {
            address: 0x1020,
            uuid: Some(uuid(0xab)),
            offset: Some(0x20),
        };
        assert_eq!(
            frame.to_string(),
            "0x1020 (abababab-abab-abab-abab-abababababab + 0x20)"
        );
        let frame = Frame {
            address: 0x33,
            uuid: None,
            offset: None,
        };
        assert_eq!(frame.to_string(), "0x33");
    }
}
