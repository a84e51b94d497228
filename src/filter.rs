use std::collections::HashMap;

use crate::decoders::Trace;
use crate::kd_buf::RawEvent;
use crate::reader::ProcessData;

/// Kdebug class, from the top byte of an event id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventClass {
    Mach = 0x01,
    Network = 0x02,
    Fsystem = 0x03,
    Bsd = 0x04,
    Iokit = 0x05,
    Drivers = 0x06,
    Trace = 0x07,
    Dlil = 0x08,
    Pthread = 0x09,
    Misc = 0x14,
    Security = 0x1e,
    Dyld = 0x1f,
    Perf = 0x25,
    Importance = 0x26,
    Daemon = 0x2c,
    Turnstile = 0x35,
}

impl EventClass {
    pub fn from_eventid(eventid: u32) -> Option<EventClass> {
        let class = match (eventid >> 24) as u8 {
            0x01 => EventClass::Mach,
            0x02 => EventClass::Network,
            0x03 => EventClass::Fsystem,
            0x04 => EventClass::Bsd,
            0x05 => EventClass::Iokit,
            0x06 => EventClass::Drivers,
            0x07 => EventClass::Trace,
            0x08 => EventClass::Dlil,
            0x09 => EventClass::Pthread,
            0x14 => EventClass::Misc,
            0x1e => EventClass::Security,
            0x1f => EventClass::Dyld,
            0x25 => EventClass::Perf,
            0x26 => EventClass::Importance,
            0x2c => EventClass::Daemon,
            0x35 => EventClass::Turnstile,
            _ => return None,
        };
        Some(class)
    }
}

/// Keep-only-matching filter over raw events or decoded traces.
///
/// Unset fields match everything; set fields must all match. The process
/// filter compares against the thread map captured with the trace.
#[derive(Debug, Default, Clone)]
pub struct TraceFilter {
    pub tid: Option<u64>,
    pub process: Option<String>,
    pub class: Option<EventClass>,
}

impl TraceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches_event(
        &self,
        event: &RawEvent,
        thread_map: &HashMap<u64, ProcessData>,
    ) -> bool {
        if let Some(tid) = self.tid {
            if event.tid != tid {
                return false;
            }
        }
        if let Some(class) = self.class {
            if EventClass::from_eventid(event.eventid) != Some(class) {
                return false;
            }
        }
        if let Some(process) = &self.process {
            match thread_map.get(&event.tid) {
                Some(data) if data.name == *process => {}
                _ => return false,
            }
        }
        true
    }

    /// A trace matches through its opening raw event.
    pub fn matches_trace(&self, trace: &Trace, thread_map: &HashMap<u64, ProcessData>) -> bool {
        self.matches_event(&trace.ktraces()[0], thread_map)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kd_buf::{FuncQualifier, KDBG_EVENTID_MASK};

    fn event(debugid: u32, tid: u64) -> RawEvent {
        RawEvent {
            timestamp: 0,
            data: [0; 32],
            args: [0; 4],
            tid,
            debugid,
            eventid: debugid & KDBG_EVENTID_MASK,
            qualifier: FuncQualifier::from_debugid(debugid),
            cpuid: 0,
        }
    }

    fn thread_map() -> HashMap<u64, ProcessData> {
        let mut map = HashMap::new();
        map.insert(
            7,
            ProcessData {
                pid: 100,
                name: "launchd".into(),
            },
        );
        map
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = TraceFilter::new();
        assert!(filter.matches_event(&event(0x40c000c, 7), &thread_map()));
        assert!(filter.matches_event(&event(0, 0), &HashMap::new()));
    }

    #[test]
    fn tid_filter() {
        let filter = TraceFilter {
            tid: Some(7),
            ..TraceFilter::new()
        };
        assert!(filter.matches_event(&event(0x40c000c, 7), &thread_map()));
        assert!(!filter.matches_event(&event(0x40c000c, 8), &thread_map()));
    }

    #[test]
    fn class_filter() {
        let filter = TraceFilter {
            class: Some(EventClass::Bsd),
            ..TraceFilter::new()
        };
        assert!(filter.matches_event(&event(0x40c000c, 7), &thread_map()));
        assert!(!filter.matches_event(&event(0x1400000, 7), &thread_map()));
    }

    #[test]
    fn process_filter_consults_the_thread_map() {
        let filter = TraceFilter {
            process: Some("launchd".into()),
            ..TraceFilter::new()
        };
        assert!(filter.matches_event(&event(0x40c000c, 7), &thread_map()));
        // Unknown tid never matches a process filter.
        assert!(!filter.matches_event(&event(0x40c000c, 8), &thread_map()));
    }

    #[test]
    fn class_covers_every_known_top_byte() {
        assert_eq!(EventClass::from_eventid(0x3010090), Some(EventClass::Fsystem));
        assert_eq!(EventClass::from_eventid(0x1f080000), Some(EventClass::Dyld));
        assert_eq!(EventClass::from_eventid(0x25010004), Some(EventClass::Perf));
        assert_eq!(EventClass::from_eventid(0x35100004), Some(EventClass::Turnstile));
        assert_eq!(EventClass::from_eventid(0xff000000), None);
    }
}
