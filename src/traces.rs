use std::collections::HashMap;

use crate::decoders::{self, trace::is_trace_category, Trace};
use crate::kd_buf::RawEvent;
use crate::trace_codes::TraceCodes;

/// Event ids that mess up the pairing flow.
const BLACKLISTED: [u32; 5] = [0x1030454, 0x2b3100d0, 0x2b3100e8, 0x2b3100d4, 0x2b3100b8];

/// One reassembled vnode path lookup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vnode {
    pub ktraces: Vec<RawEvent>,
    pub vnode_id: u64,
    pub path: String,
}

/// Pairs raw events into bracketed per-thread groups and decodes each
/// completed group into a [`Trace`].
///
/// Start events open a pending group for their thread, end events with a
/// matching event id close it, anything in between is buffered as
/// continuation data. Trace-category events (thread and process lifecycle
/// strings) are paired through a separate map so their brackets cannot be
/// confused with the generic kernel debug ones.
pub struct TracesParser {
    pub trace_codes: TraceCodes,
    on_going_events: HashMap<u64, Vec<RawEvent>>,
    on_going_traces: HashMap<u64, Vec<RawEvent>>,
    /// String table populated by TRACE_STRING_GLOBAL events and consumed
    /// by later decoders referencing the string ids.
    pub global_strings: HashMap<u64, String>,
    pub threads_pids: HashMap<u64, u64>,
    pub pids_names: HashMap<u64, String>,
    pub tids_names: HashMap<u64, String>,
    pub(crate) last_data_newthread: Option<decoders::trace::TraceDataNewthread>,
    pub(crate) last_data_exec: Option<decoders::trace::TraceDataExec>,
}

impl TracesParser {
    pub fn new(trace_codes: TraceCodes) -> Self {
        TracesParser {
            trace_codes,
            on_going_events: HashMap::new(),
            on_going_traces: HashMap::new(),
            global_strings: HashMap::new(),
            threads_pids: HashMap::new(),
            pids_names: HashMap::new(),
            tids_names: HashMap::new(),
            last_data_newthread: None,
            last_data_exec: None,
        }
    }

    /// Feed one raw event. Returns a trace when this event completes a
    /// group, `None` while a group is still being accumulated or the
    /// event is dropped.
    pub fn feed(&mut self, event: RawEvent) -> Option<Trace> {
        if BLACKLISTED.contains(&event.eventid) {
            return None;
        }
        let for_trace_state = self
            .trace_codes
            .get(&event.eventid)
            .map(|name| is_trace_category(name))
            .unwrap_or(false);

        if event.qualifier.has_start() && !event.qualifier.has_end() {
            let state = self.state_for(for_trace_state);
            state.entry(event.tid).or_default().push(event);
            return None;
        }
        if event.qualifier.has_end() && !event.qualifier.has_start() {
            let state = self.state_for(for_trace_state);
            let pending = state.get_mut(&event.tid)?;
            if pending[0].eventid != event.eventid {
                // End of a nested inner bracket.
                pending.push(event);
                return None;
            }
            let mut events = state.remove(&event.tid)?;
            events.push(event);
            return self.parse_event_list(events);
        }
        // NONE and ALL: continuation while a bracket is open, otherwise a
        // complete single-event group.
        let state = self.state_for(for_trace_state);
        if let Some(pending) = state.get_mut(&event.tid) {
            pending.push(event);
            None
        } else {
            self.parse_event_list(vec![event])
        }
    }

    /// Lazily feed an event iterator, yielding the decoded traces.
    pub fn feed_iter<I>(&mut self, events: I) -> FeedIter<'_, I::IntoIter>
    where
        I: IntoIterator<Item = RawEvent>,
    {
        FeedIter {
            parser: self,
            events: events.into_iter(),
        }
    }

    /// Decode one completed event group.
    pub fn parse_event_list(&mut self, events: Vec<RawEvent>) -> Option<Trace> {
        let name = self.trace_codes.get(&events[0].eventid)?.clone();
        decoders::decode(&name, self, events)
    }

    /// Reassemble the first vnode path lookup embedded in a group, or an
    /// empty vnode when the group carries none.
    pub fn parse_vnode(&self, events: &[RawEvent]) -> Vnode {
        self.parse_vnodes(events).into_iter().next().unwrap_or_default()
    }

    /// Reassemble every vnode path lookup embedded in a group, in order.
    pub fn parse_vnodes(&self, events: &[RawEvent]) -> Vec<Vnode> {
        let lookups = events
            .iter()
            .filter(|e| {
                self.trace_codes.get(&e.eventid).map(String::as_str) == Some("VFS_LOOKUP")
            })
            .copied();

        let mut vnodes = Vec::new();
        let mut path = Vec::new();
        let mut vnode_id = 0;
        let mut ktraces = Vec::new();
        for event in lookups {
            ktraces.push(event);
            if event.qualifier.has_start() {
                vnode_id = event.args[0];
                path.extend_from_slice(&event.data[8..]);
            } else {
                path.extend_from_slice(&event.data);
            }
            if event.qualifier.has_end() {
                vnodes.push(Vnode {
                    ktraces: std::mem::take(&mut ktraces),
                    vnode_id,
                    path: strip_nuls(&path),
                });
                path.clear();
                vnode_id = 0;
            }
        }
        vnodes
    }

    fn state_for(&mut self, for_trace_state: bool) -> &mut HashMap<u64, Vec<RawEvent>> {
        if for_trace_state {
            &mut self.on_going_traces
        } else {
            &mut self.on_going_events
        }
    }
}

/// Drop nul bytes and decode the rest as UTF-8, lossily.
pub(crate) fn strip_nuls(bytes: &[u8]) -> String {
    let stripped: Vec<u8> = bytes.iter().copied().filter(|&b| b != 0).collect();
    String::from_utf8_lossy(&stripped).into_owned()
}

/// Iterator returned by [`TracesParser::feed_iter`].
pub struct FeedIter<'a, I> {
    parser: &'a mut TracesParser,
    events: I,
}

impl<I: Iterator<Item = RawEvent>> Iterator for FeedIter<'_, I> {
    type Item = Trace;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.events.next()?;
            if let Some(trace) = self.parser.feed(event) {
                return Some(trace);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::kd_buf::FuncQualifier;
    use crate::trace_codes::default_trace_codes;

    pub(crate) fn event(
        timestamp: u64,
        data: &[u8],
        tid: u64,
        debugid: u32,
    ) -> RawEvent {
        let mut buf = [0u8; 64];
        buf[0..8].copy_from_slice(&timestamp.to_le_bytes());
        buf[8..8 + data.len()].copy_from_slice(data);
        buf[40..48].copy_from_slice(&tid.to_le_bytes());
        buf[48..52].copy_from_slice(&debugid.to_le_bytes());
        RawEvent::from_kd_buf(&buf)
    }

    fn args_event(timestamp: u64, args: [u64; 4], tid: u64, debugid: u32) -> RawEvent {
        let mut data = [0u8; 32];
        for (i, arg) in args.iter().enumerate() {
            data[i * 8..(i + 1) * 8].copy_from_slice(&arg.to_le_bytes());
        }
        event(timestamp, &data, tid, debugid)
    }

    const BSC_READ: u32 = 0x40c000c;

    fn read_pair(tid: u64) -> [RawEvent; 2] {
        [
            args_event(15783429453, [7, 4763795456, 25558, 6127540328], tid, BSC_READ | 1),
            args_event(15783456070, [0, 25558, 0, 144], tid, BSC_READ | 2),
        ]
    }

    #[test]
    fn read_bracket_renders_exactly() {
        let mut parser = TracesParser::new(default_trace_codes());
        let traces: Vec<_> = parser.feed_iter(read_pair(7573)).collect();
        assert_eq!(traces.len(), 1);
        assert_eq!(
            traces[0].to_string(),
            "read(7, 0x11bf1c000, 25558), count: 25558"
        );
        assert_eq!(traces[0].ktraces().len(), 2);
    }

    #[test]
    fn interleaved_threads_close_independently() {
        let [s1, e1] = read_pair(100);
        let [s2, e2] = read_pair(200);
        // All interleavings of two independent bracket pairs.
        for order in [
            [s1, e1, s2, e2],
            [s1, s2, e1, e2],
            [s1, s2, e2, e1],
            [s2, s1, e1, e2],
            [s2, s1, e2, e1],
            [s2, e2, s1, e1],
        ] {
            let mut parser2 = TracesParser::new(default_trace_codes());
            let traces: Vec<_> = parser2.feed_iter(order).collect();
            assert_eq!(traces.len(), 2);
            for trace in &traces {
                let tids: Vec<u64> = trace.ktraces().iter().map(|e| e.tid).collect();
                assert!(tids.iter().all(|&t| t == tids[0]));
            }
        }
    }

    #[test]
    fn unmatched_end_is_dropped() {
        let mut parser = TracesParser::new(default_trace_codes());
        let end = args_event(1, [0, 25558, 0, 0], 7573, BSC_READ | 2);
        assert!(parser.feed(end).is_none());
        // State is intact for a following complete bracket.
        let traces: Vec<_> = parser.feed_iter(read_pair(7573)).collect();
        assert_eq!(traces.len(), 1);
    }

    #[test]
    fn blacklisted_events_never_surface() {
        let mut parser = TracesParser::new(default_trace_codes());
        let [start, end] = read_pair(7573);
        assert!(parser.feed(start).is_none());
        for qualifier_bits in 0..4u32 {
            let black = args_event(2, [1, 2, 3, 4], 7573, 0x1030454 | qualifier_bits);
            assert!(parser.feed(black).is_none());
        }
        let trace = parser.feed(end).unwrap();
        assert!(trace
            .ktraces()
            .iter()
            .all(|e| e.eventid != 0x1030454));
        assert_eq!(trace.ktraces().len(), 2);
    }

    #[test]
    fn nested_end_of_different_code_does_not_close() {
        let mut parser = TracesParser::new(default_trace_codes());
        let [start, end] = read_pair(7573);
        assert!(parser.feed(start).is_none());
        let inner_end = args_event(3, [0, 0, 0, 0], 7573, 0x40c0008 | 2);
        assert!(parser.feed(inner_end).is_none());
        let trace = parser.feed(end).unwrap();
        assert_eq!(trace.ktraces().len(), 3);
    }

    #[test]
    fn feeding_twice_gives_identical_output() {
        let events: Vec<RawEvent> = read_pair(7573).into();
        let first: Vec<String> = TracesParser::new(default_trace_codes())
            .feed_iter(events.clone())
            .map(|t| t.to_string())
            .collect();
        let second: Vec<String> = TracesParser::new(default_trace_codes())
            .feed_iter(events)
            .map(|t| t.to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn vnode_reassembly() {
        let parser = TracesParser::new(default_trace_codes());
        const VFS_LOOKUP: u32 = 0x3010090;
        let mut start = [0u8; 32];
        start[0..8].copy_from_slice(&0xabcdu64.to_le_bytes());
        start[8..].copy_from_slice(b"/System/Library/Private?");
        let events = [
            event(1, &start, 9, VFS_LOOKUP | 1),
            event(2, b"Frameworks/Foo.framework/Foo\x00\x00\x00\x00", 9, VFS_LOOKUP | 2),
        ];
        let vnode = parser.parse_vnode(&events);
        assert_eq!(vnode.vnode_id, 0xabcd);
        assert_eq!(
            vnode.path,
            "/System/Library/Private?Frameworks/Foo.framework/Foo"
        );
        assert_eq!(vnode.ktraces.len(), 2);
    }

    #[test]
    fn unknown_event_code_yields_nothing() {
        let mut parser = TracesParser::new(default_trace_codes());
        let unknown = args_event(1, [1, 2, 3, 4], 5, 0x7f000000);
        assert!(parser.feed(unknown).is_none());
    }
}
