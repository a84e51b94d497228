//! End-to-end runs over synthetic containers: container reader, trace
//! pairing, decoding, filtering and callstack symbolication through the
//! public API only.

use std::collections::HashMap;
use std::io::Cursor;

use kdebug_parser::{
    default_trace_codes, from_trace_codes_text, CallstacksParser, EventClass, KdBufParser, Trace,
    TraceFilter, TracesParser,
};

struct Record {
    timestamp: u64,
    data: [u8; 32],
    tid: u64,
    debugid: u32,
}

impl Record {
    fn with_args(timestamp: u64, args: [u64; 4], tid: u64, debugid: u32) -> Record {
        let mut data = [0u8; 32];
        for (i, arg) in args.iter().enumerate() {
            data[i * 8..i * 8 + 8].copy_from_slice(&arg.to_le_bytes());
        }
        Record {
            timestamp,
            data,
            tid,
            debugid,
        }
    }

    fn to_kd_buf(&self) -> [u8; 64] {
        let mut buf = [0u8; 64];
        buf[0..8].copy_from_slice(&self.timestamp.to_le_bytes());
        buf[8..40].copy_from_slice(&self.data);
        buf[40..48].copy_from_slice(&self.tid.to_le_bytes());
        buf[48..52].copy_from_slice(&self.debugid.to_le_bytes());
        buf
    }
}

fn v2_container(threads: &[(u64, u32, &str)], records: &[Record]) -> Vec<u8> {
    let mut buf = vec![0x00, 0x02, 0xaa, 0x55];
    let mut header = [0u8; 0x11c];
    header[0..4].copy_from_slice(&(threads.len() as u32).to_le_bytes());
    header[16..20].copy_from_slice(&1u32.to_le_bytes());
    header[20..28].copy_from_slice(&24_000_000u64.to_le_bytes());
    buf.extend_from_slice(&header);
    for (tid, pid, name) in threads {
        buf.extend_from_slice(&tid.to_le_bytes());
        buf.extend_from_slice(&pid.to_le_bytes());
        let mut field = [0u8; 20];
        field[..name.len()].copy_from_slice(name.as_bytes());
        buf.extend_from_slice(&field);
    }
    for record in records {
        buf.extend_from_slice(&record.to_kd_buf());
    }
    buf
}

#[test]
fn v2_read_syscall_end_to_end() {
    let container = v2_container(
        &[(7573, 200, "cat")],
        &[
            Record::with_args(
                15783429453,
                [7, 4763795456, 25558, 6127540328],
                7573,
                0x40c000d,
            ),
            Record::with_args(15783456070, [0, 25558, 0, 144], 7573, 0x40c000e),
        ],
    );

    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(reader.thread_map[&7573].pid, 200);
    assert_eq!(reader.thread_map[&7573].name, "cat");

    let mut parser = TracesParser::new(default_trace_codes());
    let traces: Vec<String> = parser.feed_iter(events).map(|t| t.to_string()).collect();
    assert_eq!(traces, vec!["read(7, 0x11bf1c000, 25558), count: 25558"]);
}

#[test]
fn kperf_samples_resolve_against_dyld_mappings() {
    // One image mapping, then a kperf sample bracket carrying a user
    // stack with two frames, one inside the image and one below it.
    let mut mapping = Record::with_args(10, [0, 0, 0x100000000, 0], 42, 0x1f050000);
    mapping.data[..16].copy_from_slice(&[0xcd; 16]);
    mapping.data[16..24].copy_from_slice(&0x100000000u64.to_le_bytes());

    let container = v2_container(
        &[(42, 300, "sampled")],
        &[
            mapping,
            Record::with_args(20, [0x08, 1, 0, 0], 42, 0x25000001),
            Record::with_args(21, [0x05, 2, 0, 0], 42, 0x25020018),
            Record::with_args(22, [0x100000010, 0xfff, 0, 0], 42, 0x25020010),
            Record::with_args(23, [0, 0, 0, 0], 42, 0x25000002),
        ],
    );

    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    let mut parser = TracesParser::new(default_trace_codes());
    let traces: Vec<_> = parser.feed_iter(events).collect();
    assert_eq!(traces.len(), 2);

    let mut callstacks = CallstacksParser::new();
    let resolved: Vec<_> = callstacks.feed_iter(traces).collect();
    assert_eq!(resolved.len(), 1);
    let callstack = &resolved[0];
    assert_eq!(callstack.timestamp, 20);
    assert_eq!(callstack.tid, 42);
    assert_eq!(callstack.frames.len(), 2);
    assert_eq!(callstack.frames[0].address, 0x100000010);
    assert_eq!(callstack.frames[0].offset, Some(0x10));
    assert_eq!(callstack.frames[1].address, 0xfff);
    assert_eq!(callstack.frames[1].uuid, None);
}

#[test]
fn filters_apply_over_decoded_traces() {
    let container = v2_container(
        &[(1, 10, "first"), (2, 20, "second")],
        &[
            Record::with_args(1, [3, 0, 0, 0], 1, 0x40c0019), // close(3)
            Record::with_args(2, [0, 0, 0, 0], 1, 0x40c001a),
            Record::with_args(3, [5, 0, 0, 0], 2, 0x40c0019),
            Record::with_args(4, [0, 0, 0, 0], 2, 0x40c001a),
        ],
    );

    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    let thread_map = reader.thread_map.clone();
    let mut parser = TracesParser::new(default_trace_codes());
    let traces: Vec<_> = parser.feed_iter(events).collect();
    assert_eq!(traces.len(), 2);

    let by_tid = TraceFilter {
        tid: Some(2),
        ..TraceFilter::new()
    };
    let kept: Vec<String> = traces
        .iter()
        .filter(|t| by_tid.matches_trace(t, &thread_map))
        .map(|t| t.to_string())
        .collect();
    assert_eq!(kept, vec!["close(5)"]);

    let by_process = TraceFilter {
        process: Some("first".into()),
        ..TraceFilter::new()
    };
    let kept: Vec<String> = traces
        .iter()
        .filter(|t| by_process.matches_trace(t, &thread_map))
        .map(|t| t.to_string())
        .collect();
    assert_eq!(kept, vec!["close(3)"]);

    let by_class = TraceFilter {
        class: Some(EventClass::Bsd),
        ..TraceFilter::new()
    };
    assert!(traces
        .iter()
        .all(|t| by_class.matches_trace(t, &thread_map)));
    let mach_only = TraceFilter {
        class: Some(EventClass::Mach),
        ..TraceFilter::new()
    };
    assert!(!traces
        .iter()
        .any(|t| mach_only.matches_trace(t, &thread_map)));
}

#[test]
fn independent_parsers_give_identical_output() {
    let records = || {
        vec![
            Record::with_args(1, [7, 0x1000, 16, 0], 9, 0x40c000d),
            Record::with_args(2, [0, 16, 0, 0], 9, 0x40c000e),
            Record::with_args(3, [4, 0, 0, 0], 9, 0x40c0019),
            Record::with_args(4, [0, 0, 0, 0], 9, 0x40c001a),
        ]
    };
    let run = || {
        let container = v2_container(&[], &records());
        let mut reader = KdBufParser::new(Cursor::new(container));
        let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
        let mut parser = TracesParser::new(default_trace_codes());
        parser
            .feed_iter(events)
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
    assert_eq!(run(), vec!["read(7, 0x1000, 16), count: 16", "close(4)"]);
}

// Ids and arguments below come from real device captures.

#[test]
fn captured_kperf_thread_data_decodes_through_bundled_codes() {
    let container = v2_container(
        &[(1181, 80, "backboardd")],
        &[Record::with_args(
            15773877915,
            [80, 1181, 0x10517fa00, 0xfffc0003],
            1181,
            0x25010004,
        )],
    );
    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    let mut parser = TracesParser::new(default_trace_codes());
    let traces: Vec<String> = parser.feed_iter(events).map(|t| t.to_string()).collect();
    assert_eq!(
        traces,
        vec!["PERF_THD_Data, pid: 80, tid: 1181, dq_addr: 0x10517fa00, \
              runmode: KPERF_TI_RUNNING | KPERF_TI_RUNNABLE"]
    );
}

#[test]
fn captured_launch_executable_bracket_decodes_through_bundled_codes() {
    let container = v2_container(
        &[(227140, 1, "SpringBoard")],
        &[
            Record::with_args(2375524297989, [1, 0x100970000, 0, 0], 227140, 0x1f070005),
            Record::with_args(
                2375524298100,
                [0x9731e045d42add19, 0xa061f357b353c4a5, 0x1aa753000, 0],
                227140,
                0x1f050000,
            ),
            Record::with_args(2375524298242, [1, 0, 0, 3], 227140, 0x1f070006),
        ],
    );
    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    let mut parser = TracesParser::new(default_trace_codes());
    let traces: Vec<_> = parser.feed_iter(events).collect();
    assert_eq!(traces.len(), 1);
    assert_eq!(
        traces[0].to_string(),
        "DBG_DYLD_TIMING_LAUNCH_EXECUTABLE, main_executable_mh: 0x100970000"
    );
    let launch = match &traces[0] {
        Trace::DyldLaunchExecutable(launch) => launch,
        other => panic!("decoded as {}", other),
    };
    assert_eq!(launch.uuid_map_a.len(), 1);
    assert_eq!(launch.uuid_map_a[0].load_addr, 0x1aa753000);
    assert_eq!(
        launch.uuid_map_a[0].uuid.to_string(),
        "19dd2ad4-45e0-3197-a5c4-53b357f361a0"
    );
}

#[test]
fn captured_turnstile_promotion_decodes_through_bundled_codes() {
    let container = v2_container(
        &[(6740, 58, "mediaserverd")],
        &[Record::with_args(
            7476383550,
            [6740, 0x81383198d86fb561, 0, 37],
            6740,
            0x35100024,
        )],
    );
    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    let mut parser = TracesParser::new(default_trace_codes());
    let traces: Vec<String> = parser.feed_iter(events).map(|t| t.to_string()).collect();
    assert_eq!(
        traces,
        vec!["thread_update_turnstile_promotion_locked, tid: 6740, \
              turnstile: 0x81383198d86fb561, turnstile_ts_priority: 0, \
              turnstile_link_priority: 37"]
    );
}

#[test]
fn user_supplied_codes_dispatch_on_kernel_names() {
    // The names a stock trace.codes file carries, not shortened forms.
    let codes = from_trace_codes_text("0x40c0018\tBSC_sys_close");
    let mut parser = TracesParser::new(codes);
    let container = v2_container(
        &[],
        &[
            Record::with_args(1, [5, 0, 0, 0], 3, 0x40c0019),
            Record::with_args(2, [0, 0, 0, 0], 3, 0x40c001a),
        ],
    );
    let mut reader = KdBufParser::new(Cursor::new(container));
    let events: Vec<_> = reader.events().collect::<Result<_, _>>().unwrap();
    let traces: Vec<String> = parser.feed_iter(events).map(|t| t.to_string()).collect();
    assert_eq!(traces, vec!["close(5)"]);
}

#[test]
fn caller_supplied_thread_map_survives_an_empty_container() {
    let mut thread_map = HashMap::new();
    thread_map.insert(
        5,
        kdebug_parser::ProcessData {
            pid: 1,
            name: "launchd".into(),
        },
    );
    let container = v2_container(&[], &[]);
    let mut reader = KdBufParser::with_thread_map(Cursor::new(container), thread_map);
    assert!(reader.events().collect::<Result<Vec<_>, _>>().unwrap().is_empty());
    // A v2 header replaces the map with its own (empty) table.
    assert!(reader.thread_map.is_empty());
}
