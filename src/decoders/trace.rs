use std::fmt;

use crate::kd_buf::RawEvent;
use crate::traces::{strip_nuls, TracesParser};

/// Names whose events are paired through the dedicated trace-state map.
const TRACE_NAMES: [&str; 10] = [
    "TRACE_DATA_NEWTHREAD",
    "TRACE_DATA_EXEC",
    "TRACE_DATA_THREAD_TERMINATE",
    "TRACE_DATA_THREAD_TERMINATE_PID",
    "TRACE_STRING_GLOBAL",
    "TRACE_STRING_NEWTHREAD",
    "TRACE_STRING_EXEC",
    "TRACE_STRING_PROC_EXIT",
    "TRACE_STRING_THREADNAME",
    "TRACE_STRING_THREADNAME_PREV",
];

pub fn is_trace_category(name: &str) -> bool {
    TRACE_NAMES.contains(&name)
}

#[derive(Debug, Clone)]
pub struct TraceDataNewthread {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub pid: u64,
    pub is_exec_copy: u64,
    pub uniqueid: u64,
}

impl fmt::Display for TraceDataNewthread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New thread {} of parent: {}", self.tid, self.pid)
    }
}

#[derive(Debug, Clone)]
pub struct TraceDataExec {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub fsid: u64,
    pub fileid: u64,
}

impl fmt::Display for TraceDataExec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New process pid: {}", self.pid)
    }
}

#[derive(Debug)]
pub struct TraceDataThreadTerminate {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub pid: Option<u64>,
    pub name: String,
}

impl fmt::Display for TraceDataThreadTerminate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thread terminated tid: {}", self.tid)?;
        if let Some(pid) = self.pid {
            write!(f, ", pid: {pid}")?;
        }
        if !self.name.is_empty() {
            write!(f, ", name: {}", self.name)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct TraceDataThreadTerminatePid {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub uniqueid: u64,
}

impl fmt::Display for TraceDataThreadTerminatePid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Thread terminated thread pid: {}, unique id {}",
            self.pid, self.uniqueid
        )
    }
}

#[derive(Debug)]
pub struct TraceStringGlobal {
    pub ktraces: Vec<RawEvent>,
    pub debugid: u64,
    pub str_id: u64,
    pub vstr: String,
}

impl fmt::Display for TraceStringGlobal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New global string: \"{}\", id: {}", self.vstr, self.str_id)
    }
}

#[derive(Debug)]
pub struct TraceStringNewthread {
    pub ktraces: Vec<RawEvent>,
    pub name: String,
}

impl fmt::Display for TraceStringNewthread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New thread of parent: {}", self.name)
    }
}

#[derive(Debug)]
pub struct TraceStringExec {
    pub ktraces: Vec<RawEvent>,
    pub name: String,
}

impl fmt::Display for TraceStringExec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New process name: {}", self.name)
    }
}

#[derive(Debug)]
pub struct TraceStringProcExit {
    pub ktraces: Vec<RawEvent>,
    pub name: String,
}

impl fmt::Display for TraceStringProcExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Process exit name: {}", self.name)
    }
}

#[derive(Debug)]
pub struct TraceStringThreadname {
    pub ktraces: Vec<RawEvent>,
    pub name: String,
}

impl fmt::Display for TraceStringThreadname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New thread name: {}", self.name)
    }
}

#[derive(Debug)]
pub struct TraceStringThreadnamePrev {
    pub ktraces: Vec<RawEvent>,
    pub name: String,
}

impl fmt::Display for TraceStringThreadnamePrev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thread terminated name: {}", self.name)
    }
}

pub(super) fn data_newthread(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceDataNewthread {
    let args = events[0].args;
    let newthread = TraceDataNewthread {
        ktraces: events,
        tid: args[0],
        pid: args[1],
        is_exec_copy: args[2],
        uniqueid: args[3],
    };
    parser.threads_pids.insert(newthread.tid, newthread.pid);
    parser.last_data_newthread = Some(newthread.clone());
    newthread
}

pub(super) fn data_exec(parser: &mut TracesParser, events: Vec<RawEvent>) -> TraceDataExec {
    let args = events[0].args;
    let exec = TraceDataExec {
        ktraces: events,
        pid: args[0],
        fsid: args[1],
        fileid: args[2],
    };
    parser.last_data_exec = Some(exec.clone());
    exec
}

pub(super) fn data_thread_terminate(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceDataThreadTerminate {
    let tid = events[0].args[0];
    TraceDataThreadTerminate {
        ktraces: events,
        tid,
        pid: parser.threads_pids.get(&tid).copied(),
        name: parser.tids_names.get(&tid).cloned().unwrap_or_default(),
    }
}

pub(super) fn data_thread_terminate_pid(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceDataThreadTerminatePid {
    let args = events[0].args;
    let terminate = TraceDataThreadTerminatePid {
        pid: args[0],
        uniqueid: args[1],
        ktraces: events,
    };
    parser
        .threads_pids
        .insert(terminate.ktraces[0].tid, terminate.pid);
    terminate
}

/// Reassemble a global string across its bracket and register it in the
/// parser's string table when non-empty.
pub(super) fn string_global(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceStringGlobal {
    let mut debugid = 0;
    let mut str_id = 0;
    let mut vstr = Vec::new();
    for event in &events {
        if event.qualifier.has_start() {
            debugid = event.args[0];
            str_id = event.args[1];
            vstr.extend_from_slice(&event.data[16..]);
        } else {
            vstr.extend_from_slice(&event.data);
        }
        if event.qualifier.has_end() {
            break;
        }
    }
    let global = TraceStringGlobal {
        ktraces: events,
        debugid,
        str_id,
        vstr: strip_nuls(&vstr),
    };
    if !global.vstr.is_empty() {
        parser.global_strings.insert(global.str_id, global.vstr.clone());
    }
    global
}

pub(super) fn string_newthread(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceStringNewthread {
    let name = strip_nuls(&events[0].data);
    if let Some(newthread) = &parser.last_data_newthread {
        parser.pids_names.insert(newthread.pid, name.clone());
    }
    TraceStringNewthread {
        ktraces: events,
        name,
    }
}

pub(super) fn string_exec(parser: &mut TracesParser, events: Vec<RawEvent>) -> TraceStringExec {
    let name = strip_nuls(&events[0].data);
    if let Some(exec) = &parser.last_data_exec {
        parser.pids_names.insert(exec.pid, name.clone());
    }
    TraceStringExec {
        ktraces: events,
        name,
    }
}

pub(super) fn string_proc_exit(events: Vec<RawEvent>) -> TraceStringProcExit {
    TraceStringProcExit {
        name: strip_nuls(&events[0].data),
        ktraces: events,
    }
}

fn joined_name(events: &[RawEvent]) -> String {
    let bytes: Vec<u8> = events.iter().flat_map(|e| e.data).collect();
    strip_nuls(&bytes)
}

pub(super) fn string_threadname(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceStringThreadname {
    let name = joined_name(&events);
    parser.tids_names.insert(events[0].tid, name.clone());
    TraceStringThreadname {
        ktraces: events,
        name,
    }
}

pub(super) fn string_threadname_prev(
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> TraceStringThreadnamePrev {
    let name = joined_name(&events);
    parser.tids_names.insert(events[0].tid, name.clone());
    TraceStringThreadnamePrev {
        ktraces: events,
        name,
    }
}
