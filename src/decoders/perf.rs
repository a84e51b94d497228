use std::fmt;

use bitflags::bitflags;

use crate::kd_buf::RawEvent;
use crate::traces::TracesParser;

bitflags! {
    pub struct SamplerAction: u64 {
        const SAMPLER_TH_INFO = 0x01;
        const SAMPLER_TH_SNAPSHOT = 0x02;
        const SAMPLER_KSTACK = 0x04;
        const SAMPLER_USTACK = 0x08;
        const SAMPLER_PMC_THREAD = 0x10;
        const SAMPLER_PMC_CPU = 0x20;
        const SAMPLER_PMC_CONFIG = 0x40;
        const SAMPLER_MEMINFO = 0x80;
        const SAMPLER_TH_SCHEDULING = 0x100;
        const SAMPLER_TH_DISPATCH = 0x200;
        const SAMPLER_TK_SNAPSHOT = 0x400;
        const SAMPLER_SYS_MEM = 0x800;
        const SAMPLER_TH_INSCYC = 0x1000;
        const SAMPLER_TK_INFO = 0x2000;
    }
}

bitflags! {
    pub struct KperfTiState: u64 {
        const KPERF_TI_RUNNING = 0x01;
        const KPERF_TI_RUNNABLE = 0x02;
        const KPERF_TI_WAIT = 0x04;
        const KPERF_TI_UNINT = 0x08;
        const KPERF_TI_SUSP = 0x10;
        const KPERF_TI_TERMINATE = 0x20;
        const KPERF_TI_IDLE = 0x40;
    }
}

bitflags! {
    pub struct CallstackFlags: u64 {
        const CALLSTACK_VALID = 0x01;
        const CALLSTACK_DEFERRED = 0x02;
        const CALLSTACK_64BIT = 0x04;
        const CALLSTACK_KERNEL = 0x08;
        const CALLSTACK_TRUNCATED = 0x10;
        const CALLSTACK_CONTINUATION = 0x20;
        const CALLSTACK_KERNEL_WORDS = 0x40;
        const CALLSTACK_TRANSLATED = 0x80;
        const CALLSTACK_FIXUP_PC = 0x100;
    }
}

macro_rules! joined_display {
    ($($flags:ty),*) => {
        $(
            impl fmt::Display for $flags {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    if self.is_empty() {
                        Ok(())
                    } else {
                        fmt::Debug::fmt(self, f)
                    }
                }
            }
        )*
    };
}

joined_display!(SamplerAction, KperfTiState, CallstackFlags);

/// A kperf sample. Thread info and user callstack payloads are folded in
/// from the sub-events emitted inside the same bracket.
#[derive(Debug)]
pub struct PerfEvent {
    pub ktraces: Vec<RawEvent>,
    pub sample_what: SamplerAction,
    pub actionid: u64,
    pub th_info: Option<PerfThdData>,
    pub cs_flags: Option<CallstackFlags>,
    pub cs_frames: Option<Vec<u64>>,
}

impl fmt::Display for PerfEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PERF_Event, sample_what: {}, actionid: {}",
            self.sample_what, self.actionid
        )?;
        if let Some(frames) = &self.cs_frames {
            write!(f, ", frames count: {}", frames.len())?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct PerfThdData {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub tid: u64,
    pub dq_addr: u64,
    pub runmode: KperfTiState,
}

impl fmt::Display for PerfThdData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PERF_THD_Data, pid: {}, tid: {}, dq_addr: {:#x}, runmode: {}",
            self.pid, self.tid, self.dq_addr, self.runmode
        )
    }
}

#[derive(Debug)]
pub struct PerfThdCswitch {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub pid: u64,
}

impl fmt::Display for PerfThdCswitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PERF_THD_CSwitch, tid: {}, pid: {}", self.tid, self.pid)
    }
}

#[derive(Debug)]
pub struct PerfStkUdata {
    pub ktraces: Vec<RawEvent>,
    pub frames: Vec<u64>,
}

impl fmt::Display for PerfStkUdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frames: Vec<String> = self.frames.iter().map(|fr| format!("{fr:#x}")).collect();
        write!(f, "PERF_STK_UData, frames: [{}]", frames.join(", "))
    }
}

#[derive(Debug)]
pub struct PerfStkUhdr {
    pub ktraces: Vec<RawEvent>,
    pub flags: CallstackFlags,
    pub nframes: u64,
}

impl fmt::Display for PerfStkUhdr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PERF_STK_UHdr, flags: {}, frames count: {}",
            self.flags, self.nframes
        )
    }
}

pub(super) fn event(parser: &mut TracesParser, events: Vec<RawEvent>) -> PerfEvent {
    let args = events[0].args;
    let sample_what = SamplerAction::from_bits_truncate(args[0]);
    let mut th_info = None;
    let mut cs_flags = None;
    let mut cs_frames = None;
    let name_of = |parser: &TracesParser, e: &RawEvent| -> Option<String> {
        parser.trace_codes.get(&e.eventid).cloned()
    };
    if sample_what.contains(SamplerAction::SAMPLER_TH_INFO) {
        let sub_events: Vec<RawEvent> = events
            .iter()
            .filter(|e| name_of(parser, e).as_deref() == Some("PERF_THD_Data"))
            .copied()
            .collect();
        if !sub_events.is_empty() {
            th_info = Some(thd_data(parser, sub_events));
        }
    }
    if sample_what.contains(SamplerAction::SAMPLER_USTACK) {
        let sub_events: Vec<RawEvent> = events
            .iter()
            .filter(|e| name_of(parser, e).as_deref() == Some("PERF_STK_UHdr"))
            .copied()
            .collect();
        if !sub_events.is_empty() {
            let header = stk_uhdr(sub_events);
            let mut frames: Vec<u64> = events
                .iter()
                .filter(|e| name_of(parser, e).as_deref() == Some("PERF_STK_UData"))
                .flat_map(|e| stk_udata(vec![*e]).frames)
                .collect();
            frames.truncate(header.nframes as usize);
            cs_frames = Some(frames);
            cs_flags = Some(header.flags);
        }
    }
    PerfEvent {
        ktraces: events,
        sample_what,
        actionid: args[1],
        th_info,
        cs_flags,
        cs_frames,
    }
}

pub(super) fn thd_data(parser: &mut TracesParser, events: Vec<RawEvent>) -> PerfThdData {
    let args = events[0].args;
    let pid = args[0];
    let tid = args[1];
    parser.threads_pids.insert(tid, pid);
    PerfThdData {
        ktraces: events,
        pid,
        tid,
        dq_addr: args[2],
        runmode: KperfTiState::from_bits_truncate(args[3] & 0xffff),
    }
}

pub(super) fn thd_cswitch(events: Vec<RawEvent>) -> PerfThdCswitch {
    let args = events[0].args;
    PerfThdCswitch {
        ktraces: events,
        tid: args[0],
        pid: args[1],
    }
}

pub(super) fn stk_udata(events: Vec<RawEvent>) -> PerfStkUdata {
    PerfStkUdata {
        frames: events[0].args.to_vec(),
        ktraces: events,
    }
}

pub(super) fn stk_uhdr(events: Vec<RawEvent>) -> PerfStkUhdr {
    let args = events[0].args;
    PerfStkUhdr {
        ktraces: events,
        flags: CallstackFlags::from_bits_truncate(args[0]),
        nframes: args[1],
    }
}
