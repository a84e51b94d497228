use std::fmt;

use bitflags::bitflags;

use crate::kd_buf::RawEvent;
use crate::traces::TracesParser;

bitflags! {
    /// AST bits reported as the reason of a scheduler decision.
    pub struct AstReason: u64 {
        const AST_PREEMPT = 0x01;
        const AST_QUANTUM = 0x02;
        const AST_URGENT = 0x04;
        const AST_HANDOFF = 0x08;
        const AST_YIELD = 0x10;
    }
}

impl fmt::Display for AstReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "AST_NONE")
        } else {
            fmt::Debug::fmt(self, f)
        }
    }
}

bitflags! {
    pub struct ThreadState: u64 {
        const TH_WAIT = 0x01;
        const TH_SUSP = 0x02;
        const TH_RUN = 0x04;
        const TH_UNINT = 0x08;
        const TH_TERMINATE = 0x10;
        const TH_TERMINATE2 = 0x20;
        const TH_WAIT_REPORT = 0x40;
        const TH_IDLE = 0x80;
    }
}

impl fmt::Display for ThreadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            fmt::Debug::fmt(self, f)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorState {
    OffLine,
    Shutdown,
    Start,
    Unused,
    Idle,
    Dispatching,
    Running,
    Unknown(u64),
}

impl ProcessorState {
    fn from_value(value: u64) -> Self {
        match value {
            0 => ProcessorState::OffLine,
            1 => ProcessorState::Shutdown,
            2 => ProcessorState::Start,
            3 => ProcessorState::Unused,
            4 => ProcessorState::Idle,
            5 => ProcessorState::Dispatching,
            6 => ProcessorState::Running,
            other => ProcessorState::Unknown(other),
        }
    }
}

impl fmt::Display for ProcessorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessorState::OffLine => write!(f, "PROCESSOR_OFF_LINE"),
            ProcessorState::Shutdown => write!(f, "PROCESSOR_SHUTDOWN"),
            ProcessorState::Start => write!(f, "PROCESSOR_START"),
            ProcessorState::Unused => write!(f, "PROCESSOR_UNUSED"),
            ProcessorState::Idle => write!(f, "PROCESSOR_IDLE"),
            ProcessorState::Dispatching => write!(f, "PROCESSOR_DISPATCHING"),
            ProcessorState::Running => write!(f, "PROCESSOR_RUNNING"),
            ProcessorState::Unknown(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbgVmFaultType {
    ZeroFill,
    Pagein,
    Cow,
    CacheHit,
    NzfPage,
    Guard,
    Pageinv,
    Pageind,
    Compressor,
    CompressorSwapin,
    Unknown(u64),
}

impl DbgVmFaultType {
    fn from_value(value: u64) -> Self {
        match value {
            1 => DbgVmFaultType::ZeroFill,
            2 => DbgVmFaultType::Pagein,
            3 => DbgVmFaultType::Cow,
            4 => DbgVmFaultType::CacheHit,
            5 => DbgVmFaultType::NzfPage,
            6 => DbgVmFaultType::Guard,
            7 => DbgVmFaultType::Pageinv,
            8 => DbgVmFaultType::Pageind,
            9 => DbgVmFaultType::Compressor,
            10 => DbgVmFaultType::CompressorSwapin,
            other => DbgVmFaultType::Unknown(other),
        }
    }
}

impl fmt::Display for DbgVmFaultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbgVmFaultType::ZeroFill => write!(f, "DBG_ZERO_FILL_FAULT"),
            DbgVmFaultType::Pagein => write!(f, "DBG_PAGEIN_FAULT"),
            DbgVmFaultType::Cow => write!(f, "DBG_COW_FAULT"),
            DbgVmFaultType::CacheHit => write!(f, "DBG_CACHE_HIT_FAULT"),
            DbgVmFaultType::NzfPage => write!(f, "DBG_NZF_PAGE_FAULT"),
            DbgVmFaultType::Guard => write!(f, "DBG_GUARD_FAULT"),
            DbgVmFaultType::Pageinv => write!(f, "DBG_PAGEINV_FAULT"),
            DbgVmFaultType::Pageind => write!(f, "DBG_PAGEIND_FAULT"),
            DbgVmFaultType::Compressor => write!(f, "DBG_COMPRESSOR_FAULT"),
            DbgVmFaultType::CompressorSwapin => write!(f, "DBG_COMPRESSOR_SWAPIN_FAULT"),
            DbgVmFaultType::Unknown(value) => write!(f, "{value}"),
        }
    }
}

bitflags! {
    pub struct VmProtection: u64 {
        const VM_PROT_READ = 0x01;
        const VM_PROT_WRITE = 0x02;
        const VM_PROT_EXECUTE = 0x04;
    }
}

impl fmt::Display for VmProtection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            fmt::Debug::fmt(self, f)
        }
    }
}

#[derive(Debug)]
pub struct MachSched {
    pub ktraces: Vec<RawEvent>,
    pub reason: AstReason,
    pub to: u64,
    pub from_sched_pri: u64,
    pub to_sched_pri: u64,
}

impl fmt::Display for MachSched {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_SCHED, reason: {}, to: {}, from_sched_pri: {}, to_sched_pri: {}",
            self.reason, self.to, self.from_sched_pri, self.to_sched_pri
        )
    }
}

#[derive(Debug)]
pub struct MachStkhandoff {
    pub ktraces: Vec<RawEvent>,
    pub from_: u64,
    pub to: u64,
    pub reason: AstReason,
    pub from_sched_pri: u64,
    pub to_sched_pri: u64,
}

impl fmt::Display for MachStkhandoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_STKHANDOFF, from: {}, to: {}, reason: {}, from_sched_pri: {}, to_sched_pri: {}",
            self.from_, self.to, self.reason, self.from_sched_pri, self.to_sched_pri
        )
    }
}

#[derive(Debug)]
pub struct MachMkrunnable {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub sched_pri: u64,
    pub wait_result: u64,
    pub runnable_threads: u64,
}

impl fmt::Display for MachMkrunnable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_MKRUNNABLE, tid: {}, sched_pri: {}, wait_result: {}, runnable_threads: {}",
            self.tid, self.sched_pri, self.wait_result, self.runnable_threads
        )
    }
}

#[derive(Debug)]
pub struct MachIdle {
    pub ktraces: Vec<RawEvent>,
    pub from_: u64,
    pub process_state: ProcessorState,
    pub to: u64,
    pub reason: AstReason,
}

impl fmt::Display for MachIdle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_IDLE, from: {}, process_state: {}, to: {}, reason: {}",
            self.from_, self.process_state, self.to, self.reason
        )
    }
}

#[derive(Debug)]
pub struct MachBlock {
    pub ktraces: Vec<RawEvent>,
    pub reason: AstReason,
    pub continuation: u64,
}

impl fmt::Display for MachBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_BLOCK, reason: {}, continuation: {:#x}",
            self.reason, self.continuation
        )
    }
}

#[derive(Debug)]
pub struct MachWait {
    pub ktraces: Vec<RawEvent>,
    pub event: u64,
}

impl fmt::Display for MachWait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MACH_WAIT, event: {:#x}", self.event)
    }
}

#[derive(Debug)]
pub struct MachDispatch {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub reason: AstReason,
    pub state: ThreadState,
    pub runnable_threads: u64,
}

impl fmt::Display for MachDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_DISPATCH, tid: {}, reason: {}, state: {}, runnable_threads: {}",
            self.tid, self.reason, self.state, self.runnable_threads
        )
    }
}

/// A virtual memory fault bracket. The faulting pid and protection come
/// from the real fault address event nested inside the bracket when the
/// kernel emitted one.
#[derive(Debug)]
pub struct MachVmfault {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub is_kernel: bool,
    pub result: u64,
    pub fault_type: DbgVmFaultType,
    pub pid: Option<u64>,
    pub caller_prot: VmProtection,
}

impl fmt::Display for MachVmfault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MACH_vmfault, addr: {:#x}, fault_type: {}, result: {}",
            self.addr, self.fault_type, self.result
        )?;
        if let Some(pid) = self.pid {
            write!(f, ", pid: {pid}, caller_prot: {}", self.caller_prot)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct DataAbort {
    pub ktraces: Vec<RawEvent>,
    pub esr: u64,
    pub far: u64,
    pub pc: u64,
    pub is_kernel: bool,
}

impl fmt::Display for DataAbort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let which = if self.is_kernel {
            "Kernel_Data_Abort_Same_EL_Exc_ARM"
        } else {
            "User_Data_Abort_Lower_EL_Exc_ARM"
        };
        write!(
            f,
            "{which}, esr: {:#x}, far: {:#x}, pc: {:#x}",
            self.esr, self.far, self.pc
        )
    }
}

#[derive(Debug)]
pub struct MachInterrupt {
    pub ktraces: Vec<RawEvent>,
    pub pc: u64,
    pub is_user: bool,
    pub type_: u64,
}

impl fmt::Display for MachInterrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INTERRUPT, pc: {:#x}, is_user: {}, type: {}",
            self.pc, self.is_user, self.type_
        )
    }
}

#[derive(Debug)]
pub struct DecrSet {
    pub ktraces: Vec<RawEvent>,
    pub decr: u64,
    pub deadline: u64,
    pub queue_count: u64,
}

impl fmt::Display for DecrSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecrSet, decr: {}, deadline: {}, queue_count: {}",
            self.decr, self.deadline, self.queue_count
        )
    }
}

#[derive(Debug)]
pub struct ThreadGroupSet {
    pub ktraces: Vec<RawEvent>,
    pub current_tgid: i64,
    pub target_tgid: u64,
    pub tid: u64,
    pub home_tgid: u64,
}

impl fmt::Display for ThreadGroupSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "THREAD_GROUP_SET, current_tgid: {}, target_tgid: {}, tid: {}, home_tgid: {}",
            self.current_tgid, self.target_tgid, self.tid, self.home_tgid
        )
    }
}

#[derive(Debug)]
pub struct SchedClutchCpuThreadSelect {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub tgid: u64,
    pub scb_bucket: u64,
}

impl fmt::Display for SchedClutchCpuThreadSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SCHED_CLUTCH_CPU_THREAD_SELECT, tid: {}, tgid: {}, scb_bucket: {}",
            self.tid, self.tgid, self.scb_bucket
        )
    }
}

#[derive(Debug)]
pub struct SchedClutchTgBucketPri {
    pub ktraces: Vec<RawEvent>,
    pub tgid: u64,
    pub scb_bucket: u64,
    pub priority: u64,
    pub interactive_score: u64,
}

impl fmt::Display for SchedClutchTgBucketPri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SCHED_CLUTCH_TG_BUCKET_PRI, tgid: {}, scb_bucket: {}, priority: {}, interactive_score: {}",
            self.tgid, self.scb_bucket, self.priority, self.interactive_score
        )
    }
}

pub(super) fn sched(events: Vec<RawEvent>) -> MachSched {
    let args = events[0].args;
    MachSched {
        ktraces: events,
        reason: AstReason::from_bits_truncate(args[0]),
        to: args[1],
        from_sched_pri: args[2],
        to_sched_pri: args[3],
    }
}

pub(super) fn stkhandoff(events: Vec<RawEvent>) -> MachStkhandoff {
    let event = events[0];
    MachStkhandoff {
        ktraces: events,
        from_: event.tid,
        to: event.args[1],
        reason: AstReason::from_bits_truncate(event.args[0]),
        from_sched_pri: event.args[2],
        to_sched_pri: event.args[3],
    }
}

pub(super) fn mkrunnable(events: Vec<RawEvent>) -> MachMkrunnable {
    let args = events[0].args;
    MachMkrunnable {
        ktraces: events,
        tid: args[0],
        sched_pri: args[1],
        wait_result: args[2],
        runnable_threads: args[3],
    }
}

pub(super) fn idle(events: Vec<RawEvent>) -> MachIdle {
    let args = events[events.len() - 1].args;
    MachIdle {
        ktraces: events,
        from_: args[0],
        process_state: ProcessorState::from_value(args[1]),
        to: args[2],
        reason: AstReason::from_bits_truncate(args[3]),
    }
}

pub(super) fn block(events: Vec<RawEvent>) -> MachBlock {
    let args = events[0].args;
    MachBlock {
        ktraces: events,
        reason: AstReason::from_bits_truncate(args[0]),
        continuation: args[1],
    }
}

pub(super) fn wait(events: Vec<RawEvent>) -> MachWait {
    let event = events[0].args[0];
    MachWait {
        ktraces: events,
        event,
    }
}

pub(super) fn dispatch(events: Vec<RawEvent>) -> MachDispatch {
    let args = events[0].args;
    MachDispatch {
        ktraces: events,
        tid: args[0],
        reason: AstReason::from_bits_truncate(args[1]),
        state: ThreadState::from_bits_truncate(args[2]),
        runnable_threads: args[3],
    }
}

const REAL_FAULT_NAMES: [&str; 4] = [
    "RealFaultAddressInternal",
    "RealFaultAddressPurgable",
    "RealFaultAddressExternal",
    "RealFaultAddressSharedCache",
];

pub(super) fn vmfault(parser: &TracesParser, events: Vec<RawEvent>) -> MachVmfault {
    let first = events[0];
    let end = events[events.len() - 1];
    let real_fault = events.iter().find(|e| {
        parser
            .trace_codes
            .get(&e.eventid)
            .map(|name| REAL_FAULT_NAMES.contains(&name.as_str()))
            .unwrap_or(false)
    });
    MachVmfault {
        addr: first.args[1],
        fault_type: DbgVmFaultType::from_value(first.args[0]),
        result: end.args[2],
        is_kernel: end.args[3] == 0,
        pid: real_fault.map(|e| e.args[3]),
        caller_prot: real_fault
            .map(|e| VmProtection::from_bits_truncate((e.args[1] >> 8) & 0xff))
            .unwrap_or_else(VmProtection::empty),
        ktraces: events,
    }
}

pub(super) fn data_abort(events: Vec<RawEvent>, is_kernel: bool) -> DataAbort {
    let args = events[0].args;
    DataAbort {
        ktraces: events,
        esr: args[0],
        far: args[1],
        pc: args[2],
        is_kernel,
    }
}

pub(super) fn interrupt(events: Vec<RawEvent>) -> MachInterrupt {
    let args = events[0].args;
    MachInterrupt {
        ktraces: events,
        pc: args[1],
        is_user: args[2] != 0,
        type_: args[3],
    }
}

pub(super) fn decr_set(events: Vec<RawEvent>) -> DecrSet {
    let args = events[0].args;
    DecrSet {
        ktraces: events,
        decr: args[0],
        deadline: args[2],
        queue_count: args[3],
    }
}

pub(super) fn thread_group_set(events: Vec<RawEvent>) -> ThreadGroupSet {
    let args = events[0].args;
    ThreadGroupSet {
        ktraces: events,
        current_tgid: args[0] as i64,
        target_tgid: args[1],
        tid: args[2],
        home_tgid: args[3],
    }
}

pub(super) fn sched_clutch_cpu_thread_select(events: Vec<RawEvent>) -> SchedClutchCpuThreadSelect {
    let args = events[0].args;
    SchedClutchCpuThreadSelect {
        ktraces: events,
        tid: args[0],
        tgid: args[1],
        scb_bucket: args[2],
    }
}

pub(super) fn sched_clutch_tg_bucket_pri(events: Vec<RawEvent>) -> SchedClutchTgBucketPri {
    let args = events[0].args;
    SchedClutchTgBucketPri {
        ktraces: events,
        tgid: args[0],
        scb_bucket: args[1],
        priority: args[2],
        interactive_score: args[3],
    }
}
