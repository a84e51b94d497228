use std::fmt;

use crate::kd_buf::RawEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnstileType {
    None,
    KernelMutex,
    Ulock,
    PthreadMutex,
    SyncIpc,
    Workloops,
    Workqs,
    Knote,
    SleepInheritor,
    TotalTypes,
    Unknown(u64),
}

impl TurnstileType {
    fn from_value(value: u64) -> Self {
        match value {
            0 => TurnstileType::None,
            1 => TurnstileType::KernelMutex,
            2 => TurnstileType::Ulock,
            3 => TurnstileType::PthreadMutex,
            4 => TurnstileType::SyncIpc,
            5 => TurnstileType::Workloops,
            6 => TurnstileType::Workqs,
            7 => TurnstileType::Knote,
            8 => TurnstileType::SleepInheritor,
            9 => TurnstileType::TotalTypes,
            other => TurnstileType::Unknown(other),
        }
    }
}

impl fmt::Display for TurnstileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnstileType::None => write!(f, "TURNSTILE_NONE"),
            TurnstileType::KernelMutex => write!(f, "TURNSTILE_KERNEL_MUTEX"),
            TurnstileType::Ulock => write!(f, "TURNSTILE_ULOCK"),
            TurnstileType::PthreadMutex => write!(f, "TURNSTILE_PTHREAD_MUTEX"),
            TurnstileType::SyncIpc => write!(f, "TURNSTILE_SYNC_IPC"),
            TurnstileType::Workloops => write!(f, "TURNSTILE_WORKLOOPS"),
            TurnstileType::Workqs => write!(f, "TURNSTILE_WORKQS"),
            TurnstileType::Knote => write!(f, "TURNSTILE_KNOTE"),
            TurnstileType::SleepInheritor => write!(f, "TURNSTILE_SLEEP_INHERITOR"),
            TurnstileType::TotalTypes => write!(f, "TURNSTILE_TOTAL_TYPES"),
            TurnstileType::Unknown(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug)]
pub struct WaitqAddThreadPriorityQueue {
    pub ktraces: Vec<RawEvent>,
    pub turnstile: u64,
    pub tid: u64,
    pub priority: u64,
}

impl fmt::Display for WaitqAddThreadPriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "waitq_add_thread_priority_queue, turnstile: {:#x}, tid: {}, priority: {}",
            self.turnstile, self.tid, self.priority
        )
    }
}

#[derive(Debug)]
pub struct ThreadRemovedFromTurnstileWaitq {
    pub ktraces: Vec<RawEvent>,
    pub turnstile: u64,
    pub tid: u64,
}

impl fmt::Display for ThreadRemovedFromTurnstileWaitq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_removed_from_turnstile_waitq, turnstile: {:#x}, tid: {}",
            self.turnstile, self.tid
        )
    }
}

#[derive(Debug)]
pub struct UpdateThreadPromotionLocked {
    pub ktraces: Vec<RawEvent>,
    pub dst_turnstile: u64,
    pub tid: u64,
    pub priority: u64,
    pub thread_link_priority: u64,
}

impl fmt::Display for UpdateThreadPromotionLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_update_thread_promotion_locked, dst_turnstile: {:#x}, tid: {}, priority: {}, thread_link_priority: {}",
            self.dst_turnstile, self.tid, self.priority, self.thread_link_priority
        )
    }
}

#[derive(Debug)]
pub struct AddTurnstilePromotion {
    pub ktraces: Vec<RawEvent>,
    pub dst_turnstile: u64,
    pub src_turnstile: u64,
    pub src_ts_priority: u64,
}

impl fmt::Display for AddTurnstilePromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_add_turnstile_promotion({:#x}, {:#x}), priority: {}",
            self.dst_turnstile, self.src_turnstile, self.src_ts_priority
        )
    }
}

#[derive(Debug)]
pub struct RemoveTurnstilePromotion {
    pub ktraces: Vec<RawEvent>,
    pub dst_turnstile: u64,
    pub src_turnstile: u64,
}

impl fmt::Display for RemoveTurnstilePromotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_remove_turnstile_promotion({:#x}, {:#x})",
            self.dst_turnstile, self.src_turnstile
        )
    }
}

#[derive(Debug)]
pub struct UpdateTurnstilePromotionLocked {
    pub ktraces: Vec<RawEvent>,
    pub dst_turnstile: u64,
    pub src_turnstile: u64,
    pub src_ts_priority: u64,
    pub src_turnstile_link_priority: u64,
}

impl fmt::Display for UpdateTurnstilePromotionLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_update_turnstile_promotion_locked, dst_turnstile: {:#x}, src_turnstile: {:#x}, src_ts_priority: {}, src_turnstile_link_priority: {}",
            self.dst_turnstile, self.src_turnstile, self.src_ts_priority, self.src_turnstile_link_priority
        )
    }
}

#[derive(Debug)]
pub struct AddedToThreadHeap {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub turnstile: u64,
    pub priority: u64,
}

impl fmt::Display for AddedToThreadHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_add_turnstile_promotion({}, {:#x}), priority: {}",
            self.tid, self.turnstile, self.priority
        )
    }
}

#[derive(Debug)]
pub struct RemovedFromThreadHeap {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub turnstile: u64,
}

impl fmt::Display for RemovedFromThreadHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_remove_turnstile_promotion({}, {:#x})",
            self.tid, self.turnstile
        )
    }
}

#[derive(Debug)]
pub struct ThreadUpdateTurnstilePromotionLocked {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub turnstile: u64,
    pub turnstile_ts_priority: u64,
    pub turnstile_link_priority: u64,
}

impl fmt::Display for ThreadUpdateTurnstilePromotionLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_update_turnstile_promotion_locked, tid: {}, turnstile: {:#x}, turnstile_ts_priority: {}, turnstile_link_priority: {}",
            self.tid, self.turnstile, self.turnstile_ts_priority, self.turnstile_link_priority
        )
    }
}

#[derive(Debug)]
pub struct ThreadNotWaitingOnTurnstile {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub turnstile_max_hop: u64,
    pub thread_hop: u64,
}

impl fmt::Display for ThreadNotWaitingOnTurnstile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_not_waiting_on_turnstile, tid: {}, turnstile_max_hop: {}, thread_hop: {}",
            self.tid, self.turnstile_max_hop, self.thread_hop
        )
    }
}

#[derive(Debug)]
pub struct TurnstileRecomputePriorityLocked {
    pub ktraces: Vec<RawEvent>,
    pub turnstile: u64,
    pub new_priority: u64,
    pub old_priority: u64,
}

impl fmt::Display for TurnstileRecomputePriorityLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_recompute_priority_locked, turnstile: {:#x}, new_priority: {}, old_priority: {}",
            self.turnstile, self.new_priority, self.old_priority
        )
    }
}

#[derive(Debug)]
pub struct ThreadRecomputeUserPromotionLocked {
    pub ktraces: Vec<RawEvent>,
    pub tid: u64,
    pub user_promotion_basepri: u64,
    pub thread_user_promotion_basepri: u64,
}

impl fmt::Display for ThreadRecomputeUserPromotionLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_recompute_user_promotion_locked, tid: {}, user_promotion_basepri: {}, thread_user_promotion_basepri: {}",
            self.tid, self.user_promotion_basepri, self.thread_user_promotion_basepri
        )
    }
}

#[derive(Debug)]
pub struct TurnstilePrepare {
    pub ktraces: Vec<RawEvent>,
    pub turnstile: u64,
    pub proprietor: u64,
    pub type_: TurnstileType,
}

impl fmt::Display for TurnstilePrepare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_prepare, turnstile: {:#x}, proprietor: {:#x}, type: {}",
            self.turnstile, self.proprietor, self.type_
        )
    }
}

#[derive(Debug)]
pub struct TurnstileComplete {
    pub ktraces: Vec<RawEvent>,
    pub turnstile: u64,
    pub proprietor: u64,
    pub type_: TurnstileType,
}

impl fmt::Display for TurnstileComplete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "turnstile_complete, turnstile: {:#x}, proprietor: {:#x}, type: {}",
            self.turnstile, self.proprietor, self.type_
        )
    }
}

pub(super) fn waitq_add_thread_priority_queue(events: Vec<RawEvent>) -> WaitqAddThreadPriorityQueue {
    let args = events[0].args;
    WaitqAddThreadPriorityQueue {
        ktraces: events,
        turnstile: args[0],
        tid: args[1],
        priority: args[2],
    }
}

pub(super) fn thread_removed_from_turnstile_waitq(
    events: Vec<RawEvent>,
) -> ThreadRemovedFromTurnstileWaitq {
    let args = events[0].args;
    ThreadRemovedFromTurnstileWaitq {
        ktraces: events,
        turnstile: args[0],
        tid: args[1],
    }
}

pub(super) fn update_thread_promotion_locked(events: Vec<RawEvent>) -> UpdateThreadPromotionLocked {
    let args = events[0].args;
    UpdateThreadPromotionLocked {
        ktraces: events,
        dst_turnstile: args[0],
        tid: args[1],
        priority: args[2],
        thread_link_priority: args[3],
    }
}

pub(super) fn add_turnstile_promotion(events: Vec<RawEvent>) -> AddTurnstilePromotion {
    let args = events[0].args;
    AddTurnstilePromotion {
        ktraces: events,
        dst_turnstile: args[0],
        src_turnstile: args[1],
        src_ts_priority: args[2],
    }
}

pub(super) fn remove_turnstile_promotion(events: Vec<RawEvent>) -> RemoveTurnstilePromotion {
    let args = events[0].args;
    RemoveTurnstilePromotion {
        ktraces: events,
        dst_turnstile: args[0],
        src_turnstile: args[1],
    }
}

pub(super) fn update_turnstile_promotion_locked(
    events: Vec<RawEvent>,
) -> UpdateTurnstilePromotionLocked {
    let args = events[0].args;
    UpdateTurnstilePromotionLocked {
        ktraces: events,
        dst_turnstile: args[0],
        src_turnstile: args[1],
        src_ts_priority: args[2],
        src_turnstile_link_priority: args[3],
    }
}

pub(super) fn added_to_thread_heap(events: Vec<RawEvent>) -> AddedToThreadHeap {
    let args = events[0].args;
    AddedToThreadHeap {
        ktraces: events,
        tid: args[0],
        turnstile: args[1],
        priority: args[2],
    }
}

pub(super) fn removed_from_thread_heap(events: Vec<RawEvent>) -> RemovedFromThreadHeap {
    let args = events[0].args;
    RemovedFromThreadHeap {
        ktraces: events,
        tid: args[0],
        turnstile: args[1],
    }
}

pub(super) fn thread_update_turnstile_promotion_locked(
    events: Vec<RawEvent>,
) -> ThreadUpdateTurnstilePromotionLocked {
    let args = events[0].args;
    ThreadUpdateTurnstilePromotionLocked {
        ktraces: events,
        tid: args[0],
        turnstile: args[1],
        turnstile_ts_priority: args[2],
        turnstile_link_priority: args[3],
    }
}

pub(super) fn thread_not_waiting_on_turnstile(events: Vec<RawEvent>) -> ThreadNotWaitingOnTurnstile {
    let args = events[0].args;
    ThreadNotWaitingOnTurnstile {
        ktraces: events,
        tid: args[0],
        turnstile_max_hop: args[1],
        thread_hop: args[2],
    }
}

pub(super) fn recompute_priority_locked(events: Vec<RawEvent>) -> TurnstileRecomputePriorityLocked {
    let args = events[0].args;
    TurnstileRecomputePriorityLocked {
        ktraces: events,
        turnstile: args[0],
        new_priority: args[1],
        old_priority: args[2],
    }
}

pub(super) fn thread_recompute_user_promotion_locked(
    events: Vec<RawEvent>,
) -> ThreadRecomputeUserPromotionLocked {
    let args = events[0].args;
    ThreadRecomputeUserPromotionLocked {
        ktraces: events,
        tid: args[0],
        user_promotion_basepri: args[1],
        thread_user_promotion_basepri: args[2],
    }
}

pub(super) fn prepare(events: Vec<RawEvent>) -> TurnstilePrepare {
    let args = events[0].args;
    TurnstilePrepare {
        ktraces: events,
        turnstile: args[0],
        proprietor: args[1],
        type_: TurnstileType::from_value(args[2]),
    }
}

pub(super) fn complete(events: Vec<RawEvent>) -> TurnstileComplete {
    let args = events[0].args;
    TurnstileComplete {
        ktraces: events,
        turnstile: args[0],
        proprietor: args[1],
        type_: TurnstileType::from_value(args[2]),
    }
}
