//! Decoders turning completed event groups into typed traces.
//!
//! Each submodule covers one kdebug class: the BSD syscall layer, the
//! Mach scheduler and fault events, dyld's loader annotations, kperf
//! samples, turnstile bookkeeping, VFS path lookups, and the trace-tool
//! bookkeeping events carrying thread and process names.

pub mod bsd;
pub mod dyld;
pub mod fsystem;
pub mod mach;
pub mod perf;
pub mod trace;
pub mod turnstile;

use std::fmt;

use crate::kd_buf::RawEvent;
use crate::traces::TracesParser;

macro_rules! define_traces {
    ($($variant:ident($ty:path),)*) => {
        /// One decoded kernel trace.
        ///
        /// Every variant keeps the raw events it was decoded from and
        /// renders through [`fmt::Display`].
        #[derive(Debug)]
        pub enum Trace {
            $($variant($ty),)*
        }

        impl Trace {
            /// The raw events this trace was decoded from.
            pub fn ktraces(&self) -> &[RawEvent] {
                match self {
                    $(Trace::$variant(inner) => &inner.ktraces,)*
                }
            }
        }

        impl fmt::Display for Trace {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Trace::$variant(inner) => inner.fmt(f),)*
                }
            }
        }

        $(
            impl From<$ty> for Trace {
                fn from(inner: $ty) -> Self {
                    Trace::$variant(inner)
                }
            }
        )*
    };
}

define_traces! {
    VfsLookup(fsystem::VfsLookup),
    TraceDataNewthread(trace::TraceDataNewthread),
    TraceDataExec(trace::TraceDataExec),
    TraceDataThreadTerminate(trace::TraceDataThreadTerminate),
    TraceDataThreadTerminatePid(trace::TraceDataThreadTerminatePid),
    TraceStringGlobal(trace::TraceStringGlobal),
    TraceStringNewthread(trace::TraceStringNewthread),
    TraceStringExec(trace::TraceStringExec),
    TraceStringProcExit(trace::TraceStringProcExit),
    TraceStringThreadname(trace::TraceStringThreadname),
    TraceStringThreadnamePrev(trace::TraceStringThreadnamePrev),
    MachSched(mach::MachSched),
    MachStkhandoff(mach::MachStkhandoff),
    MachMkrunnable(mach::MachMkrunnable),
    MachIdle(mach::MachIdle),
    MachBlock(mach::MachBlock),
    MachWait(mach::MachWait),
    MachDispatch(mach::MachDispatch),
    MachVmfault(mach::MachVmfault),
    DataAbort(mach::DataAbort),
    MachInterrupt(mach::MachInterrupt),
    DecrSet(mach::DecrSet),
    ThreadGroupSet(mach::ThreadGroupSet),
    SchedClutchCpuThreadSelect(mach::SchedClutchCpuThreadSelect),
    SchedClutchTgBucketPri(mach::SchedClutchTgBucketPri),
    DyldUuidMapA(dyld::DyldUuidMapA),
    DyldUuidMapB(dyld::DyldUuidMapB),
    DyldUuidSharedCacheA(dyld::DyldUuidSharedCacheA),
    DyldUuidSharedCacheB(dyld::DyldUuidSharedCacheB),
    DyldLaunchExecutable(dyld::DyldLaunchExecutable),
    DyldFuncForAddImage(dyld::DyldFuncForAddImage),
    DyldBootstrapStart(dyld::DyldBootstrapStart),
    Dlopen(dyld::Dlopen),
    DlopenPreflight(dyld::DlopenPreflight),
    Dlclose(dyld::Dlclose),
    Dlsym(dyld::Dlsym),
    Dladdr(dyld::Dladdr),
    PerfEvent(perf::PerfEvent),
    PerfThdData(perf::PerfThdData),
    PerfThdCswitch(perf::PerfThdCswitch),
    PerfStkUdata(perf::PerfStkUdata),
    PerfStkUhdr(perf::PerfStkUhdr),
    WaitqAddThreadPriorityQueue(turnstile::WaitqAddThreadPriorityQueue),
    ThreadRemovedFromTurnstileWaitq(turnstile::ThreadRemovedFromTurnstileWaitq),
    UpdateThreadPromotionLocked(turnstile::UpdateThreadPromotionLocked),
    AddTurnstilePromotion(turnstile::AddTurnstilePromotion),
    RemoveTurnstilePromotion(turnstile::RemoveTurnstilePromotion),
    UpdateTurnstilePromotionLocked(turnstile::UpdateTurnstilePromotionLocked),
    AddedToThreadHeap(turnstile::AddedToThreadHeap),
    RemovedFromThreadHeap(turnstile::RemovedFromThreadHeap),
    ThreadUpdateTurnstilePromotionLocked(turnstile::ThreadUpdateTurnstilePromotionLocked),
    ThreadNotWaitingOnTurnstile(turnstile::ThreadNotWaitingOnTurnstile),
    TurnstileRecomputePriorityLocked(turnstile::TurnstileRecomputePriorityLocked),
    ThreadRecomputeUserPromotionLocked(turnstile::ThreadRecomputeUserPromotionLocked),
    TurnstilePrepare(turnstile::TurnstilePrepare),
    TurnstileComplete(turnstile::TurnstileComplete),
    BscRead(bsd::BscRead),
    BscWrite(bsd::BscWrite),
    BscPread(bsd::BscPread),
    BscPwrite(bsd::BscPwrite),
    BscReadv(bsd::BscReadv),
    BscWritev(bsd::BscWritev),
    BscPreadv(bsd::BscPreadv),
    BscPwritev(bsd::BscPwritev),
    BscOpen(bsd::BscOpen),
    BscOpenat(bsd::BscOpenat),
    BscClose(bsd::BscClose),
    BscDup(bsd::BscDup),
    BscDup2(bsd::BscDup2),
    BscFcntl(bsd::BscFcntl),
    BscPipe(bsd::BscPipe),
    BscLseek(bsd::BscLseek),
    BscTruncate(bsd::BscTruncate),
    BscFtruncate(bsd::BscFtruncate),
    BscFsync(bsd::BscFsync),
    BscFdatasync(bsd::BscFdatasync),
    BscSync(bsd::BscSync),
    BscLink(bsd::BscLink),
    BscUnlink(bsd::BscUnlink),
    BscChdir(bsd::BscChdir),
    BscFchdir(bsd::BscFchdir),
    BscMknod(bsd::BscMknod),
    BscChmod(bsd::BscChmod),
    BscFchmod(bsd::BscFchmod),
    BscChown(bsd::BscChown),
    BscFchown(bsd::BscFchown),
    BscLchown(bsd::BscLchown),
    BscRename(bsd::BscRename),
    BscFlock(bsd::BscFlock),
    BscMkfifo(bsd::BscMkfifo),
    BscMkdir(bsd::BscMkdir),
    BscRmdir(bsd::BscRmdir),
    BscSymlink(bsd::BscSymlink),
    BscReadlink(bsd::BscReadlink),
    BscExecve(bsd::BscExecve),
    BscUmask(bsd::BscUmask),
    BscChroot(bsd::BscChroot),
    BscRevoke(bsd::BscRevoke),
    BscUndelete(bsd::BscUndelete),
    BscChflags(bsd::BscChflags),
    BscFchflags(bsd::BscFchflags),
    BscAccess(bsd::BscAccess),
    BscUtimes(bsd::BscUtimes),
    BscFutimes(bsd::BscFutimes),
    BscStat64(bsd::BscStat64),
    BscFstat64(bsd::BscFstat64),
    BscLstat64(bsd::BscLstat64),
    BscFstatat64(bsd::BscFstatat64),
    BscStatfs(bsd::BscStatfs),
    BscStatfs64(bsd::BscStatfs64),
    BscFstatfs(bsd::BscFstatfs),
    BscFstatfs64(bsd::BscFstatfs64),
    BscGetfsstat64(bsd::BscGetfsstat64),
    BscGetdirentries64(bsd::BscGetdirentries64),
    BscMount(bsd::BscMount),
    BscUnmount(bsd::BscUnmount),
    BscGetattrlist(bsd::BscGetattrlist),
    BscSetattrlist(bsd::BscSetattrlist),
    BscFgetattrlist(bsd::BscFgetattrlist),
    BscFsetattrlist(bsd::BscFsetattrlist),
    BscGetattrlistat(bsd::BscGetattrlistat),
    BscSetattrlistat(bsd::BscSetattrlistat),
    BscExchangedata(bsd::BscExchangedata),
    BscGetxattr(bsd::BscGetxattr),
    BscFgetxattr(bsd::BscFgetxattr),
    BscSetxattr(bsd::BscSetxattr),
    BscFsetxattr(bsd::BscFsetxattr),
    BscRemovexattr(bsd::BscRemovexattr),
    BscFremovexattr(bsd::BscFremovexattr),
    BscListxattr(bsd::BscListxattr),
    BscFlistxattr(bsd::BscFlistxattr),
    BscGetpid(bsd::BscGetpid),
    BscGetppid(bsd::BscGetppid),
    BscGetuid(bsd::BscGetuid),
    BscGeteuid(bsd::BscGeteuid),
    BscGetgid(bsd::BscGetgid),
    BscGetegid(bsd::BscGetegid),
    BscGetpgrp(bsd::BscGetpgrp),
    BscGetdtablesize(bsd::BscGetdtablesize),
    BscGetlogin(bsd::BscGetlogin),
    BscSetuid(bsd::BscSetuid),
    BscSeteuid(bsd::BscSeteuid),
    BscSetgid(bsd::BscSetgid),
    BscSetegid(bsd::BscSetegid),
    BscSetreuid(bsd::BscSetreuid),
    BscSetregid(bsd::BscSetregid),
    BscSetpgid(bsd::BscSetpgid),
    BscSetsid(bsd::BscSetsid),
    BscGetpgid(bsd::BscGetpgid),
    BscGetsid(bsd::BscGetsid),
    BscGetgroups(bsd::BscGetgroups),
    BscSetgroups(bsd::BscSetgroups),
    BscKill(bsd::BscKill),
    BscSigaction(bsd::BscSigaction),
    BscSigprocmask(bsd::BscSigprocmask),
    BscSigsuspend(bsd::BscSigsuspend),
    BscPthreadSigmask(bsd::BscPthreadSigmask),
    BscSigpending(bsd::BscSigpending),
    BscSigaltstack(bsd::BscSigaltstack),
    BscSetitimer(bsd::BscSetitimer),
    BscGetitimer(bsd::BscGetitimer),
    BscPosixSpawn(bsd::BscPosixSpawn),
    BscGetattrlistbulk(bsd::BscGetattrlistbulk),
    BscGuardedOpenNp(bsd::BscGuardedOpenNp),
    BscGuardedOpenDprotectedNp(bsd::BscGuardedOpenDprotectedNp),
    BscGuardedCloseNp(bsd::BscGuardedCloseNp),
    BscGuardedKqueueNp(bsd::BscGuardedKqueueNp),
    BscChangeFdguardNp(bsd::BscChangeFdguardNp),
    BscGuardedWriteNp(bsd::BscGuardedWriteNp),
    BscGuardedPwriteNp(bsd::BscGuardedPwriteNp),
    BscGuardedWritevNp(bsd::BscGuardedWritevNp),
    BscVfork(bsd::BscVfork),
    BscWait4(bsd::BscWait4),
    BscWaitid(bsd::BscWaitid),
    BscGettimeofday(bsd::BscGettimeofday),
    BscGetrusage(bsd::BscGetrusage),
    BscGetrlimit(bsd::BscGetrlimit),
    BscSetrlimit(bsd::BscSetrlimit),
    BscSetpriority(bsd::BscSetpriority),
    BscGetpriority(bsd::BscGetpriority),
    BscIssetugid(bsd::BscIssetugid),
    BscGettid(bsd::BscGettid),
    BscPathconf(bsd::BscPathconf),
    BscFpathconf(bsd::BscFpathconf),
    BscGetentropy(bsd::BscGetentropy),
    BscSocket(bsd::BscSocket),
    BscSocketpair(bsd::BscSocketpair),
    BscConnect(bsd::BscConnect),
    BscBind(bsd::BscBind),
    BscListen(bsd::BscListen),
    BscShutdown(bsd::BscShutdown),
    BscAccept(bsd::BscAccept),
    BscSendto(bsd::BscSendto),
    BscRecvfrom(bsd::BscRecvfrom),
    BscSendmsg(bsd::BscSendmsg),
    BscRecvmsg(bsd::BscRecvmsg),
    BscGetpeername(bsd::BscGetpeername),
    BscGetsockname(bsd::BscGetsockname),
    BscSetsockopt(bsd::BscSetsockopt),
    BscGetsockopt(bsd::BscGetsockopt),
    BscSelect(bsd::BscSelect),
    BscPselect(bsd::BscPselect),
    BscPoll(bsd::BscPoll),
    BscKqueue(bsd::BscKqueue),
    BscKevent(bsd::BscKevent),
    BscKevent64(bsd::BscKevent64),
    BscKeventQos(bsd::BscKeventQos),
    BscKeventId(bsd::BscKeventId),
    BscMmap(bsd::BscMmap),
    BscMunmap(bsd::BscMunmap),
    BscMprotect(bsd::BscMprotect),
    BscMadvise(bsd::BscMadvise),
    BscMincore(bsd::BscMincore),
    BscMsync(bsd::BscMsync),
    BscMlock(bsd::BscMlock),
    BscMunlock(bsd::BscMunlock),
    BscIoctl(bsd::BscIoctl),
    BscSysctl(bsd::BscSysctl),
    BscSysctlbyname(bsd::BscSysctlbyname),
    BscProcInfo(bsd::BscProcInfo),
    BscSendfile(bsd::BscSendfile),
    BscBsdthreadCreate(bsd::BscBsdthreadCreate),
    BscBsdthreadRegister(bsd::BscBsdthreadRegister),
    BscWorkqOpen(bsd::BscWorkqOpen),
    BscWorkqKernreturn(bsd::BscWorkqKernreturn),
    BscThreadSelfid(bsd::BscThreadSelfid),
    BscPsynchMutexwait(bsd::BscPsynchMutexwait),
    BscPsynchMutexdrop(bsd::BscPsynchMutexdrop),
    BscPsynchCvbroad(bsd::BscPsynchCvbroad),
    BscPsynchCvsignal(bsd::BscPsynchCvsignal),
    BscPsynchCvwait(bsd::BscPsynchCvwait),
    BscSemwaitSignal(bsd::BscSemwaitSignal),
    BscUlockWait(bsd::BscUlockWait),
    BscUlockWake(bsd::BscUlockWake),
    BscShmOpen(bsd::BscShmOpen),
    BscShmUnlink(bsd::BscShmUnlink),
    BscSemOpen(bsd::BscSemOpen),
    BscSemUnlink(bsd::BscSemUnlink),
    BscSemClose(bsd::BscSemClose),
    BscSemWait(bsd::BscSemWait),
    BscSemTrywait(bsd::BscSemTrywait),
    BscSemPost(bsd::BscSemPost),
    BscRenameat(bsd::BscRenameat),
    BscRenameatxNp(bsd::BscRenameatxNp),
    BscLinkat(bsd::BscLinkat),
    BscUnlinkat(bsd::BscUnlinkat),
    BscReadlinkat(bsd::BscReadlinkat),
    BscSymlinkat(bsd::BscSymlinkat),
    BscMkdirat(bsd::BscMkdirat),
    BscFaccessat(bsd::BscFaccessat),
    BscFchmodat(bsd::BscFchmodat),
    BscFchownat(bsd::BscFchownat),
    BscClonefileat(bsd::BscClonefileat),
    BscFclonefileat(bsd::BscFclonefileat),
    BscFsgetpath(bsd::BscFsgetpath),
    BscPthreadFchdir(bsd::BscPthreadFchdir),
    BscMacSyscall(bsd::BscMacSyscall),
}

/// Decode one completed event group by its trace-codes name.
///
/// Returns `None` for names this crate carries no decoder for.
pub(crate) fn decode(
    name: &str,
    parser: &mut TracesParser,
    events: Vec<RawEvent>,
) -> Option<Trace> {
    let trace: Trace = match name {
        "VFS_LOOKUP" => fsystem::vfs_lookup(parser, events).into(),
        "TRACE_DATA_NEWTHREAD" => trace::data_newthread(parser, events).into(),
        "TRACE_DATA_EXEC" => trace::data_exec(parser, events).into(),
        "TRACE_DATA_THREAD_TERMINATE" => trace::data_thread_terminate(parser, events).into(),
        "TRACE_DATA_THREAD_TERMINATE_PID" => {
            trace::data_thread_terminate_pid(parser, events).into()
        }
        "TRACE_STRING_GLOBAL" => trace::string_global(parser, events).into(),
        "TRACE_STRING_NEWTHREAD" => trace::string_newthread(parser, events).into(),
        "TRACE_STRING_EXEC" => trace::string_exec(parser, events).into(),
        "TRACE_STRING_PROC_EXIT" => trace::string_proc_exit(events).into(),
        "TRACE_STRING_THREADNAME" => trace::string_threadname(parser, events).into(),
        "TRACE_STRING_THREADNAME_PREV" => trace::string_threadname_prev(parser, events).into(),

        "MACH_SCHED" => mach::sched(events).into(),
        "MACH_STKHANDOFF" => mach::stkhandoff(events).into(),
        "MACH_MKRUNNABLE" => mach::mkrunnable(events).into(),
        "MACH_IDLE" => mach::idle(events).into(),
        "MACH_BLOCK" => mach::block(events).into(),
        "MACH_WAIT" => mach::wait(events).into(),
        "MACH_DISPATCH" => mach::dispatch(events).into(),
        "MACH_vmfault" => mach::vmfault(parser, events).into(),
        "Kernel_Data_Abort_Same_EL_Exc_ARM" => mach::data_abort(events, true).into(),
        "User_Data_Abort_Lower_EL_Exc_ARM" => mach::data_abort(events, false).into(),
        "INTERRUPT" => mach::interrupt(events).into(),
        "DecrSet" => mach::decr_set(events).into(),
        "MACH_THREAD_GROUP_SET" => mach::thread_group_set(events).into(),
        "MACH_SCHED_CLUTCH_CPU_THREAD_SELECT" => {
            mach::sched_clutch_cpu_thread_select(events).into()
        }
        "MACH_SCHED_CLUTCH_TG_BUCKET_PRI" => mach::sched_clutch_tg_bucket_pri(events).into(),
        // A wrapper around one syscall bracket; the payload is the inner
        // bracket itself.
        "User_SVC64_Exc_ARM" => {
            if events.len() <= 2 {
                return None;
            }
            let inner = events[1..events.len() - 1].to_vec();
            return parser.parse_event_list(inner);
        }

        "DYLD_uuid_map_a" => dyld::uuid_map_a(events).into(),
        "DYLD_uuid_map_b" => dyld::uuid_map_b(events).into(),
        "DYLD_uuid_shared_cache_a" => dyld::uuid_shared_cache_a(events).into(),
        "DYLD_uuid_shared_cache_b" => dyld::uuid_shared_cache_b(events).into(),
        "DBG_DYLD_TIMING_LAUNCH_EXECUTABLE" => dyld::launch_executable(parser, events).into(),
        "DBG_DYLD_TIMING_FUNC_FOR_ADD_IMAGE" => dyld::func_for_add_image(events).into(),
        "DBG_DYLD_TIMING_BOOTSTRAP_START" => dyld::bootstrap_start(events).into(),
        "DBG_DYLD_TIMING_DLOPEN" => dyld::dlopen(parser, events).into(),
        "DBG_DYLD_TIMING_DLOPEN_PREFLIGHT" => dyld::dlopen_preflight(parser, events).into(),
        "DBG_DYLD_TIMING_DLCLOSE" => dyld::dlclose(events).into(),
        "DBG_DYLD_TIMING_DLSYM" => dyld::dlsym(parser, events).into(),
        "DBG_DYLD_TIMING_DLADDR" => dyld::dladdr(events).into(),

        "PERF_Event" => perf::event(parser, events).into(),
        "PERF_THD_Data" => perf::thd_data(parser, events).into(),
        "PERF_THD_CSwitch" => perf::thd_cswitch(events).into(),
        "PERF_STK_UData" => perf::stk_udata(events).into(),
        "PERF_STK_UHdr" => perf::stk_uhdr(events).into(),

        "TURNSTILE_turnstile_waitq_add_thread_priority_queue" => {
            turnstile::waitq_add_thread_priority_queue(events).into()
        }
        "TURNSTILE_thread_removed_from_turnstile_waitq" => {
            turnstile::thread_removed_from_turnstile_waitq(events).into()
        }
        "TURNSTILE_turnstile_update_thread_promotion_locked" => {
            turnstile::update_thread_promotion_locked(events).into()
        }
        "TURNSTILE_turnstile_add_turnstile_promotion" => {
            turnstile::add_turnstile_promotion(events).into()
        }
        "TURNSTILE_turnstile_remove_turnstile_promotion" => {
            turnstile::remove_turnstile_promotion(events).into()
        }
        "TURNSTILE_turnstile_update_turnstile_promotion_locked" => {
            turnstile::update_turnstile_promotion_locked(events).into()
        }
        "TURNSTILE_turnstile_added_to_thread_heap" => {
            turnstile::added_to_thread_heap(events).into()
        }
        "TURNSTILE_turnstile_removed_from_thread_heap" => {
            turnstile::removed_from_thread_heap(events).into()
        }
        "TURNSTILE_thread_update_turnstile_promotion_locked" => {
            turnstile::thread_update_turnstile_promotion_locked(events).into()
        }
        "TURNSTILE_thread_not_waiting_on_turnstile" => {
            turnstile::thread_not_waiting_on_turnstile(events).into()
        }
        "TURNSTILE_turnstile_recompute_priority_locked" => {
            turnstile::recompute_priority_locked(events).into()
        }
        "TURNSTILE_thread_recompute_user_promotion_locked" => {
            turnstile::thread_recompute_user_promotion_locked(events).into()
        }
        "TURNSTILE_turnstile_prepare" => turnstile::prepare(events).into(),
        "TURNSTILE_turnstile_complete" => turnstile::complete(events).into(),

        "BSC_read" => bsd::read(events, false).into(),
        "BSC_read_nocancel" => bsd::read(events, true).into(),
        "BSC_write" => bsd::write(events, false).into(),
        "BSC_write_nocancel" => bsd::write(events, true).into(),
        "BSC_pread" => bsd::pread(events, false).into(),
        "BSC_pread_nocancel" => bsd::pread(events, true).into(),
        "BSC_pwrite" => bsd::pwrite(events, false).into(),
        "BSC_pwrite_nocancel" => bsd::pwrite(events, true).into(),
        "BSC_readv" => bsd::readv(events, false).into(),
        "BSC_readv_nocancel" => bsd::readv(events, true).into(),
        "BSC_writev" => bsd::writev(events, false).into(),
        "BSC_writev_nocancel" => bsd::writev(events, true).into(),
        "BSC_sys_preadv" => bsd::preadv(events, false).into(),
        "BSC_sys_preadv_nocancel" => bsd::preadv(events, true).into(),
        "BSC_sys_pwritev" => bsd::pwritev(events, false).into(),
        "BSC_sys_pwritev_nocancel" => bsd::pwritev(events, true).into(),
        "BSC_open" => bsd::open(parser, events, false).into(),
        "BSC_open_nocancel" => bsd::open(parser, events, true).into(),
        "BSC_openat" => bsd::openat(parser, events, false).into(),
        "BSC_openat_nocancel" => bsd::openat(parser, events, true).into(),
        "BSC_sys_close" => bsd::close(events, false).into(),
        "BSC_sys_close_nocancel" => bsd::close(events, true).into(),
        "BSC_sys_dup" => bsd::dup(events).into(),
        "BSC_sys_dup2" => bsd::dup2(events).into(),
        "BSC_sys_fcntl" => bsd::fcntl(events, false).into(),
        "BSC_sys_fcntl_nocancel" => bsd::fcntl(events, true).into(),
        "BSC_pipe" => bsd::pipe(events).into(),
        "BSC_lseek" => bsd::lseek(events).into(),
        "BSC_truncate" => bsd::truncate(parser, events).into(),
        "BSC_ftruncate" => bsd::ftruncate(events).into(),
        "BSC_fsync" => bsd::fsync(events, false).into(),
        "BSC_fsync_nocancel" => bsd::fsync(events, true).into(),
        "BSC_fdatasync" => bsd::fdatasync(events).into(),
        "BSC_sync" => bsd::sync(events).into(),
        "BSC_link" => bsd::link(parser, events).into(),
        "BSC_unlink" => bsd::unlink(parser, events).into(),
        "BSC_chdir" => bsd::chdir(parser, events).into(),
        "BSC_fchdir" => bsd::fchdir(events).into(),
        "BSC_mknod" => bsd::mknod(parser, events).into(),
        "BSC_chmod" => bsd::chmod(parser, events).into(),
        "BSC_fchmod" => bsd::fchmod(events).into(),
        "BSC_chown" => bsd::chown(parser, events).into(),
        "BSC_fchown" => bsd::fchown(events).into(),
        "BSC_lchown" => bsd::lchown(parser, events).into(),
        "BSC_rename" => bsd::rename(parser, events).into(),
        "BSC_sys_flock" => bsd::flock(events).into(),
        "BSC_mkfifo" => bsd::mkfifo(parser, events).into(),
        "BSC_mkdir" => bsd::mkdir(parser, events).into(),
        "BSC_rmdir" => bsd::rmdir(parser, events).into(),
        "BSC_symlink" => bsd::symlink(parser, events).into(),
        "BSC_readlink" => bsd::readlink(parser, events).into(),
        "BSC_execve" => bsd::execve(events).into(),
        "BSC_umask" => bsd::umask(events).into(),
        "BSC_chroot" => bsd::chroot(parser, events).into(),
        "BSC_revoke" => bsd::revoke(parser, events).into(),
        "BSC_undelete" => bsd::undelete(parser, events).into(),
        "BSC_chflags" => bsd::chflags(parser, events).into(),
        "BSC_fchflags" => bsd::fchflags(events).into(),
        "BSC_access" => bsd::access(parser, events).into(),
        "BSC_utimes" => bsd::utimes(parser, events).into(),
        "BSC_futimes" => bsd::futimes(events).into(),
        "BSC_stat64" => bsd::stat64(parser, events).into(),
        "BSC_sys_fstat64" => bsd::fstat64(events).into(),
        "BSC_lstat64" => bsd::lstat64(parser, events).into(),
        "BSC_fstatat64" => bsd::fstatat64(parser, events).into(),
        "BSC_statfs" => bsd::statfs(parser, events).into(),
        "BSC_statfs64" => bsd::statfs64(parser, events).into(),
        "BSC_fstatfs" => bsd::fstatfs(events).into(),
        "BSC_fstatfs64" => bsd::fstatfs64(events).into(),
        "BSC_getfsstat64" => bsd::getfsstat64(events).into(),
        "BSC_getdirentries64" => bsd::getdirentries64(events).into(),
        "BSC_mount" => bsd::mount(parser, events).into(),
        "BSC_unmount" => bsd::unmount(parser, events).into(),
        "BSC_getattrlist" => bsd::getattrlist(parser, events).into(),
        "BSC_setattrlist" => bsd::setattrlist(parser, events).into(),
        "BSC_fgetattrlist" => bsd::fgetattrlist(events).into(),
        "BSC_fsetattrlist" => bsd::fsetattrlist(events).into(),
        "BSC_getattrlistat" => bsd::getattrlistat(parser, events).into(),
        "BSC_setattrlistat" => bsd::setattrlistat(parser, events).into(),
        "BSC_exchangedata" => bsd::exchangedata(parser, events).into(),
        "BSC_getxattr" => bsd::getxattr(parser, events).into(),
        "BSC_fgetxattr" => bsd::fgetxattr(events).into(),
        "BSC_setxattr" => bsd::setxattr(parser, events).into(),
        "BSC_fsetxattr" => bsd::fsetxattr(events).into(),
        "BSC_removexattr" => bsd::removexattr(parser, events).into(),
        "BSC_fremovexattr" => bsd::fremovexattr(events).into(),
        "BSC_listxattr" => bsd::listxattr(parser, events).into(),
        "BSC_flistxattr" => bsd::flistxattr(events).into(),
        "BSC_getpid" => bsd::getpid(events).into(),
        "BSC_getppid" => bsd::getppid(events).into(),
        "BSC_getuid" => bsd::getuid(events).into(),
        "BSC_geteuid" => bsd::geteuid(events).into(),
        "BSC_getgid" => bsd::getgid(events).into(),
        "BSC_getegid" => bsd::getegid(events).into(),
        "BSC_getpgrp" => bsd::getpgrp(events).into(),
        "BSC_sys_getdtablesize" => bsd::getdtablesize(events).into(),
        "BSC_getlogin" => bsd::getlogin(events).into(),
        "BSC_setuid" => bsd::setuid(events).into(),
        "BSC_seteuid" => bsd::seteuid(events).into(),
        "BSC_setgid" => bsd::setgid(events).into(),
        "BSC_setegid" => bsd::setegid(events).into(),
        "BSC_setreuid" => bsd::setreuid(events).into(),
        "BSC_setregid" => bsd::setregid(events).into(),
        "BSC_setpgid" => bsd::setpgid(events).into(),
        "BSC_setsid" => bsd::setsid(events).into(),
        "BSC_getpgid" => bsd::getpgid(events).into(),
        "BSC_getsid" => bsd::getsid(events).into(),
        "BSC_getgroups" => bsd::getgroups(events).into(),
        "BSC_setgroups" => bsd::setgroups(events).into(),
        "BSC_kill" => bsd::kill(events).into(),
        "BSC_sigaction" => bsd::sigaction(events).into(),
        "BSC_sigprocmask" => bsd::sigprocmask(events).into(),
        "BSC_sigsuspend" => bsd::sigsuspend(events, false).into(),
        "BSC_sigsuspend_nocancel" => bsd::sigsuspend(events, true).into(),
        "BSC_pthread_sigmask" => bsd::pthread_sigmask(events).into(),
        "BSC_sigpending" => bsd::sigpending(events).into(),
        "BSC_sigaltstack" => bsd::sigaltstack(events).into(),
        "BSC_setitimer" => bsd::setitimer(events).into(),
        "BSC_getitimer" => bsd::getitimer(events).into(),
        "BSC_posix_spawn" => bsd::posix_spawn(parser, events).into(),
        "BSC_getattrlistbulk" => bsd::getattrlistbulk(events).into(),
        "BSC_guarded_open_np" => bsd::guarded_open_np(parser, events).into(),
        "BSC_guarded_open_dprotected_np" => {
            bsd::guarded_open_dprotected_np(parser, events).into()
        }
        "BSC_guarded_close_np" => bsd::guarded_close_np(events).into(),
        "BSC_guarded_kqueue_np" => bsd::guarded_kqueue_np(events).into(),
        "BSC_change_fdguard_np" => bsd::change_fdguard_np(events).into(),
        "BSC_guarded_write_np" => bsd::guarded_write_np(events).into(),
        "BSC_guarded_pwrite_np" => bsd::guarded_pwrite_np(events).into(),
        "BSC_guarded_writev_np" => bsd::guarded_writev_np(events).into(),
        "BSC_vfork" => bsd::vfork(events).into(),
        "BSC_wait4" => bsd::wait4(events, false).into(),
        "BSC_wait4_nocancel" => bsd::wait4(events, true).into(),
        "BSC_waitid" => bsd::waitid(events, false).into(),
        "BSC_waitid_nocancel" => bsd::waitid(events, true).into(),
        "BSC_gettimeofday" => bsd::gettimeofday(events).into(),
        "BSC_getrusage" => bsd::getrusage(events).into(),
        "BSC_getrlimit" => bsd::getrlimit(events).into(),
        "BSC_setrlimit" => bsd::setrlimit(events).into(),
        "BSC_setpriority" => bsd::setpriority(events).into(),
        "BSC_getpriority" => bsd::getpriority(events).into(),
        "BSC_issetugid" => bsd::issetugid(events).into(),
        "BSC_gettid" => bsd::gettid(events).into(),
        "BSC_pathconf" => bsd::pathconf(parser, events).into(),
        "BSC_sys_fpathconf" => bsd::fpathconf(events).into(),
        "BSC_getentropy" => bsd::getentropy(events).into(),
        "BSC_socket" => bsd::socket(events).into(),
        "BSC_socketpair" => bsd::socketpair(events).into(),
        "BSC_connect" => bsd::connect(events, false).into(),
        "BSC_connect_nocancel" => bsd::connect(events, true).into(),
        "BSC_bind" => bsd::bind(events).into(),
        "BSC_listen" => bsd::listen(events).into(),
        "BSC_shutdown" => bsd::shutdown(events).into(),
        "BSC_accept" => bsd::accept(events, false).into(),
        "BSC_accept_nocancel" => bsd::accept(events, true).into(),
        "BSC_sendto" => bsd::sendto(events, false).into(),
        "BSC_sendto_nocancel" => bsd::sendto(events, true).into(),
        "BSC_recvfrom" => bsd::recvfrom(events, false).into(),
        "BSC_recvfrom_nocancel" => bsd::recvfrom(events, true).into(),
        "BSC_sendmsg" => bsd::sendmsg(events, false).into(),
        "BSC_sendmsg_nocancel" => bsd::sendmsg(events, true).into(),
        "BSC_recvmsg" => bsd::recvmsg(events, false).into(),
        "BSC_recvmsg_nocancel" => bsd::recvmsg(events, true).into(),
        "BSC_getpeername" => bsd::getpeername(events).into(),
        "BSC_getsockname" => bsd::getsockname(events).into(),
        "BSC_setsockopt" => bsd::setsockopt(events).into(),
        "BSC_getsockopt" => bsd::getsockopt(events).into(),
        "BSC_select" => bsd::select(events, false).into(),
        "BSC_select_nocancel" => bsd::select(events, true).into(),
        "BSC_pselect" => bsd::pselect(events, false).into(),
        "BSC_pselect_nocancel" => bsd::pselect(events, true).into(),
        "BSC_poll" => bsd::poll(events, false).into(),
        "BSC_poll_nocancel" => bsd::poll(events, true).into(),
        "BSC_kqueue" => bsd::kqueue(events).into(),
        "BSC_kevent" => bsd::kevent(events).into(),
        "BSC_kevent64" => bsd::kevent64(events).into(),
        "BSC_kevent_qos" => bsd::kevent_qos(events).into(),
        "BSC_kevent_id" => bsd::kevent_id(events).into(),
        "BSC_mmap" => bsd::mmap(events).into(),
        "BSC_munmap" => bsd::munmap(events).into(),
        "BSC_mprotect" => bsd::mprotect(events).into(),
        "BSC_madvise" => bsd::madvise(events).into(),
        "BSC_mincore" => bsd::mincore(events).into(),
        "BSC_msync" => bsd::msync(events, false).into(),
        "BSC_msync_nocancel" => bsd::msync(events, true).into(),
        "BSC_mlock" => bsd::mlock(events).into(),
        "BSC_munlock" => bsd::munlock(events).into(),
        "BSC_ioctl" => bsd::ioctl(events).into(),
        "BSC_sysctl" => bsd::sysctl(events).into(),
        "BSC_sys_sysctlbyname" => bsd::sysctlbyname(events).into(),
        "BSC_proc_info" => bsd::proc_info(events).into(),
        "BSC_sendfile" => bsd::sendfile(events).into(),
        "BSC_bsdthread_create" => bsd::bsdthread_create(events).into(),
        "BSC_bsdthread_register" => bsd::bsdthread_register(events).into(),
        "BSC_workq_open" => bsd::workq_open(events).into(),
        "BSC_workq_kernreturn" => bsd::workq_kernreturn(events).into(),
        "BSC_thread_selfid" => bsd::thread_selfid(events).into(),
        "BSC_psynch_mutexwait" => bsd::psynch_mutexwait(events).into(),
        "BSC_psynch_mutexdrop" => bsd::psynch_mutexdrop(events).into(),
        "BSC_psynch_cvbroad" => bsd::psynch_cvbroad(events).into(),
        "BSC_psynch_cvsignal" => bsd::psynch_cvsignal(events).into(),
        "BSC_psynch_cvwait" => bsd::psynch_cvwait(events).into(),
        "BSC_semwait_signal" => bsd::semwait_signal(events, false).into(),
        "BSC_semwait_signal_nocancel" => bsd::semwait_signal(events, true).into(),
        "BSC_ulock_wait" => bsd::ulock_wait(events).into(),
        "BSC_ulock_wake" => bsd::ulock_wake(events).into(),
        "BSC_shm_open" => bsd::shm_open(events).into(),
        "BSC_shm_unlink" => bsd::shm_unlink(events).into(),
        "BSC_sem_open" => bsd::sem_open(events).into(),
        "BSC_sem_unlink" => bsd::sem_unlink(events).into(),
        "BSC_sem_close" => bsd::sem_close(events).into(),
        "BSC_sem_wait" => bsd::sem_wait(events, false).into(),
        "BSC_sem_wait_nocancel" => bsd::sem_wait(events, true).into(),
        "BSC_sem_trywait" => bsd::sem_trywait(events).into(),
        "BSC_sem_post" => bsd::sem_post(events).into(),
        "BSC_renameat" => bsd::renameat(parser, events).into(),
        "BSC_renameatx_np" => bsd::renameatx_np(parser, events).into(),
        "BSC_linkat" => bsd::linkat(parser, events).into(),
        "BSC_unlinkat" => bsd::unlinkat(parser, events).into(),
        "BSC_readlinkat" => bsd::readlinkat(parser, events).into(),
        "BSC_symlinkat" => bsd::symlinkat(parser, events).into(),
        "BSC_mkdirat" => bsd::mkdirat(parser, events).into(),
        "BSC_faccessat" => bsd::faccessat(parser, events).into(),
        "BSC_fchmodat" => bsd::fchmodat(parser, events).into(),
        "BSC_fchownat" => bsd::fchownat(parser, events).into(),
        "BSC_clonefileat" => bsd::clonefileat(parser, events).into(),
        "BSC_fclonefileat" => bsd::fclonefileat(parser, events).into(),
        "BSC_fsgetpath" => bsd::fsgetpath(parser, events).into(),
        "BSC_pthread_fchdir" => bsd::pthread_fchdir(events).into(),
        "BSC_mac_syscall" => bsd::mac_syscall(events).into(),
        _ => return None,
    };
    Some(trace)
}
