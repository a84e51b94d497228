//! Decoders for the BSD syscall layer (`BSC_*` events).
//!
//! Every decoded call renders the way the syscall would read in source,
//! followed by an errno or a named return value taken from the end event.

use std::fmt;

use crate::kd_buf::RawEvent;
use crate::traces::TracesParser;

const SOL_SOCKET: u64 = 0xffff;
const S_IFMT: u64 = 0o170000;
const O_RDWR: u64 = 0x2;
const O_WRONLY: u64 = 0x1;
const O_CREAT: u64 = 0x200;

const ERRNO_NAMES: &[(u64, &str)] = &[
    (1, "EPERM"),
    (2, "ENOENT"),
    (3, "ESRCH"),
    (4, "EINTR"),
    (5, "EIO"),
    (6, "ENXIO"),
    (7, "E2BIG"),
    (8, "ENOEXEC"),
    (9, "EBADF"),
    (10, "ECHILD"),
    (11, "EDEADLK"),
    (12, "ENOMEM"),
    (13, "EACCES"),
    (14, "EFAULT"),
    (15, "ENOTBLK"),
    (16, "EBUSY"),
    (17, "EEXIST"),
    (18, "EXDEV"),
    (19, "ENODEV"),
    (20, "ENOTDIR"),
    (21, "EISDIR"),
    (22, "EINVAL"),
    (23, "ENFILE"),
    (24, "EMFILE"),
    (25, "ENOTTY"),
    (26, "ETXTBSY"),
    (27, "EFBIG"),
    (28, "ENOSPC"),
    (29, "ESPIPE"),
    (30, "EROFS"),
    (31, "EMLINK"),
    (32, "EPIPE"),
    (33, "EDOM"),
    (34, "ERANGE"),
    (35, "EAGAIN"),
    (36, "EINPROGRESS"),
    (37, "EALREADY"),
    (38, "ENOTSOCK"),
    (39, "EDESTADDRREQ"),
    (40, "EMSGSIZE"),
    (41, "EPROTOTYPE"),
    (42, "ENOPROTOOPT"),
    (43, "EPROTONOSUPPORT"),
    (44, "ESOCKTNOSUPPORT"),
    (45, "ENOTSUP"),
    (46, "EPFNOSUPPORT"),
    (47, "EAFNOSUPPORT"),
    (48, "EADDRINUSE"),
    (49, "EADDRNOTAVAIL"),
    (50, "ENETDOWN"),
    (51, "ENETUNREACH"),
    (52, "ENETRESET"),
    (53, "ECONNABORTED"),
    (54, "ECONNRESET"),
    (55, "ENOBUFS"),
    (56, "EISCONN"),
    (57, "ENOTCONN"),
    (58, "ESHUTDOWN"),
    (59, "ETOOMANYREFS"),
    (60, "ETIMEDOUT"),
    (61, "ECONNREFUSED"),
    (62, "ELOOP"),
    (63, "ENAMETOOLONG"),
    (64, "EHOSTDOWN"),
    (65, "EHOSTUNREACH"),
    (66, "ENOTEMPTY"),
    (67, "EPROCLIM"),
    (68, "EUSERS"),
    (69, "EDQUOT"),
    (70, "ESTALE"),
    (71, "EREMOTE"),
    (72, "EBADRPC"),
    (73, "ERPCMISMATCH"),
    (74, "EPROGUNAVAIL"),
    (75, "EPROGMISMATCH"),
    (76, "EPROCUNAVAIL"),
    (77, "ENOLCK"),
    (78, "ENOSYS"),
    (79, "EFTYPE"),
    (80, "EAUTH"),
    (81, "ENEEDAUTH"),
    (82, "EPWROFF"),
    (83, "EDEVERR"),
    (84, "EOVERFLOW"),
    (85, "EBADEXEC"),
    (86, "EBADARCH"),
    (87, "ESHLIBVERS"),
    (88, "EBADMACHO"),
    (89, "ECANCELED"),
    (90, "EIDRM"),
    (91, "ENOMSG"),
    (92, "EILSEQ"),
    (93, "ENOATTR"),
    (94, "EBADMSG"),
    (95, "EMULTIHOP"),
    (96, "ENODATA"),
    (97, "ENOLINK"),
    (98, "ENOSR"),
    (99, "ENOSTR"),
    (100, "EPROTO"),
    (101, "ETIME"),
    (102, "EOPNOTSUPP"),
    (103, "ENOPOLICY"),
    (104, "ENOTRECOVERABLE"),
    (105, "EOWNERDEAD"),
    (106, "EQFULL"),
];

fn errno_name(code: u64) -> Option<&'static str> {
    ERRNO_NAMES
        .iter()
        .find(|&&(value, _)| value == code)
        .map(|&(_, name)| name)
}

/// How a successful return value is rendered.
#[derive(Debug, Clone, Copy)]
enum ResultFmt {
    Dec,
    Hex,
    Signed,
    Bool,
}

fn serialize_result(end: &RawEvent, success_name: &str) -> String {
    serialize_result_fmt(end, success_name, ResultFmt::Dec)
}

fn serialize_result_fmt(end: &RawEvent, success_name: &str, fmt: ResultFmt) -> String {
    let error_code = end.args[0];
    let res = end.args[1];
    if error_code != 0 {
        match errno_name(error_code) {
            Some(name) => format!("errno: {}({})", name, error_code),
            None => format!("errno: {}", error_code),
        }
    } else if !success_name.is_empty() {
        let value = match fmt {
            ResultFmt::Dec => res.to_string(),
            ResultFmt::Hex => format!("{:#x}", res),
            ResultFmt::Signed => (res as i64).to_string(),
            ResultFmt::Bool => if res != 0 { "True" } else { "False" }.to_string(),
        };
        format!("{}: {}", success_name, value)
    } else {
        String::new()
    }
}

fn suffix(no_cancel: bool) -> &'static str {
    if no_cancel {
        "_nocancel"
    } else {
        ""
    }
}

fn finish(f: &mut fmt::Formatter<'_>, result: &str) -> fmt::Result {
    if result.is_empty() {
        Ok(())
    } else {
        write!(f, ", {}", result)
    }
}

/// `open(2)` flag word. The access mode renders first, with `O_RDONLY`
/// standing in when neither write bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenFlags(pub u64);

const OPEN_FLAG_NAMES: &[(u64, &str)] = &[
    (0x200, "O_CREAT"),
    (0x8, "O_APPEND"),
    (0x400, "O_TRUNC"),
    (0x800, "O_EXCL"),
    (0x4, "O_NONBLOCK"),
    (0x10, "O_SHLOCK"),
    (0x20, "O_EXLOCK"),
    (0x100, "O_NOFOLLOW"),
    (0x200000, "O_SYMLINK"),
    (0x8000, "O_EVTONLY"),
    (0x1000000, "O_CLOEXEC"),
];

impl OpenFlags {
    fn has_creat(self) -> bool {
        self.0 & O_CREAT != 0
    }
}

impl fmt::Display for OpenFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 & O_RDWR != 0 {
            f.write_str("O_RDWR")?;
        } else if self.0 & O_WRONLY != 0 {
            f.write_str("O_WRONLY")?;
        } else {
            f.write_str("O_RDONLY")?;
        }
        for &(bit, name) in OPEN_FLAG_NAMES {
            if self.0 & bit != 0 {
                write!(f, " | {}", name)?;
            }
        }
        Ok(())
    }
}

/// `mode_t` style bits. Permission bits are tested individually, the file
/// type field is matched exactly against `S_IFMT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMode(pub u64);

const MODE_PERMISSION_NAMES: &[(u64, &str)] = &[
    (0o1, "S_IXOTH"),
    (0o2, "S_IWOTH"),
    (0o4, "S_IROTH"),
    (0o10, "S_IXGRP"),
    (0o20, "S_IWGRP"),
    (0o40, "S_IRGRP"),
    (0o100, "S_IXUSR"),
    (0o200, "S_IWUSR"),
    (0o400, "S_IRUSR"),
    (0o1000, "S_ISTXT"),
    (0o2000, "S_ISGID"),
    (0o4000, "S_ISUID"),
];

const MODE_TYPE_NAMES: &[(u64, &str)] = &[
    (0o10000, "S_IFIFO"),
    (0o20000, "S_IFCHR"),
    (0o40000, "S_IFDIR"),
    (0o60000, "S_IFBLK"),
    (0o100000, "S_IFREG"),
    (0o120000, "S_IFLNK"),
    (0o140000, "S_IFSOCK"),
];

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        for &(bit, name) in MODE_PERMISSION_NAMES {
            if self.0 & bit != 0 {
                names.push(name);
            }
        }
        for &(value, name) in MODE_TYPE_NAMES {
            if self.0 & S_IFMT == value {
                names.push(name);
            }
        }
        f.write_str(&names.join(" | "))
    }
}

/// `access(2)` mode word, defaulting to `F_OK` when no bits are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessMode(pub u64);

const ACCESS_FLAG_NAMES: &[(u64, &str)] = &[(0x1, "X_OK"), (0x2, "W_OK"), (0x4, "R_OK")];

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        for &(bit, name) in ACCESS_FLAG_NAMES {
            if self.0 & bit != 0 {
                names.push(name);
            }
        }
        if names.is_empty() {
            names.push("F_OK");
        }
        f.write_str(&names.join(" | "))
    }
}

/// `flock(2)` operation word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlockOps(pub u64);

const FLOCK_OP_NAMES: &[(u64, &str)] = &[
    (0x1, "LOCK_SH"),
    (0x2, "LOCK_EX"),
    (0x4, "LOCK_NB"),
    (0x8, "LOCK_UN"),
];

impl fmt::Display for FlockOps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        for &(bit, name) in FLOCK_OP_NAMES {
            if self.0 & bit != 0 {
                names.push(name);
            }
        }
        f.write_str(&names.join(" | "))
    }
}

/// `chflags(2)` flag word, covering the user and super-user settable bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeableFlags(pub u64);

const CHANGEABLE_FLAG_NAMES: &[(u64, &str)] = &[
    (0x1, "UF_NODUMP"),
    (0x2, "UF_IMMUTABLE"),
    (0x4, "UF_APPEND"),
    (0x8, "UF_OPAQUE"),
    (0x8000, "UF_HIDDEN"),
    (0x10000, "SF_ARCHIVED"),
    (0x20000, "SF_IMMUTABLE"),
    (0x40000, "SF_APPEND"),
];

impl fmt::Display for ChangeableFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        for &(bit, name) in CHANGEABLE_FLAG_NAMES {
            if self.0 & bit != 0 {
                names.push(name);
            }
        }
        f.write_str(&names.join(" | "))
    }
}

/// `recvfrom(2)` flag word, rendered as `0` when empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MsgFlags(pub u64);

const MSG_FLAG_NAMES: &[(u64, &str)] = &[
    (0x1, "MSG_OOB"),
    (0x2, "MSG_PEEK"),
    (0x4, "MSG_DONTROUTE"),
    (0x8, "MSG_EOR"),
    (0x10, "MSG_TRUNC"),
    (0x20, "MSG_CTRUNC"),
    (0x40, "MSG_WAITALL"),
    (0x80, "MSG_DONTWAIT"),
    (0x100, "MSG_EOF"),
    (0x200, "MSG_WAITSTREAM"),
    (0x400, "MSG_FLUSH"),
    (0x800, "MSG_HOLD"),
    (0x1000, "MSG_SEND"),
    (0x2000, "MSG_HAVEMORE"),
    (0x4000, "MSG_RCVMORE"),
    (0x8000, "MSG_COMPAT"),
    (0x10000, "MSG_NEEDSA"),
    (0x20000, "MSG_NBIO"),
    (0x40000, "MSG_SKIPCFIL"),
    (0x80000000, "MSG_USEUPCALL"),
];

impl fmt::Display for MsgFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        for &(bit, name) in MSG_FLAG_NAMES {
            if self.0 & bit != 0 {
                names.push(name);
            }
        }
        if names.is_empty() {
            f.write_str("0")
        } else {
            f.write_str(&names.join(" | "))
        }
    }
}

/// `fcntl(2)` command, falling back to the raw value for commands outside
/// the known table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FcntlCmd(pub u64);

const FCNTL_CMD_NAMES: &[(u64, &str)] = &[
    (0, "F_DUPFD"),
    (1, "F_GETFD"),
    (2, "F_SETFD"),
    (3, "F_GETFL"),
    (4, "F_SETFL"),
    (5, "F_GETOWN"),
    (6, "F_SETOWN"),
    (7, "F_GETLK"),
    (8, "F_SETLK"),
    (9, "F_SETLKW"),
    (10, "F_SETLKWTIMEOUT"),
    (40, "F_FLUSH_DATA"),
    (41, "F_CHKCLEAN"),
    (42, "F_PREALLOCATE"),
    (43, "F_SETSIZE"),
    (44, "F_RDADVISE"),
    (45, "F_RDAHEAD"),
    (48, "F_NOCACHE"),
    (49, "F_LOG2PHYS"),
    (50, "F_GETPATH"),
    (51, "F_FULLFSYNC"),
    (52, "F_PATHPKG_CHECK"),
    (53, "F_FREEZE_FS"),
    (54, "F_THAW_FS"),
    (55, "F_GLOBAL_NOCACHE"),
    (56, "F_OPENFROM"),
    (57, "F_UNLINKFROM"),
    (58, "F_CHECK_OPENEVT"),
    (59, "F_ADDSIGS"),
    (60, "F_MARKDEPENDENCY"),
    (61, "F_ADDFILESIGS"),
    (62, "F_NODIRECT"),
    (63, "F_GETPROTECTIONCLASS"),
    (64, "F_SETPROTECTIONCLASS"),
    (65, "F_LOG2PHYS_EXT"),
    (66, "F_GETLKPID"),
    (67, "F_DUPFD_CLOEXEC"),
    (68, "F_SETSTATICCONTENT"),
    (69, "F_MOVEDATAEXTENTS"),
    (70, "F_SETBACKINGSTORE"),
    (71, "F_GETPATH_MTMINFO"),
    (72, "F_GETCODEDIR"),
    (73, "F_SETNOSIGPIPE"),
    (74, "F_GETNOSIGPIPE"),
    (75, "F_TRANSCODEKEY"),
    (76, "F_SINGLE_WRITER"),
    (77, "F_GETPROTECTIONLEVEL"),
    (78, "F_FINDSIGS"),
    (79, "F_GETDEFAULTPROTLEVEL"),
    (80, "F_MAKECOMPRESSED"),
    (81, "F_SET_GREEDY_MODE"),
    (82, "F_SETIOTYPE"),
    (83, "F_ADDFILESIGS_FOR_DYLD_SIM"),
    (84, "F_RECYCLE"),
    (85, "F_BARRIERFSYNC"),
    (90, "F_OFD_SETLK"),
    (91, "F_OFD_SETLKW"),
    (92, "F_OFD_GETLK"),
    (93, "F_OFD_SETLKWTIMEOUT"),
    (94, "F_OFD_GETLKPID"),
    (95, "F_SETCONFINED"),
    (96, "F_GETCONFINED"),
    (97, "F_ADDFILESIGS_RETURN"),
    (98, "F_CHECK_LV"),
    (99, "F_PUNCHHOLE"),
    (100, "F_TRIM_ACTIVE_FILE"),
    (101, "F_SPECULATIVE_READ"),
    (102, "F_GETPATH_NOFIRMLINK"),
    (103, "F_ADDFILESIGS_INFO"),
    (104, "F_ADDFILESUPPL"),
    (105, "F_GETSIGSINFO"),
];

impl fmt::Display for FcntlCmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match FCNTL_CMD_NAMES.iter().find(|&&(value, _)| value == self.0) {
            Some(&(_, name)) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// POSIX signal number rendered by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal(pub u64);

const SIGNAL_NAMES: &[&str] = &[
    "SIGHUP", "SIGINT", "SIGQUIT", "SIGILL", "SIGTRAP", "SIGABRT", "SIGEMT", "SIGFPE", "SIGKILL",
    "SIGBUS", "SIGSEGV", "SIGSYS", "SIGPIPE", "SIGALRM", "SIGTERM", "SIGURG", "SIGSTOP",
    "SIGTSTP", "SIGCONT", "SIGCHLD", "SIGTTIN", "SIGTTOU", "SIGIO", "SIGXCPU", "SIGXFSZ",
    "SIGVTALRM", "SIGPROF", "SIGWINCH", "SIGINFO", "SIGUSR1", "SIGUSR2",
];

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match SIGNAL_NAMES.get(self.0.wrapping_sub(1) as usize) {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// `sigprocmask(2)` how argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SigprocmaskHow(pub u64);

impl fmt::Display for SigprocmaskHow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("SIG_BLOCK"),
            2 => f.write_str("SIG_UNBLOCK"),
            3 => f.write_str("SIG_SETMASK"),
            other => write!(f, "{}", other),
        }
    }
}

/// `getpriority(2)` / `setpriority(2)` which argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityWhich(pub u64);

impl fmt::Display for PriorityWhich {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("PRIO_PROCESS"),
            1 => f.write_str("PRIO_PGRP"),
            2 => f.write_str("PRIO_USER"),
            3 => f.write_str("PRIO_DARWIN_THREAD"),
            4 => f.write_str("PRIO_DARWIN_PROCESS"),
            5 => f.write_str("PRIO_DARWIN_GPU"),
            6 => f.write_str("PRIO_DARWIN_ROLE"),
            other => write!(f, "{}", other),
        }
    }
}

/// `getrusage(2)` who argument, carried as the sign-extended value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RusageWho(pub i32);

impl fmt::Display for RusageWho {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            -1 => f.write_str("RUSAGE_CHILDREN"),
            0 => f.write_str("RUSAGE_SELF"),
            other => write!(f, "{}", other),
        }
    }
}

/// `proc_info` call number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcInfoCall(pub u64);

const PROC_INFO_CALL_NAMES: &[(u64, &str)] = &[
    (0x1, "PROC_INFO_CALL_LISTPIDS"),
    (0x2, "PROC_INFO_CALL_PIDINFO"),
    (0x3, "PROC_INFO_CALL_PIDFDINFO"),
    (0x4, "PROC_INFO_CALL_KERNMSGBUF"),
    (0x5, "PROC_INFO_CALL_SETCONTROL"),
    (0x6, "PROC_INFO_CALL_PIDFILEPORTINFO"),
    (0x7, "PROC_INFO_CALL_TERMINATE"),
    (0x8, "PROC_INFO_CALL_DIRTYCONTROL"),
    (0x9, "PROC_INFO_CALL_PIDRUSAGE"),
    (0xa, "PROC_INFO_CALL_PIDORIGINATORINFO"),
    (0xb, "PROC_INFO_CALL_LISTCOALITIONS"),
    (0xc, "PROC_INFO_CALL_CANUSEFGHW"),
    (0xd, "PROC_INFO_CALL_PIDDYNKQUEUEINFO"),
    (0xe, "PROC_INFO_CALL_UDATA_INFO"),
];

impl fmt::Display for ProcInfoCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match PROC_INFO_CALL_NAMES
            .iter()
            .find(|&&(value, _)| value == self.0)
        {
            Some(&(_, name)) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Socket domain, covering the Darwin address families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressFamily(pub u64);

const ADDRESS_FAMILY_NAMES: &[(u64, &str)] = &[
    (0, "AF_UNSPEC"),
    (1, "AF_UNIX"),
    (2, "AF_INET"),
    (17, "AF_ROUTE"),
    (18, "AF_LINK"),
    (27, "AF_NDRV"),
    (30, "AF_INET6"),
    (32, "AF_SYSTEM"),
];

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ADDRESS_FAMILY_NAMES
            .iter()
            .find(|&&(value, _)| value == self.0)
        {
            Some(&(_, name)) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Socket type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketKind(pub u64);

impl fmt::Display for SocketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("SOCK_STREAM"),
            2 => f.write_str("SOCK_DGRAM"),
            3 => f.write_str("SOCK_RAW"),
            4 => f.write_str("SOCK_RDM"),
            5 => f.write_str("SOCK_SEQPACKET"),
            other => write!(f, "{}", other),
        }
    }
}

const SOCKET_OPTION_NAMES: &[(u64, &str)] = &[
    (0x1, "SO_DEBUG"),
    (0x2, "SO_ACCEPTCONN"),
    (0x4, "SO_REUSEADDR"),
    (0x8, "SO_KEEPALIVE"),
    (0x10, "SO_DONTROUTE"),
    (0x20, "SO_BROADCAST"),
    (0x40, "SO_USELOOPBACK"),
    (0x80, "SO_LINGER"),
    (0x100, "SO_OOBINLINE"),
    (0x200, "SO_REUSEPORT"),
    (0x400, "SO_TIMESTAMP"),
    (0x800, "SO_TIMESTAMP_MONOTONIC"),
    (0x1000, "SO_ACCEPTFILTER"),
    (0x1001, "SO_SNDBUF"),
    (0x1002, "SO_RCVBUF"),
    (0x1003, "SO_SNDLOWAT"),
    (0x1004, "SO_RCVLOWAT"),
    (0x1005, "SO_SNDTIMEO"),
    (0x1006, "SO_RCVTIMEO"),
    (0x1007, "SO_ERROR"),
    (0x1008, "SO_TYPE"),
    (0x1010, "SO_LABEL"),
    (0x1011, "SO_PEERLABEL"),
    (0x1020, "SO_NREAD"),
    (0x1021, "SO_NKE"),
    (0x1022, "SO_NOSIGPIPE"),
    (0x1023, "SO_NOADDRERR"),
    (0x1024, "SO_NWRITE"),
    (0x1025, "SO_REUSESHAREUID"),
    (0x1026, "SO_NOTIFYCONFLICT"),
    (0x1027, "SO_UPCALLCLOSEWAIT"),
    (0x1080, "SO_LINGER_SEC"),
    (0x1081, "SO_RESTRICTIONS"),
    (0x1082, "SO_RANDOMPORT"),
    (0x1083, "SO_NP_EXTENSIONS"),
    (0x1085, "SO_EXECPATH"),
    (0x1086, "SO_TRAFFIC_CLASS"),
    (0x1087, "SO_RECV_TRAFFIC_CLASS"),
    (0x1088, "SO_TRAFFIC_CLASS_DBG"),
    (0x1090, "SO_PRIVILEGED_TRAFFIC_CLASS"),
    (0x1091, "SO_DEFUNCTIT"),
    (0x1100, "SO_DEFUNCTOK"),
    (0x1101, "SO_ISDEFUNCT"),
    (0x1102, "SO_OPPORTUNISTIC"),
    (0x1103, "SO_FLUSH"),
    (0x1104, "SO_RECV_ANYIF"),
    (0x1105, "SO_TRAFFIC_MGT_BACKGROUND"),
    (0x1106, "SO_FLOW_DIVERT_TOKEN"),
    (0x1107, "SO_DELEGATED"),
    (0x1108, "SO_DELEGATED_UUID"),
    (0x1109, "SO_NECP_ATTRIBUTES"),
    (0x1110, "SO_CFIL_SOCK_ID"),
    (0x1111, "SO_NECP_CLIENTUUID"),
    (0x1112, "SO_NUMRCVPKT"),
    (0x1113, "SO_AWDL_UNRESTRICTED"),
    (0x1114, "SO_EXTENDED_BK_IDLE"),
    (0x1115, "SO_MARK_CELLFALLBACK"),
    (0x1116, "SO_NET_SERVICE_TYPE"),
    (0x1117, "SO_QOSMARKING_POLICY_OVERRIDE"),
    (0x1118, "SO_INTCOPROC_ALLOW"),
    (0x1119, "SO_NETSVC_MARKING_LEVEL"),
    (0x1120, "SO_NECP_LISTENUUID"),
    (0x1122, "SO_MPKL_SEND_INFO"),
    (0x1123, "SO_STATISTICS_EVENT"),
    (0x1124, "SO_WANT_KEV_SOCKET_CLOSED"),
    (0x2000, "SO_DONTTRUNC"),
    (0x4000, "SO_WANTMORE"),
    (0x8000, "SO_WANTOOBFLAG"),
    (0x10000, "SO_NOWAKEFROMSLEEP"),
    (0x20000, "SO_NOAPNFALLBK"),
    (0x40000, "SO_TIMESTAMP_CONTINUOUS"),
];

fn sockopt_level_and_option(level: u64, option: u64) -> (String, String) {
    if level == SOL_SOCKET {
        let name = SOCKET_OPTION_NAMES
            .iter()
            .find(|&&(value, _)| value == option)
            .map(|&(_, name)| name.to_string())
            .unwrap_or_else(|| option.to_string());
        ("SOL_SOCKET".to_string(), name)
    } else {
        (level.to_string(), option.to_string())
    }
}

fn ioc_params(request: u64) -> &'static str {
    match request & 0xf0000000 {
        0x20000000 => "IOC_VOID",
        0x40000000 => "IOC_OUT",
        0x80000000 => "IOC_IN",
        0xc0000000 => "IOC_IN | IOC_OUT",
        0xe0000000 => "IOC_DIRMASK",
        _ => "",
    }
}

fn two_vnode_paths(parser: &TracesParser, events: &[RawEvent]) -> (String, String) {
    let first = parser.parse_vnode(events);
    let rest: Vec<RawEvent> = events
        .iter()
        .filter(|e| !first.ktraces.contains(e))
        .copied()
        .collect();
    let second = parser.parse_vnode(&rest);
    (first.path, second.path)
}

fn vnode_path_pair(parser: &TracesParser, events: &[RawEvent]) -> (String, String) {
    let nodes = parser.parse_vnodes(events);
    let path1 = nodes.get(0).map(|n| n.path.clone()).unwrap_or_default();
    let path2 = nodes.get(1).map(|n| n.path.clone()).unwrap_or_default();
    (path1, path2)
}

#[derive(Debug)]
pub struct BscRead {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub address: u64,
    pub size: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "read{}({}, {:#x}, {}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.address,
            self.size,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscWrite {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub address: u64,
    pub size: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "write{}({}, {:#x}, {}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.address,
            self.size,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPread {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub address: u64,
    pub size: u64,
    pub offset: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscPread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pread{}({}, {:#x}, {}, {:#x}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.address,
            self.size,
            self.offset,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPwrite {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub address: u64,
    pub size: u64,
    pub offset: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscPwrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pwrite{}({}, {:#x}, {}, {:#x}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.address,
            self.size,
            self.offset,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscReadv {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub iovp: u64,
    pub iovcnt: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscReadv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "readv{}({}, {:#x}, {}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.iovp,
            self.iovcnt,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscWritev {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub iovp: u64,
    pub iovcnt: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscWritev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "writev{}({}, {:#x}, {}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.iovp,
            self.iovcnt,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPreadv {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub iovp: u64,
    pub iovcnt: u64,
    pub offset: i64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscPreadv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "preadv{}({}, {:#x}, {}, {}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.iovp,
            self.iovcnt,
            self.offset,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPwritev {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub iovp: u64,
    pub iovcnt: u64,
    pub offset: i64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscPwritev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pwritev{}({}, {:#x}, {}, {}), {}",
            suffix(self.no_cancel),
            self.fd,
            self.iovp,
            self.iovcnt,
            self.offset,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscOpen {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub flags: OpenFlags,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "open{}(\"{}\", {}), {}",
            suffix(self.no_cancel),
            self.path,
            self.flags,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscOpenat {
    pub ktraces: Vec<RawEvent>,
    pub dirfd: u64,
    pub path: String,
    pub flags: OpenFlags,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscOpenat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "openat{}({}, \"{}\", {}), {}",
            suffix(self.no_cancel),
            self.dirfd,
            self.path,
            self.flags,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscClose {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "close{}({})", suffix(self.no_cancel), self.fd)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscDup {
    pub ktraces: Vec<RawEvent>,
    pub fildes: u64,
    pub result: String,
}

impl fmt::Display for BscDup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dup({}), {}", self.fildes, self.result)
    }
}

#[derive(Debug)]
pub struct BscDup2 {
    pub ktraces: Vec<RawEvent>,
    pub from_fildes: u64,
    pub to_fildes: u64,
    pub result: String,
}

impl fmt::Display for BscDup2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dup2({}, {})", self.from_fildes, self.to_fildes)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFcntl {
    pub ktraces: Vec<RawEvent>,
    pub fildes: u64,
    pub cmd: FcntlCmd,
    pub buf: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscFcntl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fcntl{}({}, {}, {:#x}), {}",
            suffix(self.no_cancel),
            self.fildes,
            self.cmd,
            self.buf,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPipe {
    pub ktraces: Vec<RawEvent>,
    pub result: String,
}

impl fmt::Display for BscPipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pipe(), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscLseek {
    pub ktraces: Vec<RawEvent>,
    pub fildes: u64,
    pub offset: i64,
    pub whence: u64,
    pub result: String,
}

impl fmt::Display for BscLseek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lseek({}, {}, {}), {}",
            self.fildes, self.offset, self.whence, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscTruncate {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub length: u64,
    pub result: String,
}

impl fmt::Display for BscTruncate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "truncate(\"{}\", {})", self.path, self.length)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFtruncate {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub length: u64,
    pub result: String,
}

impl fmt::Display for BscFtruncate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ftruncate({}, {})", self.fd, self.length)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFsync {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscFsync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fsync{}({})", suffix(self.no_cancel), self.fd)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFdatasync {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub result: String,
}

impl fmt::Display for BscFdatasync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fdatasync({})", self.fd)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSync {
    pub ktraces: Vec<RawEvent>,
}

impl fmt::Display for BscSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sync()")
    }
}

#[derive(Debug)]
pub struct BscLink {
    pub ktraces: Vec<RawEvent>,
    pub old_path: String,
    pub new_path: String,
    pub result: String,
}

impl fmt::Display for BscLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "link(\"{}\", \"{}\")", self.old_path, self.new_path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscUnlink {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscUnlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unlink(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscChdir {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscChdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chdir(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFchdir {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub result: String,
}

impl fmt::Display for BscFchdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fchdir({})", self.fd)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMknod {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub mode: u64,
    pub dev: u64,
    pub result: String,
}

impl fmt::Display for BscMknod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mknod(\"{}\", {}, {})", self.path, self.mode, self.dev)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscChmod {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscChmod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chmod(\"{}\", {})", self.path, self.mode)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFchmod {
    pub ktraces: Vec<RawEvent>,
    pub fildes: u64,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscFchmod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fchmod({}, {})", self.fildes, self.mode)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscChown {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub owner: u64,
    pub group: u64,
    pub result: String,
}

impl fmt::Display for BscChown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chown(\"{}\", {}, {})", self.path, self.owner, self.group)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFchown {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub owner: u64,
    pub group: u64,
    pub result: String,
}

impl fmt::Display for BscFchown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fchown({}, {}, {})", self.fd, self.owner, self.group)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscLchown {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub owner: u64,
    pub group: u64,
    pub result: String,
}

impl fmt::Display for BscLchown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lchown(\"{}\", {}, {})",
            self.path, self.owner, self.group
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscRename {
    pub ktraces: Vec<RawEvent>,
    pub old_path: String,
    pub new_path: String,
    pub result: String,
}

impl fmt::Display for BscRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rename(\"{}\", \"{}\")", self.old_path, self.new_path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFlock {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub operation: FlockOps,
    pub result: String,
}

impl fmt::Display for BscFlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flock({}, {})", self.fd, self.operation)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMkfifo {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscMkfifo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkfifo(\"{}\", {})", self.path, self.mode)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMkdir {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscMkdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkdir(\"{}\", {})", self.path, self.mode)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscRmdir {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscRmdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rmdir(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSymlink {
    pub ktraces: Vec<RawEvent>,
    pub target: u64,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscSymlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "symlink({}, \"{}\")", self.target, self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscReadlink {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub buf: u64,
    pub bufsize: u64,
    pub result: String,
}

impl fmt::Display for BscReadlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "readlink(\"{}\", {:#x}, {}), {}",
            self.path, self.buf, self.bufsize, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscExecve {
    pub ktraces: Vec<RawEvent>,
}

impl fmt::Display for BscExecve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("execve()")
    }
}

#[derive(Debug)]
pub struct BscUmask {
    pub ktraces: Vec<RawEvent>,
    pub cmask: u64,
    pub prev_mask: u64,
}

impl fmt::Display for BscUmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "umask({}), previous mask: {}", self.cmask, self.prev_mask)
    }
}

#[derive(Debug)]
pub struct BscChroot {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscChroot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chroot(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscRevoke {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscRevoke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "revoke(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscUndelete {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscUndelete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "undelete(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscChflags {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub flags: ChangeableFlags,
    pub result: String,
}

impl fmt::Display for BscChflags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chflags(\"{}\", {})", self.path, self.flags)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFchflags {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub flags: ChangeableFlags,
    pub result: String,
}

impl fmt::Display for BscFchflags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fchflags({}, {})", self.fd, self.flags)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscAccess {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub amode: AccessMode,
    pub result: String,
}

impl fmt::Display for BscAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "access(\"{}\", {})", self.path, self.amode)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscUtimes {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub times: u64,
    pub result: String,
}

impl fmt::Display for BscUtimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "utimes(\"{}\", {:#x})", self.path, self.times)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFutimes {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub times: u64,
    pub result: String,
}

impl fmt::Display for BscFutimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "futimes({}, {:#x})", self.fd, self.times)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscStat64 {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub buf: u64,
    pub result: String,
}

impl fmt::Display for BscStat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stat64(\"{}\", {:#x})", self.path, self.buf)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFstat64 {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub result: String,
}

impl fmt::Display for BscFstat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fstat64({})", self.fd)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscLstat64 {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscLstat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lstat64(\"{}\")", self.path)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFstatat64 {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub ub: u64,
    pub flag: u64,
    pub result: String,
}

impl fmt::Display for BscFstatat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fstatat64({}, \"{}\", {:#x}, {})",
            self.fd, self.path, self.ub, self.flag
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscStatfs {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub buf: u64,
    pub result: String,
}

impl fmt::Display for BscStatfs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statfs(\"{}\", {:#x})", self.path, self.buf)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscStatfs64 {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub buf: u64,
    pub result: String,
}

impl fmt::Display for BscStatfs64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "statfs64(\"{}\", {:#x})", self.path, self.buf)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFstatfs {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub buf: u64,
    pub result: String,
}

impl fmt::Display for BscFstatfs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fstatfs({}, {:#x})", self.fd, self.buf)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFstatfs64 {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub buf: u64,
    pub result: String,
}

impl fmt::Display for BscFstatfs64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fstatfs64({}, {:#x})", self.fd, self.buf)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetfsstat64 {
    pub ktraces: Vec<RawEvent>,
    pub buf: u64,
    pub bufsize: u64,
    pub flags: u64,
    pub result: String,
}

impl fmt::Display for BscGetfsstat64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getfsstat64({:#x}, {}, {}), {}",
            self.buf, self.bufsize, self.flags, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGetdirentries64 {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub buf: u64,
    pub bufsize: u64,
    pub position: u64,
    pub result: String,
}

impl fmt::Display for BscGetdirentries64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getdirentries64({}, {:#x}, {}, {:#x}), {}",
            self.fd, self.buf, self.bufsize, self.position, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscMount {
    pub ktraces: Vec<RawEvent>,
    pub source: String,
    pub dest: String,
    pub flags: u64,
    pub data: u64,
    pub result: String,
}

impl fmt::Display for BscMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mount(\"{}\", \"{}\", {}, {:#x})",
            self.source, self.dest, self.flags, self.data
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscUnmount {
    pub ktraces: Vec<RawEvent>,
    pub dir: String,
    pub flags: u64,
    pub result: String,
}

impl fmt::Display for BscUnmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unmount(\"{}\", {})", self.dir, self.flags)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetattrlist {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub alist: u64,
    pub attr_buf: u64,
    pub asize: u64,
    pub result: String,
}

impl fmt::Display for BscGetattrlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getattrlist(\"{}\", {:#x}, {:#x}, {})",
            self.path, self.alist, self.attr_buf, self.asize
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetattrlist {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub alist: u64,
    pub attr_buf: u64,
    pub asize: u64,
    pub result: String,
}

impl fmt::Display for BscSetattrlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setattrlist(\"{}\", {:#x}, {:#x}, {})",
            self.path, self.alist, self.attr_buf, self.asize
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFgetattrlist {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub alist: u64,
    pub attr_buf: u64,
    pub asize: u64,
    pub result: String,
}

impl fmt::Display for BscFgetattrlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fgetattrlist({}, {:#x}, {:#x}, {})",
            self.fd, self.alist, self.attr_buf, self.asize
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFsetattrlist {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub alist: u64,
    pub attr_buf: u64,
    pub asize: u64,
    pub result: String,
}

impl fmt::Display for BscFsetattrlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fsetattrlist({}, {:#x}, {:#x}, {})",
            self.fd, self.alist, self.attr_buf, self.asize
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetattrlistat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub alist: u64,
    pub attr_buf: u64,
    pub result: String,
}

impl fmt::Display for BscGetattrlistat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getattrlistat({}, \"{}\", {:#x}, {:#x})",
            self.fd, self.path, self.alist, self.attr_buf
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetattrlistat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub alist: u64,
    pub attr_buf: u64,
    pub result: String,
}

impl fmt::Display for BscSetattrlistat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setattrlistat({}, \"{}\", {:#x}, {:#x})",
            self.fd, self.path, self.alist, self.attr_buf
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscExchangedata {
    pub ktraces: Vec<RawEvent>,
    pub path1: String,
    pub path2: String,
    pub options: u64,
    pub result: String,
}

impl fmt::Display for BscExchangedata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "exchangedata(\"{}\", \"{}\", {})",
            self.path1, self.path2, self.options
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetxattr {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub name: u64,
    pub value: u64,
    pub size: u64,
    pub result: String,
}

impl fmt::Display for BscGetxattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getxattr(\"{}\", {:#x}, {:#x}, {}), {}",
            self.path, self.name, self.value, self.size, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscFgetxattr {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub name: u64,
    pub value: u64,
    pub size: u64,
    pub result: String,
}

impl fmt::Display for BscFgetxattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fgetxattr({}, {:#x}, {:#x}, {}), {}",
            self.fd, self.name, self.value, self.size, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSetxattr {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub name: u64,
    pub value: u64,
    pub size: u64,
    pub result: String,
}

impl fmt::Display for BscSetxattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setxattr(\"{}\", {:#x}, {:#x}, {})",
            self.path, self.name, self.value, self.size
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFsetxattr {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub name: u64,
    pub value: u64,
    pub size: u64,
    pub result: String,
}

impl fmt::Display for BscFsetxattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fsetxattr({}, {:#x}, {:#x}, {})",
            self.fd, self.name, self.value, self.size
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscRemovexattr {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub name: u64,
    pub options: u64,
    pub result: String,
}

impl fmt::Display for BscRemovexattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "removexattr(\"{}\", {:#x}, {})",
            self.path, self.name, self.options
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFremovexattr {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub name: u64,
    pub options: u64,
    pub result: String,
}

impl fmt::Display for BscFremovexattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fremovexattr({}, {:#x}, {})",
            self.fd, self.name, self.options
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscListxattr {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub namebuf: u64,
    pub size: u64,
    pub options: u64,
    pub result: String,
}

impl fmt::Display for BscListxattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listxattr(\"{}\", {:#x}, {}, {}), {}",
            self.path, self.namebuf, self.size, self.options, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscFlistxattr {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub namebuf: u64,
    pub size: u64,
    pub options: u64,
    pub result: String,
}

impl fmt::Display for BscFlistxattr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "flistxattr({}, {:#x}, {}, {}), {}",
            self.fd, self.namebuf, self.size, self.options, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGetpid {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
}

impl fmt::Display for BscGetpid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getpid(), pid: {}", self.pid)
    }
}

#[derive(Debug)]
pub struct BscGetppid {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
}

impl fmt::Display for BscGetppid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getppid(), pid: {}", self.pid)
    }
}

#[derive(Debug)]
pub struct BscGetuid {
    pub ktraces: Vec<RawEvent>,
    pub uid: u64,
}

impl fmt::Display for BscGetuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getuid(), uid: {}", self.uid)
    }
}

#[derive(Debug)]
pub struct BscGeteuid {
    pub ktraces: Vec<RawEvent>,
    pub uid: u64,
}

impl fmt::Display for BscGeteuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "geteuid(), uid: {}", self.uid)
    }
}

#[derive(Debug)]
pub struct BscGetgid {
    pub ktraces: Vec<RawEvent>,
    pub gid: u64,
}

impl fmt::Display for BscGetgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getgid(), gid: {}", self.gid)
    }
}

#[derive(Debug)]
pub struct BscGetegid {
    pub ktraces: Vec<RawEvent>,
    pub gid: u64,
}

impl fmt::Display for BscGetegid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getegid(), gid: {}", self.gid)
    }
}

#[derive(Debug)]
pub struct BscGetpgrp {
    pub ktraces: Vec<RawEvent>,
    pub pgid: u64,
}

impl fmt::Display for BscGetpgrp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getpgrp(), pgid: {}", self.pgid)
    }
}

#[derive(Debug)]
pub struct BscGetdtablesize {
    pub ktraces: Vec<RawEvent>,
    pub size: u64,
}

impl fmt::Display for BscGetdtablesize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getdtablesize(), size: {}", self.size)
    }
}

#[derive(Debug)]
pub struct BscGetlogin {
    pub ktraces: Vec<RawEvent>,
    pub address: u64,
}

impl fmt::Display for BscGetlogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getlogin(), address: {:#x}", self.address)
    }
}

#[derive(Debug)]
pub struct BscSetuid {
    pub ktraces: Vec<RawEvent>,
    pub uid: u64,
    pub result: String,
}

impl fmt::Display for BscSetuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setuid({})", self.uid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSeteuid {
    pub ktraces: Vec<RawEvent>,
    pub uid: u64,
    pub result: String,
}

impl fmt::Display for BscSeteuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seteuid({})", self.uid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetgid {
    pub ktraces: Vec<RawEvent>,
    pub gid: u64,
    pub result: String,
}

impl fmt::Display for BscSetgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setgid({})", self.gid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetegid {
    pub ktraces: Vec<RawEvent>,
    pub gid: u64,
    pub result: String,
}

impl fmt::Display for BscSetegid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setegid({})", self.gid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetreuid {
    pub ktraces: Vec<RawEvent>,
    pub ruid: u64,
    pub euid: u64,
    pub result: String,
}

impl fmt::Display for BscSetreuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setreuid({}, {})", self.ruid, self.euid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetregid {
    pub ktraces: Vec<RawEvent>,
    pub rgid: u64,
    pub egid: u64,
    pub result: String,
}

impl fmt::Display for BscSetregid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setregid({}, {})", self.rgid, self.egid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetpgid {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub pgid: u64,
    pub result: String,
}

impl fmt::Display for BscSetpgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setpgid({}, {})", self.pid, self.pgid)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetsid {
    pub ktraces: Vec<RawEvent>,
    pub result: String,
}

impl fmt::Display for BscSetsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setsid(), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscGetpgid {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub result: String,
}

impl fmt::Display for BscGetpgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getpgid({}), {}", self.pid, self.result)
    }
}

#[derive(Debug)]
pub struct BscGetsid {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub result: String,
}

impl fmt::Display for BscGetsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getsid({}), {}", self.pid, self.result)
    }
}

#[derive(Debug)]
pub struct BscGetgroups {
    pub ktraces: Vec<RawEvent>,
    pub gidsetsize: u64,
    pub gidset: u64,
    pub result: String,
}

impl fmt::Display for BscGetgroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getgroups({}, {:#x}), {}",
            self.gidsetsize, self.gidset, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSetgroups {
    pub ktraces: Vec<RawEvent>,
    pub gidsetsize: u64,
    pub gidset: u64,
    pub result: String,
}

impl fmt::Display for BscSetgroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setgroups({}, {:#x})", self.gidsetsize, self.gidset)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscKill {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub sig: u64,
    pub result: String,
}

impl fmt::Display for BscKill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kill({}, {})", self.pid, self.sig)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSigaction {
    pub ktraces: Vec<RawEvent>,
    pub sig: Signal,
    pub act: u64,
    pub oact: u64,
    pub result: String,
}

impl fmt::Display for BscSigaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sigaction({}, {:#x}, {:#x})",
            self.sig, self.act, self.oact
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSigprocmask {
    pub ktraces: Vec<RawEvent>,
    pub how: SigprocmaskHow,
    pub set: u64,
    pub oset: u64,
    pub result: String,
}

impl fmt::Display for BscSigprocmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sigprocmask({}, {:#x}, {:#x})",
            self.how, self.set, self.oset
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSigpending {
    pub ktraces: Vec<RawEvent>,
    pub set: u64,
    pub result: String,
}

impl fmt::Display for BscSigpending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sigpending({:#x})", self.set)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSigaltstack {
    pub ktraces: Vec<RawEvent>,
    pub ss_address: u64,
    pub oss_address: u64,
    pub result: String,
}

impl fmt::Display for BscSigaltstack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sigaltstack({:#x}, {:#x})",
            self.ss_address, self.oss_address
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetitimer {
    pub ktraces: Vec<RawEvent>,
    pub which: u64,
    pub value: u64,
    pub ovalue: u64,
    pub result: String,
}

impl fmt::Display for BscSetitimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "setitimer({}, {:#x}, {:#x})",
            self.which, self.value, self.ovalue
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetitimer {
    pub ktraces: Vec<RawEvent>,
    pub which: u64,
    pub value: u64,
    pub result: String,
}

impl fmt::Display for BscGetitimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getitimer({}, {:#x})", self.which, self.value)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPosixSpawn {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub path: String,
    pub file_actions: u64,
    pub attrp: u64,
    pub stdin: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub result: String,
}

impl fmt::Display for BscPosixSpawn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "posix_spawn({:#x}, \"{}\", {:#x}, {:#x})",
            self.pid, self.path, self.file_actions, self.attrp
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetattrlistbulk {
    pub ktraces: Vec<RawEvent>,
    pub dirfd: u64,
    pub alist: u64,
    pub attribute_buffer: u64,
    pub buffer_size: u64,
    pub result: String,
}

impl fmt::Display for BscGetattrlistbulk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getattrlistbulk({}, {:#x}, {:#x}, {}), {}",
            self.dirfd, self.alist, self.attribute_buffer, self.buffer_size, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGuardedOpenNp {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub guard: u64,
    pub guardflags: u64,
    pub flags: OpenFlags,
    pub result: String,
}

impl fmt::Display for BscGuardedOpenNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guarded_open_np(\"{}\", {:#x}, {}, {}), {}",
            self.path, self.guard, self.guardflags, self.flags, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGuardedOpenDprotectedNp {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub guard: u64,
    pub guardflags: u64,
    pub flags: OpenFlags,
    pub result: String,
}

impl fmt::Display for BscGuardedOpenDprotectedNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guarded_open_dprotected_np(\"{}\", {:#x}, {}, {}), {}",
            self.path, self.guard, self.guardflags, self.flags, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGuardedCloseNp {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub guard: u64,
    pub result: String,
}

impl fmt::Display for BscGuardedCloseNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guarded_close_np({}, {:#x})", self.fd, self.guard)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGuardedKqueueNp {
    pub ktraces: Vec<RawEvent>,
    pub guard: u64,
    pub guardflags: u64,
    pub result: String,
}

impl fmt::Display for BscGuardedKqueueNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "guarded_kqueue_np({:#x}, {})", self.guard, self.guardflags)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscChangeFdguardNp {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub guard: u64,
    pub guardflags: u64,
    pub nguard: u64,
    pub result: String,
}

impl fmt::Display for BscChangeFdguardNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "change_fdguard_np({}, {:#x}, {}, {:#x})",
            self.fd, self.guard, self.guardflags, self.nguard
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGuardedWriteNp {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub guard: u64,
    pub cbuf: u64,
    pub nbyte: u64,
    pub result: String,
}

impl fmt::Display for BscGuardedWriteNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guarded_write_np({}, {:#x}, {:#x}, {}), {}",
            self.fd, self.guard, self.cbuf, self.nbyte, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGuardedPwriteNp {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub guard: u64,
    pub buf: u64,
    pub nbyte: u64,
    pub result: String,
}

impl fmt::Display for BscGuardedPwriteNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guarded_pwrite_np({}, {:#x}, {:#x}, {}), {}",
            self.fd, self.guard, self.buf, self.nbyte, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGuardedWritevNp {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub guard: u64,
    pub iovp: u64,
    pub iovcnt: u64,
    pub result: String,
}

impl fmt::Display for BscGuardedWritevNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "guarded_writev_np({}, {:#x}, {:#x}, {}), {}",
            self.fd, self.guard, self.iovp, self.iovcnt, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSigsuspend {
    pub ktraces: Vec<RawEvent>,
    pub sigmask: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscSigsuspend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sigsuspend{}({:#x})", suffix(self.no_cancel), self.sigmask)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPthreadSigmask {
    pub ktraces: Vec<RawEvent>,
    pub how: u64,
    pub set: u64,
    pub oset: u64,
    pub result: String,
}

impl fmt::Display for BscPthreadSigmask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pthread_sigmask({}, {:#x}, {:#x})",
            self.how, self.set, self.oset
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscVfork {
    pub ktraces: Vec<RawEvent>,
}

impl fmt::Display for BscVfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("vfork()")
    }
}

#[derive(Debug)]
pub struct BscWait4 {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
    pub stat_loc: u64,
    pub options: u64,
    pub rusage: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscWait4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wait4{}({}, {:#x}, {}, {:#x}), {}",
            suffix(self.no_cancel),
            self.pid,
            self.stat_loc,
            self.options,
            self.rusage,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscWaitid {
    pub ktraces: Vec<RawEvent>,
    pub idtype: u64,
    pub id: u64,
    pub infop: u64,
    pub options: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscWaitid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "waitid{}({}, {}, {:#x}, {})",
            suffix(self.no_cancel),
            self.idtype,
            self.id,
            self.infop,
            self.options
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGettimeofday {
    pub ktraces: Vec<RawEvent>,
    pub tv: u64,
    pub tz: u64,
    pub result: String,
}

impl fmt::Display for BscGettimeofday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gettimeofday({:#x}, {:#x})", self.tv, self.tz)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetrusage {
    pub ktraces: Vec<RawEvent>,
    pub who: RusageWho,
    pub r_usage: u64,
    pub result: String,
}

impl fmt::Display for BscGetrusage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getrusage({}, {})", self.who, self.r_usage)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetrlimit {
    pub ktraces: Vec<RawEvent>,
    pub resource: u64,
    pub rlp: u64,
    pub result: String,
}

impl fmt::Display for BscGetrlimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getrlimit({}, {:#x})", self.resource, self.rlp)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetrlimit {
    pub ktraces: Vec<RawEvent>,
    pub resource: u64,
    pub rlp: u64,
    pub result: String,
}

impl fmt::Display for BscSetrlimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setrlimit({}, {:#x})", self.resource, self.rlp)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetpriority {
    pub ktraces: Vec<RawEvent>,
    pub which: PriorityWhich,
    pub who: u64,
    pub prio: u64,
    pub result: String,
}

impl fmt::Display for BscSetpriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "setpriority({}, {}, {})", self.which, self.who, self.prio)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetpriority {
    pub ktraces: Vec<RawEvent>,
    pub which: PriorityWhich,
    pub who: u64,
    pub result: String,
}

impl fmt::Display for BscGetpriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getpriority({}, {}), {}",
            self.which, self.who, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscIssetugid {
    pub ktraces: Vec<RawEvent>,
    pub result: String,
}

impl fmt::Display for BscIssetugid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "issetugid(), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscGettid {
    pub ktraces: Vec<RawEvent>,
    pub uidp: u64,
    pub gidp: u64,
    pub result: String,
}

impl fmt::Display for BscGettid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gettid({:#x}, {:#x})", self.uidp, self.gidp)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPathconf {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub name: u64,
    pub result: String,
}

impl fmt::Display for BscPathconf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pathconf(\"{}\", {}), {}", self.path, self.name, self.result)
    }
}

#[derive(Debug)]
pub struct BscFpathconf {
    pub ktraces: Vec<RawEvent>,
    pub fildes: u64,
    pub name: u64,
    pub result: String,
}

impl fmt::Display for BscFpathconf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fpathconf({}, {}), {}", self.fildes, self.name, self.result)
    }
}

#[derive(Debug)]
pub struct BscGetentropy {
    pub ktraces: Vec<RawEvent>,
    pub buffer: u64,
    pub size: u64,
    pub result: String,
}

impl fmt::Display for BscGetentropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "getentropy({:#x}, {})", self.buffer, self.size)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSocket {
    pub ktraces: Vec<RawEvent>,
    pub domain: AddressFamily,
    pub kind: SocketKind,
    pub protocol: u64,
    pub result: String,
}

impl fmt::Display for BscSocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "socket({}, {}, {}), {}",
            self.domain, self.kind, self.protocol, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSocketpair {
    pub ktraces: Vec<RawEvent>,
    pub domain: AddressFamily,
    pub kind: SocketKind,
    pub protocol: u64,
    pub socket_vector: u64,
    pub result: String,
}

impl fmt::Display for BscSocketpair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "socketpair({}, {}, {}, {:#x})",
            self.domain, self.kind, self.protocol, self.socket_vector
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscConnect {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub address: u64,
    pub address_len: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscConnect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "connect{}({}, {:#x}, {})",
            suffix(self.no_cancel),
            self.socket,
            self.address,
            self.address_len
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscBind {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub address: u64,
    pub address_len: u64,
    pub result: String,
}

impl fmt::Display for BscBind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bind({}, {:#x}, {})",
            self.socket, self.address, self.address_len
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscListen {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub backlog: u64,
    pub result: String,
}

impl fmt::Display for BscListen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listen({}, {})", self.socket, self.backlog)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscShutdown {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub how: u64,
    pub result: String,
}

impl fmt::Display for BscShutdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shutdown({}, {})", self.socket, self.how)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscAccept {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscAccept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "accept{}({}), {}",
            suffix(self.no_cancel),
            self.socket,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSendto {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub buffer: u64,
    pub length: u64,
    pub flags: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscSendto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sendto{}({}, {:#x}, {}, {}), {}",
            suffix(self.no_cancel),
            self.socket,
            self.buffer,
            self.length,
            self.flags,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscRecvfrom {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub buffer: u64,
    pub length: u64,
    pub flags: MsgFlags,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscRecvfrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recvfrom{}({}, {:#x}, {}, {}), {}",
            suffix(self.no_cancel),
            self.socket,
            self.buffer,
            self.length,
            self.flags,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSendmsg {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscSendmsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sendmsg{}({}), {}",
            suffix(self.no_cancel),
            self.socket,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscRecvmsg {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscRecvmsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "recvmsg{}({}), {}",
            suffix(self.no_cancel),
            self.socket,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscGetpeername {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub address: u64,
    pub address_len: u64,
    pub result: String,
}

impl fmt::Display for BscGetpeername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getpeername({}, {:#x}, {:#x})",
            self.socket, self.address, self.address_len
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetsockname {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub address: u64,
    pub address_len: u64,
    pub result: String,
}

impl fmt::Display for BscGetsockname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "getsockname({}, {:#x}, {:#x})",
            self.socket, self.address, self.address_len
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSetsockopt {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub level: u64,
    pub option_name: u64,
    pub option_value: u64,
    pub result: String,
}

impl fmt::Display for BscSetsockopt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (level, option) = sockopt_level_and_option(self.level, self.option_name);
        write!(
            f,
            "setsockopt({}, {}, {}, {:#x})",
            self.socket, level, option, self.option_value
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscGetsockopt {
    pub ktraces: Vec<RawEvent>,
    pub socket: u64,
    pub level: u64,
    pub option_name: u64,
    pub option_value: u64,
    pub result: String,
}

impl fmt::Display for BscGetsockopt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (level, option) = sockopt_level_and_option(self.level, self.option_name);
        write!(
            f,
            "getsockopt({}, {}, {}, {:#x})",
            self.socket, level, option, self.option_value
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSelect {
    pub ktraces: Vec<RawEvent>,
    pub nfds: u64,
    pub readfds: u64,
    pub writefds: u64,
    pub errorfds: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "select{}({}, {:#x}, {:#x}, {:#x}), {}",
            suffix(self.no_cancel),
            self.nfds,
            self.readfds,
            self.writefds,
            self.errorfds,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPselect {
    pub ktraces: Vec<RawEvent>,
    pub nfds: u64,
    pub readfds: u64,
    pub writefds: u64,
    pub errorfds: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscPselect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pselect{}({}, {:#x}, {:#x}, {:#x}), {}",
            suffix(self.no_cancel),
            self.nfds,
            self.readfds,
            self.writefds,
            self.errorfds,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscPoll {
    pub ktraces: Vec<RawEvent>,
    pub fds: u64,
    pub nfds: u64,
    pub timeout: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscPoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "poll{}({:#x}, {}, {}), {}",
            suffix(self.no_cancel),
            self.fds,
            self.nfds,
            self.timeout,
            self.result
        )
    }
}

#[derive(Debug)]
pub struct BscKqueue {
    pub ktraces: Vec<RawEvent>,
    pub result: String,
}

impl fmt::Display for BscKqueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kqueue(), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscKevent {
    pub ktraces: Vec<RawEvent>,
    pub kq: u64,
    pub changelist: u64,
    pub nchanges: u64,
    pub eventlist: u64,
    pub result: String,
}

impl fmt::Display for BscKevent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kevent({}, {:#x}, {}, {:#x}), {}",
            self.kq, self.changelist, self.nchanges, self.eventlist, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscKevent64 {
    pub ktraces: Vec<RawEvent>,
    pub kq: u64,
    pub changelist: u64,
    pub nchanges: u64,
    pub eventlist: u64,
    pub result: String,
}

impl fmt::Display for BscKevent64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kevent64({}, {:#x}, {}, {:#x}), {}",
            self.kq, self.changelist, self.nchanges, self.eventlist, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscKeventQos {
    pub ktraces: Vec<RawEvent>,
    pub kq: u64,
    pub changelist: u64,
    pub nchanges: u64,
    pub eventlist: u64,
    pub result: String,
}

impl fmt::Display for BscKeventQos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kevent_qos({}, {:#x}, {}, {:#x}), {}",
            self.kq, self.changelist, self.nchanges, self.eventlist, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscKeventId {
    pub ktraces: Vec<RawEvent>,
    pub kq: u64,
    pub changelist: u64,
    pub nchanges: u64,
    pub eventlist: u64,
    pub result: String,
}

impl fmt::Display for BscKeventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "kevent_id({}, {:#x}, {}, {:#x}), {}",
            self.kq, self.changelist, self.nchanges, self.eventlist, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscMmap {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub prot: u64,
    pub flags: u64,
    pub result: String,
}

impl fmt::Display for BscMmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mmap({:#x}, {}, {}, {}), {}",
            self.addr, self.len, self.prot, self.flags, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscMunmap {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub result: String,
}

impl fmt::Display for BscMunmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "munmap({:#x}, {})", self.addr, self.len)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMprotect {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub prot: u64,
    pub result: String,
}

impl fmt::Display for BscMprotect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mprotect({:#x}, {}, {})", self.addr, self.len, self.prot)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMadvise {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub advice: u64,
    pub result: String,
}

impl fmt::Display for BscMadvise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "madvise({:#x}, {}, {})", self.addr, self.len, self.advice)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMincore {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub vec: u64,
    pub result: String,
}

impl fmt::Display for BscMincore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mincore({:#x}, {}, {:#x})", self.addr, self.len, self.vec)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMsync {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub flags: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscMsync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "msync{}({:#x}, {}, {})",
            suffix(self.no_cancel),
            self.addr,
            self.len,
            self.flags
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMlock {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub result: String,
}

impl fmt::Display for BscMlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mlock({:#x}, {})", self.addr, self.len)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMunlock {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub len: u64,
    pub result: String,
}

impl fmt::Display for BscMunlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "munlock({:#x}, {})", self.addr, self.len)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscIoctl {
    pub ktraces: Vec<RawEvent>,
    pub fildes: u64,
    pub request: u64,
    pub arg: u64,
    pub result: String,
}

impl fmt::Display for BscIoctl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = ioc_params(self.request);
        let group = ((self.request >> 8) & 0xff) as u8 as char;
        let number = self.request & 0xff;
        let length = (self.request >> 16) & 0x1fff;
        write!(
            f,
            "ioctl({}, {:#x} /* _IOC({}, '{}', {}, {}) */, {:#x})",
            self.fildes, self.request, params, group, number, length, self.arg
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSysctl {
    pub ktraces: Vec<RawEvent>,
    pub name: u64,
    pub namelen: u64,
    pub oldp: u64,
    pub oldlenp: u64,
    pub result: String,
}

impl fmt::Display for BscSysctl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sysctl({:#x}, {}, {:#x}, {:#x})",
            self.name, self.namelen, self.oldp, self.oldlenp
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSysctlbyname {
    pub ktraces: Vec<RawEvent>,
    pub name: u64,
    pub oldp: u64,
    pub oldlenp: u64,
    pub newp: u64,
    pub result: String,
}

impl fmt::Display for BscSysctlbyname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sysctlbyname({:#x}, {:#x}, {:#x}, {:#x})",
            self.name, self.oldp, self.oldlenp, self.newp
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscProcInfo {
    pub ktraces: Vec<RawEvent>,
    pub callnum: ProcInfoCall,
    pub pid: u64,
    pub flags: u64,
    pub ext_id: u64,
    pub result: String,
}

impl fmt::Display for BscProcInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "proc_info({}, {}, {}, {})",
            self.callnum, self.pid, self.flags, self.ext_id
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSendfile {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub socket: u64,
    pub offset: u64,
    pub len: u64,
    pub result: String,
}

impl fmt::Display for BscSendfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sendfile({}, {}, {}, {:#x})",
            self.fd, self.socket, self.offset, self.len
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscBsdthreadCreate {
    pub ktraces: Vec<RawEvent>,
    pub pid: u64,
}

impl fmt::Display for BscBsdthreadCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("thread_create()")
    }
}

#[derive(Debug)]
pub struct BscBsdthreadRegister {
    pub ktraces: Vec<RawEvent>,
    pub threadstart: u64,
    pub wqthread: u64,
    pub pthsize: u64,
    pub dummy_value: u64,
    pub result: String,
}

impl fmt::Display for BscBsdthreadRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thread_register({:#x}, {:#x}, {}, {:#x})",
            self.threadstart, self.wqthread, self.pthsize, self.dummy_value
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscWorkqOpen {
    pub ktraces: Vec<RawEvent>,
    pub result: String,
}

impl fmt::Display for BscWorkqOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("workq_open()")?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscWorkqKernreturn {
    pub ktraces: Vec<RawEvent>,
    pub options: u64,
    pub item: u64,
    pub affinity: u64,
    pub prio: u64,
    pub result: String,
}

impl fmt::Display for BscWorkqKernreturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "workq_kernreturn({}, {:#x}, {}, {}), {}",
            self.options, self.item, self.affinity, self.prio, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscThreadSelfid {
    pub ktraces: Vec<RawEvent>,
    pub result: String,
}

impl fmt::Display for BscThreadSelfid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "thread_selfid(), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscPsynchMutexwait {
    pub ktraces: Vec<RawEvent>,
    pub mutex: u64,
    pub mgen: u64,
    pub ugen: u64,
    pub tid: u64,
    pub result: String,
}

impl fmt::Display for BscPsynchMutexwait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "psynch_mutexwait({:#x}, {}, {}, {})",
            self.mutex, self.mgen, self.ugen, self.tid
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPsynchMutexdrop {
    pub ktraces: Vec<RawEvent>,
    pub mutex: u64,
    pub mgen: u64,
    pub ugen: u64,
    pub tid: u64,
    pub result: String,
}

impl fmt::Display for BscPsynchMutexdrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "psynch_mutexdrop({:#x}, {}, {}, {})",
            self.mutex, self.mgen, self.ugen, self.tid
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPsynchCvbroad {
    pub ktraces: Vec<RawEvent>,
    pub cv: u64,
    pub cvlsgen: u64,
    pub cvudgen: u64,
    pub flags: u64,
    pub result: String,
}

impl fmt::Display for BscPsynchCvbroad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "psynch_cvbroad({:#x}, {}, {}, {})",
            self.cv, self.cvlsgen, self.cvudgen, self.flags
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPsynchCvsignal {
    pub ktraces: Vec<RawEvent>,
    pub cv: u64,
    pub cvlsgen: u64,
    pub cvugen: u64,
    pub thread_port: u64,
    pub result: String,
}

impl fmt::Display for BscPsynchCvsignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "psynch_cvsignal({:#x}, {}, {}, {})",
            self.cv, self.cvlsgen, self.cvugen, self.thread_port
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscPsynchCvwait {
    pub ktraces: Vec<RawEvent>,
    pub cv: u64,
    pub cvlsgen: u64,
    pub cvugen: u64,
    pub mutex: u64,
    pub result: String,
}

impl fmt::Display for BscPsynchCvwait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "psynch_cvwait({:#x}, {}, {}, {:#x})",
            self.cv, self.cvlsgen, self.cvugen, self.mutex
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSemwaitSignal {
    pub ktraces: Vec<RawEvent>,
    pub cond_sem: u64,
    pub mutex_sem: u64,
    pub timeout: u64,
    pub relative: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscSemwaitSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "semwait_signal{}({}, {}, {}, {})",
            suffix(self.no_cancel),
            self.cond_sem,
            self.mutex_sem,
            self.timeout,
            self.relative
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscUlockWait {
    pub ktraces: Vec<RawEvent>,
    pub operation: u64,
    pub addr: u64,
    pub value: u64,
    pub timeout: u64,
    pub result: String,
}

impl fmt::Display for BscUlockWait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ulock_wait({}, {:#x}, {}, {}), {}",
            self.operation, self.addr, self.value, self.timeout, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscUlockWake {
    pub ktraces: Vec<RawEvent>,
    pub operation: u64,
    pub addr: u64,
    pub wake_value: u64,
    pub result: String,
}

impl fmt::Display for BscUlockWake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ulock_wake({}, {:#x}, {}), {}",
            self.operation, self.addr, self.wake_value, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscShmOpen {
    pub ktraces: Vec<RawEvent>,
    pub name: u64,
    pub oflag: OpenFlags,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscShmOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shm_open({:#x}, {}", self.name, self.oflag)?;
        if self.oflag.has_creat() {
            write!(f, ", {}", self.mode)?;
        }
        write!(f, "), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscShmUnlink {
    pub ktraces: Vec<RawEvent>,
    pub name: u64,
    pub result: String,
}

impl fmt::Display for BscShmUnlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shm_unlink({:#x})", self.name)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSemOpen {
    pub ktraces: Vec<RawEvent>,
    pub name: u64,
    pub oflag: OpenFlags,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscSemOpen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sem_open({:#x}, {}", self.name, self.oflag)?;
        if self.oflag.has_creat() {
            write!(f, ", {}", self.mode)?;
        }
        write!(f, "), {}", self.result)
    }
}

#[derive(Debug)]
pub struct BscSemUnlink {
    pub ktraces: Vec<RawEvent>,
    pub name: u64,
    pub result: String,
}

impl fmt::Display for BscSemUnlink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sem_unlink({:#x})", self.name)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSemClose {
    pub ktraces: Vec<RawEvent>,
    pub sem: u64,
    pub result: String,
}

impl fmt::Display for BscSemClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sem_close({})", self.sem)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSemWait {
    pub ktraces: Vec<RawEvent>,
    pub sem: u64,
    pub result: String,
    pub no_cancel: bool,
}

impl fmt::Display for BscSemWait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sem_wait{}({:#x})", suffix(self.no_cancel), self.sem)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSemTrywait {
    pub ktraces: Vec<RawEvent>,
    pub sem: u64,
    pub result: String,
}

impl fmt::Display for BscSemTrywait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sem_trywait({:#x})", self.sem)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscSemPost {
    pub ktraces: Vec<RawEvent>,
    pub sem: u64,
    pub result: String,
}

impl fmt::Display for BscSemPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sem_post({:#x})", self.sem)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscRenameat {
    pub ktraces: Vec<RawEvent>,
    pub fromfd: u64,
    pub from_path: String,
    pub tofd: u64,
    pub to_path: String,
    pub result: String,
}

impl fmt::Display for BscRenameat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "renameat({}, \"{}\", {}, \"{}\")",
            self.fromfd, self.from_path, self.tofd, self.to_path
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscRenameatxNp {
    pub ktraces: Vec<RawEvent>,
    pub fromfd: u64,
    pub from_path: String,
    pub tofd: u64,
    pub to_path: String,
    pub result: String,
}

impl fmt::Display for BscRenameatxNp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "renameatx_np({}, \"{}\", {}, \"{}\")",
            self.fromfd, self.from_path, self.tofd, self.to_path
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscLinkat {
    pub ktraces: Vec<RawEvent>,
    pub fd1: u64,
    pub path: String,
    pub fd2: u64,
    pub link: String,
    pub result: String,
}

impl fmt::Display for BscLinkat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linkat({}, \"{}\", {}, \"{}\")",
            self.fd1, self.path, self.fd2, self.link
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscUnlinkat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub flag: u64,
    pub result: String,
}

impl fmt::Display for BscUnlinkat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unlinkat({}, \"{}\", {})", self.fd, self.path, self.flag)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscReadlinkat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub buf: u64,
    pub bufsize: u64,
    pub result: String,
}

impl fmt::Display for BscReadlinkat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "readlinkat({}, \"{}\", {:#x}, {}), {}",
            self.fd, self.path, self.buf, self.bufsize, self.result
        )
    }
}

#[derive(Debug)]
pub struct BscSymlinkat {
    pub ktraces: Vec<RawEvent>,
    pub path1: String,
    pub fd: u64,
    pub path2: String,
    pub result: String,
}

impl fmt::Display for BscSymlinkat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "symlinkat(\"{}\", {}, \"{}\")",
            self.path1, self.fd, self.path2
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMkdirat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub mode: FileMode,
    pub result: String,
}

impl fmt::Display for BscMkdirat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mkdirat({}, \"{}\", {})", self.fd, self.path, self.mode)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFaccessat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub amode: AccessMode,
    pub flag: u64,
    pub result: String,
}

impl fmt::Display for BscFaccessat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "faccessat({}, \"{}\", {}, {})",
            self.fd, self.path, self.amode, self.flag
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFchmodat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub mode: FileMode,
    pub flag: u64,
    pub result: String,
}

impl fmt::Display for BscFchmodat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fchmodat({}, \"{}\", {}, {})",
            self.fd, self.path, self.mode, self.flag
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFchownat {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub path: String,
    pub uid: u64,
    pub gid: u64,
    pub result: String,
}

impl fmt::Display for BscFchownat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fchownat({}, \"{}\", {}, {})",
            self.fd, self.path, self.uid, self.gid
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscClonefileat {
    pub ktraces: Vec<RawEvent>,
    pub src_dirfd: u64,
    pub src: String,
    pub dst_dirfd: u64,
    pub dst: String,
    pub result: String,
}

impl fmt::Display for BscClonefileat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clonefileat({}, \"{}\", {}, \"{}\")",
            self.src_dirfd, self.src, self.dst_dirfd, self.dst
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFclonefileat {
    pub ktraces: Vec<RawEvent>,
    pub src_fd: u64,
    pub dst_dirfd: u64,
    pub dst: String,
    pub flags: u64,
    pub result: String,
}

impl fmt::Display for BscFclonefileat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fclonefileat({}, {}, \"{}\", {})",
            self.src_fd, self.dst_dirfd, self.dst, self.flags
        )?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscFsgetpath {
    pub ktraces: Vec<RawEvent>,
    pub buf: u64,
    pub bufsize: u64,
    pub fsid: u64,
    pub objid: u64,
    pub path: String,
    pub result: String,
}

impl fmt::Display for BscFsgetpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fsgetpath({:#x}, {}, {:#x}, {}), {}",
            self.buf, self.bufsize, self.fsid, self.objid, self.result
        )?;
        if !self.path.is_empty() {
            write!(f, " path: \"{}\"", self.path)?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct BscPthreadFchdir {
    pub ktraces: Vec<RawEvent>,
    pub fd: u64,
    pub result: String,
}

impl fmt::Display for BscPthreadFchdir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pthread_fchdir({})", self.fd)?;
        finish(f, &self.result)
    }
}

#[derive(Debug)]
pub struct BscMacSyscall {
    pub ktraces: Vec<RawEvent>,
    pub policy: u64,
    pub call: u64,
    pub arg: u64,
    pub result: String,
}

impl fmt::Display for BscMacSyscall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mac_syscall({:#x}, {}, {:#x})",
            self.policy, self.call, self.arg
        )?;
        finish(f, &self.result)
    }
}

pub(super) fn read(events: Vec<RawEvent>, no_cancel: bool) -> BscRead {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscRead {
        fd: args[0],
        address: args[1],
        size: args[2],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn write(events: Vec<RawEvent>, no_cancel: bool) -> BscWrite {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscWrite {
        fd: args[0],
        address: args[1],
        size: args[2],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn pread(events: Vec<RawEvent>, no_cancel: bool) -> BscPread {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPread {
        fd: args[0],
        address: args[1],
        size: args[2],
        offset: args[3],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn pwrite(events: Vec<RawEvent>, no_cancel: bool) -> BscPwrite {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPwrite {
        fd: args[0],
        address: args[1],
        size: args[2],
        offset: args[3],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn readv(events: Vec<RawEvent>, no_cancel: bool) -> BscReadv {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscReadv {
        fd: args[0],
        iovp: args[1],
        iovcnt: args[2],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn writev(events: Vec<RawEvent>, no_cancel: bool) -> BscWritev {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscWritev {
        fd: args[0],
        iovp: args[1],
        iovcnt: args[2],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn preadv(events: Vec<RawEvent>, no_cancel: bool) -> BscPreadv {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPreadv {
        fd: args[0],
        iovp: args[1],
        iovcnt: args[2],
        offset: args[3] as i64,
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn pwritev(events: Vec<RawEvent>, no_cancel: bool) -> BscPwritev {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPwritev {
        fd: args[0],
        iovp: args[1],
        iovcnt: args[2],
        offset: args[3] as i64,
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn open(parser: &TracesParser, events: Vec<RawEvent>, no_cancel: bool) -> BscOpen {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscOpen {
        path: vnode.path,
        flags: OpenFlags(args[1]),
        result: serialize_result(&end, "fd"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn openat(parser: &TracesParser, events: Vec<RawEvent>, no_cancel: bool) -> BscOpenat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscOpenat {
        dirfd: args[0],
        path: vnode.path,
        flags: OpenFlags(args[2]),
        result: serialize_result(&end, "fd"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn close(events: Vec<RawEvent>, no_cancel: bool) -> BscClose {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscClose {
        fd: args[0],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn dup(events: Vec<RawEvent>) -> BscDup {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscDup {
        fildes: args[0],
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn dup2(events: Vec<RawEvent>) -> BscDup2 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscDup2 {
        from_fildes: args[0],
        to_fildes: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fcntl(events: Vec<RawEvent>, no_cancel: bool) -> BscFcntl {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFcntl {
        fildes: args[0],
        cmd: FcntlCmd(args[1]),
        buf: args[2],
        result: serialize_result(&end, "return"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn pipe(events: Vec<RawEvent>) -> BscPipe {
    let end = events[events.len() - 1];
    let result = if end.args[0] != 0 {
        serialize_result(&end, "")
    } else {
        format!("read_fd: {}, write_fd: {}", end.args[1], end.args[2])
    };
    BscPipe {
        result,
        ktraces: events,
    }
}

pub(super) fn lseek(events: Vec<RawEvent>) -> BscLseek {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscLseek {
        fildes: args[0],
        offset: args[1] as i64,
        whence: args[2],
        result: serialize_result_fmt(&end, "count", ResultFmt::Signed),
        ktraces: events,
    }
}

pub(super) fn truncate(parser: &TracesParser, events: Vec<RawEvent>) -> BscTruncate {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscTruncate {
        path: vnode.path,
        length: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn ftruncate(events: Vec<RawEvent>) -> BscFtruncate {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFtruncate {
        fd: args[0],
        length: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fsync(events: Vec<RawEvent>, no_cancel: bool) -> BscFsync {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFsync {
        fd: args[0],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn fdatasync(events: Vec<RawEvent>) -> BscFdatasync {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFdatasync {
        fd: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sync(events: Vec<RawEvent>) -> BscSync {
    BscSync { ktraces: events }
}

pub(super) fn link(parser: &TracesParser, events: Vec<RawEvent>) -> BscLink {
    let (old_path, new_path) = two_vnode_paths(parser, &events);
    let end = events[events.len() - 1];
    BscLink {
        old_path,
        new_path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn unlink(parser: &TracesParser, events: Vec<RawEvent>) -> BscUnlink {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscUnlink {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn chdir(parser: &TracesParser, events: Vec<RawEvent>) -> BscChdir {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscChdir {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fchdir(events: Vec<RawEvent>) -> BscFchdir {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFchdir {
        fd: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mknod(parser: &TracesParser, events: Vec<RawEvent>) -> BscMknod {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMknod {
        path: vnode.path,
        mode: args[1],
        dev: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn chmod(parser: &TracesParser, events: Vec<RawEvent>) -> BscChmod {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscChmod {
        path: vnode.path,
        mode: FileMode(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fchmod(events: Vec<RawEvent>) -> BscFchmod {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFchmod {
        fildes: args[0],
        mode: FileMode(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn chown(parser: &TracesParser, events: Vec<RawEvent>) -> BscChown {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscChown {
        path: vnode.path,
        owner: args[1],
        group: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fchown(events: Vec<RawEvent>) -> BscFchown {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFchown {
        fd: args[0],
        owner: args[1],
        group: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn lchown(parser: &TracesParser, events: Vec<RawEvent>) -> BscLchown {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscLchown {
        path: vnode.path,
        owner: args[1],
        group: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn rename(parser: &TracesParser, events: Vec<RawEvent>) -> BscRename {
    let (old_path, new_path) = two_vnode_paths(parser, &events);
    let end = events[events.len() - 1];
    BscRename {
        old_path,
        new_path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn flock(events: Vec<RawEvent>) -> BscFlock {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFlock {
        fd: args[0],
        operation: FlockOps(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mkfifo(parser: &TracesParser, events: Vec<RawEvent>) -> BscMkfifo {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMkfifo {
        path: vnode.path,
        mode: FileMode(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mkdir(parser: &TracesParser, events: Vec<RawEvent>) -> BscMkdir {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMkdir {
        path: vnode.path,
        mode: FileMode(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn rmdir(parser: &TracesParser, events: Vec<RawEvent>) -> BscRmdir {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscRmdir {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn symlink(parser: &TracesParser, events: Vec<RawEvent>) -> BscSymlink {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSymlink {
        target: args[0],
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn readlink(parser: &TracesParser, events: Vec<RawEvent>) -> BscReadlink {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscReadlink {
        path: vnode.path,
        buf: args[1],
        bufsize: args[2],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn execve(events: Vec<RawEvent>) -> BscExecve {
    BscExecve { ktraces: events }
}

pub(super) fn umask(events: Vec<RawEvent>) -> BscUmask {
    let cmask = events[0].args[0];
    let end = events[events.len() - 1];
    BscUmask {
        cmask,
        prev_mask: end.args[1],
        ktraces: events,
    }
}

pub(super) fn chroot(parser: &TracesParser, events: Vec<RawEvent>) -> BscChroot {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscChroot {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn revoke(parser: &TracesParser, events: Vec<RawEvent>) -> BscRevoke {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscRevoke {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn undelete(parser: &TracesParser, events: Vec<RawEvent>) -> BscUndelete {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscUndelete {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn chflags(parser: &TracesParser, events: Vec<RawEvent>) -> BscChflags {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscChflags {
        path: vnode.path,
        flags: ChangeableFlags(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fchflags(events: Vec<RawEvent>) -> BscFchflags {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFchflags {
        fd: args[0],
        flags: ChangeableFlags(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn access(parser: &TracesParser, events: Vec<RawEvent>) -> BscAccess {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscAccess {
        path: vnode.path,
        amode: AccessMode(args[1]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn utimes(parser: &TracesParser, events: Vec<RawEvent>) -> BscUtimes {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscUtimes {
        path: vnode.path,
        times: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn futimes(events: Vec<RawEvent>) -> BscFutimes {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFutimes {
        fd: args[0],
        times: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn stat64(parser: &TracesParser, events: Vec<RawEvent>) -> BscStat64 {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscStat64 {
        path: vnode.path,
        buf: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fstat64(events: Vec<RawEvent>) -> BscFstat64 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFstat64 {
        fd: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn lstat64(parser: &TracesParser, events: Vec<RawEvent>) -> BscLstat64 {
    let vnode = parser.parse_vnode(&events);
    let end = events[events.len() - 1];
    BscLstat64 {
        path: vnode.path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fstatat64(parser: &TracesParser, events: Vec<RawEvent>) -> BscFstatat64 {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFstatat64 {
        fd: args[0],
        path: vnode.path,
        ub: args[2],
        flag: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn statfs(parser: &TracesParser, events: Vec<RawEvent>) -> BscStatfs {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscStatfs {
        path: vnode.path,
        buf: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn statfs64(parser: &TracesParser, events: Vec<RawEvent>) -> BscStatfs64 {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscStatfs64 {
        path: vnode.path,
        buf: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fstatfs(events: Vec<RawEvent>) -> BscFstatfs {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFstatfs {
        fd: args[0],
        buf: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fstatfs64(events: Vec<RawEvent>) -> BscFstatfs64 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFstatfs64 {
        fd: args[0],
        buf: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getfsstat64(events: Vec<RawEvent>) -> BscGetfsstat64 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetfsstat64 {
        buf: args[0],
        bufsize: args[1],
        flags: args[2],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn getdirentries64(events: Vec<RawEvent>) -> BscGetdirentries64 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetdirentries64 {
        fd: args[0],
        buf: args[1],
        bufsize: args[2],
        position: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn mount(parser: &TracesParser, events: Vec<RawEvent>) -> BscMount {
    let (source, dest) = two_vnode_paths(parser, &events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMount {
        source,
        dest,
        flags: args[2],
        data: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn unmount(parser: &TracesParser, events: Vec<RawEvent>) -> BscUnmount {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscUnmount {
        dir: vnode.path,
        flags: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getattrlist(parser: &TracesParser, events: Vec<RawEvent>) -> BscGetattrlist {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetattrlist {
        path: vnode.path,
        alist: args[1],
        attr_buf: args[2],
        asize: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setattrlist(parser: &TracesParser, events: Vec<RawEvent>) -> BscSetattrlist {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetattrlist {
        path: vnode.path,
        alist: args[1],
        attr_buf: args[2],
        asize: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fgetattrlist(events: Vec<RawEvent>) -> BscFgetattrlist {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFgetattrlist {
        fd: args[0],
        alist: args[1],
        attr_buf: args[2],
        asize: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fsetattrlist(events: Vec<RawEvent>) -> BscFsetattrlist {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFsetattrlist {
        fd: args[0],
        alist: args[1],
        attr_buf: args[2],
        asize: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getattrlistat(parser: &TracesParser, events: Vec<RawEvent>) -> BscGetattrlistat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetattrlistat {
        fd: args[0],
        path: vnode.path,
        alist: args[2],
        attr_buf: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setattrlistat(parser: &TracesParser, events: Vec<RawEvent>) -> BscSetattrlistat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetattrlistat {
        fd: args[0],
        path: vnode.path,
        alist: args[2],
        attr_buf: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn exchangedata(parser: &TracesParser, events: Vec<RawEvent>) -> BscExchangedata {
    let (path1, path2) = two_vnode_paths(parser, &events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscExchangedata {
        path1,
        path2,
        options: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getxattr(parser: &TracesParser, events: Vec<RawEvent>) -> BscGetxattr {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetxattr {
        path: vnode.path,
        name: args[1],
        value: args[2],
        size: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn fgetxattr(events: Vec<RawEvent>) -> BscFgetxattr {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFgetxattr {
        fd: args[0],
        name: args[1],
        value: args[2],
        size: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn setxattr(parser: &TracesParser, events: Vec<RawEvent>) -> BscSetxattr {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetxattr {
        path: vnode.path,
        name: args[1],
        value: args[2],
        size: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fsetxattr(events: Vec<RawEvent>) -> BscFsetxattr {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFsetxattr {
        fd: args[0],
        name: args[1],
        value: args[2],
        size: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn removexattr(parser: &TracesParser, events: Vec<RawEvent>) -> BscRemovexattr {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscRemovexattr {
        path: vnode.path,
        name: args[1],
        options: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fremovexattr(events: Vec<RawEvent>) -> BscFremovexattr {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFremovexattr {
        fd: args[0],
        name: args[1],
        options: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn listxattr(parser: &TracesParser, events: Vec<RawEvent>) -> BscListxattr {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscListxattr {
        path: vnode.path,
        namebuf: args[1],
        size: args[2],
        options: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn flistxattr(events: Vec<RawEvent>) -> BscFlistxattr {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFlistxattr {
        fd: args[0],
        namebuf: args[1],
        size: args[2],
        options: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn getpid(events: Vec<RawEvent>) -> BscGetpid {
    let end = events[events.len() - 1];
    BscGetpid {
        pid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getppid(events: Vec<RawEvent>) -> BscGetppid {
    let end = events[events.len() - 1];
    BscGetppid {
        pid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getuid(events: Vec<RawEvent>) -> BscGetuid {
    let end = events[events.len() - 1];
    BscGetuid {
        uid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn geteuid(events: Vec<RawEvent>) -> BscGeteuid {
    let end = events[events.len() - 1];
    BscGeteuid {
        uid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getgid(events: Vec<RawEvent>) -> BscGetgid {
    let end = events[events.len() - 1];
    BscGetgid {
        gid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getegid(events: Vec<RawEvent>) -> BscGetegid {
    let end = events[events.len() - 1];
    BscGetegid {
        gid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getpgrp(events: Vec<RawEvent>) -> BscGetpgrp {
    let end = events[events.len() - 1];
    BscGetpgrp {
        pgid: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getdtablesize(events: Vec<RawEvent>) -> BscGetdtablesize {
    let end = events[events.len() - 1];
    BscGetdtablesize {
        size: end.args[1],
        ktraces: events,
    }
}

pub(super) fn getlogin(events: Vec<RawEvent>) -> BscGetlogin {
    let address = events[0].args[0];
    BscGetlogin {
        address,
        ktraces: events,
    }
}

pub(super) fn setuid(events: Vec<RawEvent>) -> BscSetuid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetuid {
        uid: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn seteuid(events: Vec<RawEvent>) -> BscSeteuid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSeteuid {
        uid: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setgid(events: Vec<RawEvent>) -> BscSetgid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetgid {
        gid: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setegid(events: Vec<RawEvent>) -> BscSetegid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetegid {
        gid: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setreuid(events: Vec<RawEvent>) -> BscSetreuid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetreuid {
        ruid: args[0],
        euid: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setregid(events: Vec<RawEvent>) -> BscSetregid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetregid {
        rgid: args[0],
        egid: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setpgid(events: Vec<RawEvent>) -> BscSetpgid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetpgid {
        pid: args[0],
        pgid: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setsid(events: Vec<RawEvent>) -> BscSetsid {
    let end = events[events.len() - 1];
    BscSetsid {
        result: serialize_result(&end, "gid"),
        ktraces: events,
    }
}

pub(super) fn getpgid(events: Vec<RawEvent>) -> BscGetpgid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetpgid {
        pid: args[0],
        result: serialize_result(&end, "gid"),
        ktraces: events,
    }
}

pub(super) fn getsid(events: Vec<RawEvent>) -> BscGetsid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetsid {
        pid: args[0],
        result: serialize_result(&end, "sid"),
        ktraces: events,
    }
}

pub(super) fn getgroups(events: Vec<RawEvent>) -> BscGetgroups {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetgroups {
        gidsetsize: args[0],
        gidset: args[1],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn setgroups(events: Vec<RawEvent>) -> BscSetgroups {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetgroups {
        gidsetsize: args[0],
        gidset: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn kill(events: Vec<RawEvent>) -> BscKill {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscKill {
        pid: args[0],
        sig: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sigaction(events: Vec<RawEvent>) -> BscSigaction {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSigaction {
        sig: Signal(args[0]),
        act: args[1],
        oact: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sigprocmask(events: Vec<RawEvent>) -> BscSigprocmask {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSigprocmask {
        how: SigprocmaskHow(args[0]),
        set: args[1],
        oset: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sigsuspend(events: Vec<RawEvent>, no_cancel: bool) -> BscSigsuspend {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSigsuspend {
        sigmask: args[0],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn pthread_sigmask(events: Vec<RawEvent>) -> BscPthreadSigmask {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPthreadSigmask {
        how: args[0],
        set: args[1],
        oset: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sigpending(events: Vec<RawEvent>) -> BscSigpending {
    let end = events[events.len() - 1];
    BscSigpending {
        set: events[0].args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sigaltstack(events: Vec<RawEvent>) -> BscSigaltstack {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSigaltstack {
        ss_address: args[0],
        oss_address: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setitimer(events: Vec<RawEvent>) -> BscSetitimer {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetitimer {
        which: args[0],
        value: args[1],
        ovalue: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getitimer(events: Vec<RawEvent>) -> BscGetitimer {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetitimer {
        which: args[0],
        value: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

// When file actions redirect the standard streams their vnodes come
// first and the spawned image is the fourth lookup.
pub(super) fn posix_spawn(parser: &TracesParser, events: Vec<RawEvent>) -> BscPosixSpawn {
    let vnodes = parser.parse_vnodes(&events);
    let (path, stdin, stdout, stderr) = if vnodes.len() >= 6 {
        (
            vnodes[3].path.clone(),
            Some(vnodes[0].path.clone()),
            Some(vnodes[1].path.clone()),
            Some(vnodes[2].path.clone()),
        )
    } else {
        (
            vnodes.first().map(|v| v.path.clone()).unwrap_or_default(),
            None,
            None,
            None,
        )
    };
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPosixSpawn {
        pid: args[0],
        path,
        file_actions: args[2],
        attrp: args[3],
        stdin,
        stdout,
        stderr,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getattrlistbulk(events: Vec<RawEvent>) -> BscGetattrlistbulk {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetattrlistbulk {
        dirfd: args[0],
        alist: args[1],
        attribute_buffer: args[2],
        buffer_size: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn guarded_open_np(parser: &TracesParser, events: Vec<RawEvent>) -> BscGuardedOpenNp {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedOpenNp {
        path: vnode.path,
        guard: args[1],
        guardflags: args[2],
        flags: OpenFlags(args[3]),
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn guarded_open_dprotected_np(
    parser: &TracesParser,
    events: Vec<RawEvent>,
) -> BscGuardedOpenDprotectedNp {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedOpenDprotectedNp {
        path: vnode.path,
        guard: args[1],
        guardflags: args[2],
        flags: OpenFlags(args[3]),
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn guarded_close_np(events: Vec<RawEvent>) -> BscGuardedCloseNp {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedCloseNp {
        fd: args[0],
        guard: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn guarded_kqueue_np(events: Vec<RawEvent>) -> BscGuardedKqueueNp {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedKqueueNp {
        guard: args[0],
        guardflags: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn change_fdguard_np(events: Vec<RawEvent>) -> BscChangeFdguardNp {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscChangeFdguardNp {
        fd: args[0],
        guard: args[1],
        guardflags: args[2],
        nguard: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn guarded_write_np(events: Vec<RawEvent>) -> BscGuardedWriteNp {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedWriteNp {
        fd: args[0],
        guard: args[1],
        cbuf: args[2],
        nbyte: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn guarded_pwrite_np(events: Vec<RawEvent>) -> BscGuardedPwriteNp {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedPwriteNp {
        fd: args[0],
        guard: args[1],
        buf: args[2],
        nbyte: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn guarded_writev_np(events: Vec<RawEvent>) -> BscGuardedWritevNp {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGuardedWritevNp {
        fd: args[0],
        guard: args[1],
        iovp: args[2],
        iovcnt: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn vfork(events: Vec<RawEvent>) -> BscVfork {
    BscVfork { ktraces: events }
}

pub(super) fn wait4(events: Vec<RawEvent>, no_cancel: bool) -> BscWait4 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscWait4 {
        pid: args[0],
        stat_loc: args[1],
        options: args[2],
        rusage: args[3],
        result: serialize_result(&end, "pid"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn waitid(events: Vec<RawEvent>, no_cancel: bool) -> BscWaitid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscWaitid {
        idtype: args[0],
        id: args[1],
        infop: args[2],
        options: args[3],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn gettimeofday(events: Vec<RawEvent>) -> BscGettimeofday {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGettimeofday {
        tv: args[0],
        tz: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getrusage(events: Vec<RawEvent>) -> BscGetrusage {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetrusage {
        who: RusageWho(args[0] as i32),
        r_usage: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getrlimit(events: Vec<RawEvent>) -> BscGetrlimit {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetrlimit {
        resource: args[0],
        rlp: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setrlimit(events: Vec<RawEvent>) -> BscSetrlimit {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetrlimit {
        resource: args[0],
        rlp: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setpriority(events: Vec<RawEvent>) -> BscSetpriority {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetpriority {
        which: PriorityWhich(args[0]),
        who: args[1],
        prio: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getpriority(events: Vec<RawEvent>) -> BscGetpriority {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetpriority {
        which: PriorityWhich(args[0]),
        who: args[1],
        result: serialize_result(&end, "priority"),
        ktraces: events,
    }
}

pub(super) fn issetugid(events: Vec<RawEvent>) -> BscIssetugid {
    let end = events[events.len() - 1];
    BscIssetugid {
        result: serialize_result_fmt(&end, "return", ResultFmt::Bool),
        ktraces: events,
    }
}

pub(super) fn gettid(events: Vec<RawEvent>) -> BscGettid {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGettid {
        uidp: args[0],
        gidp: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn pathconf(parser: &TracesParser, events: Vec<RawEvent>) -> BscPathconf {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPathconf {
        path: vnode.path,
        name: args[1],
        result: serialize_result(&end, "return"),
        ktraces: events,
    }
}

pub(super) fn fpathconf(events: Vec<RawEvent>) -> BscFpathconf {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFpathconf {
        fildes: args[0],
        name: args[1],
        result: serialize_result(&end, "return"),
        ktraces: events,
    }
}

pub(super) fn getentropy(events: Vec<RawEvent>) -> BscGetentropy {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetentropy {
        buffer: args[0],
        size: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn socket(events: Vec<RawEvent>) -> BscSocket {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSocket {
        domain: AddressFamily(args[0]),
        kind: SocketKind(args[1]),
        protocol: args[2],
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn socketpair(events: Vec<RawEvent>) -> BscSocketpair {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSocketpair {
        domain: AddressFamily(args[0]),
        kind: SocketKind(args[1]),
        protocol: args[2],
        socket_vector: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn connect(events: Vec<RawEvent>, no_cancel: bool) -> BscConnect {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscConnect {
        socket: args[0],
        address: args[1],
        address_len: args[2],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn bind(events: Vec<RawEvent>) -> BscBind {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscBind {
        socket: args[0],
        address: args[1],
        address_len: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn listen(events: Vec<RawEvent>) -> BscListen {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscListen {
        socket: args[0],
        backlog: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn shutdown(events: Vec<RawEvent>) -> BscShutdown {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscShutdown {
        socket: args[0],
        how: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn accept(events: Vec<RawEvent>, no_cancel: bool) -> BscAccept {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscAccept {
        socket: args[0],
        result: serialize_result(&end, "fd"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn sendto(events: Vec<RawEvent>, no_cancel: bool) -> BscSendto {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSendto {
        socket: args[0],
        buffer: args[1],
        length: args[2],
        flags: args[3],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn recvfrom(events: Vec<RawEvent>, no_cancel: bool) -> BscRecvfrom {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscRecvfrom {
        socket: args[0],
        buffer: args[1],
        length: args[2],
        flags: MsgFlags(args[3]),
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn sendmsg(events: Vec<RawEvent>, no_cancel: bool) -> BscSendmsg {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSendmsg {
        socket: args[0],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn recvmsg(events: Vec<RawEvent>, no_cancel: bool) -> BscRecvmsg {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscRecvmsg {
        socket: args[0],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn getpeername(events: Vec<RawEvent>) -> BscGetpeername {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetpeername {
        socket: args[0],
        address: args[1],
        address_len: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getsockname(events: Vec<RawEvent>) -> BscGetsockname {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetsockname {
        socket: args[0],
        address: args[1],
        address_len: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn setsockopt(events: Vec<RawEvent>) -> BscSetsockopt {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSetsockopt {
        socket: args[0],
        level: args[1],
        option_name: args[2],
        option_value: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn getsockopt(events: Vec<RawEvent>) -> BscGetsockopt {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscGetsockopt {
        socket: args[0],
        level: args[1],
        option_name: args[2],
        option_value: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn select(events: Vec<RawEvent>, no_cancel: bool) -> BscSelect {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSelect {
        nfds: args[0],
        readfds: args[1],
        writefds: args[2],
        errorfds: args[3],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn pselect(events: Vec<RawEvent>, no_cancel: bool) -> BscPselect {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPselect {
        nfds: args[0],
        readfds: args[1],
        writefds: args[2],
        errorfds: args[3],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn poll(events: Vec<RawEvent>, no_cancel: bool) -> BscPoll {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPoll {
        fds: args[0],
        nfds: args[1],
        timeout: args[2],
        result: serialize_result(&end, "count"),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn kqueue(events: Vec<RawEvent>) -> BscKqueue {
    let end = events[events.len() - 1];
    BscKqueue {
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn kevent(events: Vec<RawEvent>) -> BscKevent {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscKevent {
        kq: args[0],
        changelist: args[1],
        nchanges: args[2],
        eventlist: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn kevent64(events: Vec<RawEvent>) -> BscKevent64 {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscKevent64 {
        kq: args[0],
        changelist: args[1],
        nchanges: args[2],
        eventlist: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn kevent_qos(events: Vec<RawEvent>) -> BscKeventQos {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscKeventQos {
        kq: args[0],
        changelist: args[1],
        nchanges: args[2],
        eventlist: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn kevent_id(events: Vec<RawEvent>) -> BscKeventId {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscKeventId {
        kq: args[0],
        changelist: args[1],
        nchanges: args[2],
        eventlist: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn mmap(events: Vec<RawEvent>) -> BscMmap {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMmap {
        addr: args[0],
        len: args[1],
        prot: args[2],
        flags: args[3],
        result: serialize_result_fmt(&end, "count", ResultFmt::Hex),
        ktraces: events,
    }
}

pub(super) fn munmap(events: Vec<RawEvent>) -> BscMunmap {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMunmap {
        addr: args[0],
        len: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mprotect(events: Vec<RawEvent>) -> BscMprotect {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMprotect {
        addr: args[0],
        len: args[1],
        prot: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn madvise(events: Vec<RawEvent>) -> BscMadvise {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMadvise {
        addr: args[0],
        len: args[1],
        advice: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mincore(events: Vec<RawEvent>) -> BscMincore {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMincore {
        addr: args[0],
        len: args[1],
        vec: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn msync(events: Vec<RawEvent>, no_cancel: bool) -> BscMsync {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMsync {
        addr: args[0],
        len: args[1],
        flags: args[2],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn mlock(events: Vec<RawEvent>) -> BscMlock {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMlock {
        addr: args[0],
        len: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn munlock(events: Vec<RawEvent>) -> BscMunlock {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMunlock {
        addr: args[0],
        len: args[1],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn ioctl(events: Vec<RawEvent>) -> BscIoctl {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscIoctl {
        fildes: args[0],
        request: args[1],
        arg: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sysctl(events: Vec<RawEvent>) -> BscSysctl {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSysctl {
        name: args[0],
        namelen: args[1],
        oldp: args[2],
        oldlenp: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sysctlbyname(events: Vec<RawEvent>) -> BscSysctlbyname {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSysctlbyname {
        name: args[0],
        oldp: args[1],
        oldlenp: args[2],
        newp: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn proc_info(events: Vec<RawEvent>) -> BscProcInfo {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscProcInfo {
        callnum: ProcInfoCall(args[0]),
        pid: args[1],
        flags: args[2],
        ext_id: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sendfile(events: Vec<RawEvent>) -> BscSendfile {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSendfile {
        fd: args[0],
        socket: args[1],
        offset: args[2],
        len: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn bsdthread_create(events: Vec<RawEvent>) -> BscBsdthreadCreate {
    let end = events[events.len() - 1];
    BscBsdthreadCreate {
        pid: end.args[3],
        ktraces: events,
    }
}

pub(super) fn bsdthread_register(events: Vec<RawEvent>) -> BscBsdthreadRegister {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscBsdthreadRegister {
        threadstart: args[0],
        wqthread: args[1],
        pthsize: args[2],
        dummy_value: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn workq_open(events: Vec<RawEvent>) -> BscWorkqOpen {
    let end = events[events.len() - 1];
    BscWorkqOpen {
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn workq_kernreturn(events: Vec<RawEvent>) -> BscWorkqKernreturn {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscWorkqKernreturn {
        options: args[0],
        item: args[1],
        affinity: args[2],
        prio: args[3],
        result: serialize_result(&end, "return"),
        ktraces: events,
    }
}

pub(super) fn thread_selfid(events: Vec<RawEvent>) -> BscThreadSelfid {
    let end = events[events.len() - 1];
    BscThreadSelfid {
        result: serialize_result(&end, "tid"),
        ktraces: events,
    }
}

pub(super) fn psynch_mutexwait(events: Vec<RawEvent>) -> BscPsynchMutexwait {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPsynchMutexwait {
        mutex: args[0],
        mgen: args[1],
        ugen: args[2],
        tid: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn psynch_mutexdrop(events: Vec<RawEvent>) -> BscPsynchMutexdrop {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPsynchMutexdrop {
        mutex: args[0],
        mgen: args[1],
        ugen: args[2],
        tid: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn psynch_cvbroad(events: Vec<RawEvent>) -> BscPsynchCvbroad {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPsynchCvbroad {
        cv: args[0],
        cvlsgen: args[1],
        cvudgen: args[2],
        flags: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn psynch_cvsignal(events: Vec<RawEvent>) -> BscPsynchCvsignal {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPsynchCvsignal {
        cv: args[0],
        cvlsgen: args[1],
        cvugen: args[2],
        thread_port: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn psynch_cvwait(events: Vec<RawEvent>) -> BscPsynchCvwait {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPsynchCvwait {
        cv: args[0],
        cvlsgen: args[1],
        cvugen: args[2],
        mutex: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn semwait_signal(events: Vec<RawEvent>, no_cancel: bool) -> BscSemwaitSignal {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemwaitSignal {
        cond_sem: args[0],
        mutex_sem: args[1],
        timeout: args[2],
        relative: args[3],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn ulock_wait(events: Vec<RawEvent>) -> BscUlockWait {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscUlockWait {
        operation: args[0],
        addr: args[1],
        value: args[2],
        timeout: args[3],
        result: serialize_result(&end, "return"),
        ktraces: events,
    }
}

pub(super) fn ulock_wake(events: Vec<RawEvent>) -> BscUlockWake {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscUlockWake {
        operation: args[0],
        addr: args[1],
        wake_value: args[2],
        result: serialize_result(&end, "return"),
        ktraces: events,
    }
}

pub(super) fn shm_open(events: Vec<RawEvent>) -> BscShmOpen {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscShmOpen {
        name: args[0],
        oflag: OpenFlags(args[1]),
        mode: FileMode(args[2]),
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn shm_unlink(events: Vec<RawEvent>) -> BscShmUnlink {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscShmUnlink {
        name: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sem_open(events: Vec<RawEvent>) -> BscSemOpen {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemOpen {
        name: args[0],
        oflag: OpenFlags(args[1]),
        mode: FileMode(args[2]),
        result: serialize_result(&end, "fd"),
        ktraces: events,
    }
}

pub(super) fn sem_unlink(events: Vec<RawEvent>) -> BscSemUnlink {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemUnlink {
        name: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sem_close(events: Vec<RawEvent>) -> BscSemClose {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemClose {
        sem: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sem_wait(events: Vec<RawEvent>, no_cancel: bool) -> BscSemWait {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemWait {
        sem: args[0],
        result: serialize_result(&end, ""),
        no_cancel,
        ktraces: events,
    }
}

pub(super) fn sem_trywait(events: Vec<RawEvent>) -> BscSemTrywait {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemTrywait {
        sem: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn sem_post(events: Vec<RawEvent>) -> BscSemPost {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSemPost {
        sem: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn renameat(parser: &TracesParser, events: Vec<RawEvent>) -> BscRenameat {
    let (from_path, to_path) = vnode_path_pair(parser, &events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscRenameat {
        fromfd: args[0],
        from_path,
        tofd: args[2],
        to_path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn renameatx_np(parser: &TracesParser, events: Vec<RawEvent>) -> BscRenameatxNp {
    let (from_path, to_path) = vnode_path_pair(parser, &events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscRenameatxNp {
        fromfd: args[0],
        from_path,
        tofd: args[2],
        to_path,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn linkat(parser: &TracesParser, events: Vec<RawEvent>) -> BscLinkat {
    let (path, link) = vnode_path_pair(parser, &events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscLinkat {
        fd1: args[0],
        path,
        fd2: args[2],
        link,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn unlinkat(parser: &TracesParser, events: Vec<RawEvent>) -> BscUnlinkat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscUnlinkat {
        fd: args[0],
        path: vnode.path,
        flag: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn readlinkat(parser: &TracesParser, events: Vec<RawEvent>) -> BscReadlinkat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscReadlinkat {
        fd: args[0],
        path: vnode.path,
        buf: args[2],
        bufsize: args[3],
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn symlinkat(parser: &TracesParser, events: Vec<RawEvent>) -> BscSymlinkat {
    let nodes = parser.parse_vnodes(&events);
    let path1 = if nodes.len() > 1 {
        nodes[0].path.clone()
    } else {
        String::new()
    };
    let path2 = nodes.last().map(|n| n.path.clone()).unwrap_or_default();
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscSymlinkat {
        path1,
        fd: args[1],
        path2,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mkdirat(parser: &TracesParser, events: Vec<RawEvent>) -> BscMkdirat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMkdirat {
        fd: args[0],
        path: vnode.path,
        mode: FileMode(args[2]),
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn faccessat(parser: &TracesParser, events: Vec<RawEvent>) -> BscFaccessat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFaccessat {
        fd: args[0],
        path: vnode.path,
        amode: AccessMode(args[2]),
        flag: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fchmodat(parser: &TracesParser, events: Vec<RawEvent>) -> BscFchmodat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFchmodat {
        fd: args[0],
        path: vnode.path,
        mode: FileMode(args[2]),
        flag: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fchownat(parser: &TracesParser, events: Vec<RawEvent>) -> BscFchownat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFchownat {
        fd: args[0],
        path: vnode.path,
        uid: args[2],
        gid: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn clonefileat(parser: &TracesParser, events: Vec<RawEvent>) -> BscClonefileat {
    let (src, dst) = two_vnode_paths(parser, &events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscClonefileat {
        src_dirfd: args[0],
        src,
        dst_dirfd: args[2],
        dst,
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fclonefileat(parser: &TracesParser, events: Vec<RawEvent>) -> BscFclonefileat {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFclonefileat {
        src_fd: args[0],
        dst_dirfd: args[1],
        dst: vnode.path,
        flags: args[3],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn fsgetpath(parser: &TracesParser, events: Vec<RawEvent>) -> BscFsgetpath {
    let vnode = parser.parse_vnode(&events);
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscFsgetpath {
        buf: args[0],
        bufsize: args[1],
        fsid: args[2],
        objid: args[3],
        path: vnode.path,
        result: serialize_result(&end, "count"),
        ktraces: events,
    }
}

pub(super) fn pthread_fchdir(events: Vec<RawEvent>) -> BscPthreadFchdir {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscPthreadFchdir {
        fd: args[0],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

pub(super) fn mac_syscall(events: Vec<RawEvent>) -> BscMacSyscall {
    let args = events[0].args;
    let end = events[events.len() - 1];
    BscMacSyscall {
        policy: args[0],
        call: args[1],
        arg: args[2],
        result: serialize_result(&end, ""),
        ktraces: events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kd_buf::FuncQualifier;

    fn event(debugid: u32, args: [u64; 4]) -> RawEvent {
        let mut data = [0u8; 32];
        for (i, a) in args.iter().enumerate() {
            data[i * 8..i * 8 + 8].copy_from_slice(&a.to_le_bytes());
        }
        RawEvent {
            timestamp: 1,
            data,
            args,
            tid: 7,
            debugid,
            eventid: debugid & crate::kd_buf::KDBG_EVENTID_MASK,
            qualifier: FuncQualifier::from_debugid(debugid),
            cpuid: 0,
        }
    }

    #[test]
    fn errno_renders_with_name() {
        let end = event(0x040c0029, [9, 0, 0, 0]);
        assert_eq!(serialize_result(&end, "fd"), "errno: EBADF(9)");
    }

    #[test]
    fn unknown_errno_renders_bare() {
        let end = event(0x040c0029, [500, 0, 0, 0]);
        assert_eq!(serialize_result(&end, "fd"), "errno: 500");
    }

    #[test]
    fn read_displays_hex_buffer_and_count() {
        let start = event(0x040c000c, [3, 0x7f00aa00, 512, 0]);
        let end = event(0x040c000e, [0, 128, 0, 0]);
        let call = read(vec![start, end], false);
        assert_eq!(call.to_string(), "read(3, 0x7f00aa00, 512), count: 128");
    }

    #[test]
    fn nocancel_suffix_applies() {
        let start = event(0x040c0630, [3, 0x1000, 64, 0]);
        let end = event(0x040c0632, [0, 64, 0, 0]);
        let call = read(vec![start, end], true);
        assert_eq!(
            call.to_string(),
            "read_nocancel(3, 0x1000, 64), count: 64"
        );
    }

    #[test]
    fn open_flags_access_mode_first() {
        assert_eq!(
            OpenFlags(0x2 | 0x200 | 0x400).to_string(),
            "O_RDWR | O_CREAT | O_TRUNC"
        );
        assert_eq!(OpenFlags(0).to_string(), "O_RDONLY");
        assert_eq!(OpenFlags(0x1).to_string(), "O_WRONLY");
    }

    #[test]
    fn file_mode_permission_and_type_bits() {
        assert_eq!(
            FileMode(0o644).to_string(),
            "S_IROTH | S_IRGRP | S_IWUSR | S_IRUSR"
        );
        assert_eq!(
            FileMode(0o100000).to_string(),
            "S_IFREG"
        );
    }

    #[test]
    fn access_mode_defaults_to_f_ok() {
        assert_eq!(AccessMode(0).to_string(), "F_OK");
        assert_eq!(AccessMode(5).to_string(), "X_OK | R_OK");
    }

    #[test]
    fn lseek_renders_signed_offset() {
        let start = event(0x040c00c7, [4, (-16i64) as u64, 1, 0]);
        let end = event(0x040c00c7, [0, 4080, 0, 0]);
        let call = lseek(vec![start, end]);
        assert_eq!(call.to_string(), "lseek(4, -16, 1), count: 4080");
    }

    #[test]
    fn pipe_reports_both_fds() {
        let start = event(0x040c0068, [0; 4]);
        let end = event(0x040c0068, [0, 5, 6, 0]);
        let call = pipe(vec![start, end]);
        assert_eq!(call.to_string(), "pipe(), read_fd: 5, write_fd: 6");
    }

    #[test]
    fn issetugid_renders_bool() {
        let start = event(0x040c0527, [0; 4]);
        let end = event(0x040c0527, [0, 0, 0, 0]);
        let call = issetugid(vec![start, end]);
        assert_eq!(call.to_string(), "issetugid(), return: False");
    }

    #[test]
    fn sockopt_names_resolve_for_sol_socket() {
        let (level, option) = sockopt_level_and_option(0xffff, 0x1001);
        assert_eq!(level, "SOL_SOCKET");
        assert_eq!(option, "SO_SNDBUF");
        let (level, option) = sockopt_level_and_option(6, 1);
        assert_eq!(level, "6");
        assert_eq!(option, "1");
    }

    #[test]
    fn ioctl_annotates_request_encoding() {
        let start = event(0x040c0036, [3, 0x40487413, 0x7000, 0]);
        let end = event(0x040c0036, [0, 0, 0, 0]);
        let call = ioctl(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "ioctl(3, 0x40487413 /* _IOC(IOC_OUT, 't', 19, 72) */, 0x7000)"
        );
    }

    #[test]
    fn setitimer_renders_pointers_hex() {
        let start = event(0x040c014d, [0, 0x16d3a7a28, 0, 0]);
        let end = event(0x040c014e, [0, 0, 0, 0]);
        let call = setitimer(vec![start, end]);
        assert_eq!(call.to_string(), "setitimer(0, 0x16d3a7a28, 0x0)");
    }

    #[test]
    fn sigaltstack_renders_both_stacks() {
        let start = event(0x040c00d5, [0x16f0e3000, 0x16f0e7000, 0, 0]);
        let end = event(0x040c00d6, [22, 0, 0, 0]);
        let call = sigaltstack(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "sigaltstack(0x16f0e3000, 0x16f0e7000), errno: EINVAL(22)"
        );
    }

    #[test]
    fn getattrlistbulk_reports_entry_count() {
        let start = event(0x040c0735, [4, 0x16d3a7b80, 0x105808000, 32768]);
        let end = event(0x040c0736, [0, 12, 0, 0]);
        let call = getattrlistbulk(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "getattrlistbulk(4, 0x16d3a7b80, 0x105808000, 32768), count: 12"
        );
    }

    #[test]
    fn guarded_close_np_reports_errno() {
        let start = event(0x040c06e9, [3, 0xdeadbeef, 0, 0]);
        let end = event(0x040c06ea, [9, 0, 0, 0]);
        let call = guarded_close_np(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "guarded_close_np(3, 0xdeadbeef), errno: EBADF(9)"
        );
    }

    #[test]
    fn guarded_write_np_counts_bytes() {
        let start = event(0x040c0795, [5, 0xfeed, 0x7000, 64]);
        let end = event(0x040c0796, [0, 64, 0, 0]);
        let call = guarded_write_np(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "guarded_write_np(5, 0xfeed, 0x7000, 64), count: 64"
        );
    }

    #[test]
    fn change_fdguard_np_renders_old_and_new_guard() {
        let start = event(0x040c06f1, [7, 0xaaaa, 2, 0xbbbb]);
        let end = event(0x040c06f2, [0, 0, 0, 0]);
        let call = change_fdguard_np(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "change_fdguard_np(7, 0xaaaa, 2, 0xbbbb)"
        );
    }

    #[test]
    fn posix_spawn_takes_its_path_from_the_lookup() {
        let parser = TracesParser::new(crate::trace_codes::default_trace_codes());
        let start = event(0x040c03d1, [1, 0, 0x10, 0x20]);
        let lookup = event(
            0x3010093,
            [
                7,
                u64::from_le_bytes(*b"/usr/bin"),
                u64::from_le_bytes(*b"/true\0\0\0"),
                0,
            ],
        );
        let end = event(0x040c03d2, [0, 0, 0, 0]);
        let call = posix_spawn(&parser, vec![start, lookup, end]);
        assert_eq!(call.path, "/usr/bin/true");
        assert_eq!(call.stdin, None);
        assert_eq!(
            call.to_string(),
            "posix_spawn(0x1, \"/usr/bin/true\", 0x10, 0x20)"
        );
    }

    #[test]
    fn shm_open_shows_mode_only_with_creat() {
        let start = event(0x040c010a, [0xbeef, 0x2 | 0x200, 0o600, 0]);
        let end = event(0x040c010a, [0, 3, 0, 0]);
        let call = shm_open(vec![start, end]);
        assert_eq!(
            call.to_string(),
            "shm_open(0xbeef, O_RDWR | O_CREAT, S_IWUSR | S_IRUSR), fd: 3"
        );

        let start = event(0x040c010a, [0xbeef, 0x2, 0, 0]);
        let end = event(0x040c010a, [0, 4, 0, 0]);
        let call = shm_open(vec![start, end]);
        assert_eq!(call.to_string(), "shm_open(0xbeef, O_RDWR), fd: 4");
    }
}
