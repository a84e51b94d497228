use std::fmt;

use bitflags::bitflags;

use crate::kd_buf::RawEvent;
use crate::traces::TracesParser;

/// 128-bit image identifier, rendered in the usual hyphenated hex form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uuid(pub [u8; 16]);

impl Uuid {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut uuid = [0; 16];
        uuid.copy_from_slice(&bytes[..16]);
        Uuid(uuid)
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13],
            b[14], b[15]
        )
    }
}

bitflags! {
    pub struct RtldFlags: u64 {
        const RTLD_LAZY = 0x1;
        const RTLD_NOW = 0x2;
        const RTLD_LOCAL = 0x4;
        const RTLD_GLOBAL = 0x8;
        const RTLD_NOLOAD = 0x10;
        const RTLD_NODELETE = 0x80;
        const RTLD_FIRST = 0x100;
    }
}

impl fmt::Display for RtldFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else {
            fmt::Debug::fmt(self, f)
        }
    }
}

#[derive(Debug)]
pub struct DyldUuidMapA {
    pub ktraces: Vec<RawEvent>,
    pub uuid: Uuid,
    pub load_addr: u64,
    pub fsid: u64,
}

impl fmt::Display for DyldUuidMapA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DYLD_uuid_map_a, uuid: \"{}\", load_addr: {:#x}, fsid: {:#x}",
            self.uuid, self.load_addr, self.fsid
        )
    }
}

#[derive(Debug)]
pub struct DyldUuidMapB {
    pub ktraces: Vec<RawEvent>,
    pub fid_objno: u64,
    pub fid_generation: u64,
}

impl fmt::Display for DyldUuidMapB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DYLD_uuid_map_b, fid_objno: {}, fid_generation: {:#x}",
            self.fid_objno, self.fid_generation
        )
    }
}

#[derive(Debug)]
pub struct DyldUuidSharedCacheA {
    pub ktraces: Vec<RawEvent>,
    pub uuid: Uuid,
    pub load_addr: u64,
    pub fsid: u64,
}

impl fmt::Display for DyldUuidSharedCacheA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DYLD_uuid_shared_cache_a, uuid: \"{}\", load_addr: {:#x}, fsid: {:#x}",
            self.uuid, self.load_addr, self.fsid
        )
    }
}

#[derive(Debug)]
pub struct DyldUuidSharedCacheB {
    pub ktraces: Vec<RawEvent>,
    pub fid_objno: u64,
    pub fid_generation: u64,
}

impl fmt::Display for DyldUuidSharedCacheB {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DYLD_uuid_shared_cache_b, fid_objno: {}, fid_generation: {:#x}",
            self.fid_objno, self.fid_generation
        )
    }
}

/// Grouped image mappings observed while an executable launches. Uuid
/// maps are collected from the bracket and sorted by load address so
/// callers can binary search them.
#[derive(Debug)]
pub struct DyldLaunchExecutable {
    pub ktraces: Vec<RawEvent>,
    pub main_executable_mh: u64,
    pub uuid_map_a: Vec<DyldUuidMapA>,
}

impl fmt::Display for DyldLaunchExecutable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DBG_DYLD_TIMING_LAUNCH_EXECUTABLE, main_executable_mh: {:#x}",
            self.main_executable_mh
        )
    }
}

#[derive(Debug)]
pub struct DyldFuncForAddImage {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub func: u64,
}

impl fmt::Display for DyldFuncForAddImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DBG_DYLD_TIMING_FUNC_FOR_ADD_IMAGE, addr: {:#x}, func: {:#x}",
            self.addr, self.func
        )
    }
}

#[derive(Debug)]
pub struct DyldBootstrapStart {
    pub ktraces: Vec<RawEvent>,
}

impl fmt::Display for DyldBootstrapStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DBG_DYLD_TIMING_BOOTSTRAP_START")
    }
}

#[derive(Debug)]
pub struct Dlopen {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub flags: RtldFlags,
    pub handle: u64,
}

impl fmt::Display for Dlopen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dlopen(\"{}\", {}), handle: {:#x}",
            self.path, self.flags, self.handle
        )
    }
}

#[derive(Debug)]
pub struct DlopenPreflight {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub compatible: bool,
}

impl fmt::Display for DlopenPreflight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dlopen_preflight(\"{}\"), compatible: {}",
            self.path, self.compatible
        )
    }
}

#[derive(Debug)]
pub struct Dlclose {
    pub ktraces: Vec<RawEvent>,
    pub handle: u64,
}

impl fmt::Display for Dlclose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dlclose({:#x})", self.handle)
    }
}

#[derive(Debug)]
pub struct Dlsym {
    pub ktraces: Vec<RawEvent>,
    pub handle: u64,
    pub symbol: String,
    pub address: u64,
}

impl fmt::Display for Dlsym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dlsym({:#x}, \"{}\"), address: {:#x}",
            self.handle, self.symbol, self.address
        )
    }
}

#[derive(Debug)]
pub struct Dladdr {
    pub ktraces: Vec<RawEvent>,
    pub addr: u64,
    pub ret: u64,
}

impl fmt::Display for Dladdr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dladdr({:#x}), ret: {}", self.addr, self.ret)
    }
}

pub(super) fn uuid_map_a(events: Vec<RawEvent>) -> DyldUuidMapA {
    let event = events[0];
    DyldUuidMapA {
        ktraces: events,
        uuid: Uuid::from_bytes(&event.data),
        load_addr: event.args[2],
        fsid: event.args[3],
    }
}

pub(super) fn uuid_map_b(events: Vec<RawEvent>) -> DyldUuidMapB {
    let arg = events[0].args[0];
    DyldUuidMapB {
        ktraces: events,
        fid_objno: arg & 0xffffffff,
        fid_generation: arg >> 32,
    }
}

pub(super) fn uuid_shared_cache_a(events: Vec<RawEvent>) -> DyldUuidSharedCacheA {
    let event = events[0];
    DyldUuidSharedCacheA {
        ktraces: events,
        uuid: Uuid::from_bytes(&event.data),
        load_addr: event.args[2],
        fsid: event.args[3],
    }
}

pub(super) fn uuid_shared_cache_b(events: Vec<RawEvent>) -> DyldUuidSharedCacheB {
    let arg = events[0].args[0];
    DyldUuidSharedCacheB {
        ktraces: events,
        fid_objno: arg & 0xffffffff,
        fid_generation: arg >> 32,
    }
}

pub(super) fn launch_executable(
    parser: &TracesParser,
    events: Vec<RawEvent>,
) -> DyldLaunchExecutable {
    let mut map_a: Vec<DyldUuidMapA> = events
        .iter()
        .filter(|e| {
            parser.trace_codes.get(&e.eventid).map(String::as_str) == Some("DYLD_uuid_map_a")
        })
        .map(|e| uuid_map_a(vec![*e]))
        .collect();
    map_a.extend(
        events
            .iter()
            .filter(|e| {
                parser.trace_codes.get(&e.eventid).map(String::as_str)
                    == Some("DYLD_uuid_shared_cache_a")
            })
            .map(|e| {
                let cache = uuid_shared_cache_a(vec![*e]);
                DyldUuidMapA {
                    ktraces: cache.ktraces,
                    uuid: cache.uuid,
                    load_addr: cache.load_addr,
                    fsid: cache.fsid,
                }
            }),
    );
    map_a.sort_by_key(|m| m.load_addr);
    DyldLaunchExecutable {
        main_executable_mh: events[0].args[1],
        ktraces: events,
        uuid_map_a: map_a,
    }
}

pub(super) fn func_for_add_image(events: Vec<RawEvent>) -> DyldFuncForAddImage {
    let args = events[0].args;
    DyldFuncForAddImage {
        ktraces: events,
        addr: args[1],
        func: args[2],
    }
}

pub(super) fn bootstrap_start(events: Vec<RawEvent>) -> DyldBootstrapStart {
    DyldBootstrapStart { ktraces: events }
}

pub(super) fn dlopen(parser: &TracesParser, events: Vec<RawEvent>) -> Dlopen {
    let args = events[0].args;
    let path = if args[1] != 0 {
        parser.global_strings.get(&args[1]).cloned().unwrap_or_default()
    } else {
        String::new()
    };
    Dlopen {
        path,
        flags: RtldFlags::from_bits_truncate(args[2]),
        handle: events[events.len() - 1].args[1],
        ktraces: events,
    }
}

pub(super) fn dlopen_preflight(parser: &TracesParser, events: Vec<RawEvent>) -> DlopenPreflight {
    DlopenPreflight {
        path: parser
            .global_strings
            .get(&events[0].args[1])
            .cloned()
            .unwrap_or_default(),
        compatible: events[events.len() - 1].args[1] != 0,
        ktraces: events,
    }
}

pub(super) fn dlclose(events: Vec<RawEvent>) -> Dlclose {
    Dlclose {
        handle: events[0].args[1],
        ktraces: events,
    }
}

pub(super) fn dlsym(parser: &TracesParser, events: Vec<RawEvent>) -> Dlsym {
    let args = events[0].args;
    Dlsym {
        handle: args[1],
        symbol: parser.global_strings.get(&args[2]).cloned().unwrap_or_default(),
        address: events[events.len() - 1].args[1],
        ktraces: events,
    }
}

pub(super) fn dladdr(events: Vec<RawEvent>) -> Dladdr {
    Dladdr {
        addr: events[0].args[1],
        ret: events[events.len() - 1].args[1],
        ktraces: events,
    }
}
