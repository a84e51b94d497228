use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Mapping between an event id and its name.
pub type TraceCodes = HashMap<u32, String>;

const DEFAULT_TRACE_CODES: &str = include_str!("../resources/trace.codes");

/// Parse a trace codes listing.
///
/// Each line starts with a hexadecimal event id and a name, separated by
/// whitespace. Anything after the name (parameter annotations and the
/// like) is ignored, as are blank lines. When the same id appears twice
/// the later line wins.
pub fn from_trace_codes_text(codes_text: &str) -> TraceCodes {
    let mut codes = TraceCodes::new();
    for line in codes_text.lines() {
        let mut fields = line.split_whitespace();
        let (Some(code), Some(name)) = (fields.next(), fields.next()) else {
            continue;
        };
        let code = code.strip_prefix("0x").unwrap_or(code);
        if let Ok(code) = u32::from_str_radix(code, 16) {
            codes.insert(code, name.to_string());
        }
    }
    codes
}

/// Read trace codes from a file.
pub fn from_trace_codes_file(path: impl AsRef<Path>) -> io::Result<TraceCodes> {
    Ok(from_trace_codes_text(&fs::read_to_string(path)?))
}

/// The trace codes listing bundled with this crate.
pub fn default_trace_codes() -> TraceCodes {
    from_trace_codes_text(DEFAULT_TRACE_CODES)
}

#[cfg(test)]
mod test {
    use super::{default_trace_codes, from_trace_codes_text};

    #[test]
    fn single_line() {
        let codes = from_trace_codes_text("0x40c0548\tBSC_stat64");
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&0x40c0548], "BSC_stat64");
    }

    #[test]
    fn trailing_annotations_are_ignored() {
        let codes = from_trace_codes_text(
            "0x80010068 ASPCORE_PUSH_PAGES \t\t#Params: flow band page size\t\t#Matchby: Arg1",
        );
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&0x80010068], "ASPCORE_PUSH_PAGES");
    }

    #[test]
    fn multiple_lines() {
        let codes =
            from_trace_codes_text("0x40c0548\tBSC_stat64\n0x40c054c\tBSC_sys_fstat64");
        assert_eq!(codes.len(), 2);
        assert_eq!(codes[&0x40c0548], "BSC_stat64");
        assert_eq!(codes[&0x40c054c], "BSC_sys_fstat64");
    }

    #[test]
    fn later_line_wins() {
        let codes = from_trace_codes_text("0x10 FIRST\n0x10 SECOND");
        assert_eq!(codes[&0x10], "SECOND");
    }

    #[test]
    fn bundled_codes_cover_the_dispatched_names() {
        let codes = default_trace_codes();
        assert_eq!(codes[&0x40c000c], "BSC_read");
        assert_eq!(codes[&0x1400000], "MACH_SCHED");
        assert_eq!(codes[&0x3010090], "VFS_LOOKUP");
        assert_eq!(codes[&0x7010000], "TRACE_STRING_GLOBAL");
    }

    // Ids as captured from a device, not the subclass layout one might
    // guess from the headers.
    #[test]
    fn bundled_codes_match_captured_event_ids() {
        let codes = default_trace_codes();
        assert_eq!(codes[&0x25000000], "PERF_Event");
        assert_eq!(codes[&0x25010004], "PERF_THD_Data");
        assert_eq!(codes[&0x25010014], "PERF_THD_CSwitch");
        assert_eq!(codes[&0x25020010], "PERF_STK_UData");
        assert_eq!(codes[&0x25020018], "PERF_STK_UHdr");
        assert_eq!(codes[&0x1f050000], "DYLD_uuid_map_a");
        assert_eq!(codes[&0x1f050028], "DYLD_uuid_shared_cache_a");
        assert_eq!(codes[&0x1f070004], "DBG_DYLD_TIMING_LAUNCH_EXECUTABLE");
        assert_eq!(codes[&0x1f070018], "DBG_DYLD_TIMING_FUNC_FOR_ADD_IMAGE");
        assert_eq!(codes[&0x1f080000], "DBG_DYLD_TIMING_DLOPEN");
        assert_eq!(codes[&0x1f080010], "DBG_DYLD_TIMING_DLADDR");
        assert_eq!(
            codes[&0x35100024],
            "TURNSTILE_thread_update_turnstile_promotion_locked"
        );
        assert_eq!(
            codes[&0x3510002c],
            "TURNSTILE_thread_not_waiting_on_turnstile"
        );
        assert_eq!(codes[&0x40c0018], "BSC_sys_close");
    }
}
