//! Structured log records extracted from a trace archive.
//!
//! Log events arrive as sparse keyed dictionaries whose string-valued
//! fields are indices into a shared string table. A missing key means
//! the field's default, never an error.

use std::fmt;

use plist::Dictionary;

/// Level of an os_log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsLogType {
    Default = 0,
    Info = 1,
    Debug = 2,
    Error = 0x10,
    Fault = 0x11,
}

impl OsLogType {
    pub fn from_u64(value: u64) -> Option<OsLogType> {
        match value {
            0 => Some(OsLogType::Default),
            1 => Some(OsLogType::Info),
            2 => Some(OsLogType::Debug),
            0x10 => Some(OsLogType::Error),
            0x11 => Some(OsLogType::Fault),
            _ => None,
        }
    }
}

/// Top byte of a firehose tracepoint identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirehoseNamespace {
    Unknown = 0,
    Activity = 2,
    Trace = 3,
    Log = 4,
    Metadata = 5,
    Signpost = 6,
    Loss = 7,
}

impl FirehoseNamespace {
    pub fn from_u8(value: u8) -> FirehoseNamespace {
        match value {
            2 => FirehoseNamespace::Activity,
            3 => FirehoseNamespace::Trace,
            4 => FirehoseNamespace::Log,
            5 => FirehoseNamespace::Metadata,
            6 => FirehoseNamespace::Signpost,
            7 => FirehoseNamespace::Loss,
            _ => FirehoseNamespace::Unknown,
        }
    }
}

/// How a tracepoint's program counter is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcStyle {
    None = 0,
    MainExe = 1,
    SharedCache = 2,
    MainPlugin = 3,
    Absolute = 4,
    UuidRelative = 5,
    LargeSharedCache = 6,
    Unused7 = 7,
}

impl PcStyle {
    fn from_bits(value: u8) -> PcStyle {
        match value & 7 {
            0 => PcStyle::None,
            1 => PcStyle::MainExe,
            2 => PcStyle::SharedCache,
            3 => PcStyle::MainPlugin,
            4 => PcStyle::Absolute,
            5 => PcStyle::UuidRelative,
            6 => PcStyle::LargeSharedCache,
            _ => PcStyle::Unused7,
        }
    }
}

/// Unpacked firehose tracepoint identifier.
///
/// Wire layout, little endian: namespace byte, type byte, a packed flags
/// byte (two padding bits, large-offset flag, unique-pid flag, a 3-bit pc
/// style, current-aid flag, most significant bit first), a second flags
/// byte whose meaning depends on the namespace, then a 32-bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceIdentifier {
    pub namespace: FirehoseNamespace,
    pub tracepoint_type: u8,
    pub has_large_offset: bool,
    pub has_unique_pid: bool,
    pub pc_style: PcStyle,
    pub has_current_aid: bool,
    pub flags: u8,
    pub code: u32,
}

impl TraceIdentifier {
    pub fn from_u64(value: u64) -> TraceIdentifier {
        let bytes = value.to_le_bytes();
        let trace_flags = bytes[2];
        TraceIdentifier {
            namespace: FirehoseNamespace::from_u8(bytes[0]),
            tracepoint_type: bytes[1],
            has_large_offset: trace_flags & 0x20 != 0,
            has_unique_pid: trace_flags & 0x10 != 0,
            pc_style: PcStyle::from_bits(trace_flags >> 1),
            has_current_aid: trace_flags & 0x01 != 0,
            flags: bytes[3],
            code: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnixDate {
    pub secs: u64,
    pub usecs: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnixTimezone {
    pub minutes_west: i64,
    pub dst_time: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LossCount {
    pub count: u64,
    pub unknown: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacktraceFrame {
    pub image_uuid: Vec<u8>,
    pub image_offset: u64,
}

/// Representation of one format argument, either resolved through the
/// string table or carried as a raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectRepresentation {
    String(String),
    Value(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholder {
    pub raw_string: Option<String>,
    pub tokens: Vec<String>,
    pub type_namespace: Option<String>,
    pub value_type: Option<String>,
    pub width: u64,
    pub precision: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentArg {
    pub availability: Option<u64>,
    pub privacy: Option<u64>,
    pub category: u64,
    pub scalar_category: Option<u64>,
    pub scalar_type: Option<u64>,
    pub object_representation: Option<ObjectRepresentation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedSegment {
    pub literal_prefix: Option<String>,
    pub placeholder: Option<Placeholder>,
    pub arg: Option<SegmentArg>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecomposedMessage {
    pub placeholder_count: u64,
    pub state: u64,
    pub segments: Vec<DecomposedSegment>,
}

/// One structured log event, built from a sparse keyed dictionary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsLogEvent {
    pub composed_message: String,
    pub event_type: String,
    pub size: u64,
    pub thread_identifier: u64,
    pub continuous_nanoseconds_since_boot: u64,
    pub mach_continuous_timestamp: u64,
    pub boot_uuid: Vec<u8>,
    pub process_image_uuid: Vec<u8>,
    pub unix_date: UnixDate,
    pub unix_timezone: UnixTimezone,
    pub process_image_path: String,
    pub process: String,
    pub sender_image_path: String,
    pub sender: String,
    pub sender_image_offset: u64,
    pub sender_image_uuid: Vec<u8>,
    pub log_type: Option<OsLogType>,
    pub time_to_live: u64,
    pub process_identifier: u64,
    pub subsystem: String,
    pub category: String,
    pub format_string: String,
    pub activity_identifier: u64,
    pub parent_activity_identifier: u64,
    pub transition_activity_identifier: u64,
    pub decomposed_message: Option<DecomposedMessage>,
    pub trace_identifier: Option<TraceIdentifier>,
    pub creator_activity_identifier: u64,
    pub creator_process_unique_identifier: u64,
    pub signpost_identifier: u64,
    pub signpost_name: String,
    pub signpost_type: u64,
    pub signpost_scope: u64,
    pub loss_start_mach_continuous_timestamp: u64,
    pub loss_end_mach_continuous_timestamp: u64,
    pub loss_start_unix_date: Option<UnixDate>,
    pub loss_end_unix_date: Option<UnixDate>,
    pub loss_start_unix_timezone: Option<UnixTimezone>,
    pub loss_end_unix_timezone: Option<UnixTimezone>,
    pub loss_count: Option<LossCount>,
    pub backtrace: Vec<BacktraceFrame>,
}

impl OsLogEvent {
    /// Build an event from its raw dictionary. String-valued fields are
    /// indices into `log_strings`; anything missing or out of range
    /// defaults rather than failing.
    pub fn from_dictionary(mut event: Dictionary, log_strings: &[String]) -> OsLogEvent {
        OsLogEvent {
            composed_message: take_str(&mut event, "cm", log_strings),
            event_type: take_string(&mut event, "t"),
            size: take_u64(&mut event, "s"),
            thread_identifier: take_u64(&mut event, "tid"),
            continuous_nanoseconds_since_boot: take_u64(&mut event, "ns"),
            mach_continuous_timestamp: take_u64(&mut event, "mct"),
            boot_uuid: take_data(&mut event, "b"),
            process_image_uuid: take_data(&mut event, "piu"),
            unix_date: take_dict(&mut event, "ud").map(unix_date).unwrap_or_default(),
            unix_timezone: take_dict(&mut event, "utz")
                .map(unix_timezone)
                .unwrap_or_default(),
            trace_identifier: take_opt_u64(&mut event, "ti").map(TraceIdentifier::from_u64),
            process_image_path: take_str(&mut event, "pip", log_strings),
            process: take_str(&mut event, "p", log_strings),
            sender_image_path: take_str(&mut event, "sip", log_strings),
            sender: take_str(&mut event, "send", log_strings),
            sender_image_offset: take_u64(&mut event, "sio"),
            sender_image_uuid: take_data(&mut event, "siu"),
            log_type: take_opt_u64(&mut event, "lt").and_then(OsLogType::from_u64),
            time_to_live: take_u64(&mut event, "ttl"),
            process_identifier: take_u64(&mut event, "pid"),
            activity_identifier: take_u64(&mut event, "aid"),
            parent_activity_identifier: take_u64(&mut event, "paid"),
            transition_activity_identifier: take_u64(&mut event, "tai"),
            subsystem: take_str(&mut event, "sub", log_strings),
            category: take_str(&mut event, "cat", log_strings),
            format_string: take_str(&mut event, "f", log_strings),
            creator_activity_identifier: take_u64(&mut event, "cai"),
            creator_process_unique_identifier: take_u64(&mut event, "cpui"),
            signpost_identifier: take_u64(&mut event, "si"),
            signpost_name: take_str(&mut event, "sn", log_strings),
            signpost_type: take_u64(&mut event, "st"),
            signpost_scope: take_u64(&mut event, "ss"),
            loss_start_mach_continuous_timestamp: take_u64(&mut event, "lsmct"),
            loss_end_mach_continuous_timestamp: take_u64(&mut event, "lemct"),
            loss_start_unix_date: take_dict(&mut event, "lsud").map(unix_date),
            loss_end_unix_date: take_dict(&mut event, "leud").map(unix_date),
            loss_start_unix_timezone: take_dict(&mut event, "lsutz").map(unix_timezone),
            loss_end_unix_timezone: take_dict(&mut event, "leutz").map(unix_timezone),
            loss_count: take_dict(&mut event, "lc").map(|lc| LossCount {
                count: dict_u64(&lc, "c"),
                unknown: dict_u64(&lc, "s"),
            }),
            backtrace: backtrace(&mut event),
            decomposed_message: take_dict(&mut event, "dm")
                .map(|dm| decomposed_message(dm, log_strings)),
        }
    }
}

impl fmt::Display for OsLogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{{}}}[{}] {}",
            self.process, self.sender, self.process_identifier, self.composed_message
        )
    }
}

fn unix_date(dict: Dictionary) -> UnixDate {
    UnixDate {
        secs: dict_u64(&dict, "sec"),
        usecs: dict_u64(&dict, "usec"),
    }
}

fn unix_timezone(dict: Dictionary) -> UnixTimezone {
    UnixTimezone {
        minutes_west: dict_i64(&dict, "mw"),
        dst_time: dict_i64(&dict, "dt"),
    }
}

fn backtrace(event: &mut Dictionary) -> Vec<BacktraceFrame> {
    let levels = match event.remove("bt").and_then(|v| v.into_array()) {
        Some(levels) => levels,
        None => return Vec::new(),
    };
    levels
        .into_iter()
        .filter_map(|level| level.into_dictionary())
        .map(|mut level| BacktraceFrame {
            image_uuid: take_data(&mut level, "iu"),
            image_offset: take_u64(&mut level, "io"),
        })
        .collect()
}

fn decomposed_message(dict: Dictionary, log_strings: &[String]) -> DecomposedMessage {
    let placeholder_count = dict_u64(&dict, "pc");
    let state = dict_u64(&dict, "s");
    let segments = if placeholder_count == 0 {
        Vec::new()
    } else {
        dict.get("seg")
            .and_then(plist::Value::as_array)
            .map(|segments| {
                segments
                    .iter()
                    .filter_map(plist::Value::as_dictionary)
                    .map(|seg| decomposed_segment(seg, log_strings))
                    .collect()
            })
            .unwrap_or_default()
    };
    DecomposedMessage {
        placeholder_count,
        state,
        segments,
    }
}

fn decomposed_segment(segment: &Dictionary, log_strings: &[String]) -> DecomposedSegment {
    let mut parsed = DecomposedSegment::default();
    if let Some(index) = segment.get("lp").and_then(plist::Value::as_unsigned_integer) {
        parsed.literal_prefix = Some(string_at(log_strings, index));
    }
    if let Some(placeholder) = segment.get("p").and_then(plist::Value::as_dictionary) {
        parsed.placeholder = Some(Placeholder {
            raw_string: dict_opt_u64(placeholder, "rs").map(|i| string_at(log_strings, i)),
            tokens: placeholder
                .get("t")
                .and_then(plist::Value::as_array)
                .map(|tokens| {
                    tokens
                        .iter()
                        .filter_map(plist::Value::as_unsigned_integer)
                        .map(|i| string_at(log_strings, i))
                        .collect()
                })
                .unwrap_or_default(),
            type_namespace: dict_opt_u64(placeholder, "tn").map(|i| string_at(log_strings, i)),
            value_type: dict_opt_u64(placeholder, "ty").map(|i| string_at(log_strings, i)),
            width: dict_u64(placeholder, "w"),
            precision: dict_u64(placeholder, "p"),
        });
    }
    if let Some(arg) = segment.get("a").and_then(plist::Value::as_dictionary) {
        let availability = dict_opt_u64(arg, "a");
        let category = dict_u64(arg, "c");
        let mut parsed_arg = SegmentArg {
            availability,
            privacy: dict_opt_u64(arg, "p"),
            category,
            scalar_category: None,
            scalar_type: None,
            object_representation: None,
        };
        if category == 1 {
            parsed_arg.scalar_category = dict_opt_u64(arg, "sc");
            parsed_arg.scalar_type = dict_opt_u64(arg, "st");
        }
        if availability.is_none() || availability == Some(3) {
            if let Some(or) = dict_opt_u64(arg, "or") {
                parsed_arg.object_representation = Some(if category == 2 {
                    ObjectRepresentation::String(string_at(log_strings, or))
                } else {
                    ObjectRepresentation::Value(or)
                });
            }
        }
        parsed.arg = Some(parsed_arg);
    }
    parsed
}

fn string_at(log_strings: &[String], index: u64) -> String {
    log_strings
        .get(index as usize)
        .cloned()
        .unwrap_or_default()
}

fn take_str(event: &mut Dictionary, key: &str, log_strings: &[String]) -> String {
    take_opt_u64(event, key)
        .map(|index| string_at(log_strings, index))
        .unwrap_or_default()
}

fn take_string(event: &mut Dictionary, key: &str) -> String {
    event
        .remove(key)
        .and_then(|v| v.into_string())
        .unwrap_or_default()
}

fn take_u64(event: &mut Dictionary, key: &str) -> u64 {
    take_opt_u64(event, key).unwrap_or_default()
}

fn take_opt_u64(event: &mut Dictionary, key: &str) -> Option<u64> {
    event.remove(key).and_then(|v| v.as_unsigned_integer())
}

fn take_data(event: &mut Dictionary, key: &str) -> Vec<u8> {
    event
        .remove(key)
        .and_then(|v| v.into_data())
        .unwrap_or_default()
}

fn take_dict(event: &mut Dictionary, key: &str) -> Option<Dictionary> {
    event.remove(key).and_then(|v| v.into_dictionary())
}

fn dict_u64(dict: &Dictionary, key: &str) -> u64 {
    dict_opt_u64(dict, key).unwrap_or_default()
}

fn dict_opt_u64(dict: &Dictionary, key: &str) -> Option<u64> {
    dict.get(key).and_then(plist::Value::as_unsigned_integer)
}

fn dict_i64(dict: &Dictionary, key: &str) -> i64 {
    dict.get(key)
        .and_then(plist::Value::as_signed_integer)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;
    use plist::Value;

    fn strings() -> Vec<String> {
        vec![
            "powerd".into(),
            "IOKit".into(),
            "Battery at %d%%".into(),
            "com.apple.powerd".into(),
            "battery".into(),
        ]
    }

    fn base_event() -> Dictionary {
        let mut event = Dictionary::new();
        event.insert("cm".into(), Value::from(2u64));
        event.insert("t".into(), Value::from("logEvent"));
        event.insert("s".into(), Value::from(48u64));
        event.insert("tid".into(), Value::from(0x1d03u64));
        event.insert("ns".into(), Value::from(123456789u64));
        event.insert("mct".into(), Value::from(987654u64));
        event.insert("b".into(), Value::Data(vec![0xaa; 16]));
        event.insert("piu".into(), Value::Data(vec![0xbb; 16]));
        let mut ud = Dictionary::new();
        ud.insert("sec".into(), Value::from(1_600_000_000u64));
        ud.insert("usec".into(), Value::from(250_000u64));
        event.insert("ud".into(), Value::Dictionary(ud));
        let mut utz = Dictionary::new();
        utz.insert("mw".into(), Value::from(-120i64));
        utz.insert("dt".into(), Value::from(1i64));
        event.insert("utz".into(), Value::Dictionary(utz));
        event
    }

    #[test]
    fn required_fields_and_string_table() {
        let mut event = base_event();
        event.insert("p".into(), Value::from(0u64));
        event.insert("sub".into(), Value::from(3u64));
        event.insert("cat".into(), Value::from(4u64));
        event.insert("send".into(), Value::from(1u64));
        event.insert("pid".into(), Value::from(88u64));
        event.insert("lt".into(), Value::from(0x10u64));

        let parsed = OsLogEvent::from_dictionary(event, &strings());
        assert_eq!(parsed.composed_message, "Battery at %d%%");
        assert_eq!(parsed.event_type, "logEvent");
        assert_eq!(parsed.thread_identifier, 0x1d03);
        assert_eq!(parsed.boot_uuid, vec![0xaa; 16]);
        assert_eq!(
            parsed.unix_date,
            UnixDate {
                secs: 1_600_000_000,
                usecs: 250_000
            }
        );
        assert_eq!(
            parsed.unix_timezone,
            UnixTimezone {
                minutes_west: -120,
                dst_time: 1
            }
        );
        assert_eq!(parsed.process, "powerd");
        assert_eq!(parsed.sender, "IOKit");
        assert_eq!(parsed.subsystem, "com.apple.powerd");
        assert_eq!(parsed.category, "battery");
        assert_eq!(parsed.log_type, Some(OsLogType::Error));
        assert_eq!(
            parsed.to_string(),
            "powerd{IOKit}[88] Battery at %d%%"
        );
    }

    #[test]
    fn missing_keys_default() {
        let parsed = OsLogEvent::from_dictionary(Dictionary::new(), &strings());
        assert_eq!(parsed.composed_message, "");
        assert_eq!(parsed.process_identifier, 0);
        assert_eq!(parsed.log_type, None);
        assert_eq!(parsed.trace_identifier, None);
        assert!(parsed.backtrace.is_empty());
        assert_eq!(parsed.to_string(), "{}[0] ");
    }

    #[test]
    fn trace_identifier_bit_unpacking() {
        let raw = u64::from_le_bytes([4, 2, 0x2a, 0x03, 0xef, 0xbe, 0xad, 0xde]);
        let id = TraceIdentifier::from_u64(raw);
        assert_eq!(id.namespace, FirehoseNamespace::Log);
        assert_eq!(id.tracepoint_type, 2);
        assert!(id.has_large_offset);
        assert!(!id.has_unique_pid);
        assert_eq!(id.pc_style, PcStyle::UuidRelative);
        assert!(!id.has_current_aid);
        assert_eq!(id.flags, 3);
        assert_eq!(id.code, 0xdeadbeef);
    }

    #[test]
    fn backtrace_and_loss_sections() {
        let mut event = base_event();
        let mut frame = Dictionary::new();
        frame.insert("iu".into(), Value::Data(vec![1; 16]));
        frame.insert("io".into(), Value::from(0x4000u64));
        event.insert("bt".into(), Value::Array(vec![Value::Dictionary(frame)]));
        let mut lc = Dictionary::new();
        lc.insert("c".into(), Value::from(12u64));
        lc.insert("s".into(), Value::from(1u64));
        event.insert("lc".into(), Value::Dictionary(lc));

        let parsed = OsLogEvent::from_dictionary(event, &strings());
        assert_eq!(
            parsed.backtrace,
            vec![BacktraceFrame {
                image_uuid: vec![1; 16],
                image_offset: 0x4000
            }]
        );
        assert_eq!(
            parsed.loss_count,
            Some(LossCount {
                count: 12,
                unknown: 1
            })
        );
    }

    #[test]
    fn decomposed_message_segments() {
        let mut event = base_event();
        let mut placeholder = Dictionary::new();
        placeholder.insert("rs".into(), Value::from(2u64));
        placeholder.insert("w".into(), Value::from(8u64));
        placeholder.insert("p".into(), Value::from(0u64));
        let mut arg = Dictionary::new();
        arg.insert("c".into(), Value::from(1u64));
        arg.insert("sc".into(), Value::from(2u64));
        arg.insert("st".into(), Value::from(4u64));
        arg.insert("or".into(), Value::from(97u64));
        let mut segment = Dictionary::new();
        segment.insert("lp".into(), Value::from(4u64));
        segment.insert("p".into(), Value::Dictionary(placeholder));
        segment.insert("a".into(), Value::Dictionary(arg));
        let mut dm = Dictionary::new();
        dm.insert("pc".into(), Value::from(1u64));
        dm.insert("s".into(), Value::from(0u64));
        dm.insert("seg".into(), Value::Array(vec![Value::Dictionary(segment)]));
        event.insert("dm".into(), Value::Dictionary(dm));

        let parsed = OsLogEvent::from_dictionary(event, &strings());
        let dm = parsed.decomposed_message.unwrap();
        assert_eq!(dm.placeholder_count, 1);
        assert_eq!(dm.segments.len(), 1);
        let segment = &dm.segments[0];
        assert_eq!(segment.literal_prefix.as_deref(), Some("battery"));
        let placeholder = segment.placeholder.as_ref().unwrap();
        assert_eq!(placeholder.raw_string.as_deref(), Some("Battery at %d%%"));
        assert_eq!(placeholder.width, 8);
        let arg = segment.arg.as_ref().unwrap();
        assert_eq!(arg.category, 1);
        assert_eq!(arg.scalar_category, Some(2));
        assert_eq!(
            arg.object_representation,
            Some(ObjectRepresentation::Value(97))
        );
    }

    #[test]
    fn zero_placeholders_skip_segments() {
        let mut event = base_event();
        let mut dm = Dictionary::new();
        dm.insert("pc".into(), Value::from(0u64));
        dm.insert("s".into(), Value::from(2u64));
        event.insert("dm".into(), Value::Dictionary(dm));
        let parsed = OsLogEvent::from_dictionary(event, &strings());
        let dm = parsed.decomposed_message.unwrap();
        assert_eq!(dm.state, 2);
        assert!(dm.segments.is_empty());
    }
}
