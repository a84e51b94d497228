use byteorder::{ByteOrder, LittleEndian};

/// Size in bytes of one kd_buf record on disk.
pub const KD_BUF_SIZE: usize = 64;

pub const KDBG_EVENTID_MASK: u32 = 0xffff_fffc;
pub const KDBG_FUNC_MASK: u32 = 0x0000_0003;

/// The event's role in a start/end bracket, from the low two bits of the
/// debug id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncQualifier {
    None = 0,
    Start = 1,
    End = 2,
    /// Start and end in one record.
    All = 3,
}

impl FuncQualifier {
    pub fn from_debugid(debugid: u32) -> Self {
        match debugid & KDBG_FUNC_MASK {
            0 => FuncQualifier::None,
            1 => FuncQualifier::Start,
            2 => FuncQualifier::End,
            _ => FuncQualifier::All,
        }
    }

    /// True for `Start` and `All`.
    pub fn has_start(self) -> bool {
        self as u32 & FuncQualifier::Start as u32 != 0
    }

    /// True for `End` and `All`.
    pub fn has_end(self) -> bool {
        self as u32 & FuncQualifier::End as u32 != 0
    }
}

/// One kd_buf record, decoded losslessly.
///
/// The 32 argument bytes are kept both as raw data (string and path
/// fragments are carried this way) and as four little-endian u64 values
/// (every fixed-slot decoder reads these).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub timestamp: u64,
    pub data: [u8; 32],
    pub args: [u64; 4],
    pub tid: u64,
    pub debugid: u32,
    pub eventid: u32,
    pub qualifier: FuncQualifier,
    pub cpuid: u32,
}

impl RawEvent {
    /// Decode one on-disk kd_buf record. Total: any 64 bytes decode to
    /// something, the container reader guarantees block alignment.
    pub fn from_kd_buf(buf: &[u8; KD_BUF_SIZE]) -> Self {
        let timestamp = LittleEndian::read_u64(&buf[0..8]);
        let mut data = [0u8; 32];
        data.copy_from_slice(&buf[8..40]);
        let mut args = [0u64; 4];
        LittleEndian::read_u64_into(&data, &mut args);
        let tid = LittleEndian::read_u64(&buf[40..48]);
        let debugid = LittleEndian::read_u32(&buf[48..52]);
        let cpuid = LittleEndian::read_u32(&buf[52..56]);
        RawEvent {
            timestamp,
            data,
            args,
            tid,
            debugid,
            eventid: debugid & KDBG_EVENTID_MASK,
            qualifier: FuncQualifier::from_debugid(debugid),
            cpuid,
        }
    }

    /// The kdebug class of this event (top byte of the event id).
    pub fn class(&self) -> u8 {
        (self.eventid >> 24) as u8
    }
}

#[cfg(test)]
mod test {
    use super::{FuncQualifier, RawEvent};

    #[test]
    fn decodes_record_fields() {
        let mut buf = [0u8; 64];
        buf[0..8].copy_from_slice(&0x3eb13318ff38bu64.to_le_bytes());
        buf[8..40].copy_from_slice(b"ework_BusinessChat-7.0.1-py2.py3");
        buf[40..48].copy_from_slice(&8932062u64.to_le_bytes());
        buf[48..52].copy_from_slice(&50397328u32.to_le_bytes());
        buf[52..56].copy_from_slice(&1u32.to_le_bytes());

        let event = RawEvent::from_kd_buf(&buf);
        assert_eq!(event.timestamp, 0x3eb13318ff38b);
        assert_eq!(&event.data, b"ework_BusinessChat-7.0.1-py2.py3");
        assert_eq!(
            event.args,
            [
                0x75425f6b726f7765,
                0x68437373656e6973,
                0x312e302e372d7461,
                0x3379702e3279702d
            ]
        );
        assert_eq!(event.tid, 8932062);
        assert_eq!(event.debugid, 50397328);
        assert_eq!(event.eventid, 50397328);
        assert_eq!(event.qualifier, FuncQualifier::None);
        assert_eq!(event.cpuid, 1);
    }

    #[test]
    fn all_zeroes() {
        let event = RawEvent::from_kd_buf(&[0u8; 64]);
        assert_eq!(event.timestamp, 0);
        assert_eq!(event.args, [0; 4]);
        assert_eq!(event.tid, 0);
        assert_eq!(event.eventid, 0);
        assert_eq!(event.qualifier, FuncQualifier::None);
    }

    #[test]
    fn all_ones_splits_eventid_and_qualifier() {
        let event = RawEvent::from_kd_buf(&[0xffu8; 64]);
        assert_eq!(event.timestamp, u64::MAX);
        assert_eq!(event.args, [u64::MAX; 4]);
        assert_eq!(event.tid, u64::MAX);
        assert_eq!(event.debugid, 0xffff_ffff);
        assert_eq!(event.eventid, 0xffff_fffc);
        assert_eq!(event.qualifier, FuncQualifier::All);
    }

    #[test]
    fn eventid_is_always_a_multiple_of_four() {
        for debugid in [0u32, 1, 2, 3, 0x40c000d, 0x40c000e, 0xffff_ffff] {
            let mut buf = [0u8; 64];
            buf[48..52].copy_from_slice(&debugid.to_le_bytes());
            let event = RawEvent::from_kd_buf(&buf);
            assert_eq!(event.eventid % 4, 0);
            assert_eq!(event.eventid, debugid & 0xffff_fffc);
            assert_eq!(event.qualifier as u32, debugid & 0x3);
        }
    }
}
