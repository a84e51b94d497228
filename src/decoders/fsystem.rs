use std::fmt;

use crate::kd_buf::RawEvent;
use crate::traces::TracesParser;

#[derive(Debug)]
pub struct VfsLookup {
    pub ktraces: Vec<RawEvent>,
    pub path: String,
    pub vnode_id: u64,
}

impl fmt::Display for VfsLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lookup(\"{}\"), vnode id: {}", self.path, self.vnode_id)
    }
}

pub(super) fn vfs_lookup(parser: &TracesParser, events: Vec<RawEvent>) -> VfsLookup {
    let node = parser.parse_vnode(&events);
    VfsLookup {
        ktraces: events,
        path: node.path,
        vnode_id: node.vnode_id,
    }
}
