use std::io;

/// Errors that can occur while reading a kdebug container.
///
/// These are the structural failures: once the magic is wrong or a
/// required section marker never shows up, there is no way to recover
/// the byte offsets of anything that follows, so the whole parse is
/// aborted. Everything the parser can shrug off (unknown event types,
/// unmatched bracket ends, short event groups) never surfaces here.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The stream does not start with one of the known RAW_VERSION magics.
    #[error("unsupported container version: {0:02x?}")]
    UnsupportedVersion([u8; 4]),

    /// The stream ended while scanning for a required section marker.
    #[error("truncated or corrupt container: end of stream while reading {0}")]
    Truncated(&'static str),

    #[error("{0}")]
    Io(#[from] io::Error),

    /// One of the embedded property list sections failed to parse.
    #[error("malformed property list section: {0}")]
    Plist(#[from] plist::Error),
}
