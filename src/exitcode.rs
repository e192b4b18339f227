//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error
pub const USAGE: i32 = 64;

/// Cannot open input (requested world does not exist)
pub const NOINPUT: i32 = 66;

/// Service unavailable (host unreachable)
pub const UNAVAILABLE: i32 = 69;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Remote error in protocol (host returned a failure status)
pub const PROTOCOL: i32 = 76;

/// Configuration error
pub const CONFIG: i32 = 78;

/// Interrupted by the user (128 + SIGINT)
pub const INTERRUPTED: i32 = 130;
