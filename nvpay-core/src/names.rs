/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Well-known parameter names and synthetic fallback constants shared by the
//! decoder and the response claimers.

/// Transaction result code; the anchor key every response must carry.
pub const RESULT: &str = "RESULT";
/// Human-readable response message paired with [`RESULT`].
pub const RESPMSG: &str = "RESPMSG";
/// Gateway reference id for the transaction.
pub const PNREF: &str = "PNREF";

/// Synthetic RESULT value seeded when a response cannot be parsed at all.
pub const UNKNOWN_STATE_RESULT: &str = "-255";
/// Synthetic RESPMSG value seeded when a response cannot be parsed at all.
pub const UNKNOWN_STATE_RESPMSG: &str =
    "Unknown response state: unable to parse gateway response";

/// Marker inserted between a duplicated key and its occurrence counter.
///
/// The second occurrence of `KEY` is stored as `KEY_DUPLICATE_1`, the third
/// as `KEY_DUPLICATE_2`, and so on; the bare key always refers to the first.
pub const DUPLICATE_MARKER: &str = "_DUPLICATE_";
