//! Fixed table of HTTP status codes and their presentation metadata

/// Presentation metadata for a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    /// Message used when the caller supplies none
    pub default_msg: &'static str,
    /// Emoji shown in front of formatted messages
    pub emoji: &'static str,
    /// Coarse grouping (e.g. "Client Error")
    pub category: &'static str,
}

/// Returned for any code missing from the catalog
pub const UNKNOWN: StatusInfo = StatusInfo {
    default_msg: "Unknown error",
    emoji: "⚠️",
    category: "Unknown",
};

const CLIENT_ERROR: &str = "Client Error";
const SERVER_ERROR: &str = "Server Error";

static CATALOG: [(u16, StatusInfo); 10] = [
    (400, info("Invalid request", "❗", CLIENT_ERROR)),
    (401, info("Unauthorized", "⛔", CLIENT_ERROR)),
    (403, info("Forbidden", "⛔", CLIENT_ERROR)),
    (404, info("Resource not found", "⁉️", CLIENT_ERROR)),
    (409, info("Conflict", "⚔️", CLIENT_ERROR)),
    (422, info("Unprocessable entity", "❌", CLIENT_ERROR)),
    (429, info("Too many requests", "⏸️", CLIENT_ERROR)),
    (500, info("Internal server error", "⚙️", SERVER_ERROR)),
    (503, info("Service unavailable", "⚙️", SERVER_ERROR)),
    (504, info("Gateway timeout", "⏱️", SERVER_ERROR)),
];

const fn info(default_msg: &'static str, emoji: &'static str, category: &'static str) -> StatusInfo {
    StatusInfo {
        default_msg,
        emoji,
        category,
    }
}

/// Look up the metadata for a status code
///
/// Never fails: codes outside the catalog resolve to [`UNKNOWN`].
pub fn lookup(code: u16) -> &'static StatusInfo {
    get(code).unwrap_or(&UNKNOWN)
}

/// Look up a status code, returning `None` when it is not cataloged
pub fn get(code: u16) -> Option<&'static StatusInfo> {
    CATALOG
        .iter()
        .find_map(|(entry_code, info)| (*entry_code == code).then_some(info))
}

/// Iterate over every cataloged code in ascending order
pub fn entries() -> impl Iterator<Item = (u16, &'static StatusInfo)> {
    CATALOG.iter().map(|(code, info)| (*code, info))
}
