//! Human-readable names for HTTP status codes shown in reports.

use phf::phf_map;

static STATUS_NAMES: phf::Map<u16, &'static str> = phf_map! {
    200u16 => "OK",
    201u16 => "Created",
    204u16 => "No Content",
    206u16 => "Partial Content",
    301u16 => "Moved Permanently",
    302u16 => "Found",
    304u16 => "Not Modified",
    400u16 => "Bad Request",
    401u16 => "Unauthorized",
    403u16 => "Forbidden",
    404u16 => "Not Found",
    405u16 => "Method Not Allowed",
    416u16 => "Range Not Satisfiable",
    429u16 => "Too Many Requests",
    500u16 => "Internal Server Error",
    502u16 => "Bad Gateway",
    503u16 => "Service Unavailable",
    504u16 => "Gateway Timeout",
};

/// Name for `code`, or `"Unknown"` for anything not in the table.
pub fn status_name(code: u16) -> &'static str {
    STATUS_NAMES.get(&code).copied().unwrap_or("Unknown")
}
