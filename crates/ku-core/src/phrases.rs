//! Built-in error phrases folded into every harvest.
//!
//! Guarantees a usable pool when every text source fails.

pub const COMMON_ERRORS: &[&str] = &[
    "page not found",
    "access denied",
    "server error",
    "connection timeout",
    "invalid request",
    "authentication failed",
    "resource unavailable",
    "service unavailable",
    "bad gateway",
    "forbidden access",
    "not authorized",
    "internal server error",
    "bad request",
    "method not allowed",
    "request timeout",
    "conflict",
    "gone",
    "length required",
    "precondition failed",
    "payload too large",
    "uri too long",
    "unsupported media type",
    "range not satisfiable",
    "expectation failed",
    "too many requests",
    "request header fields too large",
    "network error",
    "connection refused",
    "host unreachable",
    "dns error",
    "ssl error",
    "certificate error",
    "proxy error",
    "gateway timeout",
    "version not supported",
    "variant also negotiates",
    "insufficient storage",
    "loop detected",
    "not extended",
    "network authentication required",
    "unknown error",
    "operation failed",
    "try again later",
    "please wait",
    "system busy",
    "maintenance mode",
    "feature unavailable",
    "account locked",
    "session expired",
    "invalid credentials",
    "password incorrect",
    "username not found",
    "email already exists",
    "invalid email format",
    "file too large",
    "file not found",
    "permission denied",
    "read only",
    "write protected",
    "disk full",
    "out of memory",
    "buffer overflow",
    "stack overflow",
    "null pointer",
    "index out of bounds",
    "type mismatch",
    "parse error",
    "syntax error",
    "compilation error",
    "runtime error",
    "logic error",
];

/// The built-in phrases as owned fragments, ready to append to a harvest.
pub fn common_error_fragments() -> impl Iterator<Item = String> {
    COMMON_ERRORS.iter().map(|p| p.to_string())
}
