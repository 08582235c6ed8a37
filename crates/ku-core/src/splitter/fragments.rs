//! Fragment tables for the greedy compound splitter.
//!
//! Tuned for HTTP / network / security vocabulary. Order inside each table is
//! irrelevant; the splitter deduplicates and sorts by length.

/// Prefixes and technical terms that start compound words.
pub const PREFIXES: &[&str] = &[
    "for", "non", "pre", "re", "un", "de", "dis", "mis", "over", "under", "out", "up", "down",
    "in", "ex", "anti", "auto", "co", "inter", "multi", "sub", "super", "trans", "web", "net",
    "http", "ssl", "tls", "dns", "api", "url", "uri", "xml", "json", "html", "css", "js", "sql",
    "db", "auth", "admin", "user", "server", "client", "error", "access", "permission",
    "security", "sandbox", "script", "request", "response", "timeout", "connection", "network",
    "service", "resource", "method", "header", "cookie", "session", "token", "password",
    "username", "email", "file", "data", "buffer", "stack", "memory", "disk", "storage", "cache",
];

/// Standalone words commonly glued into compounds.
pub const COMMON_WORDS: &[&str] = &[
    "for", "and", "not", "the", "has", "was", "are", "can", "may", "web", "net", "box", "script",
    "sand", "box", "sandbox", "permission", "access", "denied", "error", "failed", "timeout",
    "request", "response", "server", "client", "network", "connection", "service", "resource",
    "method", "header", "auth", "authenticate", "security", "secure", "non", "pre", "post", "get",
    "put", "delete", "patch", "head", "option", "options", "status", "code", "message", "body",
    "content", "type", "length", "range", "accept", "encoding", "language", "charset",
];
