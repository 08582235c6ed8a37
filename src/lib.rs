//! Service plumbing around [`ku_core`]: text sources, background harvesting,
//! the JSON HTTP API, settings and tracing setup.

pub mod api;
pub mod harvest;
pub mod settings;
pub mod source;
pub mod trace_init;

pub use ku_core;
