// algombti: deterministic keyword profiling for viewing/listening history.
//
// This is the library root. The analysis module is the pure pipeline the
// presentation layer calls into; the store module persists the one profile
// record it gets back.

pub mod analysis;
pub mod config;
pub mod models;
pub mod store;
