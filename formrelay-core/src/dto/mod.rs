//! Data transfer objects shared between server and client
//!
//! The submission endpoints always answer with the same JSON result shape,
//! so it lives here rather than being redefined on each side of the wire.

pub mod submission;
