//! pitchtools CLI library.
//!
//! Exposes the command implementations behind the `pitchtools` binary so
//! they can be tested without spawning a process.

pub mod commands;
