//! CLI command implementations

pub mod convert;
pub mod json_output;
pub mod notate;
pub mod quantize;
pub mod spell;
