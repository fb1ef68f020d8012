//! Public API for arli-core
//!
//! Options, input handling and the two entry points. The stage
//! implementations live in [`crate::stages`]; this module only decides which
//! defaults and which input policy apply.

mod config;
mod error;
mod input;
mod transform;


pub use config::{DateFormat, LigatureDepth, Options, OptionsBuilder, PartialOptions, TatweelMode};
pub use error::{Error, Result};
pub use input::{Input, InputPolicy};
pub use transform::{transform, transform_str, transforming, Transformer};
