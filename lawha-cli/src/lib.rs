pub mod script;

pub use lawha_core::*;

pub use script::{parse_script, run_script, KeyRef, ScriptError, Session};
