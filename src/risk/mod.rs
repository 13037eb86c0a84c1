//! Heuristic risk flagging over a patient's recent clinical records.
//!
//! Flag detection is pure frequency counting; the only side effect is an
//! optional best-effort gateway call for a narrative summary, and that call
//! can never disturb the flags already computed.

pub mod analyzer;
pub mod keywords;
pub mod prompt;

pub use analyzer::*;
pub use keywords::*;
pub use prompt::*;
