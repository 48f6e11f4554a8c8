//! Logging macros for fineprint
//!
//! Thin re-export of the `tracing` macros under `log_*` names so call sites
//! read the same across the crate. Never pass a credential as a field.

pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};
