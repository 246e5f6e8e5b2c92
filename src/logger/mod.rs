//! Categorized logging: one channel per [`Category`], lines tagged with
//! severity, timestamp and call site, and a process-wide on/off switch.
//!
//! Use [`log_debug!`](crate::log_debug) and [`log_error!`](crate::log_error)
//! to log from the current location. `bin/logger_demo.rs` shows the whole
//! setup.

mod call_site;
mod categorized;
mod category;
mod logger;
mod macros;
mod sink;
mod sink_fake;
mod sink_tracing;
mod template;

pub use call_site::*;
pub use categorized::*;
pub use category::*;
pub use logger::*;
pub use sink::*;
pub use sink_fake::*;
pub use sink_tracing::*;
pub use template::*;

pub use tracing::{debug, error, info, trace, warn};
