//! Flowdeck core.
//!
//! The pieces of the operations dashboard that do not depend on HTTP:
//!
//! - [`auth`]: credential lookup plus signed, expiring session tokens
//! - [`logs`]: tail-and-clean rendering of the dashboard's log files
//! - [`flow`]: the flow trigger capability, its guarded runner and the
//!   periodic scheduler that drives it

pub mod auth;
pub mod flow;
pub mod logs;

pub use auth::{AuthConfig, AuthError, AuthResult, Authenticator};
pub use flow::{FlowError, FlowRun, FlowRunner, FlowScheduler, FlowTrigger, NoopFlowTrigger};
pub use logs::{LogLevel, LogSource, TailOptions};
