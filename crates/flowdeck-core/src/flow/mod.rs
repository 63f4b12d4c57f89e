//! Flow triggering.
//!
//! A [`FlowTrigger`] is the call into the external workflow-orchestration
//! system. The [`FlowRunner`] wraps one with an in-flight guard and a timeout,
//! and the [`FlowScheduler`] invokes the runner on a fixed cadence.
//!
//! The only trigger shipped here is [`NoopFlowTrigger`], a stub that logs and
//! returns. Real orchestration plugs in by implementing [`FlowTrigger`].

mod error;
mod runner;
mod scheduler;
mod trigger;

pub use error::FlowError;
pub use runner::{FlowRun, FlowRunner, DEFAULT_FLOW_TIMEOUT};
pub use scheduler::{delay_until_next_tick, FlowScheduler, DEFAULT_FLOW_INTERVAL};
pub use trigger::{FlowTrigger, NoopFlowTrigger};
