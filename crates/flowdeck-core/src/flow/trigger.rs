//! The flow trigger capability.

use async_trait::async_trait;

use super::error::FlowError;

/// Starts a run of the external orchestration flow.
#[async_trait]
pub trait FlowTrigger: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Start the flow and wait for it to be accepted.
    async fn execute(&self) -> Result<(), FlowError>;
}

/// Stub trigger: logs the invocation and does nothing else.
///
/// It does not contact the Globus Flows service.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFlowTrigger;

#[async_trait]
impl FlowTrigger for NoopFlowTrigger {
    fn name(&self) -> &str {
        "noop"
    }

    async fn execute(&self) -> Result<(), FlowError> {
        tracing::info!("Executing Globus Flow");
        Ok(())
    }
}
