use std::sync::Arc;

use flowdeck_core::{AuthConfig, Authenticator, FlowRunner, FlowTrigger, TailOptions};

use crate::config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<Authenticator>,
    pub flow: Arc<FlowRunner>,
    pub tail: TailOptions,
    pub config: ServerConfig,
}

impl AppState {
    /// Create new application state.
    ///
    /// The token lifetime and flow timeout in `config` override the ones in
    /// `auth` and the runner defaults.
    pub fn new(auth: AuthConfig, trigger: Arc<dyn FlowTrigger>, config: ServerConfig) -> Self {
        let auth = auth.with_token_ttl(config.token_ttl);
        let flow = FlowRunner::new(trigger).with_timeout(config.flow_timeout);

        Self {
            auth: Arc::new(Authenticator::new(auth)),
            flow: Arc::new(flow),
            tail: TailOptions::default(),
            config,
        }
    }
}
