//! Host-facing plugin descriptor and hook registration

use serde_json::Value;
use std::sync::Arc;

use crate::config::LogConfig;
use crate::consts::{PLUGIN_DESCRIPTION, PLUGIN_ID, PLUGIN_NAME};
use crate::error::HookLoggerError;
use crate::hooks::HookName;
use crate::summary::summarize;
use crate::writer::EventLogger;

/// Event payload emitted by the host
pub type HookEvent = Value;

/// Pass-through value the host threads across handlers
pub type HookContext = Value;

/// Handler subscribed to a single hook. Returns the context it was given.
pub type HookHandler =
    Box<dyn Fn(&HookEvent, HookContext) -> Result<HookContext, HookLoggerError> + Send + Sync>;

/// The one capability the host exposes to plugins
pub trait PluginApi {
    fn on(&mut self, hook: &str, handler: HookHandler);
}

/// Plugin contract - implemented by anything the host can load
pub trait Plugin: Send + Sync {
    /// Unique id the host keys the plugin by
    fn id(&self) -> &'static str;

    /// Display name
    fn name(&self) -> &'static str {
        self.id()
    }

    fn description(&self) -> &'static str;

    /// Subscribe handlers. Called once at load time.
    fn register(&self, api: &mut dyn PluginApi);
}

/// Logs every lifecycle hook to a dated file.
#[derive(Debug, Clone)]
pub struct HookLoggerPlugin {
    logger: Arc<EventLogger>,
}

impl HookLoggerPlugin {
    pub fn new(config: LogConfig) -> Self {
        Self {
            logger: Arc::new(EventLogger::new(config)),
        }
    }

    /// Build with the configuration resolved by [`LogConfig::load`].
    pub fn load() -> Result<Self, HookLoggerError> {
        LogConfig::load().map(Self::new)
    }

    fn handler(&self, hook: HookName) -> HookHandler {
        let logger = Arc::clone(&self.logger);
        Box::new(move |event: &HookEvent, ctx: HookContext| {
            let summary = summarize(hook, event, &ctx);
            logger.write_entry(hook.as_str(), &summary)?;
            Ok(ctx)
        })
    }
}

impl Plugin for HookLoggerPlugin {
    fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    fn description(&self) -> &'static str {
        PLUGIN_DESCRIPTION
    }

    fn register(&self, api: &mut dyn PluginApi) {
        for hook in HookName::ALL {
            api.on(hook.as_str(), self.handler(hook));
        }
    }
}
