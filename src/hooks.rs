//! Lifecycle hooks the plugin subscribes to

use std::fmt;
use std::str::FromStr;

use crate::error::HookLoggerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    BeforeModelResolve,
    BeforePromptBuild,
    BeforeAgentStart,
    LlmInput,
    LlmOutput,
    AgentEnd,
    BeforeCompaction,
    AfterCompaction,
    BeforeReset,
    MessageReceived,
    MessageSending,
    MessageSent,
    BeforeToolCall,
    AfterToolCall,
    ToolResultPersist,
    BeforeMessageWrite,
    SessionStart,
    SessionEnd,
    GatewayStart,
    GatewayStop,
}

impl HookName {
    /// Every hook registered by the plugin
    pub const ALL: [HookName; 20] = [
        HookName::BeforeModelResolve,
        HookName::BeforePromptBuild,
        HookName::BeforeAgentStart,
        HookName::LlmInput,
        HookName::LlmOutput,
        HookName::AgentEnd,
        HookName::BeforeCompaction,
        HookName::AfterCompaction,
        HookName::BeforeReset,
        HookName::MessageReceived,
        HookName::MessageSending,
        HookName::MessageSent,
        HookName::BeforeToolCall,
        HookName::AfterToolCall,
        HookName::ToolResultPersist,
        HookName::BeforeMessageWrite,
        HookName::SessionStart,
        HookName::SessionEnd,
        HookName::GatewayStart,
        HookName::GatewayStop,
    ];

    /// Event name used on the host bus
    pub const fn as_str(self) -> &'static str {
        match self {
            HookName::BeforeModelResolve => "before_model_resolve",
            HookName::BeforePromptBuild => "before_prompt_build",
            HookName::BeforeAgentStart => "before_agent_start",
            HookName::LlmInput => "llm_input",
            HookName::LlmOutput => "llm_output",
            HookName::AgentEnd => "agent_end",
            HookName::BeforeCompaction => "before_compaction",
            HookName::AfterCompaction => "after_compaction",
            HookName::BeforeReset => "before_reset",
            HookName::MessageReceived => "message_received",
            HookName::MessageSending => "message_sending",
            HookName::MessageSent => "message_sent",
            HookName::BeforeToolCall => "before_tool_call",
            HookName::AfterToolCall => "after_tool_call",
            HookName::ToolResultPersist => "tool_result_persist",
            HookName::BeforeMessageWrite => "before_message_write",
            HookName::SessionStart => "session_start",
            HookName::SessionEnd => "session_end",
            HookName::GatewayStart => "gateway_start",
            HookName::GatewayStop => "gateway_stop",
        }
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = HookLoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookName::ALL
            .into_iter()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| HookLoggerError::UnknownHook {
                input: s.to_string(),
            })
    }
}
