use crate::model::{Component, FileKind};
use crate::writer::WriteOutcome;
use std::path::PathBuf;

pub mod generate;
pub mod list;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn debug(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Debug,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactRole {
    Primary,
    Test,
}

/// An artifact the command tried to write, and what happened.
#[derive(Debug, Clone)]
pub struct ArtifactRecord {
    pub role: ArtifactRole,
    pub path: PathBuf,
    pub kind: FileKind,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub artifacts: Vec<ArtifactRecord>,
    pub components: Vec<Component>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }

    pub fn primary(&self) -> Option<&ArtifactRecord> {
        self.artifacts
            .iter()
            .find(|a| a.role == ArtifactRole::Primary)
    }

    pub fn test(&self) -> Option<&ArtifactRecord> {
        self.artifacts.iter().find(|a| a.role == ArtifactRole::Test)
    }

    /// False when the primary artifact was not written.
    pub fn is_success(&self) -> bool {
        match self.primary() {
            Some(primary) => primary.outcome != WriteOutcome::Skipped,
            None => self.artifacts.is_empty(),
        }
    }
}
