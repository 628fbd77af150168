use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The kind of file a template produces, identified by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileKind {
    /// Executable source (`.py`)
    Source,
    /// Declarative data (`.yaml`)
    Data,
}

impl FileKind {
    /// Order in which suffixes are probed when resolving a template.
    pub const PROBE_ORDER: &'static [FileKind] = &[FileKind::Source, FileKind::Data];

    pub fn suffix(&self) -> &'static str {
        match self {
            FileKind::Source => ".py",
            FileKind::Data => ".yaml",
        }
    }

    /// Template file name for `stem`, e.g. `sensor.py.jinja`.
    pub fn template_name(&self, stem: &str) -> String {
        format!("{}{}.jinja", stem, self.suffix())
    }
}

/// A scaffoldable component of an integration.
///
/// The set is closed: every variant has a template naming convention and a
/// next-steps entry in the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Component {
    Entity,
    Api,
    ApplicationCredentials,
    Services,
    Sensor,
    BinarySensor,
    Switch,
    Button,
    Light,
    Cover,
    DeviceTrigger,
    DeviceAction,
    DeviceCondition,
}

impl Component {
    pub const ALL: [Component; 13] = [
        Component::Entity,
        Component::Api,
        Component::ApplicationCredentials,
        Component::Services,
        Component::Sensor,
        Component::BinarySensor,
        Component::Switch,
        Component::Button,
        Component::Light,
        Component::Cover,
        Component::DeviceTrigger,
        Component::DeviceAction,
        Component::DeviceCondition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Component::Entity => "entity",
            Component::Api => "api",
            Component::ApplicationCredentials => "application_credentials",
            Component::Services => "services",
            Component::Sensor => "sensor",
            Component::BinarySensor => "binary_sensor",
            Component::Switch => "switch",
            Component::Button => "button",
            Component::Light => "light",
            Component::Cover => "cover",
            Component::DeviceTrigger => "device_trigger",
            Component::DeviceAction => "device_action",
            Component::DeviceCondition => "device_condition",
        }
    }

    /// Suffixes to probe, highest priority first.
    pub fn probe_order(&self) -> &'static [FileKind] {
        FileKind::PROBE_ORDER
    }

    /// The kind this component is normally scaffolded as. Resolution does not
    /// depend on it; it only flags unexpected templates.
    pub fn expected_kind(&self) -> FileKind {
        match self {
            Component::Services => FileKind::Data,
            _ => FileKind::Source,
        }
    }

    /// Stem of the companion test template and test file.
    pub fn test_stem(&self) -> String {
        format!("test_{}", self.name())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComponentError(pub String);

impl fmt::Display for ParseComponentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component: {}", self.0)
    }
}

impl std::error::Error for ParseComponentError {}

impl FromStr for Component {
    type Err = ParseComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .iter()
            .copied()
            .find(|c| c.name() == s)
            .ok_or_else(|| ParseComponentError(s.to_string()))
    }
}

/// Values exposed to scaffold templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub component_slug: String,
    pub component_name: String,
    pub domain: String,
    pub has_entity_base: bool,
}

/// A template chosen for rendering, with the kind its suffix implies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub name: String,
    pub kind: FileKind,
}

/// Primary template plus the optional companion test template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    pub primary: TemplateRef,
    pub test: Option<String>,
}

/// Rendered output waiting to be written.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub path: PathBuf,
    pub kind: FileKind,
    pub content: String,
}
