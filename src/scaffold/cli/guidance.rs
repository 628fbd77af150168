//! Per-component "next steps" shown after a successful run.
//!
//! Purely informational. Every component must have an entry, which the
//! exhaustive match in [`next_steps`] enforces.

use scaffold::model::Component;

/// A numbered follow-up step, optionally with a command or snippet under it.
#[derive(Debug, Clone, Copy)]
pub struct FollowUp {
    pub text: &'static str,
    pub detail: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct NextSteps {
    /// Bullets under "Edit <file>".
    pub hints: &'static [&'static str],
    /// Steps between editing and running the tests.
    pub follow_ups: &'static [FollowUp],
}

const ENTITY: NextSteps = NextSteps {
    hints: &[
        "Customize device_info, unique_id patterns",
        "Update device ID extraction from coordinator.data",
    ],
    follow_ups: &[FollowUp {
        text: "Regenerate existing platforms to use this base class:",
        detail: Some("scaffold sensor --force"),
    }],
};

const API: NextSteps = NextSteps {
    hints: &[
        "Update API endpoints and authentication",
        "Implement data fetching methods",
    ],
    follow_ups: &[FollowUp {
        text: "Use this API client in your coordinator or entities",
        detail: None,
    }],
};

const APPLICATION_CREDENTIALS: NextSteps = NextSteps {
    hints: &["Update OAuth authorize and token URLs"],
    follow_ups: &[
        FollowUp {
            text: "Add 'application_credentials' to manifest.json dependencies",
            detail: None,
        },
        FollowUp {
            text: "Implement OAuth flow in config_flow.py",
            detail: None,
        },
    ],
};

const SERVICES: NextSteps = NextSteps {
    hints: &["Customize service definitions"],
    follow_ups: &[FollowUp {
        text: "Register services in __init__.py:",
        detail: Some("hass.services.async_register(DOMAIN, 'service_name', handler)"),
    }],
};

const DEVICE_AUTOMATION: NextSteps = NextSteps {
    hints: &["Define your device automation triggers/actions/conditions"],
    follow_ups: &[FollowUp {
        text: "These will appear in the automation UI automatically",
        detail: None,
    }],
};

const ENTITY_PLATFORM: NextSteps = NextSteps {
    hints: &["Implement entity properties and methods"],
    follow_ups: &[FollowUp {
        text: "Entities will be auto-discovered by Home Assistant",
        detail: None,
    }],
};

pub fn next_steps(component: Component) -> NextSteps {
    match component {
        Component::Entity => ENTITY,
        Component::Api => API,
        Component::ApplicationCredentials => APPLICATION_CREDENTIALS,
        Component::Services => SERVICES,
        Component::DeviceTrigger | Component::DeviceAction | Component::DeviceCondition => {
            DEVICE_AUTOMATION
        }
        Component::Sensor
        | Component::BinarySensor
        | Component::Switch
        | Component::Button
        | Component::Light
        | Component::Cover => ENTITY_PLATFORM,
    }
}
