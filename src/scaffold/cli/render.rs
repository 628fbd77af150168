//! # Rendering Module
//!
//! Console output goes through the templates in `templates.rs`, rendered by
//! `outstanding` with the theme in `styles.rs`. Color is detected from stdout;
//! when it is unsupported (pipes, CI, `TERM=dumb`) styles render as plain text.
//!
//! The `*_internal` variants take an explicit color setting for tests.

use super::guidance::next_steps;
use super::styles::{names, SCAFFOLD_THEME};
use super::templates::{COMPONENT_LIST_TEMPLATE, MESSAGES_TEMPLATE, NEXT_STEPS_TEMPLATE};
use minijinja::Error;
use outstanding::{render, render_with_color, ThemeChoice};
use scaffold::api::{CmdMessage, MessageLevel};
use scaffold::model::Component;
use serde::Serialize;

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ComponentListData {
    components: Vec<&'static str>,
}

#[derive(Serialize)]
struct StepData {
    number: usize,
    text: String,
    hints: Vec<&'static str>,
    detail: Option<&'static str>,
}

#[derive(Serialize)]
struct NextStepsData {
    component: &'static str,
    steps: Vec<StepData>,
}

fn render_template<T: Serialize>(
    template: &str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, Error> {
    match use_color {
        Some(c) => render_with_color(template, data, ThemeChoice::from(&*SCAFFOLD_THEME), c),
        None => render(template, data, ThemeChoice::from(&*SCAFFOLD_THEME)),
    }
}

fn level_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Debug => names::DEBUG,
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

/// Renders messages, one per line. Debug messages only appear when `verbose`.
pub fn render_messages(messages: &[CmdMessage], verbose: bool) -> String {
    render_messages_internal(messages, verbose, None)
}

fn render_messages_internal(
    messages: &[CmdMessage],
    verbose: bool,
    use_color: Option<bool>,
) -> String {
    let visible: Vec<&CmdMessage> = messages
        .iter()
        .filter(|m| verbose || m.level != MessageLevel::Debug)
        .collect();
    if visible.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: visible
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: level_style(m.level),
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        visible
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage], verbose: bool) {
    let output = render_messages(messages, verbose);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_component_list(components: &[Component]) -> String {
    render_component_list_internal(components, None)
}

fn render_component_list_internal(components: &[Component], use_color: Option<bool>) -> String {
    let data = ComponentListData {
        components: components.iter().map(|c| c.name()).collect(),
    };
    render_template(COMPONENT_LIST_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        let mut out = String::from("Available components:\n");
        for name in &data.components {
            out.push_str(&format!("  * {}\n", name));
        }
        out
    })
}

/// Renders the numbered guidance shown after `component` was added.
///
/// `edit_path` is the primary artifact and `test_path` the test file, both as
/// shown to the user.
pub fn render_next_steps(component: Component, edit_path: &str, test_path: &str) -> String {
    render_next_steps_internal(component, edit_path, test_path, None)
}

fn render_next_steps_internal(
    component: Component,
    edit_path: &str,
    test_path: &str,
    use_color: Option<bool>,
) -> String {
    let guidance = next_steps(component);

    let mut steps = vec![StepData {
        number: 1,
        text: format!("Edit {}", edit_path),
        hints: guidance.hints.to_vec(),
        detail: None,
    }];
    for follow_up in guidance.follow_ups {
        steps.push(StepData {
            number: steps.len() + 1,
            text: follow_up.text.to_string(),
            hints: Vec::new(),
            detail: follow_up.detail,
        });
    }
    steps.push(StepData {
        number: steps.len() + 1,
        text: format!("Run tests: pytest {}", test_path),
        hints: Vec::new(),
        detail: None,
    });

    let data = NextStepsData {
        component: component.name(),
        steps,
    };
    render_template(NEXT_STEPS_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        let mut out = format!("\n{} added successfully!\n", component);
        for step in &data.steps {
            out.push_str(&format!("  {}. {}\n", step.number, step.text));
        }
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_messages_empty() {
        assert_eq!(render_messages_internal(&[], false, Some(false)), "");
    }

    #[test]
    fn test_render_messages_one_per_line() {
        let messages = vec![
            CmdMessage::success("Created custom_components/foo_bar/sensor.py"),
            CmdMessage::info("No test template found for sensor (skipping)"),
        ];
        assert_eq!(
            render_messages_internal(&messages, false, Some(false)),
            "Created custom_components/foo_bar/sensor.py\nNo test template found for sensor (skipping)\n"
        );
    }

    #[test]
    fn test_debug_messages_need_verbose() {
        let messages = vec![CmdMessage::debug("Resolved sensor"), CmdMessage::info("done")];
        assert_eq!(
            render_messages_internal(&messages, false, Some(false)),
            "done\n"
        );
        assert_eq!(
            render_messages_internal(&messages, true, Some(false)),
            "Resolved sensor\ndone\n"
        );
    }

    #[test]
    fn test_render_messages_with_color_includes_ansi() {
        console::set_colors_enabled(true);
        let output =
            render_messages_internal(&[CmdMessage::error("boom")], false, Some(true));
        assert!(output.contains("boom"));
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_render_component_list() {
        let output =
            render_component_list_internal(&[Component::Entity, Component::Api], Some(false));
        assert_eq!(output, "Available components:\n  * entity\n  * api\n");
    }

    #[test]
    fn test_render_next_steps_numbering() {
        let output = render_next_steps_internal(
            Component::ApplicationCredentials,
            "custom_components/foo_bar/application_credentials.py",
            "tests/test_application_credentials.py",
            Some(false),
        );
        let expected = "\napplication_credentials added successfully!\n\nNext steps:\n  \
            1. Edit custom_components/foo_bar/application_credentials.py\n     \
            * Update OAuth authorize and token URLs\n  \
            2. Add 'application_credentials' to manifest.json dependencies\n  \
            3. Implement OAuth flow in config_flow.py\n  \
            4. Run tests: pytest tests/test_application_credentials.py\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_next_steps_detail_line() {
        let output = render_next_steps_internal(
            Component::Services,
            "custom_components/foo_bar/services.yaml",
            "tests/test_services.py",
            Some(false),
        );
        assert!(output.contains("  1. Edit custom_components/foo_bar/services.yaml\n"));
        assert!(output.contains(
            "  2. Register services in __init__.py:\n     hass.services.async_register(DOMAIN, 'service_name', handler)\n"
        ));
        assert!(output.ends_with("  3. Run tests: pytest tests/test_services.py\n"));
    }

    #[test]
    fn test_theme_covers_every_level() {
        for level in [
            MessageLevel::Debug,
            MessageLevel::Info,
            MessageLevel::Success,
            MessageLevel::Warning,
            MessageLevel::Error,
        ] {
            assert!(SCAFFOLD_THEME.styles().has(level_style(level)));
        }
    }
}
