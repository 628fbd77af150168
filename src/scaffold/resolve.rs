//! Template resolution by naming convention.
//!
//! A component's primary template is `{component}{suffix}.jinja`, where the
//! suffix is discovered by probing [`FileKind::PROBE_ORDER`] and taking the
//! first template that exists. The companion test template is always
//! `test_{component}.py.jinja`; tests are executable source whatever the
//! primary kind is, so only that one name is probed.

use crate::error::{Result, ScaffoldError};
use crate::model::{Component, FileKind, TemplatePair, TemplateRef};
use crate::templates::TemplateSource;

/// Returns the first `(template name, kind)` for which `exists` holds, or every
/// template name tried, in probe order.
pub fn resolve_kind<F>(
    stem: &str,
    kinds: &[FileKind],
    exists: F,
) -> std::result::Result<TemplateRef, Vec<String>>
where
    F: Fn(&str) -> bool,
{
    let mut tried = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let name = kind.template_name(stem);
        if exists(&name) {
            return Ok(TemplateRef { name, kind: *kind });
        }
        tried.push(name);
    }
    Err(tried)
}

/// Resolves the primary and test templates for a component.
pub fn resolve_pair<T: TemplateSource>(source: &T, component: Component) -> Result<TemplatePair> {
    let primary = resolve_kind(component.name(), component.probe_order(), |name| {
        source.contains(name)
    })
    .map_err(|tried| ScaffoldError::TemplateNotFound {
        component: component.name().to_string(),
        tried: tried.iter().map(|name| source.describe(name)).collect(),
    })?;

    let test = resolve_kind(&component.test_stem(), &[FileKind::Source], |name| {
        source.contains(name)
    })
    .ok()
    .map(|found| found.name);

    Ok(TemplatePair { primary, test })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::memory::MemoryTemplates;

    #[test]
    fn test_first_match_wins() {
        let found = resolve_kind("light", FileKind::PROBE_ORDER, |_| true).unwrap();
        assert_eq!(found.name, "light.py.jinja");
        assert_eq!(found.kind, FileKind::Source);
    }

    #[test]
    fn test_falls_back_to_data() {
        let found =
            resolve_kind("services", FileKind::PROBE_ORDER, |n| n == "services.yaml.jinja")
                .unwrap();
        assert_eq!(found.kind, FileKind::Data);
    }

    #[test]
    fn test_reports_all_tried_in_order() {
        let tried = resolve_kind("cover", FileKind::PROBE_ORDER, |_| false).unwrap_err();
        assert_eq!(tried, vec!["cover.py.jinja", "cover.yaml.jinja"]);
    }

    #[test]
    fn test_source_only_selects_source_for_every_component() {
        for component in Component::ALL {
            let source = MemoryTemplates::new().with(&format!("{}.py.jinja", component), "x");
            let pair = resolve_pair(&source, component).unwrap();
            assert_eq!(pair.primary.kind, FileKind::Source);
            assert_eq!(pair.primary.name, format!("{}.py.jinja", component));
        }
    }

    #[test]
    fn test_data_only_selects_data_for_every_component() {
        for component in Component::ALL {
            let source = MemoryTemplates::new().with(&format!("{}.yaml.jinja", component), "x");
            let pair = resolve_pair(&source, component).unwrap();
            assert_eq!(pair.primary.kind, FileKind::Data);
        }
    }

    #[test]
    fn test_missing_template_names_both_candidates() {
        let source = MemoryTemplates::new().with("test_switch.py.jinja", "x");
        let err = resolve_pair(&source, Component::Switch).unwrap_err();
        match err {
            ScaffoldError::TemplateNotFound { component, tried } => {
                assert_eq!(component, "switch");
                assert_eq!(tried, vec!["switch.py.jinja", "switch.yaml.jinja"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_companion_test_template() {
        let source = MemoryTemplates::new()
            .with("sensor.py.jinja", "x")
            .with("test_sensor.py.jinja", "y");
        let pair = resolve_pair(&source, Component::Sensor).unwrap();
        assert_eq!(pair.test.as_deref(), Some("test_sensor.py.jinja"));

        let source = MemoryTemplates::new().with("sensor.py.jinja", "x");
        assert_eq!(resolve_pair(&source, Component::Sensor).unwrap().test, None);
    }

    #[test]
    fn test_companion_is_never_data() {
        let source = MemoryTemplates::new()
            .with("services.yaml.jinja", "x")
            .with("test_services.yaml.jinja", "y");
        let pair = resolve_pair(&source, Component::Services).unwrap();
        assert_eq!(pair.test, None);
    }
}
