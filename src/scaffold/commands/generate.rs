use crate::commands::{ArtifactRecord, ArtifactRole, CmdMessage, CmdResult};
use crate::config::ScaffoldPaths;
use crate::error::Result;
use crate::model::{Component, FileKind, GeneratedArtifact, RenderContext};
use crate::render::TemplateRenderer;
use crate::resolve::resolve_pair;
use crate::templates::TemplateSource;
use crate::writer::{target_dir, write_artifact, WriteOutcome};

/// Renders and writes the primary and test artifacts for `component`.
///
/// Both templates are rendered and both target directories checked before
/// anything is written, so a missing template, a broken template or a missing
/// directory leaves the project untouched. `force` applies to the
/// primary artifact only; an existing test file is always kept.
pub fn run<T>(
    templates: &T,
    paths: &ScaffoldPaths,
    context: &RenderContext,
    component: Component,
    force: bool,
) -> Result<CmdResult>
where
    T: TemplateSource + Clone + Send + Sync + 'static,
{
    let mut result = CmdResult::default();

    let pair = resolve_pair(templates, component)?;
    result.add_message(CmdMessage::debug(format!(
        "Resolved {} to {}",
        component,
        templates.describe(&pair.primary.name)
    )));
    if pair.primary.kind != component.expected_kind() {
        result.add_message(CmdMessage::warning(format!(
            "{} usually scaffolds a {} file, found {}",
            component,
            component.expected_kind().suffix(),
            pair.primary.name
        )));
    }

    let renderer = TemplateRenderer::new(templates);
    let primary = GeneratedArtifact {
        path: paths.component_file(&context.component_slug, component, pair.primary.kind),
        kind: pair.primary.kind,
        content: renderer.render(&pair.primary.name, context)?,
    };
    let test = match &pair.test {
        Some(name) => {
            result.add_message(CmdMessage::debug(format!(
                "Resolved test template {}",
                templates.describe(name)
            )));
            Some(GeneratedArtifact {
                path: paths.test_file(component),
                kind: FileKind::Source,
                content: renderer.render(name, context)?,
            })
        }
        None => None,
    };

    target_dir(&primary.path)?;
    if let Some(test) = &test {
        target_dir(&test.path)?;
    }

    let outcome = write_artifact(&primary, force)?;
    let shown = paths.display(&primary.path);
    match outcome {
        WriteOutcome::Created => {
            result.add_message(CmdMessage::success(format!("Created {}", shown)))
        }
        WriteOutcome::Overwritten => {
            result.add_message(CmdMessage::success(format!("Overwrote {}", shown)))
        }
        WriteOutcome::Skipped => result.add_message(CmdMessage::error(format!(
            "{}{} already exists. Use --force to overwrite.",
            component,
            primary.kind.suffix()
        ))),
    }
    result.artifacts.push(ArtifactRecord {
        role: ArtifactRole::Primary,
        path: primary.path,
        kind: primary.kind,
        outcome,
    });

    match test {
        Some(test) => {
            let outcome = write_artifact(&test, false)?;
            let shown = paths.display(&test.path);
            match outcome {
                WriteOutcome::Skipped => result.add_message(CmdMessage::info(format!(
                    "{} already exists (skipping)",
                    shown
                ))),
                _ => result.add_message(CmdMessage::success(format!("Created {}", shown))),
            }
            result.artifacts.push(ArtifactRecord {
                role: ArtifactRole::Test,
                path: test.path,
                kind: test.kind,
                outcome,
            });
        }
        None => result.add_message(CmdMessage::info(format!(
            "No test template found for {} (skipping)",
            component
        ))),
    }

    Ok(result)
}
