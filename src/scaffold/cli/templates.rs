//! # CLI Templates
//!
//! Console output is rendered by `outstanding` from minijinja templates kept
//! as stand-alone files and embedded at compile time. Block tags sit at the end
//! of the line they close, so every output line break in these files is
//! explicit. The final newline of a file is dropped by minijinja.
//!
//! Layout decisions that need logic (step numbering, which messages are shown)
//! are made in `render.rs`; templates only place text and pick styles.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const COMPONENT_LIST_TEMPLATE: &str = include_str!("templates/component_list.tmp");
pub const NEXT_STEPS_TEMPLATE: &str = include_str!("templates/next_steps.tmp");
