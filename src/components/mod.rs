//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form and list surfaces while reading and writing shared
//! state from context providers; orchestration stays in `pages`.

pub mod bookmark_card;
pub mod bookmark_form;
pub mod theme_toggle;
