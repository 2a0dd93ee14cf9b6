//! Shared view-state modules provided via context.
//!
//! DESIGN
//! ======
//! Plain cloneable structs held in `RwSignal`s. The net layer never touches
//! these directly; pages fold remote results into them.

pub mod bookmarks;
pub mod session;
pub mod ui;
