//! Shared helpers for the fedx workspace.

pub mod case;
pub mod inflect;
