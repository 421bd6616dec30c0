//! Domain layer for the Harva content service.
//!
//! Pure types and rules with no I/O: identifiers, the error taxonomy, the
//! section catalogue and its defaults, roles, and the local edit state used
//! by section drafts.

pub mod defaults;
pub mod editable;
pub mod error;
pub mod numeric;
pub mod roles;
pub mod section;
pub mod types;
