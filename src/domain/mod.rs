//! Domain logic - parsing, updating and re-rendering version numbers
//!
//! Everything here is pure: no I/O, no shared state.

pub mod formatter;
pub mod parser;
pub mod repr;
pub mod style;
pub mod updater;

pub use formatter::format;
pub use parser::parse;
pub use repr::VersionRepr;
pub use style::{EffectiveStyle, SourceKind, StyleDescriptor};
pub use updater::{
    update, update_value, ChangeReporter, NullReporter, RecordingReporter, VersionUpdate,
    VersionUpdateRequest,
};
