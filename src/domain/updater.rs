use crate::domain::formatter;
use crate::domain::parser;
use crate::domain::repr::VersionRepr;
use crate::error::Result;

/// Receives the human-readable description of each version change.
///
/// The updater never prints; callers decide where descriptions go.
pub trait ChangeReporter {
    fn report(&mut self, description: &str);
}

/// Discards every description
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl ChangeReporter for NullReporter {
    fn report(&mut self, _description: &str) {}
}

/// Keeps every description in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub descriptions: Vec<String>,
}

impl ChangeReporter for RecordingReporter {
    fn report(&mut self, description: &str) {
        self.descriptions.push(description.to_string());
    }
}

/// A version change to apply.
///
/// `set_to` takes precedence over `increment_by` when both are given. With
/// neither, the original value is re-rendered unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionUpdateRequest {
    pub original: VersionRepr,
    pub set_to: Option<f64>,
    pub increment_by: Option<f64>,
    pub places_override: Option<u32>,
}

impl VersionUpdateRequest {
    pub fn new(original: impl Into<VersionRepr>) -> Self {
        VersionUpdateRequest {
            original: original.into(),
            set_to: None,
            increment_by: None,
            places_override: None,
        }
    }

    pub fn with_set_to(mut self, value: f64) -> Self {
        self.set_to = Some(value);
        self
    }

    pub fn with_increment_by(mut self, delta: f64) -> Self {
        self.increment_by = Some(delta);
        self
    }

    pub fn with_places(mut self, places: u32) -> Self {
        self.places_override = Some(places);
        self
    }
}

/// Outcome of [update]
#[derive(Debug, Clone, PartialEq)]
pub struct VersionUpdate {
    pub rendered: VersionRepr,
    pub description: String,
}

/// Apply a version change and render the result in the original style.
///
/// The description (`Set version to NEW (from OLD)`) is handed to `reporter`
/// and also returned.
///
/// # Errors
/// Fails only when the original version cannot be parsed.
pub fn update(
    request: &VersionUpdateRequest,
    reporter: &mut dyn ChangeReporter,
) -> Result<VersionUpdate> {
    let (parsed, style) = parser::parse(&request.original)?;

    let working = match (request.set_to, request.increment_by) {
        (Some(value), _) => value,
        (None, Some(delta)) => parsed + delta,
        (None, None) => parsed,
    };

    let rendered = formatter::format(working, &style, request.places_override);
    let description = format!("Set version to {} (from {})", rendered, request.original);
    reporter.report(&description);

    Ok(VersionUpdate {
        rendered,
        description,
    })
}

/// [update] without a reporter, returning only the new representation
pub fn update_value(request: &VersionUpdateRequest) -> Result<VersionRepr> {
    update(request, &mut NullReporter).map(|u| u.rendered)
}
