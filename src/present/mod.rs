//! Hazard result presentation
//!
//! Shapes stored hazard records into display-ready views: badge
//! labels, tip formatting, area labels, and the lookup lifecycle
//! states a frontend renders from.

use serde::{Deserialize, Serialize};

use crate::hazard::{Hazard, HazardKind, Severity};

/// Badge text and color for a severity level
pub fn severity_badge(severity: Severity) -> (&'static str, &'static str) {
    match severity {
        Severity::Low => ("Low", "green"),
        Severity::Medium => ("Medium", "amber"),
        Severity::High => ("High", "red"),
    }
}

/// Human-readable label for a hazard category
pub fn kind_label(kind: HazardKind) -> &'static str {
    match kind {
        HazardKind::Animal => "Animal",
        HazardKind::Event => "Event",
        HazardKind::Weather => "Weather",
        HazardKind::Disease => "Disease",
    }
}

/// One tip line in a hazard view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipView {
    pub name: String,
    pub description: String,
}

/// Display-ready projection of a hazard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazardView {
    pub name: String,
    pub severity_label: String,
    pub severity_color: String,
    pub kind_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Omitted entirely when the hazard has no tips
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<TipView>>,
    /// Named areas where the hazard applies, deduplicated
    pub areas: Vec<String>,
    #[serde(skip)]
    severity: Severity,
}

impl HazardView {
    pub fn from_hazard(hazard: &Hazard) -> Self {
        let (severity_label, severity_color) = severity_badge(hazard.severity);

        let tips = if hazard.tips.is_empty() {
            None
        } else {
            Some(
                hazard
                    .tips
                    .iter()
                    .map(|t| TipView {
                        name: t.name.clone(),
                        description: t.description.clone(),
                    })
                    .collect(),
            )
        };

        let mut areas: Vec<String> = Vec::new();
        for presentation in &hazard.presentations {
            let label = match &presentation.location {
                Some(location) => location.name.clone(),
                None => "Unnamed area".to_string(),
            };
            if !areas.contains(&label) {
                areas.push(label);
            }
        }

        Self {
            name: hazard.name.clone(),
            severity_label: severity_label.to_string(),
            severity_color: severity_color.to_string(),
            kind_label: kind_label(hazard.kind).to_string(),
            description: hazard.description.clone(),
            tips,
            areas,
            severity: hazard.severity,
        }
    }
}

/// Build views for a result set, most severe first, ties by name
pub fn build_views(hazards: &[Hazard]) -> Vec<HazardView> {
    let mut views: Vec<HazardView> = hazards.iter().map(HazardView::from_hazard).collect();
    views.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| a.name.cmp(&b.name))
    });
    views
}

/// Lifecycle of one hazard lookup as seen by a renderer
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    /// A lookup is in flight; previous results should not be shown
    Loading,
    /// The lookup finished; an empty list is a real answer
    Loaded(Vec<HazardView>),
    /// The lookup failed with a message suitable for display
    Failed(String),
}

impl LookupState {
    /// True only for a completed lookup that found nothing
    ///
    /// Loading and Failed are never the empty state; "no hazards" is a
    /// positive claim the app may only make after a successful lookup.
    pub fn is_empty_state(&self) -> bool {
        matches!(self, LookupState::Loaded(views) if views.is_empty())
    }
}
