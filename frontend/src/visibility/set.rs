use std::collections::HashSet;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThresholdError {
    #[error("Visibility threshold must be within [0, 1], got {0}")]
    OutOfRange(f64),
}

/// Fraction of an element's area that has to be inside the viewport for it to
/// count as visible. Each page picks its own; there is no default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    /// Home page sections.
    pub const SECTION: Threshold = Threshold(0.3);
    /// Service detail pages, which only reveal blocks that are almost fully on screen.
    pub const DETAIL: Threshold = Threshold(0.8);

    /// Entry point for any threshold other than the page constants.
    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ThresholdError::OutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// One intersection report for an observed element.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSample {
    pub id: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn new(id: impl Into<String>, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            ratio,
            is_intersecting,
        }
    }

    fn meets(&self, threshold: Threshold) -> bool {
        self.is_intersecting && self.ratio >= threshold.value()
    }
}

/// Identifiers of the observed elements currently at or above the threshold.
///
/// Membership follows the latest report for each element, so a section that
/// scrolls out and back in goes hidden and then visible again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilitySet {
    ids: HashSet<String>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: &IntersectionSample, threshold: Threshold) {
        // Unnamed elements cannot be looked up by any section.
        if sample.id.is_empty() {
            return;
        }
        if sample.meets(threshold) {
            self.ids.insert(sample.id.clone());
        } else {
            self.ids.remove(&sample.id);
        }
    }

    /// Applies a coalesced batch in delivery order; later reports for the same id win.
    pub fn apply<'a>(
        &mut self,
        samples: impl IntoIterator<Item = &'a IntersectionSample>,
        threshold: Threshold,
    ) {
        for sample in samples {
            self.record(sample, threshold);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

/// CSS classes for a revealable block: `base reveal`, plus `visible` while `id` is in `set`.
pub fn reveal_class(set: &VisibilitySet, id: &str, base: &str) -> String {
    let mut class = String::with_capacity(base.len() + 16);
    if !base.is_empty() {
        class.push_str(base);
        class.push(' ');
    }
    class.push_str("reveal");
    if set.contains(id) {
        class.push_str(" visible");
    }
    class
}
