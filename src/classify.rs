//! Audio-feature aggregation and element classification.
//!
//! The four feature dimensions of the user's top tracks are summed into a
//! [`FeatureTotals`] and mapped to one of four bending elements by ordered
//! threshold rules. Classification always runs on the raw float sums;
//! truncation to integers happens only for display.

use crate::types::TrackFeatures;

/// Running sums of the four audio-feature dimensions over a set of tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FeatureTotals {
    pub dance: f64,
    pub acoustic: f64,
    pub instrumental: f64,
    pub energy: f64,
}

impl FeatureTotals {
    /// Sums the features of all analyzable tracks.
    ///
    /// Tracks without analyzable features come back from the provider as
    /// null entries; they are skipped entirely rather than counted as
    /// zero-valued contributions.
    pub fn accumulate<'a, I>(features: I) -> Self
    where
        I: IntoIterator<Item = &'a Option<TrackFeatures>>,
    {
        let mut totals = FeatureTotals::default();
        for feature in features.into_iter().flatten() {
            totals.dance += feature.danceability;
            totals.acoustic += feature.acousticness;
            totals.instrumental += feature.instrumentalness;
            totals.energy += feature.energy;
        }
        totals
    }
}

/// The closed set of bending elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Earth,
    Air,
    Water,
    Fire,
}

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Water => "water",
            Element::Fire => "fire",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            Element::Earth => "Earthbender",
            Element::Air => "Airbender",
            Element::Water => "Waterbender",
            Element::Fire => "Firebender",
        }
    }
}

/// Maps aggregated feature sums to an element.
///
/// Rules are evaluated first-match-wins; they are not mutually exclusive
/// by construction, so the order matters. Thresholds apply to the raw
/// float sums, not the truncated display values.
pub fn classify(totals: &FeatureTotals) -> Element {
    if totals.instrumental > 2.6 && totals.acoustic > 8.0 {
        Element::Earth
    } else if totals.instrumental > 5.0 || (totals.energy > 13.0 && totals.acoustic > 9.0) {
        Element::Air
    } else if totals.acoustic > 10.0 && totals.dance > 10.0 {
        Element::Water
    } else if totals.energy > 13.0 && totals.dance > 13.0 {
        Element::Fire
    } else {
        Element::Earth
    }
}

/// Truncates a feature sum toward zero for display.
pub fn trunc(value: f64) -> i64 {
    value.trunc() as i64
}
