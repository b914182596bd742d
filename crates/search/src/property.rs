//! Weighted text fields exposed by searchable items.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

/// Weight applied when none is given.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One piece of text to match against, with its weight.
///
/// The match cost for this property is divided by the weight, so a heavier
/// property wins over a lighter one with the same raw cost. Weights are
/// always positive and finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PropertyRecord")]
pub struct SearchProperty {
    text: String,
    weight: f64,
}

#[derive(Deserialize)]
struct PropertyRecord {
    text: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl From<PropertyRecord> for SearchProperty {
    fn from(record: PropertyRecord) -> Self {
        Self::weighted(record.text, record.weight)
    }
}

impl SearchProperty {
    /// Creates a property with the default weight of 1.0.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Creates a weighted property.
    ///
    /// A weight that is zero, negative or not finite falls back to
    /// [`DEFAULT_WEIGHT`] so one bad field cannot poison a whole ranking.
    pub fn weighted(text: impl Into<String>, weight: f64) -> Self {
        let text = text.into();
        let weight = if is_valid_weight(weight) {
            weight
        } else {
            tracing::warn!(weight, text = %text, "Invalid property weight, using default");
            DEFAULT_WEIGHT
        };
        Self { text, weight }
    }

    /// Creates a weighted property, rejecting invalid weights.
    pub fn try_weighted(text: impl Into<String>, weight: f64) -> Result<Self> {
        if !is_valid_weight(weight) {
            return Err(SearchError::InvalidWeight(weight));
        }
        Ok(Self {
            text: text.into(),
            weight,
        })
    }

    /// The text to match against.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The weight (always positive and finite).
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Apply this property's weight to a raw match cost.
    #[inline]
    pub fn weigh(&self, cost: f64) -> f64 {
        cost / self.weight
    }
}

impl From<&str> for SearchProperty {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SearchProperty {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl<S: Into<String>> From<(S, f64)> for SearchProperty {
    fn from((text, weight): (S, f64)) -> Self {
        Self::weighted(text, weight)
    }
}

#[inline]
fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Types that expose weighted text for searching.
pub trait Searchable {
    /// The properties to match a query against.
    fn search_properties(&self) -> Vec<SearchProperty>;
}

impl Searchable for SearchProperty {
    fn search_properties(&self) -> Vec<SearchProperty> {
        vec![self.clone()]
    }
}

impl Searchable for Vec<SearchProperty> {
    fn search_properties(&self) -> Vec<SearchProperty> {
        self.clone()
    }
}

impl Searchable for String {
    fn search_properties(&self) -> Vec<SearchProperty> {
        vec![SearchProperty::new(self.as_str())]
    }
}

impl Searchable for &str {
    fn search_properties(&self) -> Vec<SearchProperty> {
        vec![SearchProperty::new(*self)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight() {
        let property = SearchProperty::new("Firefox");
        assert_eq!(property.text(), "Firefox");
        assert_eq!(property.weight(), 1.0);
    }

    #[test]
    fn test_invalid_weight_falls_back() {
        assert_eq!(SearchProperty::weighted("a", 0.0).weight(), DEFAULT_WEIGHT);
        assert_eq!(SearchProperty::weighted("a", -2.0).weight(), DEFAULT_WEIGHT);
        assert_eq!(SearchProperty::weighted("a", f64::NAN).weight(), DEFAULT_WEIGHT);
        assert_eq!(SearchProperty::weighted("a", f64::INFINITY).weight(), DEFAULT_WEIGHT);
        assert_eq!(SearchProperty::weighted("a", 2.5).weight(), 2.5);
    }

    #[test]
    fn test_try_weighted_rejects() {
        let err = SearchProperty::try_weighted("a", 0.0).unwrap_err();
        assert!(matches!(err, SearchError::InvalidWeight(w) if w == 0.0));
        assert!(SearchProperty::try_weighted("a", 0.5).is_ok());
    }

    #[test]
    fn test_weigh_divides() {
        let heavy = SearchProperty::weighted("a", 2.0);
        let light = SearchProperty::weighted("a", 0.5);
        assert_eq!(heavy.weigh(0.1), 0.05);
        assert_eq!(light.weigh(0.1), 0.2);
    }

    #[test]
    fn test_deserialize_defaults_and_clamps() {
        let props: Vec<SearchProperty> = serde_json::from_str(
            r#"[{"text": "a"}, {"text": "b", "weight": 3.0}, {"text": "c", "weight": -1.0}]"#,
        )
        .unwrap();
        assert_eq!(props[0].weight(), 1.0);
        assert_eq!(props[1].weight(), 3.0);
        assert_eq!(props[2].weight(), 1.0);
    }

    #[test]
    fn test_from_tuple() {
        let property: SearchProperty = ("Chrome", 2.0).into();
        assert_eq!(property.text(), "Chrome");
        assert_eq!(property.weight(), 2.0);
    }
}
