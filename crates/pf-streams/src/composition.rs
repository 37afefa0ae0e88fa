//! Mole fractions keyed by substance tag.

use serde::{Deserialize, Serialize};

/// Ordered `(tag, mole fraction)` pairs.
///
/// Unlike a normalized mixture, fractions are stored exactly as given: a
/// flash writes its outlet fractions without rescaling them to sum to one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    items: Vec<(String, f64)>,
}

impl Composition {
    /// All-zero composition over `tags`.
    pub fn zeros<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: tags.into_iter().map(|t| (t.into(), 0.0)).collect(),
        }
    }

    pub fn get(&self, tag: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, x)| *x)
    }

    /// Overwrite the fraction of `tag`; returns false when `tag` is absent.
    pub fn set(&mut self, tag: &str, value: f64) -> bool {
        match self.items.iter_mut().find(|(t, _)| t == tag) {
            Some(slot) => {
                slot.1 = value;
                true
            }
            None => false,
        }
    }

    /// Fractions in substance order.
    pub fn values(&self) -> Vec<f64> {
        self.items.iter().map(|(_, x)| *x).collect()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(t, _)| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.items.iter().map(|(t, x)| (t.as_str(), *x))
    }

    pub fn sum(&self) -> f64 {
        self.items.iter().map(|(_, x)| x).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_then_set() {
        let mut comp = Composition::zeros(["propane", "n-hexane"]);
        assert_eq!(comp.values(), vec![0.0, 0.0]);
        assert!(comp.set("n-hexane", 0.7));
        assert!(!comp.set("water", 0.3));
        assert_eq!(comp.get("n-hexane"), Some(0.7));
        assert_eq!(comp.get("water"), None);
    }

    #[test]
    fn fractions_are_not_normalized() {
        let mut comp = Composition::zeros(["a", "b"]);
        comp.set("a", 0.6);
        comp.set("b", 0.6);
        assert!((comp.sum() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn preserves_order() {
        let comp = Composition::zeros(["c", "a", "b"]);
        assert_eq!(comp.tags().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }
}
