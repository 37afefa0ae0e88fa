//! Antoine vapor-pressure coefficients.
//!
//! `log10(P / bar) = A - B / (C + T / K)`, valid on a closed temperature range.

use serde::{Deserialize, Serialize};

use crate::error::{SubstanceError, SubstanceResult};

/// One temperature-ranged set of Antoine coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntoineRecord {
    /// Lower bound of the range [K], inclusive.
    pub t_low: f64,
    /// Upper bound of the range [K], inclusive.
    pub t_high: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl AntoineRecord {
    pub const fn new(t_low: f64, t_high: f64, a: f64, b: f64, c: f64) -> Self {
        Self {
            t_low,
            t_high,
            a,
            b,
            c,
        }
    }

    /// Whether `t_kelvin` lies in `[t_low, t_high]`.
    pub fn contains(&self, t_kelvin: f64) -> bool {
        self.t_low <= t_kelvin && t_kelvin <= self.t_high
    }

    /// Saturation pressure [bar] from this record, without a range check.
    pub fn pressure_bar(&self, t_kelvin: f64) -> f64 {
        10f64.powf(self.a - self.b / (self.c + t_kelvin))
    }

    fn is_finite(&self) -> bool {
        [self.t_low, self.t_high, self.a, self.b, self.c]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Ordered, non-overlapping Antoine records for one substance.
///
/// Neighbouring records may share a boundary temperature; the lower range
/// answers at that point. An empty table covers no temperature at all.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<AntoineRecord>", into = "Vec<AntoineRecord>")]
pub struct AntoineTable {
    records: Vec<AntoineRecord>,
}

impl AntoineTable {
    /// Validate and sort records by range.
    pub fn new(mut records: Vec<AntoineRecord>) -> SubstanceResult<Self> {
        for (index, record) in records.iter().enumerate() {
            if !record.is_finite() {
                return Err(SubstanceError::InvalidTable {
                    what: "non-finite coefficient or bound",
                    index,
                });
            }
            if record.t_low > record.t_high {
                return Err(SubstanceError::InvalidTable {
                    what: "lower bound above upper bound",
                    index,
                });
            }
        }

        records.sort_by(|a, b| a.t_low.total_cmp(&b.t_low));

        for (index, pair) in records.windows(2).enumerate() {
            if pair[1].t_low < pair[0].t_high {
                return Err(SubstanceError::InvalidTable {
                    what: "overlapping temperature ranges",
                    index: index + 1,
                });
            }
        }

        Ok(Self { records })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[AntoineRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// First record whose closed range contains `t_kelvin`.
    pub fn find(&self, t_kelvin: f64) -> Option<&AntoineRecord> {
        self.records.iter().find(|r| r.contains(t_kelvin))
    }

    /// Saturation pressure [bar], or `None` when no range covers `t_kelvin`.
    pub fn vapor_pressure_bar(&self, t_kelvin: f64) -> Option<f64> {
        self.find(t_kelvin).map(|r| r.pressure_bar(t_kelvin))
    }

    /// Overall `(lowest, highest)` tabulated temperature, ignoring gaps.
    pub fn span(&self) -> Option<(f64, f64)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.t_low, last.t_high))
    }
}

impl TryFrom<Vec<AntoineRecord>> for AntoineTable {
    type Error = SubstanceError;

    fn try_from(records: Vec<AntoineRecord>) -> Result<Self, Self::Error> {
        Self::new(records)
    }
}

impl From<AntoineTable> for Vec<AntoineRecord> {
    fn from(table: AntoineTable) -> Self {
        table.records
    }
}
