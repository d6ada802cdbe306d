use crate::{Curve, CurveError};

use num_bigint::BigInt;
use num_integer::Integer;

use std::fmt;
use std::sync::Arc;

/// A finite point of a curve with coordinates reduced into `[0, p)`.
///
/// Can only be obtained through [`crate::Point::new`] or the group
/// operations, so the curve equation always holds.
#[derive(Debug, Clone)]
pub struct AffinePoint {
    curve: Arc<Curve>,
    x: BigInt,
    y: BigInt,
    label: String,
}

impl fmt::Display for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "Point ({}, {})", self.x, self.y)
        } else {
            write!(f, "Point {} = ({}, {})", self.label, self.x, self.y)
        }
    }
}

impl PartialEq for AffinePoint {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.x == other.x && self.y == other.y
    }
}

impl Eq for AffinePoint {}

impl AffinePoint {
    pub(crate) fn new(
        curve: &Arc<Curve>,
        x: BigInt,
        y: BigInt,
        label: String,
    ) -> Result<Self, CurveError> {
        let x = x.mod_floor(curve.field());
        let y = y.mod_floor(curve.field());
        if !curve.contains(&x, &y) {
            return Err(CurveError::PointNotOnCurve {
                x,
                y,
                curve: curve.to_string(),
            });
        }

        Ok(Self {
            curve: Arc::clone(curve),
            x,
            y,
            label,
        })
    }

    pub fn curve(&self) -> &Arc<Curve> {
        &self.curve
    }

    pub fn x(&self) -> &BigInt {
        &self.x
    }

    pub fn y(&self) -> &BigInt {
        &self.y
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    /// `(x, -y)`, with the label primed.
    pub(crate) fn negate(&self) -> Self {
        let label = if self.label.is_empty() {
            String::new()
        } else {
            format!("{}'", self.label)
        };
        Self {
            curve: Arc::clone(&self.curve),
            x: self.x.clone(),
            y: (-&self.y).mod_floor(self.curve.field()),
            label,
        }
    }
}
