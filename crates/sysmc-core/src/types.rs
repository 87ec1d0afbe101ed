//! Data model for the toy combination.
//!
//! A `Component` carries its central value plus two pairs of *absolute*
//! alternate values (the component's value re-evaluated at the −1σ/+1σ
//! settings of the correlated and uncorrelated systematic source). The
//! uncertainty magnitude is always the distance `|value − alternate|`; the
//! sign of a toy's shift comes from the random draw, never from which side
//! the alternate value sits on.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Absolute alternate values at the −1σ and +1σ settings of one source.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ShiftBasis {
    /// Component value at the −1σ setting.
    pub m1s: f64,
    /// Component value at the +1σ setting.
    pub p1s: f64,
}

/// One measurement component of a dataset.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Component {
    /// Central value.
    pub value: f64,
    /// Alternate values under the fully-correlated source.
    pub corr: ShiftBasis,
    /// Alternate values under the fully-uncorrelated source.
    pub uncorr: ShiftBasis,
}

impl Component {
    /// Half-widths `[|value − m1s|, |value − p1s|]` for the correlated source.
    pub fn corr_widths(&self) -> [f64; 2] {
        [(self.value - self.corr.m1s).abs(), (self.value - self.corr.p1s).abs()]
    }

    /// Half-widths `[|value − m1s|, |value − p1s|]` for the uncorrelated source.
    pub fn uncorr_widths(&self) -> [f64; 2] {
        [(self.value - self.uncorr.m1s).abs(), (self.value - self.uncorr.p1s).abs()]
    }
}

/// Which alternate value a variant evaluates a source at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Evaluate at the −1σ alternate value.
    M1s,
    /// Evaluate at the +1σ alternate value.
    P1s,
}

impl Sign {
    /// Index into the `[m1s, p1s]` half-width pairs.
    pub fn index(self) -> usize {
        match self {
            Sign::M1s => 0,
            Sign::P1s => 1,
        }
    }

    /// Short label used in histogram names and artifacts.
    pub fn label(self) -> &'static str {
        match self {
            Sign::M1s => "m1s",
            Sign::P1s => "p1s",
        }
    }
}

/// Tri-state selector for one source, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMode {
    /// Only the −1σ alternate value.
    M1s,
    /// Only the +1σ alternate value.
    P1s,
    /// Both alternate values.
    Both,
}

impl SignMode {
    /// The signs this selector retains.
    pub fn signs(self) -> &'static [Sign] {
        match self {
            SignMode::M1s => &[Sign::M1s],
            SignMode::P1s => &[Sign::P1s],
            SignMode::Both => &[Sign::M1s, Sign::P1s],
        }
    }
}

impl FromStr for SignMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "m1s" => Ok(SignMode::M1s),
            "p1s" => Ok(SignMode::P1s),
            "both" => Ok(SignMode::Both),
            other => Err(Error::InvalidSelector(format!(
                "'{}' (expected 'm1s', 'p1s' or 'both')",
                other
            ))),
        }
    }
}

/// One retained (correlated-sign, uncorrelated-sign) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant {
    /// Sign for the correlated source.
    pub corr: Sign,
    /// Sign for the uncorrelated source.
    pub uncorr: Sign,
}

impl Variant {
    /// Cross the two selector domains once at setup.
    ///
    /// Cardinality: both×both → 4, one `both` → 2, neither → 1.
    pub fn cross(corr_mode: SignMode, uncorr_mode: SignMode) -> Vec<Variant> {
        let mut out = Vec::new();
        for &corr in corr_mode.signs() {
            for &uncorr in uncorr_mode.signs() {
                out.push(Variant { corr, uncorr });
            }
        }
        out
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "corr_{}_uncorr_{}", self.corr.label(), self.uncorr.label())
    }
}
