//! # sysmc-toys
//!
//! Toy Monte Carlo combination of correlated and uncorrelated systematic
//! uncertainties:
//! - [`sampler`] draws toy experiments per dataset (one shared correlated
//!   draw per toy, one independent uncorrelated draw per component);
//! - [`histogram`] reduces a toy sample to a fixed-bin histogram with a
//!   mode estimate and RMS;
//! - [`combine`] drives the full pass over all datasets;
//! - [`artifact`] holds the plot-friendly JSON output structures.

pub mod artifact;
pub mod combine;
pub mod histogram;
pub mod sampler;

pub use artifact::CombinationArtifact;
pub use combine::{combine, CombineOptions};
pub use histogram::Histogram;
pub use sampler::{sample_dataset, DatasetToys};
