//! Toy Sampler & Combiner.
//!
//! Per toy, one standard-normal draw is shared by every component of the
//! dataset (the fully-correlated source) and one standard-normal draw is
//! taken per component (the fully-uncorrelated source). Each retained
//! variant's perturbed values are summed over components, so the dataset
//! aggregate is the sum of its components, not an average.
//!
//! Randomness comes from ONE generator seeded once per run and drawn from
//! repeatedly; runs are reproducible given the same seed, input and
//! selector configuration.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use sysmc_core::types::{Component, Variant};
use sysmc_core::{Error, Result};

/// Toy samples for one dataset, one sequence per retained variant.
#[derive(Debug, Clone)]
pub struct DatasetToys {
    /// Dataset name.
    pub dataset: String,
    /// Number of components that entered the sums.
    pub n_components: usize,
    /// One `(variant, toy sample)` pair per retained variant; each sample
    /// has length `n_toys`, appended left-to-right as toys are drawn.
    pub samples: Vec<(Variant, Vec<f64>)>,
}

/// Per-component central value and half-widths, precomputed once per dataset.
struct ComponentTerms {
    value: f64,
    /// `[|value − corr.m1s|, |value − corr.p1s|]`
    corr: [f64; 2],
    /// `[|value − uncorr.m1s|, |value − uncorr.p1s|]`
    uncorr: [f64; 2],
}

impl ComponentTerms {
    fn new(c: &Component) -> Self {
        Self { value: c.value, corr: c.corr_widths(), uncorr: c.uncorr_widths() }
    }
}

/// Draw `n_toys` toy experiments for one dataset.
///
/// Rejects an empty dataset or a zero toy count with [`Error::EmptySample`]
/// before any draw is taken.
pub fn sample_dataset(
    name: &str,
    components: &BTreeMap<String, Component>,
    variants: &[Variant],
    n_toys: usize,
    rng: &mut StdRng,
) -> Result<DatasetToys> {
    if n_toys == 0 {
        return Err(Error::EmptySample(format!("dataset '{}': toy count must be > 0", name)));
    }
    if components.is_empty() {
        return Err(Error::EmptySample(format!("dataset '{}' has no components", name)));
    }

    let terms: Vec<ComponentTerms> = components
        .iter()
        .map(|(comp_name, c)| {
            tracing::debug!(
                component = %comp_name,
                value = c.value,
                corr_m1s = c.corr_widths()[0],
                corr_p1s = c.corr_widths()[1],
                uncorr_m1s = c.uncorr_widths()[0],
                uncorr_p1s = c.uncorr_widths()[1],
                "component half-widths"
            );
            ComponentTerms::new(c)
        })
        .collect();

    let mut samples: Vec<Vec<f64>> =
        variants.iter().map(|_| Vec::with_capacity(n_toys)).collect();

    for _toy in 0..n_toys {
        // One correlated draw shared by every component of this toy.
        let r_corr: f64 = StandardNormal.sample(rng);

        // Accumulators are local to the toy iteration.
        let mut sums = vec![0.0_f64; variants.len()];
        for t in &terms {
            // One uncorrelated draw per component per toy.
            let r_uncorr: f64 = StandardNormal.sample(rng);
            for (sum, v) in sums.iter_mut().zip(variants) {
                *sum += t.value
                    + r_corr * t.corr[v.corr.index()]
                    + r_uncorr * t.uncorr[v.uncorr.index()];
            }
        }
        for (sample, sum) in samples.iter_mut().zip(&sums) {
            sample.push(*sum);
        }
    }

    Ok(DatasetToys {
        dataset: name.to_string(),
        n_components: terms.len(),
        samples: variants.iter().copied().zip(samples).collect(),
    })
}
