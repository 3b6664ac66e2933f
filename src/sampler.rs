use crate::config::SampleConfig;
use crate::data::Value;
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::{Bernoulli, Normal};

/// Synthetic sample generator.
///
/// Holds the sample parameters and the random number generator.
pub struct Sampler {
    cfg: SampleConfig,
    rng: ChaCha12Rng,
}

impl Sampler {
    /// Create a new `Sampler`, seeded from `cfg.seed` or from the OS.
    pub fn new(cfg: SampleConfig) -> Result<Self> {
        let rng = match cfg.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng().context("failed to seed rng from the OS")?,
        };
        Ok(Self { cfg, rng })
    }

    /// Draw a sample, replacing each value by a missing entry with
    /// probability `prob_missing`.
    pub fn draw(&mut self) -> Result<Vec<Value>> {
        let vals = normal_random(
            &mut self.rng,
            self.cfg.n_vals,
            self.cfg.mean,
            self.cfg.std_dev,
        )?;

        let missing_dist = Bernoulli::new(self.cfg.prob_missing)
            .context("failed to construct missing distribution")?;
        let data: Vec<Value> = vals
            .into_iter()
            .map(|val| (!missing_dist.sample(&mut self.rng)).then_some(val))
            .collect();

        let n_missing = data.iter().filter(|val| val.is_none()).count();
        log::debug!("drew {} values ({n_missing} missing)", data.len());

        Ok(data)
    }
}

/// Draw `n_vals` values from a normal distribution.
pub fn normal_random<R: Rng + ?Sized>(
    rng: &mut R,
    n_vals: usize,
    mean: f64,
    std_dev: f64,
) -> Result<Vec<f64>> {
    let dist = Normal::new(mean, std_dev).context("failed to construct normal distribution")?;
    Ok((0..n_vals).map(|_| dist.sample(&mut *rng)).collect())
}
