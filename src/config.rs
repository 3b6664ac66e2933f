use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Tool configuration.
///
/// Loaded from a TOML file and validated before use. Missing sections and
/// fields take their default values. See [`Config::from_file`] for loading.
#[derive(Debug, Default, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Synthetic sample parameters.
    pub sample: SampleConfig,
    /// Output parameters.
    pub output: OutputConfig,
}

/// Parameters of the synthetic normal sample.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SampleConfig {
    /// Number of values drawn.
    pub n_vals: usize,
    /// Mean of the normal distribution.
    pub mean: f64,
    /// Standard deviation of the normal distribution.
    pub std_dev: f64,
    /// Probability of replacing each drawn value by a missing entry.
    pub prob_missing: f64,
    /// Random number generator seed (taken from the OS if absent).
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            n_vals: 100,
            mean: 10.0,
            std_dev: 2.0,
            prob_missing: 0.0,
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Number of decimal places printed.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: 6 }
    }
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// The file must be TOML-encoded. Performs validation on all
    /// parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    /// Parse and validate a [`Config`] from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let sample = &self.sample;
        check_num(sample.n_vals, 1..=1_000_000).context("invalid number of values")?;
        check_num(sample.mean, f64::MIN..=f64::MAX).context("invalid mean")?;
        check_num(sample.std_dev, 0.0..=f64::MAX).context("invalid standard deviation")?;
        check_num(sample.prob_missing, 0.0..=1.0).context("invalid missing probability")?;

        check_num(self.output.precision, 0..=17).context("invalid output precision")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    // NaN is rejected here since it is not contained in any range.
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
