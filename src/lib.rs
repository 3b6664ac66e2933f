//! Descriptive statistics (mean, sample standard deviation, count) of a
//! numeric sample with missing entries, reported only when the mean is
//! strictly positive.
//!
//! ```
//! use statsum::summary::summarize;
//!
//! let summary = summarize(&[Some(1.0), None, Some(3.0)]).unwrap();
//! assert_eq!(summary.n, 3);
//! assert_eq!(summary.mean, 2.0);
//!
//! assert_eq!(summarize(&[Some(-5.0), Some(-1.0)]), None);
//! ```

pub mod config;
pub mod data;
pub mod sampler;
pub mod stats;
pub mod summary;
