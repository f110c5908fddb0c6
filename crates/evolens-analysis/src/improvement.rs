//! Generation-to-generation improvement rate.

use evolens_core::error::{EvolensError, Result};
use serde::{Deserialize, Serialize};

/// First differences of the best-of-generation series, with their mean.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementRate {
    /// `value[i] - value[i-1]` for i = 1..n-1.
    pub deltas: Vec<f64>,
    pub mean: f64,
}

/// Compute the improvement rate.
///
/// Needs at least two generations: with one, the delta sequence would be
/// empty and its mean undefined, so that case fails explicitly instead of
/// producing a silent NaN.
pub fn improvement_rate(series: &[f64]) -> Result<ImprovementRate> {
    if series.len() < 2 {
        return Err(EvolensError::insufficient_data(2, series.len()));
    }
    let deltas: Vec<f64> = series.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = deltas.iter().sum::<f64>() / deltas.len() as f64;
    Ok(ImprovementRate { deltas, mean })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_differences_and_mean() {
        let rate = improvement_rate(&[10.0, 12.0, 9.0, 15.0]).unwrap();
        assert_eq!(rate.deltas, vec![2.0, -3.0, 6.0]);
        assert!((rate.mean - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn two_generations_yield_one_delta() {
        let rate = improvement_rate(&[4.0, 7.5]).unwrap();
        assert_eq!(rate.deltas, vec![3.5]);
        assert_eq!(rate.mean, 3.5);
    }

    #[test]
    fn regressions_show_as_negative_deltas() {
        let rate = improvement_rate(&[5.0, 3.0, 1.0]).unwrap();
        assert_eq!(rate.deltas, vec![-2.0, -2.0]);
        assert_eq!(rate.mean, -2.0);
    }

    #[test]
    fn single_generation_fails_explicitly() {
        let err = improvement_rate(&[10.0]).unwrap_err();
        assert!(err.to_string().contains("at least 2"));
        assert!(improvement_rate(&[]).is_err());
    }
}
