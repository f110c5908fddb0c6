//! Trend analysis — ordinary least-squares fit of the best-of-generation
//! series against the 0-based generation index.
//!
//! Outputs match the usual regression summary: slope, intercept, R², a
//! two-sided p-value for the slope (Student's t on n-2 degrees of
//! freedom), and the slope's standard error. The t-distribution tail is
//! evaluated through the regularized incomplete beta function, computed
//! locally with Lentz's continued fraction.

use evolens_core::error::{EvolensError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction label for the fitted slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Constant,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendDirection::Increasing => write!(f, "increasing"),
            TrendDirection::Decreasing => write!(f, "decreasing"),
            TrendDirection::Constant => write!(f, "constant"),
        }
    }
}

/// Linear regression summary over the best-of-generation series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub p_value: f64,
    pub std_err: f64,
    pub trend: TrendDirection,
}

/// Fit a least-squares line through `(generation, fitness)` points.
///
/// Needs at least two generations; fewer is an explicit error rather than
/// a degenerate fit. With exactly two points the fit is exact, leaving
/// zero residual degrees of freedom: std_err is 0 and the p-value 1.
pub fn linear_trend(series: &[f64]) -> Result<TrendAnalysis> {
    let n = series.len();
    if n < 2 {
        return Err(EvolensError::insufficient_data(2, n));
    }

    let nf = n as f64;
    let x_mean = (nf - 1.0) / 2.0;
    let y_mean = series.iter().sum::<f64>() / nf;

    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    let mut ss_yy = 0.0;
    for (i, &y) in series.iter().enumerate() {
        let dx = i as f64 - x_mean;
        let dy = y - y_mean;
        ss_xx += dx * dx;
        ss_xy += dx * dy;
        ss_yy += dy * dy;
    }

    let slope = ss_xy / ss_xx;
    let intercept = y_mean - slope * x_mean;

    let r = if ss_yy == 0.0 {
        0.0
    } else {
        (ss_xy / (ss_xx * ss_yy).sqrt()).clamp(-1.0, 1.0)
    };
    let r_squared = r * r;

    let df = n - 2;
    let (std_err, p_value) = if df == 0 {
        (0.0, 1.0)
    } else {
        let residual = (ss_yy - slope * ss_xy).max(0.0);
        let std_err = (residual / df as f64 / ss_xx).sqrt();
        (std_err, slope_p_value(r, df))
    };

    let trend = if slope > 0.0 {
        TrendDirection::Increasing
    } else if slope < 0.0 {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Constant
    };

    Ok(TrendAnalysis {
        slope,
        intercept,
        r_squared,
        p_value,
        std_err,
        trend,
    })
}

/// Two-sided p-value for the slope's t-statistic, df = n - 2.
fn slope_p_value(r: f64, df: usize) -> f64 {
    let df = df as f64;
    let denom = 1.0 - r * r;
    if denom <= f64::EPSILON {
        // Perfect fit: the slope is exact, not a noisy estimate.
        return 0.0;
    }
    let t = r * (df / denom).sqrt();
    // P(|T| > t) = I_{df/(df+t^2)}(df/2, 1/2)
    incomplete_beta(df / 2.0, 0.5, df / (df + t * t)).clamp(0.0, 1.0)
}

/// Regularized incomplete beta function I_x(a, b).
fn incomplete_beta(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b)
        + a * x.ln()
        + b * (1.0 - x).ln();
    let front = ln_front.exp();
    // The continued fraction converges fastest below the distribution's
    // mean; use the symmetry relation above it.
    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued fraction for the incomplete beta, Lentz's method.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    const MAX_ITER: usize = 200;
    const EPS: f64 = 1e-14;
    const TINY: f64 = 1e-300;

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < TINY {
        d = TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=MAX_ITER {
        let mf = m as f64;
        let m2 = 2.0 * mf;

        let aa = mf * (b - mf) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(a + mf) * (qab + mf) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < TINY {
            d = TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < TINY {
            c = TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < EPS {
            break;
        }
    }
    h
}

/// Natural log of the gamma function, Lanczos approximation.
fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 6] = [
        76.180_091_729_471_46,
        -86.505_320_329_416_77,
        24.014_098_240_830_91,
        -1.231_739_572_450_155,
        0.120_865_097_386_617_9e-2,
        -0.539_523_938_495_3e-5,
    ];

    let mut tmp = x + 5.5;
    tmp -= (x + 0.5) * tmp.ln();
    let mut series = 1.000_000_000_190_015;
    let mut y = x;
    for coeff in COEFFS {
        y += 1.0;
        series += coeff / y;
    }
    -tmp + (2.506_628_274_631_000_5 * series / x).ln()
}
