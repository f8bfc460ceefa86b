//! Piecewise-linear interpolation, sorted search and evenly spaced ranges.
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::error::{VectorError, VectorResult};
use crate::math::Array1;

/// Which matching index `search_sorted` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl FromStr for Side {
    type Err = Infallible;

    /// `"left"` selects [`Side::Left`]; every other string is `Right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "left" { Side::Left } else { Side::Right })
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Linearly interpolate `x` over the control points `(xp, fp)`.
///
/// Queries left of `xp[0]` take `fp[0]`, queries right of the last control
/// point take the last `fp`. Inside the domain the first segment with
/// `xp[i] <= xi <= xp[i + 1]` is used; a zero-width segment yields `fp[i]`.
/// A query that falls in no segment (a `NaN`, or a non-monotonic `xp`)
/// yields `NaN`.
pub fn interp(x: &Array1<f64>, xp: &Array1<f64>, fp: &Array1<f64>) -> VectorResult<Array1<f64>> {
    if xp.len() != fp.len() {
        return Err(VectorError::LengthMismatch {
            expected: xp.len(),
            found: fp.len(),
        });
    }
    let xp = xp.as_slice();
    let fp = fp.as_slice();
    let (Some(&x_lo), Some(&x_hi)) = (xp.first(), xp.last()) else {
        return Err(VectorError::EmptyInput {
            context: "interp".to_string(),
        });
    };
    let last = fp.len() - 1;

    let out = x
        .iter()
        .map(|&xi| {
            if xi < x_lo {
                return fp[0];
            }
            if xi > x_hi {
                return fp[last];
            }
            for i in 0..last {
                if xi >= xp[i] && xi <= xp[i + 1] {
                    if xp[i] == xp[i + 1] {
                        return fp[i];
                    }
                    return fp[i] + (fp[i + 1] - fp[i]) / (xp[i + 1] - xp[i]) * (xi - xp[i]);
                }
            }
            if xi == x_hi {
                fp[last]
            } else {
                f64::NAN
            }
        })
        .collect();
    Ok(out)
}

/// For each value, the index in `array` where it belongs.
///
/// Values below `array[0]` map to `0` and values above the last element map
/// to `len - 1`. Otherwise the candidates are all `j` with
/// `array[j] >= val`; `Left` reports the first, `Right` the last.
pub fn search_sorted(
    array: &Array1<f64>,
    vals: &Array1<f64>,
    side: Side,
) -> VectorResult<Vec<usize>> {
    let data = array.as_slice();
    let (Some(&lo), Some(&hi)) = (data.first(), data.last()) else {
        return Err(VectorError::EmptyInput {
            context: "search_sorted".to_string(),
        });
    };
    let last = data.len() - 1;

    let indices = vals
        .iter()
        .map(|&val| {
            if val < lo {
                return 0;
            }
            if val > hi {
                return last;
            }
            let mut candidates = data
                .iter()
                .enumerate()
                .filter(|&(_, &v)| v >= val)
                .map(|(j, _)| j);
            let found = match side {
                Side::Left => candidates.next(),
                Side::Right => candidates.last(),
            };
            found.unwrap_or(last)
        })
        .collect();
    Ok(indices)
}

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    itertools_num::linspace(start, end, n).collect()
}

/// `n` values from `start` to `end` forming a geometric progression.
///
/// Each value is the previous one times the common ratio.
pub fn geomspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    if n == 0 {
        return Array1::from_vec(Vec::new());
    }
    let ratio = (end / start).powf(1.0 / (n as f64 - 1.0));
    let mut out = Vec::with_capacity(n);
    out.push(start);
    for i in 1..n {
        out.push(out[i - 1] * ratio);
    }
    Array1::from_vec(out)
}

/// `n` values from `10^start` to `10^end`, evenly spaced in exponent.
pub fn logspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    linspace(start, end, n).mapv(|&e| 10f64.powf(e))
}
