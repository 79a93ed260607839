use ndarray::Array2;

use crate::config::ThresholdMethod;
use crate::consts::OTSU_HISTOGRAM_BINS;

/// Compute the threshold value using the configured method.
pub fn compute_threshold(data: &Array2<f32>, method: &ThresholdMethod) -> f32 {
    match method {
        ThresholdMethod::Otsu => otsu_threshold(data),
        ThresholdMethod::MeanPlusSigma(k) => {
            let (mean, std) = mean_stddev(data);
            (mean + *k as f64 * std) as f32
        }
        ThresholdMethod::Fixed(t) => *t,
    }
}

pub fn mean_stddev(data: &Array2<f32>) -> (f64, f64) {
    let n = data.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    let var = data.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}

/// Otsu's threshold over the image's own value range.
///
/// Returns the upper edge of the last background bin, so foreground is
/// `v > threshold`. A flat image returns its single value.
pub fn otsu_threshold(data: &Array2<f32>) -> f32 {
    let (lo, hi) = data
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = hi - lo;
    if !(span > 0.0) {
        return lo;
    }

    let bins = OTSU_HISTOGRAM_BINS;
    let mut histogram = vec![0u64; bins];
    for &v in data.iter() {
        let bin = (((v - lo) / span * bins as f32) as usize).min(bins - 1);
        histogram[bin] += 1;
    }

    let total = data.len() as f64;
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg = 0.0_f64;
    let mut sum_bg = 0.0_f64;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);
        if between > best_variance {
            best_variance = between;
            best_bin = i;
        }
    }

    lo + (best_bin + 1) as f32 / bins as f32 * span
}
