//! Numeric helpers behind the comparison charts.

/// Bin count of the rating histograms.
pub const HISTOGRAM_BINS: usize = 20;

/// One histogram bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub left: f64,
    pub width: f64,
    pub count: usize,
}

impl Bin {
    pub fn center(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Equal-width bins spanning the min..=max of `values`. The last bin is
/// closed on the right so the maximum is counted.
pub fn histogram(values: &[f64], bins: usize) -> Vec<Bin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // A single distinct value still gets a visible unit-wide range.
    let (lo, hi) = if (max - min).abs() < f64::EPSILON {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| Bin {
            left: lo + i as f64 * width,
            width,
            count,
        })
        .collect()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (n - 1 denominator).
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}

/// Scott's rule bandwidth, `None` when it would be zero or undefined.
pub fn scott_bandwidth(values: &[f64]) -> Option<f64> {
    let sd = std_dev(values)?;
    let bw = sd * (values.len() as f64).powf(-0.2);
    (bw > 0.0).then_some(bw)
}

/// Gaussian kernel density estimate of `values`, evaluated at `points`
/// evenly spaced samples covering the data range padded by three bandwidths.
pub fn kde(values: &[f64], points: usize) -> Vec<[f64; 2]> {
    let Some(bw) = scott_bandwidth(values) else {
        return Vec::new();
    };
    let min = values.iter().copied().fold(f64::INFINITY, f64::min) - 3.0 * bw;
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 3.0 * bw;
    let step = (max - min) / (points.max(2) - 1) as f64;
    (0..points.max(2))
        .map(|i| {
            let x = min + i as f64 * step;
            [x, density_at(values, bw, x)]
        })
        .collect()
}

/// Density at `x` of a Gaussian KDE with bandwidth `bw`.
pub fn density_at(values: &[f64], bw: f64, x: f64) -> f64 {
    let norm = 1.0 / (values.len() as f64 * bw * (2.0 * std::f64::consts::PI).sqrt());
    values
        .iter()
        .map(|v| (-0.5 * ((x - v) / bw).powi(2)).exp())
        .sum::<f64>()
        * norm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_every_value() {
        let values = [1.0, 2.0, 2.5, 9.0, 10.0];
        let bins = histogram(&values, HISTOGRAM_BINS);
        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        assert_eq!(bins[0].left, 1.0);
        assert_eq!(bins.last().unwrap().count, 1, "max lands in the last bin");
    }

    #[test]
    fn test_histogram_single_value() {
        let bins = histogram(&[7.0, 7.0], 4);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 2);
        assert!(histogram(&[], 4).is_empty());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), Some(2.5));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_std_dev() {
        let sd = std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((sd - 2.138089935).abs() < 1e-6);
        assert_eq!(std_dev(&[1.0]), None);
    }

    #[test]
    fn test_kde_integrates_to_about_one() {
        let values = [6.0, 6.5, 7.0, 7.2, 8.1, 8.4, 9.0];
        let curve = kde(&values, 400);
        assert_eq!(curve.len(), 400);
        let step = curve[1][0] - curve[0][0];
        let area: f64 = curve.iter().map(|p| p[1] * step).sum();
        assert!((area - 1.0).abs() < 0.02, "area = {area}");
    }

    #[test]
    fn test_kde_needs_spread() {
        assert!(kde(&[5.0], 50).is_empty());
        assert!(kde(&[5.0, 5.0], 50).is_empty());
    }
}
