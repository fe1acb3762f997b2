// src/normalize/stats.rs

/// Population mean and standard deviation (ddof = 0) of a price column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceStats {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

impl PriceStats {
    /// `None` for an empty column. Callers pass present prices only, so a
    /// missing value can never leak into the result.
    pub fn from_prices<I>(prices: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
        I::IntoIter: Clone,
    {
        let it = prices.into_iter();
        let (count, sum) = it.clone().fold((0usize, 0.0f64), |(n, s), p| (n + 1, s + p));
        if count == 0 {
            return None;
        }
        let mean = sum / count as f64;
        let var = it.map(|p| (p - mean).powi(2)).sum::<f64>() / count as f64;
        Some(Self { count, mean, std_dev: var.sqrt() })
    }

    /// Distance from the mean in standard deviations. A column with no spread
    /// scores every value 0.
    pub fn z_score(&self, price: f64) -> f64 {
        if self.std_dev == 0.0 { 0.0 } else { (price - self.mean) / self.std_dev }
    }
}
