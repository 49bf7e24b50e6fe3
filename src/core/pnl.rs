//! Profit-and-loss series across hypothetical underlying prices

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Call and put P&L, element-aligned with `stock_prices`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PnLSeries {
    pub stock_prices: Vec<f64>,
    pub pnl_call: Vec<f64>,
    pub pnl_put: Vec<f64>,
}

impl PnLSeries {
    pub fn len(&self) -> usize {
        self.stock_prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock_prices.is_empty()
    }

    /// 2 x n grid: row 0 is the call, row 1 the put
    pub fn heatmap(&self) -> Array2<f64> {
        Array2::from_shape_fn((2, self.len()), |(row, col)| match row {
            0 => self.pnl_call[col],
            _ => self.pnl_put[col],
        })
    }

    /// Largest absolute P&L, used as the symmetric colour bound.
    ///
    /// NaN entries are skipped; an empty series gives 0.
    pub fn max_abs(&self) -> f64 {
        self.pnl_call
            .iter()
            .chain(self.pnl_put.iter())
            .filter(|v| !v.is_nan())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Index of the sample closest to `price`
    pub fn nearest_index(&self, price: f64) -> Option<usize> {
        self.stock_prices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (*a - price).abs();
                let db = (*b - price).abs();
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
    }
}
