use serde::{Deserialize, Serialize};

/// One intraday observation in provider order. Only the timestamp and the
/// closing price survive parsing; everything else the provider sends is
/// dropped at the client boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntradaySample {
    pub timestamp: String,
    pub closing_price: f64,
}

/// Chart-ready paired series derived 1:1 from a sample sequence.
///
/// `labels` and `values` are always the same length and index-aligned.
/// Provider order is preserved as-is: no sorting, no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_samples(samples: Vec<IntradaySample>) -> Self {
        let mut labels = Vec::with_capacity(samples.len());
        let mut values = Vec::with_capacity(samples.len());
        for sample in samples {
            labels.push(sample.timestamp);
            values.push(sample.closing_price);
        }
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
