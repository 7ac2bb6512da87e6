use serde::{Deserialize, Serialize};

/// One bar of the wealth histogram.
///
/// `lo` and `hi` are inclusive bounds; `label` is `"lo-hi"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub label: String,
    pub lo: i64,
    pub hi: i64,
    pub count: usize,
}

impl HistogramBin {
    #[must_use]
    pub fn new(lo: i64, hi: i64, count: usize) -> Self {
        Self {
            label: format!("{lo}-{hi}"),
            lo,
            hi,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        let bin = HistogramBin::new(3, 7, 2);
        assert_eq!(bin.label, "3-7");
    }
}
