//! Tail alignment of an observed series against a forecast
//!
//! Forecasts are evaluated against the most recent observations: with `k =
//! min(actual.len(), predicted.len())`, the last `k` actual values are paired
//! in order with the first `k` predicted values.

/// Iterator over `(actual, predicted)` pairs produced by [`tail_pairs`]
#[derive(Debug, Clone)]
pub struct TailPairs<'a> {
    actual: &'a [f64],
    predicted: &'a [f64],
    index: usize,
}

impl<'a> TailPairs<'a> {
    /// Number of pairs this alignment yields in total
    pub fn pair_count(&self) -> usize {
        self.actual.len()
    }
}

impl Iterator for TailPairs<'_> {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let actual = *self.actual.get(self.index)?;
        let predicted = self.predicted[self.index];
        self.index += 1;
        Some((actual, predicted))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.actual.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TailPairs<'_> {}

/// Pair the tail of `actual` with the head of `predicted`
pub fn tail_pairs<'a>(actual: &'a [f64], predicted: &'a [f64]) -> TailPairs<'a> {
    let k = actual.len().min(predicted.len());
    TailPairs {
        actual: &actual[actual.len() - k..],
        predicted: &predicted[..k],
        index: 0,
    }
}
