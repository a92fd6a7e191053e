//! Output series and the sinks that receive it.
//!
//! The external format is one IEEE-754 double per line, no header and no
//! trailing delimiter beyond the line break. Values are written with Rust's
//! shortest round-trip formatting, so reading a line back yields the exact
//! same `f64`.

use std::io::{self, BufWriter, Write};

/// Ordered, append-only sequence of synthetic prices, one per step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty series with room for `steps` values.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            values: Vec::with_capacity(steps),
        }
    }

    /// Appends one value.
    pub fn push(&mut self, price: f64) {
        self.values.push(price);
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in step order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Last value, if any.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Iterates over the values.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Consumes the series, returning the underlying vector.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Descriptive statistics, or `None` for an empty series.
    pub fn summary(&self) -> Option<SeriesSummary> {
        SeriesSummary::from_values(&self.values)
    }

    /// Writes one value per line.
    pub fn write_lines<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut sink = LineSink::new(writer);
        for &value in &self.values {
            sink.accept(value)?;
        }
        sink.finish()
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl From<Series> for Vec<f64> {
    fn from(series: Series) -> Self {
        series.values
    }
}

impl IntoIterator for Series {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Descriptive statistics of a series.
///
/// `min`, `max` and `mean` cover finite values only; they are NaN when the
/// series holds no finite value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSummary {
    /// Number of values
    pub count: usize,
    /// First value
    pub first: f64,
    /// Last value
    pub last: f64,
    /// Smallest finite value
    pub min: f64,
    /// Largest finite value
    pub max: f64,
    /// Mean of finite values
    pub mean: f64,
    /// Number of NaN or infinite values
    pub non_finite: usize,
}

impl SeriesSummary {
    /// Summary of a series holding only `first`.
    pub fn new(first: f64) -> Self {
        let mut summary = Self {
            count: 0,
            first,
            last: first,
            min: f64::NAN,
            max: f64::NAN,
            mean: f64::NAN,
            non_finite: 0,
        };
        summary.update(first);
        summary
    }

    /// Folds in the next value of the series.
    ///
    /// The mean is a running mean over finite values, so no value needs to
    /// be kept.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        self.last = value;
        if !value.is_finite() {
            self.non_finite += 1;
            return;
        }

        let finite = self.count - self.non_finite;
        if finite == 1 {
            self.min = value;
            self.max = value;
            self.mean = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
            self.mean += (value - self.mean) / finite as f64;
        }
    }

    fn from_values(values: &[f64]) -> Option<Self> {
        let (&first, rest) = values.split_first()?;
        let mut summary = Self::new(first);
        for &value in rest {
            summary.update(value);
        }
        Some(summary)
    }
}

/// Receiver of prices as the driver produces them.
pub trait SeriesSink {
    /// Receives the next price.
    fn accept(&mut self, price: f64) -> io::Result<()>;

    /// Called once after the last price.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SeriesSink for Series {
    fn accept(&mut self, price: f64) -> io::Result<()> {
        self.push(price);
        Ok(())
    }
}

impl<S: SeriesSink + ?Sized> SeriesSink for &mut S {
    fn accept(&mut self, price: f64) -> io::Result<()> {
        (**self).accept(price)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Sink that keeps only a [`SeriesSummary`] of what it receives.
#[derive(Clone, Copy, Debug, Default)]
pub struct SummarySink {
    summary: Option<SeriesSummary>,
}

impl SummarySink {
    /// Creates a sink that has seen nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary so far, or `None` before the first value.
    pub fn summary(&self) -> Option<SeriesSummary> {
        self.summary
    }
}

impl SeriesSink for SummarySink {
    fn accept(&mut self, price: f64) -> io::Result<()> {
        match &mut self.summary {
            Some(summary) => summary.update(price),
            None => self.summary = Some(SeriesSummary::new(price)),
        }
        Ok(())
    }
}

/// Fans every value out to two sinks, left first.
impl<A: SeriesSink, B: SeriesSink> SeriesSink for (A, B) {
    fn accept(&mut self, price: f64) -> io::Result<()> {
        self.0.accept(price)?;
        self.1.accept(price)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.0.finish()?;
        self.1.finish()
    }
}

/// Buffered sink writing one value per line.
///
/// ```rust
/// use synth_engine::series::{LineSink, SeriesSink};
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.accept(100.5).unwrap();
/// sink.accept(-0.25).unwrap();
/// sink.finish().unwrap();
/// assert_eq!(sink.written(), 2);
/// assert_eq!(sink.into_inner().unwrap(), b"100.5\n-0.25\n");
/// ```
pub struct LineSink<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> LineSink<W> {
    /// Wraps `writer` in a buffered line sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            written: 0,
        }
    }

    /// Number of values written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

impl<W: Write> SeriesSink for LineSink<W> {
    fn accept(&mut self, price: f64) -> io::Result<()> {
        writeln!(self.writer, "{}", price)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
