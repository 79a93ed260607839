use std::sync::{Arc, PoisonError, RwLock};

/// Visible extent along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f64,
    pub end: f64,
}

impl Span {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

/// Shared handle to a viewport span.
///
/// Cloning the handle shares the underlying span: every panel holding a clone
/// observes `set_range` calls made through any other clone. Use
/// [`ViewportRange::detached`] for an independent copy.
#[derive(Clone, Debug)]
pub struct ViewportRange {
    span: Arc<RwLock<Span>>,
}

impl ViewportRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            span: Arc::new(RwLock::new(Span::new(start, end))),
        }
    }

    /// The unit interval [0, 1].
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn get(&self) -> Span {
        *self.span.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn start(&self) -> f64 {
        self.get().start
    }

    pub fn end(&self) -> f64 {
        self.get().end
    }

    /// Replace the visible extent for every holder of this range.
    pub fn set_range(&self, start: f64, end: f64) {
        *self.span.write().unwrap_or_else(PoisonError::into_inner) = Span::new(start, end);
    }

    /// Shift the extent by `delta` data units.
    pub fn pan(&self, delta: f64) {
        self.update(|s| Span::new(s.start + delta, s.end + delta));
    }

    /// Scale the extent about `center`; `factor` < 1 zooms in.
    pub fn zoom(&self, center: f64, factor: f64) {
        self.update(|s| {
            Span::new(
                center + (s.start - center) * factor,
                center + (s.end - center) * factor,
            )
        });
    }

    /// Read-modify-write under one write lock.
    fn update(&self, f: impl FnOnce(Span) -> Span) {
        let mut span = self.span.write().unwrap_or_else(PoisonError::into_inner);
        *span = f(*span);
    }

    /// A new, unshared range with the same current extent.
    pub fn detached(&self) -> Self {
        let s = self.get();
        Self::new(s.start, s.end)
    }

    /// True if both handles refer to the same shared span.
    pub fn ptr_eq(&self, other: &ViewportRange) -> bool {
        Arc::ptr_eq(&self.span, &other.span)
    }
}

/// Ordered categories along a categorical axis.
#[derive(Clone, Debug, PartialEq)]
pub struct FactorRange {
    pub factors: Vec<String>,
}

impl FactorRange {
    pub fn new(factors: Vec<String>) -> Self {
        Self { factors }
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn index_of(&self, factor: &str) -> Option<usize> {
        self.factors.iter().position(|f| f == factor)
    }
}

/// Range attached to one panel axis.
#[derive(Clone, Debug)]
pub enum AxisRange {
    Linear(ViewportRange),
    Factor(FactorRange),
}

impl AxisRange {
    pub fn as_linear(&self) -> Option<&ViewportRange> {
        match self {
            Self::Linear(r) => Some(r),
            Self::Factor(_) => None,
        }
    }

    pub fn as_factor(&self) -> Option<&FactorRange> {
        match self {
            Self::Factor(f) => Some(f),
            Self::Linear(_) => None,
        }
    }

    /// True if both are linear ranges sharing one span.
    pub fn is_shared_with(&self, other: &AxisRange) -> bool {
        match (self, other) {
            (Self::Linear(a), Self::Linear(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}
