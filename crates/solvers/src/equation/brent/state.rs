use zeroin_core::Snapshot;

use crate::equation::Evaluation;

use super::{Point, Step};

/// A bracket point together with data carried from its evaluation.
#[derive(Debug, Clone)]
pub(super) struct Entry<T> {
    pub(super) point: Point,
    pub(super) data: T,
}

impl<T> Entry<T> {
    pub(super) fn new(point: Point, data: T) -> Self {
        Self { point, data }
    }
}

impl<I, O> From<Evaluation<I, O>> for Entry<Snapshot<I, O>> {
    fn from(eval: Evaluation<I, O>) -> Self {
        Self::new(Point::new(eval.x, eval.residual), eval.snapshot)
    }
}

/// Brent iteration state.
///
/// - `b` is the best estimate so far.
/// - `c` is the contrapoint: `f(b)` and `f(c)` have opposite signs, so the
///   root lies between them.
/// - `a` is the previous value of `b` (equal to `c` after a bracket reset).
/// - `d` is the most recent step and `e` the one before it.
#[derive(Debug, Clone)]
pub(super) struct State<T> {
    a: Entry<T>,
    b: Entry<T>,
    c: Entry<T>,
    d: f64,
    e: f64,
}

impl<T: Clone> State<T> {
    /// Seeds the state from two endpoints with opposite residual signs.
    pub(super) fn new(a: Entry<T>, b: Entry<T>) -> Self {
        let width = b.point.x - a.point.x;
        Self {
            c: a.clone(),
            a,
            b,
            d: width,
            e: width,
        }
    }

    /// Makes `b` the point with the smaller residual magnitude.
    ///
    /// When the contrapoint is better, `(a, b, c)` becomes `(b, c, b)`.
    pub(super) fn rotate(&mut self) {
        if self.c.point.is_better_than(&self.b.point) {
            self.a = self.b.clone();
            std::mem::swap(&mut self.b, &mut self.c);
        }
    }

    /// Returns the effective x tolerance around the current best estimate.
    pub(super) fn tolerance(&self, x_abs_tol: f64) -> f64 {
        2.0 * f64::EPSILON * self.b.point.x.abs() + x_abs_tol
    }

    /// Returns the signed half width of the bracket, measured from `b` toward `c`.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * (self.c.point.x - self.b.point.x)
    }

    /// Returns true if the bracket is narrow enough or `b` is a root.
    pub(super) fn is_converged(&self, tol: f64, m: f64, residual_tol: f64) -> bool {
        m.abs() <= tol || self.b.point.residual.abs() <= residual_tol
    }

    /// Chooses the next step size and records it in `d`.
    ///
    /// Interpolation is attempted only when the step before last was at least
    /// `tol` and `a` is worse than `b`. An interpolated step is accepted only
    /// if it lands inside the bracket and is less than half the step before
    /// last; otherwise the solver bisects.
    #[allow(clippy::float_cmp)]
    pub(super) fn select_step(&mut self, tol: f64, m: f64) -> Step {
        let fa = self.a.point.residual;
        let fb = self.b.point.residual;
        let fc = self.c.point.residual;

        if self.e.abs() < tol || fa.abs() <= fb.abs() {
            self.bisect(m);
            return Step::Bisection;
        }

        let s = fb / fa;
        let (step, mut p, mut q) = if self.a.point.x == self.c.point.x {
            (Step::Secant, 2.0 * m * s, 1.0 - s)
        } else {
            let q = fa / fc;
            let r = fb / fc;
            let p = s * (2.0 * m * q * (q - r) - (self.b.point.x - self.a.point.x) * (r - 1.0));
            (Step::InverseQuadratic, p, (q - 1.0) * (r - 1.0) * (s - 1.0))
        };

        if p > 0.0 {
            q = -q;
        } else {
            p = -p;
        }

        let e_prev = self.e;
        self.e = self.d;

        if 2.0 * p < 3.0 * m * q - (tol * q).abs() && p < (0.5 * e_prev * q).abs() {
            self.d = p / q;
            step
        } else {
            self.bisect(m);
            Step::Bisection
        }
    }

    fn bisect(&mut self, m: f64) {
        self.e = m;
        self.d = m;
    }

    /// Returns the next abscissa to evaluate.
    ///
    /// Steps no smaller than `tol` are taken as is; smaller ones move exactly
    /// `tol` toward the contrapoint.
    pub(super) fn next_x(&self, tol: f64, m: f64) -> f64 {
        let b = self.b.point.x;
        if self.d.abs() > tol {
            b + self.d
        } else if m > 0.0 {
            b + tol
        } else {
            b - tol
        }
    }

    /// Accepts the newly evaluated point as `b` and repairs the bracket.
    ///
    /// If the new residual has the same sign as `f(c)` (zero counts as
    /// non-positive), the previous `b` becomes the contrapoint.
    pub(super) fn accept(&mut self, entry: Entry<T>) {
        self.a = std::mem::replace(&mut self.b, entry);

        let fb = self.b.point.residual;
        let fc = self.c.point.residual;
        if (fb > 0.0 && fc > 0.0) || (fb <= 0.0 && fc <= 0.0) {
            self.c = self.a.clone();
            self.e = self.b.point.x - self.a.point.x;
            self.d = self.e;
        }
    }

    /// Returns the current best point.
    pub(super) fn best(&self) -> Point {
        self.b.point
    }

    /// Returns the current contrapoint.
    pub(super) fn contrapoint(&self) -> Point {
        self.c.point
    }

    /// Consumes the state and returns the best entry.
    pub(super) fn into_best(self) -> Entry<T> {
        self.b
    }
}
