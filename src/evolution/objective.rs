/// The function being optimized. It receives the decoded real value of an
/// entity and returns its fitness. NaN and infinite results are passed through
/// unchanged.
pub trait Objective {
    fn score(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    fn score(&self, x: f64) -> f64 {
        self(x)
    }
}
