use crate::Energy;

/// Anything with a position along a fixed number of axes.
/// Points and centroids both measure against each other through this.
pub trait Position {
    fn dimensions(&self) -> usize;
    fn axis(&self, i: usize) -> Energy;
}

/// Euclidean distance between two positions of equal dimensionality.
pub fn distance<A, B>(a: &A, b: &B) -> Energy
where
    A: Position,
    B: Position,
{
    debug_assert_eq!(a.dimensions(), b.dimensions());
    (0..a.dimensions())
        .map(|i| a.axis(i) - b.axis(i))
        .map(|d| d * d)
        .sum::<Energy>()
        .sqrt()
}
