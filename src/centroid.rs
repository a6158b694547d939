use crate::Energy;
use crate::Point;
use crate::Position;

/// Representative position of a cluster. Overwritten wholesale every round.
#[derive(Debug, Clone, PartialEq)]
pub struct Centroid(Vec<Energy>);

impl Centroid {
    pub fn coordinates(&self) -> &[Energy] {
        &self.0
    }

    /// Coordinate-wise arithmetic mean of the given points.
    /// None when there are no points, since the mean is undefined.
    pub fn mean(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let n = points.len() as Energy;
        let sums = points.iter().fold(vec![0.0; first.dimensions()], |mut sums, p| {
            sums.iter_mut()
                .enumerate()
                .for_each(|(i, s)| *s += p.axis(i));
            sums
        });
        Some(Self(sums.into_iter().map(|s| s / n).collect()))
    }
}

impl Position for Centroid {
    fn dimensions(&self) -> usize {
        self.0.len()
    }
    fn axis(&self, i: usize) -> Energy {
        self.0[i]
    }
}

impl From<Vec<Energy>> for Centroid {
    fn from(coordinates: Vec<Energy>) -> Self {
        Self(coordinates)
    }
}

impl From<&Point> for Centroid {
    fn from(point: &Point) -> Self {
        Self((0..point.dimensions()).map(|i| point.axis(i)).collect())
    }
}

impl std::fmt::Display for Centroid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ref text = self
            .0
            .iter()
            .map(|c| format!("{:.3}", c))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({})", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_coordinatewise() {
        let points = vec![
            Point::from(vec![1, 10]),
            Point::from(vec![2, 20]),
            Point::from(vec![6, 0]),
        ];
        let centroid = Centroid::mean(&points).unwrap();
        assert_eq!(centroid.coordinates(), &[3.0, 10.0]);
    }

    #[test]
    fn mean_is_fractional() {
        let points = vec![Point::from(vec![0, 0]), Point::from(vec![1, 1])];
        let centroid = Centroid::mean(&points).unwrap();
        assert_eq!(centroid.coordinates(), &[0.5, 0.5]);
    }

    #[test]
    fn mean_of_one_is_itself() {
        let ref point = Point::from(vec![-4, 9, 2]);
        let centroid = Centroid::mean(std::slice::from_ref(point)).unwrap();
        assert_eq!(centroid, Centroid::from(point));
    }

    #[test]
    fn mean_of_none_is_undefined() {
        assert_eq!(Centroid::mean(&[]), None);
    }
}
