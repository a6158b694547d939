use crate::Centroid;
use crate::Coordinate;
use crate::Fault;
use crate::Point;
use crate::Position;
use rand::Rng;

/// Axis-aligned bounds of a point set, per-axis inclusive min and max.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox {
    lower: Vec<Coordinate>,
    upper: Vec<Coordinate>,
}

impl BoundingBox {
    pub fn lower(&self) -> &[Coordinate] {
        &self.lower
    }
    pub fn upper(&self) -> &[Coordinate] {
        &self.upper
    }
    pub fn dimensions(&self) -> usize {
        self.lower.len()
    }

    #[cfg(test)]
    pub fn contains<P: Position>(&self, p: &P) -> bool {
        (0..self.dimensions()).all(|i| {
            self.lower[i] as crate::Energy <= p.axis(i) && p.axis(i) <= self.upper[i] as crate::Energy
        })
    }

    /// Draw a position with each axis independently uniform over its integer range.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Centroid {
        let ref point = Point::from(
            self.lower
                .iter()
                .zip(self.upper.iter())
                .map(|(&lo, &hi)| rng.random_range(lo..=hi))
                .collect::<Vec<Coordinate>>(),
        );
        Centroid::from(point)
    }
}

impl TryFrom<&[Point]> for BoundingBox {
    type Error = Fault;
    fn try_from(points: &[Point]) -> Result<Self, Self::Error> {
        let first = points.first().ok_or(Fault::Empty)?.coordinates();
        let seed = Self {
            lower: first.to_vec(),
            upper: first.to_vec(),
        };
        points.iter().skip(1).try_fold(seed, |mut bbox, p| {
            if p.dimensions() != bbox.dimensions() {
                return Err(Fault::Dimension {
                    expected: bbox.dimensions(),
                    found: p.dimensions(),
                });
            }
            p.coordinates().iter().enumerate().for_each(|(i, &c)| {
                bbox.lower[i] = bbox.lower[i].min(c);
                bbox.upper[i] = bbox.upper[i].max(c);
            });
            Ok(bbox)
        })
    }
}
