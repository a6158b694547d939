use crate::BoundingBox;
use crate::Centroid;
use crate::Point;
use crate::Result;
use rand::Rng;

/// Places starting centroids uniformly at random inside the bounding box
/// of the data. Nothing stops two centroids from landing on the same spot.
#[derive(Debug, Clone)]
pub struct Initializer(BoundingBox);

impl Initializer {
    pub fn new(points: &[Point]) -> Result<Self> {
        let bbox = BoundingBox::try_from(points)?;
        log::debug!("bounding box {:?} to {:?}", bbox.lower(), bbox.upper());
        Ok(Self(bbox))
    }

    #[cfg(test)]
    pub fn bbox(&self) -> &BoundingBox {
        &self.0
    }

    /// Draw k centroids from the injected random source.
    pub fn centroids<R: Rng>(&self, k: usize, rng: &mut R) -> Vec<Centroid> {
        (0..k).map(|_| self.0.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fault;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn points() -> Vec<Point> {
        vec![
            Point::from(vec![0, 100]),
            Point::from(vec![50, 150]),
            Point::from(vec![20, 120]),
        ]
    }

    #[test]
    fn draws_k_centroids() {
        let init = Initializer::new(&points()).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(init.centroids(5, rng).len(), 5);
    }

    #[test]
    fn centroids_lie_in_bounding_box() {
        let init = Initializer::new(&points()).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(1);
        assert!(
            init.centroids(64, rng)
                .iter()
                .all(|c| init.bbox().contains(c))
        );
    }

    #[test]
    fn same_seed_same_centroids() {
        let init = Initializer::new(&points()).unwrap();
        let a = init.centroids(4, &mut SmallRng::seed_from_u64(42));
        let b = init.centroids(4, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn collapsed_box_collapses_centroids() {
        let points = vec![Point::from(vec![3, 3]); 4];
        let init = Initializer::new(&points).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(9);
        let centroids = init.centroids(3, rng);
        assert!(centroids.iter().all(|c| c.coordinates() == [3.0, 3.0]));
    }

    #[test]
    fn refuses_empty_input() {
        assert!(matches!(Initializer::new(&[]), Err(Fault::Empty)));
    }
}
