use crate::Coordinate;
use crate::Energy;
use crate::MIN_DIMENSIONS;
use crate::Position;

/// An input point. Integer coordinates, immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point(Vec<Coordinate>);

impl Point {
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.0
    }
}

impl Position for Point {
    fn dimensions(&self) -> usize {
        self.0.len()
    }
    fn axis(&self, i: usize) -> Energy {
        self.0[i] as Energy
    }
}

impl From<Vec<Coordinate>> for Point {
    fn from(coordinates: Vec<Coordinate>) -> Self {
        Self(coordinates)
    }
}

/// Parses one line of whitespace-separated integers.
impl TryFrom<&str> for Point {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let coordinates = s
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<Coordinate>()
                    .map_err(|_| anyhow::anyhow!("expected an integer, found {:?}", token))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match coordinates.len() {
            n if n < MIN_DIMENSIONS => Err(anyhow::anyhow!(
                "expected at least {} coordinates, found {}",
                MIN_DIMENSIONS,
                n
            )),
            _ => Ok(Self(coordinates)),
        }
    }
}

/// Coordinates separated by single spaces.
impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ref text = self
            .0
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{}", text)
    }
}
