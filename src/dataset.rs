use crate::Fault;
use crate::Point;
use crate::Position;
use crate::Result;
use std::path::Path;

/// Points read from a text source, one per line, in input order.
/// Every point shares the dimensionality of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset(Vec<Point>);

impl Dataset {
    /// Read and parse a whole file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Fault::io(path, e))?;
        let dataset = Self::parse(&text)?;
        log::info!(
            "read {} points of dimension {} from {}",
            dataset.points().len(),
            dataset.dimensions(),
            path.display()
        );
        Ok(dataset)
    }

    /// Parse whitespace-separated integer lines. Blank lines are skipped.
    /// Line numbers in faults are 1-based.
    pub fn parse(text: &str) -> Result<Self> {
        let points = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                Point::try_from(line)
                    .map(|p| (i, p))
                    .map_err(|e| Fault::parse(i + 1, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        let dimensions = points.first().map(|(_, p)| p.dimensions()).ok_or(Fault::Empty)?;
        match points.iter().find(|(_, p)| p.dimensions() != dimensions) {
            Some((i, p)) => Err(Fault::parse(
                i + 1,
                format!("expected {} coordinates, found {}", dimensions, p.dimensions()),
            )),
            None => Ok(Self(points.into_iter().map(|(_, p)| p).collect())),
        }
    }

    pub fn dimensions(&self) -> usize {
        self.0.first().map(|p| p.dimensions()).unwrap_or_default()
    }
    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

impl From<Dataset> for Vec<Point> {
    fn from(dataset: Dataset) -> Self {
        dataset.0
    }
}
