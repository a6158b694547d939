use crate::Assignment;
use crate::Fault;
use crate::Result;
use std::path::Path;

/// Text rendering of an assignment: one `<coordinates> <label>` line per
/// point, where label is the 1-based cluster number. Lines are grouped by
/// cluster and keep their order within it.
pub struct Report<'a>(&'a Assignment);

impl<'a> From<&'a Assignment> for Report<'a> {
    fn from(assignment: &'a Assignment) -> Self {
        Self(assignment)
    }
}

impl Report<'_> {
    /// Write to any sink.
    pub fn render<W: std::io::Write>(&self, sink: &mut W) -> std::io::Result<()> {
        self.0
            .labelled()
            .try_for_each(|(j, p)| writeln!(sink, "{} {}", p, j + 1))
    }

    /// Write to a file, replacing it. The file is only created once
    /// the whole report is rendered in memory.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut buffer = Vec::new();
        self.render(&mut buffer).map_err(|e| Fault::io(path, e))?;
        std::fs::write(path, buffer).map_err(|e| Fault::io(path, e))?;
        log::info!("wrote {} lines to {}", self.0.n(), path.display());
        Ok(())
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0
            .labelled()
            .try_for_each(|(j, p)| writeln!(f, "{} {}", p, j + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Centroid;
    use crate::Point;

    fn assignment(points: &[[i64; 2]], centroids: &[[f64; 2]]) -> Assignment {
        let points = points.iter().map(|p| Point::from(p.to_vec())).collect::<Vec<_>>();
        let centroids = centroids.iter().map(|c| Centroid::from(c.to_vec())).collect::<Vec<_>>();
        Assignment::new(&points, &centroids)
    }

    #[test]
    fn labels_are_one_based() {
        let ref assignment = assignment(&[[5, 5], [6, 6]], &[[5.0, 5.0], [6.0, 6.0]]);
        assert_eq!(Report::from(assignment).to_string(), "5 5 1\n6 6 2\n");
    }

    #[test]
    fn grouped_by_cluster() {
        let ref assignment = assignment(&[[8, 8], [5, 5], [7, 7], [4, 6]], &[[5.0, 5.0], [7.0, 7.0]]);
        assert_eq!(
            Report::from(assignment).to_string(),
            "5 5 1\n4 6 1\n8 8 2\n7 7 2\n"
        );
    }

    #[test]
    fn no_container_punctuation() {
        let ref assignment = assignment(&[[669, 214], [-3, 40]], &[[0.0, 0.0], [600.0, 200.0]]);
        let text = Report::from(assignment).to_string();
        assert!(!text.contains(['[', ']', ',']));
        assert!(text.lines().all(|line| line.split(' ').count() == 3));
    }

    #[test]
    fn render_matches_display() {
        let ref assignment = assignment(&[[1, 2], [9, 9], [2, 1]], &[[1.0, 1.0], [9.0, 9.0]]);
        let ref mut buffer = Vec::new();
        Report::from(assignment).render(buffer).unwrap();
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), Report::from(assignment).to_string());
    }

    #[test]
    fn saves_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.txt");
        let ref assignment = assignment(&[[5, 5], [6, 6]], &[[5.0, 5.0], [6.0, 6.0]]);
        Report::from(assignment).save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "5 5 1\n6 6 2\n");
    }
}
