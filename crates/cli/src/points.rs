//! CSV point files: one row per point, numeric `x` and `y` columns.

use anyhow::{bail, Context, Result};
use closest_pair::pair::Point;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read `x`/`y` columns from a CSV with a header row. Other columns are ignored.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;

    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => points.push(Point::new(x, y)),
            _ => bail!("{}: row {row} is missing a coordinate", path.display()),
        }
    }
    tracing::debug!(rows = points.len(), path = %path.display(), "read_points");
    Ok(points)
}

/// Write points as a two-column `x,y` CSV, creating parent directories.
pub fn write_points(path: &Path, points: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let mut df = DataFrame::new(vec![Series::new("x".into(), xs), Series::new("y".into(), ys)])?;
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_keeps_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/pts.csv");
        let pts = vec![
            Point::new(0.5, -1.0),
            Point::new(3.0, 4.0),
            Point::new(-2.25, 8.0),
        ];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn integer_columns_are_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        std::fs::write(&path, "id,x,y\na,0,0\nb,3,4\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts, vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "x,z\n1,2\n").unwrap();
        assert!(read_points(&path).is_err());
    }

    #[test]
    fn empty_cell_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gap.csv");
        std::fs::write(&path, "x,y\n1,2\n3,\n").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }
}
