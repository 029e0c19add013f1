//! CSV export of the full projection series

use std::io::Write;

use thiserror::Error;

use crate::projection::ProjectionResult;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Io(#[from] std::io::Error),
}

/// Write one `period,label,value` row per projected period
pub fn write_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in result.points() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Granularity, InterestMode, ProjectionInput};
    use crate::projection::project;

    #[test]
    fn test_csv_rows() {
        let input = ProjectionInput::new("1000", "10", "3", InterestMode::Simple, Granularity::Annual);
        let result = project(&input).unwrap();

        let mut buf = Vec::new();
        write_csv(&result, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["period,label,value", "1,A1,1100.0", "2,A2,1200.0", "3,A3,1300.0"]);
    }
}
