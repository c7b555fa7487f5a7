pub mod error;
pub mod limits;
pub mod lines;
pub mod models;
pub mod validator;
pub mod window;

use std::io::{BufRead, Write};

use error::Result;
use validator::{ValidationReport, VelocityValidator};

/// Validate loads read line by line from `reader` and write the decisions to `writer`
///
/// Per-record errors are returned in the report, not raised. Only failing to
/// read the input or write the output is an error.
pub fn process_loads<R: BufRead, W: Write>(reader: R, mut writer: W) -> Result<ValidationReport> {
    let mut validator = VelocityValidator::new();
    let mut report = ValidationReport::default();

    for line in reader.split(b'\n') {
        let mut line = line?;
        lines::trim_line_ending(&mut line);
        report.record(validator.process_raw_line(&line));
    }

    for decision in &report.decisions {
        writeln!(writer, "{}", decision)?;
    }
    writer.flush()?;

    Ok(report)
}
