use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Render the status line written to the status file. The literal `True` /
/// `False` spelling is the format downstream pipeline stages parse.
pub fn status_line(passed: bool) -> String {
    let rendered = if passed { "True" } else { "False" };
    format!("Validation status: {rendered}")
}

/// Persist the final status, overwriting any previous record.
pub fn write_status(path: &Path, passed: bool) -> Result<(), io::Error> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", status_line(passed))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_status_line_rendering() {
        assert_eq!(status_line(true), "Validation status: True");
        assert_eq!(status_line(false), "Validation status: False");
    }

    #[test]
    fn test_write_status_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("status.txt");

        write_status(&path, true).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Validation status: True\n"
        );
    }

    #[test]
    fn test_write_status_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("status.txt");

        write_status(&path, true).unwrap();
        write_status(&path, false).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Validation status: False\n"
        );
    }
}
