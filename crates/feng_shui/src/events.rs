use crate::error::{FengShuiError, Result};
use crate::interaction::DragEvent;
use crate::layout::{PieceId, Point};

use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a drag event script from a file
///
/// # Arguments
/// * `path` - Path to the script
/// * `container_origin` - Page position of the room, attached to every drop
///
/// # Errors
/// Returns error if the file cannot be read or a line is malformed
pub fn read_events_file<P: AsRef<Path>>(
    path: P,
    container_origin: Point,
) -> Result<Vec<DragEvent>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| FengShuiError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    read_events(BufReader::new(file), container_origin)
}

/// Parses one event per line:
///
/// ```text
/// begin <id> <offset_x> <offset_y>
/// over
/// drop <pointer_x> <pointer_y>
/// ```
///
/// Blank lines and `#` comments are skipped.
pub fn read_events<R: BufRead>(reader: R, container_origin: Point) -> Result<Vec<DragEvent>> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(event) = parse_line(&line, idx + 1, container_origin)? {
            events.push(event);
        }
    }
    Ok(events)
}

fn parse_line(line: &str, line_no: usize, container_origin: Point) -> Result<Option<DragEvent>> {
    let content = line.split('#').next().unwrap_or("").trim();
    if content.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = content.split_whitespace().collect();
    let event = match fields.as_slice() {
        ["begin", id, ox, oy] => DragEvent::Begin {
            id: parse_id(id, line_no)?,
            offset: Point::new(parse_coord(ox, line_no)?, parse_coord(oy, line_no)?),
        },
        ["over"] => DragEvent::Over,
        ["drop", px, py] => DragEvent::Drop {
            pointer: Point::new(parse_coord(px, line_no)?, parse_coord(py, line_no)?),
            container_origin,
        },
        [verb @ ("begin" | "over" | "drop"), ..] => {
            return Err(script_error(
                line_no,
                format!("wrong number of arguments for '{verb}'"),
            ));
        }
        [verb, ..] => {
            return Err(script_error(line_no, format!("unknown event '{verb}'")));
        }
        [] => return Ok(None),
    };
    Ok(Some(event))
}

fn parse_id(raw: &str, line_no: usize) -> Result<PieceId> {
    match raw.parse::<PieceId>() {
        Ok(id) => Ok(id),
        Err(e) => Err(script_error(
            line_no,
            format!("invalid piece id '{raw}': {e}"),
        )),
    }
}

fn parse_coord(raw: &str, line_no: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(_) => Err(script_error(
            line_no,
            format!("coordinate '{raw}' is not finite"),
        )),
        Err(e) => Err(script_error(
            line_no,
            format!("invalid coordinate '{raw}': {e}"),
        )),
    }
}

fn script_error(line: usize, message: String) -> FengShuiError {
    FengShuiError::Script { line, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn parse(script: &str) -> Result<Vec<DragEvent>> {
        read_events(Cursor::new(script), Point::new(8.0, 16.0))
    }

    #[test]
    fn test_parse_full_gesture() {
        let script = "begin 2 10 12.5\nover\nover\ndrop 300 200\n";
        let events = parse(script).unwrap();
        assert_eq!(
            events,
            vec![
                DragEvent::Begin {
                    id: 2,
                    offset: Point::new(10.0, 12.5)
                },
                DragEvent::Over,
                DragEvent::Over,
                DragEvent::Drop {
                    pointer: Point::new(300.0, 200.0),
                    container_origin: Point::new(8.0, 16.0)
                },
            ]
        );
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let script = "# move the sofa\n\n   \nbegin 0 0 0 # grab corner\ndrop 1 1\n";
        let events = parse(script).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_error_reports_line_number() {
        let err = parse("begin 0 0 0\n\ndrop x 1\n").unwrap_err();
        match err {
            FengShuiError::Script { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("'x'"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_unknown_event() {
        let err = parse("rotate 1 90\n").unwrap_err();
        assert!(err.to_string().contains("unknown event 'rotate'"));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!(parse("begin 1 2\n").is_err());
        assert!(parse("over now\n").is_err());
        assert!(parse("drop 1 2 3\n").is_err());
    }

    #[test]
    fn test_rejects_negative_id_and_nan() {
        assert!(parse("begin -1 0 0\n").is_err());
        assert!(parse("drop NaN 0\n").is_err());
        assert!(parse("drop inf 0\n").is_err());
    }

    #[test]
    fn test_read_events_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "begin 1 5 5").unwrap();
        writeln!(file, "drop 100 100").unwrap();

        let events = read_events_file(file.path(), Point::default()).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_read_events_file_missing() {
        let missing = "no/such/script.txt";
        let err = read_events_file(missing, Point::default()).unwrap_err();
        assert!(matches!(err, FengShuiError::ReadFile { .. }));
    }
}
