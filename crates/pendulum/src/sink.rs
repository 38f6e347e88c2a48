//! CSV output for trajectories.
//!
//! The format is a `t,theta,omega` header followed by one row per point, each
//! value in fixed notation with 8 decimals and `\n` line endings. Output
//! depends only on the trajectory, so writing the same trajectory twice gives
//! byte-identical files.
//!
//! [`read_from`] and [`read_csv`] parse the same format back into a
//! [`Trajectory`] so finished runs can be compared.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use thiserror::Error;

use crate::{
    error::Error,
    trajectory::{Point, Trajectory},
};

/// Column header of every trajectory file.
pub const HEADER: &str = "t,theta,omega";

/// Errors raised while parsing a trajectory file.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("expected header `t,theta,omega`, found `{0}`")]
    Header(String),

    #[error("line {line}: expected three numbers, found `{text}`")]
    Row { line: usize, text: String },
}

/// Writes `trajectory` as CSV to `writer`.
///
/// # Errors
///
/// Returns any I/O error raised by `writer`.
pub fn write_to<W: Write>(trajectory: &Trajectory, mut writer: W) -> io::Result<()> {
    writeln!(writer, "{HEADER}")?;
    for point in trajectory.points() {
        writeln!(
            writer,
            "{:.8},{:.8},{:.8}",
            point.time, point.angle, point.angular_velocity
        )?;
    }
    writer.flush()
}

/// Creates or truncates the file at `path` and writes `trajectory` to it.
///
/// # Errors
///
/// Returns [`Error::Write`] naming `path` if the file cannot be created or
/// written.
pub fn write_csv(trajectory: &Trajectory, path: &Path) -> Result<(), Error> {
    let to_error = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    write_to(trajectory, BufWriter::new(file)).map_err(to_error)
}

/// Parses a trajectory written by [`write_to`].
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns a [`ReadError`] if the header is missing or wrong, a row does not
/// hold exactly three numbers, or `reader` fails.
pub fn read_from<R: BufRead>(reader: R) -> Result<Trajectory, ReadError> {
    let mut lines = reader.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    if header.trim_end() != HEADER {
        return Err(ReadError::Header(header));
    }

    let mut points = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line?;
        let text = line.trim_end();
        if text.is_empty() {
            continue;
        }

        let point = parse_row(text).ok_or_else(|| ReadError::Row {
            line: index + 2,
            text: text.to_owned(),
        })?;
        points.push(point);
    }

    Ok(points.into_iter().collect())
}

fn parse_row(text: &str) -> Option<Point> {
    let mut values = text.split(',').map(|value| value.trim().parse::<f64>().ok());

    let time = values.next()??;
    let angle = values.next()??;
    let angular_velocity = values.next()??;
    if values.next().is_some() {
        return None;
    }

    Some(Point {
        time,
        angle,
        angular_velocity,
    })
}

/// Reads the trajectory file at `path`.
///
/// # Errors
///
/// Returns [`Error::ReadTrajectory`] naming `path` if the file cannot be
/// opened or parsed.
pub fn read_csv(path: &Path) -> Result<Trajectory, Error> {
    let to_error = |source| Error::ReadTrajectory {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|err| to_error(ReadError::Io(err)))?;
    read_from(BufReader::new(file)).map_err(to_error)
}
