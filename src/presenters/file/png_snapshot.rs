use std::error::Error;
use std::fmt;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use image::{GrayImage, ImageError, ImageFormat};

use crate::controllers::explorer::ports::SnapshotExporter;
use crate::core::data::snapshot::EscapeSnapshot;
use crate::storage::snapshot_name::{SnapshotNamer, snapshot_file_name};

#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Image(ImageError),
    EmptyBuffer,
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "could not create snapshot file: {}", err),
            Self::Image(err) => write!(f, "could not encode snapshot: {}", err),
            Self::EmptyBuffer => write!(f, "nothing to export: escape buffer is empty"),
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "snapshot holds {} intensities, expected {}",
                actual, expected
            ),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Image(err) => Some(err),
            Self::EmptyBuffer | Self::SizeMismatch { .. } => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ImageError> for ExportError {
    fn from(err: ImageError) -> Self {
        Self::Image(err)
    }
}

/// Saves the normalised escape intensities as 8-bit grayscale PNGs.
#[derive(Debug, Clone)]
pub struct PngSnapshotExporter {
    namer: SnapshotNamer,
}

impl PngSnapshotExporter {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            namer: SnapshotNamer::new(dir, "png"),
        }
    }

    pub fn write(&mut self, snapshot: &EscapeSnapshot) -> Result<PathBuf, ExportError> {
        if snapshot.is_empty() {
            return Err(ExportError::EmptyBuffer);
        }

        let side = snapshot.resolution;
        let expected = side * side;
        if snapshot.intensities.len() != expected {
            return Err(ExportError::SizeMismatch {
                expected,
                actual: snapshot.intensities.len(),
            });
        }

        let image = GrayImage::from_raw(side as u32, side as u32, snapshot.intensities.clone())
            .ok_or(ExportError::SizeMismatch {
                expected,
                actual: snapshot.intensities.len(),
            })?;

        let (path, file) = self.namer.create_unique(&snapshot_file_name(snapshot))?;
        let mut writer = BufWriter::new(file);
        image.write_to(&mut writer, ImageFormat::Png)?;
        writer.flush()?;

        Ok(path)
    }
}

impl SnapshotExporter for PngSnapshotExporter {
    fn export(&mut self, snapshot: &EscapeSnapshot) -> Result<PathBuf, Box<dyn Error>> {
        Ok(self.write(snapshot)?)
    }
}
