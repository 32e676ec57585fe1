use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::core::data::snapshot::EscapeSnapshot;

/// File stem tagged with the parameters the escape data was computed for.
#[must_use]
pub fn snapshot_file_name(snapshot: &EscapeSnapshot) -> String {
    let mut name = format!(
        "{}_x={}_y={}_radius={}_steps={}_depth={}",
        snapshot.fractal_kind.slug(),
        snapshot.center.real,
        snapshot.center.imag,
        snapshot.radius,
        snapshot.steps_run,
        snapshot.escape_depth_max
    );

    if let Some(seed) = snapshot.seed {
        name.push_str(&format!("_x0={:.2}_y0={:.2}", seed.real, seed.imag));
    }

    name
}

/// Hands out fresh files in one directory, never reusing an existing path.
///
/// Names are disambiguated by a counter that only moves forward, so two
/// exports of identical state always land in two files.
#[derive(Debug, Clone)]
pub struct SnapshotNamer {
    dir: PathBuf,
    extension: &'static str,
    next_id: u64,
}

impl SnapshotNamer {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, extension: &'static str) -> Self {
        Self {
            dir: dir.into(),
            extension,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates `<dir>/<stem>_id=<n>.<ext>` for the first free `n`.
    pub fn create_unique(&mut self, stem: &str) -> io::Result<(PathBuf, File)> {
        fs::create_dir_all(&self.dir)?;

        loop {
            let path = self
                .dir
                .join(format!("{}_id={}.{}", stem, self.next_id, self.extension));
            self.next_id += 1;

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::FractalKind;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "escape_explorer_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn snapshot(kind: FractalKind, seed: Option<Complex>) -> EscapeSnapshot {
        EscapeSnapshot {
            fractal_kind: kind,
            center: Complex::new(-0.5, 0.0),
            radius: 2.0,
            escape_depth_max: 200,
            seed,
            steps_run: 40,
            resolution: 2,
            intensities: vec![0, 64, 128, 255],
        }
    }

    #[test]
    fn mandelbrot_name_omits_seed() {
        assert_eq!(
            snapshot_file_name(&snapshot(FractalKind::Mandelbrot, None)),
            "mandelbrot_x=-0.5_y=0_radius=2_steps=40_depth=200"
        );
    }

    #[test]
    fn julia_name_includes_seed() {
        let name = snapshot_file_name(&snapshot(
            FractalKind::Julia,
            Some(Complex::new(0.25, -0.02)),
        ));

        assert_eq!(
            name,
            "julia_x=-0.5_y=0_radius=2_steps=40_depth=200_x0=0.25_y0=-0.02"
        );
    }

    #[test]
    fn create_unique_never_overwrites() {
        let dir = scratch_dir("never_overwrites");
        let mut namer = SnapshotNamer::new(&dir, "png");

        let (first, _) = namer.create_unique("same").unwrap();
        let (second, _) = namer.create_unique("same").unwrap();

        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn create_unique_skips_existing_files() {
        let dir = scratch_dir("skips_existing");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("taken_id=0.png"), b"keep").unwrap();
        let mut namer = SnapshotNamer::new(&dir, "png");

        let (path, _) = namer.create_unique("taken").unwrap();

        assert_eq!(path, dir.join("taken_id=1.png"));
        assert_eq!(fs::read(dir.join("taken_id=0.png")).unwrap(), b"keep");

        fs::remove_dir_all(&dir).unwrap();
    }
}
