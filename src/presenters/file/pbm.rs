use crate::controllers::ports::display::DisplayPort;
use crate::core::data::bitmap_buffer::BitmapBuffer;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes each presented frame as a numbered binary PBM (`P4`) file.
///
/// The bitmap layout already matches P4: packed rows, MSB first, padded to
/// whole bytes, with a set bit drawn black.
pub struct PbmFilePresenter {
    directory: PathBuf,
    prefix: String,
    next_index: u64,
    last_path: Option<PathBuf>,
}

impl PbmFilePresenter {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
            next_index: 0,
            last_path: None,
        }
    }

    #[must_use]
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    #[must_use]
    pub fn frames_written(&self) -> u64 {
        self.next_index
    }
}

impl DisplayPort for PbmFilePresenter {
    type Failure = std::io::Error;

    fn present(&mut self, buffer: &BitmapBuffer) -> Result<(), Self::Failure> {
        std::fs::create_dir_all(&self.directory)?;

        let filepath = self
            .directory
            .join(format!("{}{:05}.pbm", self.prefix, self.next_index));
        let mut file = std::io::BufWriter::new(std::fs::File::create(&filepath)?);
        let resolution = buffer.resolution();

        // PBM header: P4 means packed binary bitmap, then width and height
        writeln!(file, "P4")?;
        writeln!(file, "{} {}", resolution.width(), resolution.height())?;
        file.write_all(buffer.data())?;
        file.flush()?;

        self.next_index += 1;
        self.last_path = Some(filepath);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::resolution::Resolution;
    use crate::core::ports::framebuffer::Framebuffer;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fractal_drift_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_present_writes_p4_file() {
        let dir = scratch_dir("pbm_single");
        let mut buffer = BitmapBuffer::new(Resolution::new(10, 2).unwrap());
        buffer.set_pixel(0, 0, Colour::Foreground).unwrap();
        buffer.set_pixel(9, 1, Colour::Foreground).unwrap();
        let mut presenter = PbmFilePresenter::new(&dir, "frame_");

        presenter.present(&buffer).unwrap();

        let path = presenter.last_path().unwrap().to_path_buf();
        assert_eq!(path, dir.join("frame_00000.pbm"));

        let bytes = std::fs::read(&path).unwrap();
        let mut expected = b"P4\n10 2\n".to_vec();
        expected.extend_from_slice(&[0b1000_0000, 0, 0, 0b0100_0000]);
        assert_eq!(bytes, expected);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_present_numbers_files_sequentially() {
        let dir = scratch_dir("pbm_sequence");
        let buffer = BitmapBuffer::new(Resolution::new(4, 4).unwrap());
        let mut presenter = PbmFilePresenter::new(&dir, "zoom_");

        presenter.present(&buffer).unwrap();
        presenter.present(&buffer).unwrap();

        assert_eq!(presenter.frames_written(), 2);
        assert!(dir.join("zoom_00000.pbm").exists());
        assert!(dir.join("zoom_00001.pbm").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
