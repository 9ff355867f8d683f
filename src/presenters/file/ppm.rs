use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Binary PPM (P6) writer. PPM has no alpha channel, so it is dropped.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;

        for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            writer.write_all(&pixel[..3])?;
        }

        Ok(())
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(filepath)?);
        self.write_to(buffer, &mut writer)?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rgb_triples() {
        let buffer = PixelBuffer::from_data(
            2,
            1,
            vec![
                255, 0, 0, 255, // red
                0, 0, 1, 128, // near-black, half alpha
            ],
        )
        .unwrap();

        let mut out = Vec::new();
        PpmFilePresenter::new().write_to(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 0, 0, 1]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let path = std::env::temp_dir().join(format!("fractal_viewer_ppm_{}.ppm", std::process::id()));
        let buffer = PixelBuffer::new(3, 2);

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
        assert!(written.starts_with(b"P6\n3 2\n255\n"));
    }
}
