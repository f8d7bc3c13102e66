use std::io::Write;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

pub fn write_ppm(buffer: PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filepath)?;

    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    writeln!(file, "P6")?;
    writeln!(file, "{} {}", width, height)?;
    writeln!(file, "255")?;
    file.write_all(buffer.data())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_point::PixelPoint;
    use crate::core::data::pixel_rect::PixelRect;

    #[test]
    fn test_write_ppm_emits_header_and_pixels() {
        let pixel_rect =
            PixelRect::new(PixelPoint { x: 0, y: 0 }, PixelPoint { x: 2, y: 2 }).unwrap();
        let mut buffer = PixelBuffer::new(pixel_rect);
        buffer
            .set_pixel(PixelPoint { x: 0, y: 0 }, Colour { r: 1, g: 2, b: 3 })
            .unwrap();
        let filepath = std::env::temp_dir().join("curve_explorer_write_ppm_test.ppm");

        write_ppm(buffer, &filepath).unwrap();

        let header = b"P6\n2 2\n255\n";
        let written = std::fs::read(&filepath).unwrap();
        assert!(written.starts_with(header));
        assert_eq!(written.len(), header.len() + 12);
        assert_eq!(&written[header.len()..header.len() + 3], &[1, 2, 3]);
    }
}
