use anyhow::Result;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbaImage};
use std::io::Write;
use std::path::Path;

/// Target for a single composition: the canvas edge length and the
/// fraction of it the scaled logo's longer edge occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalerOpts {
    pub size: u32,
    pub fill_ratio: f64,
}

impl ScalerOpts {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            fill_ratio: 1.0,
        }
    }

    pub fn with_fill_ratio(size: u32, fill_ratio: f64) -> Self {
        Self { size, fill_ratio }
    }

    fn validate(self) -> Result<()> {
        anyhow::ensure!(self.size > 0, "expected a positive output size");
        anyhow::ensure!(
            self.fill_ratio > 0.0 && self.fill_ratio <= 1.0,
            "expected fill ratio in (0, 1], got {}",
            self.fill_ratio
        );
        Ok(())
    }
}

pub struct Scaler {
    img: RgbaImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let img = ImageReader::open(path)?.decode()?.to_rgba8();
        Self::new(img)
    }

    pub fn new(img: RgbaImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            anyhow::bail!("expected at least one pixel in each dimension");
        }
        Ok(Self { img })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Scales the source proportionally so its longer edge spans
    /// `size * fill_ratio` pixels and centers it on a transparent
    /// square canvas of `size`.
    pub fn compose(&self, opts: ScalerOpts) -> Result<RgbaImage> {
        opts.validate()?;
        let (width, height) = self.img.dimensions();
        let max_logo = (opts.size as f64 * opts.fill_ratio).floor() as u32;
        anyhow::ensure!(
            max_logo > 0,
            "fill ratio {} leaves no room on a {}px canvas",
            opts.fill_ratio,
            opts.size
        );
        let (new_width, new_height) = if width > height {
            (max_logo, scale_edge(height, max_logo, width))
        } else {
            (scale_edge(width, max_logo, height), max_logo)
        };
        let resized =
            image::imageops::resize(&self.img, new_width, new_height, FilterType::Lanczos3);
        let mut canvas = RgbaImage::new(opts.size, opts.size);
        let x_offset = (opts.size - new_width) / 2;
        let y_offset = (opts.size - new_height) / 2;
        image::imageops::overlay(&mut canvas, &resized, x_offset as i64, y_offset as i64);
        Ok(canvas)
    }

    pub fn write<W: Write>(&self, w: &mut W, opts: ScalerOpts) -> Result<()> {
        let img = self.compose(opts)?;
        let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
        encoder.write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgba8)?;
        Ok(())
    }

    /// Packs one composition per entry into a multi-size ICO container.
    pub fn write_ico<W: Write>(&self, w: &mut W, opts: &[ScalerOpts]) -> Result<()> {
        anyhow::ensure!(!opts.is_empty(), "expected at least one ico size");
        let images = opts
            .iter()
            .map(|&opts| self.compose(opts))
            .collect::<Result<Vec<_>>>()?;
        let mut frames = Vec::with_capacity(images.len());
        for img in &images {
            frames.push(IcoFrame::as_png(
                img.as_raw(),
                img.width(),
                img.height(),
                ExtendedColorType::Rgba8,
            )?);
        }
        IcoEncoder::new(w).encode_images(&frames)?;
        Ok(())
    }
}

/// Scales the shorter source edge to match `max_logo` on the longer one,
/// rounding half up. Degenerate aspect ratios still get one pixel.
fn scale_edge(edge: u32, max_logo: u32, longer: u32) -> u32 {
    let scaled = (edge as u64 * max_logo as u64 + longer as u64 / 2) / longer as u64;
    (scaled as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn solid(width: u32, height: u32) -> Scaler {
        Scaler::new(RgbaImage::from_pixel(width, height, Rgba([10, 200, 30, 255]))).unwrap()
    }

    /// Bounding box of all pixels with nonzero alpha.
    fn opaque_bounds(img: &RgbaImage) -> (u32, u32, u32, u32) {
        let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
        let (mut max_x, mut max_y) = (0, 0);
        for (x, y, pixel) in img.enumerate_pixels() {
            if pixel[3] > 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
        (min_x, min_y, max_x, max_y)
    }

    #[test]
    fn landscape_source_centered() {
        let img = solid(800, 400)
            .compose(ScalerOpts::with_fill_ratio(192, 0.90))
            .unwrap();
        assert_eq!(img.dimensions(), (192, 192));
        // 172x86 region at (10, 53)
        assert_eq!(opaque_bounds(&img), (10, 53, 181, 138));
    }

    #[test]
    fn portrait_source_centered() {
        let img = solid(400, 800)
            .compose(ScalerOpts::with_fill_ratio(1024, 0.95))
            .unwrap();
        assert_eq!(img.dimensions(), (1024, 1024));
        // 486x972 region at (269, 26)
        assert_eq!(opaque_bounds(&img), (269, 26, 754, 997));
    }

    #[test]
    fn square_source_fills_canvas() {
        let img = solid(100, 100).compose(ScalerOpts::new(64)).unwrap();
        assert_eq!(img.dimensions(), (64, 64));
        assert_eq!(opaque_bounds(&img), (0, 0, 63, 63));
    }

    #[test]
    fn aspect_ratio_preserved_within_one_pixel() {
        let img = solid(333, 217)
            .compose(ScalerOpts::with_fill_ratio(100, 0.9))
            .unwrap();
        let (min_x, min_y, max_x, max_y) = opaque_bounds(&img);
        let (new_width, new_height) = (max_x - min_x + 1, max_y - min_y + 1);
        assert_eq!(new_width, 90);
        let expected = 217.0 / 333.0 * new_width as f64;
        assert!((new_height as f64 - expected).abs() <= 1.0);
    }

    #[test]
    fn corners_stay_transparent() {
        let img = solid(512, 512)
            .compose(ScalerOpts::with_fill_ratio(100, 0.8))
            .unwrap();
        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq!(img.get_pixel(x, y)[3], 0);
        }
    }

    #[test]
    fn compose_is_deterministic() {
        let scaler = solid(640, 480);
        let opts = ScalerOpts::with_fill_ratio(48, 0.88);
        let a = scaler.compose(opts).unwrap();
        let b = scaler.compose(opts).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn rejects_invalid_opts() {
        let scaler = solid(64, 64);
        assert!(scaler.compose(ScalerOpts::new(0)).is_err());
        assert!(scaler.compose(ScalerOpts::with_fill_ratio(64, 0.0)).is_err());
        assert!(scaler.compose(ScalerOpts::with_fill_ratio(64, 1.5)).is_err());
        assert!(scaler.compose(ScalerOpts::with_fill_ratio(64, -0.5)).is_err());
    }

    #[test]
    fn rejects_empty_source() {
        assert!(Scaler::new(RgbaImage::new(0, 10)).is_err());
        assert!(Scaler::new(RgbaImage::new(10, 0)).is_err());
    }

    #[test]
    fn writes_png() {
        let mut buf = Cursor::new(Vec::new());
        solid(256, 256)
            .write(&mut buf, ScalerOpts::with_fill_ratio(32, 0.92))
            .unwrap();
        let img = image::load_from_memory(buf.get_ref()).unwrap();
        assert_eq!(img.width(), 32);
        assert_eq!(img.height(), 32);
    }

    #[test]
    fn writes_multi_size_ico() {
        let mut buf = Cursor::new(Vec::new());
        let opts = [
            ScalerOpts::with_fill_ratio(16, 0.95),
            ScalerOpts::with_fill_ratio(32, 0.92),
        ];
        solid(256, 256).write_ico(&mut buf, &opts).unwrap();
        let bytes = buf.get_ref();
        // ICONDIR header: reserved, type 1, image count
        assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
        assert_eq!(bytes[4], 2);
    }

    #[test]
    fn ico_needs_at_least_one_size() {
        let mut buf = Cursor::new(Vec::new());
        assert!(solid(64, 64).write_ico(&mut buf, &[]).is_err());
    }
}
