// File: crates/trend-core/src/surface.rs
// Summary: DPR-aware raster surface: backing-buffer sizing, logical-coordinate transform, pixel export.

use std::cell::Cell;

use anyhow::Result;
use skia_safe as skia;

use crate::layout::Geometry;
use crate::types::Insets;

/// Errors from backing-buffer management and export.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("failed to allocate {width}x{height} raster surface")]
    Allocation { width: i32, height: i32 },
    #[error("surface has no backing buffer; resize() with a non-zero size first")]
    NotSized,
    #[error("reading back surface pixels failed")]
    ReadPixels,
    #[error("PNG encoding failed")]
    Encode,
}

/// The embedding environment of a drawing surface: how large the surface
/// is displayed and how dense the display is.
pub trait SurfaceHost {
    /// Displayed size in logical pixels, as laid out by the embedder.
    /// Zero means the surface has not been laid out yet.
    fn displayed_size(&self) -> (f32, f32);

    /// Physical-to-logical pixel ratio. Defaults to 1 when unavailable.
    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }
}

/// Host with directly settable measurements, for tests and headless demos.
pub struct FixedHost {
    size: Cell<(f32, f32)>,
    ratio: Cell<f32>,
}

impl FixedHost {
    pub fn new(width: f32, height: f32, ratio: f32) -> Self {
        Self { size: Cell::new((width, height)), ratio: Cell::new(ratio) }
    }

    pub fn set_size(&self, width: f32, height: f32) {
        self.size.set((width, height));
    }

    pub fn set_ratio(&self, ratio: f32) {
        self.ratio.set(ratio);
    }
}

impl SurfaceHost for FixedHost {
    fn displayed_size(&self) -> (f32, f32) {
        self.size.get()
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.ratio.get()
    }
}

/// CPU raster drawing surface. The backing buffer is sized to the
/// displayed size times the device pixel ratio, and the canvas transform
/// is scaled by that ratio so all drawing happens in logical coordinates;
/// the renderer never needs to know the ratio.
pub struct Surface {
    raster: Option<skia::Surface>,
    geometry: Geometry,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self { raster: None, geometry: Geometry::zero() }
    }

    /// Measure the host and (re)size the backing buffer.
    ///
    /// Physical dimensions are the displayed size times the ratio, rounded
    /// to the nearest pixel. Zero displayed width or height leaves the
    /// surface without a backing buffer and callers skip drawing. Calling
    /// again with unchanged measurements keeps the buffer and returns the
    /// same geometry.
    pub fn resize(&mut self, host: &dyn SurfaceHost, insets: Insets) -> Result<Geometry, SurfaceError> {
        let (width, height) = host.displayed_size();
        let width = width.max(0.0);
        let height = height.max(0.0);
        let mut ratio = host.device_pixel_ratio();
        if !ratio.is_finite() || ratio <= 0.0 {
            ratio = 1.0;
        }

        self.geometry = Geometry { width, height, insets, device_pixel_ratio: ratio };
        if width <= 0.0 || height <= 0.0 {
            self.raster = None;
            return Ok(self.geometry);
        }

        let pw = (width * ratio).round().max(1.0) as i32;
        let ph = (height * ratio).round().max(1.0) as i32;
        let realloc = match &self.raster {
            Some(s) => s.width() != pw || s.height() != ph,
            None => true,
        };
        if realloc {
            self.raster = Some(
                skia::surfaces::raster_n32_premul((pw, ph))
                    .ok_or(SurfaceError::Allocation { width: pw, height: ph })?,
            );
        }

        // Draw in logical coordinates from here on.
        if let Some(s) = self.raster.as_mut() {
            let canvas = s.canvas();
            canvas.reset_matrix();
            canvas.scale((ratio, ratio));
        }
        Ok(self.geometry)
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn has_backing(&self) -> bool {
        self.raster.is_some()
    }

    /// Canvas for the current draw cycle, if the surface is sized.
    pub fn canvas(&mut self) -> Option<&skia::Canvas> {
        self.raster.as_mut().map(|s| s.canvas())
    }

    /// Copy the backing buffer out as tightly packed RGBA8 with physical
    /// dimensions: (pixels, width, height, row stride in bytes).
    pub fn to_rgba8(&mut self) -> Result<(Vec<u8>, i32, i32, usize), SurfaceError> {
        let raster = self.raster.as_mut().ok_or(SurfaceError::NotSized)?;
        let (w, h) = (raster.width(), raster.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !raster.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(SurfaceError::ReadPixels);
        }
        Ok((pixels, w, h, stride))
    }

    /// Encode the backing buffer as PNG bytes.
    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let raster = self.raster.as_mut().ok_or(SurfaceError::NotSized)?;
        let image = raster.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SurfaceError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Write the surface out as a PNG file, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
