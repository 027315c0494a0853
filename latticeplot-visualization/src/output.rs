//! Output format selection and encoding

use crate::figure::Figure;
use image::codecs::pnm::{PnmSubtype, SampleEncoding};
use image::{DynamicImage, ImageError, ImageFormat, ImageOutputFormat, RgbImage};
use latticeplot_core::{Error, Result};
use std::io::Cursor;
use std::path::Path;

/// Raster formats a figure can be written as
///
/// Each of these gets an encoder input it accepts in [`OutputFormat::encode`].
pub const RASTER_FORMATS: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Gif,
    ImageFormat::Tiff,
    ImageFormat::Tga,
    ImageFormat::Pnm,
    ImageFormat::Qoi,
    ImageFormat::OpenExr,
    ImageFormat::Farbfeld,
];

/// Image encodings a figure can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Raster(ImageFormat),
    Svg,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Raster(ImageFormat::Png)
    }
}

impl OutputFormat {
    /// Infer the format from the file extension
    ///
    /// A path without an extension gets `fallback`. An extension that names
    /// no writable format fails with [`Error::UnsupportedFormat`] without
    /// touching the filesystem.
    pub fn from_path<P: AsRef<Path>>(path: P, fallback: OutputFormat) -> Result<Self> {
        let path = path.as_ref();
        let Some(ext) = path.extension() else {
            return Ok(fallback);
        };
        let ext = ext.to_str().ok_or_else(|| {
            Error::UnsupportedFormat(format!("non UTF-8 extension on {}", path.display()))
        })?;

        if ext.eq_ignore_ascii_case("svg") {
            return Ok(OutputFormat::Svg);
        }

        match ImageFormat::from_extension(ext) {
            // only the colour pixmap flavour of the PNM family is written
            Some(ImageFormat::Pnm) if !ext.eq_ignore_ascii_case("ppm") => {}
            Some(format) if RASTER_FORMATS.contains(&format) => {
                return Ok(OutputFormat::Raster(format))
            }
            _ => {}
        }
        Err(Error::UnsupportedFormat(format!("cannot write {ext:?} images")))
    }

    /// Render and encode `figure` into memory
    pub fn encode(&self, figure: &Figure) -> Result<Vec<u8>> {
        match self {
            OutputFormat::Svg => Ok(figure.to_svg().into_bytes()),
            OutputFormat::Raster(format) => encode_raster(figure.to_image(), *format),
        }
    }
}

/// Convert to the pixel layout the encoder for `format` takes, then encode
fn encode_raster(rgb: RgbImage, format: ImageFormat) -> Result<Vec<u8>> {
    let rgb = DynamicImage::ImageRgb8(rgb);
    let (image, target) = match format {
        ImageFormat::Pnm => (
            rgb,
            ImageOutputFormat::Pnm(PnmSubtype::Pixmap(SampleEncoding::Binary)),
        ),
        ImageFormat::OpenExr => (DynamicImage::ImageRgb32F(rgb.to_rgb32f()), ImageOutputFormat::OpenExr),
        ImageFormat::Farbfeld => (DynamicImage::ImageRgba16(rgb.to_rgba16()), ImageOutputFormat::Farbfeld),
        ImageFormat::Qoi => (DynamicImage::ImageRgba8(rgb.to_rgba8()), ImageOutputFormat::Qoi),
        other => (rgb, ImageOutputFormat::from(other)),
    };

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, target).map_err(encode_error)?;
    Ok(bytes.into_inner())
}

fn encode_error(err: ImageError) -> Error {
    match err {
        ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
        ImageError::IoError(e) => Error::Io(e),
        other => Error::Encode(other.to_string()),
    }
}
