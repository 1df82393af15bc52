use crate::cli::GeneratorKind;
use crate::domain::models::{ExpectedFile, VerificationResult};
use image::{ImageFormat, ImageReader};
use std::path::Path;

/// Container format a raster generator writes. `png` and `splashscreen` are
/// always PNG whatever the file is called; kinds with no fixed container fall
/// back to the format the extension names.
pub fn expected_format(kind: GeneratorKind, path: &Path) -> Option<ImageFormat> {
    match kind {
        GeneratorKind::Png | GeneratorKind::Splashscreen => Some(ImageFormat::Png),
        GeneratorKind::Ico => Some(ImageFormat::Ico),
        GeneratorKind::Svg | GeneratorKind::Icns => ImageFormat::from_path(path).ok(),
    }
}

fn read_dimensions(path: &Path, expected: ImageFormat) -> Option<(u32, u32)> {
    let reader = ImageReader::open(path).ok()?.with_guessed_format().ok()?;
    if reader.format() != Some(expected) {
        return None;
    }
    reader.into_dimensions().ok()
}

/// Width and height from the image header, or `(0, 0)` when the file content
/// is not a decodable image of the `expected` format.
pub fn probe_image_size(path: &Path, expected: ImageFormat) -> (u32, u32) {
    read_dimensions(path, expected).unwrap_or((0, 0))
}

pub struct FileVerifier {
    raster_generators: Vec<GeneratorKind>,
}

impl FileVerifier {
    pub fn new(raster_generators: Vec<GeneratorKind>) -> Self {
        Self { raster_generators }
    }

    pub fn is_raster(&self, kind: GeneratorKind) -> bool {
        self.raster_generators.contains(&kind)
    }

    pub fn status(&self, file: &ExpectedFile) -> VerificationResult {
        if !file.absolute_path.exists() {
            return VerificationResult::Missing;
        }
        if !self.is_raster(file.generator) {
            return VerificationResult::Ok;
        }

        let Some(format) = expected_format(file.generator, &file.absolute_path) else {
            return VerificationResult::InvalidImage;
        };
        match probe_image_size(&file.absolute_path, format) {
            (0, 0) => VerificationResult::InvalidImage,
            (width, height) if (width, height) != (file.width, file.height) => {
                VerificationResult::WrongDimensions { width, height }
            }
            _ => VerificationResult::Ok,
        }
    }
}
