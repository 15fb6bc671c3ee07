use super::progress::TickProgress;
use crate::config::Config;
use crate::error::PhotoError;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

const PREVIEW_SIZE: u32 = 512;
/// Enough bytes for `image::guess_format` to recognise any supported signature
const SNIFF_LEN: u64 = 32;

/// What we remember about the accepted photo.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PhotoInfo {
    pub name: String,
    pub size_bytes: u64,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// Accepted photo plus a downscaled RGBA copy for the preview texture.
#[derive(Debug, Clone)]
pub struct Photo {
    pub info: PhotoInfo,
    pub preview: RgbaImage,
}

/// Validates raw image bytes: type first, then size, then decode.
pub fn validate_photo(name: &str, bytes: &[u8], limit_bytes: u64) -> Result<Photo, PhotoError> {
    let format = detect_format(name, bytes)?;

    let size_bytes = bytes.len() as u64;
    if size_bytes > limit_bytes {
        return Err(PhotoError::too_large(size_bytes, limit_bytes));
    }

    let image = image::load_from_memory_with_format(bytes, format)?;
    Ok(build_photo(name, size_bytes, format, &image))
}

/// Reads a photo from disk. Type and size are checked before the file is read;
/// for files without an image extension only a short header is sniffed.
pub fn load_photo(path: &Path, limit_bytes: u64) -> Result<Photo, PhotoError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if ImageFormat::from_path(path).is_err() {
        // Без расширения решаем по заголовку
        let mut header = Vec::with_capacity(SNIFF_LEN as usize);
        File::open(path)?.take(SNIFF_LEN).read_to_end(&mut header)?;
        image::guess_format(&header).map_err(|_| PhotoError::NotAnImage)?;
    }

    let size_bytes = std::fs::metadata(path)?.len();
    if size_bytes > limit_bytes {
        return Err(PhotoError::too_large(size_bytes, limit_bytes));
    }

    let bytes = std::fs::read(path)?;
    validate_photo(&name, &bytes, limit_bytes)
}

fn detect_format(name: &str, bytes: &[u8]) -> Result<ImageFormat, PhotoError> {
    ImageFormat::from_path(name)
        .or_else(|_| image::guess_format(bytes))
        .map_err(|_| PhotoError::NotAnImage)
}

fn build_photo(name: &str, size_bytes: u64, format: ImageFormat, image: &DynamicImage) -> Photo {
    let preview = if image.width() > PREVIEW_SIZE || image.height() > PREVIEW_SIZE {
        image.thumbnail(PREVIEW_SIZE, PREVIEW_SIZE).to_rgba8()
    } else {
        image.to_rgba8()
    };

    Photo {
        info: PhotoInfo {
            name: name.to_string(),
            size_bytes,
            width: image.width(),
            height: image.height(),
            format: format!("{:?}", format),
        },
        preview,
    }
}

#[derive(Debug, Clone, Copy)]
pub enum UploadState {
    Empty,
    Uploading(TickProgress),
    Uploaded,
}

/// Photo step state: selection, simulated upload, removal.
pub struct PhotoUpload {
    state: UploadState,
    photo: Option<Photo>,
    limit_bytes: u64,
    tick: Duration,
}

impl PhotoUpload {
    pub fn new(config: &Config) -> Self {
        Self {
            state: UploadState::Empty,
            photo: None,
            limit_bytes: config.max_photo_bytes,
            tick: config.upload_tick,
        }
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn limit_bytes(&self) -> u64 {
        self.limit_bytes
    }

    pub fn select_path(&mut self, path: &Path) -> Result<&PhotoInfo, PhotoError> {
        let photo = load_photo(path, self.limit_bytes)?;
        Ok(self.accept(photo))
    }

    pub fn select_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<&PhotoInfo, PhotoError> {
        let photo = validate_photo(name, bytes, self.limit_bytes)?;
        Ok(self.accept(photo))
    }

    fn accept(&mut self, photo: Photo) -> &PhotoInfo {
        log::info!(
            "📷 Фото принято: {} ({}x{}, {} байт)",
            photo.info.name,
            photo.info.width,
            photo.info.height,
            photo.info.size_bytes
        );
        self.state = UploadState::Uploading(TickProgress::start(self.tick));
        &self.photo.insert(photo).info
    }

    pub fn upload_percent(&self) -> u8 {
        match self.state {
            UploadState::Empty => 0,
            UploadState::Uploading(progress) => progress.percent(),
            UploadState::Uploaded => 100,
        }
    }

    /// Advances the simulated upload. Returns the photo info exactly once,
    /// on the frame the upload completes.
    pub fn poll(&mut self) -> Option<&PhotoInfo> {
        match self.state {
            UploadState::Uploading(progress) if progress.is_done() => {
                self.state = UploadState::Uploaded;
                log::info!("✓ Загрузка фото завершена");
                self.photo.as_ref().map(|p| &p.info)
            }
            _ => None,
        }
    }

    /// Clears the selection unless an upload is running.
    pub fn remove(&mut self) -> bool {
        if matches!(self.state, UploadState::Uploading(_)) {
            return false;
        }
        self.photo = None;
        self.state = UploadState::Empty;
        true
    }
}
