use std::path::{Path, PathBuf};

use crate::foundation::error::{ComedianError, ComedianResult};
use crate::render::canvas::Canvas;

/// Destination for generated assets.
///
/// Names are bare file names (`comedian_talking_1.png`, `dadJokes.json`); every name written
/// during one run is unique.
pub trait AssetSink {
    /// Called once before anything is written.
    fn begin(&mut self) -> ComedianResult<()>;
    /// Encode `canvas` as PNG under `name`.
    fn write_image(&mut self, name: &str, canvas: &Canvas) -> ComedianResult<()>;
    /// Write UTF-8 text under `name`.
    fn write_text(&mut self, name: &str, text: &str) -> ComedianResult<()>;
}

/// Writes assets as files into one directory, creating it on [`AssetSink::begin`] if needed.
#[derive(Debug, Clone)]
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl AssetSink for DirSink {
    fn begin(&mut self) -> ComedianResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| ComedianError::io(&self.dir, e))
    }

    fn write_image(&mut self, name: &str, canvas: &Canvas) -> ComedianResult<()> {
        let path = self.path_for(name);
        image::save_buffer_with_format(
            &path,
            canvas.data(),
            canvas.width(),
            canvas.height(),
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| match e {
            image::ImageError::IoError(io) => ComedianError::io(&path, io),
            other => ComedianError::encode(format!("png '{}': {other}", path.display())),
        })?;
        tracing::debug!(path = %path.display(), "wrote image");
        Ok(())
    }

    fn write_text(&mut self, name: &str, text: &str) -> ComedianResult<()> {
        let path = self.path_for(name);
        std::fs::write(&path, text).map_err(|e| ComedianError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote text");
        Ok(())
    }
}

/// An asset captured by [`InMemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredAsset {
    Image(Canvas),
    Text(String),
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    began: bool,
    assets: Vec<(String, StoredAsset)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn began(&self) -> bool {
        self.began
    }

    /// Captured assets in write order.
    pub fn assets(&self) -> &[(String, StoredAsset)] {
        &self.assets
    }

    pub fn get(&self, name: &str) -> Option<&StoredAsset> {
        self.assets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, asset)| asset)
    }
}

impl AssetSink for InMemorySink {
    fn begin(&mut self) -> ComedianResult<()> {
        self.began = true;
        self.assets.clear();
        Ok(())
    }

    fn write_image(&mut self, name: &str, canvas: &Canvas) -> ComedianResult<()> {
        self.assets
            .push((name.to_owned(), StoredAsset::Image(canvas.clone())));
        Ok(())
    }

    fn write_text(&mut self, name: &str, text: &str) -> ComedianResult<()> {
        self.assets
            .push((name.to_owned(), StoredAsset::Text(text.to_owned())));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
