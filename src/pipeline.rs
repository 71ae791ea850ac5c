//! Conversion Pipeline - Single Entry Point
//!
//! CRITICAL: both modules commit atomically. Never one-of-two on disk.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::emit::{self, ArtifactPair};
use crate::identifier::{Identifier, IdentifierError};
use crate::normalize::{self, DecodedImage, PixelSource};
use crate::pack;

/// Extension of the generated data module.
pub const DATA_EXTENSION: &str = "c";

/// Extension of the generated declaration module.
pub const HEADER_EXTENSION: &str = "h";

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input image not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Input filename has no base name: {}", .0.display())]
    NoBaseName(PathBuf),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One conversion invocation.
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Input image filename, resolved against `source_dir`.
    pub input: String,
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
    /// Set bits for dark pixels instead of light pixels.
    pub invert: bool,
}

/// What a successful conversion produced.
#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub data_path: PathBuf,
    pub header_path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub data_size: usize,
    pub inverted: bool,
}

/// Convert one image and commit both generated modules.
pub fn convert(request: &ConvertRequest) -> Result<ConvertOutcome, ConvertError> {
    let input_path = request.source_dir.join(&request.input);
    if !input_path.is_file() {
        return Err(ConvertError::MissingInput(input_path));
    }

    let stem = Path::new(&request.input)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ConvertError::NoBaseName(input_path.clone()))?;
    let identifier = Identifier::derive(stem)?;

    let decoded = image::open(&input_path).map_err(|source| ConvertError::Decode {
        path: input_path.clone(),
        source,
    })?;
    let source = DecodedImage::new(decoded);
    info!(
        "decoded {} ({}x{}, alpha: {})",
        input_path.display(),
        source.width(),
        source.height(),
        source.has_alpha()
    );

    let matrix = normalize::normalize(&source);
    let bitmap = pack::pack(&matrix, request.invert);
    debug!(
        "packed {}x{} into {} bytes ({} per row)",
        bitmap.width(),
        bitmap.height(),
        bitmap.data_size(),
        bitmap.bytes_per_row()
    );
    let artifacts = emit::render(&bitmap, &identifier);

    let data_path = request
        .dest_dir
        .join(format!("{}.{}", identifier.base(), DATA_EXTENSION));
    let header_path = request
        .dest_dir
        .join(format!("{}.{}", identifier.base(), HEADER_EXTENSION));
    commit(&request.dest_dir, &data_path, &header_path, &artifacts)?;
    info!("wrote {} and {}", data_path.display(), header_path.display());

    Ok(ConvertOutcome {
        data_path,
        header_path,
        width: bitmap.width(),
        height: bitmap.height(),
        data_size: bitmap.data_size(),
        inverted: request.invert,
    })
}

/// Stage both modules inside the destination directory, then persist. A
/// failure persisting the second module removes the first, so the pair
/// never splits.
fn commit(
    dest_dir: &Path,
    data_path: &Path,
    header_path: &Path,
    artifacts: &ArtifactPair,
) -> Result<(), ConvertError> {
    let data_stage = stage(dest_dir, &artifacts.data_module, data_path)?;
    let header_stage = stage(dest_dir, &artifacts.declaration_module, header_path)?;

    data_stage
        .persist(data_path)
        .map_err(|e| ConvertError::Write {
            path: data_path.to_path_buf(),
            source: e.error,
        })?;
    if let Err(e) = header_stage.persist(header_path) {
        let _ = fs::remove_file(data_path);
        return Err(ConvertError::Write {
            path: header_path.to_path_buf(),
            source: e.error,
        });
    }
    Ok(())
}

fn stage(dest_dir: &Path, contents: &str, target: &Path) -> Result<NamedTempFile, ConvertError> {
    fn write_stage(dest_dir: &Path, contents: &str) -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new_in(dest_dir)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    write_stage(dest_dir, contents).map_err(|source| ConvertError::Write {
        path: target.to_path_buf(),
        source,
    })
}
