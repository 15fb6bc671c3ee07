//! Errors surfaced to the user during onboarding.

use thiserror::Error;

/// Why a photo was refused. Shown inline on the photo step.
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Por favor, selecione apenas arquivos de imagem.")]
    NotAnImage,

    #[error("O arquivo deve ter no máximo {limit_mb}MB.")]
    TooLarge { size: u64, limit_mb: u64 },

    #[error("Não foi possível ler o arquivo: {0}")]
    Io(#[from] std::io::Error),

    #[error("Imagem inválida: {0}")]
    Decode(#[from] image::ImageError),
}

impl PhotoError {
    pub fn too_large(size: u64, limit_bytes: u64) -> Self {
        Self::TooLarge {
            size,
            limit_mb: limit_bytes / (1024 * 1024),
        }
    }
}
