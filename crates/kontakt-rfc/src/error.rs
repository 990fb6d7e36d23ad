use thiserror::Error;

use crate::rfc::vcard::VCardError;

/// Errors surfaced by the I/O-facing entry points of this crate.
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    VCard(#[from] VCardError),

    #[error("I/O error while reading vCard data: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    CoreError(#[from] kontakt_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
