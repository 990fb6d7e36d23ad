//! vCard document reader.

use std::io::Read;
use std::iter::Peekable;

use kontakt_core::config::ReaderConfig;
use kontakt_core::constants::{
    BEGIN_LINE, END_LINE, FIELD_SEPARATOR, VALUE_SEPARATOR, VCARD_OBJECT, VERSION_PROPERTY,
};

use super::property::parse_property_with;
use super::unfold::{LineUnfolder, ReadBytes, unfold_str};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{Card, VCardVersion};
use crate::rfc::vcard::error::{LookupKind, VCardError, VCardResult};
use crate::rfc::vcard::validation::ValidationMatrix;

/// Parses a vCard document into zero or more cards.
///
/// ## Summary
/// Uses the default [`ReaderConfig`]. Malformed lines are skipped, and so is
/// a card that is never closed with `END:VCARD`.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse(input: &str) -> Vec<Card> {
    parse_with(input, &ReaderConfig::default())
}

/// Parses a vCard document with the given reader settings.
///
/// An invalid `config` is logged and used as is; empty binary markers are
/// ignored. Use [`read_cards`] to reject it instead.
#[tracing::instrument(skip(input, config), fields(input_len = input.len()))]
#[must_use]
pub fn parse_with(input: &str, config: &ReaderConfig) -> Vec<Card> {
    if let Err(err) = config.validate() {
        tracing::warn!(error = %err, "Invalid reader settings");
    }
    CardReader::new(config).read(unfold_str(input))
}

/// Parses the first card of a document.
///
/// ## Errors
/// Returns `NotFound` if the document holds no complete card.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> VCardResult<Card> {
    parse(input).into_iter().next().ok_or_else(|| {
        tracing::debug!("No vCard found in document");
        VCardError::NotFound {
            kind: LookupKind::Card,
            name: VCARD_OBJECT.to_string(),
        }
    })
}

/// Reads every card from a byte stream.
///
/// ## Errors
/// Returns `CoreError` if `config` is invalid, or the first I/O error of
/// `reader`. Scanning stops at that error.
#[tracing::instrument(skip(reader, config))]
pub fn read_cards<R: Read>(reader: R, config: &ReaderConfig) -> RfcResult<Vec<Card>> {
    config.validate()?;

    let mut bytes = ReadBytes::new(reader);
    let cards = CardReader::new(config).read(LineUnfolder::new(&mut bytes));

    if let Some(err) = bytes.take_error() {
        tracing::warn!(error = %err, "vCard source failed");
        return Err(err.into());
    }

    Ok(cards)
}

/// Assembles cards from logical lines.
///
/// This is the only place where line-level errors are caught: a line that
/// fails to scan or is rejected by its card is logged and skipped.
#[derive(Debug, Clone, Copy)]
pub struct CardReader<'a> {
    config: &'a ReaderConfig,
    matrix: &'a ValidationMatrix,
}

impl<'a> CardReader<'a> {
    #[must_use]
    pub fn new(config: &'a ReaderConfig) -> Self {
        Self {
            config,
            matrix: ValidationMatrix::standard(),
        }
    }

    /// Uses `matrix` instead of the standard rules.
    #[must_use]
    pub fn with_matrix(mut self, matrix: &'a ValidationMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Reads all cards from an iterator of unfolded lines.
    #[must_use]
    pub fn read<I: Iterator<Item = String>>(&self, lines: I) -> Vec<Card> {
        tracing::debug!("Parsing vCard document");

        let mut lines = lines.peekable();
        let mut cards = Vec::new();
        let mut current: Option<Card> = None;
        let mut line_no = 0usize;

        while let Some(line) = lines.next() {
            line_no += 1;
            tracing::trace!(line = line_no, "Read line");

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed.eq_ignore_ascii_case(BEGIN_LINE) {
                if current.is_some() {
                    tracing::debug!(line = line_no, "Discarding vCard without END");
                }
                current = Some(Card::new());
                continue;
            }

            let Some(card) = current.as_mut() else {
                tracing::trace!(line = line_no, "Ignoring line outside vCard");
                continue;
            };

            if trimmed.eq_ignore_ascii_case(END_LINE) {
                if let Some(card) = current.take() {
                    cards.push(card);
                }
                continue;
            }

            if self.config.is_binary_payload(property_name(&line)) {
                let skipped = skip_continuations(&mut lines);
                tracing::debug!(line = line_no, skipped, "Skipping binary payload");
                line_no += skipped;
                continue;
            }

            if let Err(err) = self.read_property(card, &line) {
                tracing::debug!(
                    line = line_no,
                    scan = err.is_scan_error(),
                    error = %err,
                    "Skipping vCard line"
                );
            }
        }

        if current.is_some() {
            tracing::debug!("Discarding vCard without END at end of input");
        }

        tracing::debug!(count = cards.len(), "Parsed vCards");
        cards
    }

    fn read_property(&self, card: &mut Card, line: &str) -> VCardResult<()> {
        let prop = parse_property_with(line, self.matrix)?;

        if prop.is_named(VERSION_PROPERTY) {
            card.set_version(VCardVersion::from_token(&prop.value()));
            return Ok(());
        }

        card.add_property_with(prop, self.matrix)
    }
}

/// Returns the text before the first `:` or `;`.
fn property_name(line: &str) -> &str {
    let end = line
        .find([VALUE_SEPARATOR, FIELD_SEPARATOR])
        .unwrap_or(line.len());
    &line[..end]
}

/// Drops the space-led lines that follow a skipped line.
fn skip_continuations<I: Iterator<Item = String>>(lines: &mut Peekable<I>) -> usize {
    let mut skipped = 0;
    while lines.next_if(|l| l.starts_with(' ')).is_some() {
        skipped += 1;
    }
    skipped
}
