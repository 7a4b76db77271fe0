//! A byte-level cursor over borrowed JSON text.
//!
//! `ByteIterator` supports peeking at the next byte without consuming it, advancing, and
//! consuming bytes one by one. Errors produced through [`ByteIterator::format_error`] carry
//! the byte position and a short snippet of the text preceding it.

use anyhow::{Error, anyhow};

const SNIPPET_SIZE: usize = 16;

/// A cursor over a byte slice with support for peeking, consuming, and error reporting.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates a new `ByteIterator` positioned at the first byte of `text`.
	#[must_use]
	pub fn new(text: &'a str) -> Self {
		Self::from_bytes(text.as_bytes())
	}

	/// Creates a new `ByteIterator` positioned at the first byte of `bytes`.
	#[must_use]
	pub fn from_bytes(bytes: &'a [u8]) -> Self {
		ByteIterator { bytes, position: 0 }
	}

	/// Formats an error message including the current byte position and the text leading up to it.
	///
	/// A trailing `<EOF>` marks that the input was exhausted.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(SNIPPET_SIZE);
		let mut snippet = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.peek().is_none() {
			snippet.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {snippet}", self.position)
	}

	/// Returns the current absolute position in the byte slice.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// Peeks at the next byte without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Moves past the current byte. Does nothing at the end of input.
	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Consumes and returns the current byte, advancing the iterator.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let current_byte = self.peek();
		self.advance();
		current_byte
	}

	/// Expects and returns the next byte, advancing the iterator.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_next_byte(&mut self) -> anyhow::Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Returns the current byte without advancing.
	///
	/// # Errors
	///
	/// Returns an error if the end of the input is reached unexpectedly.
	#[inline]
	pub fn expect_peeked_byte(&self) -> anyhow::Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips over any ASCII whitespace bytes.
	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.advance();
		}
	}

	/// Returns `true` once every byte has been consumed.
	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.position >= self.bytes.len()
	}
}
