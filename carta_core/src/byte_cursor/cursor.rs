//! A peekable cursor over a borrowed byte slice.
//!
//! All parsing in this crate happens through [`ByteCursor`]: it supports
//! peeking at the next byte without consuming it, advancing one byte at a
//! time, and formatting errors that quote the input leading up to the
//! current position.

use anyhow::{Error, anyhow};

const SNIPPET_LENGTH: usize = 16;

/// A cursor over a byte slice with single-byte lookahead.
pub struct ByteCursor<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteCursor<'a> {
	#[must_use]
	pub fn from_slice(bytes: &'a [u8]) -> Self {
		ByteCursor { bytes, position: 0 }
	}

	#[must_use]
	pub fn from_str(text: &'a str) -> Self {
		Self::from_slice(text.as_bytes())
	}

	/// Current absolute position in the input.
	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	/// The next byte, without consuming it.
	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	/// Moves past the current byte.
	#[inline]
	pub fn advance(&mut self) {
		self.position += 1;
	}

	/// Returns the current byte and moves past it.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		if byte.is_some() {
			self.position += 1;
		}
		byte
	}

	/// Like [`ByteCursor::consume`], but an unexpected end of input is an error.
	pub fn expect_next_byte(&mut self) -> anyhow::Result<u8> {
		self.consume().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Like [`ByteCursor::peek`], but an unexpected end of input is an error.
	pub fn expect_peeked_byte(&self) -> anyhow::Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	/// Skips over any run of JSON whitespace.
	pub fn skip_whitespace(&mut self) {
		while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
			self.position += 1;
		}
	}

	/// Builds an error carrying the current position and the bytes that led
	/// up to it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(SNIPPET_LENGTH);
		let snippet = String::from_utf8_lossy(&self.bytes[start..end]);
		if self.position >= self.bytes.len() {
			anyhow!("{msg} at position {}: {snippet}<EOF>", self.position)
		} else {
			anyhow!("{msg} at position {}: {snippet}", self.position)
		}
	}
}
