//! Last-resort scanner that pulls UTF-16-ish printable characters out of raw bytes.
//!
//! No PDF structure is understood here: compressed streams yield noise and
//! text stored in any other encoding is missed.

use anyhow::Result;

use crate::{Attempt, ExtractedPage, ExtractionStrategy, StrategyKind};

fn is_printable(byte: u8) -> bool {
	(32..=126).contains(&byte)
}

/// Collect every printable ASCII byte that sits next to a null byte.
///
/// A pair `00 xx` (big-endian) or `xx 00` (little-endian) with `xx` in
/// `[32, 126]` emits `xx` and consumes both bytes. Anything else advances by
/// one. Only whole pairs are examined, so a trailing lone byte is never emitted.
pub fn scan_readable(bytes: &[u8]) -> String {
	let mut out = String::new();
	let mut i = 0;
	while i + 1 < bytes.len() {
		let (first, second) = (bytes[i], bytes[i + 1]);
		if first == 0 && is_printable(second) {
			out.push(char::from(second));
			i += 2;
		} else if is_printable(first) && second == 0 {
			out.push(char::from(first));
			i += 2;
		} else {
			i += 1;
		}
	}
	out
}

/// Always-available strategy wrapping [`scan_readable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteScanStrategy;

impl ExtractionStrategy for ByteScanStrategy {
	fn kind(&self) -> StrategyKind {
		StrategyKind::ByteScan
	}

	fn attempt(&self, bytes: &[u8]) -> Result<Attempt> {
		let text = scan_readable(bytes);
		log::debug!("byte scan recovered {} chars from {} bytes", text.len(), bytes.len());
		Ok(Attempt::Extracted(vec![ExtractedPage { page_number: 1, text }]))
	}

	// Scanned characters are concatenated as-is, with no page newline.
	fn render(&self, pages: &[ExtractedPage]) -> String {
		pages.iter().map(|p| p.text.as_str()).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn short_inputs_are_empty() {
		assert_eq!(scan_readable(b""), "");
		assert_eq!(scan_readable(b"A"), "");
		assert_eq!(scan_readable(b"\x00"), "");
	}

	#[test]
	fn trailing_lone_byte_is_ignored() {
		assert_eq!(scan_readable(b"\x00AB"), "A");
	}

	#[test]
	fn double_null_advances_by_one() {
		assert_eq!(scan_readable(b"\x00\x00A"), "A");
	}

	#[test]
	fn non_printable_partner_is_skipped() {
		assert_eq!(scan_readable(b"\x00\x7f\x00\x1f"), "");
	}
}
