//! Alternative strategy backed by `lopdf`'s per-page text extraction.

use anyhow::Result;

use crate::{Attempt, ExtractionStrategy, StrategyKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfStrategy;

impl LopdfStrategy {
	pub const fn is_available() -> bool {
		cfg!(feature = "lopdf")
	}
}

impl ExtractionStrategy for LopdfStrategy {
	fn kind(&self) -> StrategyKind {
		StrategyKind::Lopdf
	}

	#[cfg(feature = "lopdf")]
	fn attempt(&self, bytes: &[u8]) -> Result<Attempt> {
		use anyhow::Context;

		let doc = lopdf::Document::load_mem(bytes).context("Failed to load PDF with lopdf")?;
		let mut texts = Vec::new();
		// get_pages is keyed by page number, so iteration is in page order
		for page_number in doc.get_pages().into_keys() {
			let text = doc
				.extract_text(&[page_number])
				.with_context(|| format!("Failed to extract text from page {}", page_number))?;
			texts.push(text);
		}
		Ok(Attempt::Extracted(crate::collect_pages(texts)))
	}

	#[cfg(not(feature = "lopdf"))]
	fn attempt(&self, _bytes: &[u8]) -> Result<Attempt> {
		Ok(Attempt::Unavailable)
	}
}
