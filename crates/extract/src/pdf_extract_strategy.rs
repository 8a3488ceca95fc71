//! Primary strategy backed by the `pdf-extract` crate.
//!
//! `pdf-extract` panics on some malformed documents instead of returning an
//! error, so every call runs inside [`std::panic::catch_unwind`].

use anyhow::Result;

use crate::{Attempt, ExtractionStrategy, StrategyKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractStrategy;

impl PdfExtractStrategy {
	pub const fn is_available() -> bool {
		cfg!(feature = "pdf-extract")
	}
}

impl ExtractionStrategy for PdfExtractStrategy {
	fn kind(&self) -> StrategyKind {
		StrategyKind::PdfExtract
	}

	#[cfg(feature = "pdf-extract")]
	fn attempt(&self, bytes: &[u8]) -> Result<Attempt> {
		let pages = extract_pages(bytes)?;
		Ok(Attempt::Extracted(crate::collect_pages(pages)))
	}

	#[cfg(not(feature = "pdf-extract"))]
	fn attempt(&self, _bytes: &[u8]) -> Result<Attempt> {
		Ok(Attempt::Unavailable)
	}
}

#[cfg(feature = "pdf-extract")]
fn extract_pages(bytes: &[u8]) -> Result<Vec<String>> {
	use std::panic::{self, AssertUnwindSafe};

	let result = panic::catch_unwind(AssertUnwindSafe(|| {
		pdf_extract::extract_text_from_mem_by_pages(bytes)
	}));
	match result {
		Ok(Ok(pages)) => Ok(pages),
		Ok(Err(e)) => Err(anyhow::anyhow!("pdf-extract failed: {}", e)),
		Err(_) => Err(anyhow::anyhow!("pdf-extract panicked (malformed document)")),
	}
}
