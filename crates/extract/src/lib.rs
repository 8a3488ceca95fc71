//! Text extraction strategies for pdftext.
//
// Each strategy takes the raw bytes of a PDF and either produces page text or
// reports that its backing library was not compiled in.

use std::fmt;
use std::str::FromStr;
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod byte_scan;
pub mod lopdf_strategy;
pub mod pdf_extract_strategy;

pub use byte_scan::{scan_readable, ByteScanStrategy};
pub use lopdf_strategy::LopdfStrategy;
pub use pdf_extract_strategy::PdfExtractStrategy;

/// Identifies a strategy in config files, on the command line and in output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
	PdfExtract,
	Lopdf,
	ByteScan,
}

impl StrategyKind {
	/// Default order: full library, alternative library, raw byte scan.
	pub const DEFAULT_ORDER: [StrategyKind; 3] = [
		StrategyKind::PdfExtract,
		StrategyKind::Lopdf,
		StrategyKind::ByteScan,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			StrategyKind::PdfExtract => "pdf-extract",
			StrategyKind::Lopdf => "lopdf",
			StrategyKind::ByteScan => "byte-scan",
		}
	}

	/// Build the strategy this kind names.
	pub fn strategy(&self) -> Box<dyn ExtractionStrategy> {
		match self {
			StrategyKind::PdfExtract => Box::new(PdfExtractStrategy),
			StrategyKind::Lopdf => Box::new(LopdfStrategy),
			StrategyKind::ByteScan => Box::new(ByteScanStrategy),
		}
	}
}

impl fmt::Display for StrategyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for StrategyKind {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"pdf-extract" => Ok(StrategyKind::PdfExtract),
			"lopdf" => Ok(StrategyKind::Lopdf),
			"byte-scan" => Ok(StrategyKind::ByteScan),
			other => Err(format!(
				"unknown strategy '{}' (expected pdf-extract, lopdf or byte-scan)",
				other
			)),
		}
	}
}

/// Text recovered from a single page (1-based).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedPage {
	pub page_number: u32,
	pub text: String,
}

/// Outcome of one strategy attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
	Extracted(Vec<ExtractedPage>),
	/// The backing library is not part of this build.
	Unavailable,
}

/// One link in the extraction chain.
pub trait ExtractionStrategy: Send + Sync {
	fn kind(&self) -> StrategyKind;

	/// Attempt extraction from the full file contents.
	fn attempt(&self, bytes: &[u8]) -> Result<Attempt>;

	/// Render extracted pages as the final text.
	fn render(&self, pages: &[ExtractedPage]) -> String {
		join_pages(pages)
	}
}

/// Concatenate page texts, each followed by a newline.
pub fn join_pages(pages: &[ExtractedPage]) -> String {
	let mut text = String::new();
	for page in pages {
		text.push_str(&page.text);
		text.push('\n');
	}
	text
}

/// Number pages from 1 and drop those without text.
#[cfg_attr(not(any(feature = "pdf-extract", feature = "lopdf")), allow(dead_code))]
pub(crate) fn collect_pages<I>(texts: I) -> Vec<ExtractedPage>
where
	I: IntoIterator<Item = String>,
{
	texts
		.into_iter()
		.zip(1u32..)
		.filter(|(text, _)| !text.is_empty())
		.map(|(text, page_number)| ExtractedPage { page_number, text })
		.collect()
}
