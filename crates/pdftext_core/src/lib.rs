//! Extraction pipeline and orchestration for pdftext.
//
// Runs an ordered chain of extraction strategies over one file and reports
// progress through a callback.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::Serialize;

pub mod config;

pub use config::{ExtractConfig, PdfTextConfig};
pub use extract::{Attempt, ExtractedPage, ExtractionStrategy, StrategyKind};

/// Prefix of every message returned in place of text when extraction fails.
pub const ERROR_PREFIX: &str = "Error extracting PDF:";

/// Events emitted while the chain runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionEvent {
	FileRead(PathBuf, usize),
	StrategyStarted(StrategyKind),
	/// The strategy's library is not compiled in; carries the strategy tried next.
	StrategyUnavailable(StrategyKind, Option<StrategyKind>),
	StrategySucceeded(StrategyKind, usize),
	Done,
}

/// Successful result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
	pub strategy: StrategyKind,
	pub pages: Vec<ExtractedPage>,
	pub text: String,
}

/// Ordered chain of extraction strategies.
#[derive(Clone)]
pub struct Pipeline {
	strategies: Arc<[Box<dyn ExtractionStrategy>]>,
}

impl Default for Pipeline {
	fn default() -> Self {
		Self::from_kinds(&StrategyKind::DEFAULT_ORDER)
	}
}

impl Pipeline {
	pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
		Self { strategies: strategies.into() }
	}

	pub fn from_kinds(kinds: &[StrategyKind]) -> Self {
		Self::new(kinds.iter().map(|k| k.strategy()).collect())
	}

	pub fn from_config(config: &PdfTextConfig) -> Self {
		Self::from_kinds(&config.extract.strategy_order())
	}

	pub fn kinds(&self) -> Vec<StrategyKind> {
		self.strategies.iter().map(|s| s.kind()).collect()
	}

	/// Run the chain (no progress reporting).
	pub fn try_extract(&self, path: &Path) -> Result<Extraction> {
		self.try_extract_with_progress(path, |_| ())
	}

	/// Run the chain, reporting progress via callback.
	///
	/// Only an unavailable strategy falls through to the next one. Any error
	/// from an available strategy ends the run.
	pub fn try_extract_with_progress<F>(&self, path: &Path, mut cb: F) -> Result<Extraction>
	where
		F: FnMut(ExtractionEvent),
	{
		let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
		log::debug!("read {} bytes from {}", bytes.len(), path.display());
		cb(ExtractionEvent::FileRead(path.to_path_buf(), bytes.len()));

		for (i, strategy) in self.strategies.iter().enumerate() {
			let kind = strategy.kind();
			log::debug!("trying {}", kind);
			cb(ExtractionEvent::StrategyStarted(kind));

			let attempt = strategy.attempt(&bytes).map_err(|e| {
				log::warn!("{} failed on {}: {:#}", kind, path.display(), e);
				e
			})?;
			match attempt {
				Attempt::Unavailable => {
					let next = self.strategies.get(i + 1).map(|s| s.kind());
					log::info!("{} not available in this build", kind);
					cb(ExtractionEvent::StrategyUnavailable(kind, next));
				}
				Attempt::Extracted(pages) => {
					let text = strategy.render(&pages);
					log::debug!("{} extracted {} page(s)", kind, pages.len());
					cb(ExtractionEvent::StrategySucceeded(kind, pages.len()));
					cb(ExtractionEvent::Done);
					return Ok(Extraction { strategy: kind, pages, text });
				}
			}
		}

		Err(anyhow!("no extraction strategy available"))
	}

	/// Extract text, returning an error message in place of the text on failure.
	pub fn extract_pdf_text(&self, path: &Path) -> String {
		match self.try_extract(path) {
			Ok(extraction) => extraction.text,
			Err(e) => error_message(&e),
		}
	}

	/// Run the chain on a blocking task so async callers do not stall the runtime.
	pub async fn run<F>(&self, path: PathBuf, cb: F) -> Result<Extraction>
	where
		F: FnMut(ExtractionEvent) + Send + 'static,
	{
		let pipeline = self.clone();
		tokio::task::spawn_blocking(move || pipeline.try_extract_with_progress(&path, cb))
			.await
			.context("extraction task failed")?
	}
}

/// Extract text with the default strategy order.
pub fn extract_pdf_text(path: &Path) -> String {
	Pipeline::default().extract_pdf_text(path)
}

/// Render an error the way it is printed in place of extracted text.
pub fn error_message(err: &anyhow::Error) -> String {
	format!("{} {:#}", ERROR_PREFIX, err)
}

/// Trait for extracting text from files.
#[async_trait]
pub trait TextExtractor: Send + Sync {
	async fn extract_text(&self, path: &PathBuf) -> Result<String>;
}

#[async_trait]
impl TextExtractor for Pipeline {
	async fn extract_text(&self, path: &PathBuf) -> Result<String> {
		let extraction = self.run(path.clone(), |_| ()).await?;
		Ok(extraction.text)
	}
}
