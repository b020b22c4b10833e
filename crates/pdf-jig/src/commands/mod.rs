//! Document-level commands
//!
//! Each command reads a loaded document and returns a new one; the source
//! is never modified. Commands are synchronous and CPU-bound, so async
//! callers run them through [`run_blocking`].

mod boxes;
mod io;
mod merge;
mod select;
mod split;
mod spread;
mod watermark;

pub use boxes::{apply_trimbox, trim_margin};
pub use io::{load_multiple_pdfs, load_pdf, save_pdf, with_suffix};
pub use merge::{concatenate, insert_pages, insertion_index, swap_pages};
pub use select::{Unzipped, extract_pages, rotate_pages, unzip_pages};
pub use split::{plan_document_split, split_pages};
pub use spread::{plan_document_spread, spread_pages};
pub use watermark::{TextPosition, watermark_pages, watermark_position};

use crate::types::Result;

/// Run a command on the blocking thread pool
pub async fn run_blocking<T, F>(command: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(command).await?
}
