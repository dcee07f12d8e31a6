//! Loading extracted pages.
//!
//! Text and geometry extraction (OCR, PDF text layers) happens outside this
//! crate. An extractor hands over its result through [`PageSource`]; the
//! bundled [`JsonPageSource`] reads the JSON form of [`PageContent`].
//!
//! Two JSON shapes are accepted, a bare array of pages or an object with a
//! `pages` array:
//!
//! ```json
//! { "pages": [
//!     { "page_number": 1, "width": 612.0, "height": 792.0,
//!       "lines": [ { "text": "Hello", "x1": 72.0, "y1": 70.0,
//!                    "x2": 140.0, "y2": 84.0, "page_number": 1 } ] }
//! ] }
//! ```

use crate::error::{Error, Result};
use crate::model::{PageContent, PageMap};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Default input size limit (20 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 20 * 1024 * 1024;

/// A provider of extracted pages for one document.
pub trait PageSource: Send + Sync {
    /// Short name used in error messages (e.g. "old", a file name).
    fn label(&self) -> &str;

    /// Load all pages, keyed by page number.
    fn load(&self) -> Result<PageMap>;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PagesFile {
    List(Vec<PageContent>),
    Wrapped { pages: Vec<PageContent> },
}

impl PagesFile {
    fn into_pages(self) -> Vec<PageContent> {
        match self {
            PagesFile::List(pages) | PagesFile::Wrapped { pages } => pages,
        }
    }
}

#[derive(Debug, Clone)]
enum JsonInput {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// Extracted pages stored as JSON, on disk or in memory.
#[derive(Debug, Clone)]
pub struct JsonPageSource {
    label: String,
    input: JsonInput,
    max_bytes: Option<u64>,
}

impl JsonPageSource {
    /// Read pages from a JSON file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            label: path.display().to_string(),
            input: JsonInput::Path(path),
            max_bytes: None,
        }
    }

    /// Read pages from an in-memory JSON buffer.
    pub fn from_bytes(label: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            input: JsonInput::Bytes(data.into()),
            max_bytes: None,
        }
    }

    /// Set the label used in error messages.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Reject inputs larger than `max` bytes.
    pub fn with_max_bytes(mut self, max: u64) -> Self {
        self.max_bytes = Some(max);
        self
    }

    /// The file path, if this source reads from disk.
    pub fn path(&self) -> Option<&Path> {
        match &self.input {
            JsonInput::Path(path) => Some(path),
            JsonInput::Bytes(_) => None,
        }
    }

    fn check_size(&self, size: u64) -> Result<()> {
        match self.max_bytes {
            Some(max) if size > max => Err(Error::InputTooLarge {
                document: self.label.clone(),
                size,
                max,
            }),
            _ => Ok(()),
        }
    }
}

impl PageSource for JsonPageSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn load(&self) -> Result<PageMap> {
        match &self.input {
            JsonInput::Path(path) => {
                self.check_size(fs::metadata(path)?.len())?;
                let file = File::open(path)?;
                pages_from_reader(BufReader::new(file))
            }
            JsonInput::Bytes(data) => {
                self.check_size(data.len() as u64)?;
                pages_from_bytes(data)
            }
        }
    }
}

/// Load pages from a JSON file.
///
/// # Example
///
/// ```no_run
/// use pagediff::source::load_pages;
///
/// let pages = load_pages("old.json").unwrap();
/// println!("Pages: {}", pages.len());
/// ```
pub fn load_pages<P: AsRef<Path>>(path: P) -> Result<PageMap> {
    JsonPageSource::from_path(path.as_ref()).load()
}

/// Parse pages from JSON bytes.
pub fn pages_from_bytes(data: &[u8]) -> Result<PageMap> {
    let file: PagesFile = serde_json::from_slice(data)?;
    pages_from_vec(file.into_pages())
}

/// Parse pages from a JSON reader.
pub fn pages_from_reader<R: Read>(reader: R) -> Result<PageMap> {
    let file: PagesFile = serde_json::from_reader(reader)?;
    pages_from_vec(file.into_pages())
}

/// Index pages by number.
///
/// Page numbers must be positive and unique within a document. Geometry
/// is trusted as given; odd values are only logged.
pub fn pages_from_vec(pages: Vec<PageContent>) -> Result<PageMap> {
    let mut map = PageMap::new();

    for page in pages {
        let number = page.page_number;
        if number == 0 {
            return Err(Error::InvalidPage(
                "page numbers start at 1, found 0".to_string(),
            ));
        }
        if page.width <= 0.0 || page.height <= 0.0 {
            log::warn!(
                "Page {} has degenerate dimensions {}x{}",
                number,
                page.width,
                page.height
            );
        }
        for line in &page.lines {
            if !line.bbox().is_well_formed() {
                log::warn!("Page {}: inverted box for line {:?}", number, line.text);
            }
            if line.page_number != number {
                log::warn!(
                    "Page {}: line {:?} claims page {}",
                    number,
                    line.text,
                    line.page_number
                );
            }
        }
        if map.insert(number, page).is_some() {
            return Err(Error::InvalidPage(format!("duplicate page number {}", number)));
        }
    }

    Ok(map)
}
