//! Shared constants for page manipulation

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

/// PDF version written to every output document
pub const OUTPUT_PDF_VERSION: &str = "1.7";

/// Page attributes a page may inherit from its ancestors in the page tree
pub const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];

/// Guard against malformed page trees whose `Parent` chain loops
pub const MAX_PAGE_TREE_DEPTH: usize = 64;

// =============================================================================
// Watermark
// =============================================================================

/// Font size of the watermark label (points)
pub const WATERMARK_FONT_SIZE: f32 = 9.0;

/// Fill opacity of the watermark label
pub const WATERMARK_OPACITY: f32 = 0.4;

/// How many times the label is repeated along the page edge
pub const WATERMARK_REPEAT: usize = 100;

/// Resource name of the watermark font
pub const WATERMARK_FONT_NAME: &str = "JigWmFont";

/// Resource name of the watermark graphics state
pub const WATERMARK_GSTATE_NAME: &str = "JigWmGs";
