//! Shared constants for approval stamping
//!
//! Geometry values are in PDF points.

// =============================================================================
// Request Fields
// =============================================================================

/// Field carrying the approver's name
pub const APPROVER_FIELD: &str = "Approver";

/// Field carrying the input PDF path
pub const PDF_PATH_FIELD: &str = "PDF_Path";

/// Field carrying the output directory
pub const OUT_PATH_FIELD: &str = "Out_Path";

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

// =============================================================================
// Stamp Placement
// =============================================================================

/// Horizontal shift of the anchor to the left of the page center
pub const STAMP_X_OFFSET: f32 = 40.0;

/// Height of the bottom band the stamp is placed in
pub const STAMP_BOTTOM_MARGIN: f32 = 50.0;

/// Distance of the first baseline below the top of the bottom band
pub const STAMP_BASELINE_DROP: f32 = 25.0;

// =============================================================================
// Stamp Rendering
// =============================================================================

/// Built-in Type1 font used for the stamp text
pub const STAMP_FONT: &str = "Helvetica";

/// Preferred resource name for the stamp font
pub const STAMP_FONT_RESOURCE: &str = "FStamp";

/// Font size of the stamp text (points)
pub const STAMP_FONT_SIZE: f32 = 11.0;

/// Line height as a multiple of the font size
pub const STAMP_LINE_HEIGHT_FACTOR: f32 = 1.25;

/// Fill color of the stamp text (RGB, red)
pub const STAMP_COLOR: (f32, f32, f32) = (1.0, 0.0, 0.0);

/// Format of the confirmation time, e.g. `2024/3/5 09:07:03`
pub const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

// =============================================================================
// Output
// =============================================================================

/// Suffix appended to the input file stem for the stamped copy
pub const OUTPUT_SUFFIX: &str = "_added";

/// Extension of the stamped copy
pub const OUTPUT_EXTENSION: &str = "pdf";
