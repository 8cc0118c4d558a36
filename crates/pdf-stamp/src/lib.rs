pub mod clock;
mod constants;
mod pipeline;
mod report;
pub mod resolve;
pub mod stamp;
mod types;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::*;
pub use pipeline::Stamper;
pub use report::{Report, report};
pub use resolve::{JsonBody, ParamSource, resolve_params, resolve_request};
pub use stamp::{
    PageBox, StampAnnotation, StampPlacement, load_pdf, output_file_name, output_path, save_pdf,
    stamp_document, stamp_pdf,
};
pub use types::*;
pub use validate::{ensure_input_exists, ensure_output_dir, validate_paths};
