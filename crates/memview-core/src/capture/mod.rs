mod format;
mod host;

pub use format::{CaptureCall, CaptureFile, CaptureRegion};
pub use host::CaptureProcess;
