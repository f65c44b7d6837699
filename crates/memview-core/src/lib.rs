pub mod capture;
pub mod command;
pub mod error;
pub mod process;
pub mod render;

pub use capture::{CaptureFile, CaptureProcess};
pub use command::{print_array, ArrayPrintHost};
pub use error::{Error, Result};
pub use process::InspectedProcess;
pub use render::{classify, Formatter, RenderLimits, ScalarKind, TypeClass};

#[doc(hidden)]
pub use process::{MockProcess, MockProcessBuilder};
