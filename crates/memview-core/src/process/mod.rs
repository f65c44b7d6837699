mod accessor;
pub mod layout;

// Mock inspected process for testing (always available for unit and
// integration tests)
#[doc(hidden)]
pub mod mock;

pub use accessor::InspectedProcess;

// Re-export mock for convenient access in tests
#[doc(hidden)]
pub use mock::{MockProcess, MockProcessBuilder};
