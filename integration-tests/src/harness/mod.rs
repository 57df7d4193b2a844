pub mod fixtures;
pub mod tracing;

pub use fixtures::{load_fixture, render_fixture};
pub use tracing::{CapturedEvent, init_test_tracing};
