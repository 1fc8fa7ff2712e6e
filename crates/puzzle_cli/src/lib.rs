// Setup parsing, board rendering and the interactive command loop.
pub mod render;
pub mod session;
pub mod setup;

pub use render::render;
pub use session::{run_session, SessionConfig};
pub use setup::{parse_setup, SetupError};
