//! Process adapters.

mod recording;
mod system;

pub use recording::RecordingCommandRunner;
pub use system::SystemCommandRunner;
