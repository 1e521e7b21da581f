//! Re-framing of upstream event-stream bodies

mod buffer;
mod relay;

pub use buffer::LineBuffer;
pub use relay::{reframe_line, relay_events, DATA_PREFIX};
