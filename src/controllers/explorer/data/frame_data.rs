use std::time::Duration;

use crate::core::data::render_buffer::RenderBuffer;
use crate::core::data::viewport::Epoch;

#[derive(Debug)]
pub struct FrameData {
    pub epoch: Epoch,
    pub steps_run: u64,
    pub render_buffer: RenderBuffer,
    pub render_duration: Duration,
    /// Status line for the view the buffer shows.
    pub description: String,
    /// Outcome of the most recent export, if any.
    pub status: Option<String>,
}
