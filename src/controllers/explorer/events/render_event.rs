use crate::controllers::explorer::data::frame_data::FrameData;
use crate::core::data::viewport::Epoch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderError {
    pub epoch: Epoch,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent {
    Frame(FrameData),
    Error(RenderError),
}
