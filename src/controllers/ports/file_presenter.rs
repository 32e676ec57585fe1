use std::path::Path;

use crate::core::data::render_buffer::RenderBuffer;

pub trait FilePresenterPort {
    fn present(&self, buffer: &RenderBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
