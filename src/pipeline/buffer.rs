/// Container owning one captured frame's raw bytes.
///
/// A buffer belongs to exactly one place at a time: the pool free-list, the
/// frame queue, or a loop-local slot. Move semantics enforce this, so the
/// bytes need no synchronization once a thread holds the buffer.
pub struct FrameBuffer {
    data: Vec<u8>,
}

impl FrameBuffer {
    pub fn with_size(size: usize) -> Self {
        Self {
            data: vec![0u8; size],
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
