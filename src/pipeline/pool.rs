use std::sync::Mutex;

use super::buffer::FrameBuffer;

/// Bounded free-list recycler for frame buffers.
///
/// Every buffer is sized to the single fixed per-session frame size, so a
/// recycled buffer always matches the next capture. Under sustained
/// backpressure the pool fills up and `release` degrades to freeing buffers,
/// trading allocation churn for a hard memory ceiling on the free-list.
///
/// The pool lock is never held while touching the queue (and vice versa),
/// so the two structures cannot deadlock against each other.
pub struct BufferPool {
    free: Mutex<Vec<FrameBuffer>>,
    frame_size: usize,
    capacity: usize,
}

impl BufferPool {
    pub fn new(frame_size: usize, capacity: usize) -> Self {
        Self {
            free: Mutex::new(Vec::with_capacity(capacity)),
            frame_size,
            capacity,
        }
    }

    /// Pop a recycled buffer, or allocate a fresh one on a pool miss.
    ///
    /// Allocation failure aborts the process: buffers are on the critical
    /// path and there is no useful recovery from memory exhaustion here.
    pub fn acquire(&self) -> FrameBuffer {
        let mut free = match self.free.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        free.pop()
            .unwrap_or_else(|| FrameBuffer::with_size(self.frame_size))
    }

    /// Return a buffer to the free-list, or drop it if the list is full.
    pub fn release(&self, buffer: FrameBuffer) {
        let mut free = match self.free.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if free.len() < self.capacity {
            free.push(buffer);
        }
        // At capacity the buffer falls out of scope and its memory is freed.
    }

    /// Current free-list size, for diagnostics.
    pub fn occupancy(&self) -> usize {
        match self.free.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn frame_size(&self) -> usize {
        self.frame_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_acquire_allocates_fixed_size() {
        let pool = BufferPool::new(64, 2);
        assert_eq!(pool.frame_size(), 64);
        let buffer = pool.acquire();
        assert_eq!(buffer.len(), 64);
        assert_eq!(pool.occupancy(), 0);
    }

    #[test]
    fn test_release_recycles_buffer() {
        let pool = BufferPool::new(16, 2);
        let mut buffer = pool.acquire();
        buffer.as_mut_slice()[0] = 0xAB;
        pool.release(buffer);
        assert_eq!(pool.occupancy(), 1);

        // The recycled buffer comes back as-is, contents included.
        let buffer = pool.acquire();
        assert_eq!(buffer.as_slice()[0], 0xAB);
        assert_eq!(pool.occupancy(), 0);
    }

    #[test]
    fn test_occupancy_never_exceeds_capacity() {
        let pool = BufferPool::new(8, 2);
        let bufs: Vec<_> = (0..5).map(|_| pool.acquire()).collect();
        for buf in bufs {
            pool.release(buf);
        }
        assert_eq!(pool.occupancy(), 2);
    }

    #[test]
    fn test_concurrent_acquire_release_respects_capacity() {
        let pool = Arc::new(BufferPool::new(32, 4));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let pool = Arc::clone(&pool);
            handles.push(thread::spawn(move || {
                for _ in 0..200 {
                    let buffer = pool.acquire();
                    assert_eq!(buffer.len(), 32);
                    pool.release(buffer);
                    assert!(pool.occupancy() <= 4);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(pool.occupancy() <= 4);
    }
}
