use crossbeam::queue::SegQueue;

/// A lock-free pool of reusable row buffers.
///
/// A producer leases a buffer, formats one SQL value tuple into it, and hands
/// ownership to the queue; the flush worker releases the buffer back here
/// after copying it into the batch. Ownership transfer through the channel is
/// what guarantees a buffer is never reclaimed while still being read.
#[derive(Debug, Default)]
pub struct BufferPool {
    buffers: SegQueue<Vec<u8>>,
}

impl BufferPool {
    /// Buffers are recycled up to this pool size; beyond it they are dropped.
    const MAX_POOLED: usize = 4096;
    const BUFFER_CAPACITY: usize = 256;

    pub fn new() -> BufferPool {
        BufferPool { buffers: SegQueue::new() }
    }

    #[inline]
    pub fn lease(&self) -> Vec<u8> {
        self.buffers.pop().unwrap_or_else(|| Vec::with_capacity(Self::BUFFER_CAPACITY))
    }

    #[inline]
    pub fn release(&self, mut buffer: Vec<u8>) {
        if self.buffers.len() < Self::MAX_POOLED {
            buffer.clear();
            self.buffers.push(buffer);
        }
    }

    #[inline]
    pub fn pooled(&self) -> usize {
        self.buffers.len()
    }
}
