use crossbeam::channel::{Receiver, Sender, bounded};

/// One bounded queue of pre-formatted SQL value tuples.
#[derive(Debug, Clone)]
pub struct FlushChannel {
    pub sender: Sender<Vec<u8>>,
    pub receiver: Receiver<Vec<u8>>,
    pub capacity: usize,
}

impl FlushChannel {
    pub fn new(capacity: usize) -> FlushChannel {
        let (sender, receiver) = bounded(capacity);
        FlushChannel { sender, receiver, capacity }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}
