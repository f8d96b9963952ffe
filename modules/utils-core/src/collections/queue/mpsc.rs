mod mpsc_unbounded_queue;

pub use mpsc_unbounded_queue::MpscUnboundedQueue;
