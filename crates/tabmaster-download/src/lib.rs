//! TabMaster Download Queue
//!
//! Downloads are opaque file tokens processed strictly first-in, first-out.

mod queue;

pub use queue::DownloadQueue;
