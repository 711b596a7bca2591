//! Normalized resource readings and their history.
//!
//! Raw counters from a [`MetricSource`](crate::collector::MetricSource) are
//! turned into [`Percent`] and [`ByteCount`] values grouped into readings,
//! all owned by one [`SystemStatus`].

mod history;
mod metric;
mod reading;
mod status;

pub use history::ResourceHistory;
pub use metric::{ByteCount, Percent};
pub use reading::{CpuReading, LoadAverage, MemoryReading, ProcessCount, Uptime};
pub use status::SystemStatus;
