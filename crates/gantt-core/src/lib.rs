// File: crates/gantt-core/src/lib.rs
// Summary: Core library entry point; exports the task/chart model, chart parameters and transport.

pub mod axis;
pub mod category;
pub mod chart;
pub mod color;
pub mod config;
pub mod date;
pub mod error;
pub mod params;
pub mod task;
pub mod transport;
pub mod types;

pub use axis::DaySeries;
pub use category::Category;
pub use chart::Chart;
pub use color::normalize_color;
pub use config::TransportConfig;
pub use date::{as_date, DateInput};
pub use error::{GanttError, Result, TransportError};
pub use params::ChartParams;
pub use task::{Dependency, IntoTask, Task, TaskBuilder};
pub use transport::{build_url, ChartClient, ChartImage, HttpTransport, ReqwestTransport};
