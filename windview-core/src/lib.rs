//! Core library for the `windview` tool.
//!
//! This crate defines:
//! - The weather document model and its strict decoder
//! - The fetcher abstraction and its HTTP implementation
//! - The projection of a record into display strings, and the sink they are published to
//! - Configuration handling
//!
//! It is used by `windview-cli`, but can also drive any other display front end.

pub mod config;
pub mod decode;
pub mod error;
pub mod fetch;
pub mod model;
pub mod pipeline;
pub mod present;
pub mod sink;

pub use config::{Config, DEFAULT_SOURCE_URL};
pub use decode::decode;
pub use error::{DecodeError, FetchError, PipelineError};
pub use fetch::{Fetcher, HttpFetcher};
pub use model::WeatherRecord;
pub use pipeline::WeatherController;
pub use present::{DisplayProjection, project};
pub use sink::{DisplaySink, Labels, RecordingSink};
