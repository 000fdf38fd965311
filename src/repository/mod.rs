//! Storage for stations, readings and AQI records.
//!
//! [`AirRepository`] is the seam the operations layer works against.
//! [`FileRepository`] keeps one JSON file per entity under a data directory;
//! [`InMemoryRepository`] backs tests and dry runs.

mod air_repository;
mod file;
mod in_memory;

pub use air_repository::AirRepository;
pub use file::FileRepository;
pub use in_memory::InMemoryRepository;
