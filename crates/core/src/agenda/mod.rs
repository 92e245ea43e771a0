//! Agenda aggregation: ports, merge, cache, and the orchestrating service

pub mod cache;
pub mod merge;
pub mod ports;
pub mod service;

pub use cache::AgendaCache;
pub use merge::build_agenda;
pub use ports::RecordSource;
pub use service::AgendaService;
