pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod templates;

pub use error::GateError;
pub use router::{GateState, gate_router};
