// gRPC service wiring for the valuation engine.
// The protobuf-generated code is compiled by build.rs and included from
// OUT_DIR here; the handler implementations live in valuation_service.

pub mod valuation_service;

tonic::include_proto!("valuation");

// Re-export the generated service entry points for the binary and for
// clients built on this crate.
pub use valuation_engine_client::ValuationEngineClient;
pub use valuation_engine_server::{ValuationEngine, ValuationEngineServer};
