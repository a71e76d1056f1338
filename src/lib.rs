//! Upload wizard engine for staged land-for-sale listing submissions.
//!
//! The engine partitions one listing record into ordered steps, gates
//! forward navigation on per-step validation, derives address and density
//! fields through a geographic cascade, stages the validated record behind a
//! confirmation gate, and drives a single-flight asynchronous submission
//! with a cancelable post-success redirect. Rendering, routing, and the
//! backend itself are host concerns reached through traits
//! ([`wizard::ListingsGateway`], [`wizard::NavigationSink`],
//! [`reference::ProvinceReference`]).

pub mod config;
pub mod error;
pub mod reference;
pub mod telemetry;
pub mod wizard;
