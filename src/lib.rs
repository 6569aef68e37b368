
use thiserror::Error;

pub mod gnss;
pub mod utils;

/// Error type shared by the processing cores in this crate.
///
/// The string payloads are static descriptions, not formatted data; anything
/// dynamic worth reporting (channel IDs, PRNs) goes through the `log` facade
/// at the point of failure instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GnssRxErr {
	/// A field descriptor addressed bits outside the data block or declared
	/// a width above 64 bits. This is a fault in the field catalogue, not a
	/// runtime protocol condition.
	#[error("protocol layout fault: {0}")]
	ProtocolLayout(&'static str),
	/// A state entry action ran without the capability provider it drives.
	#[error("missing capability: {0}")]
	MissingCapability(&'static str),
	#[error("invalid telemetry data: {0}")]
	InvalidTelemetryData(&'static str),
	#[error("{0}")]
	Other(&'static str),
}
