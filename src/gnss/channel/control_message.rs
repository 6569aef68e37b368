
use serde::{Serialize, Deserialize};

/// What a channel asks of the surrounding receiver.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
	RequestSatellite,
	TrackingStarted,
	TrackingStopped,
}

impl ControlAction {

	/// Wire code carried on the dispatch queue.
	pub fn code(self) -> u32 {
		match self {
			ControlAction::RequestSatellite => 0,
			ControlAction::TrackingStarted  => 1,
			ControlAction::TrackingStopped  => 2,
		}
	}

}

/// Control token pushed onto the dispatch queue on channel transitions.
/// Opaque to the state machine; the receiver's dispatch loop interprets it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ControlMessage {
	pub who:u32,
	pub what:ControlAction,
}

impl ControlMessage {

	pub fn queue_message(who:u32, what:ControlAction) -> Self { Self{ who, what } }

}

/// Sink for channel control tokens. The host supplies the transport; a
/// channel with no queue bound simply suppresses its pushes.
pub trait MessageQueue {
	fn handle(&mut self, msg:ControlMessage);
}

impl MessageQueue for std::sync::mpsc::Sender<ControlMessage> {
	fn handle(&mut self, msg:ControlMessage) {
		// A receiver that hung up looks the same as a host that stopped
		// listening; the token is dropped either way
		let _ = self.send(msg);
	}
}
