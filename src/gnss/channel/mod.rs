
use std::sync::{Arc, Mutex};

use log::{debug, info};

use crate::GnssRxErr;

pub mod control_message;

#[cfg(test)]
mod tests;

use self::control_message::{ControlAction, ControlMessage, MessageQueue};

/// Acquisition capability driven by the channel state machine. The search
/// algorithm itself lives with the provider; entering ACQUIRING resets it.
pub trait Acquisition {
	fn reset(&mut self);
}

/// Tracking capability driven by the channel state machine.
pub trait Tracking {
	fn start_tracking(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
	Idle,
	Acquiring,
	Tracking,
	Waiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelEvent {
	StartAcquisition,
	ValidAcquisition,
	FailedAcquisitionRepeat,
	FailedAcquisitionNoRepeat,
	FailedTrackingStandby,
}

/// Lifecycle state machine of one satellite tracking channel.
///
/// Events arrive through `process_event`; entry and exit actions drive the
/// bound acquisition/tracking providers and push control tokens to the
/// dispatch queue. Providers and queue are shared with the receiver and may
/// be replaced mid-lifecycle; the replacement is used at the next entry
/// action. One instance expects serialized calls (see crate-level notes) —
/// the provider handles are `Arc<Mutex<_>>` only so the machine stays `Send`.
pub struct ChannelFsm {
	state: ChannelState,
	channel_id: u32,
	acq: Option<Arc<Mutex<dyn Acquisition + Send>>>,
	trk: Option<Arc<Mutex<dyn Tracking + Send>>>,
	queue: Option<Arc<Mutex<dyn MessageQueue + Send>>>,
}

impl ChannelFsm {

	pub fn new() -> Self {
		ChannelFsm{ state: ChannelState::Idle, channel_id: 0, acq: None, trk: None, queue: None }
	}

	pub fn with_acquisition(acquisition:Arc<Mutex<dyn Acquisition + Send>>) -> Self {
		let mut fsm = Self::new();
		fsm.acq = Some(acquisition);
		fsm
	}

	pub fn state(&self) -> ChannelState { self.state }

	// Capability bindings; each is last-write-wins
	pub fn set_acquisition(&mut self, acquisition:Arc<Mutex<dyn Acquisition + Send>>) { self.acq = Some(acquisition); }
	pub fn set_tracking(&mut self, tracking:Arc<Mutex<dyn Tracking + Send>>) { self.trk = Some(tracking); }
	pub fn set_queue(&mut self, queue:Arc<Mutex<dyn MessageQueue + Send>>) { self.queue = Some(queue); }
	pub fn set_channel(&mut self, channel:u32) { self.channel_id = channel; }

	/// Runs one event through the transition table. Pairs outside the table
	/// are ignored. All entry/exit side effects of the transition complete
	/// before this returns; on error the machine is left in its
	/// pre-transition state with no side effects applied.
	pub fn process_event(&mut self, event:ChannelEvent) -> Result<ChannelState, GnssRxErr> {

		debug!("CH {}: event {:?} in state {:?}", self.channel_id, event, self.state);

		let next = match (self.state, event) {
			(ChannelState::Idle,      ChannelEvent::StartAcquisition)          => ChannelState::Acquiring,
			(ChannelState::Acquiring, ChannelEvent::ValidAcquisition)          => ChannelState::Tracking,
			(ChannelState::Acquiring, ChannelEvent::FailedAcquisitionRepeat)   => ChannelState::Acquiring,
			(ChannelState::Acquiring, ChannelEvent::FailedAcquisitionNoRepeat) => ChannelState::Waiting,
			(ChannelState::Tracking,  ChannelEvent::StartAcquisition)          => ChannelState::Acquiring,
			(ChannelState::Tracking,  ChannelEvent::FailedTrackingStandby)     => ChannelState::Idle,
			(ChannelState::Waiting,   ChannelEvent::StartAcquisition)          => ChannelState::Acquiring,
			_ => {
				debug!("CH {}: event {:?} ignored in state {:?}", self.channel_id, event, self.state);
				return Ok(self.state);
			},
		};

		// The capability the target state's entry action drives must be
		// bound before any exit side effect runs
		match next {
			ChannelState::Acquiring if self.acq.is_none() =>
				return Err(GnssRxErr::MissingCapability("no acquisition provider bound")),
			ChannelState::Tracking if self.trk.is_none() =>
				return Err(GnssRxErr::MissingCapability("no tracking provider bound")),
			_ => {},
		}

		// Exit action of the outgoing state; the push completes before the
		// state changes hands
		let prev = self.state;
		if prev == ChannelState::Tracking {
			self.notify_stop_tracking();
		}

		self.state = next;

		let entered = match next {
			ChannelState::Acquiring => self.start_acquisition(),
			ChannelState::Tracking  => self.start_tracking(),
			ChannelState::Waiting   => { self.request_satellite(); Ok(()) },
			ChannelState::Idle      => Ok(()),
		};
		if let Err(e) = entered {
			self.state = prev;
			return Err(e);
		}

		Ok(self.state)
	}

	// ACQUIRING entry action
	fn start_acquisition(&mut self) -> Result<(), GnssRxErr> {
		let acq = self.acq.as_ref().ok_or(GnssRxErr::MissingCapability("no acquisition provider bound"))?;
		acq.lock().map_err(|_| GnssRxErr::Other("acquisition provider lock poisoned"))?.reset();
		info!("CH {}: start_acquisition", self.channel_id);
		Ok(())
	}

	// TRACKING entry action
	fn start_tracking(&mut self) -> Result<(), GnssRxErr> {
		let trk = self.trk.as_ref().ok_or(GnssRxErr::MissingCapability("no tracking provider bound"))?;
		trk.lock().map_err(|_| GnssRxErr::Other("tracking provider lock poisoned"))?.start_tracking();
		info!("CH {}: start_tracking", self.channel_id);
		self.push_message(ControlAction::TrackingStarted);
		Ok(())
	}

	// WAITING entry action
	fn request_satellite(&mut self) {
		info!("CH {}: requesting a new satellite assignment", self.channel_id);
		self.push_message(ControlAction::RequestSatellite);
	}

	// TRACKING exit action
	fn notify_stop_tracking(&mut self) {
		self.push_message(ControlAction::TrackingStopped);
	}

	fn push_message(&self, what:ControlAction) {
		match &self.queue {
			Some(queue) => match queue.lock() {
				Ok(mut q) => q.handle(ControlMessage::queue_message(self.channel_id, what)),
				Err(_) => debug!("CH {}: dispatch queue lock poisoned, {:?} dropped", self.channel_id, what),
			},
			None => debug!("CH {}: no dispatch queue bound, {:?} suppressed", self.channel_id, what),
		}
	}

}

impl Default for ChannelFsm {
	fn default() -> Self { Self::new() }
}
