
use std::sync::{Arc, Mutex};
use std::sync::mpsc;

use crate::GnssRxErr;

use super::{Acquisition, ChannelEvent, ChannelFsm, ChannelState, Tracking};
use super::control_message::{ControlAction, ControlMessage, MessageQueue};

#[derive(Default)]
struct MockAcq {
	pub resets:usize,
}

impl Acquisition for MockAcq {
	fn reset(&mut self) { self.resets += 1; }
}

#[derive(Default)]
struct MockTrk {
	pub starts:usize,
}

impl Tracking for MockTrk {
	fn start_tracking(&mut self) { self.starts += 1; }
}

#[derive(Default)]
struct MockQueue {
	pub messages:Vec<ControlMessage>,
}

impl MessageQueue for MockQueue {
	fn handle(&mut self, msg:ControlMessage) { self.messages.push(msg); }
}

fn bound_fsm() -> (ChannelFsm, Arc<Mutex<MockAcq>>, Arc<Mutex<MockTrk>>, Arc<Mutex<MockQueue>>) {
	let acq = Arc::new(Mutex::new(MockAcq::default()));
	let trk = Arc::new(Mutex::new(MockTrk::default()));
	let queue = Arc::new(Mutex::new(MockQueue::default()));

	let mut fsm = ChannelFsm::new();
	fsm.set_acquisition(acq.clone());
	fsm.set_tracking(trk.clone());
	fsm.set_queue(queue.clone());
	fsm.set_channel(7);

	(fsm, acq, trk, queue)
}

#[test]
fn starts_in_idle() {
	assert_eq!(ChannelFsm::new().state(), ChannelState::Idle);
}

#[test]
fn start_acquisition_resets_provider() {
	let (mut fsm, acq, _trk, queue) = bound_fsm();

	assert_eq!(fsm.process_event(ChannelEvent::StartAcquisition).unwrap(), ChannelState::Acquiring);
	assert_eq!(acq.lock().unwrap().resets, 1);
	assert!(queue.lock().unwrap().messages.is_empty());
}

#[test]
fn valid_acquisition_starts_tracking_and_notifies() {
	let (mut fsm, _acq, trk, queue) = bound_fsm();

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::ValidAcquisition).unwrap(), ChannelState::Tracking);

	assert_eq!(trk.lock().unwrap().starts, 1);
	let messages = &queue.lock().unwrap().messages;
	assert_eq!(messages.len(), 1);
	assert_eq!(messages[0].who, 7);
	assert_eq!(messages[0].what, ControlAction::TrackingStarted);
	assert_eq!(messages[0].what.code(), 1);
}

#[test]
fn failed_tracking_standby_goes_idle_and_notifies_stop() {
	let (mut fsm, _acq, _trk, queue) = bound_fsm();

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	fsm.process_event(ChannelEvent::ValidAcquisition).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::FailedTrackingStandby).unwrap(), ChannelState::Idle);

	let messages = &queue.lock().unwrap().messages;
	assert_eq!(messages.last().unwrap().who, 7);
	assert_eq!(messages.last().unwrap().what, ControlAction::TrackingStopped);
	assert_eq!(messages.last().unwrap().what.code(), 2);
}

#[test]
fn failed_acquisition_no_repeat_requests_new_satellite() {
	let (mut fsm, _acq, _trk, queue) = bound_fsm();

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::FailedAcquisitionNoRepeat).unwrap(), ChannelState::Waiting);

	let messages = &queue.lock().unwrap().messages;
	assert_eq!(messages.len(), 1);
	assert_eq!(messages[0].who, 7);
	assert_eq!(messages[0].what, ControlAction::RequestSatellite);
	assert_eq!(messages[0].what.code(), 0);
}

#[test]
fn failed_acquisition_repeat_reruns_entry_action() {
	let (mut fsm, acq, _trk, _queue) = bound_fsm();

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::FailedAcquisitionRepeat).unwrap(), ChannelState::Acquiring);
	assert_eq!(fsm.process_event(ChannelEvent::FailedAcquisitionRepeat).unwrap(), ChannelState::Acquiring);

	assert_eq!(acq.lock().unwrap().resets, 3);
}

#[test]
fn reacquisition_from_tracking_stops_then_resets() {
	let (mut fsm, acq, _trk, queue) = bound_fsm();

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	fsm.process_event(ChannelEvent::ValidAcquisition).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::StartAcquisition).unwrap(), ChannelState::Acquiring);

	// exit action of TRACKING fires, then the ACQUIRING entry action
	assert_eq!(queue.lock().unwrap().messages.last().unwrap().what, ControlAction::TrackingStopped);
	assert_eq!(acq.lock().unwrap().resets, 2);
}

#[test]
fn events_outside_the_table_are_ignored() {
	let (mut fsm, acq, trk, queue) = bound_fsm();

	// IDLE reacts to start_acquisition only
	for event in [ChannelEvent::ValidAcquisition, ChannelEvent::FailedAcquisitionRepeat,
	              ChannelEvent::FailedAcquisitionNoRepeat, ChannelEvent::FailedTrackingStandby] {
		assert_eq!(fsm.process_event(event).unwrap(), ChannelState::Idle);
	}
	assert_eq!(acq.lock().unwrap().resets, 0);
	assert_eq!(trk.lock().unwrap().starts, 0);
	assert!(queue.lock().unwrap().messages.is_empty());

	// WAITING reacts to start_acquisition only
	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	fsm.process_event(ChannelEvent::FailedAcquisitionNoRepeat).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::FailedTrackingStandby).unwrap(), ChannelState::Waiting);
	assert_eq!(fsm.process_event(ChannelEvent::ValidAcquisition).unwrap(), ChannelState::Waiting);
}

#[test]
fn missing_acquisition_fails_loudly_without_transition() {
	let mut fsm = ChannelFsm::new();

	assert_eq!(fsm.process_event(ChannelEvent::StartAcquisition),
	           Err(GnssRxErr::MissingCapability("no acquisition provider bound")));
	assert_eq!(fsm.state(), ChannelState::Idle);
}

#[test]
fn missing_tracking_fails_loudly_without_transition() {
	let acq = Arc::new(Mutex::new(MockAcq::default()));
	let queue = Arc::new(Mutex::new(MockQueue::default()));

	let mut fsm = ChannelFsm::with_acquisition(acq.clone());
	fsm.set_queue(queue.clone());

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	assert!(matches!(fsm.process_event(ChannelEvent::ValidAcquisition),
	                 Err(GnssRxErr::MissingCapability(_))));
	assert_eq!(fsm.state(), ChannelState::Acquiring);
	// the failed event produced no side effects
	assert!(queue.lock().unwrap().messages.is_empty());
	assert_eq!(acq.lock().unwrap().resets, 1);
}

#[test]
fn unbound_queue_suppresses_pushes_but_transitions() {
	let acq = Arc::new(Mutex::new(MockAcq::default()));
	let trk = Arc::new(Mutex::new(MockTrk::default()));

	let mut fsm = ChannelFsm::new();
	fsm.set_acquisition(acq.clone());
	fsm.set_tracking(trk.clone());

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	fsm.process_event(ChannelEvent::ValidAcquisition).unwrap();
	assert_eq!(fsm.process_event(ChannelEvent::FailedTrackingStandby).unwrap(), ChannelState::Idle);
	assert_eq!(trk.lock().unwrap().starts, 1);
}

#[test]
fn provider_replacement_is_last_write_wins() {
	let (mut fsm, first, _trk, _queue) = bound_fsm();

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	assert_eq!(first.lock().unwrap().resets, 1);

	let second = Arc::new(Mutex::new(MockAcq::default()));
	fsm.set_acquisition(second.clone());
	fsm.process_event(ChannelEvent::FailedAcquisitionRepeat).unwrap();

	assert_eq!(first.lock().unwrap().resets, 1);
	assert_eq!(second.lock().unwrap().resets, 1);
}

#[test]
fn mpsc_sender_works_as_dispatch_queue() {
	let (tx, rx) = mpsc::channel::<ControlMessage>();
	let acq = Arc::new(Mutex::new(MockAcq::default()));
	let trk = Arc::new(Mutex::new(MockTrk::default()));

	let mut fsm = ChannelFsm::new();
	fsm.set_acquisition(acq);
	fsm.set_tracking(trk);
	fsm.set_queue(Arc::new(Mutex::new(tx)));
	fsm.set_channel(3);

	fsm.process_event(ChannelEvent::StartAcquisition).unwrap();
	fsm.process_event(ChannelEvent::ValidAcquisition).unwrap();

	let msg = rx.try_recv().unwrap();
	assert_eq!((msg.who, msg.what.code()), (3, 1));
}
