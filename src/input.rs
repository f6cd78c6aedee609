//! Input events and their bounded channel for `no_std` environments.
//!
//! The platform's input poller (pin reader or serial console) pushes one
//! event per poll; the renderer drains them at the start of each frame.
//! The queue is guarded by `critical-section`, so a poller running in an
//! interrupt handler can feed the render loop safely.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::scenario::ScenarioId;

/// Which input surface selects scenarios.
///
/// Chosen once at startup; events of the other kind are ignored at
/// runtime instead of being compiled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Four debounced selection switches
    #[default]
    Switches,
    /// Serial console bytes, for bench testing without the switch panel
    Console,
}

/// One raw input observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Current state of the four selection switches, `true` = asserted
    Switches([bool; 4]),
    /// One byte read from the console
    Console(u8),
}

impl InputEvent {
    /// Decode this event under the configured input mode.
    ///
    /// Events from the non-selected surface, and console bytes that name
    /// no scenario, yield `None`.
    pub fn scenario(self, mode: InputMode) -> Option<ScenarioId> {
        match (mode, self) {
            (InputMode::Switches, Self::Switches(switches)) => {
                Some(ScenarioId::from_switches(switches))
            }
            (InputMode::Console, Self::Console(byte)) => ScenarioId::from_console_byte(byte),
            _ => None,
        }
    }
}

/// Error returned when pushing into a full input channel.
///
/// Carries the rejected event so the caller can retry or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOverflow(pub InputEvent);

/// A bounded, interrupt-safe queue of input events.
///
/// Backed by a fixed-size `heapless::Deque` behind a critical section.
pub struct InputChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<InputEvent, SIZE>>>,
}

impl<const SIZE: usize> InputChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for the input poller.
    pub const fn sender(&self) -> InputSender<'_, SIZE> {
        InputSender { channel: self }
    }

    /// Get a receiver handle for the renderer.
    pub const fn receiver(&self) -> InputReceiver<'_, SIZE> {
        InputReceiver { channel: self }
    }

    fn try_send(&self, event: InputEvent) -> Result<(), InputOverflow> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(InputOverflow)
        })
    }

    fn try_receive(&self) -> Option<InputEvent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for InputChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sender handle for an [`InputChannel`].
#[derive(Clone, Copy)]
pub struct InputSender<'a, const SIZE: usize> {
    channel: &'a InputChannel<SIZE>,
}

impl<const SIZE: usize> InputSender<'_, SIZE> {
    /// Push one input event; fails with the event if the queue is full.
    pub fn try_send(&self, event: InputEvent) -> Result<(), InputOverflow> {
        self.channel.try_send(event)
    }
}

/// Receiver handle for an [`InputChannel`].
#[derive(Clone, Copy)]
pub struct InputReceiver<'a, const SIZE: usize> {
    channel: &'a InputChannel<SIZE>,
}

impl<const SIZE: usize> InputReceiver<'_, SIZE> {
    /// Pop the oldest pending event, if any.
    pub fn try_receive(&self) -> Option<InputEvent> {
        self.channel.try_receive()
    }
}
