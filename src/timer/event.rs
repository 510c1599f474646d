//! Timer event stream and observer seam.
//!
//! The countdown produces one stream of events; display renderers and
//! notifiers subscribe independently instead of being wired straight to
//! the tick source.

use crate::timer::period::{Period, Tick};

/// An event produced by the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One second elapsed within a period.
    Tick {
        /// Period the counter belongs to.
        period: Period,
        /// Seconds left in that period.
        seconds_remaining: u32,
    },
    /// A period finished; the next one starts counting immediately.
    PeriodEnded {
        /// The period that just ran out.
        finished: Period,
        /// The period now counting down.
        next: Period,
        /// Full length of the period now counting down.
        next_seconds: u32,
    },
}

impl TimerEvent {
    /// Translate a tick result into the event it represents.
    #[must_use]
    pub const fn from_tick(tick: Tick) -> Self {
        match tick.ended {
            Some(finished) => Self::PeriodEnded {
                finished,
                next: tick.period,
                next_seconds: tick.seconds_remaining,
            },
            None => Self::Tick {
                period: tick.period,
                seconds_remaining: tick.seconds_remaining,
            },
        }
    }
}

/// A subscriber to timer events.
pub trait TimerObserver {
    /// React to one event. Called once per event, in subscription order.
    fn on_event(&mut self, event: &TimerEvent);
}

/// Fans each event out to every subscribed observer.
#[derive(Default)]
pub struct EventBus {
    observers: Vec<Box<dyn TimerObserver>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn TimerObserver>) {
        self.observers.push(observer);
    }

    /// Deliver one event to every observer.
    pub fn publish(&mut self, event: &TimerEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }

    /// Number of subscribed observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Check if no observers are subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::period::Tick;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        id: usize,
        log: Rc<RefCell<Vec<(usize, TimerEvent)>>>,
    }

    impl TimerObserver for Recorder {
        fn on_event(&mut self, event: &TimerEvent) {
            self.log.borrow_mut().push((self.id, *event));
        }
    }

    #[test]
    fn test_from_tick_plain() {
        let event = TimerEvent::from_tick(Tick {
            period: Period::Focus,
            seconds_remaining: 42,
            ended: None,
        });
        assert_eq!(
            event,
            TimerEvent::Tick {
                period: Period::Focus,
                seconds_remaining: 42
            }
        );
    }

    #[test]
    fn test_from_tick_boundary() {
        let event = TimerEvent::from_tick(Tick {
            period: Period::Break,
            seconds_remaining: 20,
            ended: Some(Period::Focus),
        });
        assert_eq!(
            event,
            TimerEvent::PeriodEnded {
                finished: Period::Focus,
                next: Period::Break,
                next_seconds: 20
            }
        );
    }

    #[test]
    fn test_every_observer_sees_every_event_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();
        bus.subscribe(Box::new(Recorder {
            id: 0,
            log: Rc::clone(&log),
        }));
        bus.subscribe(Box::new(Recorder {
            id: 1,
            log: Rc::clone(&log),
        }));
        assert_eq!(bus.len(), 2);

        let tick = TimerEvent::Tick {
            period: Period::Focus,
            seconds_remaining: 9,
        };
        let ended = TimerEvent::PeriodEnded {
            finished: Period::Focus,
            next: Period::Break,
            next_seconds: 20,
        };
        bus.publish(&tick);
        bus.publish(&ended);

        let log = log.borrow();
        assert_eq!(
            *log,
            vec![(0, tick), (1, tick), (0, ended), (1, ended)]
        );
    }

    #[test]
    fn test_empty_bus_publish_is_noop() {
        let mut bus = EventBus::new();
        assert!(bus.is_empty());
        bus.publish(&TimerEvent::Tick {
            period: Period::Break,
            seconds_remaining: 1,
        });
    }
}
