// Event listener registry
//
// Controllers subscribe to the kinds of host events they care about and keep
// the returned id so they can unsubscribe. The host only routes an event to
// current subscribers, so an unsubscribed controller costs nothing at idle.

use super::document::Point;

/// Events the host can deliver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// The document scroll position changed
    Scroll,
    /// The viewport was resized
    Resize { width: f64, height: f64 },
    /// Mouse button pressed at a position
    PointerDown(Point),
    /// Touch began at a position
    TouchStart(Point),
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            HostEvent::Scroll => EventKind::Scroll,
            HostEvent::Resize { .. } => EventKind::Resize,
            HostEvent::PointerDown(_) => EventKind::PointerDown,
            HostEvent::TouchStart(_) => EventKind::TouchStart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    PointerDown,
    TouchStart,
}

/// Subscription token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Active subscriptions, in subscription order
#[derive(Debug)]
pub struct Listeners<T> {
    next_id: u64,
    active: Vec<(ListenerId, EventKind, T)>,
}

impl<T: Copy + PartialEq> Listeners<T> {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            active: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, kind: EventKind, owner: T) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push((id, kind, owner));
        id
    }

    /// Returns false if the id was not subscribed
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|(l, _, _)| *l != id);
        self.active.len() != before
    }

    /// Owners subscribed to `kind`, in subscription order
    ///
    /// Returned by value so the caller can mutate the registry while
    /// dispatching.
    pub fn subscribers(&self, kind: EventKind) -> Vec<T> {
        self.active
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, owner)| *owner)
            .collect()
    }

    #[cfg(test)]
    pub fn count(&self, kind: EventKind) -> usize {
        self.active.iter().filter(|(_, k, _)| *k == kind).count()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl<T: Copy + PartialEq> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_are_filtered_by_kind() {
        let mut listeners = Listeners::new();
        listeners.subscribe(EventKind::Scroll, 'a');
        listeners.subscribe(EventKind::PointerDown, 'b');
        listeners.subscribe(EventKind::Scroll, 'c');

        assert_eq!(listeners.subscribers(EventKind::Scroll), vec!['a', 'c']);
        assert_eq!(listeners.count(EventKind::PointerDown), 1);
        assert!(listeners.subscribers(EventKind::Resize).is_empty());
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut listeners = Listeners::new();
        let id = listeners.subscribe(EventKind::TouchStart, 1u8);
        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        assert!(listeners.is_empty());
    }

    #[test]
    fn event_kind_matches_variant() {
        let p = Point::new(1.0, 2.0);
        assert_eq!(HostEvent::PointerDown(p).kind(), EventKind::PointerDown);
        assert_eq!(HostEvent::TouchStart(p).kind(), EventKind::TouchStart);
        assert_eq!(
            HostEvent::Resize {
                width: 1.0,
                height: 1.0
            }
            .kind(),
            EventKind::Resize
        );
        assert_eq!(HostEvent::Scroll.kind(), EventKind::Scroll);
    }
}
