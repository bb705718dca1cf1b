use std::cell::RefCell;
use std::rc::Rc;

type Handler<T> = Rc<dyn Fn(&T)>;

/// A multicast event. Every subscribed handler is called, in subscription
/// order, each time the event is emitted. Lives on the UI thread.
///
/// ```
/// use rotary::event::Event;
///
/// let confirmed = Event::<u8>::new();
/// confirmed.subscribe(|digit| println!("dialed {digit}"));
/// confirmed.emit(&7);
/// ```
pub struct Event<T> {
    handlers: RefCell<Vec<Handler<T>>>,
}

impl<T> Default for Event<T> {
    fn default() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Event<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(&T) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    /// Blocks until every handler has run. Handlers subscribed while the
    /// event is being emitted are first called on the next emit.
    pub fn emit(&self, value: &T) {
        let snapshot = self.handlers.borrow().clone();
        for handler in snapshot {
            handler(value);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl<T> std::fmt::Debug for Event<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
