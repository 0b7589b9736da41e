//! Event aggregator for loosely coupled viewmodels.
//!
//! The runtime counterpart of the generation model's publish hooks: a
//! generated property setter publishes an event here, and any registered
//! subscriber of that event type receives it. Single-threaded, like the UI
//! thread the viewmodels live on.

use std::{
    any::{Any, TypeId},
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

///
/// Subscriber
///
/// Receives events of one type from the aggregator. A viewmodel implements
/// this once per event type it cares about.
///

pub trait Subscriber<E> {
    fn handle(&self, event: &E);
}

type HandlerFn = dyn Fn(&dyn Any);

///
/// EventAggregator
///
/// Type-keyed publish/subscribe hub. Subscribers are held by `Rc`, so the
/// aggregator keeps them alive for as long as it does. A handler may publish
/// or register in turn; a registration made during a publish does not see
/// the in-flight event.
///

#[derive(Default)]
pub struct EventAggregator {
    handlers: RefCell<HashMap<TypeId, Vec<Rc<HandlerFn>>>>,
}

impl EventAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for events of type `E`.
    pub fn register_subscriber<E, S>(&self, subscriber: &Rc<S>)
    where
        E: 'static,
        S: Subscriber<E> + 'static,
    {
        let subscriber = Rc::clone(subscriber);
        let handler: Rc<HandlerFn> = Rc::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                subscriber.handle(event);
            }
        });

        self.handlers
            .borrow_mut()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(handler);
    }

    /// Publishes an event to every subscriber registered for its type, in
    /// registration order. No subscribers is not an error.
    pub fn publish<E: 'static>(&self, event: &E) {
        // Snapshot the handler list so a handler may publish in turn.
        let handlers = self.handlers.borrow().get(&TypeId::of::<E>()).cloned();

        if let Some(handlers) = handlers {
            for handler in &handlers {
                handler(event);
            }
        }
    }

    /// Number of registered handlers for events of type `E`.
    #[must_use]
    pub fn subscriber_count<E: 'static>(&self) -> usize {
        self.handlers
            .borrow()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct EmployeeSavedEvent {
        employee_id: u32,
        first_name: String,
    }

    struct EmployeeSelectedEvent {
        employee_id: u32,
    }

    #[derive(Default)]
    struct NavigationViewModel {
        saved_seen: Cell<u32>,
        selected_seen: Cell<u32>,
        last_employee_id: Cell<u32>,
        last_first_name: RefCell<String>,
    }

    impl Subscriber<EmployeeSavedEvent> for NavigationViewModel {
        fn handle(&self, event: &EmployeeSavedEvent) {
            self.saved_seen.set(self.saved_seen.get() + 1);
            self.last_employee_id.set(event.employee_id);
            self.last_first_name.replace(event.first_name.clone());
        }
    }

    impl Subscriber<EmployeeSelectedEvent> for NavigationViewModel {
        fn handle(&self, event: &EmployeeSelectedEvent) {
            self.selected_seen.set(event.employee_id);
        }
    }

    #[test]
    fn publish_reaches_registered_subscribers() {
        let aggregator = EventAggregator::new();
        let viewmodel = Rc::new(NavigationViewModel::default());
        aggregator.register_subscriber::<EmployeeSavedEvent, _>(&viewmodel);

        aggregator.publish(&EmployeeSavedEvent {
            employee_id: 7,
            first_name: "Julia".to_string(),
        });

        assert_eq!(viewmodel.saved_seen.get(), 1);
        assert_eq!(viewmodel.last_employee_id.get(), 7);
        assert_eq!(*viewmodel.last_first_name.borrow(), "Julia");
    }

    #[test]
    fn events_are_routed_by_type() {
        let aggregator = EventAggregator::new();
        let viewmodel = Rc::new(NavigationViewModel::default());
        aggregator.register_subscriber::<EmployeeSavedEvent, _>(&viewmodel);
        aggregator.register_subscriber::<EmployeeSelectedEvent, _>(&viewmodel);

        aggregator.publish(&EmployeeSelectedEvent { employee_id: 42 });

        assert_eq!(viewmodel.saved_seen.get(), 0);
        assert_eq!(viewmodel.selected_seen.get(), 42);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let aggregator = EventAggregator::new();

        aggregator.publish(&EmployeeSelectedEvent { employee_id: 1 });

        assert_eq!(aggregator.subscriber_count::<EmployeeSelectedEvent>(), 0);
    }

    #[test]
    fn subscribers_receive_in_registration_order() {
        let aggregator = EventAggregator::new();
        let first = Rc::new(NavigationViewModel::default());
        let second = Rc::new(NavigationViewModel::default());
        aggregator.register_subscriber::<EmployeeSavedEvent, _>(&first);
        aggregator.register_subscriber::<EmployeeSavedEvent, _>(&second);

        aggregator.publish(&EmployeeSavedEvent {
            employee_id: 1,
            first_name: "Ada".to_string(),
        });

        assert_eq!(aggregator.subscriber_count::<EmployeeSavedEvent>(), 2);
        assert_eq!(first.saved_seen.get(), 1);
        assert_eq!(second.saved_seen.get(), 1);
    }
}
