use std::rc::Rc;

use rand::Rng;

use crate::error::SubjectError;
use crate::observer::Observer;

/// The subject owns a piece of state and an ordered registry of observers
/// that it notifies, synchronously and in attachment order, whenever that
/// state changes.
///
/// Every `Subject` owns its own registry, created fresh in [`Subject::new`] -
/// nothing is shared between subjects.
pub struct Subject {
    /// The observed state. `None` until the first state assignment.
    state: Option<u8>,

    /// Registered observers, in attachment order. Duplicate handles are
    /// permitted and get one registry slot per attachment.
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            state: None,
            observers: Vec::new(),
        }
    }

    /// The current state, or `None` if no state has been assigned yet.
    pub fn state(&self) -> Option<u8> {
        self.state
    }

    /// Number of registry slots currently in use
    /// (duplicate attachments count once per attachment).
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Appends `observer` to the notification registry.
    ///
    /// Attaching the same handle twice registers two slots and the observer
    /// is then notified twice per state change. This mirrors the permissive
    /// list semantics the pattern traditionally demonstrates; deduplicate at
    /// the call site if set semantics are wanted.
    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes the first registry slot holding `observer`
    /// (identity is the `Rc` allocation, compared with [`Rc::ptr_eq`]).
    ///
    /// Fails with [`SubjectError::ObserverNotRegistered`] when the handle is
    /// not currently registered; the registry is left unchanged in that case.
    pub fn detach(
        &mut self,
        observer: &Rc<dyn Observer>,
    ) -> Result<(), SubjectError> {
        let slot = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
            .ok_or(SubjectError::ObserverNotRegistered)?;

        self.observers.remove(slot);

        Ok(())
    }

    /// Invokes [`Observer::update`] on every registered observer,
    /// synchronously, in attachment order.
    ///
    /// The registry is snapshotted before iterating, so the set of notified
    /// observers is fixed at the moment notification begins. (Safe code
    /// cannot mutate the registry mid-notification anyway: `update` only
    /// receives a shared reference to the subject.)
    ///
    /// With an empty registry this performs zero calls and succeeds.
    pub fn notify(&self) {
        let snapshot: Vec<Rc<dyn Observer>> = self.observers.clone();

        for observer in &snapshot {
            observer.update(self);
        }
    }

    /// Assigns a new state, then notifies.
    ///
    /// The state field is fully updated before [`Subject::notify`] runs, so
    /// observers always read the value that triggered them.
    pub fn set_state(&mut self, value: u8) {
        self.state = Some(value);
        self.notify();
    }

    /// The canonical "mutate then notify" business operation: draws a random
    /// state in `0..10` from the provided generator and assigns it via
    /// [`Subject::set_state`]. Returns the drawn state.
    ///
    /// The generator is passed in by the caller, which is what makes seeded,
    /// reproducible demonstration runs possible.
    pub fn do_some_business_logic<R: Rng>(&mut self, rng: &mut R) -> u8 {
        let new_state = rng.gen_range(0..10u8);
        self.set_state(new_state);

        new_state
    }
}


#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Records the subject state it observed on every `update` call.
    #[derive(Default)]
    struct RecordingObserver {
        seen_states: RefCell<Vec<Option<u8>>>,
    }

    impl RecordingObserver {
        fn update_count(&self) -> usize {
            self.seen_states.borrow().len()
        }
    }

    impl Observer for RecordingObserver {
        fn update(&self, subject: &Subject) {
            self.seen_states.borrow_mut().push(subject.state());
        }
    }

    /// Appends its name to a shared sequence on every `update` call,
    /// so tests can assert notification order across observers.
    struct SequenceObserver {
        name: &'static str,
        sequence: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for SequenceObserver {
        fn update(&self, _subject: &Subject) {
            self.sequence.borrow_mut().push(self.name);
        }
    }

    fn recording_observer() -> (Rc<RecordingObserver>, Rc<dyn Observer>) {
        let observer = Rc::new(RecordingObserver::default());
        let handle: Rc<dyn Observer> = observer.clone();

        (observer, handle)
    }

    #[test]
    fn state_is_initially_unset() {
        let subject = Subject::new();

        assert_eq!(subject.state(), None);
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn attach_grows_registry_and_detach_shrinks_it() {
        let mut subject = Subject::new();
        let (_, first) = recording_observer();
        let (_, second) = recording_observer();

        subject.attach(Rc::clone(&first));
        subject.attach(Rc::clone(&second));
        assert_eq!(subject.observer_count(), 2);

        subject.detach(&first).unwrap();
        assert_eq!(subject.observer_count(), 1);

        subject.detach(&second).unwrap();
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn attach_then_detach_round_trips_membership() {
        let mut subject = Subject::new();
        let (observer, handle) = recording_observer();

        subject.attach(Rc::clone(&handle));
        subject.detach(&handle).unwrap();

        assert_eq!(subject.observer_count(), 0);

        // The detached observer no longer receives notifications.
        subject.set_state(5);
        assert_eq!(observer.update_count(), 0);
    }

    #[test]
    fn detaching_an_unregistered_observer_fails_and_preserves_the_registry() {
        let mut subject = Subject::new();
        let (_, registered) = recording_observer();
        let (_, stranger) = recording_observer();

        subject.attach(Rc::clone(&registered));

        let result = subject.detach(&stranger);
        assert!(matches!(
            result,
            Err(SubjectError::ObserverNotRegistered)
        ));
        assert_eq!(subject.observer_count(), 1);
    }

    #[test]
    fn notify_with_no_observers_is_a_no_op() {
        let mut subject = Subject::new();
        subject.notify();

        subject.set_state(3);
        assert_eq!(subject.state(), Some(3));
    }

    #[test]
    fn observers_read_the_already_updated_state() {
        let mut subject = Subject::new();
        let (observer, handle) = recording_observer();

        subject.attach(handle);
        subject.set_state(7);

        assert_eq!(observer.seen_states.borrow().as_slice(), &[Some(7)]);
    }

    #[test]
    fn observers_are_notified_in_attachment_order() {
        let sequence = Rc::new(RefCell::new(Vec::new()));

        let mut subject = Subject::new();
        subject.attach(Rc::new(SequenceObserver {
            name: "first",
            sequence: Rc::clone(&sequence),
        }));
        subject.attach(Rc::new(SequenceObserver {
            name: "second",
            sequence: Rc::clone(&sequence),
        }));

        subject.set_state(1);
        subject.set_state(2);

        assert_eq!(
            sequence.borrow().as_slice(),
            &["first", "second", "first", "second"]
        );
    }

    #[test]
    fn duplicate_attachment_registers_two_slots() {
        let mut subject = Subject::new();
        let (observer, handle) = recording_observer();

        subject.attach(Rc::clone(&handle));
        subject.attach(Rc::clone(&handle));
        assert_eq!(subject.observer_count(), 2);

        subject.set_state(4);
        assert_eq!(observer.update_count(), 2);

        // Detaching removes one slot at a time, first occurrence first.
        subject.detach(&handle).unwrap();
        assert_eq!(subject.observer_count(), 1);

        subject.set_state(4);
        assert_eq!(observer.update_count(), 3);
    }

    #[test]
    fn business_logic_draws_states_below_ten_and_updates_each_observer_once() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut subject = Subject::new();
        let (observer, handle) = recording_observer();
        subject.attach(handle);

        for round in 1..=32 {
            let drawn = subject.do_some_business_logic(&mut rng);

            assert!(drawn < 10);
            assert_eq!(subject.state(), Some(drawn));
            assert_eq!(observer.update_count(), round);
        }
    }
}
