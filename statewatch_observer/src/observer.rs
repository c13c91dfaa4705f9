use crate::subject::Subject;

/// The capability every subscriber of a [`Subject`] must provide.
///
/// Observers are registered under an `Rc<dyn Observer>` handle; the subject
/// uses the handle's allocation as the observer's identity when detaching.
pub trait Observer {
    /// Called by the subject each time its state has changed.
    ///
    /// The notifying subject is passed by shared reference so the observer can
    /// read the state that triggered the notification. The borrow also means
    /// an observer cannot attach or detach anything mid-notification.
    fn update(&self, subject: &Subject);
}
