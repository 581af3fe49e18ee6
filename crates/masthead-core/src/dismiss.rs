//! Dismiss-on-outside-interaction
//!
//! [`OutsideClick`] owns at most one global click subscription. While armed,
//! every click whose target is not inside the given [`Region`] runs the
//! dismiss callback. Arming replaces the previous subscription, disarming
//! and dropping remove it, so a guard never leaves a listener behind.

/// Handler installed on a [`ClickSource`]
pub type ClickHandler<T> = Box<dyn FnMut(&T)>;

/// A global stream of clicks (the document in a browser)
pub trait ClickSource {
    /// What a click reports as its target
    type Target: 'static;
    /// Token needed to remove a subscription
    type Subscription;

    fn subscribe(&self, handler: ClickHandler<Self::Target>) -> Self::Subscription;

    fn unsubscribe(&self, subscription: Self::Subscription);
}

/// A rendered area that click targets can fall inside of
pub trait Region<T> {
    /// An unmounted region never dismisses anything.
    fn is_mounted(&self) -> bool {
        true
    }

    fn contains(&self, target: &T) -> bool;
}

/// Guard owning the outside-click subscription
pub struct OutsideClick<S: ClickSource> {
    source: S,
    subscription: Option<S::Subscription>,
}

impl<S: ClickSource> OutsideClick<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            subscription: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Start listening. Any previous subscription is removed first.
    pub fn arm<R, F>(&mut self, region: R, mut on_outside: F)
    where
        R: Region<S::Target> + 'static,
        F: FnMut() + 'static,
    {
        self.disarm();

        let handler: ClickHandler<S::Target> = Box::new(move |target| {
            if region.is_mounted() && !region.contains(target) {
                on_outside();
            }
        });
        self.subscription = Some(self.source.subscribe(handler));
    }

    /// Stop listening; no-op when not armed
    pub fn disarm(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.source.unsubscribe(subscription);
        }
    }

    /// Arm while `active`, disarm otherwise
    pub fn sync<R, F>(&mut self, active: bool, region: R, on_outside: F)
    where
        R: Region<S::Target> + 'static,
        F: FnMut() + 'static,
    {
        if active {
            if !self.is_armed() {
                self.arm(region, on_outside);
            }
        } else {
            self.disarm();
        }
    }
}

impl<S: ClickSource> Drop for OutsideClick<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}
