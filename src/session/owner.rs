use std::fmt::Debug;
use tracing::debug;

/// Holds at most one owner of an exclusive UI resource (an open menu, an open dropdown).
///
/// Acquiring displaces the previous owner; every closing path goes through
/// `release` or `release_if`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusiveOwner<T> {
    resource: &'static str,
    current: Option<T>,
}

impl<T: Clone + PartialEq + Debug> ExclusiveOwner<T> {
    pub fn new(resource: &'static str) -> Self {
        Self {
            resource,
            current: None,
        }
    }

    /// Makes `owner` the holder and returns the displaced holder, if any.
    pub fn acquire(&mut self, owner: T) -> Option<T> {
        let previous = self.current.replace(owner);
        debug!(resource = self.resource, owner = ?self.current, displaced = ?previous, "acquired");
        previous.filter(|p| Some(p) != self.current.as_ref())
    }

    pub fn release(&mut self) -> Option<T> {
        let released = self.current.take();
        if released.is_some() {
            debug!(resource = self.resource, owner = ?released, "released");
        }
        released
    }

    /// Releases only if `owner` is the current holder.
    pub fn release_if(&mut self, owner: &T) -> bool {
        if self.is_held_by(owner) {
            self.release();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_held_by(&self, owner: &T) -> bool {
        self.current.as_ref() == Some(owner)
    }

    pub fn is_free(&self) -> bool {
        self.current.is_none()
    }
}
