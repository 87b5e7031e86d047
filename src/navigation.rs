//! Navigation Containment
//!
//! Locks the main window to the origin of the configured target URL.

use parking_lot::RwLock;
use std::sync::Arc;
use url::Url;

/// Shared handle on the currently allowed target.
///
/// Cloned into the window's navigation hook at build time; the controller
/// retargets it in place when the configured URL changes.
#[derive(Clone, Default)]
pub struct NavigationPolicy {
    allowed: Arc<RwLock<Option<Url>>>,
}

impl NavigationPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the allowed target
    pub fn allow(&self, target: Url) {
        *self.allowed.write() = Some(target);
    }

    /// Currently allowed target, if any
    pub fn allowed(&self) -> Option<Url> {
        self.allowed.read().clone()
    }

    /// Whether a navigation to `candidate` may proceed.
    ///
    /// `data:` documents are always permitted (the placeholder page is one);
    /// anything else must share the allowed target's origin. With no target
    /// configured, only `data:` documents load.
    pub fn permits(&self, candidate: &Url) -> bool {
        if candidate.scheme() == "data" {
            return true;
        }

        match &*self.allowed.read() {
            Some(target) => target.origin() == candidate.origin(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_no_target_blocks_everything_but_data() {
        let policy = NavigationPolicy::new();
        assert!(!policy.permits(&url("https://cloud.servitechapp.com/myapp")));
        assert!(policy.permits(&url("data:text/html,placeholder")));
    }

    #[test]
    fn test_same_origin_allowed() {
        let policy = NavigationPolicy::new();
        policy.allow(url("https://cloud.servitechapp.com/myapp"));

        assert!(policy.permits(&url("https://cloud.servitechapp.com/myapp")));
        assert!(policy.permits(&url("https://cloud.servitechapp.com/myapp/login")));
    }

    #[test]
    fn test_cross_origin_blocked() {
        let policy = NavigationPolicy::new();
        policy.allow(url("https://cloud.servitechapp.com/myapp"));

        assert!(!policy.permits(&url("https://evil.example/")));
        assert!(!policy.permits(&url("http://cloud.servitechapp.com/myapp")));
        assert!(!policy.permits(&url("https://cloud.servitechapp.com.evil.example/")));
    }

    #[test]
    fn test_retarget_moves_the_lock() {
        let policy = NavigationPolicy::new();
        policy.allow(url("https://cloud.servitechapp.com/a"));
        policy.allow(url("https://cloud.servitechapp.com/b"));

        assert_eq!(
            policy.allowed(),
            Some(url("https://cloud.servitechapp.com/b"))
        );
        assert!(policy.permits(&url("https://cloud.servitechapp.com/b")));
    }
}
