/// Runs the wrapped closure exactly once when dropped, including during unwinding.
pub struct ScopeGuard<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> ScopeGuard<F> {
    pub fn new(f: F) -> Self {
        Self(Some(f))
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn runs_on_drop() {
        let calls = AtomicUsize::new(0);
        {
            let _guard = ScopeGuard::new(|| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(calls.load(Ordering::SeqCst), 0);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn runs_when_scope_panics() {
        let calls = AtomicUsize::new(0);
        let result = std::panic::catch_unwind(|| {
            let _guard = ScopeGuard::new(|| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
            panic!("serving loop crashed");
        });
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
