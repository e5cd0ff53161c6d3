// At most one calculate request in flight. Held in a `use_mut_ref` so the
// check is synchronous; the reducer's `submitting` flag lags one render.
#[derive(Default, Debug, Clone)]
pub struct SubmitGate {
    held: bool,
}

impl SubmitGate {
    /// Returns false when a submission already holds the gate.
    pub fn try_acquire(&mut self) -> bool {
        if self.held {
            return false;
        }
        self.held = true;
        true
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Releases the gate whatever the outcome, passing it through.
    pub fn finish<T, E>(&mut self, outcome: Result<T, E>) -> Result<T, E> {
        self.release();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn second_acquire_is_refused() {
        let mut g = SubmitGate::default();
        assert!(g.try_acquire());
        assert!(!g.try_acquire());
        assert!(g.is_held());
    }

    #[test]
    fn success_releases() {
        let mut g = SubmitGate::default();
        assert!(g.try_acquire());
        let out: Result<u32, String> = g.finish(Ok(3));
        assert_eq!(out, Ok(3));
        assert!(!g.is_held());
        assert!(g.try_acquire());
    }

    #[test]
    fn error_releases() {
        let mut g = SubmitGate::default();
        assert!(g.try_acquire());
        let out: Result<u32, String> = g.finish(Err("status 502".into()));
        assert_eq!(out, Err("status 502".to_string()));
        assert!(!g.is_held());
        assert!(g.try_acquire());
    }
}
