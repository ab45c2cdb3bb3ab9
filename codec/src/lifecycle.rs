//! Applying and reverting a seed's effects.

use crate::seed::Seed;

/// Applies and reverts the effects of a seed in a host application.
pub trait SeedLifecycle {
    type Error;

    /// Applies the seed's effects.
    fn enable(&mut self, seed: &Seed) -> Result<(), Self::Error>;

    /// Reverts the seed's effects.
    fn disable(&mut self, seed: &Seed) -> Result<(), Self::Error>;
}

/// Holds the at most one seed currently in effect.
#[derive(Debug)]
pub struct ActiveSeed<H> {
    handler: H,
    current: Option<Seed>,
}

impl<H: SeedLifecycle> ActiveSeed<H> {
    /// Creates a holder with no seed in effect.
    #[must_use]
    pub const fn new(handler: H) -> Self {
        Self {
            handler,
            current: None,
        }
    }

    /// The seed currently in effect.
    #[must_use]
    pub const fn current(&self) -> Option<&Seed> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Puts `seed` into effect.
    ///
    /// Returns `Ok(false)` without touching the handler if an equal seed is
    /// already in effect; otherwise the current seed is disabled first.
    pub fn enable(&mut self, seed: Seed) -> Result<bool, H::Error> {
        if self.current.as_ref() == Some(&seed) {
            return Ok(false);
        }
        self.disable()?;
        self.handler.enable(&seed)?;
        self.current = Some(seed);
        Ok(true)
    }

    /// Reverts the current seed, if any, and returns it.
    pub fn disable(&mut self) -> Result<Option<Seed>, H::Error> {
        let Some(seed) = self.current.take() else {
            return Ok(None);
        };
        if let Err(err) = self.handler.disable(&seed) {
            self.current = Some(seed);
            return Err(err);
        }
        Ok(Some(seed))
    }

    /// Returns the handler, dropping the current seed without disabling it.
    pub fn into_inner(self) -> H {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decode_seed, FormatRegistry};
    use schema::SeedFormat;
    use wire::Template;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<String>,
        fail_disable: bool,
    }

    impl SeedLifecycle for Recorder {
        type Error = &'static str;

        fn enable(&mut self, seed: &Seed) -> Result<(), Self::Error> {
            self.events.push(format!("enable {seed}"));
            Ok(())
        }

        fn disable(&mut self, seed: &Seed) -> Result<(), Self::Error> {
            if self.fail_disable {
                return Err("disable failed");
            }
            self.events.push(format!("disable {seed}"));
            Ok(())
        }
    }

    fn registry() -> FormatRegistry {
        let format = SeedFormat::builder(0, Template::parse("XXXX").unwrap())
            .build()
            .unwrap();
        FormatRegistry::new([format]).unwrap()
    }

    #[test]
    fn enable_switches_seeds() {
        let registry = registry();
        let a = decode_seed(&registry, "AAAB").unwrap();
        let b = decode_seed(&registry, "AAAC").unwrap();

        let mut active = ActiveSeed::new(Recorder::default());
        assert!(active.enable(a.clone()).unwrap());
        assert!(active.enable(b.clone()).unwrap());
        assert_eq!(active.current(), Some(&b));
        assert_eq!(
            active.handler().events,
            vec!["enable AAAB", "disable AAAB", "enable AAAC"]
        );
    }

    #[test]
    fn enabling_same_seed_is_noop() {
        let registry = registry();
        let a = decode_seed(&registry, "AAAB").unwrap();
        let a_lower = decode_seed(&registry, "aaab").unwrap();

        let mut active = ActiveSeed::new(Recorder::default());
        active.enable(a).unwrap();
        assert!(!active.enable(a_lower).unwrap());
        assert_eq!(active.handler().events.len(), 1);
    }

    #[test]
    fn disable_clears_current() {
        let registry = registry();
        let mut active = ActiveSeed::new(Recorder::default());
        assert_eq!(active.disable().unwrap(), None);

        active.enable(decode_seed(&registry, "AAAB").unwrap()).unwrap();
        let disabled = active.disable().unwrap();
        assert_eq!(disabled.map(|s| s.to_string()), Some("AAAB".to_owned()));
        assert!(active.current().is_none());
    }

    #[test]
    fn failed_disable_keeps_seed() {
        let registry = registry();
        let mut active = ActiveSeed::new(Recorder::default());
        active.enable(decode_seed(&registry, "AAAB").unwrap()).unwrap();
        active.handler_mut().fail_disable = true;
        assert_eq!(
            active.enable(decode_seed(&registry, "AAAC").unwrap()),
            Err("disable failed")
        );
        assert_eq!(active.current().map(Seed::as_str), Some("AAAB"));
        assert_eq!(active.into_inner().events, vec!["enable AAAB"]);
    }
}
