use crate::config::Config;
use crate::state::State;

/// Maintains current program state. Owned by the application root; the
/// dock and window chrome send intents through it, content views read the
/// render set back out of it.
#[derive(Debug)]
pub struct Manager<C> {
    pub state: State,
    pub config: C,
}

impl<C> Manager<C>
where
    C: Config,
{
    pub fn new(config: C) -> Self {
        Self {
            state: State::new(&config),
            config,
        }
    }
}

#[cfg(test)]
impl Manager<crate::config::tests::TestConfig> {
    pub fn new_test() -> Self {
        Self::new(crate::config::tests::TestConfig::default())
    }
}
