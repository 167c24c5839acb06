/// Asserts that no agent with the given id is live in the environment.
#[macro_export]
macro_rules! assert_agent_dead {
    ($env:expr, $id:expr) => {
        assert!(
            $env.agent($id).is_none(),
            "Agent {} should be dead but was found alive",
            $id
        );
    };
}

/// Asserts that the agent with the given id is live and returns it.
#[macro_export]
macro_rules! live_agent {
    ($env:expr, $id:expr) => {
        $env.agent($id)
            .unwrap_or_else(|| panic!("Agent {} should be alive", $id))
    };
}

/// Asserts that the live population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($env:expr, $count:expr) => {
        assert_eq!($env.agents().len(), $count, "Population count mismatch");
    };
}
