//! GitHub Actions input lookup.
//!
//! The runner exposes each `with:` input as an environment variable named
//! `INPUT_<NAME>`, upper-cased, with spaces replaced by underscores.

const ACTIONS_INPUT_ENV_PREFIX: &str = "INPUT_";

pub fn actions_input_env_name(input_name: &str) -> String {
    format!("{ACTIONS_INPUT_ENV_PREFIX}{input_name}")
        .replace(' ', "_")
        .to_uppercase()
}

/// Reads an action input from the process environment.
///
/// Returns `None` when the variable is unset or not valid unicode. Whether the
/// input is required is left to the caller.
pub fn get_actions_input(input_name: &str) -> Option<String> {
    get_actions_input_from(input_name, |key| std::env::var(key).ok())
}

pub fn get_actions_input_from<F>(input_name: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&actions_input_env_name(input_name))
}
