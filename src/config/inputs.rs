//! GitHub Actions step inputs

/// Inputs as `@actions/core` exposes them, through `INPUT_<NAME>` variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionInputs {
    /// `version` input
    pub version: Option<String>,

    /// `strict` input, only the literal `true` enables strict mode
    pub strict: Option<bool>,

    /// `args` input, split with shell rules later
    pub args: Option<String>,
}

impl ActionInputs {
    /// Read inputs from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read inputs through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&input_variable(name))
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            version: get("version"),
            strict: get("strict").map(|value| value == "true"),
            args: get("args"),
        }
    }
}

/// Environment variable name the runner uses for an input
pub fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}
