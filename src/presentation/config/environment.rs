use std::fmt;
use std::str::FromStr;

pub const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Deployment profile. Picks the optional `appsettings.<profile>` overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }

    pub fn settings_file(&self) -> String {
        format!("appsettings.{}", self.as_str().to_lowercase())
    }

    /// An unset `APP_ENVIRONMENT` means a local run.
    pub fn from_env() -> Result<Self, String> {
        std::env::var(ENVIRONMENT_VARIABLE)
            .map(|raw| raw.parse())
            .unwrap_or(Ok(Self::Local))
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let profile = raw.trim().to_lowercase();
        match profile.as_str() {
            "local" | "dev" | "development" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            _ => Err(format!(
                "Invalid environment: {}. Expected: local, test, or prod",
                profile
            )),
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
