pub const DEFAULT_FROM_ADDRESS: &str = "ne-pas-repondre@ajevif.org";
pub const DEFAULT_TO_ADDRESS: &str = "inscription@ajevif.org";
pub const DEFAULT_AWS_REGION: &str = "eu-west-3";

/// Sender, recipient and region of the notification email.
///
/// These are fixed at build time and never read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub from_address: String,
    pub to_address: String,
    pub aws_region: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            from_address: DEFAULT_FROM_ADDRESS.to_string(),
            to_address: DEFAULT_TO_ADDRESS.to_string(),
            aws_region: DEFAULT_AWS_REGION.to_string(),
        }
    }
}
