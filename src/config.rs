use clap::builder::BoolishValueParser;
use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "mock_sensors=info,tower_http=info";

/// Runtime configuration. Every flag can also be set from its environment variable.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(author, version, about = "Mock APIs for drone detection systems A & B")]
pub struct AppConfig {
    /// Bind host
    #[arg(long, env = "MOCK_SENSORS_HOST", default_value = "127.0.0.1")]
    pub host: String,
    /// Bind port
    #[arg(long, env = "MOCK_SENSORS_PORT", default_value_t = 8000)]
    pub port: u16,
    /// Seed for reproducible jitter. Unset draws from OS entropy per request.
    #[arg(long, env = "MOCK_SENSORS_SEED")]
    pub seed: Option<u64>,
    /// Emit `type: "UAV"` on System B detections
    #[arg(
        long,
        env = "MOCK_SENSORS_SYSTEM_B_VEHICLE_TYPE",
        action = clap::ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub system_b_vehicle_type: bool,
    /// Tracing filter directives
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl AppConfig {
    /// `host:port`, resolved by the listener at bind time.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
