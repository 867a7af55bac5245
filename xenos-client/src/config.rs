use serde::Deserialize;

/// The default port, under which the gRPC server of Xenos can be reached.
pub const DEFAULT_XENOS_PORT: u16 = 50051;

/// The address of the gRPC interface of Xenos.
///
/// Can be embedded into the configuration of an application, only `host` is required:
///
/// ```rust
/// use xenos_client::config::XenosConfig;
///
/// let config: XenosConfig = serde_json::from_str(r#"{ "host": "xenos.example" }"#).unwrap();
/// assert_eq!(config.port, 50051);
/// ```
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct XenosConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl XenosConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_XENOS_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

fn default_port() -> u16 {
    DEFAULT_XENOS_PORT
}
