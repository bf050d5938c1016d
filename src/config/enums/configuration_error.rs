#[derive(Debug)]
pub enum ConfigurationError {
    IOError(std::io::Error),
    ParseError(serde_json::Error),
}
