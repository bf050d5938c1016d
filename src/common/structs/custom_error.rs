/// A simple string-carrying error used for parse and validation failures.
#[derive(Debug, Clone)]
pub struct CustomError {
    pub message: String,
}
