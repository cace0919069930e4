use std::fmt;

#[derive(Debug, Clone)]
pub struct EmptyAlphabetError {
    message: String,
}

impl EmptyAlphabetError {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

impl fmt::Display for EmptyAlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EmptyAlphabetError: {}", self.message)
    }
}

impl std::error::Error for EmptyAlphabetError {}
