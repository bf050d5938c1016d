use std::fmt;
use std::fmt::Formatter;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::passkey::Passkey;

impl fmt::Display for Passkey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl std::str::FromStr for Passkey {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 32 {
            return Err(CustomError::new("passkey must be 32 characters"));
        }
        let mut result = Passkey([0u8; 32]);
        result.0.copy_from_slice(bytes);
        Ok(result)
    }
}

impl TryFrom<&[u8]> for Passkey {
    type Error = CustomError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.len() != 32 {
            return Err(CustomError::new("passkey must be 32 bytes"));
        }
        let mut result = Passkey([0u8; 32]);
        result.0.copy_from_slice(data);
        Ok(result)
    }
}
