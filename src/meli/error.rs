use reqwest::StatusCode;
use std::fmt;

/// Sum type representing every possible unexceptional fail state when looking
/// up a listing.
#[derive(Debug)]
pub enum MeliError {
    APIRequestFailed(reqwest::Error),
    APIResponseStatus(StatusCode),
    APIResponseUndecodable(reqwest::Error),
}

impl From<reqwest::Error> for MeliError {
    fn from(e: reqwest::Error) -> Self {
        MeliError::APIRequestFailed(e)
    }
}

impl fmt::Display for MeliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            MeliError::APIRequestFailed(e) => format!("Marketplace API request failed: {:?}", e),
            MeliError::APIResponseStatus(s) => format!("Marketplace API returned status: {}", s),
            MeliError::APIResponseUndecodable(e) => {
                format!("Marketplace API returned unexpected body: {}", e)
            }
        };

        write!(f, "{}", x)
    }
}
