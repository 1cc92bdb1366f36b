use quick_xml::Error as XmlError;
use serde_json::Error as JsonError;
use zip::result::ZipError;

use crate::data::models::{ConvertError, LookupError, ReadError};

impl From<ZipError> for ReadError {
    fn from(err: ZipError) -> Self {
        match err {
            ZipError::Io(e) => ReadError::Io(e),
            other => ReadError::Parse(format!("Invalid document archive: {}", other)),
        }
    }
}

impl From<XmlError> for ReadError {
    fn from(err: XmlError) -> Self {
        ReadError::Parse(format!("Invalid document XML: {}", err))
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::MalformedResponse(err.to_string())
        } else {
            LookupError::Http(err)
        }
    }
}

impl From<JsonError> for LookupError {
    fn from(err: JsonError) -> Self {
        LookupError::MalformedResponse(err.to_string())
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<JsonError> for ConvertError {
    fn from(err: JsonError) -> Self {
        ConvertError::Json(err)
    }
}
