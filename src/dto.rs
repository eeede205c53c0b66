use serde::Serialize;

/// Generic success message body shared by write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
