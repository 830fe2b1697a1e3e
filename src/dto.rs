//! Response bodies shared by both entity groups.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub const fn success() -> Self {
        Self { status: "success" }
    }

    // clients match on this exact (misspelled) value
    pub const fn deleted() -> Self {
        Self { status: "succes" }
    }
}
