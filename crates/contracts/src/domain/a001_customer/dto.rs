use serde::{Deserialize, Serialize};

/// Customer row of `GET /api/customers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub code: String,
    pub name: String,

    // Location
    #[serde(default)]
    pub province_code: Option<String>,
    #[serde(default)]
    pub province_name: Option<String>,
    #[serde(default)]
    pub city_code: Option<String>,
    #[serde(default)]
    pub city_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,

    // Contacts
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,

    pub created_at: String,
}
