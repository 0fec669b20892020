use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub satid: u32,
    pub satname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogTle {
    pub info: CatalogInfo,
    #[serde(default)]
    pub tle: String,
}
