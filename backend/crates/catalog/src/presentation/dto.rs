//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// `GET /api/subclasses?class=srd_wizard`
#[derive(Debug, Clone, Deserialize)]
pub struct SubclassQuery {
    pub class: Option<String>,
}

/// `GET /api/spells?class=srd_wizard&level=0`
#[derive(Debug, Clone, Deserialize)]
pub struct SpellQuery {
    pub class: Option<String>,
    pub level: Option<u8>,
}

/// Treat a missing or blank parameter the same way
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
