use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Receipt printer installed at a branch. Thermal paper widths map to
/// 32 (58mm) or 48 (80mm) characters per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterType {
    None,
    Thermal58,
    Thermal80,
}

impl PrinterType {
    pub fn line_width(self) -> usize {
        match self {
            PrinterType::Thermal58 => 32,
            PrinterType::None | PrinterType::Thermal80 => 48,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub printer_type: PrinterType,
}
