use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkout payment statuses the merchant system acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    Created,
    Succeeded,
    Failed,
    Returned,
    Expired,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Created => "Created",
            PaymentStatus::Succeeded => "Succeeded",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Returned => "Returned",
            PaymentStatus::Expired => "Expired",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Exact match: the gateway reports statuses in PascalCase and anything else
// is treated as unrecognised.
impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Created" => Ok(PaymentStatus::Created),
            "Succeeded" => Ok(PaymentStatus::Succeeded),
            "Failed" => Ok(PaymentStatus::Failed),
            "Returned" => Ok(PaymentStatus::Returned),
            "Expired" => Ok(PaymentStatus::Expired),
            _ => Err(format!("Unrecognised payment status: {}", s)),
        }
    }
}
