use serde::{Deserialize, Serialize};

// Fee amounts are kept as entered (strings), matching the original form
// data; no currency arithmetic happens in this tool.

/// The one-off fee charged at registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationPolicy {
    pub fee: String,
}

/// Fees charged at admission time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionPolicy {
    pub fee: String,
    pub security_deposit: String,
}

/// Recurring class-wise charges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassPolicy {
    pub class_name: String,
    pub monthly_fee: String,
    /// Charged once a year.
    pub annual_charges: String,
    /// Charged once a year.
    pub other_charges: String,
    /// Charged monthly.
    pub computer_lab_charges: String,
    /// Charged monthly.
    pub lab_charges: String,
}
