/// Base currency assigned to users who do not declare one at registration
pub const DEFAULT_BASE_CURRENCY: &str = "LKR";

/// Minor-unit precision used for currencies without an explicit rule
pub const DEFAULT_MINOR_UNITS: u32 = 2;
