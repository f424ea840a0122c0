/// Error type for tbox-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TboxError {
    /// A point outside lng [-180, 180] / lat [-90, 90] was projected or tested.
    InvalidPoint { lng: f64, lat: f64, msg: String },
    /// A builder or config is missing a required value.
    InvalidConfig(String),
}

impl TboxError {
    pub(crate) fn invalid_point(lng: f64, lat: f64) -> Self {
        TboxError::InvalidPoint {
            lng,
            lat,
            msg: "invalid point".to_string(),
        }
    }
}

/// Formats a coordinate with its shortest round-trip digits.
///
/// Exponents below -4 or from 6 up switch to exponent form with a signed,
/// two-digit minimum exponent (`1e-05`, `1.5e+06`). Infinities render as
/// `+Inf` / `-Inf`.
fn format_coord(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:e}", v);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return v.to_string();
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if v != 0.0 && (exp < -4 || exp >= 6) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    } else {
        v.to_string()
    }
}

impl std::fmt::Display for TboxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TboxError::InvalidPoint { lng, lat, msg } => write!(
                f,
                "Point{{Lat: {}, Lng: {}}} - {}",
                format_coord(*lat),
                format_coord(*lng),
                msg
            ),
            TboxError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for TboxError {}
