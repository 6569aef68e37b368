
use serde::{Serialize, Deserialize};

/// Klobuchar ionospheric correction coefficients, scaled per the field
/// catalogue. Delay evaluation against an observer geometry belongs to the
/// PVT layer; this is the broadcast record only.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy)]
pub struct Model {
	pub alpha0:f64, pub alpha1:f64, pub alpha2:f64, pub alpha3:f64,
	pub beta0:f64,  pub beta1:f64,  pub beta2:f64,  pub beta3:f64,
}
