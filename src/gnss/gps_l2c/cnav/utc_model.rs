
use serde::{Serialize, Deserialize};

/// GPS-to-UTC relation from CNAV message type 33, including the leap second
/// schedule. `valid` is set on the snapshot handed out once the record has
/// been delivered.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy)]
pub struct UtcModel {
	pub a0:f64,
	pub a1:f64,
	pub a2:f64,
	pub delta_t_ls:i32,
	pub t_ot:f64,
	pub wn_t:i32,
	pub wn_lsf:i32,
	pub dn:i32,
	pub delta_t_lsf:i32,
	pub valid:bool,
}
