
use log::debug;

use crate::GnssRxErr;
use crate::utils::bit_fields;
use crate::utils::bit_fields::BitSlice;

pub mod ephemeris;
pub mod fields;
pub mod ionosphere;
pub mod utc_model;


use self::ephemeris::Ephemeris;
use self::fields::*;
use self::utc_model::UtcModel;

/// GPS CNAV data message decoder, IS-GPS-200K Appendix III.
///
/// Pages arrive as 300-bit blocks that already passed CRC upstream. The
/// decoder accumulates ephemeris, ionospheric and UTC records across pages
/// and publishes them through consume-on-read predicates: `have_new_*`
/// returns true exactly once per delivered record. Not internally
/// synchronized; callers serialize access per instance.
#[derive(Debug, Default)]
pub struct NavigationMessage {
	ephemeris_record: Ephemeris,
	iono_record: ionosphere::Model,
	utc_model_record: UtcModel,
	flag_ephemeris_1: bool,
	flag_ephemeris_2: bool,
	flag_iono_valid: bool,
	flag_utc_valid: bool,
}

// "Not available" group delays broadcast the 13-bit pattern 1000000000000,
// -4096 in two's complement; they decode to exactly 0.0 (IS-GPS-200K,
// Table 30-IV). The comparison against -4095.9 absorbs the float cast.
fn group_delay(bits:&[bool], field:&[BitSlice], lsb:f64) -> Result<f64, GnssRxErr> {
	let raw = bit_fields::read_signed(bits, field)? as f64;
	if raw < -4095.9 { Ok(0.0) } else { Ok(raw * lsb) }
}

impl NavigationMessage {

	pub fn new() -> Self { Self::default() }

	/// Clears the accumulating records and all freshness flags.
	pub fn reset(&mut self) {
		*self = Self::default();
	}

	/// Decodes one 300-bit data page into the accumulating records and sets
	/// the freshness flag for the record the page contributes to. Pages with
	/// an unrecognized message type leave every record and flag untouched.
	pub fn decode_page(&mut self, bits:&[bool]) -> Result<(), GnssRxErr> {

		if bits.len() != GPS_CNAV_DATA_PAGE_BITS {
			return Err(GnssRxErr::InvalidTelemetryData("expected a 300-bit CNAV data page"));
		}

		// Common to all message types
		let prn        = bit_fields::read_unsigned(bits, CNAV_PRN)? as u8;
		let tow        = (bit_fields::read_unsigned(bits, CNAV_TOW)? as f64) * CNAV_TOW_LSB;
		let alert_flag = bit_fields::read_bool(bits, CNAV_ALERT_FLAG)?;
		let page_type  = bit_fields::read_unsigned(bits, CNAV_MSG_TYPE)?;

		match page_type {
			10 => {
				// Ephemeris 1/2, IS-GPS-200K Table 30-I
				let eph = &mut self.ephemeris_record;
				eph.prn         = prn;
				eph.tow         = tow;
				eph.alert_flag  = alert_flag;
				eph.week_number = bit_fields::read_unsigned(bits, CNAV_WN)? as u16;
				eph.signal_health = bit_fields::read_unsigned(bits, CNAV_HEALTH)? as u8;
				eph.t_op        = (bit_fields::read_unsigned(bits, CNAV_TOP1)? as f64) * CNAV_TOP1_LSB;
				eph.ura0        = bit_fields::read_signed(bits, CNAV_URA)? as i8;
				eph.t_oe1       = (bit_fields::read_unsigned(bits, CNAV_TOE1)? as f64) * CNAV_TOE1_LSB;
				eph.delta_a     = (bit_fields::read_signed(bits, CNAV_DELTA_A)? as f64) * CNAV_DELTA_A_LSB;
				eph.a_dot       = (bit_fields::read_signed(bits, CNAV_A_DOT)? as f64) * CNAV_A_DOT_LSB;
				eph.delta_n     = (bit_fields::read_signed(bits, CNAV_DELTA_N0)? as f64) * CNAV_DELTA_N0_LSB;
				eph.delta_n_dot = (bit_fields::read_signed(bits, CNAV_DELTA_N0_DOT)? as f64) * CNAV_DELTA_N0_DOT_LSB;
				eph.m0          = (bit_fields::read_signed(bits, CNAV_M0)? as f64) * CNAV_M0_LSB;
				eph.e           = (bit_fields::read_unsigned(bits, CNAV_E_ECCENTRICITY)? as f64) * CNAV_E_ECCENTRICITY_LSB;
				eph.omega       = (bit_fields::read_signed(bits, CNAV_OMEGA)? as f64) * CNAV_OMEGA_LSB;
				eph.integrity_status_flag = bit_fields::read_bool(bits, CNAV_INTEGRITY_FLAG)?;
				eph.l2c_phasing_flag      = bit_fields::read_bool(bits, CNAV_L2_PHASING_FLAG)?;
				self.flag_ephemeris_1 = true;
			},
			11 => {
				// Ephemeris 2/2, IS-GPS-200K Table 30-II
				let eph = &mut self.ephemeris_record;
				eph.prn        = prn;
				eph.tow        = tow;
				eph.alert_flag = alert_flag;
				eph.t_oe2      = (bit_fields::read_unsigned(bits, CNAV_TOE2)? as f64) * CNAV_TOE2_LSB;
				eph.omega0     = (bit_fields::read_signed(bits, CNAV_OMEGA0)? as f64) * CNAV_OMEGA0_LSB;
				eph.delta_omega_dot = (bit_fields::read_signed(bits, CNAV_DELTA_OMEGA_DOT)? as f64) * CNAV_DELTA_OMEGA_DOT_LSB;
				eph.i0         = (bit_fields::read_signed(bits, CNAV_I0)? as f64) * CNAV_I0_LSB;
				eph.idot       = (bit_fields::read_signed(bits, CNAV_I0_DOT)? as f64) * CNAV_I0_DOT_LSB;
				eph.cis        = (bit_fields::read_signed(bits, CNAV_CIS)? as f64) * CNAV_CIS_LSB;
				eph.cic        = (bit_fields::read_signed(bits, CNAV_CIC)? as f64) * CNAV_CIC_LSB;
				eph.crs        = (bit_fields::read_signed(bits, CNAV_CRS)? as f64) * CNAV_CRS_LSB;
				eph.crc        = (bit_fields::read_signed(bits, CNAV_CRC)? as f64) * CNAV_CRC_LSB;
				eph.cus        = (bit_fields::read_signed(bits, CNAV_CUS)? as f64) * CNAV_CUS_LSB;
				eph.cuc        = (bit_fields::read_signed(bits, CNAV_CUC)? as f64) * CNAV_CUC_LSB;
				self.flag_ephemeris_2 = true;
			},
			30 => {
				// Clock, iono and group delays, IS-GPS-200K Tables 30-III / 30-IV / 20-X
				let eph = &mut self.ephemeris_record;
				eph.prn        = prn;
				eph.tow        = tow;
				eph.alert_flag = alert_flag;
				eph.t_oc       = (bit_fields::read_unsigned(bits, CNAV_TOC)? as f64) * CNAV_TOC_LSB;
				eph.ura0       = bit_fields::read_signed(bits, CNAV_URA_NED0)? as i8;
				eph.ura1       = bit_fields::read_unsigned(bits, CNAV_URA_NED1)? as u8;
				eph.ura2       = bit_fields::read_unsigned(bits, CNAV_URA_NED2)? as u8;
				eph.a_f0       = (bit_fields::read_signed(bits, CNAV_AF0)? as f64) * CNAV_AF0_LSB;
				eph.a_f1       = (bit_fields::read_signed(bits, CNAV_AF1)? as f64) * CNAV_AF1_LSB;
				eph.a_f2       = (bit_fields::read_signed(bits, CNAV_AF2)? as f64) * CNAV_AF2_LSB;
				eph.t_gd       = group_delay(bits, CNAV_TGD, CNAV_TGD_LSB)?;
				eph.isc_l1ca   = group_delay(bits, CNAV_ISCL1, CNAV_ISCL1_LSB)?;
				eph.isc_l2c    = group_delay(bits, CNAV_ISCL2, CNAV_ISCL2_LSB)?;
				eph.isc_l5i5   = group_delay(bits, CNAV_ISCL5I, CNAV_ISCL5I_LSB)?;
				eph.isc_l5q5   = group_delay(bits, CNAV_ISCL5Q, CNAV_ISCL5Q_LSB)?;
				let iono = &mut self.iono_record;
				iono.alpha0    = (bit_fields::read_signed(bits, CNAV_ALPHA0)? as f64) * CNAV_ALPHA0_LSB;
				iono.alpha1    = (bit_fields::read_signed(bits, CNAV_ALPHA1)? as f64) * CNAV_ALPHA1_LSB;
				iono.alpha2    = (bit_fields::read_signed(bits, CNAV_ALPHA2)? as f64) * CNAV_ALPHA2_LSB;
				iono.alpha3    = (bit_fields::read_signed(bits, CNAV_ALPHA3)? as f64) * CNAV_ALPHA3_LSB;
				iono.beta0     = (bit_fields::read_signed(bits, CNAV_BETA0)? as f64) * CNAV_BETA0_LSB;
				iono.beta1     = (bit_fields::read_signed(bits, CNAV_BETA1)? as f64) * CNAV_BETA1_LSB;
				iono.beta2     = (bit_fields::read_signed(bits, CNAV_BETA2)? as f64) * CNAV_BETA2_LSB;
				iono.beta3     = (bit_fields::read_signed(bits, CNAV_BETA3)? as f64) * CNAV_BETA3_LSB;
				self.flag_iono_valid = true;
			},
			33 => {
				// Clock and UTC, IS-GPS-200K Table 30-VII
				let eph = &mut self.ephemeris_record;
				eph.prn        = prn;
				eph.tow        = tow;
				eph.alert_flag = alert_flag;
				eph.t_op       = (bit_fields::read_unsigned(bits, CNAV_TOP1)? as f64) * CNAV_TOP1_LSB;
				eph.t_oc       = (bit_fields::read_unsigned(bits, CNAV_TOC)? as f64) * CNAV_TOC_LSB;
				eph.a_f0       = (bit_fields::read_signed(bits, CNAV_AF0)? as f64) * CNAV_AF0_LSB;
				eph.a_f1       = (bit_fields::read_signed(bits, CNAV_AF1)? as f64) * CNAV_AF1_LSB;
				eph.a_f2       = (bit_fields::read_signed(bits, CNAV_AF2)? as f64) * CNAV_AF2_LSB;
				let utc = &mut self.utc_model_record;
				utc.a0          = (bit_fields::read_signed(bits, CNAV_A0)? as f64) * CNAV_A0_LSB;
				utc.a1          = (bit_fields::read_signed(bits, CNAV_A1)? as f64) * CNAV_A1_LSB;
				utc.a2          = (bit_fields::read_signed(bits, CNAV_A2)? as f64) * CNAV_A2_LSB;
				utc.delta_t_ls  = bit_fields::read_signed(bits, CNAV_DELTA_TLS)? as i32;
				utc.t_ot        = (bit_fields::read_signed(bits, CNAV_TOT)? as f64) * CNAV_TOT_LSB;
				utc.wn_t        = bit_fields::read_signed(bits, CNAV_WN_OT)? as i32;
				utc.wn_lsf      = bit_fields::read_signed(bits, CNAV_WN_LSF)? as i32;
				utc.dn          = bit_fields::read_signed(bits, CNAV_DN)? as i32;
				utc.delta_t_lsf = bit_fields::read_signed(bits, CNAV_DELTA_TLSF)? as i32;
				self.flag_utc_valid = true;
			},
			_ => {
				debug!("PRN {}: ignoring CNAV message type {}", prn, page_type);
			},
		}

		Ok(())
	}

	/// True exactly once per complete ephemeris: both halves seen and
	/// carrying the same Toe. Both freshness flags clear on success; a Toe
	/// mismatch leaves them set until a matching pair arrives.
	pub fn have_new_ephemeris(&mut self) -> bool {
		// Toe1 and Toe2 share the 300 s LSB, so equality on the scaled
		// values is equality on the underlying integers
		if self.flag_ephemeris_1 && self.flag_ephemeris_2
			&& self.ephemeris_record.t_oe1 == self.ephemeris_record.t_oe2 {
			self.flag_ephemeris_1 = false;
			self.flag_ephemeris_2 = false;
			return true;
		}
		false
	}

	pub fn have_new_iono(&mut self) -> bool {
		if self.flag_iono_valid {
			self.flag_iono_valid = false;
			return true;
		}
		false
	}

	pub fn have_new_utc_model(&mut self) -> bool {
		if self.flag_utc_valid {
			self.flag_utc_valid = false;
			return true;
		}
		false
	}

	// Snapshot getters; the decoder keeps the ground truth
	pub fn get_ephemeris(&self) -> Ephemeris { self.ephemeris_record }

	pub fn get_iono(&self) -> ionosphere::Model { self.iono_record }

	pub fn get_utc_model(&self) -> UtcModel {
		let mut utc = self.utc_model_record;
		utc.valid = true;
		utc
	}

}
