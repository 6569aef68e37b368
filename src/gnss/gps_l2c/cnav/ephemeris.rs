
use serde::{Serialize, Deserialize};

pub const MU:f64 = 3.986005e14;              // [m^3/s^2] WGS-84 value of the earth's gravitational constant
pub const F:f64 = -4.442807633e-10;          // [sec/root-meter]
pub const OMEGA_E:f64 = 7.2921151467e-5;     // [rad/s] WGS-84 value of the earth's rotation rate

// CNAV broadcasts the semi-major axis and the rate of right ascension as
// deltas about these reference values (IS-GPS-200K, 30.3.3.1.3)
pub const A_REF:f64 = 26_559_710.0;          // [m]
pub const OMEGA_DOT_REF:f64 = -2.6e-9;       // [semicircles/s]

/// CNAV ephemeris, accumulated from message types 10 and 11 with the clock
/// and group-delay blocks of types 30 and 33 folded in. Angles are radians
/// (the semicircle conversion lives in the field catalogue) and reference
/// times are seconds of week.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy)]
pub struct Ephemeris {
	pub prn:u8,              pub week_number:u16,        pub signal_health:u8,
	pub tow:f64,             pub t_op:f64,
	pub ura0:i8,             pub ura1:u8,                pub ura2:u8,
	pub t_oe1:f64,           pub t_oe2:f64,
	pub delta_a:f64,         pub a_dot:f64,
	pub delta_n:f64,         pub delta_n_dot:f64,
	pub m0:f64,              pub e:f64,                  pub omega:f64,
	pub omega0:f64,          pub delta_omega_dot:f64,
	pub i0:f64,              pub idot:f64,
	pub cis:f64,             pub cic:f64,
	pub crs:f64,             pub crc:f64,
	pub cus:f64,             pub cuc:f64,
	pub t_oc:f64,            pub a_f0:f64,               pub a_f1:f64,   pub a_f2:f64,
	pub t_gd:f64,
	pub isc_l1ca:f64,        pub isc_l2c:f64,            pub isc_l5i5:f64,   pub isc_l5q5:f64,
	pub integrity_status_flag:bool,
	pub l2c_phasing_flag:bool,
	pub alert_flag:bool,
}

impl Ephemeris {

	// Correction factor between the SV clock and GPS system time
	pub fn dt_sv(&self, t:f64) -> f64 { self.a_f0 + self.a_f1*(t - self.t_oc) + self.a_f2*(t - self.t_oc).powi(2) }

	/// ECEF position and corrected SV clock at GPS system time t, using the
	/// algorithm of IS-GPS-200K Table 30-II. Unlike the LNAV version, the
	/// semi-major axis and rate of right ascension come as deltas about
	/// A_REF and OMEGA_DOT_REF and the mean motion carries a rate term.
	pub fn pos_and_clock(&self, t:f64) -> ((f64, f64, f64), f64) {

		let tk:f64 = t - self.t_oe1;

		let a0:f64 = A_REF + self.delta_a;
		let ak:f64 = a0 + self.a_dot*tk;

		let n0:f64 = (MU / a0.powi(3)).sqrt();
		let n:f64 = n0 + self.delta_n + 0.5*self.delta_n_dot*tk;

		// Mean anomaly
		let mk:f64 = self.m0 + n*tk;

		let mut ek:f64 = mk;
		for _ in 0..10 {
			// Iteratively find eccentric anomaly using the Newton-Raphson method
			ek = ek - (ek - self.e*ek.sin() - mk)/(1.0 - self.e*ek.cos());
		}

		let nu_k:f64 = {
			let y:f64 = ((1.0 - self.e.powi(2)).sqrt() * ek.sin()) / (1.0 - (self.e*ek.cos()));
			let x:f64 = (ek.cos() - self.e) / (1.0 - (self.e*ek.cos()));
			y.atan2(x)
		};

		let phi_k:f64 = nu_k + self.omega;

		// Second-harmonic perturbations
		let du_k:f64 = self.cus*(2.0*phi_k).sin() + self.cuc*(2.0*phi_k).cos();
		let dr_k:f64 = self.crs*(2.0*phi_k).sin() + self.crc*(2.0*phi_k).cos();
		let di_k:f64 = self.cis*(2.0*phi_k).sin() + self.cic*(2.0*phi_k).cos();

		let u_k:f64 = phi_k + du_k;
		let r_k:f64 = ak*(1.0 - self.e*ek.cos()) + dr_k;
		let i_k:f64 = self.i0 + self.idot*tk + di_k;

		let x_kp:f64 = r_k * u_k.cos();
		let y_kp:f64 = r_k * u_k.sin();

		let omega_dot:f64 = OMEGA_DOT_REF*std::f64::consts::PI + self.delta_omega_dot;
		let omega_k:f64 = self.omega0 + (omega_dot - OMEGA_E)*tk - OMEGA_E*self.t_oe1;

		let x_k:f64 = (x_kp * omega_k.cos()) - (y_kp * i_k.cos() * omega_k.sin());
		let y_k:f64 = (x_kp * omega_k.sin()) + (y_kp * i_k.cos() * omega_k.cos());
		let z_k:f64 = y_kp * i_k.sin();

		// Relativistic correction to transmission time
		let dt_r:f64 = F * self.e * ak.sqrt() * ek.sin();

		((x_k, y_k, z_k), self.dt_sv(t) + dt_r)

	}

}
