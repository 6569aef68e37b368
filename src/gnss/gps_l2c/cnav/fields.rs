
use std::f64::consts::PI;

use crate::utils::bit_fields::BitSlice;

// CNAV field catalogue, IS-GPS-200K Appendix III. This is the only place
// bit positions and scale factors appear; the decoder names fields through
// these descriptors and nothing else. Positions are 1-based from the MSB of
// the 300-bit data page. Angular scale factors fold in the semicircle-to-
// radian conversion, so decoded angles are radians.

pub const GPS_CNAV_DATA_PAGE_BITS:usize = 300;

// Powers of two as exact decimal literals
const TWO_P4:f64  = 16.0;
const TWO_P11:f64 = 2048.0;
const TWO_P14:f64 = 16384.0;
const TWO_P16:f64 = 65536.0;
const TWO_N8:f64  = 0.00390625;
const TWO_N9:f64  = 0.001953125;
const TWO_N21:f64 = 4.76837158203125e-7;
const TWO_N24:f64 = 5.9604644775390625e-8;
const TWO_N27:f64 = 7.450580596923828125e-9;
const TWO_N30:f64 = 9.31322574615478515625e-10;
const TWO_N32:f64 = 2.3283064365386962890625e-10;
const TWO_N34:f64 = 5.82076609134674072265625e-11;
const TWO_N35:f64 = 2.910383045673370361328125e-11;
const TWO_N44:f64 = 5.684341886080801486968994140625e-14;
const TWO_N48:f64 = 3.552713678800500929355621337890625e-15;
const TWO_N51:f64 = 4.44089209850062616169452667236328125e-16;
const TWO_N57:f64 = 6.938893903907228377647697925567626953125e-18;
const TWO_N60:f64 = 8.673617379884035472059622406959533691406e-19;
const TWO_N68:f64 = 3.3881317890172013562622222900390625e-21;

// Common to all message types
pub const CNAV_PRN:&[BitSlice]        = &[(9, 6)];
pub const CNAV_MSG_TYPE:&[BitSlice]   = &[(15, 6)];
pub const CNAV_TOW:&[BitSlice]        = &[(21, 17)];
pub const CNAV_TOW_LSB:f64            = 6.0;
pub const CNAV_ALERT_FLAG:&[BitSlice] = &[(38, 1)];

// Message type 10 (ephemeris 1 of 2)
pub const CNAV_WN:&[BitSlice]             = &[(39, 13)];
pub const CNAV_HEALTH:&[BitSlice]         = &[(52, 3)];
pub const CNAV_TOP1:&[BitSlice]           = &[(55, 11)];
pub const CNAV_TOP1_LSB:f64               = 300.0;
pub const CNAV_URA:&[BitSlice]            = &[(66, 5)];
pub const CNAV_TOE1:&[BitSlice]           = &[(71, 11)];
pub const CNAV_TOE1_LSB:f64               = 300.0;
pub const CNAV_DELTA_A:&[BitSlice]        = &[(82, 26)];    // relative to A_REF = 26,559,710 m
pub const CNAV_DELTA_A_LSB:f64            = TWO_N9;
pub const CNAV_A_DOT:&[BitSlice]          = &[(108, 25)];
pub const CNAV_A_DOT_LSB:f64              = TWO_N21;
pub const CNAV_DELTA_N0:&[BitSlice]       = &[(133, 17)];
pub const CNAV_DELTA_N0_LSB:f64           = TWO_N44 * PI;
pub const CNAV_DELTA_N0_DOT:&[BitSlice]   = &[(150, 23)];
pub const CNAV_DELTA_N0_DOT_LSB:f64       = TWO_N57 * PI;
pub const CNAV_M0:&[BitSlice]             = &[(173, 33)];
pub const CNAV_M0_LSB:f64                 = TWO_N32 * PI;
pub const CNAV_E_ECCENTRICITY:&[BitSlice] = &[(206, 33)];
pub const CNAV_E_ECCENTRICITY_LSB:f64     = TWO_N34;
pub const CNAV_OMEGA:&[BitSlice]          = &[(239, 33)];
pub const CNAV_OMEGA_LSB:f64              = TWO_N32 * PI;
pub const CNAV_INTEGRITY_FLAG:&[BitSlice] = &[(272, 1)];
pub const CNAV_L2_PHASING_FLAG:&[BitSlice] = &[(273, 1)];

// Message type 11 (ephemeris 2 of 2)
pub const CNAV_TOE2:&[BitSlice]            = &[(39, 11)];
pub const CNAV_TOE2_LSB:f64                = 300.0;
pub const CNAV_OMEGA0:&[BitSlice]          = &[(50, 33)];
pub const CNAV_OMEGA0_LSB:f64              = TWO_N32 * PI;
pub const CNAV_I0:&[BitSlice]              = &[(83, 33)];
pub const CNAV_I0_LSB:f64                  = TWO_N32 * PI;
pub const CNAV_DELTA_OMEGA_DOT:&[BitSlice] = &[(116, 17)];  // relative to OMEGA_DOT_REF = -2.6e-9 semicircles/s
pub const CNAV_DELTA_OMEGA_DOT_LSB:f64     = TWO_N44 * PI;
pub const CNAV_I0_DOT:&[BitSlice]          = &[(133, 15)];
pub const CNAV_I0_DOT_LSB:f64              = TWO_N44 * PI;
pub const CNAV_CIS:&[BitSlice]             = &[(148, 16)];
pub const CNAV_CIS_LSB:f64                 = TWO_N30;
pub const CNAV_CIC:&[BitSlice]             = &[(164, 16)];
pub const CNAV_CIC_LSB:f64                 = TWO_N30;
pub const CNAV_CRS:&[BitSlice]             = &[(180, 24)];
pub const CNAV_CRS_LSB:f64                 = TWO_N8;
pub const CNAV_CRC:&[BitSlice]             = &[(204, 24)];
pub const CNAV_CRC_LSB:f64                 = TWO_N8;
pub const CNAV_CUS:&[BitSlice]             = &[(228, 21)];
pub const CNAV_CUS_LSB:f64                 = TWO_N30;
pub const CNAV_CUC:&[BitSlice]             = &[(249, 21)];
pub const CNAV_CUC_LSB:f64                 = TWO_N30;

// Message type 30 (clock, iono and group delays)
pub const CNAV_URA_NED0:&[BitSlice] = &[(50, 5)];
pub const CNAV_URA_NED1:&[BitSlice] = &[(55, 3)];
pub const CNAV_URA_NED2:&[BitSlice] = &[(58, 3)];
pub const CNAV_TOC:&[BitSlice]      = &[(61, 11)];
pub const CNAV_TOC_LSB:f64          = 300.0;
pub const CNAV_AF0:&[BitSlice]      = &[(72, 26)];
pub const CNAV_AF0_LSB:f64          = TWO_N35;
pub const CNAV_AF1:&[BitSlice]      = &[(98, 20)];
pub const CNAV_AF1_LSB:f64          = TWO_N48;
pub const CNAV_AF2:&[BitSlice]      = &[(118, 10)];
pub const CNAV_AF2_LSB:f64          = TWO_N60;
pub const CNAV_TGD:&[BitSlice]      = &[(128, 13)];
pub const CNAV_TGD_LSB:f64          = TWO_N35;
pub const CNAV_ISCL1:&[BitSlice]    = &[(141, 13)];
pub const CNAV_ISCL1_LSB:f64        = TWO_N35;
pub const CNAV_ISCL2:&[BitSlice]    = &[(154, 13)];
pub const CNAV_ISCL2_LSB:f64        = TWO_N35;
pub const CNAV_ISCL5I:&[BitSlice]   = &[(167, 13)];
pub const CNAV_ISCL5I_LSB:f64       = TWO_N35;
pub const CNAV_ISCL5Q:&[BitSlice]   = &[(180, 13)];
pub const CNAV_ISCL5Q_LSB:f64       = TWO_N35;
pub const CNAV_ALPHA0:&[BitSlice]   = &[(193, 8)];
pub const CNAV_ALPHA0_LSB:f64       = TWO_N30;
pub const CNAV_ALPHA1:&[BitSlice]   = &[(201, 8)];
pub const CNAV_ALPHA1_LSB:f64       = TWO_N27;
pub const CNAV_ALPHA2:&[BitSlice]   = &[(209, 8)];
pub const CNAV_ALPHA2_LSB:f64       = TWO_N24;
pub const CNAV_ALPHA3:&[BitSlice]   = &[(217, 8)];
pub const CNAV_ALPHA3_LSB:f64       = TWO_N24;
pub const CNAV_BETA0:&[BitSlice]    = &[(225, 8)];
pub const CNAV_BETA0_LSB:f64        = TWO_P11;
pub const CNAV_BETA1:&[BitSlice]    = &[(233, 8)];
pub const CNAV_BETA1_LSB:f64        = TWO_P14;
pub const CNAV_BETA2:&[BitSlice]    = &[(241, 8)];
pub const CNAV_BETA2_LSB:f64        = TWO_P16;
pub const CNAV_BETA3:&[BitSlice]    = &[(249, 8)];
pub const CNAV_BETA3_LSB:f64        = TWO_P16;

// Message type 33 (clock and UTC). The clock block reuses the type-10 Top
// and type-30 Toc/Af descriptors.
pub const CNAV_A0:&[BitSlice]         = &[(128, 16)];
pub const CNAV_A0_LSB:f64             = TWO_N35;
pub const CNAV_A1:&[BitSlice]         = &[(144, 13)];
pub const CNAV_A1_LSB:f64             = TWO_N51;
pub const CNAV_A2:&[BitSlice]         = &[(157, 7)];
pub const CNAV_A2_LSB:f64             = TWO_N68;
pub const CNAV_DELTA_TLS:&[BitSlice]  = &[(164, 8)];
pub const CNAV_DELTA_TLS_LSB:f64      = 1.0;
pub const CNAV_TOT:&[BitSlice]        = &[(172, 16)];
pub const CNAV_TOT_LSB:f64            = TWO_P4;
pub const CNAV_WN_OT:&[BitSlice]      = &[(188, 13)];
pub const CNAV_WN_OT_LSB:f64          = 1.0;
pub const CNAV_WN_LSF:&[BitSlice]     = &[(201, 13)];
pub const CNAV_WN_LSF_LSB:f64         = 1.0;
pub const CNAV_DN:&[BitSlice]         = &[(214, 4)];
pub const CNAV_DN_LSB:f64             = 1.0;
pub const CNAV_DELTA_TLSF:&[BitSlice] = &[(218, 8)];
pub const CNAV_DELTA_TLSF_LSB:f64     = 1.0;
