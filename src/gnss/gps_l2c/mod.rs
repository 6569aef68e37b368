
// GPS L2C carries the CNAV data message. Acquisition and tracking of the
// L2 CM/CL codes live with the signal-processing providers; this module is
// the data side only.

pub mod cnav;
