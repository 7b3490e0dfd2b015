//// Physical constants
pub const G_SI : f64 = 6.674e-11;  // m^3.kg^-1.s^-2 (S.I. units)

//// Time units accepted by the driver, in seconds
pub const SECOND: f64 = 1.;
pub const HOUR: f64 = 3600.*SECOND;
pub const DAY: f64 = 24.*HOUR;
pub const YEAR: f64 = 365.25*DAY; // Julian year

//// Initial-condition record
pub const REQUIRED_BODY_PROPERTIES : [&str; 4] = ["mass", "pos", "vel", "colour"];

//// Log lines
pub const TIMESTAMP_FORMAT : &str = "[year].[month].[day] [hour]:[minute]:[second]";
pub const BACKUP_TIMESTAMP_FORMAT : &str = "[year][month][day]T[hour]";
