//! Built-in seed list
//!
//! Places the page starts with before any user input.

use super::types::Location;

const SEED: [(&str, f64, f64); 15] = [
    ("오이도", 37.34639692396398, 126.68819399072788),
    ("대부도", 37.24750976584791, 126.59617920264822),
    ("고잔역", 37.31649883265228, 126.82228397630698),
    ("수원역", 37.268489805692255, 127.00234504331648),
    ("수원 스타필드", 37.28834843633487, 126.99138421236204),
    ("평창 발왕산케이블카", 37.615148, 128.322164),
    ("강릉", 37.7519, 128.8760),
    ("망포역", 37.2456, 127.0574),
    ("동탄", 37.2001, 127.0968),
    ("광명동굴", 37.42701624392685, 126.86482823517368),
    ("영등포역", 37.5156, 126.9075),
    ("반달섬", 37.303036694954024, 126.75179697072944),
    ("배곧", 37.3682, 126.7256),
    ("하우스봉봉", 37.70957617458109, 128.69481552347122),
    ("거북섬", 37.321901358979446, 126.68268798038005),
];

/// The fixed seed list, in display order
pub fn seed_locations() -> Vec<Location> {
    SEED.iter()
        .map(|&(title, lat, lng)| Location::new(title, lat, lng))
        .collect()
}
