//! Built-in element table: the eight planets, Pluto and two bright
//! asteroids, as heliocentric J2000 osculating elements. Epoch used for
//! this and all other initial data is Jan-1-2000 12:00 TT (t = 0 s).
//! Angles are quoted in degrees in this file so the table stays legible
//! against the source almanac, and converted once at compile time.

use crate::elements::OrbitalElements;
use crate::MU_SUN;
use fixedstr::str16;
use std::f64::consts::PI;

const AU: f64 = 1.495978707e11; // meters

const fn deg(angle: f64) -> f64 {
    angle * (PI / 180.0)
}

/// One orbiting body. The radius is carried for display scaling by an
/// embedding renderer only; the propagator itself never reads it.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub name: str16,
    pub elements: OrbitalElements,
    pub radius: f64, // mean radius, meters
}

impl Body {
    const fn new(
        name: &str,
        semi_major_au: f64,
        eccentricity: f64,
        inclination_deg: f64,
        node_deg: f64,
        periapsis_deg: f64,
        mean_anomaly_deg: f64,
        radius: f64,
    ) -> Self {
        // valid for any heliocentric body; all entries share the Sun's mu.
        Body {
            name: str16::const_make(name),
            elements: OrbitalElements::new_trusted(
                semi_major_au * AU,
                eccentricity,
                deg(inclination_deg),
                deg(node_deg),
                deg(periapsis_deg),
                deg(mean_anomaly_deg),
                0.0,
                MU_SUN,
            ),
            radius,
        }
    }
}

pub const N_BODIES: usize = 11;
pub const BODIES: [Body; N_BODIES] = [
    Body::new(
        "Mercury", 0.38709893, 0.20563069, 7.00487, 48.33167, 29.12478, 174.79439, 2.4397e6,
    ),
    Body::new(
        "Venus", 0.72333199, 0.00677323, 3.39471, 76.68069, 54.85229, 50.44675, 6.0518e6,
    ),
    Body::new(
        "Earth", 1.00000011, 0.01671022, 0.00005, 348.73936, 114.20783, 357.51716, 6.371e6,
    ),
    Body::new(
        "Mars", 1.52366231, 0.09341233, 1.85061, 49.57854, 286.46230, 19.41248, 3.3895e6,
    ),
    Body::new(
        "Jupiter", 5.20336301, 0.04839266, 1.30530, 100.55615, 274.19770, 19.65053, 6.9911e7,
    ),
    Body::new(
        "Saturn", 9.53707032, 0.05415060, 2.48446, 113.71504, 338.71690, 317.51238, 5.8232e7,
    ),
    Body::new(
        "Uranus", 19.19126393, 0.04716771, 0.76986, 74.22988, 96.73436, 142.26794, 2.5362e7,
    ),
    Body::new(
        "Neptune", 30.06896348, 0.00858587, 1.76917, 131.72169, 273.24966, 259.90868, 2.4622e7,
    ),
    Body::new(
        "Pluto", 39.48168677, 0.24880766, 17.14175, 110.30347, 113.76329, 14.86205, 1.1883e6,
    ),
    Body::new(
        "Ceres", 2.76750591, 0.07582276, 10.59338, 80.32927, 72.52203, 95.98930, 4.73e5,
    ),
    Body::new(
        "Vesta", 2.36179255, 0.08874011, 7.14043, 103.85137, 151.19853, 20.86384, 2.625e5,
    ),
];
