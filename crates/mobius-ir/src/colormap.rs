//! Sequential colour scales for shading the surface by height.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::IrError;

/// A named colour scale.
///
/// Serialized by name; parsing is case-insensitive so `"viridis"` and
/// `"Viridis"` both work in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorMap {
    /// Dark purple through teal to yellow.
    #[default]
    Viridis,
    /// Deep blue to light grey.
    Blues,
    /// Colour-vision-friendly navy to yellow.
    Cividis,
    /// Indigo through magenta to yellow.
    Plasma,
    /// Black through red to pale yellow.
    Inferno,
}

type Stops = &'static [(f64, [u8; 3])];

const VIRIDIS: Stops = &[
    (0.0 / 9.0, [68, 1, 84]),
    (1.0 / 9.0, [72, 40, 120]),
    (2.0 / 9.0, [62, 73, 137]),
    (3.0 / 9.0, [49, 104, 142]),
    (4.0 / 9.0, [38, 130, 142]),
    (5.0 / 9.0, [31, 158, 137]),
    (6.0 / 9.0, [53, 183, 121]),
    (7.0 / 9.0, [110, 206, 88]),
    (8.0 / 9.0, [181, 222, 43]),
    (1.0, [253, 231, 37]),
];

const BLUES: Stops = &[
    (0.0, [5, 10, 172]),
    (0.35, [40, 60, 190]),
    (0.5, [70, 100, 245]),
    (0.6, [90, 120, 245]),
    (0.7, [106, 137, 247]),
    (1.0, [220, 220, 220]),
];

const CIVIDIS: Stops = &[
    (0.0 / 9.0, [0, 34, 78]),
    (1.0 / 9.0, [18, 53, 112]),
    (2.0 / 9.0, [59, 73, 108]),
    (3.0 / 9.0, [87, 93, 109]),
    (4.0 / 9.0, [112, 113, 115]),
    (5.0 / 9.0, [138, 134, 120]),
    (6.0 / 9.0, [165, 156, 116]),
    (7.0 / 9.0, [195, 179, 105]),
    (8.0 / 9.0, [225, 204, 85]),
    (1.0, [254, 232, 56]),
];

const PLASMA: Stops = &[
    (0.0 / 9.0, [13, 8, 135]),
    (1.0 / 9.0, [70, 3, 159]),
    (2.0 / 9.0, [114, 1, 168]),
    (3.0 / 9.0, [156, 23, 158]),
    (4.0 / 9.0, [189, 55, 134]),
    (5.0 / 9.0, [216, 87, 107]),
    (6.0 / 9.0, [237, 121, 83]),
    (7.0 / 9.0, [251, 159, 58]),
    (8.0 / 9.0, [253, 202, 38]),
    (1.0, [240, 249, 33]),
];

const INFERNO: Stops = &[
    (0.0 / 9.0, [0, 0, 4]),
    (1.0 / 9.0, [27, 12, 65]),
    (2.0 / 9.0, [74, 12, 107]),
    (3.0 / 9.0, [120, 28, 109]),
    (4.0 / 9.0, [165, 44, 96]),
    (5.0 / 9.0, [207, 68, 70]),
    (6.0 / 9.0, [237, 105, 37]),
    (7.0 / 9.0, [251, 155, 6]),
    (8.0 / 9.0, [247, 209, 61]),
    (1.0, [252, 255, 164]),
];

impl ColorMap {
    /// Every scale, in selector order.
    pub const ALL: [ColorMap; 5] = [
        ColorMap::Viridis,
        ColorMap::Blues,
        ColorMap::Cividis,
        ColorMap::Plasma,
        ColorMap::Inferno,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            ColorMap::Viridis => "Viridis",
            ColorMap::Blues => "Blues",
            ColorMap::Cividis => "Cividis",
            ColorMap::Plasma => "Plasma",
            ColorMap::Inferno => "Inferno",
        }
    }

    /// The scale after this one in [`ColorMap::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn stops(self) -> Stops {
        match self {
            ColorMap::Viridis => VIRIDIS,
            ColorMap::Blues => BLUES,
            ColorMap::Cividis => CIVIDIS,
            ColorMap::Plasma => PLASMA,
            ColorMap::Inferno => INFERNO,
        }
    }

    /// RGB colour at position `t`, linearly interpolated between stops.
    ///
    /// `t` is clamped to `[0, 1]`; NaN maps to the first stop.
    pub fn sample(self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.stops();
        let hi = stops
            .iter()
            .position(|&(pos, _)| pos >= t)
            .unwrap_or(stops.len() - 1);
        if hi == 0 {
            return stops[0].1;
        }
        let (p0, c0) = stops[hi - 1];
        let (p1, c1) = stops[hi];
        let f = (t - p0) / (p1 - p0);
        let mut rgb = [0u8; 3];
        for k in 0..3 {
            let a = c0[k] as f64;
            let b = c1[k] as f64;
            rgb[k] = (a + (b - a) * f).round() as u8;
        }
        rgb
    }
}

impl fmt::Display for ColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMap {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| IrError::UnknownColorMap(s.to_string()))
    }
}

impl TryFrom<String> for ColorMap {
    type Error = IrError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ColorMap> for String {
    fn from(m: ColorMap) -> Self {
        m.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ColorMap::Viridis.sample(0.0), [68, 1, 84]);
        assert_eq!(ColorMap::Viridis.sample(1.0), [253, 231, 37]);
        assert_eq!(ColorMap::Blues.sample(0.0), [5, 10, 172]);
        assert_eq!(ColorMap::Inferno.sample(1.0), [252, 255, 164]);
    }

    #[test]
    fn test_clamps_out_of_range() {
        for m in ColorMap::ALL {
            assert_eq!(m.sample(-3.0), m.sample(0.0));
            assert_eq!(m.sample(7.5), m.sample(1.0));
            assert_eq!(m.sample(f64::NAN), m.sample(0.0));
        }
    }

    #[test]
    fn test_interpolates_between_stops() {
        // Halfway between Blues stops at 0.5 and 0.6
        assert_eq!(ColorMap::Blues.sample(0.55), [80, 110, 245]);
        // Exactly on a stop
        assert_eq!(ColorMap::Blues.sample(0.35), [40, 60, 190]);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut m = ColorMap::Viridis;
        let mut seen = Vec::new();
        for _ in 0..ColorMap::ALL.len() {
            seen.push(m);
            m = m.next();
        }
        assert_eq!(m, ColorMap::Viridis);
        assert_eq!(seen, ColorMap::ALL.to_vec());
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("plasma".parse::<ColorMap>().unwrap(), ColorMap::Plasma);
        assert_eq!(" CIVIDIS ".parse::<ColorMap>().unwrap(), ColorMap::Cividis);
        assert!(matches!(
            "jet".parse::<ColorMap>(),
            Err(IrError::UnknownColorMap(name)) if name == "jet"
        ));
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&ColorMap::Inferno).unwrap();
        assert_eq!(json, r#""Inferno""#);
        let m: ColorMap = serde_json::from_str(r#""blues""#).unwrap();
        assert_eq!(m, ColorMap::Blues);
        assert!(serde_json::from_str::<ColorMap>(r#""rainbow""#).is_err());
    }
}
