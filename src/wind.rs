use std::fmt;

use serde::Serialize;

/// One of the 16 compass points, each covering a 22.5 degree sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WindDirection {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

const SECTOR_DEGREES: f64 = 22.5;

impl WindDirection {
    /// Compass points in clockwise order starting from north.
    pub const ALL: [WindDirection; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::ENE,
        Self::E,
        Self::ESE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::WSW,
        Self::W,
        Self::WNW,
        Self::NW,
        Self::NNW,
    ];

    /// Resolves a bearing in degrees to the nearest compass point.
    ///
    /// Any real value is accepted: the bearing is wrapped into `[0, 360)` before
    /// rounding, and non-finite input resolves to north.
    pub fn from_degrees(degrees: f64) -> Self {
        let bearing = degrees.rem_euclid(360.0);
        // NaN casts to 0; 360 / 22.5 rounds to 16 and wraps back to N.
        let sector = (bearing / SECTOR_DEGREES).round() as usize % Self::ALL.len();
        Self::ALL[sector]
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::NNE => "NNE",
            Self::NE => "NE",
            Self::ENE => "ENE",
            Self::E => "E",
            Self::ESE => "ESE",
            Self::SE => "SE",
            Self::SSE => "SSE",
            Self::S => "S",
            Self::SSW => "SSW",
            Self::SW => "SW",
            Self::WSW => "WSW",
            Self::W => "W",
            Self::WNW => "WNW",
            Self::NW => "NW",
            Self::NNW => "NNW",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
