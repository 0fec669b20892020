mod elements;
mod error;
mod parsing;

pub use elements::OrbitalElementSet;
pub use error::TleError;

#[cfg(test)]
pub(crate) const ISS_LINE1: &str =
    "1 25544U 98067A   23235.51284918  .00014007  00000-0  25659-3 0  9995";
#[cfg(test)]
pub(crate) const ISS_LINE2: &str =
    "2 25544  51.6426 355.0105 0003727 342.0009 113.8232 15.49590945412235";
#[cfg(test)]
pub(crate) const ISS_TLE: &str = "1 25544U 98067A   23235.51284918  .00014007  00000-0  25659-3 0  9995\n2 25544  51.6426 355.0105 0003727 342.0009 113.8232 15.49590945412235";
