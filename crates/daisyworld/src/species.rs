use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// One of the two daisy species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    White,
    Black,
}

impl Species {
    /// Both species, in update order.
    pub const ALL: [Species; 2] = [Species::White, Species::Black];
}

/// A surface type contributing to the planetary albedo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    White,
    Black,
    /// Bare ground not covered by daisies.
    Soil,
}

impl From<Species> for Surface {
    fn from(species: Species) -> Self {
        match species {
            Species::White => Surface::White,
            Species::Black => Surface::Black,
        }
    }
}

/// A value held once per daisy species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerSpecies<T> {
    #[serde(alias = "w")]
    pub white: T,
    #[serde(alias = "b")]
    pub black: T,
}

impl<T> PerSpecies<T> {
    /// Creates a pair from the white and black values.
    pub const fn new(white: T, black: T) -> Self {
        Self { white, black }
    }

    /// Builds a pair by calling `f` once per species, white first.
    pub fn from_fn(mut f: impl FnMut(Species) -> T) -> Self {
        Self {
            white: f(Species::White),
            black: f(Species::Black),
        }
    }

    /// Applies `f` to both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerSpecies<U> {
        PerSpecies {
            white: f(self.white),
            black: f(self.black),
        }
    }
}

impl<T: Clone> PerSpecies<T> {
    /// Uses the same value for both species.
    pub fn splat(value: T) -> Self {
        Self {
            white: value.clone(),
            black: value,
        }
    }
}

impl<T> Index<Species> for PerSpecies<T> {
    type Output = T;

    fn index(&self, species: Species) -> &T {
        match species {
            Species::White => &self.white,
            Species::Black => &self.black,
        }
    }
}

impl<T> IndexMut<Species> for PerSpecies<T> {
    fn index_mut(&mut self, species: Species) -> &mut T {
        match species {
            Species::White => &mut self.white,
            Species::Black => &mut self.black,
        }
    }
}

/// Albedo of each surface type.
///
/// Albedos are fractions of incident radiation reflected, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Albedo {
    #[serde(alias = "w")]
    pub white: f64,
    #[serde(alias = "b")]
    pub black: f64,
    #[serde(alias = "none")]
    pub soil: f64,
}

impl Default for Albedo {
    fn default() -> Self {
        Self {
            white: 0.75,
            black: 0.25,
            soil: 0.5,
        }
    }
}

impl Index<Surface> for Albedo {
    type Output = f64;

    fn index(&self, surface: Surface) -> &f64 {
        match surface {
            Surface::White => &self.white,
            Surface::Black => &self.black,
            Surface::Soil => &self.soil,
        }
    }
}

impl Index<Species> for Albedo {
    type Output = f64;

    fn index(&self, species: Species) -> &f64 {
        &self[Surface::from(species)]
    }
}
