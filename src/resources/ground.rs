use bevy::prelude::*;
use nalgebra::Vector3;

/// Supplies ground height under a world `(x, z)` position.
pub trait TerrainHeightProvider: Send + Sync {
    /// Height of the ground, or `None` outside the covered area.
    fn height_at(&self, x: f64, z: f64) -> Option<f64>;

    /// Surface normal; flat unless the provider knows better.
    fn normal_at(&self, _x: f64, _z: f64) -> Vector3<f64> {
        Vector3::y()
    }
}

/// Infinite flat ground at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatTerrain {
    pub height: f64,
}

impl FlatTerrain {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl TerrainHeightProvider for FlatTerrain {
    fn height_at(&self, _x: f64, _z: f64) -> Option<f64> {
        Some(self.height)
    }
}

/// Terrain consulted by the post-tick ground contact pass.
#[derive(Resource)]
pub struct TerrainResource(pub Box<dyn TerrainHeightProvider>);

impl TerrainResource {
    pub fn flat(height: f64) -> Self {
        Self(Box::new(FlatTerrain::new(height)))
    }
}
