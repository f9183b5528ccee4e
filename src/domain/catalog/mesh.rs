//! Attachment layout for ship and base models. Geometry itself is not
//! loaded anywhere yet; these only describe where things mount.

/// Index into whatever mesh store eventually backs the catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MeshId(pub u32);

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct GunPoint {
    pub location: [f32; 3],
    pub direction: [f32; 3],
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Turret {
    pub base_mesh: Option<MeshId>,
    pub gun_meshes: Vec<MeshId>,
    /// Gun muzzles grouped into up to three firing banks.
    pub gun_points: [Vec<GunPoint>; 3],
}

impl Turret {
    pub fn gun_count(&self) -> usize {
        self.gun_points.iter().map(Vec::len).sum()
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct MeshLayout {
    pub class_id: i32,
    pub vertices: Vec<i32>,
    pub triangles: Vec<i32>,
    pub textures: Vec<i32>,
    pub dock_points: Vec<[f32; 3]>,
    pub missile_points: Vec<[f32; 3]>,
    pub turret_points: Vec<Turret>,
}
