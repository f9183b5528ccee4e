//! Passive records for ships, bases, and factions. Nothing here simulates
//! anything; health/armour/shield values are plain data and unchecked
//! (health is conventionally 0-100, 0 meaning destroyed).

mod faction;
mod mesh;

pub use faction::Faction;
pub use mesh::{GunPoint, MeshId, MeshLayout, Turret};

use bitflags::bitflags;

bitflags! {
    /// What a hull is fitted or permitted to do.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Capabilities: u32 {
        const TORPEDOES = 1 << 0;
        const TEMBLOR_BOMB = 1 << 1;
        const NUKE = 1 << 2;
        const CLOAK = 1 << 3;
        const JUMP_DRIVE = 1 << 4;
        const ATMOSPHERIC_ENTRY = 1 << 5;
        const COCKPIT = 1 << 6;
        const REPAIR_ROBOT = 1 << 7;
        const PLANET_KILLER = 1 << 8;
        const PHASE_TRANSIT_CANNON = 1 << 9;
        const SKIPPER_MISSILE = 1 << 10;
        const CAPSHIP_MISSILE = 1 << 11;
        const LAUNCH_FIGHTERS = 1 << 12;
        const LAUNCH_BOMBERS = 1 << 13;
        const LAUNCH_SHUTTLES = 1 << 14;
        /// Guns and missiles do no damage; only torpedoes do.
        const IMMUNE_TO_NON_TORPEDOES = 1 << 15;
        const INTERIOR = 1 << 16;
        const DOCKABLE = 1 << 17;
        const LANDABLE = 1 << 18;
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum HullClass {
    Fighter,
    Bomber,
    Carrier,
    Destroyer,
    Cruiser,
    Corvette,
}

impl HullClass {
    pub fn is_capital(&self) -> bool {
        matches!(
            self,
            HullClass::Carrier | HullClass::Destroyer | HullClass::Cruiser | HullClass::Corvette
        )
    }
}

/// One value per facing, used for both armour and shields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Facings {
    pub front: i32,
    pub rear: i32,
    pub left: i32,
    pub right: i32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Ship {
    pub hull: HullClass,
    pub capabilities: Capabilities,
    pub faction: Faction,
    pub friendly_to_player: bool,
    pub jump_fuel: i32,
    pub fuel: i32,
    /// Typically 2-8.
    pub hardpoints: i32,
    pub engine_speed: i32,
    pub afterburner_speed: i32,
    pub turn_speed: i32,
    pub pitch_speed: i32,
    pub roll_speed: i32,
    pub mass: i32,
    pub cargo_capacity: i32,
    pub engine_health: i32,
    pub hull_health: i32,
    pub armor: Facings,
    pub shields: Facings,
    pub turrets: i32,
    pub landing_radius: i32,
    pub mesh: MeshLayout,
}

impl Ship {
    pub fn new(hull: HullClass) -> Self {
        Self {
            hull,
            capabilities: Capabilities::empty(),
            faction: Faction::default(),
            friendly_to_player: false,
            jump_fuel: 0,
            fuel: 0,
            hardpoints: 0,
            engine_speed: 0,
            afterburner_speed: 0,
            turn_speed: 0,
            pitch_speed: 0,
            roll_speed: 0,
            mass: 0,
            cargo_capacity: 0,
            engine_health: 100,
            hull_health: 100,
            armor: Facings::default(),
            shields: Facings::default(),
            turrets: 0,
            landing_radius: 0,
            mesh: MeshLayout::default(),
        }
    }

    pub fn can(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }

    pub fn is_capital(&self) -> bool {
        self.hull.is_capital()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PlanetSphere;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PlanetAtmosphere;

#[derive(Clone, PartialEq, Debug)]
pub struct Base {
    pub capabilities: Capabilities,
    pub faction: Faction,
    pub friendly_to_player: bool,
    pub turrets: i32,
    pub landing_radius: i32,
    pub engine_health: i32,
    pub hull_health: i32,
    pub armor: Facings,
    pub shields: Facings,
    pub mesh: MeshLayout,
    pub globe: PlanetSphere,
    pub atmosphere: PlanetAtmosphere,
}

impl Default for Base {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::empty(),
            faction: Faction::default(),
            friendly_to_player: false,
            turrets: 0,
            landing_radius: 0,
            engine_health: 100,
            hull_health: 100,
            armor: Facings::default(),
            shields: Facings::default(),
            mesh: MeshLayout::default(),
            globe: PlanetSphere,
            atmosphere: PlanetAtmosphere,
        }
    }
}

impl Base {
    pub fn can(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }
}
