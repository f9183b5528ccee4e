use std::fmt;

/// Allegiance of a ship or base.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Faction {
    TerranConfederation,
    Kilrathi,
    KilrathiDefectors,
    Landreich,
    Steltek,
    Firrekkans,
    Retros,
    Pirates,
    Merchants,
    Mercenaries,
    Mandarins,
    Privateers,
    BorderWorlds,
    #[default]
    Unknown,
}

impl Faction {
    pub const ALL: [Faction; 14] = [
        Faction::TerranConfederation,
        Faction::Kilrathi,
        Faction::KilrathiDefectors,
        Faction::Landreich,
        Faction::Steltek,
        Faction::Firrekkans,
        Faction::Retros,
        Faction::Pirates,
        Faction::Merchants,
        Faction::Mercenaries,
        Faction::Mandarins,
        Faction::Privateers,
        Faction::BorderWorlds,
        Faction::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Faction::TerranConfederation => "Terran Confederation",
            Faction::Kilrathi => "Kilrathi",
            Faction::KilrathiDefectors => "Kilrathi Defectors",
            Faction::Landreich => "Landreich",
            Faction::Steltek => "Steltek",
            Faction::Firrekkans => "Firrekkans",
            Faction::Retros => "Retros",
            Faction::Pirates => "Pirates",
            Faction::Merchants => "Merchants",
            Faction::Mercenaries => "Mercenaries",
            Faction::Mandarins => "Mandarins",
            Faction::Privateers => "Privateers",
            Faction::BorderWorlds => "Border Worlds",
            Faction::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
