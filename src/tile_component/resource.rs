use std::fmt;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    // Bonus
    Bananas,
    Cattle,
    Copper,
    Crabs,
    Deer,
    Fish,
    Maize,
    Rice,
    Sheep,
    Stone,
    Wheat,
    // Luxury
    Amber,
    Cinnamon,
    Citrus,
    Cloves,
    Cocoa,
    Coffee,
    Cosmetics,
    Cotton,
    Dyes,
    Diamonds,
    Furs,
    Gypsum,
    Honey,
    Incense,
    Ivory,
    Jade,
    Jeans,
    Marble,
    Mercury,
    Olives,
    Pearls,
    Perfume,
    Salt,
    Silk,
    Silver,
    Spices,
    Sugar,
    Tea,
    Tobacco,
    Toys,
    Truffles,
    Turtles,
    Whales,
    Wine,
    // Strategic
    Horses,
    Iron,
    Niter,
    Coal,
    Oil,
    Aluminum,
    Uranium,
    // Artifact
    AntiquitySite,
    Shipwreck,
}

/// The category a [`Resource`] belongs to.
#[derive(Enum, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Bonus,
    Luxury,
    Strategic,
    Artifact,
}

impl Resource {
    pub fn name(&self) -> &str {
        match self {
            Resource::Bananas => "bananas",
            Resource::Cattle => "cattle",
            Resource::Copper => "copper",
            Resource::Crabs => "crabs",
            Resource::Deer => "deer",
            Resource::Fish => "fish",
            Resource::Maize => "maize",
            Resource::Rice => "rice",
            Resource::Sheep => "sheep",
            Resource::Stone => "stone",
            Resource::Wheat => "wheat",
            Resource::Amber => "amber",
            Resource::Cinnamon => "cinnamon",
            Resource::Citrus => "citrus",
            Resource::Cloves => "cloves",
            Resource::Cocoa => "cocoa",
            Resource::Coffee => "coffee",
            Resource::Cosmetics => "cosmetics",
            Resource::Cotton => "cotton",
            Resource::Dyes => "dyes",
            Resource::Diamonds => "diamonds",
            Resource::Furs => "furs",
            Resource::Gypsum => "gypsum",
            Resource::Honey => "honey",
            Resource::Incense => "incense",
            Resource::Ivory => "ivory",
            Resource::Jade => "jade",
            Resource::Jeans => "jeans",
            Resource::Marble => "marble",
            Resource::Mercury => "mercury",
            Resource::Olives => "olives",
            Resource::Pearls => "pearls",
            Resource::Perfume => "perfume",
            Resource::Salt => "salt",
            Resource::Silk => "silk",
            Resource::Silver => "silver",
            Resource::Spices => "spices",
            Resource::Sugar => "sugar",
            Resource::Tea => "tea",
            Resource::Tobacco => "tobacco",
            Resource::Toys => "toys",
            Resource::Truffles => "truffles",
            Resource::Turtles => "turtles",
            Resource::Whales => "whales",
            Resource::Wine => "wine",
            Resource::Horses => "horses",
            Resource::Iron => "iron",
            Resource::Niter => "niter",
            Resource::Coal => "coal",
            Resource::Oil => "oil",
            Resource::Aluminum => "aluminum",
            Resource::Uranium => "uranium",
            Resource::AntiquitySite => "antiquity_site",
            Resource::Shipwreck => "shipwreck",
        }
    }

    /// Static resource to category table.
    pub fn resource_type(&self) -> ResourceType {
        use Resource::*;
        match self {
            Bananas | Cattle | Copper | Crabs | Deer | Fish | Maize | Rice | Sheep | Stone
            | Wheat => ResourceType::Bonus,
            Amber | Cinnamon | Citrus | Cloves | Cocoa | Coffee | Cosmetics | Cotton | Dyes
            | Diamonds | Furs | Gypsum | Honey | Incense | Ivory | Jade | Jeans | Marble
            | Mercury | Olives | Pearls | Perfume | Salt | Silk | Silver | Spices | Sugar | Tea
            | Tobacco | Toys | Truffles | Turtles | Whales | Wine => ResourceType::Luxury,
            Horses | Iron | Niter | Coal | Oil | Aluminum | Uranium => ResourceType::Strategic,
            AntiquitySite | Shipwreck => ResourceType::Artifact,
        }
    }
}

impl ResourceType {
    pub fn name(&self) -> &str {
        match self {
            ResourceType::Bonus => "bonus",
            ResourceType::Luxury => "luxury",
            ResourceType::Strategic => "strategic",
            ResourceType::Artifact => "artifact",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
