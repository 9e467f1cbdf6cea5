//! Domain entities - catalog records and the typed views scoring reads

mod armor;
mod equipment;
mod weapon;

pub use armor::{
    ArmorProfile, ARMOR_WEIGHT_ATTRIBUTE, DAMAGE_RESISTANCE_ATTRIBUTE, DAMAGE_THRESHOLD_ATTRIBUTE,
};
pub use equipment::{
    owning_skill_label, Catalog, CatalogSection, EquipmentCategory, EquipmentRecord, RecordError,
    NAME_ATTRIBUTE,
};
pub use weapon::{
    WeaponProfile, WeaponStat, ACTION_POINT_COST_ATTRIBUTE, AOE_TAG,
    DAMAGE_PER_ACTION_POINT_ATTRIBUTE, RANGE_ATTRIBUTE, SILENT_ATTRIBUTE, SPREAD_ATTRIBUTE,
    TAGS_ATTRIBUTE,
};
