use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::{Pack, PackKind};

/// Fixed pack catalog: duration and tax-exclusive fee per pack.
static PACK_CATALOG: Lazy<HashMap<PackKind, Pack>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(
        PackKind::Hours1,
        Pack {
            kind: PackKind::Hours1,
            duration_seconds: 3600,
            fee_excl: 500,
        },
    );

    m.insert(
        PackKind::Hours3,
        Pack {
            kind: PackKind::Hours3,
            duration_seconds: 10800,
            fee_excl: 800,
        },
    );

    m.insert(
        PackKind::Hours5,
        Pack {
            kind: PackKind::Hours5,
            duration_seconds: 18000,
            fee_excl: 1500,
        },
    );

    m.insert(
        PackKind::Hours8,
        Pack {
            kind: PackKind::Hours8,
            duration_seconds: 28800,
            fee_excl: 1900,
        },
    );

    m
});

/// All catalog packs, shortest first
pub fn catalog() -> Vec<Pack> {
    let mut packs: Vec<Pack> = PACK_CATALOG.values().copied().collect();
    packs.sort_by_key(|p| p.duration_seconds);
    packs
}

/// Look up a catalog pack by kind
pub fn get_pack(kind: PackKind) -> Option<Pack> {
    PACK_CATALOG.get(&kind).copied()
}

/// Look up a catalog pack by its short name ("1h", "3h", "5h", "8h")
pub fn find_pack(name: &str) -> Option<Pack> {
    PACK_CATALOG
        .values()
        .find(|pack| pack.kind.label().eq_ignore_ascii_case(name))
        .copied()
}
