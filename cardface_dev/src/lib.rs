// Copyright 2026 the Cardface Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Cardface Dev
//!
//! This crate provides sample cards for developing Cardface. Each sample exercises a
//! different part of the frame: border colors, the stat box, explicit line breaks in rules
//! text, and text long enough to shrink.

use cardface::CardEntry;

/// A red instant with short rules text.
pub fn bolt() -> CardEntry {
    CardEntry::new("Bolt", "R", "Instant", "Deal 3 damage.").with_main_type("Instant")
}

/// A two-color creature with power and toughness.
pub fn hybrid_knight() -> CardEntry {
    CardEntry::new(
        "Hybrid Knight",
        "1W/U",
        "Creature - Human Knight",
        "Flying\nWhen Hybrid Knight enters, draw a card.",
    )
    .with_main_type("Creature")
    .with_power_toughness("2", "2")
}

/// A mono-black planeswalker with several loyalty abilities on separate lines.
pub fn night_scholar() -> CardEntry {
    CardEntry::new(
        "Night Scholar",
        "2BB",
        "Planeswalker - Scholar",
        "+1: Each opponent loses 1 life.\n-2: Return target creature card from your graveyard to your hand.\n-7: You get an emblem with \"Creatures you control get +2/+2.\"",
    )
    .with_main_type("Planeswalker")
    .with_loyalty("4")
}

/// A colorless artifact.
pub fn iron_idol() -> CardEntry {
    CardEntry::new("Iron Idol", "3", "Artifact", "{T}: Add {C}.").with_main_type("Artifact")
}

/// A green sorcery with a long paragraph of rules text.
pub fn verdant_surge() -> CardEntry {
    CardEntry::new(
        "Verdant Surge",
        "3GG",
        "Sorcery",
        "Search your library for up to two basic land cards, put them onto the battlefield tapped, then shuffle. Creatures you control get +1/+1 and gain trample until end of turn. If you control seven or more lands, draw a card for each creature you control with power 4 or greater.",
    )
    .with_main_type("Sorcery")
}

/// A land without cost or rules text, named the way line-based input leaves it.
pub fn quiet_plains() -> CardEntry {
    CardEntry::new("Quiet Plains\n", "", "Land - Plains", "").with_main_type("Land")
}

/// Every sample, in a stable order.
pub fn samples() -> Vec<CardEntry> {
    vec![
        bolt(),
        hybrid_knight(),
        night_scholar(),
        iron_idol(),
        verdant_surge(),
        quiet_plains(),
    ]
}
