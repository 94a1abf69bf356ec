//! Combat resolution math.
//!
//! Pure functions over derived stats and gear flags. Actions feed them the
//! numbers and random draws; nothing here touches state.
//!
//! - `hit_chance`: distance falloff times accuracy, or certain for fully accurate guns
//! - `jam_chance`: fixed per-shot jam probability unless the gun is unjammable
//! - `applied_damage`: attack minus defense with a minimum-damage floor
//! - `resolve_shot`: the jam-then-hit draw sequence of a ranged attack

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{applied_damage, raw_damage};
pub use hit::{hit_chance, jam_chance};
pub use result::{ShotOutcome, resolve_shot};
