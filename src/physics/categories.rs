//! Collision categories as disjoint Rapier [`Group`] bits.
//!
//! Every collidable entity belongs to exactly one [`Category`]. Each category owns one
//! single-bit [`Group`]; filters are ORs of those groups, and membership is a bitflags
//! `contains`. Rapier then only reports the pairs we care about: the glider tests against
//! stars and clouds, and stars/clouds only test against the glider.

use bevy_rapier3d::prelude::{CollisionGroups, Group};

use crate::core::components::Category;

impl Category {
    pub const ALL: [Category; 3] = [Category::Glider, Category::Star, Category::Cloud];

    /// Membership bit: Glider = 1, Star = 2, Cloud = 4.
    #[inline]
    pub const fn group(self) -> Group {
        match self {
            Category::Glider => Group::GROUP_1,
            Category::Star => Group::GROUP_2,
            Category::Cloud => Group::GROUP_3,
        }
    }

    /// Categories this one wants contact reports against.
    pub fn contact_filter(self) -> Group {
        match self {
            Category::Glider => Category::Star.group() | Category::Cloud.group(),
            Category::Star | Category::Cloud => Category::Glider.group(),
        }
    }

    /// Rapier collision groups: membership = own bit, filter = [`Category::contact_filter`].
    pub fn collision_groups(self) -> CollisionGroups {
        CollisionGroups::new(self.group(), self.contact_filter())
    }
}
