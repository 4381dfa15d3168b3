//! Contact handling: turns glider/star touches into score.
//!
//! The physics engine reports touching pairs in no particular order, so all category
//! dispatch goes through [`resolve_contact`], which checks both orderings in one place.
//! Glider/cloud contacts are reported (the glider's filter includes clouds) but resolve to
//! [`ContactOutcome::CloudPass`], which deliberately does nothing.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::core::components::Category;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::session::Session;

/// Two entities whose bodies started touching this step. Either may come first.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactEvent {
    pub a: Entity,
    pub b: Entity,
}

/// Emitted once per collected star, after the score has been updated.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct StarCollected {
    pub star: Entity,
    pub position: Vec3,
    pub score: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Glider touched this star: remove it and reward the player.
    CollectStar(Entity),
    /// Glider flew through a cloud. Detected, no game effect.
    CloudPass,
    Ignored,
}

/// Symmetric category-pair lookup for one contact.
pub fn resolve_contact(a: (Entity, Category), b: (Entity, Category)) -> ContactOutcome {
    use Category::*;
    match (a.1, b.1) {
        (Glider, Star) => ContactOutcome::CollectStar(b.0),
        (Star, Glider) => ContactOutcome::CollectStar(a.0),
        (Glider, Cloud) | (Cloud, Glider) => ContactOutcome::CloudPass,
        _ => ContactOutcome::Ignored,
    }
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ContactHandlingSet;

pub struct ContactPlugin;

impl Plugin for ContactPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ContactEvent>()
            .add_event::<StarCollected>()
            .configure_sets(Update, ContactHandlingSet.in_set(PostPhysicsAdjustSet))
            .add_systems(Update, handle_contacts.in_set(ContactHandlingSet));
    }
}

/// Apply every pending contact. Entities that are already gone (collected in an earlier
/// frame) fail the query and the event is dropped; a star hit twice in one batch is only
/// collected once because despawns are deferred until the commands flush.
pub fn handle_contacts(
    mut commands: Commands,
    mut contacts: EventReader<ContactEvent>,
    q: Query<(&Category, Option<&Transform>)>,
    mut session: Option<ResMut<Session>>,
    mut collected_ev: EventWriter<StarCollected>,
) {
    let Some(session) = session.as_deref_mut() else {
        contacts.clear();
        return;
    };
    let mut collected: HashSet<Entity> = HashSet::new();
    for ev in contacts.read() {
        let (Ok((cat_a, _)), Ok((cat_b, _))) = (q.get(ev.a), q.get(ev.b)) else {
            debug!(target: "contact", "stale contact {:?} <-> {:?} ignored", ev.a, ev.b);
            continue;
        };
        match resolve_contact((ev.a, *cat_a), (ev.b, *cat_b)) {
            ContactOutcome::CollectStar(star) => {
                if !collected.insert(star) {
                    continue;
                }
                let position = q
                    .get(star)
                    .ok()
                    .and_then(|(_, tf)| tf.map(|t| t.translation))
                    .unwrap_or_default();
                commands.entity(star).despawn();
                let score = session.collect_star();
                info!(target: "score", "Star {:?} collected -> {}", star, session.label());
                collected_ev.write(StarCollected {
                    star,
                    position,
                    score,
                });
            }
            ContactOutcome::CloudPass => {
                debug!(target: "contact", "glider passed through cloud");
            }
            ContactOutcome::Ignored => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> (Entity, Entity) {
        (Entity::from_raw(1), Entity::from_raw(2))
    }

    #[test]
    fn glider_star_resolves_in_both_orders() {
        let (g, s) = ids();
        assert_eq!(
            resolve_contact((g, Category::Glider), (s, Category::Star)),
            ContactOutcome::CollectStar(s)
        );
        assert_eq!(
            resolve_contact((s, Category::Star), (g, Category::Glider)),
            ContactOutcome::CollectStar(s)
        );
    }

    #[test]
    fn other_pairs_have_no_effect() {
        let (a, b) = ids();
        assert_eq!(
            resolve_contact((a, Category::Glider), (b, Category::Cloud)),
            ContactOutcome::CloudPass
        );
        assert_eq!(
            resolve_contact((a, Category::Cloud), (b, Category::Glider)),
            ContactOutcome::CloudPass
        );
        for (x, y) in [
            (Category::Cloud, Category::Star),
            (Category::Star, Category::Cloud),
            (Category::Cloud, Category::Cloud),
            (Category::Star, Category::Star),
            (Category::Glider, Category::Glider),
        ] {
            assert_eq!(resolve_contact((a, x), (b, y)), ContactOutcome::Ignored);
        }
    }

    #[test]
    fn plugin_registers_events() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(ContactPlugin);
        assert!(app.world().contains_resource::<Events<ContactEvent>>());
        assert!(app.world().contains_resource::<Events<StarCollected>>());
    }
}
