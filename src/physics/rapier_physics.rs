use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::interaction::contact::{ContactEvent, ContactHandlingSet};

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier & feed contact reports to gameplay

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let debug_render = app
            .world()
            .get_resource::<GameConfig>()
            .map(|c| c.rapier_debug)
            .unwrap_or(false);
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
            .add_event::<ContactEvent>()
            .add_systems(Update, configure_gravity)
            .add_systems(
                Update,
                bridge_collision_events
                    .in_set(PostPhysicsAdjustSet)
                    .before(ContactHandlingSet),
            );
        if debug_render {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

// Glider and clouds are moved by direct transform edits; nothing here should fall.
fn configure_gravity(mut q: Query<&mut RapierConfiguration, Added<RapierConfiguration>>) {
    for mut rapier_cfg in &mut q {
        rapier_cfg.gravity = Vect::ZERO;
    }
}

/// Forward Rapier "started touching" reports as engine-agnostic [`ContactEvent`]s.
/// Stopped events carry no game meaning and are dropped.
pub fn bridge_collision_events(
    mut collisions: EventReader<CollisionEvent>,
    mut contacts: EventWriter<ContactEvent>,
) {
    for ev in collisions.read() {
        if let CollisionEvent::Started(a, b, _flags) = ev {
            contacts.write(ContactEvent { a: *a, b: *b });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

    #[derive(Resource, Default)]
    struct Seen(Vec<(Entity, Entity)>);

    fn record(mut ev: EventReader<ContactEvent>, mut seen: ResMut<Seen>) {
        for c in ev.read() {
            seen.0.push((c.a, c.b));
        }
    }

    #[test]
    fn started_collisions_become_contact_events() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_event::<CollisionEvent>();
        app.add_event::<ContactEvent>();
        app.init_resource::<Seen>();
        app.add_systems(Update, (bridge_collision_events, record).chain());

        let a = app.world_mut().spawn_empty().id();
        let b = app.world_mut().spawn_empty().id();
        app.world_mut()
            .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::SENSOR));
        app.world_mut()
            .send_event(CollisionEvent::Stopped(a, b, CollisionEventFlags::SENSOR));
        app.update();

        assert_eq!(app.world().resource::<Seen>().0, vec![(a, b)]);
    }
}
