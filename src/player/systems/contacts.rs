//! Player domain: routing avian collision messages to controller callbacks.

use std::collections::HashMap;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::player::systems::PlayerHooks;
use crate::player::{
    ContactRef, ContactTag, FixtureKind, PlayerController, PlayerFixture, WallSide,
};

/// Which controller callback family a contact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRoute {
    General,
    Wall(WallSide),
    Attack,
}

/// Untagged bodies are never routed. The foot only sees terrain, the main
/// body only sees goal and signpost zones.
pub fn route_contact(fixture: FixtureKind, tag: Option<ContactTag>) -> Option<ContactRoute> {
    let tag = tag?;

    match (fixture, tag) {
        (FixtureKind::Foot, ContactTag::Terrain(_)) => Some(ContactRoute::General),
        (FixtureKind::Body, ContactTag::Goal | ContactTag::Signpost) => {
            Some(ContactRoute::General)
        }
        (FixtureKind::LeftWall, ContactTag::Terrain(_)) => {
            Some(ContactRoute::Wall(WallSide::Left))
        }
        (FixtureKind::RightWall, ContactTag::Terrain(_)) => {
            Some(ContactRoute::Wall(WallSide::Right))
        }
        (FixtureKind::Attack, _) => Some(ContactRoute::Attack),
        _ => None,
    }
}

struct RoutedContact {
    owner: Entity,
    route: ContactRoute,
    other: ContactRef,
}

fn resolve_contact(
    fixture: Entity,
    other: Entity,
    tag: Option<ContactTag>,
    fixtures: &Query<&PlayerFixture>,
) -> Option<RoutedContact> {
    let fixture = fixtures.get(fixture).ok()?;
    let route = route_contact(fixture.kind, tag)?;

    Some(RoutedContact {
        owner: fixture.owner,
        route,
        other: ContactRef::new(other, tag?),
    })
}

/// Tags of routed contacts, keyed by (fixture, other). A despawned body has
/// lost its `ContactTag` by the time its `CollisionEnd` is read, so ends are
/// routed from here.
type ContactTagCache = HashMap<(Entity, Entity), ContactTag>;

pub(crate) fn dispatch_player_contacts(
    mut collision_starts: MessageReader<CollisionStart>,
    mut collision_ends: MessageReader<CollisionEnd>,
    fixtures: Query<&PlayerFixture>,
    tags: Query<&ContactTag>,
    mut controllers: Query<&mut PlayerController>,
    mut hooks: PlayerHooks,
    mut tag_cache: Local<ContactTagCache>,
) {
    for event in collision_starts.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (fixture, other) in pairs {
            let tag = tags.get(other).ok().copied();
            let Some(contact) = resolve_contact(fixture, other, tag, &fixtures) else {
                continue;
            };
            tag_cache.insert((fixture, other), contact.other.tag);

            let Ok(mut controller) = controllers.get_mut(contact.owner) else {
                continue;
            };

            let other = Some(&contact.other);
            match contact.route {
                ContactRoute::General => controller.on_begin_contact(other, &mut hooks),
                ContactRoute::Wall(side) => controller.on_begin_wall_contact(other, side),
                ContactRoute::Attack => controller.on_begin_attack_contact(other, &mut hooks),
            }
        }
    }

    for event in collision_ends.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (fixture, other) in pairs {
            let tag = tag_cache
                .remove(&(fixture, other))
                .or_else(|| tags.get(other).ok().copied());
            let Some(contact) = resolve_contact(fixture, other, tag, &fixtures) else {
                continue;
            };
            let Ok(mut controller) = controllers.get_mut(contact.owner) else {
                continue;
            };

            let other = Some(&contact.other);
            match contact.route {
                ContactRoute::General => controller.on_end_contact(other, &mut hooks),
                ContactRoute::Wall(side) => controller.on_end_wall_contact(other, side),
                ContactRoute::Attack => {}
            }
        }
    }

    // Ends from despawned fixtures are dropped above, so prune their entries.
    tag_cache.retain(|(fixture, _), _| fixtures.contains(*fixture));
}
