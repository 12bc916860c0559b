//! Wave completion and defeat detection.

use hecs::World;

use nova_core::components::{Structure, Threat};
use nova_core::enums::StructureKind;
use nova_core::events::GameEvent;

use super::wave_spawner::WaveProgress;

/// Fire `WaveCleared` once when the wave has nothing left to spawn and no
/// threat is still in the air.
pub fn check_wave_complete(world: &World, wave: &mut WaveProgress, events: &mut Vec<GameEvent>) {
    if !wave.in_progress || wave.remaining > 0 {
        return;
    }
    let threats_active = world.query::<&Threat>().iter().next().is_some();
    if threats_active {
        return;
    }

    wave.in_progress = false;
    events.push(GameEvent::WaveCleared { wave: wave.number });
}

/// True when every turret or every city has been destroyed.
pub fn is_defeated(world: &World) -> bool {
    let mut turrets_standing = false;
    let mut cities_standing = false;

    for (_entity, structure) in world.query::<&Structure>().iter() {
        if structure.destroyed {
            continue;
        }
        match structure.kind {
            StructureKind::Turret => turrets_standing = true,
            StructureKind::City => cities_standing = true,
        }
    }

    !turrets_standing || !cities_standing
}
