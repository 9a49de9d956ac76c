use hecs::World;

use crate::{Control, InputState, PaddleIntent};

/// Copy the player's up/down state onto every manually controlled paddle
pub fn ingest_input(world: &mut World, input: &InputState) {
    let dir = input.paddle_dir();
    for (_entity, (intent, control)) in world.query_mut::<(&mut PaddleIntent, &Control)>() {
        if *control == Control::Manual {
            intent.dir = dir;
        }
    }
}
