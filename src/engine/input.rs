use std::collections::HashSet;

use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::EventPump;

/// A key edge observed this frame, in arrival order.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    KeyPressed(Scancode),
    KeyReleased(Scancode),
}

/// Drained from the SDL event pump once per frame. `keys` is the live
/// held set; `events` carries this frame's edges in order so downstream
/// consumers see presses and releases distinctly. OS key repeat is
/// filtered out: a held key produces exactly one press edge.
pub struct InputState {
    pub keys: HashSet<Scancode>,
    pub events: Vec<InputEvent>,
    quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            events: Vec::new(),
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    self.keys.insert(sc);
                    self.events.push(InputEvent::KeyPressed(sc));
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                    self.events.push(InputEvent::KeyReleased(sc));
                }
                _ => {}
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
