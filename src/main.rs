//! Block Hopper entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use glam::Vec2;

    use block_hopper::consts::*;
    use block_hopper::input;
    use block_hopper::renderer::{CanvasSurface, scene};
    use block_hopper::sim::Player;

    /// Everything the frame and input closures share.
    struct Game {
        player: Player,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Block Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH);
        canvas.set_height(CANVAS_HEIGHT);

        let ctx = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into::<web_sys::CanvasRenderingContext2d>()
            .expect("not a 2d context");

        let player = Player::new(
            Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
        );

        let game = Rc::new(RefCell::new(Game {
            player,
            surface: CanvasSurface::new(ctx),
        }));

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Block Hopper running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key presses become jump/movement intents on the player.
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(intent) = input::intent_for_keydown(&event.key()) {
                    intent.apply(&mut game.borrow_mut().player);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Releasing a movement key stops horizontal motion.
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(intent) = input::intent_for_keyup(&event.key()) {
                    intent.apply(&mut game.borrow_mut().player);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One animation frame: a single fixed simulation step, then the paint.
    fn frame(game: Rc<RefCell<Game>>) {
        {
            let mut guard = game.borrow_mut();
            let g = &mut *guard;

            g.player.update(GROUND_LEVEL);
            scene::render(&mut g.surface, &g.player);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;

    use block_hopper::consts::*;
    use block_hopper::sim::Player;

    env_logger::init();
    log::info!("Block Hopper (native) starting...");
    log::info!("Native mode is a headless replay - run with `trunk serve` for the browser version");

    let mut player = Player::new(
        Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
    );

    // Scripted run: hold right from the start, jump at frame 30, release at
    // frame 120, then coast to rest.
    for frame in 0..180u32 {
        if frame == 0 {
            player.move_right();
        }
        if frame == 30 {
            player.jump();
        }
        if frame == 120 {
            player.stop_moving();
        }
        player.update(GROUND_LEVEL);
    }

    let pos = player.position();
    let vel = player.velocity();
    println!(
        "{{\"x\":{},\"y\":{},\"vx\":{},\"vy\":{},\"airborne\":{}}}",
        pos.x,
        pos.y,
        vel.x,
        vel.y,
        player.airborne()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
