//! Toy Dive entry point
//!
//! Handles platform-specific initialization: browser wiring (canvas, timers,
//! keyboard, buttons, HUD) on wasm, a headless smoke round on native.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use toy_dive::audio::AudioManager;
    use toy_dive::consts::*;
    use toy_dive::render::CanvasRenderer;
    use toy_dive::sim::{self, Direction, RoundPhase, RoundState};
    use toy_dive::settings::Settings;

    thread_local! {
        static GAME: RefCell<Option<Game>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state and the two repeating timers
    struct Game {
        state: RoundState,
        renderer: CanvasRenderer,
        audio: AudioManager,
        settings: Settings,
        /// 60 Hz simulation callback, alive for the page lifetime
        sim_cb: Closure<dyn FnMut()>,
        /// 1 Hz countdown callback
        countdown_cb: Closure<dyn FnMut()>,
        sim_interval: Option<i32>,
        countdown_interval: Option<i32>,
    }

    impl Game {
        /// Start (or restart) a round: reset state, swap timers, flip overlays
        fn begin_round(&mut self) {
            self.state.configure(self.settings.round_config());
            sim::start_round(&mut self.state);
            self.start_timers();

            let document = document();
            set_hidden(&document, "start-btn", true);
            set_hidden(&document, "restart-btn", true);
            set_hidden(&document, "game-over", true);
            self.update_hud(&document);
            self.play_pending_cues();
        }

        /// Replace any running timers with fresh ones (idempotent restart)
        fn start_timers(&mut self) {
            let window = web_sys::window().expect("no window");
            self.stop_timers();
            self.sim_interval = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    self.sim_cb.as_ref().unchecked_ref(),
                    (1000 / TICK_HZ) as i32,
                )
                .ok();
            self.countdown_interval = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    self.countdown_cb.as_ref().unchecked_ref(),
                    1000,
                )
                .ok();
        }

        fn stop_timers(&mut self) {
            let window = web_sys::window().expect("no window");
            if let Some(handle) = self.sim_interval.take() {
                window.clear_interval_with_handle(handle);
            }
            if let Some(handle) = self.countdown_interval.take() {
                window.clear_interval_with_handle(handle);
            }
        }

        /// One 60 Hz frame: advance toys, play cues, redraw
        fn frame(&mut self) {
            sim::advance_frame(&mut self.state);
            self.play_pending_cues();
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
            self.update_hud(&document());
        }

        /// One 1 Hz countdown tick; ends the round at zero
        fn second(&mut self) {
            sim::advance_second(&mut self.state);
            self.play_pending_cues();
            let document = document();
            self.update_hud(&document);

            if self.state.phase == RoundPhase::Ended {
                self.stop_timers();
                self.show_game_over(&document);
            }
        }

        fn play_pending_cues(&mut self) {
            for cue in self.state.take_cues() {
                self.audio.play(cue);
            }
        }

        fn update_hud(&self, document: &Document) {
            set_text(document, "score-display", &format!("Score: {}", self.state.score));
            set_text(
                document,
                "timer-display",
                &format!("Time Left: {}", self.state.time_remaining),
            );
        }

        fn show_game_over(&self, document: &Document) {
            set_text(
                document,
                "final-score",
                &format!("Your score is: {}", self.state.score),
            );
            set_text(document, "feedback-message", self.state.feedback().message());
            set_hidden(document, "game-over", false);
            set_hidden(document, "restart-btn", false);
        }

        /// Immediate key handling, interleaved with ticks by the event queue
        fn handle_key(&mut self, key: &str) {
            match key {
                "ArrowUp" | "w" | "W" => sim::move_diver(&mut self.state, Direction::Up),
                "ArrowDown" | "s" | "S" => sim::move_diver(&mut self.state, Direction::Down),
                "ArrowLeft" | "a" | "A" => sim::move_diver(&mut self.state, Direction::Left),
                "ArrowRight" | "d" | "D" => sim::move_diver(&mut self.state, Direction::Right),
                " " => {
                    let hits = sim::attempt_collect(&mut self.state);
                    if hits > 0 {
                        log::info!("Collected {} (score {})", hits, self.state.score);
                    }
                    self.play_pending_cues();
                }
                _ => return,
            }
            // Redraw right away so movement feels immediate
            if let Err(e) = self.renderer.render(&self.state) {
                log::warn!("Render error: {:?}", e);
            }
            self.update_hud(&document());
        }
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    /// Plain string replacement on a text readout
    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Show/hide an element by swapping the "hidden" class
    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    fn with_game(f: impl FnOnce(&mut Game)) {
        GAME.with(|game| {
            if let Some(game) = game.borrow_mut().as_mut() {
                f(game);
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Toy Dive starting...");

        let document = document();

        // Startup preconditions: canvas and diver sprite must be in the page
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(PLAYFIELD_WIDTH as u32);
        canvas.set_height(PLAYFIELD_HEIGHT as u32);

        let diver_image: HtmlImageElement = document
            .get_element_by_id("diver-image")
            .expect("no diver image")
            .dyn_into()
            .expect("not an image");

        let renderer = CanvasRenderer::new(canvas, diver_image).expect("canvas renderer");

        let settings = Settings::load();
        let mut audio = AudioManager::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_muted(settings.muted);

        let seed = js_sys::Date::now() as u64;
        let mut state = RoundState::new(seed);
        state.configure(settings.round_config());

        let game = Game {
            state,
            renderer,
            audio,
            settings,
            sim_cb: Closure::new(|| with_game(Game::frame)),
            countdown_cb: Closure::new(|| with_game(Game::second)),
            sim_interval: None,
            countdown_interval: None,
        };
        GAME.with(|g| g.replace(Some(game)));

        setup_keyboard();
        setup_buttons(&document);

        log::info!("Toy Dive ready (seed {})", seed);
    }

    fn setup_keyboard() {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            with_game(|game| game.handle_key(&event.key()));
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document) {
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    with_game(Game::begin_round);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Set the round duration in seconds; accepted only between rounds
    #[wasm_bindgen]
    pub fn set_round_duration(secs: u32) -> bool {
        let mut accepted = false;
        with_game(|game| {
            game.settings.round_secs = secs.max(1);
            accepted = game.state.configure(game.settings.round_config());
            if accepted {
                game.settings.save();
                game.update_hud(&document());
            }
        });
        accepted
    }

    /// Set the on-screen toy count; accepted only between rounds
    #[wasm_bindgen]
    pub fn set_toy_count(count: u32) -> bool {
        let mut accepted = false;
        with_game(|game| {
            game.settings.max_toys = count.max(1) as usize;
            accepted = game.state.configure(game.settings.round_config());
            if accepted {
                game.settings.save();
            }
        });
        accepted
    }

    /// Mute or unmute all cues
    #[wasm_bindgen]
    pub fn set_muted(muted: bool) {
        with_game(|game| {
            game.settings.muted = muted;
            game.audio.set_muted(muted);
            game.settings.save();
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Toy Dive (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Headless smoke round: a simple chaser plays a short round.
    run_demo_round();
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo_round() {
    use toy_dive::consts::TICK_HZ;
    use toy_dive::sim::{self, Cue, Direction, RoundConfig, RoundPhase, RoundState};

    let mut state = RoundState::new(0xD1CE);
    state.configure(RoundConfig {
        round_secs: 15,
        max_toys: 5,
    });
    sim::start_round(&mut state);

    let mut misses = 0u32;
    while state.phase == RoundPhase::Running {
        for _ in 0..TICK_HZ {
            sim::advance_frame(&mut state);

            // Chase the toy nearest to the diver
            let center = state.diver.center();
            let target = state
                .toys
                .iter()
                .map(|t| t.pos)
                .min_by(|a, b| {
                    a.distance(center)
                        .partial_cmp(&b.distance(center))
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            if let Some(target) = target {
                let delta = target - center;
                let dir = if delta.x.abs() > delta.y.abs() {
                    if delta.x < 0.0 { Direction::Left } else { Direction::Right }
                } else if delta.y < 0.0 {
                    Direction::Up
                } else {
                    Direction::Down
                };
                sim::move_diver(&mut state, dir);
            }
            sim::attempt_collect(&mut state);

            misses += state
                .take_cues()
                .iter()
                .filter(|c| **c == Cue::ToyMissed)
                .count() as u32;
        }
        sim::advance_second(&mut state);
    }

    println!(
        "Final score: {} ({} missed) - {}",
        state.score,
        misses,
        state.feedback().message()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
