//! Browser boundary for the game session
//!
//! The page drives the session from two sides: its `requestAnimationFrame`
//! loop calls [`GameHandle::tick`] once per frame and reads
//! [`GameHandle::state_json`] back for drawing, while the classifier pushes
//! labels through [`GameHandle::push_label`]. The one-second countdown is
//! owned here as a `setInterval`; the session only ever sees it through the
//! `Countdown` handle, so a stale interval can never touch a restarted
//! session.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::sim::{self, Countdown, PcgSpawn, Session, StartOptions};

struct Driver {
    session: Session,
    spawn: PcgSpawn,
    countdown: Option<Countdown>,
    interval_id: Option<i32>,
}

impl Driver {
    fn clear_interval(&mut self) {
        if let Some(id) = self.interval_id.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
        self.countdown = None;
    }
}

/// JS-facing handle owning one session and its countdown timer
#[wasm_bindgen]
pub struct GameHandle {
    inner: Rc<RefCell<Driver>>,
}

#[wasm_bindgen]
impl GameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GameHandle {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let seed = js_sys::Date::now() as u64;
        GameHandle {
            inner: Rc::new(RefCell::new(Driver {
                session: Session::new(),
                spawn: PcgSpawn::new(seed),
                countdown: None,
                interval_id: None,
            })),
        }
    }

    /// Start (or restart) the session; arms the one-second countdown
    pub fn start(&mut self, time_limit: Option<u32>) {
        let mut driver = self.inner.borrow_mut();
        driver.clear_interval();

        let options = match time_limit {
            Some(secs) => StartOptions { time_limit: secs },
            None => StartOptions::default(),
        };
        driver.countdown = Some(driver.session.start(options));

        let inner = self.inner.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            let mut driver = inner.borrow_mut();
            if let Some(countdown) = driver.countdown.take() {
                driver.session.second_elapsed(&countdown);
                if driver.session.active {
                    driver.countdown = Some(countdown);
                } else {
                    // Time ran out (or a hazard beat us to it); stand down
                    driver.clear_interval();
                }
            }
        });

        if let Some(window) = web_sys::window() {
            match window.set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                1000,
            ) {
                Ok(id) => driver.interval_id = Some(id),
                Err(err) => log::error!("failed to arm countdown: {err:?}"),
            }
        }
        callback.forget();
    }

    /// Halt the session; the countdown is torn down with it
    pub fn stop(&mut self) {
        let mut driver = self.inner.borrow_mut();
        driver.clear_interval();
        driver.session.stop();
    }

    /// One frame of spawn/fall/catch resolution; call from the render loop
    pub fn tick(&mut self) {
        let mut driver = self.inner.borrow_mut();
        let Driver { session, spawn, .. } = &mut *driver;
        sim::tick(session, spawn);
        if !session.active {
            driver.clear_interval();
        }
    }

    /// Feed a classifier label; unrecognized labels are ignored
    pub fn push_label(&mut self, label: &str) {
        self.inner.borrow_mut().session.on_position_command(label);
    }

    /// Register a JS callback invoked once with (score, level) on termination
    pub fn set_end_callback(&mut self, callback: &Function) {
        let callback = callback.clone();
        self.inner
            .borrow_mut()
            .session
            .set_end_listener(move |end| {
                let _ = callback.call2(
                    &JsValue::NULL,
                    &JsValue::from_f64(end.score as f64),
                    &JsValue::from(end.level),
                );
            });
    }

    /// Full session snapshot for the rendering collaborator
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.inner.borrow().session).unwrap_or_default()
    }

    pub fn score(&self) -> f64 {
        self.inner.borrow().session.score as f64
    }

    pub fn level(&self) -> u32 {
        self.inner.borrow().session.level
    }

    pub fn remaining_secs(&self) -> u32 {
        self.inner.borrow().session.remaining_secs
    }

    pub fn active(&self) -> bool {
        self.inner.borrow().session.active
    }

    pub fn catcher(&self) -> String {
        self.inner.borrow().session.catcher.as_str().to_string()
    }
}

impl Default for GameHandle {
    fn default() -> Self {
        Self::new()
    }
}
