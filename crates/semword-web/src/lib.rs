pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use semword_engine::{AssetManifest, SemwordError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(
    f: impl FnOnce(&mut GameRunner) -> Result<R, SemwordError>,
) -> Result<R, JsValue> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .ok_or_else(|| JsValue::from_str("Error: Model not loaded."))?;
        f(runner).map_err(to_js)
    })
}

fn to_js(err: SemwordError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Load the model. `manifest_json` defaults to the built-in manifest.
#[wasm_bindgen]
pub fn game_init(model: &[u8], manifest_json: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let manifest = match manifest_json {
        Some(json) => AssetManifest::from_json(&json).map_err(to_js)?,
        None => AssetManifest::default(),
    };
    let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
    let runner = GameRunner::from_model_bytes(model, manifest, seed).map_err(|err| {
        log::error!("model load failed: {err}");
        to_js(err)
    })?;

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("semword: initialized");
    Ok(())
}

/// Path of the word list to fetch for a difficulty code, if configured.
#[wasm_bindgen]
pub fn game_word_list_path(mode: &str) -> Result<Option<String>, JsValue> {
    with_runner(|r| r.word_list_path(mode))
}

/// Start a round from the fetched word list text. Returns a `StartReply`.
#[wasm_bindgen]
pub fn game_start(mode: &str, word_list: &str) -> Result<String, JsValue> {
    let reply = with_runner(|r| r.start(mode, word_list))?;
    to_json(&reply)
}

/// Submit a guess or a sentinel code. Returns a `SubmitReply`.
#[wasm_bindgen]
pub fn game_submit(text: &str) -> Result<String, JsValue> {
    let reply = with_runner(|r| r.submit(text))?;
    to_json(&reply)
}

// ---- Session snapshot ----

#[wasm_bindgen]
pub fn game_session_json() -> Result<Option<String>, JsValue> {
    with_runner(|r| r.session_json())
}

#[wasm_bindgen]
pub fn game_restore_session(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.restore(json))
}

#[wasm_bindgen]
pub fn game_history_json() -> Result<String, JsValue> {
    let history = with_runner(|r| r.history())?;
    to_json(&history)
}
