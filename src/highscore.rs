//! Persisted high score
//!
//! A single best-score value stored in LocalStorage, surviving page reloads.
//! The stored value only ever goes up.

/// The high-score cell. Loaded once at startup, written only when beaten.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighScore {
    best: f32,
}

impl HighScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "highScore";

    pub fn best(&self) -> f32 {
        self.best
    }

    /// Record a finished session's score. Persists and returns true only
    /// when the score strictly beats the stored best, so a zero score can
    /// never overwrite an earlier record.
    pub fn record(&mut self, score: f32) -> bool {
        if score > self.best {
            self.best = score;
            self.save();
            true
        } else {
            false
        }
    }

    /// Load the stored best from LocalStorage; absent or malformed values
    /// read as 0 (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<f32>(raw.trim()) {
                    log::info!("Loaded high score: {best}");
                    return Self { best };
                }
                log::warn!("Malformed stored high score {raw:?}, treating as 0");
            }
        }

        log::info!("No stored high score, starting at 0");
        Self::default()
    }

    /// Save the best to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.best.to_string());
            log::info!("High score saved: {}", self.best);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self) {
        // No-op for native
    }
}
