//! Application messages

/// Application messages
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // ============ Gauge ============
    /// Score changed from the slider (not persisted until release)
    ScoreChanged(f32),
    /// Slider released, persist the score
    ScoreReleased,
    /// Tier preset button pressed (sets and persists)
    PresetSelected(f32),
    /// Delayed mount task fired, spring the readout in
    RevealReadout,
    /// Animation frame tick
    AnimationTick,

    // ============ Settings ============
    /// Update dark mode
    DarkModeToggled(bool),
    /// Update power saving mode
    PowerSavingToggled(bool),
}
