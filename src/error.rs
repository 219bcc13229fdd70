use display_interface::DisplayError;

/// Errors surfaced by the rendering pipeline.
///
/// Nothing is retried internally; recovery policy (re-render, backoff,
/// power-cycle) belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A write to the SPI bus or a control line failed. The plane buffers are
    /// left untouched so the caller can retry the transfer.
    #[error("display interface failure: {0:?}")]
    Interface(DisplayError),

    /// The busy line stayed asserted past the deadline.
    #[error("panel unresponsive: busy line stuck high for {0} ms")]
    PanelUnresponsive(u32),

    /// A render pass was requested while another one is in flight. The
    /// request is dropped, not queued.
    #[error("render already in progress, try later")]
    RenderInProgress,

    /// A command was issued after deep sleep. Only `reset()` wakes the panel.
    #[error("panel is in deep sleep, reset required")]
    Asleep,

    /// A transfer was requested before `init()` ever ran.
    #[error("panel not initialized")]
    NotInitialized,

    /// The busy sense line could not be read.
    #[error("busy line read failed")]
    BusyPin,
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Interface(e)
    }
}
