//! Image source abstraction: where decoded pixel buffers come from.
//!
//! The analysis core never deals with decoding surfaces or load events
//! directly. A source exposes exactly three things: its dimensions, a
//! one-shot readiness notification, and a decoded RGBA buffer. The
//! notification fires at most once, and fires synchronously when the
//! source is already ready at subscription time.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::types::{AnalysisError, Dimensions, RgbaImage};

/// One-shot readiness notification handed out by an [`ImageSource`].
///
/// Backed by a single-use channel: the source keeps the sending half and
/// fires it when its pixel data becomes available.
#[derive(Debug)]
pub struct ReadySignal {
    receiver: Receiver<()>,
}

impl ReadySignal {
    /// Create a pending signal and the sender that fires it.
    #[must_use]
    pub fn pending() -> (Sender<()>, Self) {
        let (sender, receiver) = mpsc::channel();
        (sender, Self { receiver })
    }

    /// Create a signal that is already satisfied.
    ///
    /// Waiting on it returns immediately.
    #[must_use]
    pub fn ready() -> Self {
        let (sender, signal) = Self::pending();
        // The receiver is alive, so the send cannot fail.
        let _ = sender.send(());
        signal
    }

    /// Block until the signal fires.
    ///
    /// Returns immediately when the source was already ready at
    /// subscription time.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::AttachmentFailure`] if the sending half
    /// was dropped without ever firing: the source went away and can no
    /// longer become ready.
    pub fn wait(self) -> Result<(), AnalysisError> {
        self.receiver
            .recv()
            .map_err(|_| AnalysisError::AttachmentFailure)
    }
}

/// An image resource the analyzer can attach to.
///
/// A source supports exactly one readiness subscription, delivered at
/// most once. Implementations for deferred sources should refuse a
/// second subscription with [`AnalysisError::AttachmentFailure`].
pub trait ImageSource {
    /// Image dimensions in pixels.
    fn dimensions(&self) -> Dimensions;

    /// Subscribe to the one-shot readiness notification.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::AttachmentFailure`] when the source
    /// exposes no usable notification mechanism or the subscription was
    /// already claimed.
    fn subscribe_ready(&mut self) -> Result<ReadySignal, AnalysisError>;

    /// Obtain the decoded RGBA pixel buffer.
    ///
    /// The buffer is row-major, top-left origin, `4 * width * height`
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotReady`] when called before the
    /// readiness notification has fired.
    fn pixel_buffer(&self) -> Result<RgbaImage, AnalysisError>;
}

/// An always-ready source over an already-decoded image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: RgbaImage,
}

impl DecodedImage {
    /// Wrap an existing RGBA buffer.
    #[must_use]
    pub const fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode raw image bytes (PNG, JPEG, BMP, WebP).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::EmptyInput`] if `bytes` is empty and
    /// [`AnalysisError::ImageDecode`] if the format is unrecognized or
    /// the data is corrupt.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AnalysisError> {
        if bytes.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        let image = image::load_from_memory(bytes)?;
        Ok(Self::new(image.to_rgba8()))
    }
}

impl ImageSource for DecodedImage {
    fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.image)
    }

    fn subscribe_ready(&mut self) -> Result<ReadySignal, AnalysisError> {
        Ok(ReadySignal::ready())
    }

    fn pixel_buffer(&self) -> Result<RgbaImage, AnalysisError> {
        Ok(self.image.clone())
    }
}
