//! Camera capture handle and public API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;

use super::capture_loop::run_capture_loop;
use super::device::list_devices;
use super::feed::FrameFeed;
use super::types::{CameraError, CameraSettings, Resolution};

/// Camera capture handle.
///
/// Owns the device through a single background thread that continuously
/// captures frames into a [`FrameFeed`]. Both the motion loop and the
/// display loop read from clones of that feed, so the device is never read
/// from two places at once.
///
/// Dropping the handle stops the thread and releases the device.
pub struct CameraCapture {
    feed: FrameFeed,
    capture_thread: Option<JoinHandle<()>>,
    stop_signal: Arc<AtomicBool>,
    settings: CameraSettings,
}

impl std::fmt::Debug for CameraCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraCapture")
            .field("settings", &self.settings)
            .field("is_running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl CameraCapture {
    /// Open a camera with the specified settings.
    ///
    /// This validates that the camera exists but doesn't open the stream
    /// until `start()` is called. The camera is opened inside the
    /// background thread to avoid thread-safety issues.
    ///
    /// # Errors
    /// * `CameraError::DeviceNotFound` - If the device index doesn't exist
    pub fn open(settings: CameraSettings) -> Result<Self, CameraError> {
        let devices = list_devices()?;
        if !devices.iter().any(|d| d.index == settings.device_index) {
            return Err(CameraError::DeviceNotFound(settings.device_index));
        }

        Ok(Self {
            feed: FrameFeed::new(),
            capture_thread: None,
            stop_signal: Arc::new(AtomicBool::new(false)),
            settings,
        })
    }

    /// A read handle onto the latest captured frame.
    pub fn feed(&self) -> FrameFeed {
        self.feed.clone()
    }

    /// Start capturing frames in a background thread.
    ///
    /// Blocks until the thread reports that the stream is open (or failed).
    ///
    /// # Errors
    /// * `CameraError::AlreadyRunning` - If capture is already running
    /// * `CameraError::StreamFailed` - If the camera stream fails to start
    /// * `CameraError::PermissionDenied` - If camera access is denied (macOS)
    /// * `CameraError::OpenFailed` - If camera fails to open for other reasons
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.is_running() {
            return Err(CameraError::AlreadyRunning);
        }

        self.stop_signal.store(false, Ordering::SeqCst);

        let feed = self.feed.clone();
        let stop = Arc::clone(&self.stop_signal);
        let settings = self.settings.clone();

        let (info_tx, info_rx) = mpsc::channel::<Result<(Resolution, u32), CameraError>>();

        let handle = std::thread::Builder::new()
            .name("camera-capture".to_string())
            .spawn(move || run_capture_loop(settings, feed, stop, info_tx))
            .map_err(|e| CameraError::StreamFailed(e.to_string()))?;

        self.capture_thread = Some(handle);

        match info_rx.recv() {
            Ok(Ok((res, fps))) => {
                log::info!(
                    "camera {} streaming at {}x{} @ {} fps",
                    self.settings.device_index,
                    res.width,
                    res.height,
                    fps
                );
                Ok(())
            }
            Ok(Err(e)) => {
                self.stop();
                Err(e)
            }
            Err(_) => {
                self.stop();
                Err(CameraError::StreamFailed(
                    "Capture thread terminated unexpectedly".to_string(),
                ))
            }
        }
    }

    /// Stop the capture thread and release the device.
    pub fn stop(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);

        if let Some(handle) = self.capture_thread.take() {
            let _ = handle.join();
        }
    }

    /// Check if the capture thread is currently running.
    pub fn is_running(&self) -> bool {
        self.capture_thread
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CameraCapture {
    fn drop(&mut self) {
        self.stop();
    }
}
