//! Best-effort playback of a rendered buffer via cpal.

use crate::{Error, Result};
use cpal::Device;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Extract device name via `description()` (cpal 0.17+).
fn device_name(device: &Device) -> std::result::Result<String, cpal::DeviceNameError> {
    device.description().map(|d| d.name().to_string())
}

/// Find an output device by exact or case-insensitive partial name.
fn find_output_device(host: &cpal::Host, name: &str) -> Result<Device> {
    let devices = host
        .output_devices()
        .map_err(|e| Error::Stream(e.to_string()))?;

    let needle = name.to_lowercase();
    for device in devices {
        if let Ok(device_name) = device_name(&device) {
            if device_name == name || device_name.to_lowercase().contains(&needle) {
                return Ok(device);
            }
        }
    }

    Err(Error::DeviceNotFound(name.to_string()))
}

/// Play a mono 16-bit buffer through an output device, blocking until
/// the buffer has drained.
///
/// Best-effort by contract: the stream runs at the device's default
/// configuration, so a device rate that differs from `sample_rate`
/// shifts pitch instead of failing. Mono samples are duplicated across
/// all device channels. A system without any output device is a
/// reportable condition for the caller, not a panic.
pub fn play(samples: &[i16], sample_rate: u32, device: Option<&str>) -> Result<()> {
    let host = cpal::default_host();
    let device = match device {
        Some(name) => find_output_device(&host, name)?,
        None => host.default_output_device().ok_or(Error::NoDevice)?,
    };

    let config = device
        .default_output_config()
        .map_err(|e| Error::Stream(e.to_string()))?;
    let channels = config.channels() as usize;

    tracing::debug!(
        device = %device_name(&device).unwrap_or_default(),
        device_rate = config.sample_rate(),
        buffer_rate = sample_rate,
        frames = samples.len(),
        "opening playback stream"
    );

    // f32 copy for the audio callback; i16::MIN maps to -1.0.
    let data: Arc<Vec<f32>> = Arc::new(samples.iter().map(|&s| f32::from(s) / 32768.0).collect());
    let total = data.len();

    let position = Arc::new(AtomicUsize::new(0));
    let done = Arc::new(AtomicBool::new(false));

    let cb_position = Arc::clone(&position);
    let cb_done = Arc::clone(&done);
    let stream = device
        .build_output_stream(
            &config.into(),
            move |out: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let mut pos = cb_position.load(Ordering::Relaxed);
                for frame in out.chunks_mut(channels) {
                    let value = if pos < total { data[pos] } else { 0.0 };
                    frame.fill(value);
                    pos += 1;
                }
                if pos >= total {
                    pos = total;
                    cb_done.store(true, Ordering::Relaxed);
                }
                cb_position.store(pos, Ordering::Relaxed);
            },
            |err| tracing::warn!("output stream error: {err}"),
            None,
        )
        .map_err(|e| Error::Stream(e.to_string()))?;

    stream.play().map_err(|e| Error::Stream(e.to_string()))?;

    // Block until the callback has consumed the whole buffer, then give
    // the device a moment to flush its final period.
    while !done.load(Ordering::Relaxed) {
        std::thread::sleep(std::time::Duration::from_millis(20));
    }
    std::thread::sleep(std::time::Duration::from_millis(50));

    Ok(())
}
