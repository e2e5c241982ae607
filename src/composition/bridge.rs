//! Bridge between remote controls and the devices they drive.
//!
//! Remotes hold a reference to the `Device` capability and never know the
//! concrete device. Higher-level remotes compose lower-level ones instead of
//! extending them.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Lowest value a volume or channel can hold.
pub const MIN_LEVEL: i32 = 0;
/// Highest value a volume or channel can hold.
pub const MAX_LEVEL: i32 = 100;

const VOLUME_STEP: i32 = 10;
const CHANNEL_STEP: i32 = 1;

/// Initial configuration of a device.
///
/// Values outside [`MIN_LEVEL`]..=[`MAX_LEVEL`] are clamped when applied.
///
/// # Example
///
/// ```rust
/// use patterns::composition::{Device, DeviceSettings, Radio};
///
/// let settings: DeviceSettings = serde_json::from_str(r#"{"volume": 250}"#).unwrap();
/// let radio = Radio::with_settings(settings);
///
/// assert_eq!(radio.volume(), 100);
/// assert_eq!(radio.channel(), 1);
/// assert!(!radio.is_enabled());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    pub enabled: bool,
    pub volume: i32,
    pub channel: i32,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            volume: 30,
            channel: 1,
        }
    }
}

/// Implementation side of the bridge.
///
/// Setters clamp out-of-range values silently; they never fail.
pub trait Device {
    fn name(&self) -> &str;

    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);

    fn volume(&self) -> i32;
    fn set_volume(&mut self, volume: i32);

    fn channel(&self) -> i32;
    fn set_channel(&mut self, channel: i32);

    /// Multi-line status report.
    fn status(&self) -> String {
        [
            "--------------------------".to_string(),
            format!("| I'm {}.", self.name()),
            format!(
                "| I'm {}",
                if self.is_enabled() { "enabled" } else { "disabled" }
            ),
            format!("| Current volume is {}", self.volume()),
            format!("| Current channel is {}", self.channel()),
            "--------------------------".to_string(),
        ]
        .join("\n")
    }
}

/// Clamp a level into the valid device range.
pub fn clamp_level(value: i32) -> i32 {
    let clamped = value.clamp(MIN_LEVEL, MAX_LEVEL);
    if clamped != value {
        trace!(requested = value, stored = clamped, "Clamped device level");
    }
    clamped
}

/// Mutable state shared by every concrete device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Controls {
    enabled: bool,
    volume: i32,
    channel: i32,
}

impl From<DeviceSettings> for Controls {
    fn from(settings: DeviceSettings) -> Self {
        Self {
            enabled: settings.enabled,
            volume: clamp_level(settings.volume),
            channel: clamp_level(settings.channel),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radio {
    controls: Controls,
}

impl Radio {
    pub fn new() -> Self {
        Self::with_settings(DeviceSettings::default())
    }

    pub fn with_settings(settings: DeviceSettings) -> Self {
        Self {
            controls: settings.into(),
        }
    }
}

impl Default for Radio {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tv {
    controls: Controls,
}

impl Tv {
    pub fn new() -> Self {
        Self::with_settings(DeviceSettings::default())
    }

    pub fn with_settings(settings: DeviceSettings) -> Self {
        Self {
            controls: settings.into(),
        }
    }
}

impl Default for Tv {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_device {
    ($ty:ty, $name:literal) => {
        impl Device for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn is_enabled(&self) -> bool {
                self.controls.enabled
            }

            fn set_enabled(&mut self, enabled: bool) {
                self.controls.enabled = enabled;
            }

            fn volume(&self) -> i32 {
                self.controls.volume
            }

            fn set_volume(&mut self, volume: i32) {
                self.controls.volume = clamp_level(volume);
            }

            fn channel(&self) -> i32 {
                self.controls.channel
            }

            fn set_channel(&mut self, channel: i32) {
                self.controls.channel = clamp_level(channel);
            }
        }
    };
}

impl_device!(Radio, "radio");
impl_device!(Tv, "TV");

/// Abstraction side of the bridge.
pub trait Remote {
    fn power(&mut self);
    fn volume_down(&mut self);
    fn volume_up(&mut self);
    fn channel_down(&mut self);
    fn channel_up(&mut self);
}

/// Remote that delegates every button to the device it holds.
pub struct BasicRemote<'a> {
    device: &'a mut dyn Device,
}

impl<'a> BasicRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &dyn Device {
        &*self.device
    }
}

impl Remote for BasicRemote<'_> {
    fn power(&mut self) {
        let enabled = !self.device.is_enabled();
        debug!(device = self.device.name(), enabled, "Power toggled");
        self.device.set_enabled(enabled);
    }

    fn volume_down(&mut self) {
        let volume = self.device.volume() - VOLUME_STEP;
        self.device.set_volume(volume);
    }

    fn volume_up(&mut self) {
        let volume = self.device.volume() + VOLUME_STEP;
        self.device.set_volume(volume);
    }

    fn channel_down(&mut self) {
        let channel = self.device.channel() - CHANNEL_STEP;
        self.device.set_channel(channel);
    }

    fn channel_up(&mut self) {
        let channel = self.device.channel() + CHANNEL_STEP;
        self.device.set_channel(channel);
    }
}

/// Remote that adds `mute` on top of a [`BasicRemote`].
///
/// # Example
///
/// ```rust
/// use patterns::composition::{AdvancedRemote, Device, Remote, Tv};
///
/// let mut tv = Tv::new();
/// {
///     let mut remote = AdvancedRemote::new(&mut tv);
///     remote.mute();
///     remote.channel_up();
/// }
///
/// assert_eq!(tv.volume(), 0);
/// assert_eq!(tv.channel(), 2);
/// ```
pub struct AdvancedRemote<'a> {
    basic: BasicRemote<'a>,
}

impl<'a> AdvancedRemote<'a> {
    pub fn new(device: &'a mut dyn Device) -> Self {
        Self {
            basic: BasicRemote::new(device),
        }
    }

    pub fn mute(&mut self) {
        debug!(device = self.basic.device.name(), "Muted");
        self.basic.device.set_volume(MIN_LEVEL);
    }

    pub fn device(&self) -> &dyn Device {
        self.basic.device()
    }
}

impl Remote for AdvancedRemote<'_> {
    fn power(&mut self) {
        self.basic.power();
    }

    fn volume_down(&mut self) {
        self.basic.volume_down();
    }

    fn volume_up(&mut self) {
        self.basic.volume_up();
    }

    fn channel_down(&mut self) {
        self.basic.channel_down();
    }

    fn channel_up(&mut self) {
        self.basic.channel_up();
    }
}
