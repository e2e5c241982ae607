//! Bridge: remotes and devices
//!
//! This example drives a radio and a TV through basic and advanced remotes.
//!
//! Key concepts:
//! - A remote holds the device it controls and delegates every button
//! - The advanced remote composes the basic one and adds mute
//! - Device levels are clamped to [0, 100]
//! - Initial device settings can be loaded from JSON
//!
//! Run with: cargo run --example remote_control

use patterns::composition::{AdvancedRemote, BasicRemote, Device, DeviceSettings, Radio, Remote, Tv};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Bridge: Remote Control ===\n");

    let mut radio = Radio::new();
    {
        let mut remote = BasicRemote::new(&mut radio);
        remote.power();
        remote.volume_up();
        remote.channel_up();
    }
    println!("{}", radio.status());

    let settings: DeviceSettings = serde_json::from_str(r#"{ "enabled": true, "volume": 95 }"#)?;
    let mut tv = Tv::with_settings(settings);
    {
        let mut remote = AdvancedRemote::new(&mut tv);
        remote.volume_up();
        println!("After volume up near the top: {}", remote.device().volume());
        remote.mute();
        remote.channel_down();
    }
    println!("{}", tv.status());

    tv.set_volume(150);
    println!("Volume requested 150, stored {}", tv.volume());
    tv.set_volume(-20);
    println!("Volume requested -20, stored {}", tv.volume());

    println!("\n=== Example Complete ===");
    Ok(())
}
