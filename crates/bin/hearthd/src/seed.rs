//! Demo data the server starts with.
//!
//! The in-memory adapters hold no data across restarts, so the daemon seeds
//! the same household every boot: four appliances, the built-in scenes, and
//! a couple of inbox items.

use hearth_domain::device::{Device, DeviceKind, DeviceMode};
use hearth_domain::error::HearthError;
use hearth_domain::fleet::Fleet;
use hearth_domain::notification::{Notification, NotificationKind};
use hearth_domain::scene::SceneTable;

/// Build the demo fleet.
///
/// # Errors
///
/// Returns a validation error if a seed device is malformed; with the fixed
/// data below this only fires if the seed itself is edited incorrectly.
pub fn fleet() -> Result<Fleet, HearthError> {
    let devices = vec![
        Device::builder()
            .name("Living Room AC")
            .kind(DeviceKind::Ac)
            .mode(DeviceMode::On)
            .energy("1.2 kWh")
            .build()?,
        Device::builder()
            .name("Smart Washer")
            .kind(DeviceKind::Washer)
            .energy("0.0 kWh")
            .build()?,
        Device::builder()
            .name("Kitchen Fridge")
            .kind(DeviceKind::Fridge)
            .mode(DeviceMode::Eco)
            .energy("0.8 kWh")
            .build()?,
        Device::builder()
            .name("Master Bedroom TV")
            .kind(DeviceKind::Tv)
            .energy("0.1 kWh")
            .build()?,
    ];
    Ok(Fleet::new(devices, SceneTable::builtin()))
}

/// Inbox items the demo starts with.
#[must_use]
pub fn notifications() -> Vec<Notification> {
    vec![
        Notification::new(
            NotificationKind::Alert,
            "High humidity warning",
            "Indoor humidity is unusually high today. Your washer's hot-water \
             mode can help keep laundry fresh.",
        ),
        Notification::new(
            NotificationKind::Offer,
            "Service voucher",
            "As a loyal customer you have a 20% discount on your next \
             maintenance appointment.",
        ),
    ]
}
