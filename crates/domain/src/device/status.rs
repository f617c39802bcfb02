//! Status derivation — the pure mapping from `(kind, mode)` to a display label.

use super::{DeviceKind, DeviceMode};

/// Derive the human-readable status label for a device.
///
/// Pure, total, and deterministic over both closed enumerations. Every mode
/// change must be accompanied by re-deriving this label; [`Device::set_mode`]
/// (the only mutation path) does so automatically.
///
/// [`Device::set_mode`]: super::Device::set_mode
#[must_use]
pub fn status_label(kind: DeviceKind, mode: DeviceMode) -> &'static str {
    match (kind, mode) {
        (DeviceKind::Ac | DeviceKind::Fridge, DeviceMode::Off) => "Standby",
        (DeviceKind::Washer | DeviceKind::Tv, DeviceMode::Off) => "Idle",
        (DeviceKind::Ac, DeviceMode::On) => "16°C Cold",
        (DeviceKind::Ac, DeviceMode::Eco) => "26°C Cool",
        (DeviceKind::Fridge, DeviceMode::On) => "2°C",
        (DeviceKind::Fridge, DeviceMode::Eco) => "5°C",
        (DeviceKind::Washer | DeviceKind::Tv, DeviceMode::On) => "Standard",
        (DeviceKind::Washer | DeviceKind::Tv, DeviceMode::Eco) => "Reduced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [DeviceKind; 4] = [
        DeviceKind::Ac,
        DeviceKind::Washer,
        DeviceKind::Fridge,
        DeviceKind::Tv,
    ];
    const ALL_MODES: [DeviceMode; 3] = [DeviceMode::On, DeviceMode::Off, DeviceMode::Eco];

    #[test]
    fn should_return_standby_when_ac_or_fridge_is_off() {
        assert_eq!(status_label(DeviceKind::Ac, DeviceMode::Off), "Standby");
        assert_eq!(status_label(DeviceKind::Fridge, DeviceMode::Off), "Standby");
    }

    #[test]
    fn should_return_idle_when_washer_or_tv_is_off() {
        assert_eq!(status_label(DeviceKind::Washer, DeviceMode::Off), "Idle");
        assert_eq!(status_label(DeviceKind::Tv, DeviceMode::Off), "Idle");
    }

    #[test]
    fn should_map_ac_running_modes_to_temperatures() {
        assert_eq!(status_label(DeviceKind::Ac, DeviceMode::On), "16°C Cold");
        assert_eq!(status_label(DeviceKind::Ac, DeviceMode::Eco), "26°C Cool");
    }

    #[test]
    fn should_map_fridge_running_modes_to_temperatures() {
        assert_eq!(status_label(DeviceKind::Fridge, DeviceMode::On), "2°C");
        assert_eq!(status_label(DeviceKind::Fridge, DeviceMode::Eco), "5°C");
    }

    #[test]
    fn should_map_washer_and_tv_running_modes_to_programs() {
        for kind in [DeviceKind::Washer, DeviceKind::Tv] {
            assert_eq!(status_label(kind, DeviceMode::On), "Standard");
            assert_eq!(status_label(kind, DeviceMode::Eco), "Reduced");
        }
    }

    #[test]
    fn should_be_idempotent_for_every_kind_mode_pair() {
        for kind in ALL_KINDS {
            for mode in ALL_MODES {
                assert_eq!(status_label(kind, mode), status_label(kind, mode));
            }
        }
    }

    #[test]
    fn should_never_return_an_empty_label() {
        for kind in ALL_KINDS {
            for mode in ALL_MODES {
                assert!(!status_label(kind, mode).is_empty());
            }
        }
    }
}
