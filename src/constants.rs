// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

use std::time::Duration;

/// Storage key for the persisted postcard collection.
///
/// One slot holds the whole photobook as a JSON array. The suffix is a layout
/// version; bump it when the persisted shape changes incompatibly.
///
/// Used in: `application/photobook.rs`
pub const PHOTOBOOK_SLOT_KEY: &str = "wellpal_photobook_v1";

/// Storage key for the daily chat usage counter.
///
/// Used in: `application/usage_meter.rs`
pub const USAGE_SLOT_KEY: &str = "wellpal_daily_usage_v1";

/// Chat requests allowed per calendar day before the companion asks the user
/// to wait for tomorrow.
///
/// Used in: `application/usage_meter.rs`, `infrastructure/config.rs`
pub const DAILY_QUOTA: u32 = 10;

/// Degrees of card rotation per pixel of horizontal drag.
///
/// Used in: `application/flip_card.rs`, `infrastructure/config.rs`
pub const DRAG_SENSITIVITY: f64 = 1.0;

/// Length of the settle animation that brings a released card to its nearest
/// resting face.
///
/// Used in: `application/flip_card.rs`, `infrastructure/config.rs`
pub const SETTLE_DURATION: Duration = Duration::from_millis(400);

/// Frame interval of the cooperative settle driver, roughly 60 fps.
///
/// Used in: `infrastructure/frame_driver.rs`
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// File name of the optional TOML config inside the data directory.
///
/// Used in: `lib.rs`
pub const CONFIG_FILE_NAME: &str = "wellpal.toml";
