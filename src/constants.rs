// Web-side constants: page hooks, cursors and DOM event names.

// Auto-mount hooks
pub const MOUNT_SELECTOR: &str = "canvas[data-particles]";
pub const VARIANT_ATTR: &str = "data-particles"; // hearts | balloons | blossoms
pub const CONFIG_ATTR: &str = "data-particles-config"; // JSON overrides

// Cursor feedback while orbiting
pub const CURSOR_IDLE: &str = "grab";
pub const CURSOR_DRAGGING: &str = "grabbing";

// Canvas listener event names
pub const EV_POINTER_DOWN: &str = "pointerdown";
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_POINTER_UP: &str = "pointerup";
pub const EV_POINTER_LEAVE: &str = "pointerleave";
pub const EV_WHEEL: &str = "wheel";
pub const EV_CLICK: &str = "click";
pub const EV_RESIZE: &str = "resize";
